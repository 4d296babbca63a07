// src/application/commands/replies/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult, Resource},
        ownership::ensure_reply_owner,
        ports::time::Clock,
    },
    domain::{
        article::ArticleRepository,
        reply::{Reply, ReplyId, ReplyRepository},
    },
};

pub struct ReplyCommandService {
    pub(super) articles: Arc<dyn ArticleRepository>,
    pub(super) replies: Arc<dyn ReplyRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ReplyCommandService {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        replies: Arc<dyn ReplyRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            articles,
            replies,
            clock,
        }
    }

    pub(super) async fn find_owned_reply(
        &self,
        actor: &AuthenticatedUser,
        id: ReplyId,
    ) -> ApplicationResult<Reply> {
        let reply = self
            .replies
            .find_by_id(id)
            .await?
            .ok_or(ApplicationError::NotFound(Resource::Reply))?;
        ensure_reply_owner(actor, &reply)?;
        Ok(reply)
    }
}

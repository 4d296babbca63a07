// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult, Resource},
        ownership::ensure_article_owner,
        ports::time::Clock,
    },
    domain::{
        article::{Article, ArticleId, ArticleRepository},
        reply::ReplyRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) articles: Arc<dyn ArticleRepository>,
    pub(super) replies: Arc<dyn ReplyRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
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

    /// Fetch the article and verify the actor wrote it. Absence is checked
    /// before ownership, so an unknown id always surfaces as not-found.
    pub(super) async fn find_owned_article(
        &self,
        actor: &AuthenticatedUser,
        id: ArticleId,
    ) -> ApplicationResult<Article> {
        let article = self
            .articles
            .find_by_id(id)
            .await?
            .ok_or(ApplicationError::NotFound(Resource::Article))?;
        ensure_article_owner(actor, &article)?;
        Ok(article)
    }
}

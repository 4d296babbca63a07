use super::ReplyCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ReplyDto},
        error::{ApplicationError, ApplicationResult, Resource},
    },
    domain::{
        article::ArticleId,
        reply::{Reply, ReplyContents},
    },
};

pub struct WriteReplyCommand {
    pub article_id: i64,
    pub contents: String,
}

impl ReplyCommandService {
    /// Attach a reply to an existing article. A missing target article is the
    /// caller's error, not a dangling reference.
    pub async fn write_reply(
        &self,
        actor: &AuthenticatedUser,
        command: WriteReplyCommand,
    ) -> ApplicationResult<ReplyDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let contents = ReplyContents::new(command.contents)?;

        self.articles
            .find_by_id(article_id)
            .await?
            .ok_or(ApplicationError::NotFound(Resource::Article))?;

        let reply = Reply::new(
            article_id,
            actor.user_id.clone(),
            contents,
            self.clock.now(),
        );

        let saved = self.replies.save(reply).await?;
        Ok(saved.into())
    }
}

// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult, Rejection},
    },
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Delete is gated twice: the actor must own the article, and no other
    /// user may have a reply attached to it. The owner's own replies do not
    /// block deletion. The count and the delete are separate round-trips; a
    /// reply arriving between them is an accepted race.
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.find_owned_article(actor, id).await?;

        let foreign_replies = self
            .replies
            .count_by_article_id_excluding_writer(&actor.user_id, id)
            .await?;
        if foreign_replies > 0 {
            return Err(ApplicationError::forbidden(Rejection::ForeignRepliesPresent));
        }

        self.articles.delete_by_id(id).await?;
        Ok(())
    }
}

use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleContents, ArticleId, ArticleTitle},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub contents: String,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let title = ArticleTitle::new(command.title)?;
        let contents = ArticleContents::new(command.contents)?;

        let mut article = self.find_owned_article(actor, id).await?;
        article.update(title, contents);

        // The fetched entity carries its id, so this save takes the
        // update path in the store.
        let saved = self.articles.save(article).await?;
        Ok(saved.into())
    }
}

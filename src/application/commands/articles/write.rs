// src/application/commands/articles/write.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{Article, ArticleContents, ArticleTitle},
};

pub struct WriteArticleCommand {
    pub title: String,
    pub contents: String,
}

impl ArticleCommandService {
    /// Post a new question. The writer always comes from the resolved
    /// identity, never from the request body.
    pub async fn write_article(
        &self,
        actor: &AuthenticatedUser,
        command: WriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let contents = ArticleContents::new(command.contents)?;

        let article = Article::new(
            actor.user_id.clone(),
            title,
            contents,
            self.clock.now(),
        );

        let saved = self.articles.save(article).await?;
        Ok(saved.into())
    }
}

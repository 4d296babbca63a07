use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult, Resource},
    },
    domain::article::ArticleId,
};

pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Detail view: the article plus its replies, with `reply_count` equal to
    /// the number of replies fetched in this call.
    pub async fn get_article_with_replies(
        &self,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .articles
            .find_by_id(id)
            .await?
            .ok_or(ApplicationError::NotFound(Resource::Article))?;

        let replies = self.replies.find_by_article_id(id).await?;
        Ok(ArticleDto::with_replies(article, replies))
    }
}

use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// Every article in primary-key order, as bare projections. This path
    /// never touches the reply store, so the projections carry no replies and
    /// a reply count of zero.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.articles.find_all().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}

use super::{ArticleQueryService, GetArticleQuery};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult, Resource},
        ownership::ensure_article_owner,
    },
    domain::article::ArticleId,
};

impl ArticleQueryService {
    /// Backs the edit form: only the writer may fetch the article through
    /// this path. Absence is reported before ownership is checked.
    pub async fn get_article_for_owner(
        &self,
        actor: &AuthenticatedUser,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .articles
            .find_by_id(id)
            .await?
            .ok_or(ApplicationError::NotFound(Resource::Article))?;
        ensure_article_owner(actor, &article)?;
        Ok(article.into())
    }
}

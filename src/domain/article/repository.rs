use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Keyed article store. The collection-backed and SQLite-backed
/// implementations satisfy the same observable contract; business logic only
/// ever sees this trait.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Insert-or-update, decided solely by identifier presence: an article
    /// without an id is inserted and returned with the assigned id, an
    /// article carrying an id has its mutable fields written through to the
    /// record with that id. No existence check happens before the decision,
    /// so saving an id that is not in the store updates nothing.
    async fn save(&self, article: Article) -> DomainResult<Article>;

    /// All articles in primary-key order.
    async fn find_all(&self) -> DomainResult<Vec<Article>>;

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Deleting an id that is not present is a no-op, not an error.
    async fn delete_by_id(&self, id: ArticleId) -> DomainResult<()>;

    /// Reset tooling only; request-serving code never calls this.
    async fn delete_all(&self) -> DomainResult<()>;
}

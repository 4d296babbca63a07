use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::reply::entity::Reply;
use crate::domain::reply::value_objects::ReplyId;
use crate::domain::user::WriterId;
use async_trait::async_trait;

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Same insert-or-update-by-identifier-presence policy as the article
    /// store.
    async fn save(&self, reply: Reply) -> DomainResult<Reply>;

    async fn find_by_id(&self, id: ReplyId) -> DomainResult<Option<Reply>>;

    /// Every reply attached to the article. Callers do not rely on ordering.
    async fn find_by_article_id(&self, article_id: ArticleId) -> DomainResult<Vec<Reply>>;

    /// Replies on the article whose writer is NOT `writer`. Computed inside
    /// the store so the deletability check stays a single round-trip no
    /// matter how many replies exist.
    async fn count_by_article_id_excluding_writer(
        &self,
        writer: &WriterId,
        article_id: ArticleId,
    ) -> DomainResult<u64>;

    async fn delete_by_id(&self, id: ReplyId) -> DomainResult<()>;
}

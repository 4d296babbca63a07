// src/infrastructure/repositories/memory.rs
//
// Collection-backed stores. One mutex per store serializes mutations against
// readers; operations are short and never block inside the lock.
use crate::domain::article::{Article, ArticleId, ArticleRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::reply::{Reply, ReplyId, ReplyRepository};
use crate::domain::user::WriterId;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Monotonic identifier source. Each store instance owns its own sequence,
/// so independent stores never interfere; identifiers are unique for the life
/// of the store and are not reused after deletion.
#[derive(Debug, Default)]
struct IdSequence {
    last: i64,
}

impl IdSequence {
    fn next(&mut self) -> i64 {
        self.last += 1;
        self.last
    }
}

fn lock_store<T>(mutex: &Mutex<T>) -> DomainResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| DomainError::Persistence("store lock poisoned".into()))
}

#[derive(Default)]
struct ArticleStoreState {
    seq: IdSequence,
    // BTreeMap keeps key order, which for monotonic ids is insertion order.
    rows: BTreeMap<i64, Article>,
}

#[derive(Default)]
pub struct MemoryArticleRepository {
    inner: Mutex<ArticleStoreState>,
}

impl MemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleRepository for MemoryArticleRepository {
    async fn save(&self, article: Article) -> DomainResult<Article> {
        let mut state = lock_store(&self.inner)?;
        match article.id {
            None => {
                let id = ArticleId::new(state.seq.next())?;
                let stored = article.with_id(id);
                state.rows.insert(id.into(), stored.clone());
                Ok(stored)
            }
            Some(id) => {
                // Mirrors the SQL backend: an id that is not in the store
                // updates nothing and the input comes back unchanged.
                match state.rows.get_mut(&i64::from(id)) {
                    Some(existing) => {
                        existing.update(article.title, article.contents);
                        Ok(existing.clone())
                    }
                    None => Ok(article),
                }
            }
        }
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let state = lock_store(&self.inner)?;
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = lock_store(&self.inner)?;
        Ok(state.rows.get(&i64::from(id)).cloned())
    }

    async fn delete_by_id(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = lock_store(&self.inner)?;
        state.rows.remove(&i64::from(id));
        Ok(())
    }

    async fn delete_all(&self) -> DomainResult<()> {
        let mut state = lock_store(&self.inner)?;
        // The sequence survives a clear: cleared identifiers stay retired.
        state.rows.clear();
        Ok(())
    }
}

#[derive(Default)]
struct ReplyStoreState {
    seq: IdSequence,
    rows: BTreeMap<i64, Reply>,
}

#[derive(Default)]
pub struct MemoryReplyRepository {
    inner: Mutex<ReplyStoreState>,
}

impl MemoryReplyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReplyRepository for MemoryReplyRepository {
    async fn save(&self, reply: Reply) -> DomainResult<Reply> {
        let mut state = lock_store(&self.inner)?;
        match reply.id {
            None => {
                let id = ReplyId::new(state.seq.next())?;
                let stored = reply.with_id(id);
                state.rows.insert(id.into(), stored.clone());
                Ok(stored)
            }
            Some(id) => match state.rows.get_mut(&i64::from(id)) {
                Some(existing) => {
                    existing.contents = reply.contents;
                    Ok(existing.clone())
                }
                None => Ok(reply),
            },
        }
    }

    async fn find_by_id(&self, id: ReplyId) -> DomainResult<Option<Reply>> {
        let state = lock_store(&self.inner)?;
        Ok(state.rows.get(&i64::from(id)).cloned())
    }

    async fn find_by_article_id(&self, article_id: ArticleId) -> DomainResult<Vec<Reply>> {
        let state = lock_store(&self.inner)?;
        Ok(state
            .rows
            .values()
            .filter(|reply| reply.article_id == article_id)
            .cloned()
            .collect())
    }

    async fn count_by_article_id_excluding_writer(
        &self,
        writer: &WriterId,
        article_id: ArticleId,
    ) -> DomainResult<u64> {
        let state = lock_store(&self.inner)?;
        Ok(state
            .rows
            .values()
            .filter(|reply| reply.article_id == article_id && !reply.is_written_by(writer))
            .count() as u64)
    }

    async fn delete_by_id(&self, id: ReplyId) -> DomainResult<()> {
        let mut state = lock_store(&self.inner)?;
        state.rows.remove(&i64::from(id));
        Ok(())
    }
}

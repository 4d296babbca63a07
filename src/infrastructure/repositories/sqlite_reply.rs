use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::reply::{Reply, ReplyContents, ReplyId, ReplyRepository};
use crate::domain::user::WriterId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::map_error;

#[derive(Clone)]
pub struct SqliteReplyRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteReplyRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReplyRow {
    id: i64,
    article_id: i64,
    writer: String,
    contents: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReplyRow> for Reply {
    type Error = DomainError;

    fn try_from(row: ReplyRow) -> Result<Self, Self::Error> {
        Ok(Reply {
            id: Some(ReplyId::new(row.id)?),
            article_id: ArticleId::new(row.article_id)?,
            writer: WriterId::new(row.writer)?,
            contents: ReplyContents::new(row.contents)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ReplyRepository for SqliteReplyRepository {
    async fn save(&self, reply: Reply) -> DomainResult<Reply> {
        match reply.id {
            None => {
                let row = sqlx::query_as::<_, ReplyRow>(
                    "INSERT INTO replies (article_id, writer, contents, created_at) VALUES (?, ?, ?, ?) RETURNING id, article_id, writer, contents, created_at",
                )
                .bind(i64::from(reply.article_id))
                .bind(reply.writer.as_str())
                .bind(reply.contents.as_str())
                .bind(reply.created_at)
                .fetch_one(&*self.pool)
                .await
                .map_err(map_error)?;

                Reply::try_from(row)
            }
            Some(id) => {
                sqlx::query("UPDATE replies SET contents = ? WHERE id = ?")
                    .bind(reply.contents.as_str())
                    .bind(i64::from(id))
                    .execute(&*self.pool)
                    .await
                    .map_err(map_error)?;

                Ok(reply)
            }
        }
    }

    async fn find_by_id(&self, id: ReplyId) -> DomainResult<Option<Reply>> {
        let row = sqlx::query_as::<_, ReplyRow>(
            "SELECT id, article_id, writer, contents, created_at FROM replies WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Reply::try_from).transpose()
    }

    async fn find_by_article_id(&self, article_id: ArticleId) -> DomainResult<Vec<Reply>> {
        let rows = sqlx::query_as::<_, ReplyRow>(
            "SELECT id, article_id, writer, contents, created_at FROM replies WHERE article_id = ?",
        )
        .bind(i64::from(article_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(Reply::try_from).collect()
    }

    async fn count_by_article_id_excluding_writer(
        &self,
        writer: &WriterId,
        article_id: ArticleId,
    ) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM replies WHERE article_id = ? AND writer <> ?",
        )
        .bind(i64::from(article_id))
        .bind(writer.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Ok(count as u64)
    }

    async fn delete_by_id(&self, id: ReplyId) -> DomainResult<()> {
        sqlx::query("DELETE FROM replies WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(())
    }
}

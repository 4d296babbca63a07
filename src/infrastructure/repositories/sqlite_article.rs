use crate::domain::article::{Article, ArticleContents, ArticleId, ArticleRepository, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::WriterId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::map_error;

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    writer: String,
    title: String,
    contents: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: Some(ArticleId::new(row.id)?),
            writer: WriterId::new(row.writer)?,
            title: ArticleTitle::new(row.title)?,
            contents: ArticleContents::new(row.contents)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn save(&self, article: Article) -> DomainResult<Article> {
        match article.id {
            // RETURNING surfaces the auto-increment key assigned by the
            // engine; the returned row is the stored state.
            None => {
                let row = sqlx::query_as::<_, ArticleRow>(
                    "INSERT INTO articles (writer, title, contents, created_at) VALUES (?, ?, ?, ?) RETURNING id, writer, title, contents, created_at",
                )
                .bind(article.writer.as_str())
                .bind(article.title.as_str())
                .bind(article.contents.as_str())
                .bind(article.created_at)
                .fetch_one(&*self.pool)
                .await
                .map_err(map_error)?;

                Article::try_from(row)
            }
            // Identifier presence alone selects the update path. An id with
            // no matching row updates zero rows and the input comes back
            // unchanged; the store does not check first.
            Some(id) => {
                sqlx::query("UPDATE articles SET title = ?, contents = ? WHERE id = ?")
                    .bind(article.title.as_str())
                    .bind(article.contents.as_str())
                    .bind(i64::from(id))
                    .execute(&*self.pool)
                    .await
                    .map_err(map_error)?;

                Ok(article)
            }
        }
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, writer, title, contents, created_at FROM articles ORDER BY id",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, writer, title, contents, created_at FROM articles WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Article::try_from).transpose()
    }

    async fn delete_by_id(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(())
    }

    async fn delete_all(&self) -> DomainResult<()> {
        sqlx::query("DELETE FROM articles")
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(())
    }
}

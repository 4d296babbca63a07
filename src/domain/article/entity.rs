// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContents, ArticleId, ArticleTitle};
use crate::domain::user::WriterId;
use chrono::{DateTime, Utc};

/// A posted question. `id` is `None` until the article has been saved once;
/// the store assigns the identifier and it never changes afterwards.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: Option<ArticleId>,
    pub writer: WriterId,
    pub title: ArticleTitle,
    pub contents: ArticleContents,
    pub created_at: DateTime<Utc>,
}

impl Article {
    pub fn new(
        writer: WriterId,
        title: ArticleTitle,
        contents: ArticleContents,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            writer,
            title,
            contents,
            created_at,
        }
    }

    pub fn with_id(mut self, id: ArticleId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_written_by(&self, user_id: &WriterId) -> bool {
        self.writer == *user_id
    }

    /// Overwrite the mutable fields. Writer and creation time stay as
    /// originally assigned.
    pub fn update(&mut self, title: ArticleTitle, contents: ArticleContents) {
        self.title = title;
        self.contents = contents;
    }
}

/// Identity is the assigned id alone; an article that has not been persisted
/// yet is never equal to anything, itself included.
impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

// src/domain/reply/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::reply::value_objects::{ReplyContents, ReplyId};
use crate::domain::user::WriterId;
use chrono::{DateTime, Utc};

/// A comment attached to exactly one article. Same identifier lifecycle as
/// `Article`: `id` is `None` until the first save assigns one.
#[derive(Debug, Clone)]
pub struct Reply {
    pub id: Option<ReplyId>,
    pub article_id: ArticleId,
    pub writer: WriterId,
    pub contents: ReplyContents,
    pub created_at: DateTime<Utc>,
}

impl Reply {
    pub fn new(
        article_id: ArticleId,
        writer: WriterId,
        contents: ReplyContents,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            article_id,
            writer,
            contents,
            created_at,
        }
    }

    pub fn with_id(mut self, id: ReplyId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_written_by(&self, user_id: &WriterId) -> bool {
        self.writer == *user_id
    }
}

impl PartialEq for Reply {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

use crate::domain::reply::Reply;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyDto {
    pub id: Option<i64>,
    pub article_id: i64,
    pub writer: String,
    pub contents: String,
    pub created_at: DateTime<Utc>,
}

impl From<Reply> for ReplyDto {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id.map(i64::from),
            article_id: reply.article_id.into(),
            writer: reply.writer.into(),
            contents: reply.contents.into(),
            created_at: reply.created_at,
        }
    }
}

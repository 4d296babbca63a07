use super::replies::ReplyDto;
use crate::domain::article::Article;
use crate::domain::reply::Reply;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-oriented projection of an article. The plain `From<Article>`
/// conversion leaves the relation fields empty; the list path never attaches
/// replies and reports a reply count of zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: Option<i64>,
    pub writer: String,
    pub title: String,
    pub contents: String,
    pub created_at: DateTime<Utc>,
    pub replies: Vec<ReplyDto>,
    pub reply_count: usize,
}

impl ArticleDto {
    /// Projection with the fetched reply list attached; `reply_count` is the
    /// length of that list.
    pub fn with_replies(article: Article, replies: Vec<Reply>) -> Self {
        let replies: Vec<ReplyDto> = replies.into_iter().map(Into::into).collect();
        let reply_count = replies.len();
        Self {
            replies,
            reply_count,
            ..Self::from(article)
        }
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.map(i64::from),
            writer: article.writer.into(),
            title: article.title.into(),
            contents: article.contents.into(),
            created_at: article.created_at,
            replies: Vec::new(),
            reply_count: 0,
        }
    }
}

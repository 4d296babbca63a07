use std::sync::Arc;

use crate::domain::{article::ArticleRepository, reply::ReplyRepository};

pub struct ArticleQueryService {
    pub(super) articles: Arc<dyn ArticleRepository>,
    pub(super) replies: Arc<dyn ReplyRepository>,
}

impl ArticleQueryService {
    pub fn new(articles: Arc<dyn ArticleRepository>, replies: Arc<dyn ReplyRepository>) -> Self {
        Self { articles, replies }
    }
}

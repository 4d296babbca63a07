// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, replies::ReplyCommandService},
        ports::time::Clock,
        queries::articles::ArticleQueryService,
    },
    domain::{article::ArticleRepository, reply::ReplyRepository},
};

/// The wired service graph. Both storage backends plug in through the same
/// two repository traits, so the services never know which one is behind
/// them.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub reply_commands: Arc<ReplyCommandService>,
}

impl ApplicationServices {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        replies: Arc<dyn ReplyRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&articles),
            Arc::clone(&replies),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&articles),
            Arc::clone(&replies),
        ));

        let reply_commands = Arc::new(ReplyCommandService::new(
            Arc::clone(&articles),
            Arc::clone(&replies),
            Arc::clone(&clock),
        ));

        Self {
            article_commands,
            article_queries,
            reply_commands,
        }
    }
}

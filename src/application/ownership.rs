// src/application/ownership.rs
//
// Shared authorization checks. Ownership is a plain writer-id comparison and
// is re-evaluated on every call; nothing here is cached.
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult, Rejection},
};
use crate::domain::{article::Article, reply::Reply};

pub(crate) fn ensure_article_owner(
    actor: &AuthenticatedUser,
    article: &Article,
) -> ApplicationResult<()> {
    if article.is_written_by(&actor.user_id) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(Rejection::NotArticleOwner))
    }
}

pub(crate) fn ensure_reply_owner(
    actor: &AuthenticatedUser,
    reply: &Reply,
) -> ApplicationResult<()> {
    if reply.is_written_by(&actor.user_id) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(Rejection::NotReplyOwner))
    }
}

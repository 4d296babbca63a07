// src/application/error.rs
use crate::domain::errors::DomainError;
use std::fmt;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Which entity a `NotFound` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Article,
    Reply,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Article => f.write_str("article"),
            Self::Reply => f.write_str("reply"),
        }
    }
}

/// Why a mutation was refused. `ForeignRepliesPresent` is kept separate from
/// the plain ownership rejections so the transport layer can tell the caller
/// which rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotArticleOwner,
    NotReplyOwner,
    ForeignRepliesPresent,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotArticleOwner => f.write_str("cannot edit or delete another user's article"),
            Self::NotReplyOwner => f.write_str("cannot edit or delete another user's reply"),
            Self::ForeignRepliesPresent => {
                f.write_str("cannot delete an article that has replies from other users")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(Resource),

    #[error("forbidden: {0}")]
    Forbidden(Rejection),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(resource: Resource) -> Self {
        Self::NotFound(resource)
    }

    pub fn forbidden(rejection: Rejection) -> Self {
        Self::Forbidden(rejection)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

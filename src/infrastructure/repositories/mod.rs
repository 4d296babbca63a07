// src/infrastructure/repositories/mod.rs
mod memory;
mod sqlite_article;
mod sqlite_reply;

pub use memory::{MemoryArticleRepository, MemoryReplyRepository};
pub use sqlite_article::SqliteArticleRepository;
pub use sqlite_reply::SqliteReplyRepository;

use crate::domain::errors::DomainError;

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

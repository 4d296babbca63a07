// src/domain/user.rs
//
// User accounts are managed outside this crate; all the core ever sees of a
// user is the string identifier attached to articles and replies.
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WriterId(String);

impl WriterId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("writer id cannot be blank".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WriterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<WriterId> for String {
    fn from(value: WriterId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_writer_id_is_rejected() {
        assert!(WriterId::new("").is_err());
        assert!(WriterId::new("   ").is_err());
    }

    #[test]
    fn writer_id_round_trips() {
        let id = WriterId::new("writer").unwrap();
        assert_eq!(id.as_str(), "writer");
        assert_eq!(String::from(id), "writer");
    }
}

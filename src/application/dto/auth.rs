use crate::domain::user::WriterId;

/// The identity the transport layer resolved for the current request. Every
/// mutating service entry point receives one; requests without a resolvable
/// identity are rejected before they reach the services.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: WriterId,
}

impl AuthenticatedUser {
    pub fn new(user_id: WriterId) -> Self {
        Self { user_id }
    }
}

// src/presentation/http/extractors.rs
//
// Identity resolution happens entirely at this boundary. Upstream session
// middleware is expected to place the resolved user id in the `x-user-id`
// header; the services below this layer always receive an already-resolved
// identity.
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    domain::user::WriterId,
};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized("missing identity header"))
            })?;

        let user_id = WriterId::new(value).map_err(|_| {
            HttpError::from_error(ApplicationError::unauthorized("blank identity header"))
        })?;

        Ok(Self(AuthenticatedUser::new(user_id)))
    }
}

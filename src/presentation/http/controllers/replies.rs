// src/presentation/http/controllers/replies.rs
use crate::application::{
    commands::replies::{DeleteReplyCommand, WriteReplyCommand},
    dto::ReplyDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ReplySaveRequest {
    pub contents: String,
}

pub async fn write_reply(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(article_id): Path<i64>,
    Json(payload): Json<ReplySaveRequest>,
) -> HttpResult<Json<ReplyDto>> {
    let command = WriteReplyCommand {
        article_id,
        contents: payload.contents,
    };

    state
        .services
        .reply_commands
        .write_reply(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_reply(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .reply_commands
        .delete_reply(&user, DeleteReplyCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

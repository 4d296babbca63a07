// tests/e2e_http.rs
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

const BODY_LIMIT: usize = 1024 * 1024;

fn request(method: &str, uri: &str, user: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    match body {
        Some(value) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_returns_ok() {
    let app = support::make_router();
    let (status, body) = send(&app, request("GET", "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn posting_an_article_requires_an_identity() {
    let app = support::make_router();

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/v1/articles",
            None,
            Some(json!({ "title": "title", "contents": "contents" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn article_lifecycle_over_http() {
    let app = support::make_router();

    // Write: the writer comes from the identity header, not the body.
    let (status, article) = send(
        &app,
        request(
            "POST",
            "/api/v1/articles",
            Some("writer"),
            Some(json!({ "title": "title", "contents": "contents" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(article["id"], 1);
    assert_eq!(article["writer"], "writer");

    // List shows the article without replies attached.
    let (status, listed) = send(&app, request("GET", "/api/v1/articles", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["reply_count"], 0);

    // A visitor replies; the detail view now carries the reply and its count.
    let (status, reply) = send(
        &app,
        request(
            "POST",
            "/api/v1/articles/1/replies",
            Some("visitor"),
            Some(json!({ "contents": "a reply" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["article_id"], 1);

    let (status, detail) = send(&app, request("GET", "/api/v1/articles/1", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["reply_count"], 1);
    assert_eq!(detail["replies"][0]["writer"], "visitor");

    // The foreign reply blocks deletion, with its own forbidden reason.
    let (status, error) = send(
        &app,
        request("DELETE", "/api/v1/articles/1", Some("writer"), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(
        error["message"]
            .as_str()
            .unwrap()
            .contains("replies from other users")
    );

    // The visitor withdraws the reply and the owner deletes the article.
    let (status, _) = send(
        &app,
        request("DELETE", "/api/v1/replies/1", Some("visitor"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        request("DELETE", "/api/v1/articles/1", Some("writer"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, request("GET", "/api/v1/articles/1", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn editing_another_users_article_is_forbidden() {
    let app = support::make_router();

    send(
        &app,
        request(
            "POST",
            "/api/v1/articles",
            Some("writer"),
            Some(json!({ "title": "title", "contents": "contents" })),
        ),
    )
    .await;

    let (status, error) = send(
        &app,
        request(
            "PUT",
            "/api/v1/articles/1",
            Some("other"),
            Some(json!({ "title": "hijack", "contents": "hijack" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error["error"], "Forbidden");

    let (status, _) = send(
        &app,
        request("GET", "/api/v1/articles/1/edit", Some("other"), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, owned) = send(
        &app,
        request("GET", "/api/v1/articles/1/edit", Some("writer"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(owned["title"], "title");
}

#[tokio::test]
async fn unknown_articles_map_to_404() {
    let app = support::make_router();

    let (status, _) = send(&app, request("GET", "/api/v1/articles/999999", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        request(
            "PUT",
            "/api/v1/articles/999999",
            Some("anyone"),
            Some(json!({ "title": "title", "contents": "contents" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_request_fields_map_to_400() {
    let app = support::make_router();

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/v1/articles",
            Some("writer"),
            Some(json!({ "title": "   ", "contents": "contents" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

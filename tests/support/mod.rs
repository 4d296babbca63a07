// tests/support/mod.rs
#![allow(dead_code)]

use std::sync::Arc;

use cafe_core::application::dto::AuthenticatedUser;
use cafe_core::application::ports::time::Clock;
use cafe_core::application::services::ApplicationServices;
use cafe_core::domain::article::ArticleRepository;
use cafe_core::domain::reply::ReplyRepository;
use cafe_core::domain::user::WriterId;
use cafe_core::infrastructure::database;
use cafe_core::infrastructure::repositories::{MemoryArticleRepository, MemoryReplyRepository};
use cafe_core::presentation::http::routes::build_router;
use cafe_core::presentation::http::state::HttpState;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

/// Clock pinned to a known instant so timestamps can be asserted exactly.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 4, 1, 12, 0, 0).unwrap()
}

pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub articles: Arc<dyn ArticleRepository>,
    pub replies: Arc<dyn ReplyRepository>,
}

/// Service graph over fresh in-memory stores and a fixed clock.
pub fn memory_services() -> TestContext {
    let articles: Arc<dyn ArticleRepository> = Arc::new(MemoryArticleRepository::new());
    let replies: Arc<dyn ReplyRepository> = Arc::new(MemoryReplyRepository::new());
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(fixed_now()));

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&articles),
        Arc::clone(&replies),
        clock,
    ));

    TestContext {
        services,
        articles,
        replies,
    }
}

pub fn make_router() -> axum::Router {
    let context = memory_services();
    build_router(HttpState {
        services: context.services,
    })
}

pub fn actor(user_id: &str) -> AuthenticatedUser {
    AuthenticatedUser::new(WriterId::new(user_id).unwrap())
}

/// An in-memory SQLite database with the migrations applied. A single
/// connection is mandatory: every `sqlite::memory:` connection is its own
/// database.
pub async fn sqlite_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");

    database::run_migrations(&pool)
        .await
        .expect("apply migrations");

    pool
}

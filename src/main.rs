use anyhow::Result;
use cafe_core::application::{ports::time::Clock, services::ApplicationServices};
use cafe_core::config::{AppConfig, StoreBackend};
use cafe_core::domain::{article::ArticleRepository, reply::ReplyRepository};
use cafe_core::infrastructure::{
    database,
    repositories::{
        MemoryArticleRepository, MemoryReplyRepository, SqliteArticleRepository,
        SqliteReplyRepository,
    },
    time::SystemClock,
};
use cafe_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let (articles, replies): (Arc<dyn ArticleRepository>, Arc<dyn ReplyRepository>) =
        match config.store_backend() {
            StoreBackend::Memory => {
                tracing::info!("using in-memory stores");
                (
                    Arc::new(MemoryArticleRepository::new()),
                    Arc::new(MemoryReplyRepository::new()),
                )
            }
            StoreBackend::Sqlite => {
                let pool = database::init_pool(config.database_url()).await?;
                database::run_migrations(&pool).await?;
                let pool = Arc::new(pool);
                tracing::info!(url = config.database_url(), "using sqlite stores");
                (
                    Arc::new(SqliteArticleRepository::new(Arc::clone(&pool))),
                    Arc::new(SqliteReplyRepository::new(Arc::clone(&pool))),
                )
            }
        };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let services = Arc::new(ApplicationServices::new(articles, replies, clock));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}

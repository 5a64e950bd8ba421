use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use books_api::bootstrap::app_context::{AppContext, AppServices};
use books_api::bootstrap::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| {
            "books_api=debug,axum=info,tower_http=info,sqlx=warn".into()
        }))
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting books API");

    // Database
    let pool =
        books_api::infrastructure::db::connect_pool(&cfg.database_url, cfg.db_max_connections)
            .await?;
    books_api::infrastructure::db::migrate(&pool).await?;

    let book_repo = Arc::new(
        books_api::infrastructure::db::repositories::book_repository_sqlx::SqlxBookRepository::new(
            pool.clone(),
        ),
    );
    let api_port = cfg.api_port;
    let ctx = AppContext::new(cfg, AppServices::new(book_repo));

    let app = books_api::presentation::http::router(ctx, pool.clone());

    let api_addr = SocketAddr::from(([0, 0, 0, 0], api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Books API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = ?e, "ctrl_c_handler_failed");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = ?e, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

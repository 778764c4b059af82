//! Books API server: loads config from env (and `.env`), ensures the database and
//! books table exist, then serves the router until Ctrl-C or SIGTERM.

use books_api::{
    app,
    apply_migrations,
    connect_pool,
    ensure_database_exists,
    AppState,
    PgBookGateway,
    ServerConfig,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("books_api=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    ensure_database_exists(&config.database_url).await?;
    let pool = connect_pool(&config).await?;
    if config.skip_migrations {
        tracing::info!("SKIP_MIGRATIONS set, not touching schema");
    } else {
        apply_migrations(&pool).await?;
    }

    let state = AppState::new(PgBookGateway::new(pool.clone()));
    let router = app(state, config.body_limit_bytes);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received");
}

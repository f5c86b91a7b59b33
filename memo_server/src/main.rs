//! Memo API server.
//!
//! Run from repo root: `cargo run -p memo-server --bin memo-server`
//! Settings come from the environment or a `.env` file; see `memo_api::config`.

use memo_api::{app, connect, ensure_schema, logging, AppState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;
    let _log = logging::init(&settings.log)?;

    let pool = connect(&settings.database).await?;
    ensure_schema(&pool).await?;

    let router = app(AppState::new(pool.clone()), settings.cors_origin.clone());
    let listener = TcpListener::bind(settings.bind_address).await?;
    tracing::info!(
        "memo-server v{} listening on http://{}",
        env!("CARGO_PKG_VERSION"),
        listener.local_addr()?
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("memo-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }
}

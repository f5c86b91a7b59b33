//! Drop and recreate the memos table. Destroys all stored memos; development use only.
//!
//! `cargo run -p memo-server --bin init-db`

use memo_api::{connect, logging, reset_schema, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;
    let _log = logging::init(&settings.log)?;

    tracing::info!(url = %settings.database.url, "initializing database");
    let pool = connect(&settings.database).await?;
    reset_schema(&pool).await?;
    pool.close().await;
    tracing::info!("database initialized");
    Ok(())
}

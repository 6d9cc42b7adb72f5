use tracing_subscriber::EnvFilter;

use medroster_core::{Database, RecordService};
use medroster_server::config::{ServerConfig, IN_MEMORY};
use medroster_server::routes::app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let db = if config.db_path == IN_MEMORY {
        tracing::warn!("using in-memory store; records will not survive restart");
        Database::open_in_memory()?
    } else {
        Database::open(&config.db_path)?
    };
    let service = RecordService::new(db);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(service)).await?;
    Ok(())
}

use anyhow::Context;
use placeregistry::{
    config::ServerConfig,
    logging::{init_logging, Verbosity},
    store, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(Verbosity::Normal);

    let config = ServerConfig::from_env()?;

    let db_pool = store::connect(&config.database_url)
        .await
        .with_context(|| format!("connecting to {}", config.database_url))?;
    store::migrate(&db_pool).await.context("creating records table")?;

    let app = placeregistry::app(AppState { db_pool });

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "record store listening");

    axum::serve(listener, app).await?;
    Ok(())
}

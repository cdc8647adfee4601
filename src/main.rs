use kv_httpd::config::Config;
use kv_httpd::{MemoryStore, Service};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("kv-httpd starting");

    let config = Config::from_env()?;
    config.log_startup();

    let mut service = Service::new(config.bind_addr(), Arc::new(MemoryStore::new()))
        .with_docs(config.enable_docs);
    service.start().await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");

    service.close().await
}

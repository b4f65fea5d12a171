use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use marquee::{Config, Server, api};

#[tokio::main]
async fn main() -> Result<(), marquee::Error> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level)
                .unwrap_or_else(|_| EnvFilter::new(marquee::config::DEFAULT_LOG_LEVEL)),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let store = Arc::new(config.store());
    info!(movies = store.len(), "catalog ready");

    let server = Server::bind(config.addr.as_str()).await?;
    server.serve(api::routes(store)).await
}

//! Service entry point.

use clap::Parser;
use genre_registry::{Config, Registry, Server, api};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let registry = Registry::seeded();

    Server::bind(&config.listen_addr())
        .serve(api::routes(), registry)
        .await
        .expect("server error");
}

//! Development server for the climate dashboard client
//!
//! Serves the mock backend with its canned dataset on a fixed port, so the
//! `dashboard` viewer can be used without the real backend.
//!
//! Usage: cargo run -p dev-server
//!
//! The port defaults to 8080 and can be changed with the PORT environment
//! variable.

use actix_web::web;
use anyhow::Result;
use dashboard::telemetry::{get_subscriber, init_subscriber, log_error};
use test_helpers::API_PREFIX;
use test_helpers::backend::{self, BackendState, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber);

    let port = match std::env::var("PORT") {
        Ok(port) => port.parse()?,
        Err(_) => 8080,
    };
    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        prefix: API_PREFIX.into(),
    };
    let state = web::Data::new(BackendState::new(API_PREFIX));
    let server = backend::build(&mut config, state)?;
    let handle = server.handle();
    tokio::spawn(async move {
        if let Err(e) = server.await {
            log_error(e);
        }
    });

    let api_url = format!("http://127.0.0.1:{}{API_PREFIX}", config.port);
    info!("Mock climate API running on {api_url}");
    info!(
        "Try: CLIMATE_API_URL={api_url} cargo run -p dashboard -- main --city almaty"
    );
    info!("Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("Shutting down development server");
    handle.stop(true).await;
    Ok(())
}

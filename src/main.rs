//! Menara Merah Putih site server: Leptos SSR on Axum.

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use leptos::config::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal outside development.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "mmp-site exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let config = ServerConfig::from_env(leptos_options.site_addr)?;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, "mmp-site listening");
    axum::serve(listener, app).await?;
    Ok(())
}

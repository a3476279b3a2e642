mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).map_err(|e| ServerError::Config(format!("leptos configuration: {e}")))?;
    let leptos_options = conf.leptos_options;
    let config = ServerConfig::resolve(leptos_options.site_addr)?;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, "food server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

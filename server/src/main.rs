mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let leptos_options = routes::leptos_options()?;

    tracing::info!(api_url = client::config::api_base_url(), "backend API base URL");

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(addr = %config.bind_addr(), "costlens listening");
    axum::serve(listener, app).await?;
    Ok(())
}

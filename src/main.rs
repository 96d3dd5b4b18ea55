mod annotate;
mod config;
mod error;
mod inference_service;
mod memory;
mod routes;
mod state;
mod tagger;
mod translate;
mod tree;
mod types;
mod utils;

use anyhow::Result;
use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("lingua_backend=debug,tower_http=debug")
        .init();

    let config_paths: Vec<String> = [std::env::var("CONFIG_PATH").ok(), Some("conf.yaml".to_string())]
        .into_iter()
        .flatten()
        .collect();

    let mut config = None;
    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                info!("Loaded configuration from: {}", path);
                config = Some(cfg);
                break;
            }
            Err(err) => {
                tracing::debug!("Failed to load config from {}: {}", path, err);
            }
        }
    }
    let config = config.unwrap_or_else(|| {
        info!("No config file found, using defaults");
        Config::default()
    });

    let app_state = AppState::new(config)?;
    let server = app_state.config.server.clone();

    // Only the local frontend may call us; credentials mode forbids the
    // header wildcard, so request headers are mirrored instead.
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse::<HeaderValue>()?,
            "http://127.0.0.1:3000".parse::<HeaderValue>()?,
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let app = routes::create_routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    let addr = SocketAddr::new(server.host.parse()?, server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

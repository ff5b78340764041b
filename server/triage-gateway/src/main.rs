//! Binary entrypoint for the triage gateway.

use axum::{routing::get, routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use triage_gateway::{AppState, ServiceClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .init();

  let classifier_url =
    std::env::var("CLASSIFIER_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".into());
  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "5006".into())
    .parse()
    .expect("PORT must be a valid u16");

  let state = Arc::new(AppState {
    client: ServiceClient::new(classifier_url),
  });

  let app = Router::new()
    .route("/health", get(triage_gateway::health))
    .route("/normalize", post(triage_gateway::normalize_text))
    .route("/analyze", post(triage_gateway::analyze))
    .route("/dashboard", get(triage_gateway::dashboard))
    .route("/search", post(triage_gateway::search))
    .layer(CorsLayer::permissive())
    .with_state(state);

  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  tracing::info!("triage-gateway listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}

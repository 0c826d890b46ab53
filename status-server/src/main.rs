use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use status_server::fetcher::StatusFetcher;
use status_server::tfl::{TflClient, TflClientConfig};
use status_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Anonymous access works, but TfL rate-limits it aggressively
    let mut config = TflClientConfig::new();
    match std::env::var("TFL_APP_KEY") {
        Ok(key) if !key.is_empty() => config = config.with_app_key(key),
        _ => tracing::warn!("TFL_APP_KEY not set; using anonymous access"),
    }

    let client = TflClient::new(config).expect("Failed to create TfL client");
    let state = AppState::new(StatusFetcher::new(client));

    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Transit status server listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET /health                        - Health check");
    println!("  GET /api/line-status?line=victoria - Line status summary");
    println!("  GET /api/arrivals?stopPoint=<id>   - Raw arrival predictions");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}

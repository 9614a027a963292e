use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use subway_server::lines::subway_lines;
use subway_server::stations::load_stations;
use subway_server::web::{AppState, create_router};

/// Bundled station dataset, relative to the working directory.
const DEFAULT_STATIONS_PATH: &str = "data/mta_stations.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load the static dataset (fail fast if malformed)
    let stations_path =
        std::env::var("STATIONS_PATH").unwrap_or_else(|_| DEFAULT_STATIONS_PATH.to_string());
    let directory = load_stations(&stations_path)
        .unwrap_or_else(|e| panic!("failed to load stations from {stations_path}: {e}"));
    println!("Loaded {} station records", directory.len());

    // Built-in line tables, checked against the directory so a typo in
    // either fails startup instead of surfacing as phantom neighbors.
    let topology = subway_lines();
    if let Err(e) = topology.check_against(&directory) {
        panic!("line tables are inconsistent with the station dataset: {e}");
    }

    // Build app state and router
    let state = AppState::new(directory, topology);
    let app = create_router(state);

    // Bind and serve
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("Subway neighborhood server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health     - Health check");
    println!("  GET /location   - Stations and line neighbors near a point");
    println!("  GET /stations   - Station records by id");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

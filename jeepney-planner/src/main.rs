use std::net::SocketAddr;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use jeepney_planner::cache::{CacheConfig, CachedDirectionsClient};
use jeepney_planner::catalog::{CatalogConfig, RouteCatalog, RouteClientConfig};
use jeepney_planner::directions::{DirectionsClient, DirectionsConfig};
use jeepney_planner::planner::PlannerConfig;
use jeepney_planner::web::{AppState, create_router};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jeepney_planner=info")),
        )
        .init();

    // Directions gateway
    let api_key = std::env::var("DIRECTIONS_API_KEY").unwrap_or_else(|_| {
        warn!("DIRECTIONS_API_KEY not set; directions requests are skipped and every plan uses local routes");
        String::new()
    });
    let mut directions_config = DirectionsConfig::new(api_key);
    if let Ok(url) = std::env::var("DIRECTIONS_BASE_URL") {
        directions_config = directions_config.with_base_url(url);
    }
    let directions =
        DirectionsClient::new(directions_config).expect("Failed to create directions client");
    let cached_directions = CachedDirectionsClient::new(directions, &CacheConfig::default());

    // Route catalog (fail fast if unavailable)
    let catalog_config = match (std::env::var("ROUTES_FILE"), std::env::var("ROUTES_URL")) {
        (Ok(path), _) => CatalogConfig::file(path),
        (Err(_), Ok(url)) => CatalogConfig::provider(RouteClientConfig::new(url)),
        (Err(_), Err(_)) => panic!("Set ROUTES_FILE or ROUTES_URL to load jeepney routes"),
    };
    let catalog = RouteCatalog::load(&catalog_config)
        .await
        .expect("Failed to load route catalog");
    info!(routes = catalog.len().await, "loaded route catalog");

    // Refresh provider-backed catalogs in the background
    if catalog_config.refreshes() {
        let catalog_refresh = catalog.clone();
        let period = catalog_config.refresh_interval;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match catalog_refresh.refresh().await {
                    Ok(count) => info!(routes = count, "refreshed route catalog"),
                    Err(e) => error!(error = %e, "failed to refresh route catalog"),
                }
            }
        });
    }

    let state = AppState::new(cached_directions, catalog, PlannerConfig::default());
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("BIND_ADDR must be host:port");

    info!(%addr, "jeepney planner listening");
    info!("  GET  /health            - Health check");
    info!("  GET  /api/routes        - Route catalog");
    info!("  POST /api/journey/plan  - Plan a journey");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

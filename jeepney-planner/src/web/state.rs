//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedDirectionsClient;
use crate::catalog::RouteCatalog;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached directions gateway
    pub directions: Arc<CachedDirectionsClient>,

    /// Jeepney route catalog
    pub catalog: RouteCatalog,

    /// Journey planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        directions: CachedDirectionsClient,
        catalog: RouteCatalog,
        config: PlannerConfig,
    ) -> Self {
        Self {
            directions: Arc::new(directions),
            catalog,
            config: Arc::new(config),
        }
    }
}

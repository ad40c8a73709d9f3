//! Shared, refreshable route catalog.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::JeepneyRoute;

use super::client::{RouteClient, RouteClientConfig, RouteDto, parse_routes};
use super::error::CatalogError;

/// Default refresh interval for provider-backed catalogs: 6 hours.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(6 * 60 * 60);

/// Where route geometry comes from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// A local JSON file holding an array of route records
    File(PathBuf),
    /// An HTTP route provider
    Provider(RouteClientConfig),
}

/// Configuration for loading the route catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub source: CatalogSource,
    /// How often a provider-backed catalog is reloaded.
    pub refresh_interval: Duration,
}

impl CatalogConfig {
    /// Load routes from a local file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: CatalogSource::File(path.into()),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    /// Load routes from an HTTP provider.
    pub fn provider(config: RouteClientConfig) -> Self {
        Self {
            source: CatalogSource::Provider(config),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    /// Set a custom refresh interval.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Whether the catalog should be refreshed in the background.
    pub fn refreshes(&self) -> bool {
        matches!(self.source, CatalogSource::Provider(_))
    }
}

#[derive(Debug, Clone)]
enum Loader {
    File(PathBuf),
    Provider(RouteClient),
    Fixed,
}

/// Thread-safe route catalog.
///
/// Planning calls take a [`snapshot`](Self::snapshot) and never touch the
/// lock again. A refresh swaps the whole route list at once, so calls in
/// flight keep the routes they started with.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    inner: Arc<RwLock<Arc<[JeepneyRoute]>>>,
    loader: Loader,
}

impl RouteCatalog {
    /// Load the catalog from its configured source.
    ///
    /// This will fail if the source is unreachable or holds no valid route.
    pub async fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        match &config.source {
            CatalogSource::File(path) => Self::from_file(path),
            CatalogSource::Provider(client_config) => {
                Self::fetch(RouteClient::new(client_config.clone())?).await
            }
        }
    }

    /// Load the catalog from a local JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let routes = read_file(path)?;

        Ok(Self::with_loader(routes, Loader::File(path.to_path_buf())))
    }

    /// Load the catalog from a route provider.
    pub async fn fetch(client: RouteClient) -> Result<Self, CatalogError> {
        let routes = build_routes(client.fetch_all().await?)?;

        Ok(Self::with_loader(routes, Loader::Provider(client)))
    }

    /// Create a fixed catalog from already-validated routes.
    ///
    /// Refreshing a fixed catalog is a no-op.
    pub fn from_routes(routes: Vec<JeepneyRoute>) -> Self {
        Self::with_loader(routes.into(), Loader::Fixed)
    }

    fn with_loader(routes: Arc<[JeepneyRoute]>, loader: Loader) -> Self {
        Self {
            inner: Arc::new(RwLock::new(routes)),
            loader,
        }
    }

    /// The current route list.
    pub async fn snapshot(&self) -> Arc<[JeepneyRoute]> {
        self.inner.read().await.clone()
    }

    /// Number of routes in the catalog.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Check if the catalog is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Reload routes from the source.
    ///
    /// On success, replaces the current routes. On failure, the existing
    /// routes are preserved and the error is returned.
    pub async fn refresh(&self) -> Result<usize, CatalogError> {
        let routes = match &self.loader {
            Loader::File(path) => read_file(path)?,
            Loader::Provider(client) => build_routes(client.fetch_all().await?)?,
            Loader::Fixed => return Ok(self.len().await),
        };
        let count = routes.len();

        let mut guard = self.inner.write().await;
        *guard = routes;

        Ok(count)
    }
}

fn read_file(path: &Path) -> Result<Arc<[JeepneyRoute]>, CatalogError> {
    let json = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;

    build_routes(parse_routes(&json)?)
}

/// Validate route records, skipping any with unusable geometry.
fn build_routes(records: Vec<RouteDto>) -> Result<Arc<[JeepneyRoute]>, CatalogError> {
    let routes: Vec<JeepneyRoute> = records
        .into_iter()
        .filter_map(|r| {
            let name = r.name;
            match JeepneyRoute::new(r.code, r.color, r.points) {
                Ok(route) => Some(match name {
                    Some(name) => route.with_name(name),
                    None => route,
                }),
                Err(e) => {
                    warn!(error = %e, "skipping invalid route record");
                    None
                }
            }
        })
        .collect();

    if routes.is_empty() {
        return Err(CatalogError::Empty);
    }

    Ok(routes.into())
}

//! Jeepney route catalog.
//!
//! Route geometry is loaded once at startup, from a local JSON file or an
//! HTTP route provider, and refreshed in the background when it comes
//! from a provider.

mod client;
mod error;
mod routes;

pub use client::{RouteClient, RouteClientConfig, RouteDto, parse_routes};
pub use error::CatalogError;
pub use routes::{CatalogConfig, CatalogSource, DEFAULT_REFRESH_INTERVAL, RouteCatalog};

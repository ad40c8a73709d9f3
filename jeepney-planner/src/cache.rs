//! Caching layer for directions gateway responses.
//!
//! Transit itineraries between the same two places rarely change within a
//! few minutes, and the directions API is metered. Origins and
//! destinations are rounded to a fixed precision (4 decimal places is
//! about 11 m) so that requests from nearly the same spot share an entry.
//!
//! Only successful responses are cached; failures always go back to the
//! gateway on the next request.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::directions::{DirectionsClient, DirectionsError, TransitItinerary};
use crate::domain::GeoPoint;
use crate::planner::DirectionsGateway;

/// Cache key: rounded (origin lat, origin lng, destination lat, destination lng).
type ItineraryKey = (i64, i64, i64, i64);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,

    /// Decimal places kept from each coordinate in the key.
    pub coordinate_precision: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
            coordinate_precision: 4,
        }
    }
}

/// Cache for directions responses.
pub struct ItineraryCache {
    entries: MokaCache<ItineraryKey, Arc<TransitItinerary>>,

    /// 10^precision
    scale: f64,
}

impl ItineraryCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            entries,
            scale: 10f64.powi(config.coordinate_precision as i32),
        }
    }

    /// Compute the cache key for a pair of points.
    fn key(&self, origin: &GeoPoint, destination: &GeoPoint) -> ItineraryKey {
        let round = |v: f64| (v * self.scale).round() as i64;
        (
            round(origin.lat),
            round(origin.lng),
            round(destination.lat),
            round(destination.lng),
        )
    }

    /// Get a cached itinerary.
    pub async fn get(&self, origin: &GeoPoint, destination: &GeoPoint) -> Option<Arc<TransitItinerary>> {
        self.entries.get(&self.key(origin, destination)).await
    }

    /// Insert an itinerary into the cache.
    pub async fn insert(&self, origin: &GeoPoint, destination: &GeoPoint, itinerary: Arc<TransitItinerary>) {
        self.entries
            .insert(self.key(origin, destination), itinerary)
            .await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}

/// Directions gateway with caching.
///
/// Wraps any [`DirectionsGateway`] (the live [`DirectionsClient`] by
/// default) and caches successful itineraries.
pub struct CachedDirectionsClient<G = DirectionsClient> {
    client: G,
    cache: ItineraryCache,
}

impl<G: DirectionsGateway + Sync> CachedDirectionsClient<G> {
    /// Create a new cached client.
    pub fn new(client: G, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: ItineraryCache::new(cache_config),
        }
    }

    /// Get a transit itinerary, using the cache if available.
    pub async fn get_itinerary(
        &self,
        origin: &GeoPoint,
        destination: &GeoPoint,
    ) -> Result<Arc<TransitItinerary>, DirectionsError> {
        if let Some(cached) = self.cache.get(origin, destination).await {
            trace!(%origin, %destination, "itinerary cache hit");
            return Ok(cached);
        }

        let itinerary = Arc::new(
            self.client
                .request_transit_itinerary(origin, destination)
                .await?,
        );

        self.cache
            .insert(origin, destination, itinerary.clone())
            .await;

        Ok(itinerary)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &G {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

impl<G: DirectionsGateway + Sync> DirectionsGateway for CachedDirectionsClient<G> {
    async fn request_transit_itinerary(
        &self,
        origin: &GeoPoint,
        destination: &GeoPoint,
    ) -> Result<TransitItinerary, DirectionsError> {
        let itinerary = self.get_itinerary(origin, destination).await?;
        Ok(TransitItinerary::clone(&itinerary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::MockDirectionsClient;

    fn points() -> (GeoPoint, GeoPoint) {
        (GeoPoint::new(10.30, 123.88), GeoPoint::new(10.33, 123.91))
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(600));
        assert_eq!(config.max_capacity, 1000);
        assert_eq!(config.coordinate_precision, 4);
    }

    #[test]
    fn key_rounds_coordinates() {
        let cache = ItineraryCache::new(&CacheConfig::default());
        let (o, d) = points();

        // Within 0.00005 degrees: same key
        let nearby = GeoPoint::new(10.30004, 123.88004);
        assert_eq!(cache.key(&o, &d), cache.key(&nearby, &d));

        // 0.0001 degrees away: different key
        let moved = GeoPoint::new(10.3001, 123.88);
        assert_ne!(cache.key(&o, &d), cache.key(&moved, &d));

        // Direction matters
        assert_ne!(cache.key(&o, &d), cache.key(&d, &o));
    }

    #[test]
    fn cache_creation() {
        let cache = ItineraryCache::new(&CacheConfig::default());
        assert_eq!(cache.entry_count(), 0);
    }

    #[tokio::test]
    async fn second_request_is_served_from_cache() {
        let mock = MockDirectionsClient::with_itinerary(TransitItinerary::default());
        let cached = CachedDirectionsClient::new(mock, &CacheConfig::default());
        let (o, d) = points();

        cached.request_transit_itinerary(&o, &d).await.unwrap();
        cached.request_transit_itinerary(&o, &d).await.unwrap();

        assert_eq!(cached.client().call_count(), 1);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let mock = MockDirectionsClient::unavailable();
        let cached = CachedDirectionsClient::new(mock, &CacheConfig::default());
        let (o, d) = points();

        assert!(cached.request_transit_itinerary(&o, &d).await.is_err());
        assert!(cached.request_transit_itinerary(&o, &d).await.is_err());

        assert_eq!(cached.client().call_count(), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let mock = MockDirectionsClient::with_itinerary(TransitItinerary::default());
        let cached = CachedDirectionsClient::new(mock, &CacheConfig::default());
        let (o, d) = points();

        cached.get_itinerary(&o, &d).await.unwrap();
        cached.invalidate_cache();
        cached.get_itinerary(&o, &d).await.unwrap();

        assert_eq!(cached.client().call_count(), 2);
    }
}

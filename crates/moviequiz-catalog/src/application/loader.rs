//! Catalog loading over the network.

use std::sync::Arc;

use async_trait::async_trait;
use moviequiz_core::error::LoadError;
use moviequiz_core::network::NetworkClient;
use tracing::{info, instrument, warn};

use crate::domain::items::Catalog;
use crate::domain::payload::decode_catalog;

/// Base URL of the IMDb most-popular-movies endpoint; the API key is appended
/// as the final path segment.
pub const MOST_POPULAR_MOVIES_BASE: &str = "https://imdb-api.com/en/API/MostPopularMovies";

/// Builds the catalog endpoint URL for an API key.
#[must_use]
pub fn most_popular_movies_url(api_key: &str) -> String {
    format!("{MOST_POPULAR_MOVIES_BASE}/{api_key}")
}

/// Trait for anything that can produce a fresh catalog.
#[async_trait]
pub trait CatalogLoading: Send + Sync {
    /// Loads the full catalog.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Network` when the fetch fails and
    /// `LoadError::Decode` when the payload is malformed or empty.
    async fn load(&self) -> Result<Catalog, LoadError>;
}

/// Loads the catalog from a fixed endpoint through a `NetworkClient`.
#[derive(Clone)]
pub struct CatalogLoader {
    network: Arc<dyn NetworkClient>,
    endpoint: String,
}

impl CatalogLoader {
    /// Creates a loader for `endpoint`.
    #[must_use]
    pub fn new(network: Arc<dyn NetworkClient>, endpoint: impl Into<String>) -> Self {
        Self {
            network,
            endpoint: endpoint.into(),
        }
    }

    /// Returns the endpoint this loader fetches.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CatalogLoading for CatalogLoader {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn load(&self) -> Result<Catalog, LoadError> {
        let body = self.network.fetch(&self.endpoint).await.inspect_err(|e| {
            warn!(error = %e, "catalog fetch failed");
        })?;

        let catalog = decode_catalog(&body).inspect_err(|e| {
            warn!(error = %e, "catalog payload rejected");
        })?;

        info!(items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

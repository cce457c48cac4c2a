//! HTTP client for the provider's bulk station feed.

use std::time::Duration;

use reqwest::Client;

use fuelnear_core::{Coordinates, Province, Region, Station};

use crate::error::ResolveError;
use crate::reference::{extract_provinces, extract_regions};
use crate::resolver::{closest_stations, FilterSpec};
use crate::types::RawSnapshot;

/// The ministry's fixed bulk endpoint: every station in the country with
/// current prices, one JSON document.
pub const DEFAULT_ENDPOINT: &str = "https://sedeaplicaciones.minetur.gob.es/ServiciosRESTCarburantes/PreciosCarburantes/EstacionesTerrestres/";

/// Client for the `EstacionesTerrestres` feed.
///
/// One fetch per call, no caching, no internal retry: transient failures
/// surface as typed errors and retry policy belongs to the caller.
/// Concurrent calls are independent — the client holds no mutable state,
/// and dropping an in-flight future cancels its fetch.
pub struct StationsClient {
    client: Client,
    endpoint: String,
}

impl StationsClient {
    /// Creates a client with the given timeout and `User-Agent`, pointed
    /// at [`DEFAULT_ENDPOINT`].
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ResolveError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
        })
    }

    /// Points the client at a different endpoint (test servers, mirrors).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Fetches one full snapshot of the feed.
    ///
    /// Public so callers can reuse a single snapshot across
    /// [`closest_stations`] and the reference extractors without paying
    /// for a second fetch.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Http`] — network or TLS failure.
    /// - [`ResolveError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ResolveError::Deserialize`] — body is not the expected shape.
    pub async fn fetch_snapshot(&self) -> Result<RawSnapshot, ResolveError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching station snapshot");

        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.text().await?;
        let snapshot =
            serde_json::from_str::<RawSnapshot>(&body).map_err(|e| ResolveError::Deserialize {
                context: format!("station snapshot from {}", self.endpoint),
                source: e,
            })?;

        tracing::debug!(
            stations = snapshot.stations.len(),
            date = %snapshot.date,
            "snapshot fetched"
        );
        Ok(snapshot)
    }

    /// Fetches a fresh snapshot and resolves the `max_results` stations
    /// nearest to `center` that satisfy `filter`. Zero matches is a valid
    /// empty `Ok`.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::fetch_snapshot`] errors unchanged; the in-memory
    /// pipeline itself cannot fail.
    pub async fn resolve(
        &self,
        center: Coordinates,
        max_results: usize,
        filter: &FilterSpec,
    ) -> Result<Vec<Station>, ResolveError> {
        let snapshot = self.fetch_snapshot().await?;
        Ok(closest_stations(&snapshot, center, max_results, filter))
    }

    /// Fetches a fresh snapshot and extracts its distinct regions.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::fetch_snapshot`] errors unchanged.
    pub async fn regions(&self) -> Result<Vec<Region>, ResolveError> {
        let snapshot = self.fetch_snapshot().await?;
        Ok(extract_regions(&snapshot))
    }

    /// Fetches a fresh snapshot and extracts its distinct provinces.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::fetch_snapshot`] errors unchanged.
    pub async fn provinces(&self) -> Result<Vec<Province>, ResolveError> {
        let snapshot = self.fetch_snapshot().await?;
        Ok(extract_provinces(&snapshot))
    }
}

use serde::Deserialize;

use crate::config::Config;
use crate::error::ServiceError;
use crate::services::{ensure_success, transport, ElevationService};
use crate::types::activity::Coordinate;

const SERVICE: &str = "OpenTopoData";

#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    elevation: Option<f64>,
}

/// OpenTopoData client querying a primary dataset and falling back to a
/// second one where the primary has no coverage.
#[derive(Debug, Clone)]
pub struct OpenTopoData {
    client: reqwest::Client,
    base_url: String,
    primary: String,
    fallback: String,
}

impl OpenTopoData {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.opentopodata_url.trim_end_matches('/').to_string(),
            primary: config.elevation_primary_dataset.clone(),
            fallback: config.elevation_fallback_dataset.clone(),
        }
    }

    async fn lookup(&self, dataset: &str, at: Coordinate) -> Result<Option<f64>, ServiceError> {
        let url = format!("{}/{}", self.base_url, dataset);
        let locations = format!("{},{}", at.lat, at.lon);
        let response = self
            .client
            .get(&url)
            .query(&[("locations", locations.as_str())])
            .send()
            .await
            .map_err(transport(SERVICE))?;
        let payload: LookupResponse = ensure_success(SERVICE, response)
            .await?
            .json()
            .await
            .map_err(transport(SERVICE))?;

        let result = payload.results.into_iter().next().ok_or(ServiceError::Payload {
            service: SERVICE,
            message: format!("no results from dataset {}", dataset),
        })?;
        Ok(result.elevation)
    }
}

impl ElevationService for OpenTopoData {
    async fn elevation(&self, at: Coordinate) -> Result<f64, ServiceError> {
        if let Some(elevation) = self.lookup(&self.primary, at).await? {
            return Ok(elevation);
        }
        tracing::debug!(
            "No {} elevation at {},{}; trying {}",
            self.primary,
            at.lat,
            at.lon,
            self.fallback
        );
        self.lookup(&self.fallback, at)
            .await?
            .ok_or(ServiceError::NoElevation {
                lat: at.lat,
                lon: at.lon,
            })
    }
}

//! QARS resolver: the ArcGIS "query" operation on GIS Qatar's
//! `Vector/QARS_wgs84` layer.
//!
//! One GET per resolution. The layer is queried with a `where` clause of
//! three equality predicates (`zone_no`, `street_no`, `building_no`) and
//! `f=json`; the response is a feature collection of which only the first
//! element is consulted.

use std::time::Duration;

use log::{debug, info, warn};
use serde::Deserialize;

use async_trait::async_trait;

use super::resolver::{AddressQuery, AddressResolver, Coordinates, GisError};

/// GIS Qatar QARS layer endpoint (WGS84).
pub const DEFAULT_QARS_BASE_URL: &str =
    "https://services.gisqatar.org.qa/server/rest/services/Vector/QARS_wgs84/MapServer/0";

// ============================================================================
// QARS Response Types
// ============================================================================

/// The subset of the ArcGIS query response this resolver reads.
/// `features` defaults to empty: an absent array means resolution failed,
/// same as an empty one.
#[derive(Deserialize, Debug)]
struct QueryResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize, Debug)]
struct Feature {
    geometry: Geometry,
}

#[derive(Deserialize, Debug)]
struct Geometry {
    x: f64,
    y: f64,
}

/// Builds the `where` clause: three equality predicates conjoined with AND,
/// in zone, street, building order. Fields must already be validated —
/// only trimmed digit runs are interpolated.
fn where_clause(query: &AddressQuery) -> String {
    format!(
        "zone_no={} and street_no={} and building_no={}",
        query.zone.trim(),
        query.street.trim(),
        query.building.trim()
    )
}

// ============================================================================
// Resolver Implementation
// ============================================================================

/// Resolver backed by the GIS Qatar QARS vector layer.
pub struct QarsResolver {
    base_url: String,
    client: reqwest::Client,
}

impl QarsResolver {
    /// Creates a new QARS resolver.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom layer URL (defaults to GIS Qatar's QARS layer)
    /// * `timeout` - Optional request timeout (default: none, per the client default)
    pub fn new(base_url: Option<String>, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_QARS_BASE_URL.to_string()),
            // Builder only fails on TLS backend misconfiguration; fall back
            // to the default client rather than failing construction.
            client: builder.build().unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Sends the query request and returns the raw response, mapping
    /// transport and status failures to `GisError`.
    async fn send_query(&self, clause: &str) -> Result<reqwest::Response, GisError> {
        let response = self
            .client
            .get(format!("{}/query", self.base_url))
            .query(&[("where", clause), ("f", "json")])
            .send()
            .await
            .map_err(|e| GisError::Network(e.to_string()))?;

        debug!("QARS response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("QARS API error: {} - {}", status, err_body);
            return Err(GisError::Api {
                status,
                message: err_body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl AddressResolver for QarsResolver {
    fn name(&self) -> &str {
        "qars"
    }

    async fn resolve(&self, query: &AddressQuery) -> Result<Coordinates, GisError> {
        query.validate()?;

        let clause = where_clause(query);
        info!("QARS query: where={}", clause);

        let response = self.send_query(&clause).await?;

        let parsed: QueryResponse = response
            .json()
            .await
            .map_err(|e| GisError::Parse(e.to_string()))?;

        debug!("QARS returned {} feature(s)", parsed.features.len());

        // Only the first match is consulted; extra features are ignored.
        let feature = parsed.features.first().ok_or(GisError::NoMatch)?;
        let coords = Coordinates {
            x: feature.geometry.x,
            y: feature.geometry.y,
        };
        info!("Resolved to x={}, y={}", coords.x, coords.y);
        Ok(coords)
    }
}

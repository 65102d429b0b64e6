//! Pelias-compatible geocoding client.
//!
//! Speaks the `/v1/autocomplete`, `/v1/search`, and `/v1/place` HTTP
//! endpoints and normalizes both the legacy GeoJSON property shape
//! (`label` only) and the current one (`name` + `coarse_location`) into
//! [`PlaceFeature`].
//!
//! # Security Note - Logging
//!
//! The API key is held in a `SecretString` and only exposed at the moment
//! the request URL is built, so neither `Debug` output nor request logging
//! of the client struct can leak it.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::error::{PinpointError, Result};
use crate::feature::{PlaceFeature, PlaceLayer};
use crate::geo::{BoundingBox, LngLat};

use super::{Geocoder, SearchQuery};

/// Default service endpoint when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.stadiamaps.com";

/// Pelias-compatible geocoding API client.
pub struct PeliasClient {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

impl PeliasClient {
    /// Create a client against the default endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|_| PinpointError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(PinpointError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: None,
        })
    }

    /// Attach an API key sent with every request.
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(SecretString::from(api_key));
        self
    }

    /// Replace the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn apply_search_params(&self, url: &mut Url, query: &SearchQuery) {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("text", &query.text);
        pairs.append_pair("size", &query.size.to_string());
        if let Some(layers) = &query.layers {
            let joined = layers
                .iter()
                .map(PlaceLayer::as_str)
                .collect::<Vec<_>>()
                .join(",");
            pairs.append_pair("layers", &joined);
        }
        if let Some(focus) = query.focus_point {
            pairs.append_pair("focus.point.lon", &focus.lng.to_string());
            pairs.append_pair("focus.point.lat", &focus.lat.to_string());
        }
        drop(pairs);
        self.apply_auth(url);
    }

    fn apply_auth(&self, url: &mut Url) {
        if let Some(key) = &self.api_key {
            url.query_pairs_mut()
                .append_pair("api_key", key.expose_secret());
        }
    }

    async fn fetch_features(&self, url: Url) -> Result<Vec<PlaceFeature>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PinpointError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let parsed: GeocodeResponse = serde_json::from_str(&body)?;
        Ok(parsed.features.into_iter().map(PlaceFeature::from).collect())
    }
}

impl fmt::Debug for PeliasClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeliasClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Geocoder for PeliasClient {
    async fn autocomplete(&self, query: &SearchQuery) -> Result<Vec<PlaceFeature>> {
        let mut url = self.endpoint("/v1/autocomplete")?;
        self.apply_search_params(&mut url, query);
        self.fetch_features(url).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<PlaceFeature>> {
        let mut url = self.endpoint("/v1/search")?;
        self.apply_search_params(&mut url, query);
        self.fetch_features(url).await
    }

    async fn place_details(&self, gid: &str) -> Result<Vec<PlaceFeature>> {
        let mut url = self.endpoint("/v1/place")?;
        url.query_pairs_mut().append_pair("ids", gid);
        self.apply_auth(&mut url);
        self.fetch_features(url).await
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    features: Vec<WireFeature>,
}

/// GeoJSON feature as returned by both response generations. The legacy
/// shape carries `label` plus country/continent context; the current shape
/// adds `name` and a precomputed `coarse_location` line.
#[derive(Debug, Deserialize)]
struct WireFeature {
    #[serde(default)]
    bbox: Option<[f64; 4]>,
    #[serde(default)]
    geometry: Option<WireGeometry>,
    properties: WireProperties,
}

#[derive(Debug, Deserialize)]
struct WireGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct WireProperties {
    #[serde(default)]
    gid: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    layer: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    continent: Option<String>,
    #[serde(default)]
    coarse_location: Option<String>,
}

/// Pure legacy-to-current upcast: whatever generation the server spoke, the
/// pipeline sees one shape.
impl From<WireFeature> for PlaceFeature {
    fn from(wire: WireFeature) -> Self {
        let geometry = wire.geometry.as_ref().and_then(|g| {
            if g.kind == "Point" && g.coordinates.len() >= 2 {
                Some(LngLat::new(g.coordinates[0], g.coordinates[1]))
            } else {
                None
            }
        });

        let properties = wire.properties;
        let label = properties
            .label
            .or(properties.name)
            .unwrap_or_default();

        PlaceFeature {
            gid: properties.gid.unwrap_or_default(),
            label,
            layer: PlaceLayer::parse(properties.layer.as_deref().unwrap_or_default()),
            geometry,
            bbox: wire.bbox.map(BoundingBox::from_wsen),
            country: properties.country,
            continent: properties.continent,
            coarse_location: properties.coarse_location,
        }
    }
}

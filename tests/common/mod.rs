//! Mock collaborators and fixture builders for control pipeline tests.
//!
//! `MockGeocoder` answers from pre-registered responses, can stall a
//! response on a oneshot channel so tests control resolution order, and
//! records every call it receives. `MockCamera` records viewport moves.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;

use pinpoint::{
    BoundingBox, Geocoder, LngLat, MapCamera, PinpointError, PlaceFeature, PlaceLayer, Result,
    SearchQuery,
};

// ============================================================================
// Fixtures
// ============================================================================

/// A feature with point geometry, no bounding box.
pub fn place(label: &str, layer: PlaceLayer) -> PlaceFeature {
    PlaceFeature {
        gid: format!("test:{}:{}", layer.as_str(), label.to_lowercase()),
        label: label.to_string(),
        layer,
        geometry: Some(LngLat::new(-104.99, 39.74)),
        bbox: None,
        country: Some("United States".to_string()),
        continent: None,
        coarse_location: None,
    }
}

/// A summary-only feature: no geometry, resolvable via detail lookup.
pub fn summary_place(label: &str, layer: PlaceLayer) -> PlaceFeature {
    PlaceFeature {
        geometry: None,
        ..place(label, layer)
    }
}

// ============================================================================
// MockGeocoder
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Autocomplete,
    Search,
    Place,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub op: Op,
    pub text: String,
}

#[derive(Default)]
struct MockGeocoderInner {
    responses: Mutex<HashMap<String, Vec<PlaceFeature>>>,
    details: Mutex<HashMap<String, Vec<PlaceFeature>>>,
    failures: Mutex<Vec<String>>,
    stalled: Mutex<HashMap<String, oneshot::Receiver<Result<Vec<PlaceFeature>>>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[derive(Clone, Default)]
pub struct MockGeocoder {
    inner: Arc<MockGeocoderInner>,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer autocomplete/search calls for `text` with `features`.
    pub fn respond_with(&self, text: &str, features: Vec<PlaceFeature>) {
        self.inner
            .responses
            .lock()
            .insert(text.to_string(), features);
    }

    /// Answer detail lookups for `gid` with `features`.
    pub fn respond_detail(&self, gid: &str, features: Vec<PlaceFeature>) {
        self.inner.details.lock().insert(gid.to_string(), features);
    }

    /// Fail autocomplete/search/detail calls for `key`.
    pub fn fail(&self, key: &str) {
        self.inner.failures.lock().push(key.to_string());
    }

    /// Stall the response for `key` until the returned sender resolves it.
    pub fn stall(&self, key: &str) -> oneshot::Sender<Result<Vec<PlaceFeature>>> {
        let (tx, rx) = oneshot::channel();
        self.inner.stalled.lock().insert(key.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.calls.lock().clone()
    }

    /// Texts of recorded autocomplete/search calls, in order.
    pub fn query_texts(&self) -> Vec<String> {
        self.inner
            .calls
            .lock()
            .iter()
            .filter(|c| c.op != Op::Place)
            .map(|c| c.text.clone())
            .collect()
    }

    async fn lookup(&self, op: Op, key: &str) -> Result<Vec<PlaceFeature>> {
        self.inner.calls.lock().push(RecordedCall {
            op,
            text: key.to_string(),
        });

        let stalled = self.inner.stalled.lock().remove(key);
        if let Some(rx) = stalled {
            return rx.await.expect("stalled response sender dropped");
        }

        if self.inner.failures.lock().iter().any(|k| k == key) {
            return Err(PinpointError::Api {
                status: 500,
                message: format!("mock failure for '{key}'"),
            });
        }

        let table = if op == Op::Place {
            &self.inner.details
        } else {
            &self.inner.responses
        };
        Ok(table.lock().get(key).cloned().unwrap_or_default())
    }
}

impl Geocoder for MockGeocoder {
    async fn autocomplete(&self, query: &SearchQuery) -> Result<Vec<PlaceFeature>> {
        self.lookup(Op::Autocomplete, &query.text).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<PlaceFeature>> {
        self.lookup(Op::Search, &query.text).await
    }

    async fn place_details(&self, gid: &str) -> Result<Vec<PlaceFeature>> {
        self.lookup(Op::Place, gid).await
    }
}

// ============================================================================
// MockCamera
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum CameraCall {
    FitBounds([f64; 4]),
    FlyTo { lng: f64, lat: f64, zoom: f64 },
}

pub struct MockCamera {
    zoom: f64,
    center: LngLat,
    calls: Mutex<Vec<CameraCall>>,
}

impl MockCamera {
    pub fn new(zoom: f64, center: LngLat) -> Self {
        Self {
            zoom,
            center,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CameraCall> {
        self.calls.lock().clone()
    }
}

impl MapCamera for MockCamera {
    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn center(&self) -> LngLat {
        self.center
    }

    fn fit_bounds(&self, bounds: &BoundingBox) {
        self.calls
            .lock()
            .push(CameraCall::FitBounds(bounds.to_wsen()));
    }

    fn fly_to(&self, center: LngLat, zoom: f64) {
        self.calls.lock().push(CameraCall::FlyTo {
            lng: center.lng,
            lat: center.lat,
            zoom,
        });
    }
}

/// Let spawned tasks run up to their next suspension point.
pub async fn drain_tasks() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

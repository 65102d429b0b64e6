//! Control configuration.
//!
//! All fields are optional in spirit: `SearchBoxOptions::default()` is a
//! working configuration, and hosts override only what they need.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::feature::{PlaceFeature, PlaceLayer};
use crate::geo::LngLat;

/// Callback invoked after a result has been selected and navigation has run.
pub type ResultSelectedCallback = Arc<dyn Fn(&PlaceFeature) + Send + Sync>;

/// Configuration for a [`SearchBox`](crate::control::SearchBox) instance.
#[derive(Clone)]
pub struct SearchBoxOptions {
    /// Bias results toward the current map view.
    pub use_map_focus_point: bool,

    /// Minimum map zoom at which the map center is used as the focus point.
    pub map_focus_point_min_zoom: f64,

    /// Fixed focus point override. Takes precedence over the map center.
    pub fixed_focus_point: Option<LngLat>,

    /// Enter runs an explicit full search instead of only committing a
    /// selected result.
    pub search_on_enter: bool,

    /// Maximum number of results to request.
    pub max_results: usize,

    /// Minimum input length before any query is dispatched.
    pub min_input_length: usize,

    /// Minimum wait between successive query dispatches.
    pub min_wait_period: Duration,

    /// Restrict results to these layers. `None` means all layers.
    pub layers: Option<Vec<PlaceLayer>>,

    /// Invoked with the resolved feature after navigation.
    pub on_result_selected: Option<ResultSelectedCallback>,

    /// Geocoding service base URL override.
    pub base_url: Option<String>,

    /// API key sent with each geocoding request.
    pub api_key: Option<String>,

    /// Timeout applied to each geocoding HTTP request.
    pub request_timeout: Duration,
}

impl Default for SearchBoxOptions {
    fn default() -> Self {
        Self {
            use_map_focus_point: true,
            map_focus_point_min_zoom: 5.0,
            fixed_focus_point: None,
            search_on_enter: false,
            max_results: 5,
            min_input_length: 3,
            min_wait_period: Duration::from_millis(100),
            layers: None,
            on_result_selected: None,
            base_url: None,
            api_key: None,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl fmt::Debug for SearchBoxOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchBoxOptions")
            .field("use_map_focus_point", &self.use_map_focus_point)
            .field("map_focus_point_min_zoom", &self.map_focus_point_min_zoom)
            .field("fixed_focus_point", &self.fixed_focus_point)
            .field("search_on_enter", &self.search_on_enter)
            .field("max_results", &self.max_results)
            .field("min_input_length", &self.min_input_length)
            .field("min_wait_period", &self.min_wait_period)
            .field("layers", &self.layers)
            .field(
                "on_result_selected",
                &self.on_result_selected.as_ref().map(|_| "[callback]"),
            )
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

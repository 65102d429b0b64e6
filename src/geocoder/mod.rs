//! Geocoding service collaborator.
//!
//! The control talks to its backend through the [`Geocoder`] trait: an
//! incremental `autocomplete` operation, an explicit `search` operation with
//! the same parameter shape, and a `place_details` lookup for features
//! returned without geometry. [`pelias::PeliasClient`] implements it for
//! Pelias-compatible HTTP APIs.

pub mod pelias;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::feature::{PlaceFeature, PlaceLayer};
use crate::geo::LngLat;
use crate::map::MapCamera;
use crate::options::SearchBoxOptions;

/// Parameters shared by the autocomplete and search operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query.
    pub text: String,
    /// Maximum number of results to return.
    pub size: usize,
    /// Restrict results to these layers, when set.
    pub layers: Option<Vec<PlaceLayer>>,
    /// Bias results toward this point, when set.
    pub focus_point: Option<LngLat>,
}

/// Common interface for geocoding backends.
pub trait Geocoder: Send + Sync {
    /// Incremental lookup for partially typed text.
    fn autocomplete(
        &self,
        query: &SearchQuery,
    ) -> impl std::future::Future<Output = Result<Vec<PlaceFeature>>> + Send;

    /// Full search for explicitly submitted text.
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl std::future::Future<Output = Result<Vec<PlaceFeature>>> + Send;

    /// Fetch the full feature (with geometry) for a global identifier.
    fn place_details(
        &self,
        gid: &str,
    ) -> impl std::future::Future<Output = Result<Vec<PlaceFeature>>> + Send;
}

/// Build the request parameters for one dispatch.
///
/// Focus point resolution: a fixed focus point always wins; otherwise the
/// map center is used when focus biasing is enabled and the map is zoomed in
/// at least to the configured minimum.
pub(crate) fn build_query(
    text: &str,
    options: &SearchBoxOptions,
    map: Option<&dyn MapCamera>,
) -> SearchQuery {
    let mut focus_point = options.fixed_focus_point;
    if focus_point.is_none()
        && options.use_map_focus_point
        && let Some(map) = map
        && map.zoom() >= options.map_focus_point_min_zoom
    {
        focus_point = Some(map.center());
    }

    SearchQuery {
        text: text.to_string(),
        size: options.max_results,
        layers: options.layers.clone(),
        focus_point,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::BoundingBox;

    struct FixedCamera {
        zoom: f64,
        center: LngLat,
    }

    impl MapCamera for FixedCamera {
        fn zoom(&self) -> f64 {
            self.zoom
        }

        fn center(&self) -> LngLat {
            self.center
        }

        fn fit_bounds(&self, _bounds: &BoundingBox) {}

        fn fly_to(&self, _center: LngLat, _zoom: f64) {}
    }

    #[test]
    fn test_build_query_carries_text_and_size() {
        let options = SearchBoxOptions::default();
        let query = build_query("denver", &options, None);
        assert_eq!(query.text, "denver");
        assert_eq!(query.size, 5);
        assert!(query.layers.is_none());
        assert!(query.focus_point.is_none());
    }

    #[test]
    fn test_build_query_uses_map_center_when_zoomed_in() {
        let options = SearchBoxOptions::default();
        let camera = FixedCamera {
            zoom: 9.0,
            center: LngLat::new(-104.99, 39.74),
        };
        let query = build_query("denver", &options, Some(&camera));
        assert_eq!(query.focus_point, Some(LngLat::new(-104.99, 39.74)));
    }

    #[test]
    fn test_build_query_skips_map_center_when_zoomed_out() {
        let options = SearchBoxOptions::default();
        let camera = FixedCamera {
            zoom: 3.0,
            center: LngLat::new(-104.99, 39.74),
        };
        let query = build_query("denver", &options, Some(&camera));
        assert!(query.focus_point.is_none());
    }

    #[test]
    fn test_build_query_fixed_focus_point_wins() {
        let options = SearchBoxOptions {
            fixed_focus_point: Some(LngLat::new(2.35, 48.85)),
            ..Default::default()
        };
        let camera = FixedCamera {
            zoom: 12.0,
            center: LngLat::new(-104.99, 39.74),
        };
        let query = build_query("paris", &options, Some(&camera));
        assert_eq!(query.focus_point, Some(LngLat::new(2.35, 48.85)));
    }

    #[test]
    fn test_build_query_respects_disabled_map_focus() {
        let options = SearchBoxOptions {
            use_map_focus_point: false,
            ..Default::default()
        };
        let camera = FixedCamera {
            zoom: 12.0,
            center: LngLat::new(-104.99, 39.74),
        };
        let query = build_query("denver", &options, Some(&camera));
        assert!(query.focus_point.is_none());
    }

    #[test]
    fn test_build_query_passes_layer_filter() {
        let options = SearchBoxOptions {
            layers: Some(vec![PlaceLayer::Locality, PlaceLayer::Region]),
            ..Default::default()
        };
        let query = build_query("denver", &options, None);
        assert_eq!(
            query.layers,
            Some(vec![PlaceLayer::Locality, PlaceLayer::Region])
        );
    }
}

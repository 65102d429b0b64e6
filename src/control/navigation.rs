//! Viewport target resolution for a chosen place.

use crate::feature::{PlaceFeature, PlaceLayer};
use crate::geo::{BoundingBox, LngLat};

/// Where the camera should go for a committed result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum CameraTarget {
    /// Fit the viewport to the feature's bounding box.
    Bounds(BoundingBox),
    /// Animate to the feature's point at a layer-appropriate zoom.
    Point { center: LngLat, zoom: f64 },
}

/// Resolve the camera target for a feature.
///
/// An explicit bounding box always wins; otherwise the point geometry is
/// paired with the layer's zoom. `None` when the feature has neither.
pub(crate) fn resolve_target(feature: &PlaceFeature) -> Option<CameraTarget> {
    if let Some(bbox) = feature.bbox {
        return Some(CameraTarget::Bounds(bbox));
    }

    feature.geometry.map(|center| CameraTarget::Point {
        center,
        zoom: zoom_for_layer(&feature.layer),
    })
}

/// Target zoom per place type.
///
/// Hand-tuned policy, not derived from any formula. Do not collapse the
/// groupings.
pub(crate) fn zoom_for_layer(layer: &PlaceLayer) -> f64 {
    match layer {
        PlaceLayer::Venue | PlaceLayer::Address | PlaceLayer::Poi => 15.0,
        PlaceLayer::Macrohood
        | PlaceLayer::Postalcode
        | PlaceLayer::Neighbourhood
        | PlaceLayer::Street => 14.0,
        PlaceLayer::Marinearea
        | PlaceLayer::Locality
        | PlaceLayer::Borough
        | PlaceLayer::Localadmin => 12.0,
        PlaceLayer::Dependency | PlaceLayer::County => 10.0,
        PlaceLayer::Macroregion | PlaceLayer::Region => 7.0,
        PlaceLayer::Empire | PlaceLayer::Macrocounty | PlaceLayer::Country => 4.0,
        PlaceLayer::Continent | PlaceLayer::Ocean => 2.0,
        PlaceLayer::Unknown(_) => 10.0,
    }
}

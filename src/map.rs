//! Host map collaborator interface.

use crate::geo::{BoundingBox, LngLat};

/// Operations the control needs from its host map.
///
/// Implementations wrap whatever rendering stack the host uses; the control
/// only reads the current view and requests viewport moves. Methods take
/// `&self` because hosts typically hold their map behind interior
/// mutability and camera moves are fire-and-forget animations.
pub trait MapCamera: Send + Sync {
    /// Current zoom level.
    fn zoom(&self) -> f64;

    /// Current view center.
    fn center(&self) -> LngLat;

    /// Fit the viewport to a bounding box.
    fn fit_bounds(&self, bounds: &BoundingBox);

    /// Animate the viewport to a point at the given zoom.
    fn fly_to(&self, center: LngLat, zoom: f64);
}

//! Coordinate and bounding-box value types shared across queries, features,
//! and camera operations.

use serde::{Deserialize, Serialize};

/// A WGS84 longitude/latitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// A geographic bounding box in west/south/east/north order, matching the
/// wire format used by geocoding responses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Build from a `[west, south, east, north]` array as returned by the
    /// geocoding API.
    pub fn from_wsen(values: [f64; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    pub fn to_wsen(self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }

    /// Corner pair form (south-west, north-east) used by viewport-fit
    /// operations.
    pub fn corners(self) -> (LngLat, LngLat) {
        (
            LngLat::new(self.west, self.south),
            LngLat::new(self.east, self.north),
        )
    }
}

//! Normalized place representation.
//!
//! Geocoding backends return features in more than one wire shape; the
//! pipeline only ever sees [`PlaceFeature`], produced by the translation
//! layer at the client boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::{BoundingBox, LngLat};

/// Place-type classification assigned by the geocoding service.
///
/// Unrecognized layer strings are preserved verbatim in `Unknown` so display
/// and logging keep whatever the server sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlaceLayer {
    Venue,
    Address,
    Street,
    Postalcode,
    Neighbourhood,
    Macrohood,
    Borough,
    Localadmin,
    Locality,
    County,
    Macrocounty,
    Region,
    Macroregion,
    Dependency,
    Country,
    Empire,
    Continent,
    Marinearea,
    Ocean,
    Poi,
    Unknown(String),
}

impl PlaceLayer {
    pub fn parse(s: &str) -> Self {
        match s {
            "venue" => PlaceLayer::Venue,
            "address" => PlaceLayer::Address,
            "street" => PlaceLayer::Street,
            "postalcode" => PlaceLayer::Postalcode,
            "neighbourhood" => PlaceLayer::Neighbourhood,
            "macrohood" => PlaceLayer::Macrohood,
            "borough" => PlaceLayer::Borough,
            "localadmin" => PlaceLayer::Localadmin,
            "locality" => PlaceLayer::Locality,
            "county" => PlaceLayer::County,
            "macrocounty" => PlaceLayer::Macrocounty,
            "region" => PlaceLayer::Region,
            "macroregion" => PlaceLayer::Macroregion,
            "dependency" => PlaceLayer::Dependency,
            "country" => PlaceLayer::Country,
            "empire" => PlaceLayer::Empire,
            "continent" => PlaceLayer::Continent,
            "marinearea" => PlaceLayer::Marinearea,
            "ocean" => PlaceLayer::Ocean,
            "poi" => PlaceLayer::Poi,
            other => PlaceLayer::Unknown(other.to_string()),
        }
    }

    /// The wire name of this layer, as sent in query parameters and shown in
    /// result subtitles.
    pub fn as_str(&self) -> &str {
        match self {
            PlaceLayer::Venue => "venue",
            PlaceLayer::Address => "address",
            PlaceLayer::Street => "street",
            PlaceLayer::Postalcode => "postalcode",
            PlaceLayer::Neighbourhood => "neighbourhood",
            PlaceLayer::Macrohood => "macrohood",
            PlaceLayer::Borough => "borough",
            PlaceLayer::Localadmin => "localadmin",
            PlaceLayer::Locality => "locality",
            PlaceLayer::County => "county",
            PlaceLayer::Macrocounty => "macrocounty",
            PlaceLayer::Region => "region",
            PlaceLayer::Macroregion => "macroregion",
            PlaceLayer::Dependency => "dependency",
            PlaceLayer::Country => "country",
            PlaceLayer::Empire => "empire",
            PlaceLayer::Continent => "continent",
            PlaceLayer::Marinearea => "marinearea",
            PlaceLayer::Ocean => "ocean",
            PlaceLayer::Poi => "poi",
            PlaceLayer::Unknown(s) => s,
        }
    }
}

impl From<String> for PlaceLayer {
    fn from(s: String) -> Self {
        PlaceLayer::parse(&s)
    }
}

impl From<PlaceLayer> for String {
    fn from(layer: PlaceLayer) -> Self {
        layer.as_str().to_string()
    }
}

impl fmt::Display for PlaceLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized place feature data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceFeature {
    /// Global identifier, used for follow-up detail lookups.
    pub gid: String,
    /// Display name.
    pub label: String,
    /// Place-type classification.
    pub layer: PlaceLayer,
    /// Point geometry. Absent on summary-only results; resolved through a
    /// detail lookup before navigation.
    pub geometry: Option<LngLat>,
    /// Explicit bounding box, when the place covers an area.
    pub bbox: Option<BoundingBox>,
    /// Containing country, when known.
    pub country: Option<String>,
    /// Containing continent, when known.
    pub continent: Option<String>,
    /// Server-supplied coarse location line (newer response shape).
    pub coarse_location: Option<String>,
}

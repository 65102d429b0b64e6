pub mod control;
pub mod error;
pub mod feature;
pub mod geo;
pub mod geocoder;
pub mod map;
pub mod options;

pub use control::view::{NO_RESULTS_TEXT, PLACEHOLDER, ResultEntry, ResultIcon, ResultListView};
pub use control::{Key, SearchBox};
pub use error::{PinpointError, Result};
pub use feature::{PlaceFeature, PlaceLayer};
pub use geo::{BoundingBox, LngLat};
pub use geocoder::pelias::{DEFAULT_BASE_URL, PeliasClient};
pub use geocoder::{Geocoder, SearchQuery};
pub use map::MapCamera;
pub use options::{ResultSelectedCallback, SearchBoxOptions};

//! Computed view model for rendering.
//!
//! The control is headless: instead of building widgets it exposes a
//! [`ResultListView`] snapshot computed from the raw state. Hosts paint the
//! snapshot with whatever toolkit they use and feed pointer/keyboard events
//! back into the control.

use crate::feature::{PlaceFeature, PlaceLayer};

use super::state::ControlState;

/// Input placeholder shown while the field is empty.
pub const PLACEHOLDER: &str = "Search for places...";

/// Placeholder row text for an empty winning result set.
pub const NO_RESULTS_TEXT: &str = "No Results Found";

/// Category icon for a result entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultIcon {
    Poi,
    Address,
    Street,
    Postal,
    Locality,
    Region,
    Country,
    Continent,
    Marine,
    /// Generic fallback for unrecognized place types.
    Marker,
}

/// One rendered result row.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    /// Primary line: the place's display name.
    pub label: String,
    /// Secondary descriptive line.
    pub subtitle: String,
    /// Category icon.
    pub icon: ResultIcon,
    /// Whether this row is the keyboard-highlighted one.
    pub highlighted: bool,
}

/// Snapshot of everything a host needs to paint the control.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultListView {
    /// Current input text.
    pub input: String,
    /// Input placeholder.
    pub placeholder: &'static str,
    /// Whether a query is in flight.
    pub loading: bool,
    /// Whether the result panel is shown.
    pub panel_visible: bool,
    /// Whether the clear button is shown.
    pub clear_visible: bool,
    /// Whether the input holds focus.
    pub focused: bool,
    /// Result rows in server relevance order. Empty when `no_results`.
    pub entries: Vec<ResultEntry>,
    /// The visible panel holds no results; hosts render the
    /// [`NO_RESULTS_TEXT`] placeholder row.
    pub no_results: bool,
}

/// Pure function: compute the view model from the raw state.
pub(crate) fn compute_view(state: &ControlState) -> ResultListView {
    let entries: Vec<ResultEntry> = state
        .results
        .iter()
        .enumerate()
        .map(|(index, feature)| ResultEntry {
            label: feature.label.clone(),
            subtitle: subtitle(feature),
            icon: icon_for_layer(&feature.layer),
            highlighted: state.cursor == Some(index),
        })
        .collect();

    ResultListView {
        input: state.input.clone(),
        placeholder: PLACEHOLDER,
        loading: state.loading,
        panel_visible: state.panel_visible,
        clear_visible: !state.input.is_empty(),
        focused: state.focused,
        no_results: state.panel_visible && entries.is_empty(),
        entries,
    }
}

/// Secondary line for a result row.
///
/// The server-supplied coarse location wins when present; otherwise the
/// line is derived from the layer and the containing country (or continent,
/// for countries themselves).
pub(crate) fn subtitle(feature: &PlaceFeature) -> String {
    if let Some(coarse) = &feature.coarse_location {
        return coarse.clone();
    }

    let mut line = feature.layer.as_str().to_string();
    if feature.layer == PlaceLayer::Country
        && let Some(continent) = &feature.continent
    {
        line.push_str(" in ");
        line.push_str(continent);
    } else if feature.layer != PlaceLayer::Continent
        && let Some(country) = &feature.country
    {
        line.push_str(" in ");
        line.push_str(country);
    }
    line
}

/// Category icon for a layer, with a generic-marker fallback.
pub(crate) fn icon_for_layer(layer: &PlaceLayer) -> ResultIcon {
    match layer {
        PlaceLayer::Venue | PlaceLayer::Poi => ResultIcon::Poi,
        PlaceLayer::Address => ResultIcon::Address,
        PlaceLayer::Street => ResultIcon::Street,
        PlaceLayer::Postalcode => ResultIcon::Postal,
        PlaceLayer::Neighbourhood
        | PlaceLayer::Macrohood
        | PlaceLayer::Borough
        | PlaceLayer::Localadmin
        | PlaceLayer::Locality => ResultIcon::Locality,
        PlaceLayer::County
        | PlaceLayer::Macrocounty
        | PlaceLayer::Region
        | PlaceLayer::Macroregion
        | PlaceLayer::Dependency => ResultIcon::Region,
        PlaceLayer::Country | PlaceLayer::Empire => ResultIcon::Country,
        PlaceLayer::Continent => ResultIcon::Continent,
        PlaceLayer::Marinearea | PlaceLayer::Ocean => ResultIcon::Marine,
        PlaceLayer::Unknown(_) => ResultIcon::Marker,
    }
}

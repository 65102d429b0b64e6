//! Raw control state and the throttle gate.
//!
//! `ControlState` is the single mutable cell behind a search box: input
//! text, result set, selection cursor, panel flags, and the query session
//! fields the dispatcher and race guard operate on. The gate decision is a
//! pure function so the timing rules are testable in isolation.

use std::time::Duration;

use tokio::time::Instant;

use crate::feature::PlaceFeature;
use crate::options::SearchBoxOptions;

/// A deferred gate re-check waiting on the remaining throttle window.
///
/// Only one may be pending per control; later deferred events merge their
/// explicit-search flag into the existing slot instead of stacking timers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingRecheck {
    pub explicit_search: bool,
}

/// State that changes during user interaction.
#[derive(Debug, Default)]
pub(crate) struct ControlState {
    /// Current input text.
    pub input: String,
    /// Result set for the current session, in server relevance order.
    pub results: Vec<PlaceFeature>,
    /// Keyboard selection cursor. `None` or a valid index into `results`.
    pub cursor: Option<usize>,
    /// Input text as it was before keyboard navigation began.
    pub original_input: String,
    /// Whether the result panel is shown.
    pub panel_visible: bool,
    /// Whether a dispatched query is awaiting its response.
    pub loading: bool,
    /// Whether the input currently holds focus.
    pub focused: bool,
    /// Timestamp of the most recent dispatch, for throttle arithmetic.
    pub last_request_at: Option<Instant>,
    /// Text of the most recent dispatch, for duplicate suppression.
    pub last_request_string: String,
    /// Identity of the latest dispatch; responses carrying an older value
    /// are discarded.
    pub request_seq: u64,
    /// Single-slot deferred re-check.
    pub retry: Option<PendingRecheck>,
}

impl ControlState {
    /// Drop the result set and all selection state derived from it.
    pub fn clear_results(&mut self) {
        self.results.clear();
        self.cursor = None;
        self.original_input.clear();
    }
}

/// Outcome of evaluating the throttle gate for one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GateDecision {
    /// Input is empty: clear results and hide the panel.
    ClearAndHide,
    /// Input is below the minimum query length: do nothing.
    TooShort,
    /// Inside the throttle window: re-check after the remaining wait.
    Defer(Duration),
    /// Same text as the last dispatch and not an explicit search: skip.
    Duplicate,
    /// Dispatch a query now.
    Dispatch,
}

/// Evaluate the gate against the current state.
///
/// Re-invoked by the deferred re-check with the then-current input, so a
/// typing burst settles on the latest text.
pub(crate) fn evaluate_gate(
    state: &ControlState,
    options: &SearchBoxOptions,
    explicit_search: bool,
) -> GateDecision {
    if state.input.is_empty() {
        return GateDecision::ClearAndHide;
    }

    if state.input.chars().count() < options.min_input_length {
        return GateDecision::TooShort;
    }

    if let Some(last) = state.last_request_at {
        let elapsed = last.elapsed();
        if elapsed < options.min_wait_period {
            return GateDecision::Defer(options.min_wait_period - elapsed);
        }
    }

    if state.input == state.last_request_string && !explicit_search {
        return GateDecision::Duplicate;
    }

    GateDecision::Dispatch
}

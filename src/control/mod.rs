//! The search box control.
//!
//! One `SearchBox` instance owns the full query/result/selection lifecycle
//! for one input field: it gates and debounces outgoing queries, dispatches
//! them to the [`Geocoder`], applies responses behind a race guard so stale
//! answers never clobber newer ones, tracks keyboard selection, and moves
//! the host map when a result is committed.
//!
//! Hosts feed events in (`set_input`, `press_key`, `click_result`, `focus`,
//! `clear`) and paint the [`ResultListView`] snapshot from `view()`. All
//! event entry points take `&self`; overlapping async calls are serialized
//! at the state level, so a host can drive the control from any
//! single-threaded or multi-threaded event loop.

mod navigation;
mod selection;
mod state;
pub mod view;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::error::Result;
use crate::feature::PlaceFeature;
use crate::geocoder::pelias::PeliasClient;
use crate::geocoder::{Geocoder, SearchQuery, build_query};
use crate::map::MapCamera;
use crate::options::SearchBoxOptions;

use self::navigation::CameraTarget;
use self::state::{ControlState, GateDecision, PendingRecheck, evaluate_gate};
use self::view::ResultListView;

/// Keyboard events the control understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// Interactive place-search control.
pub struct SearchBox<G> {
    options: SearchBoxOptions,
    geocoder: G,
    map: Mutex<Option<Arc<dyn MapCamera>>>,
    state: Mutex<ControlState>,
}

impl SearchBox<PeliasClient> {
    /// Create a control backed by the bundled Pelias client, configured
    /// from the options' base URL, API key, and request timeout.
    pub fn new(options: SearchBoxOptions) -> Result<Self> {
        let mut client = match &options.base_url {
            Some(base_url) => PeliasClient::with_base_url(base_url)?,
            None => PeliasClient::new()?,
        };
        client = client.with_timeout(options.request_timeout)?;
        if let Some(api_key) = &options.api_key {
            client = client.with_api_key(api_key);
        }
        Ok(Self::with_geocoder(client, options))
    }
}

impl<G: Geocoder> SearchBox<G> {
    /// Create a control over any [`Geocoder`] implementation.
    pub fn with_geocoder(geocoder: G, options: SearchBoxOptions) -> Self {
        Self {
            options,
            geocoder,
            map: Mutex::new(None),
            state: Mutex::new(ControlState::default()),
        }
    }

    /// Attach the host map. Called when the control is added to the map.
    pub fn on_add(&self, map: Arc<dyn MapCamera>) {
        *self.map.lock() = Some(map);
    }

    /// Detach from the host map. The control keeps its configuration and
    /// can be re-added later.
    pub fn on_remove(&self) {
        *self.map.lock() = None;
        let mut state = self.state.lock();
        state.panel_visible = false;
        state.focused = false;
    }

    /// Snapshot of everything a host needs to paint the control.
    pub fn view(&self) -> ResultListView {
        view::compute_view(&self.state.lock())
    }

    pub fn options(&self) -> &SearchBoxOptions {
        &self.options
    }

    /// Input-change event: store the new text and run the gate/dispatch
    /// pipeline. Resolves once the event has settled: immediately when the
    /// gate rejects it, after the response lands when a query is dispatched,
    /// or after the deferred re-check when the event falls inside the
    /// throttle window.
    pub async fn set_input(&self, text: impl Into<String>) {
        {
            self.state.lock().input = text.into();
        }
        self.run_input_pipeline(false).await;
    }

    /// Keyboard event.
    pub async fn press_key(&self, key: Key) {
        match key {
            Key::ArrowDown => {
                let mut state = self.state.lock();
                selection::move_down(&mut state);
            }
            Key::ArrowUp => {
                let mut state = self.state.lock();
                selection::move_up(&mut state);
            }
            Key::Escape => self.clear(),
            Key::Enter => {
                let has_selection = self.state.lock().cursor.is_some();
                if has_selection {
                    self.commit_selected().await;
                } else if self.options.search_on_enter {
                    self.run_input_pipeline(true).await;
                }
            }
        }
    }

    /// Pointer commit: select the clicked entry and navigate to it.
    pub async fn click_result(&self, index: usize) {
        let feature = {
            let mut state = self.state.lock();
            match state.results.get(index).cloned() {
                Some(feature) => {
                    state.cursor = Some(index);
                    state.input = feature.label.clone();
                    feature
                }
                None => return,
            }
        };
        self.commit_feature(feature).await;
    }

    /// Focus event: re-show existing results.
    pub fn focus(&self) {
        let mut state = self.state.lock();
        state.focused = true;
        if !state.results.is_empty() {
            state.panel_visible = true;
        }
    }

    /// Clear everything: input text, results, selection, panel. Focus
    /// returns to the input. Idempotent.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.input.clear();
        state.clear_results();
        state.panel_visible = false;
        state.focused = true;
    }

    /// Gate, defer, and dispatch loop for one input event.
    async fn run_input_pipeline(&self, explicit_search: bool) {
        enum Step {
            Done,
            Wait(Duration),
            Go(u64, SearchQuery),
        }

        let mut explicit = explicit_search;
        let (seq, query) = loop {
            let step = {
                let mut state = self.state.lock();
                match evaluate_gate(&state, &self.options, explicit) {
                    GateDecision::ClearAndHide => {
                        state.clear_results();
                        state.panel_visible = false;
                        Step::Done
                    }
                    GateDecision::TooShort | GateDecision::Duplicate => Step::Done,
                    GateDecision::Defer(remaining) => {
                        if let Some(pending) = state.retry.as_mut() {
                            // A re-check is already scheduled; it will see
                            // the current input when it fires.
                            pending.explicit_search |= explicit;
                            Step::Done
                        } else {
                            state.retry = Some(PendingRecheck {
                                explicit_search: explicit,
                            });
                            Step::Wait(remaining)
                        }
                    }
                    GateDecision::Dispatch => {
                        let text = state.input.clone();
                        state.last_request_string = text.clone();
                        state.last_request_at = Some(Instant::now());
                        state.request_seq += 1;
                        state.loading = true;
                        let seq = state.request_seq;
                        let map = self.map.lock().clone();
                        let query = build_query(&text, &self.options, map.as_deref());
                        Step::Go(seq, query)
                    }
                }
            };

            match step {
                Step::Done => return,
                Step::Wait(remaining) => {
                    tokio::time::sleep(remaining).await;
                    let mut state = self.state.lock();
                    if let Some(pending) = state.retry.take() {
                        explicit = pending.explicit_search;
                    }
                }
                Step::Go(seq, query) => break (seq, query),
            }
        };

        let outcome = if explicit {
            self.geocoder.search(&query).await
        } else {
            self.geocoder.autocomplete(&query).await
        };

        self.apply_response(seq, outcome);
    }

    /// Apply a response if it still belongs to the latest dispatch.
    fn apply_response(&self, seq: u64, outcome: Result<Vec<PlaceFeature>>) {
        let mut state = self.state.lock();
        let latest = state.request_seq == seq;
        match outcome {
            Ok(features) => {
                if latest {
                    state.clear_results();
                    state.results = features;
                    state.panel_visible = true;
                }
            }
            Err(err) => {
                tracing::warn!("geocoding request failed: {err}");
            }
        }
        // Cleared for the latest request regardless of outcome.
        if latest {
            state.loading = false;
        }
    }

    async fn commit_selected(&self) {
        let feature = {
            let state = self.state.lock();
            state.cursor.and_then(|i| state.results.get(i).cloned())
        };
        if let Some(feature) = feature {
            self.commit_feature(feature).await;
        }
    }

    /// Resolve a chosen feature (fetching details when geometry is absent)
    /// and move the map to it.
    async fn commit_feature(&self, feature: PlaceFeature) {
        let resolved = if feature.geometry.is_none() {
            match self.geocoder.place_details(&feature.gid).await {
                Ok(mut features) => {
                    if features.is_empty() {
                        tracing::error!("no detail result for place '{}'", feature.gid);
                        return;
                    }
                    features.remove(0)
                }
                Err(err) => {
                    tracing::warn!("detail lookup failed for '{}': {err}", feature.gid);
                    return;
                }
            }
        } else {
            feature
        };

        let Some(target) = navigation::resolve_target(&resolved) else {
            tracing::error!("place '{}' has no geometry to navigate to", resolved.gid);
            return;
        };

        let map = self.map.lock().clone();
        if let Some(map) = map {
            match target {
                CameraTarget::Bounds(bounds) => map.fit_bounds(&bounds),
                CameraTarget::Point { center, zoom } => map.fly_to(center, zoom),
            }
        }

        {
            let mut state = self.state.lock();
            state.panel_visible = false;
            state.cursor = None;
            state.original_input.clear();
            state.focused = false;
        }

        if let Some(callback) = &self.options.on_result_selected {
            callback(&resolved);
        }
    }
}

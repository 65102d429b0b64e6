//! Keyboard selection state machine.
//!
//! Arrow keys move an optional cursor over the result list. The first
//! downward move snapshots the typed text; moving back above the first
//! result restores it. Entering a selection rewrites the input with the
//! selected result's label. Pointer clicks bypass this machine and commit
//! directly.

use super::state::ControlState;

/// ArrowDown: enter the list at the top, or advance within bounds.
pub(crate) fn move_down(state: &mut ControlState) {
    if state.results.is_empty() {
        return;
    }

    match state.cursor {
        None => {
            state.original_input = state.input.clone();
            state.cursor = Some(0);
        }
        Some(i) if i + 1 < state.results.len() => {
            state.cursor = Some(i + 1);
        }
        Some(_) => {}
    }

    sync_input_to_cursor(state);
}

/// ArrowUp: retract within bounds, or leave the list and restore the
/// original input.
pub(crate) fn move_up(state: &mut ControlState) {
    match state.cursor {
        Some(0) => {
            state.cursor = None;
            state.input = std::mem::take(&mut state.original_input);
        }
        Some(i) => {
            state.cursor = Some(i - 1);
            sync_input_to_cursor(state);
        }
        None => {}
    }
}

fn sync_input_to_cursor(state: &mut ControlState) {
    let label = state
        .cursor
        .and_then(|i| state.results.get(i))
        .map(|feature| feature.label.clone());
    if let Some(label) = label {
        state.input = label;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{PlaceFeature, PlaceLayer};

    fn place(label: &str) -> PlaceFeature {
        PlaceFeature {
            gid: format!("test:{label}"),
            label: label.to_string(),
            layer: PlaceLayer::Locality,
            geometry: None,
            bbox: None,
            country: None,
            continent: None,
            coarse_location: None,
        }
    }

    fn state_with_results(input: &str, labels: &[&str]) -> ControlState {
        ControlState {
            input: input.to_string(),
            results: labels.iter().map(|l| place(l)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_down_snapshots_input_and_selects_top() {
        let mut state = state_with_results("den", &["Denver", "Denton"]);
        move_down(&mut state);
        assert_eq!(state.cursor, Some(0));
        assert_eq!(state.original_input, "den");
        assert_eq!(state.input, "Denver");
    }

    #[test]
    fn test_down_stops_at_last_index() {
        let mut state = state_with_results("den", &["Denver", "Denton"]);
        move_down(&mut state);
        move_down(&mut state);
        move_down(&mut state);
        assert_eq!(state.cursor, Some(1));
        assert_eq!(state.input, "Denton");
    }

    #[test]
    fn test_up_from_top_restores_original_input() {
        let mut state = state_with_results("den", &["Denver", "Denton"]);
        move_down(&mut state);
        move_down(&mut state);
        move_up(&mut state);
        assert_eq!(state.cursor, Some(0));
        assert_eq!(state.input, "Denver");
        move_up(&mut state);
        assert_eq!(state.cursor, None);
        assert_eq!(state.input, "den");
    }

    #[test]
    fn test_up_with_no_selection_is_a_no_op() {
        let mut state = state_with_results("den", &["Denver"]);
        move_up(&mut state);
        assert_eq!(state.cursor, None);
        assert_eq!(state.input, "den");
    }

    #[test]
    fn test_down_on_empty_results_stays_out_of_selection() {
        let mut state = state_with_results("den", &[]);
        move_down(&mut state);
        assert_eq!(state.cursor, None);
        assert_eq!(state.input, "den");
    }

    #[test]
    fn test_cursor_invariant_under_key_sequences() {
        let mut state = state_with_results("den", &["A", "B", "C"]);
        let moves = [
            true, true, true, true, false, false, false, false, true, false, true, true,
        ];
        for down in moves {
            if down {
                move_down(&mut state);
            } else {
                move_up(&mut state);
            }
            match state.cursor {
                None => {}
                Some(i) => assert!(i < state.results.len()),
            }
        }
    }
}

//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, DisplayState, PendingLookup, ResultRegions};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Input actions =====
        Action::InputChange(text) => {
            if text == state.input {
                return DispatchResult::unchanged();
            }
            state.input = text;
            DispatchResult::changed()
        }

        // ===== Lookup actions =====
        Action::LookupSubmit(raw) => {
            let city = raw.trim();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            let city = city.to_string();

            state.input = raw;
            state.last_lookup_id += 1;
            let id = state.last_lookup_id;
            state.pending = Some(PendingLookup {
                id,
                city: city.clone(),
            });
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::FetchWeather { id, city })
        }

        Action::LookupDidLoad { id, result } => {
            if !take_pending(state, id) {
                return DispatchResult::unchanged();
            }
            state.display = DisplayState::Result(ResultRegions::from_result(&result));
            state.last_failure = None;
            DispatchResult::changed()
        }

        Action::LookupDidFail { id, reason } => {
            if !take_pending(state, id) {
                return DispatchResult::unchanged();
            }
            state.display = DisplayState::Error;
            state.last_failure = Some(reason);
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.is_pending() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Clears the pending lookup if `id` is the one in flight.
/// Completions of superseded lookups are dropped.
fn take_pending(state: &mut AppState, id: u64) -> bool {
    if state.pending.as_ref().is_some_and(|pending| pending.id == id) {
        state.pending = None;
        return true;
    }
    tracing::debug!(id, latest = state.last_lookup_id, "discarding stale lookup result");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherResult;
    use pretty_assertions::assert_eq;

    fn paris() -> WeatherResult {
        WeatherResult {
            location_name: "Paris".into(),
            temperature_celsius: 18.5,
            condition_description: "clear sky".into(),
        }
    }

    #[test]
    fn test_blank_submit_is_noop() {
        for raw in ["", " ", "   \t  ", "\n"] {
            let mut state = AppState::default();
            let before = state.clone();

            let result = reducer(&mut state, Action::LookupSubmit(raw.into()));

            assert!(!result.changed);
            assert!(result.effects.is_empty());
            assert_eq!(state.display, before.display);
            assert_eq!(state.pending, None);
            assert_eq!(state.last_lookup_id, 0);
        }
    }

    #[test]
    fn test_blank_submit_keeps_previous_display() {
        let mut state = AppState {
            display: DisplayState::Error,
            ..Default::default()
        };

        let result = reducer(&mut state, Action::LookupSubmit("  ".into()));

        assert!(!result.changed);
        assert_eq!(state.display, DisplayState::Error);
    }

    #[test]
    fn test_submit_trims_and_emits_fetch() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::LookupSubmit("  Paris \t".into()));

        assert!(result.changed);
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                id: 1,
                city: "Paris".into()
            }]
        );
        assert_eq!(
            state.pending,
            Some(PendingLookup {
                id: 1,
                city: "Paris".into()
            })
        );
        // Display regions only change once the lookup resolves
        assert_eq!(state.display, DisplayState::Idle);
    }

    #[test]
    fn test_load_shows_result_and_hides_error() {
        let mut state = AppState {
            display: DisplayState::Error,
            ..Default::default()
        };
        reducer(&mut state, Action::LookupSubmit("Paris".into()));

        let result = reducer(
            &mut state,
            Action::LookupDidLoad {
                id: 1,
                result: paris(),
            },
        );

        assert!(result.changed);
        assert!(state.display.result_visible());
        assert!(!state.display.error_visible());
        let regions = state.display.regions().unwrap();
        assert_eq!(regions.city_name, "Paris");
        assert_eq!(regions.temperature, "Temperature : 18.5");
        assert_eq!(regions.description, "Weather : clear sky");
        assert!(!state.is_pending());
    }

    #[test]
    fn test_failure_shows_error_and_hides_result() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LookupSubmit("Paris".into()));
        reducer(
            &mut state,
            Action::LookupDidLoad {
                id: 1,
                result: paris(),
            },
        );
        reducer(&mut state, Action::LookupSubmit("Atlantis".into()));

        let result = reducer(
            &mut state,
            Action::LookupDidFail {
                id: 2,
                reason: "no weather found for 'Atlantis'".into(),
            },
        );

        assert!(result.changed);
        assert!(state.display.error_visible());
        assert!(!state.display.result_visible());
        assert_eq!(
            state.last_failure.as_deref(),
            Some("no weather found for 'Atlantis'")
        );
    }

    #[test]
    fn test_superseded_lookup_is_discarded() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LookupSubmit("Paris".into()));
        reducer(&mut state, Action::LookupSubmit("Oslo".into()));

        let stale = reducer(
            &mut state,
            Action::LookupDidLoad {
                id: 1,
                result: paris(),
            },
        );
        assert!(!stale.changed);
        assert_eq!(state.display, DisplayState::Idle);
        assert_eq!(state.pending.as_ref().map(|p| p.id), Some(2));

        let stale_err = reducer(
            &mut state,
            Action::LookupDidFail {
                id: 1,
                reason: "timeout".into(),
            },
        );
        assert!(!stale_err.changed);
        assert_eq!(state.display, DisplayState::Idle);
    }

    #[test]
    fn test_completion_without_pending_is_ignored() {
        let mut state = AppState::default();

        let result = reducer(
            &mut state,
            Action::LookupDidLoad {
                id: 7,
                result: paris(),
            },
        );

        assert!(!result.changed);
        assert_eq!(state.display, DisplayState::Idle);
    }

    #[test]
    fn test_repeated_lookup_is_idempotent() {
        let mut state = AppState::default();

        reducer(&mut state, Action::LookupSubmit("Paris".into()));
        reducer(
            &mut state,
            Action::LookupDidLoad {
                id: 1,
                result: paris(),
            },
        );
        let first = state.display.clone();

        reducer(&mut state, Action::LookupSubmit("Paris".into()));
        reducer(
            &mut state,
            Action::LookupDidLoad {
                id: 2,
                result: paris(),
            },
        );

        assert_eq!(state.display, first);
    }

    #[test]
    fn test_tick_only_while_pending() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::Tick);
        assert!(!result.changed);
        assert_eq!(state.tick_count, 0);

        reducer(&mut state, Action::LookupSubmit("Paris".into()));
        let result = reducer(&mut state, Action::Tick);
        assert!(result.changed);
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn test_input_change() {
        let mut state = AppState::default();

        assert!(reducer(&mut state, Action::InputChange("Par".into())).changed);
        assert_eq!(state.input, "Par");
        assert!(!reducer(&mut state, Action::InputChange("Par".into())).changed);
    }
}

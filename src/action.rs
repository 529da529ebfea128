//! Actions for the lookup cycle

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherResult;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Input category =====
    /// City field text changed
    InputChange(String),

    // ===== Lookup category =====
    /// Activation with the current field text (trimmed by the reducer)
    LookupSubmit(String),

    /// Result: weather loaded for lookup `id`
    LookupDidLoad { id: u64, result: WeatherResult },

    /// Result: lookup `id` failed; `reason` is for diagnostics only
    LookupDidFail { id: u64, reason: String },

    // ===== UI category =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the pending spinner
    Tick,

    /// Exit the application
    Quit,
}

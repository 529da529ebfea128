//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current weather for one city, as decoded from the weather service
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherResult {
    pub location_name: String,
    pub temperature_celsius: f64,
    /// First condition reported by the service
    pub condition_description: String,
}

/// Texts written into the three lines of the result region
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResultRegions {
    pub city_name: String,
    pub temperature: String,
    pub description: String,
}

impl ResultRegions {
    pub fn from_result(result: &WeatherResult) -> Self {
        Self {
            city_name: result.location_name.clone(),
            temperature: format_temperature(result.temperature_celsius),
            description: format_description(&result.condition_description),
        }
    }
}

/// `{}` on f64 prints the shortest round-trip form, so 18.0 renders as "18".
pub fn format_temperature(celsius: f64) -> String {
    format!("Temperature : {}", celsius)
}

pub fn format_description(description: &str) -> String {
    format!("Weather : {}", description)
}

/// Which display region is visible
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum DisplayState {
    /// No lookup has completed yet; both regions hidden
    #[default]
    Idle,
    Result(ResultRegions),
    Error,
}

impl DisplayState {
    pub fn result_visible(&self) -> bool {
        matches!(self, DisplayState::Result(_))
    }

    pub fn error_visible(&self) -> bool {
        matches!(self, DisplayState::Error)
    }

    pub fn regions(&self) -> Option<&ResultRegions> {
        match self {
            DisplayState::Result(regions) => Some(regions),
            _ => None,
        }
    }
}

/// A lookup that has been issued and not yet resolved
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PendingLookup {
    pub id: u64,
    pub city: String,
}

/// Spinner timing while a lookup is in flight.
pub const SPINNER_TICK_MS: u64 = 120;
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Raw text of the city field (trimmed only on activation)
    #[debug(section = "Input", label = "City")]
    pub input: String,

    /// Idle → Result/Error, then Result ⇄ Error on each lookup
    #[debug(section = "Lookup", label = "Display", debug_fmt)]
    pub display: DisplayState,

    /// In-flight lookup, if any
    #[debug(section = "Lookup", label = "Pending", debug_fmt)]
    pub pending: Option<PendingLookup>,

    /// Id of the most recently issued lookup (0 = none yet)
    #[debug(section = "Lookup", label = "Last id")]
    pub last_lookup_id: u64,

    /// Reason of the last failure, for diagnostics only
    #[debug(section = "Lookup", label = "Last failure", debug_fmt)]
    pub last_failure: Option<String>,

    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    /// Create state with the city field prefilled
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick_count as usize % SPINNER_FRAMES.len()]
    }
}

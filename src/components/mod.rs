pub mod error_panel;
pub mod lookup_form;
pub mod result_panel;
pub mod weather_widget;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use error_panel::{ERROR_ICON, ERROR_MESSAGE, ErrorPanel};
pub use lookup_form::{BUTTON_LABEL, LookupForm, LookupFormProps};
pub use result_panel::{ResultPanel, ResultPanelProps};
pub use weather_widget::{TITLE, WeatherWidget, WeatherWidgetProps};

//! Render state - data structure sent from App layer to UI for rendering

use crate::app::form::CityForm;
use crate::messages::ui_events::AppTab;
use crate::models::City;
use crate::views::{CityListView, CountryListView};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Tab
    pub active_tab: AppTab,

    // Derived lists
    pub city_list: CityListView,
    pub country_list: CountryListView,
    pub selected_city: usize,

    // Detail panel
    pub current_city: Option<City>,

    // Status
    pub is_loading: bool,
    pub error: Option<String>,
    pub status_message: Option<String>,

    // Popups
    pub show_form: bool,
    pub form: CityForm,
    pub show_help: bool,
}

/// What the status bar should show
#[derive(Debug, Clone, PartialEq)]
pub enum StatusLine {
    Loading,
    Info(String),
    Error(String),
    Hint,
}

impl RenderState {
    /// Local messages are cleared whenever a newer store error arrives, so a
    /// message still present here is the most recent thing to report.
    pub fn status_line(&self) -> StatusLine {
        if self.is_loading {
            StatusLine::Loading
        } else if let Some(message) = &self.status_message {
            StatusLine::Info(message.clone())
        } else if let Some(error) = &self.error {
            StatusLine::Error(error.clone())
        } else {
            StatusLine::Hint
        }
    }
}

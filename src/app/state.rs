//! App state - pure data structure with no I/O logic

use crate::app::form::CityForm;
use crate::messages::ui_events::AppTab;
use crate::messages::RenderState;
use crate::models::City;
use crate::store::CitiesState;
use crate::views::{CityListView, CountryListView};

/// Main application state - pure data, no I/O
#[derive(Debug, Default)]
pub struct AppState {
    // Tab navigation
    pub active_tab: AppTab,

    // Latest store snapshot
    pub cities: CitiesState,

    // City list
    pub selected_city: usize,

    // Local feedback (form validation, confirmations)
    pub status_message: Option<String>,

    // Popups
    pub show_form: bool,
    pub form: CityForm,
    pub create_pending: bool,
    pub show_help: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// City under the list cursor
    pub fn selected(&self) -> Option<&City> {
        self.cities.cities.get(self.selected_city)
    }

    /// Replace the store snapshot, keeping the cursor inside the list
    pub fn sync_store(&mut self, snapshot: CitiesState) {
        // A fresh store error replaces any older local message
        if snapshot.error.is_some() && snapshot.error != self.cities.error {
            self.status_message = None;
        }
        self.cities = snapshot;
        let len = self.cities.cities.len();
        if self.selected_city >= len {
            self.selected_city = len.saturating_sub(1);
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            active_tab: self.active_tab,
            city_list: CityListView::from_state(&self.cities),
            country_list: CountryListView::from_state(&self.cities),
            selected_city: self.selected_city,
            current_city: self.cities.current_city.clone(),
            is_loading: self.cities.is_loading,
            error: self.cities.error.map(|e| e.to_string()),
            status_message: self.status_message.clone(),
            show_form: self.show_form,
            form: self.form.clone(),
            show_help: self.show_help,
        }
    }
}

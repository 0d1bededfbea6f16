//! Command handlers - business logic for processing UI events

use crate::app::form::CityForm;
use crate::app::AppState;
use crate::messages::ui_events::AppTab;
use crate::messages::{StoreCommand, StoreOutcome};

impl AppState {
    // ========================
    // Tabs
    // ========================

    pub fn switch_tab(&mut self, tab: AppTab) {
        self.active_tab = tab;
    }

    // ========================
    // City list
    // ========================

    pub fn next_city(&mut self) {
        let len = self.cities.cities.len();
        if len > 0 {
            self.selected_city = (self.selected_city + 1) % len;
        }
    }

    pub fn prev_city(&mut self) {
        let len = self.cities.cities.len();
        if len > 0 {
            self.selected_city = self.selected_city.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Load the selected city into the detail panel
    pub fn open_selected(&mut self) -> Option<StoreCommand> {
        self.selected().map(|city| StoreCommand::LoadOne(city.id.clone()))
    }

    pub fn delete_selected(&mut self) -> Option<StoreCommand> {
        self.selected().map(|city| StoreCommand::Remove(city.id.clone()))
    }

    pub fn reload(&mut self) -> StoreCommand {
        self.status_message = None;
        StoreCommand::LoadAll
    }

    // ========================
    // New-city form
    // ========================

    pub fn open_form(&mut self) {
        self.show_form = true;
        self.status_message = None;
    }

    pub fn cancel_form(&mut self) {
        self.show_form = false;
        self.form = CityForm::default();
    }

    pub fn form_char(&mut self, c: char) {
        self.form.push_char(c);
    }

    pub fn form_backspace(&mut self) {
        self.form.pop_char();
    }

    pub fn form_next_field(&mut self) {
        self.form.next_field();
    }

    pub fn form_prev_field(&mut self) {
        self.form.prev_field();
    }

    /// Validate the form; on success the create command is returned and the
    /// form stays open until the backend answers
    pub fn submit_form(&mut self) -> Option<StoreCommand> {
        if self.create_pending {
            return None;
        }
        match self.form.to_new_city(chrono::Utc::now()) {
            Ok(city) => {
                self.status_message = None;
                self.create_pending = true;
                Some(StoreCommand::Create(city))
            }
            Err(e) => {
                self.status_message = Some(e.to_string());
                None
            }
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Store task results
    // ========================

    pub fn handle_outcome(&mut self, outcome: StoreOutcome) {
        if matches!(outcome, StoreOutcome::Created(_)) {
            self.create_pending = false;
        }
        match outcome {
            StoreOutcome::Created(Some(city)) => {
                if let Some(index) = self.cities.cities.iter().position(|c| c.id == city.id) {
                    self.selected_city = index;
                }
                self.cancel_form();
                self.status_message = Some(format!("Added {} {}", city.emoji, city.city_name));
            }
            StoreOutcome::Created(None) => {
                // Keep the form so the user can retry; the store error is shown
            }
            StoreOutcome::Removed(id) => {
                if self.cities.city(&id).is_none() {
                    self.status_message = Some(String::from("City removed"));
                }
            }
            StoreOutcome::Loaded | StoreOutcome::CityLoaded(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ui_events::FormField;
    use crate::models::CityId;
    use crate::store::state::tests::city;
    use crate::store::{CitiesState, Transition};

    fn with_cities() -> AppState {
        let mut state = AppState::new();
        state.sync_store(CitiesState::default().reduce(Transition::CitiesLoaded(vec![
            city(1, "Lisbon", "Portugal", "🇵🇹"),
            city(2, "Madrid", "Spain", "🇪🇸"),
            city(3, "Berlin", "Germany", "🇩🇪"),
        ])));
        state
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = with_cities();
        state.prev_city();
        assert_eq!(state.selected_city, 2);
        state.next_city();
        assert_eq!(state.selected_city, 0);
    }

    #[test]
    fn test_selection_on_empty_list() {
        let mut state = AppState::new();
        state.next_city();
        state.prev_city();
        assert_eq!(state.selected_city, 0);
        assert_eq!(state.open_selected(), None);
        assert_eq!(state.delete_selected(), None);
    }

    #[test]
    fn test_open_and_delete_use_selected_id() {
        let mut state = with_cities();
        state.next_city();
        assert_eq!(state.open_selected(), Some(StoreCommand::LoadOne(CityId::Number(2))));
        assert_eq!(state.delete_selected(), Some(StoreCommand::Remove(CityId::Number(2))));
    }

    #[test]
    fn test_sync_clamps_selection() {
        let mut state = with_cities();
        state.selected_city = 2;
        let snapshot = state.cities.clone().reduce(Transition::CityDeleted(CityId::Number(3)));
        state.sync_store(snapshot);
        assert_eq!(state.selected_city, 1);
    }

    #[test]
    fn test_invalid_form_reports_locally() {
        let mut state = with_cities();
        state.open_form();
        state.form_char('X');
        assert_eq!(state.submit_form(), None);
        assert_eq!(state.status_message.as_deref(), Some("Country is required"));
        assert!(state.show_form);
        assert_eq!(state.cities.error, None);
    }

    #[test]
    fn test_valid_form_yields_create() {
        let mut state = AppState::new();
        state.open_form();
        for (field, text) in [
            (FormField::CityName, "Rome"),
            (FormField::Country, "Italy"),
            (FormField::Emoji, "it"),
            (FormField::Latitude, "41.9"),
            (FormField::Longitude, "12.5"),
        ] {
            assert_eq!(state.form.active_field, field);
            text.chars().for_each(|c| state.form_char(c));
            state.form_next_field();
        }
        match state.submit_form() {
            Some(StoreCommand::Create(city)) => {
                assert_eq!(city.city_name, "Rome");
                assert_eq!(city.emoji, "🇮🇹");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_second_submit_ignored_while_create_in_flight() {
        let mut state = AppState::new();
        state.open_form();
        state.form = CityForm {
            city_name: "Rome".to_string(),
            country: "Italy".to_string(),
            emoji: "it".to_string(),
            latitude: "41.9".to_string(),
            longitude: "12.5".to_string(),
            ..CityForm::default()
        };
        assert!(matches!(state.submit_form(), Some(StoreCommand::Create(_))));
        state.sync_store(state.cities.clone().reduce(Transition::Loading));
        assert_eq!(state.submit_form(), None);

        // A refused create re-enables the form
        state.sync_store(
            state
                .cities
                .clone()
                .reduce(Transition::Rejected(crate::store::StoreError::CreateCity)),
        );
        state.handle_outcome(StoreOutcome::Created(None));
        assert!(matches!(state.submit_form(), Some(StoreCommand::Create(_))));
    }

    #[test]
    fn test_local_message_newer_than_store_error_is_kept() {
        let mut state = with_cities();
        state.sync_store(
            state
                .cities
                .clone()
                .reduce(Transition::Rejected(crate::store::StoreError::FetchCities)),
        );
        state.open_form();
        state.form_char('X');
        assert_eq!(state.submit_form(), None);

        // Re-syncing the same failed snapshot keeps the validation message
        state.sync_store(state.cities.clone());
        assert_eq!(state.status_message.as_deref(), Some("Country is required"));

        // A new failure takes over again
        state.sync_store(
            state
                .cities
                .clone()
                .reduce(Transition::Rejected(crate::store::StoreError::DeleteCity)),
        );
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn test_created_outcome_selects_and_closes_form() {
        let mut state = with_cities();
        state.open_form();
        state.form_char('R');
        let rome = city(4, "Rome", "Italy", "🇮🇹");
        let snapshot = state.cities.clone().reduce(Transition::CityCreated(rome.clone()));
        state.sync_store(snapshot);
        state.handle_outcome(StoreOutcome::Created(Some(rome)));

        assert_eq!(state.selected_city, 3);
        assert!(!state.show_form);
        assert_eq!(state.form, CityForm::default());
    }

    #[test]
    fn test_failed_create_keeps_form() {
        let mut state = with_cities();
        state.open_form();
        state.form_char('R');
        state.handle_outcome(StoreOutcome::Created(None));
        assert!(state.show_form);
        assert_eq!(state.form.city_name, "R");
    }

    #[test]
    fn test_render_state_reflects_store_error() {
        let mut state = with_cities();
        let snapshot = state
            .cities
            .clone()
            .reduce(Transition::Rejected(crate::store::StoreError::FetchCity));
        state.sync_store(snapshot);
        let render = state.to_render_state();
        assert_eq!(render.error.as_deref(), Some("unable to fetch city data"));
        assert!(!render.is_loading);
    }
}

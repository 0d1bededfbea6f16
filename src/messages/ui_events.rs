//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application tabs
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum AppTab {
    #[default]
    Cities,
    Countries,
}

/// Fields of the new-city form, in tab order
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum FormField {
    #[default]
    CityName,
    Country,
    Emoji,
    Latitude,
    Longitude,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::CityName,
        FormField::Country,
        FormField::Emoji,
        FormField::Latitude,
        FormField::Longitude,
        FormField::Notes,
    ];

    pub fn next(&self) -> FormField {
        match self {
            FormField::CityName => FormField::Country,
            FormField::Country => FormField::Emoji,
            FormField::Emoji => FormField::Latitude,
            FormField::Latitude => FormField::Longitude,
            FormField::Longitude => FormField::Notes,
            FormField::Notes => FormField::CityName,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::CityName => FormField::Notes,
            FormField::Country => FormField::CityName,
            FormField::Emoji => FormField::Country,
            FormField::Latitude => FormField::Emoji,
            FormField::Longitude => FormField::Latitude,
            FormField::Notes => FormField::Longitude,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::CityName => "City name",
            FormField::Country => "Country",
            FormField::Emoji => "Flag (emoji or country code)",
            FormField::Latitude => "Latitude",
            FormField::Longitude => "Longitude",
            FormField::Notes => "Notes",
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Tab navigation
    SwitchTab(AppTab),

    // City list
    NextCity,
    PrevCity,
    OpenCity,
    DeleteCity,
    Reload,

    // New-city form
    OpenForm,
    FormChar(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    SubmitForm,
    CancelForm,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_tab: AppTab,
    show_form: bool,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Popups first
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if show_form {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::CancelForm),
            KeyCode::Enter => Some(UiEvent::SubmitForm),
            KeyCode::Tab | KeyCode::Down => Some(UiEvent::FormNextField),
            KeyCode::BackTab | KeyCode::Up => Some(UiEvent::FormPrevField),
            KeyCode::Backspace => Some(UiEvent::FormBackspace),
            KeyCode::Char(c) => Some(UiEvent::FormChar(c)),
            _ => None,
        };
    }

    // Keys shared by both tabs
    match key.code {
        KeyCode::Char('1') => return Some(UiEvent::SwitchTab(AppTab::Cities)),
        KeyCode::Char('2') => return Some(UiEvent::SwitchTab(AppTab::Countries)),
        KeyCode::Tab => {
            let next = match active_tab {
                AppTab::Cities => AppTab::Countries,
                AppTab::Countries => AppTab::Cities,
            };
            return Some(UiEvent::SwitchTab(next));
        }
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Char('r') => return Some(UiEvent::Reload),
        KeyCode::Char('n') => return Some(UiEvent::OpenForm),
        _ => {}
    }

    match active_tab {
        AppTab::Cities => handle_cities_tab_keys(key),
        AppTab::Countries => None,
    }
}

/// Handle keys for the Cities tab
fn handle_cities_tab_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevCity),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextCity),
        KeyCode::Enter => Some(UiEvent::OpenCity),
        KeyCode::Char('d') | KeyCode::Delete => Some(UiEvent::DeleteCity),
        _ => None,
    }
}

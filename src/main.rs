//! City Tracker - Actor-based travel journal for the terminal
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Store Layer (Tokio) - async city operations against the REST backend

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use city_tracker::app::AppActor;
use city_tracker::config::AppConfig;
use city_tracker::constants::APP_NAME;
use city_tracker::messages::ui_events::{key_to_ui_event, AppTab, FormField};
use city_tracker::messages::{RenderState, StatusLine, UiEvent};
use city_tracker::network::HttpCityApi;
use city_tracker::store::CitiesStore;
use city_tracker::ui::{
    format_position, format_visit_date_long, render_city_list, render_country_list, render_tabs,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", &config.log_file);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    tracing::info!(api_url = %config.api_url, "Starting {}", APP_NAME);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor around the store
    let api = HttpCityApi::new(config.api_url.clone(), config.request_timeout());
    let store = CitiesStore::new(api);
    let app_actor = AppActor::new(store, render_tx);
    tokio::spawn(app_actor.run(ui_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Exiting");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_tab,
                    current_state.show_form,
                    current_state.show_help,
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Tab bar
            Constraint::Min(0),     // Content
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_tab_bar(f, state, main_chunks[0]);

    match state.active_tab {
        AppTab::Cities => draw_cities_tab(f, state, main_chunks[1]),
        AppTab::Countries => draw_countries_tab(f, state, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    // Popups
    if state.show_form {
        draw_form_popup(f, state, area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_tab_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let selected = match state.active_tab {
        AppTab::Cities => 0,
        AppTab::Countries => 1,
    };
    f.render_widget(render_tabs(&[" 1:Cities ", " 2:Countries "], selected), area);
}

fn draw_cities_tab(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),  // City list
            Constraint::Percentage(55),  // Details
        ])
        .split(area);

    let list = render_city_list(&state.city_list, state.selected_city, " Cities (↑/↓ select, Enter open) ");
    let mut list_state = ListState::default().with_selected(Some(state.selected_city));
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    draw_city_details(f, state, chunks[1]);
}

fn draw_city_details(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" City ");

    let lines: Vec<Line> = match &state.current_city {
        Some(city) => {
            let label = Style::default().fg(Color::DarkGray);
            let mut lines = vec![
                Line::from(vec![
                    Span::raw(format!("{} ", city.emoji)),
                    Span::styled(city.city_name.clone(), Style::default().fg(Color::Cyan).bold()),
                    Span::raw(format!(", {}", city.country)),
                ]),
                Line::raw(""),
                Line::styled(format!("You went to {} on", city.city_name), label),
                Line::raw(format_visit_date_long(&city.date)),
                Line::raw(""),
                Line::styled("Position", label),
                Line::raw(format_position(&city.position)),
            ];
            if !city.notes.is_empty() {
                lines.push(Line::raw(""));
                lines.push(Line::styled("Your notes", label));
                lines.push(Line::raw(city.notes.clone()));
            }
            lines
        }
        None => vec![Line::styled(
            "Select a city and press Enter to see its details.",
            Style::default().fg(Color::DarkGray),
        )],
    };

    let details = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(details, area);
}

fn draw_countries_tab(f: &mut Frame, state: &RenderState, area: Rect) {
    let list = render_country_list(&state.country_list, " Countries ");
    f.render_widget(list, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let (status, style) = match state.status_line() {
        StatusLine::Loading => (String::from(" Loading... "), Style::default().fg(Color::Yellow)),
        StatusLine::Info(message) => (format!(" {} ", message), Style::default().fg(Color::Green)),
        StatusLine::Error(error) => (format!(" {} (r:retry) ", error), Style::default().fg(Color::Red)),
        StatusLine::Hint if state.show_form => (
            String::from(" Tab:next field | Enter:save | Esc:cancel "),
            Style::default().fg(Color::DarkGray),
        ),
        StatusLine::Hint => (
            String::from(" Tab:switch | n:new | d:delete | r:reload | ?:help | q:quit "),
            Style::default().fg(Color::DarkGray),
        ),
    };

    f.render_widget(Paragraph::new(status).style(style), area);
}

fn draw_form_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let lines: Vec<Line> = FormField::ALL
        .iter()
        .flat_map(|field| {
            let active = *field == state.form.active_field;
            let label_style = if active {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let cursor = if active { "_" } else { "" };
            [
                Line::styled(field.label(), label_style),
                Line::raw(format!("  {}{}", state.form.value(*field), cursor)),
            ]
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Add a city (Enter:save, Esc:cancel) ")
        .style(Style::default().bg(Color::Black));

    let form = Paragraph::new(lines).block(block);

    f.render_widget(Clear, popup_area);
    f.render_widget(form, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 CITY TRACKER - Keyboard Shortcuts

 NAVIGATION
   1 / 2 / Tab        Cities / Countries tab
   ↑ / ↓  (k / j)     Select city

 CITIES
   Enter              Show city details
   n                  Add a new city
   d / Del            Delete selected city
   r                  Reload from backend

 NEW CITY FORM
   Tab / Shift+Tab    Next / previous field
   Enter              Save
   Esc                Cancel
   Flag field accepts an emoji or a two-letter
   country code (e.g. PT)

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

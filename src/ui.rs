use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::models::Position;
use crate::views::{CityListView, CountryListView};

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

/// Renders the city list, one line per visit
pub fn render_city_list<'a>(view: &'a CityListView, selected: usize, title: &'a str) -> List<'a> {
    let items: Vec<ListItem> = match view {
        CityListView::Loading => vec![loading_item()],
        CityListView::Empty { message } => vec![message_item(message)],
        CityListView::Cities(cities) => cities
            .iter()
            .enumerate()
            .map(|(i, city)| {
                let style = if i == selected {
                    Style::default().fg(Color::Yellow).bold()
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", city.emoji)),
                    Span::styled(city.city_name.clone(), style),
                    Span::styled(
                        format!("  ({})", format_visit_date(&city.date)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect(),
    };

    List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title),
    )
}

/// Renders the deduplicated country list
pub fn render_country_list<'a>(view: &'a CountryListView, title: &'a str) -> List<'a> {
    let items: Vec<ListItem> = match view {
        CountryListView::Loading => vec![loading_item()],
        CountryListView::Empty { message } => vec![message_item(message)],
        CountryListView::Countries(countries) => countries
            .iter()
            .map(|c| ListItem::new(format!("{}  {}", c.emoji, c.country)))
            .collect(),
    };

    List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(title),
    )
}

fn loading_item() -> ListItem<'static> {
    ListItem::new("Loading...").style(Style::default().fg(Color::Yellow))
}

fn message_item(message: &str) -> ListItem<'_> {
    ListItem::new(format!("👋 {}", message)).style(Style::default().fg(Color::DarkGray))
}

/// Short date for list entries, e.g. "October 31, 2027"
pub fn format_visit_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Long date for the detail panel, e.g. "Sunday, October 31, 2027"
pub fn format_visit_date_long(date: &DateTime<Utc>) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn format_position(position: &Position) -> String {
    format!("{:.4}, {:.4}", position.lat, position.lng)
}

//! Derived views - values computed from store state, never stored

use std::collections::HashSet;

use crate::constants::{EMPTY_CITIES_MESSAGE, EMPTY_COUNTRIES_MESSAGE};
use crate::models::{City, CountrySummary};
use crate::store::CitiesState;

/// Distinct countries in order of first appearance.
///
/// The first city seen for a country decides its emoji.
pub fn countries_of(cities: &[City]) -> Vec<CountrySummary> {
    let mut seen = HashSet::new();
    cities
        .iter()
        .filter(|city| seen.insert(city.country.as_str()))
        .map(|city| CountrySummary {
            country: city.country.clone(),
            emoji: city.emoji.clone(),
        })
        .collect()
}

/// What the country list should display
#[derive(Clone, Debug, PartialEq, Default)]
pub enum CountryListView {
    #[default]
    Loading,
    Empty { message: &'static str },
    Countries(Vec<CountrySummary>),
}

impl CountryListView {
    pub fn from_state(state: &CitiesState) -> Self {
        if state.is_loading {
            CountryListView::Loading
        } else if state.cities.is_empty() {
            CountryListView::Empty {
                message: EMPTY_COUNTRIES_MESSAGE,
            }
        } else {
            CountryListView::Countries(countries_of(&state.cities))
        }
    }
}

/// What the city list should display
#[derive(Clone, Debug, PartialEq, Default)]
pub enum CityListView {
    #[default]
    Loading,
    Empty { message: &'static str },
    Cities(Vec<City>),
}

impl CityListView {
    pub fn from_state(state: &CitiesState) -> Self {
        if state.is_loading {
            CityListView::Loading
        } else if state.cities.is_empty() {
            CityListView::Empty {
                message: EMPTY_CITIES_MESSAGE,
            }
        } else {
            CityListView::Cities(state.cities.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::state::tests::city;
    use crate::store::Transition;

    #[test]
    fn test_countries_deduplicated_in_first_seen_order() {
        let cities = vec![
            city(1, "Paris", "France", "🇫🇷"),
            city(2, "Lyon", "France", "🇫🇷"),
            city(3, "Rome", "Italy", "🇮🇹"),
        ];
        assert_eq!(
            countries_of(&cities),
            vec![
                CountrySummary {
                    country: "France".to_string(),
                    emoji: "🇫🇷".to_string()
                },
                CountrySummary {
                    country: "Italy".to_string(),
                    emoji: "🇮🇹".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_first_emoji_wins() {
        let cities = vec![
            city(1, "Rome", "Italy", "🇮🇹"),
            city(2, "Milan", "Italy", "IT"),
            city(3, "Porto", "Portugal", "🇵🇹"),
            city(4, "Naples", "Italy", "??"),
        ];
        let countries = countries_of(&cities);
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].emoji, "🇮🇹");
        assert_eq!(countries[1].country, "Portugal");
    }

    #[test]
    fn test_countries_bounded_by_distinct_and_idempotent() {
        let cities = vec![
            city(1, "Berlin", "Germany", "🇩🇪"),
            city(2, "Madrid", "Spain", "🇪🇸"),
            city(3, "Hamburg", "Germany", "🇩🇪"),
            city(4, "Seville", "Spain", "🇪🇸"),
            city(5, "Oslo", "Norway", "🇳🇴"),
        ];
        let distinct: HashSet<_> = cities.iter().map(|c| c.country.as_str()).collect();
        let first = countries_of(&cities);
        assert!(first.len() <= distinct.len());
        assert_eq!(first, countries_of(&cities));
    }

    #[test]
    fn test_empty_input() {
        assert!(countries_of(&[]).is_empty());
        assert_eq!(
            CountryListView::from_state(&CitiesState::default()),
            CountryListView::Empty {
                message: EMPTY_COUNTRIES_MESSAGE
            }
        );
        assert_eq!(
            CityListView::from_state(&CitiesState::default()),
            CityListView::Empty {
                message: EMPTY_CITIES_MESSAGE
            }
        );
    }

    #[test]
    fn test_loading_wins_over_contents() {
        let state = CitiesState::default()
            .reduce(Transition::CitiesLoaded(vec![city(1, "Oslo", "Norway", "🇳🇴")]))
            .reduce(Transition::Loading);
        assert_eq!(CountryListView::from_state(&state), CountryListView::Loading);
        assert_eq!(CityListView::from_state(&state), CityListView::Loading);
    }

    #[test]
    fn test_views_of_loaded_state() {
        let state = CitiesState::default().reduce(Transition::CitiesLoaded(vec![
            city(1, "Oslo", "Norway", "🇳🇴"),
            city(2, "Bergen", "Norway", "🇳🇴"),
        ]));
        match CountryListView::from_state(&state) {
            CountryListView::Countries(countries) => assert_eq!(countries.len(), 1),
            other => panic!("unexpected view: {:?}", other),
        }
        match CityListView::from_state(&state) {
            CityListView::Cities(cities) => assert_eq!(cities.len(), 2),
            other => panic!("unexpected view: {:?}", other),
        }
    }
}

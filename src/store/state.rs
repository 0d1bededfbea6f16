//! Store state and the transitions that are allowed to change it

use thiserror::Error;

use crate::models::{City, CityId};

/// Failure of a store operation, one per operation family.
///
/// The messages are user facing and fixed; the underlying cause is only logged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("unable to fetch data")]
    FetchCities,

    #[error("unable to fetch city data")]
    FetchCity,

    #[error("unable to create a city")]
    CreateCity,

    #[error("There was an error deleting the city")]
    DeleteCity,
}

/// A state change applied to the store
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// A request was issued
    Loading,
    /// The full collection arrived
    CitiesLoaded(Vec<City>),
    /// A single city arrived
    CityLoaded(City),
    /// The backend stored a new city
    CityCreated(City),
    /// The backend deleted the city with this id
    CityDeleted(CityId),
    /// A request failed
    Rejected(StoreError),
}

impl Transition {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Transition::Loading => "loading",
            Transition::CitiesLoaded(_) => "cities/loaded",
            Transition::CityLoaded(_) => "city/loaded",
            Transition::CityCreated(_) => "city/created",
            Transition::CityDeleted(_) => "city/deleted",
            Transition::Rejected(_) => "rejected",
        }
    }
}

/// Everything the store knows - pure data, no I/O
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CitiesState {
    pub cities: Vec<City>,
    pub is_loading: bool,
    pub current_city: Option<City>,
    pub error: Option<StoreError>,
}

impl CitiesState {
    /// Apply one transition and return the next state
    pub fn reduce(self, transition: Transition) -> CitiesState {
        match transition {
            Transition::Loading => CitiesState {
                is_loading: true,
                error: None,
                ..self
            },
            Transition::CitiesLoaded(cities) => CitiesState {
                cities,
                is_loading: false,
                error: None,
                ..self
            },
            Transition::CityLoaded(city) => CitiesState {
                current_city: Some(city),
                is_loading: false,
                error: None,
                ..self
            },
            Transition::CityCreated(city) => {
                let mut cities = self.cities;
                cities.push(city.clone());
                CitiesState {
                    cities,
                    current_city: Some(city),
                    is_loading: false,
                    error: None,
                }
            }
            Transition::CityDeleted(id) => {
                let mut cities = self.cities;
                cities.retain(|city| city.id != id);
                CitiesState {
                    cities,
                    current_city: None,
                    is_loading: false,
                    error: None,
                }
            }
            Transition::Rejected(error) => CitiesState {
                error: Some(error),
                is_loading: false,
                ..self
            },
        }
    }

    /// Find a known city by id
    pub fn city(&self, id: &CityId) -> Option<&City> {
        self.cities.iter().find(|city| &city.id == id)
    }
}

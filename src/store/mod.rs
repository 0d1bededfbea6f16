//! City store - the single source of truth for city data
//!
//! The store is an explicitly constructed handle. Clones share the same
//! state, which only changes through [`Transition`]s fed to the reducer.
//! Consumers read a snapshot or subscribe to changes through a `watch` channel.

pub mod state;

use std::sync::Arc;

use tokio::sync::watch;

use crate::models::{City, CityId, NewCity};
use crate::network::CityApi;

pub use state::{CitiesState, StoreError, Transition};

/// Handle to the shared city state and the operations that change it
pub struct CitiesStore<A> {
    api: Arc<A>,
    state: Arc<watch::Sender<CitiesState>>,
}

impl<A> Clone for CitiesStore<A> {
    fn clone(&self) -> Self {
        CitiesStore {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: CityApi> CitiesStore<A> {
    pub fn new(api: A) -> Self {
        Self::with_api(Arc::new(api))
    }

    pub fn with_api(api: Arc<A>) -> Self {
        let (state, _) = watch::channel(CitiesState::default());
        CitiesStore {
            api,
            state: Arc::new(state),
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> CitiesState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every transition
    pub fn subscribe(&self) -> watch::Receiver<CitiesState> {
        self.state.subscribe()
    }

    fn dispatch(&self, transition: Transition) {
        tracing::debug!(transition = transition.name(), "Applying transition");
        self.state
            .send_modify(move |state| *state = std::mem::take(state).reduce(transition));
    }

    /// Fetch the whole collection, replacing the known cities
    pub async fn load_all(&self) {
        self.dispatch(Transition::Loading);
        match self.api.fetch_cities().await {
            Ok(cities) => {
                tracing::info!(count = cities.len(), "Loaded cities");
                self.dispatch(Transition::CitiesLoaded(cities));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch cities");
                self.dispatch(Transition::Rejected(StoreError::FetchCities));
            }
        }
    }

    /// Fetch one city and make it the current one
    pub async fn load_one(&self, id: &CityId) {
        self.dispatch(Transition::Loading);
        match self.api.fetch_city(id).await {
            Ok(city) => {
                tracing::info!(%id, city = %city.city_name, "Loaded city");
                self.dispatch(Transition::CityLoaded(city));
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "Failed to fetch city");
                self.dispatch(Transition::Rejected(StoreError::FetchCity));
            }
        }
    }

    /// Store a new city. Returns the backend's record, or `None` on failure.
    pub async fn create(&self, city: NewCity) -> Option<City> {
        self.dispatch(Transition::Loading);
        match self.api.create_city(&city).await {
            Ok(created) => {
                tracing::info!(id = %created.id, city = %created.city_name, "Created city");
                self.dispatch(Transition::CityCreated(created.clone()));
                Some(created)
            }
            Err(e) => {
                tracing::warn!(city = %city.city_name, error = %e, "Failed to create city");
                self.dispatch(Transition::Rejected(StoreError::CreateCity));
                None
            }
        }
    }

    /// Delete a city by id
    pub async fn remove(&self, id: &CityId) {
        self.dispatch(Transition::Loading);
        match self.api.delete_city(id).await {
            Ok(()) => {
                tracing::info!(%id, "Deleted city");
                self.dispatch(Transition::CityDeleted(id.clone()));
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "Failed to delete city");
                self.dispatch(Transition::Rejected(StoreError::DeleteCity));
            }
        }
    }
}

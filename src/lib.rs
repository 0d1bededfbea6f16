//! # City Tracker
//!
//! A terminal travel journal that keeps the list of visited cities on a
//! JSON REST backend.
//!
//! ## Features
//! - List, inspect, add and delete visited cities
//! - Country overview derived from the city list
//! - Flag emoji from two-letter country codes
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (event loop owning UI state)
//! - Store (reducer-driven city state, shared through a handle)
//! - Network Layer (reqwest client behind the `CityApi` port)

pub mod constants;
pub mod config;
pub mod models;
pub mod network;
pub mod store;
pub mod views;
pub mod messages;
pub mod app;
pub mod ui;

// Re-export commonly used types
pub use models::{City, CityId, CountrySummary, NewCity, Position};
pub use network::{ApiError, CityApi, HttpCityApi};
pub use store::{CitiesState, CitiesStore, StoreError, Transition};
pub use views::{countries_of, CityListView, CountryListView};
pub use messages::{RenderState, StoreCommand, StoreOutcome, UiEvent};
pub use app::{AppActor, AppState};
pub use config::AppConfig;

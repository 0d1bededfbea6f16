//! App layer - UI-side state and command processing
//!
//! The App actor receives UI events, runs store operations,
//! and emits render state whenever the store or the UI state changes.

pub mod state;
pub mod actor;
pub mod commands;
pub mod form;

pub use state::AppState;
pub use actor::AppActor;
pub use form::{CityForm, FormError};

//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI, App and store layers.

pub mod ui_events;
pub mod store;
pub mod render;

pub use ui_events::UiEvent;
pub use store::{StoreCommand, StoreOutcome};
pub use render::{RenderState, StatusLine};

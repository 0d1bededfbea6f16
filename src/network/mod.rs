//! Network layer - HTTP access to the cities backend
//!
//! The store reaches the backend only through the `CityApi` port.

pub mod client;
pub mod error;

pub use client::{CityApi, HttpCityApi};
pub use error::ApiError;

#[cfg(test)]
pub(crate) mod testing;

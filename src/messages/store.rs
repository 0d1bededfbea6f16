//! Store messages - work the App layer hands to store tasks, and what comes back

use crate::models::{City, CityId, NewCity};

/// Store operations requested by the App layer
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand {
    /// Fetch the whole collection
    LoadAll,
    /// Fetch one city and make it current
    LoadOne(CityId),
    /// Submit a new city
    Create(NewCity),
    /// Delete a city
    Remove(CityId),
}

impl StoreCommand {
    pub fn name(&self) -> &'static str {
        match self {
            StoreCommand::LoadAll => "load_all",
            StoreCommand::LoadOne(_) => "load_one",
            StoreCommand::Create(_) => "create",
            StoreCommand::Remove(_) => "remove",
        }
    }
}

/// Result of a finished store task.
///
/// Success or failure is already reflected in the store state; outcomes only
/// carry what the App layer needs for its own bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreOutcome {
    Loaded,
    CityLoaded(CityId),
    /// The created record, or `None` when the backend refused it
    Created(Option<City>),
    Removed(CityId),
}

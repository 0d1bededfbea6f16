//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base URL of the cities backend
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Collection path on the backend
pub const CITIES_PATH: &str = "cities";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log file name (written to the working directory)
pub const DEFAULT_LOG_FILE: &str = "city-tracker.log";

/// Config directory under the user's home
pub const CONFIG_DIR: &str = ".city-tracker";

/// Config file name inside `CONFIG_DIR`
pub const CONFIG_FILE: &str = "config.yaml";

/// Environment variable overriding the backend URL
pub const API_URL_ENV: &str = "CITY_TRACKER_API_URL";

/// Shown in the country list when there are no cities yet
pub const EMPTY_COUNTRIES_MESSAGE: &str = "Add your first country by clicking on the map.";

/// Shown in the city list when there are no cities yet
pub const EMPTY_CITIES_MESSAGE: &str = "Add your first city by clicking on a city on the map.";

/// Application name
pub const APP_NAME: &str = "City Tracker";

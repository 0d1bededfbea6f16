use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned city identifier.
///
/// json-server hands out numeric ids in older releases and string ids in
/// newer ones, so both shapes are accepted and written back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CityId {
    Number(u64),
    Text(String),
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityId::Number(n) => write!(f, "{}", n),
            CityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for CityId {
    fn from(id: u64) -> Self {
        CityId::Number(id)
    }
}

impl From<&str> for CityId {
    fn from(id: &str) -> Self {
        CityId::Text(id.to_string())
    }
}

/// Map coordinates of a city
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

/// A visited city as stored by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: CityId,
    pub city_name: String,
    pub country: String,
    pub emoji: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
    pub position: Position,
}

/// A city record before the backend has assigned it an id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCity {
    pub city_name: String,
    pub country: String,
    pub emoji: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
    pub position: Position,
}

/// One entry of the derived country list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountrySummary {
    pub country: String,
    pub emoji: String,
}

/// Convert a two-letter ISO country code into its flag emoji.
///
/// Returns `None` unless `code` is exactly two ASCII letters.
pub fn flag_emoji(code: &str) -> Option<String> {
    let code = code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    code.to_ascii_uppercase()
        .chars()
        .map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
        .collect()
}

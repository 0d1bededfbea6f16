//! New-city form - text buffers and validation

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::messages::ui_events::FormField;
use crate::models::{flag_emoji, NewCity, Position};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must be a number between {min} and {max}")]
    InvalidCoordinate {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

/// Editable text of the new-city form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CityForm {
    pub city_name: String,
    pub country: String,
    pub emoji: String,
    pub latitude: String,
    pub longitude: String,
    pub notes: String,
    pub active_field: FormField,
}

impl CityForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::CityName => &self.city_name,
            FormField::Country => &self.country,
            FormField::Emoji => &self.emoji,
            FormField::Latitude => &self.latitude,
            FormField::Longitude => &self.longitude,
            FormField::Notes => &self.notes,
        }
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.active_field {
            FormField::CityName => &mut self.city_name,
            FormField::Country => &mut self.country,
            FormField::Emoji => &mut self.emoji,
            FormField::Latitude => &mut self.latitude,
            FormField::Longitude => &mut self.longitude,
            FormField::Notes => &mut self.notes,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.active_value_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.active_value_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    /// Validate the buffers and build the record to submit.
    ///
    /// A two-letter country code in the emoji field becomes its flag.
    pub fn to_new_city(&self, date: DateTime<Utc>) -> Result<NewCity, FormError> {
        let city_name = required(&self.city_name, FormField::CityName)?;
        let country = required(&self.country, FormField::Country)?;
        let emoji = required(&self.emoji, FormField::Emoji)?;
        let emoji = flag_emoji(&emoji).unwrap_or(emoji);
        let lat = coordinate(&self.latitude, FormField::Latitude, 90.0)?;
        let lng = coordinate(&self.longitude, FormField::Longitude, 180.0)?;

        Ok(NewCity {
            city_name,
            country,
            emoji,
            date,
            notes: self.notes.trim().to_string(),
            position: Position { lat, lng },
        })
    }
}

fn required(value: &str, field: FormField) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Missing(field.label()));
    }
    Ok(value.to_string())
}

fn coordinate(value: &str, field: FormField, limit: f64) -> Result<f64, FormError> {
    let invalid = || FormError::InvalidCoordinate {
        field: field.label(),
        min: -limit,
        max: limit,
    };
    let parsed: f64 = value.trim().parse().map_err(|_| invalid())?;
    if !parsed.is_finite() || parsed.abs() > limit {
        return Err(invalid());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CityForm {
        CityForm {
            city_name: " Lisbon ".to_string(),
            country: "Portugal".to_string(),
            emoji: "pt".to_string(),
            latitude: "38.72".to_string(),
            longitude: "-9.14".to_string(),
            notes: String::new(),
            active_field: FormField::CityName,
        }
    }

    #[test]
    fn test_valid_form_builds_city() {
        let date = Utc::now();
        let city = filled().to_new_city(date).unwrap();
        assert_eq!(city.city_name, "Lisbon");
        assert_eq!(city.emoji, "🇵🇹");
        assert_eq!(city.position, Position { lat: 38.72, lng: -9.14 });
        assert_eq!(city.date, date);
    }

    #[test]
    fn test_emoji_kept_when_not_a_code() {
        let mut form = filled();
        form.emoji = "🇵🇹".to_string();
        assert_eq!(form.to_new_city(Utc::now()).unwrap().emoji, "🇵🇹");
    }

    #[test]
    fn test_missing_field() {
        let mut form = filled();
        form.country = "  ".to_string();
        assert_eq!(
            form.to_new_city(Utc::now()),
            Err(FormError::Missing("Country"))
        );
    }

    #[test]
    fn test_out_of_range_coordinate() {
        let mut form = filled();
        form.latitude = "91".to_string();
        let err = form.to_new_city(Utc::now()).unwrap_err();
        assert_eq!(err.to_string(), "Latitude must be a number between -90 and 90");

        form.latitude = "abc".to_string();
        assert!(form.to_new_city(Utc::now()).is_err());
    }

    #[test]
    fn test_editing_follows_active_field() {
        let mut form = CityForm::default();
        form.push_char('R');
        form.next_field();
        form.push_char('I');
        form.push_char('x');
        form.pop_char();
        assert_eq!(form.city_name, "R");
        assert_eq!(form.value(FormField::Country), "I");
    }
}

//! Weather Record - a single dated temperature observation for one city

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Text layout accepted for record dates.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `DD/MM/YYYY` date.
///
/// The shape is checked byte by byte before calendar validation, so inputs
/// such as `1/1/2023`, `2023-01-15` or `15/01/2023 ` are rejected rather than
/// being read at a fixed offset.
///
/// # Errors
///
/// Returns [`Error::MalformedDate`] on any deviation from `DD/MM/YYYY` or when
/// the digits do not name a real calendar day (e.g. `31/02/2024`).
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let bytes = input.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(Error::MalformedDate(input.to_string()));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| Error::MalformedDate(input.to_string()))
}

/// Extract the year component of a `DD/MM/YYYY` date.
///
/// # Errors
///
/// Same as [`parse_date`].
pub fn year_of(input: &str) -> Result<i32> {
    parse_date(input).map(|date| date.year())
}

/// Weather Record represents one temperature measurement.
///
/// Records are values: the store projects their fields into its grid and never
/// keeps the record itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherRecord {
    #[serde(with = "dmy")]
    date: NaiveDate,
    city: String,
    temperature: f64,
}

impl WeatherRecord {
    /// Create a record from an already validated date.
    #[must_use]
    pub fn new(date: NaiveDate, city: impl Into<String>, temperature: f64) -> Self {
        Self {
            date,
            city: city.into(),
            temperature,
        }
    }

    /// Create a record from a `DD/MM/YYYY` date string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDate`] if `date` cannot be parsed.
    pub fn parse(date: &str, city: impl Into<String>, temperature: f64) -> Result<Self> {
        Ok(Self::new(parse_date(date)?, city, temperature))
    }

    /// Get the observation date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Get the year the observation falls in (the store's row key).
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Get the city name (the store's column key).
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Get the measured temperature in °C.
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }
}

impl fmt::Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {}, City: {}, Temperature: {}°C",
            self.date.format(DATE_FORMAT),
            self.city,
            self.temperature
        )
    }
}

/// Serde adapter keeping the `DD/MM/YYYY` text form on the wire.
mod dmy {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(super::DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_date(&text).map_err(de::Error::custom)
    }
}

//! Error types for the date picker core

use thiserror::Error;

/// Errors raised while constructing a [`crate::CalendarDate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid month index: {0} (expected 0..=11)")]
    InvalidMonth(u32),

    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Errors that can occur while configuring a picker
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Date error: {0}")]
    Date(#[from] DateError),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Minimum date {min} is after maximum date {max}")]
    InvertedBounds { min: String, max: String },

    #[error("Date format pattern must not be empty")]
    EmptyFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DateError::InvalidMonth(12).to_string(),
            "Invalid month index: 12 (expected 0..=11)"
        );
        assert_eq!(
            DateError::InvalidDate { year: 2023, month: 2, day: 29 }.to_string(),
            "Invalid date: 2023-02-29"
        );
        assert_eq!(
            PickerError::EmptyFormat.to_string(),
            "Date format pattern must not be empty"
        );
    }

    #[test]
    fn test_date_error_converts() {
        let err: PickerError = DateError::InvalidMonth(13).into();
        assert!(matches!(err, PickerError::Date(DateError::InvalidMonth(13))));
    }
}

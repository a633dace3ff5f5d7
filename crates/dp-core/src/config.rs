//! Picker configuration

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::date::{CalendarDate, Granularity, TargetGranularity};
use crate::error::PickerError;
use crate::format::DEFAULT_DATE_FORMAT;
use crate::selection::SelectionMode;

/// Owner-supplied settings, fixed for the lifetime of a picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Finest unit to commit
    pub target_granularity: TargetGranularity,

    pub selection_mode: SelectionMode,

    /// Reject anything after today
    pub block_future_dates: bool,

    pub min_date: Option<CalendarDate>,

    pub max_date: Option<CalendarDate>,

    /// Token pattern for date labels, see [`crate::format`]
    pub date_format: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            target_granularity: Granularity::Date,
            selection_mode: SelectionMode::Single,
            block_future_dates: false,
            min_date: None,
            max_date: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl PickerConfig {
    /// Create a configuration for a granularity and mode, other fields default
    pub fn new(target_granularity: TargetGranularity, selection_mode: SelectionMode) -> Self {
        Self {
            target_granularity,
            selection_mode,
            ..Self::default()
        }
    }

    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if min > max {
                return Err(PickerError::InvertedBounds {
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        if self.date_format.is_empty() {
            return Err(PickerError::EmptyFormat);
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_date: self.min_date,
            max_date: self.max_date,
            block_future_dates: self.block_future_dates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.target_granularity, Granularity::Date);
        assert_eq!(config.selection_mode, SelectionMode::Single);
        assert_eq!(config.date_format, "YYYY/MM/DD");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let config = PickerConfig::from_json(
            r#"{
                "target_granularity": "month",
                "selection_mode": "range",
                "min_date": "2024-01-01",
                "block_future_dates": true
            }"#,
        )
        .unwrap();

        assert_eq!(config.target_granularity, Granularity::Month);
        assert_eq!(config.selection_mode, SelectionMode::Range);
        assert_eq!(config.min_date, Some(CalendarDate::from_ymd(2024, 0, 1).unwrap()));
        assert_eq!(config.max_date, None);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert!(config.bounds().block_future_dates);
    }

    #[test]
    fn test_validation_errors() {
        let inverted =
            PickerConfig::from_json(r#"{"min_date": "2024-12-31", "max_date": "2024-01-01"}"#);
        assert!(matches!(inverted, Err(PickerError::InvertedBounds { .. })));

        let empty = PickerConfig::from_json(r#"{"date_format": ""}"#);
        assert!(matches!(empty, Err(PickerError::EmptyFormat)));

        let garbage = PickerConfig::from_json(r#"{"selection_mode": "several"}"#);
        assert!(matches!(garbage, Err(PickerError::Parse(_))));
    }
}

//! Core building blocks for the date picker
//!
//! This crate holds the pure, stateless pieces of the picker: the date value
//! type, month grid and decade window generation, eligibility rules, the
//! selection reducer, highlight resolution and label formatting.

pub mod bounds;
pub mod config;
pub mod date;
pub mod decade;
pub mod error;
pub mod format;
pub mod grid;
pub mod label;
pub mod selection;
pub mod status;

// Re-export commonly used types
pub use bounds::{BoundaryPolicy, Bounds, Direction};
pub use config::PickerConfig;
pub use date::{CalendarDate, DateUnit, Granularity, TargetGranularity, ZoomLevel};
pub use decade::DecadeWindow;
pub use error::{DateError, PickerError};
pub use format::{DateFormatter, DefaultFormatter, DEFAULT_DATE_FORMAT};
pub use grid::{build_month, DayCell, MonthGrid};
pub use label::{decade_label, format_label};
pub use selection::{commit, PickerValue, SelectionMode, SelectionState};
pub use status::{resolve, CellRef, SelectionStatus};

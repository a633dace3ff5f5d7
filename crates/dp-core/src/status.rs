//! Highlight flags for grid cells

use serde::Serialize;

use crate::date::{CalendarDate, Granularity};
use crate::selection::SelectionMode;

/// A cell of any of the three pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRef {
    /// A day of the month grid
    Date(CalendarDate),
    /// A zero-based month of the browsed year
    Month(u32),
    Year(i32),
}

impl CellRef {
    /// Resolution at which this cell is compared
    pub fn granularity(&self) -> Granularity {
        match self {
            CellRef::Date(_) => Granularity::Date,
            CellRef::Month(_) => Granularity::Month,
            CellRef::Year(_) => Granularity::Year,
        }
    }

    fn to_date(self, visible_year: i32) -> Option<CalendarDate> {
        match self {
            CellRef::Date(date) => Some(date),
            CellRef::Month(month) => CalendarDate::from_year_month(visible_year, month).ok(),
            CellRef::Year(year) => CalendarDate::from_year(year).ok(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SelectionStatus {
    /// Matches a selected date at the primary level
    pub is_selected: bool,
    /// Matches a selected date at a coarser level than the primary one
    pub is_selected_secondary: bool,
    pub is_start_interval: bool,
    pub is_end_interval: bool,
    pub is_middle_interval: bool,
}

impl SelectionStatus {
    pub fn is_highlighted(&self) -> bool {
        self.is_selected
            || self.is_selected_secondary
            || self.is_start_interval
            || self.is_end_interval
            || self.is_middle_interval
    }
}

/// Compute the highlight flags of `cell` for a picker whose selections live
/// at `primary_level`.
///
/// Cells at any other level only get the secondary flag, so a selected day
/// still marks its month and year while drilling down toward it. Month cells
/// are interpreted in `visible_year`. Interval flags are only set for a
/// complete range and only at the primary level.
pub fn resolve(
    primary_level: Granularity,
    cell: CellRef,
    selection: &[CalendarDate],
    mode: SelectionMode,
    visible_year: i32,
) -> SelectionStatus {
    if selection.is_empty() {
        return SelectionStatus::default();
    }
    let Some(value) = cell.to_date(visible_year) else {
        return SelectionStatus::default();
    };

    let granularity = cell.granularity();
    let primary = granularity == primary_level;
    let is_exact = selection.iter().any(|date| value.is_same(date, granularity));

    let mut status = SelectionStatus {
        is_selected: primary && is_exact,
        is_selected_secondary: !primary && is_exact,
        ..SelectionStatus::default()
    };

    if let (SelectionMode::Range, [start, end], true) = (mode, selection, primary) {
        status.is_start_interval = value.is_same(start, granularity);
        status.is_end_interval = value.is_same(end, granularity);
        status.is_middle_interval = value.is_between(start, end, granularity);
    }

    status
}

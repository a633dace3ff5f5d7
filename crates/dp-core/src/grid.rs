//! Month grid generation

use serde::Serialize;

use crate::date::{CalendarDate, DateUnit};

/// Columns per week row, Sunday first
pub const DAYS_PER_WEEK: usize = 7;

/// A single day slot in a month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: CalendarDate,
    /// False for the leading/trailing fill taken from neighbouring months
    pub belongs_to_displayed_month: bool,
    pub is_today: bool,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// Calendar page for one month: 5 or 6 weeks of 7 days
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: u32,
    pub year: i32,
    pub weeks: Vec<[DayCell; DAYS_PER_WEEK]>,
}

impl MonthGrid {
    /// All cells in reading order
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }
}

/// Build the grid for a zero-based `month` of `year`.
///
/// Row 0 starts with the trailing days of the previous month up to the
/// weekday of the 1st; the last row is completed with days of the next
/// month. A sixth row is only emitted when the month does not fit in five.
/// `is_today` is only ever set on cells of the displayed month.
pub fn build_month(month: u32, year: i32, today: &CalendarDate) -> MonthGrid {
    let month = month.min(11);
    let Ok(first) = CalendarDate::from_year_month(year, month) else {
        return MonthGrid { month, year, weeks: Vec::new() };
    };

    let leading = first.weekday();
    let rows = if leading + first.days_in_month() > 35 { 6 } else { 5 };
    let start = first.subtract(leading as i32, DateUnit::Day);

    let cell_at = |index: usize| {
        let date = start.add(index as i32, DateUnit::Day);
        let belongs = date.month() == month && date.year() == year;
        DayCell {
            date,
            belongs_to_displayed_month: belongs,
            is_today: belongs && date == *today,
        }
    };

    let weeks = (0..rows)
        .map(|row| std::array::from_fn(|col| cell_at(row * DAYS_PER_WEEK + col)))
        .collect();

    MonthGrid { month, year, weeks }
}

//! Calendar date value type and granularity-aware comparisons

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DateError;
use crate::format::DateFormatter;

/// Resolution at which dates are displayed, compared and committed.
///
/// Variants are ordered coarse to fine, so `Granularity::Year < Granularity::Date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Year,
    Month,
    Date,
}

/// The grid currently displayed by a picker
pub type ZoomLevel = Granularity;

/// The finest unit the owner wants committed
pub type TargetGranularity = Granularity;

/// Units accepted by [`CalendarDate::add`] and [`CalendarDate::subtract`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUnit {
    Year,
    Month,
    Day,
}

/// A proleptic Gregorian calendar date.
///
/// Months are zero-based (`0` = January) throughout the engine. Values are
/// immutable: every operation returns a new date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from a year, zero-based month and day of month
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if month > 11 {
            return Err(DateError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month + 1, day)
            .map(Self)
            .ok_or(DateError::InvalidDate { year, month: month + 1, day })
    }

    /// Canonical date for a year-only value (January 1st)
    pub fn from_year(year: i32) -> Result<Self, DateError> {
        Self::from_ymd(year, 0, 1)
    }

    /// Canonical date for a month-only value (the 1st)
    pub fn from_year_month(year: i32, month: u32) -> Result<Self, DateError> {
        Self::from_ymd(year, month, 1)
    }

    /// Today's date in the local time zone
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Zero-based month (0..=11)
    pub fn month(&self) -> u32 {
        self.0.month0()
    }

    /// Day of month (1..=31)
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of week, 0 = Sunday
    pub fn weekday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Shift forward by `amount` units.
    ///
    /// Month and year steps clamp the day to the end of the target month.
    /// A step leaving the representable range yields `self`.
    pub fn add(&self, amount: i32, unit: DateUnit) -> Self {
        let shifted = match unit {
            DateUnit::Day => {
                let days = Days::new(u64::from(amount.unsigned_abs()));
                if amount >= 0 {
                    self.0.checked_add_days(days)
                } else {
                    self.0.checked_sub_days(days)
                }
            }
            DateUnit::Month => shift_months(self.0, amount),
            DateUnit::Year => shift_months(self.0, amount.saturating_mul(12)),
        };
        shifted.map(Self).unwrap_or(*self)
    }

    /// Shift backward by `amount` units
    pub fn subtract(&self, amount: i32, unit: DateUnit) -> Self {
        self.add(amount.saturating_neg(), unit)
    }

    /// Same month and day in another year, clamped (Feb 29 -> Feb 28)
    pub fn with_year(&self, year: i32) -> Self {
        clamped(year, self.month(), self.day()).unwrap_or(*self)
    }

    /// Same year and day in another month, clamped to the month's length
    pub fn with_month(&self, month: u32) -> Self {
        clamped(self.year(), month.min(11), self.day()).unwrap_or(*self)
    }

    /// Compare two dates looking only at the fields down to `granularity`
    pub fn cmp_at(&self, other: &Self, granularity: Granularity) -> Ordering {
        self.key(granularity).cmp(&other.key(granularity))
    }

    pub fn is_same(&self, other: &Self, granularity: Granularity) -> bool {
        self.cmp_at(other, granularity) == Ordering::Equal
    }

    pub fn is_before(&self, other: &Self, granularity: Granularity) -> bool {
        self.cmp_at(other, granularity) == Ordering::Less
    }

    pub fn is_after(&self, other: &Self, granularity: Granularity) -> bool {
        self.cmp_at(other, granularity) == Ordering::Greater
    }

    pub fn is_same_or_before(&self, other: &Self, granularity: Granularity) -> bool {
        self.cmp_at(other, granularity) != Ordering::Greater
    }

    pub fn is_same_or_after(&self, other: &Self, granularity: Granularity) -> bool {
        self.cmp_at(other, granularity) != Ordering::Less
    }

    /// Strictly between `start` and `end` (both ends exclusive)
    pub fn is_between(&self, start: &Self, end: &Self, granularity: Granularity) -> bool {
        self.is_after(start, granularity) && self.is_before(end, granularity)
    }

    /// Render with a pattern through a pluggable formatter
    pub fn format(&self, pattern: &str, formatter: &dyn DateFormatter) -> String {
        formatter.format(self, pattern)
    }

    fn key(&self, granularity: Granularity) -> (i32, u32, u32) {
        match granularity {
            Granularity::Year => (self.year(), 0, 0),
            Granularity::Month => (self.year(), self.month(), 0),
            Granularity::Date => (self.year(), self.month(), self.day()),
        }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a zero-based month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

fn clamped(year: i32, month: u32, day: u32) -> Option<CalendarDate> {
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month + 1, day).map(CalendarDate)
}

fn shift_months(date: NaiveDate, amount: i32) -> Option<NaiveDate> {
    let months = Months::new(amount.unsigned_abs());
    if amount >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_construction_is_zero_based() {
        let d = date(2024, 0, 31);
        assert_eq!((d.year(), d.month(), d.day()), (2024, 0, 31));
        assert_eq!(d.to_string(), "2024-01-31");

        assert_eq!(CalendarDate::from_ymd(2024, 12, 1), Err(DateError::InvalidMonth(12)));
        assert!(CalendarDate::from_ymd(2023, 1, 29).is_err());
        assert!(CalendarDate::from_ymd(2024, 1, 29).is_ok());
    }

    #[test]
    fn test_add_clamps_to_month_end() {
        assert_eq!(date(2024, 0, 31).add(1, DateUnit::Month), date(2024, 1, 29));
        assert_eq!(date(2023, 0, 31).add(1, DateUnit::Month), date(2023, 1, 28));
        assert_eq!(date(2024, 1, 29).add(1, DateUnit::Year), date(2025, 1, 28));
        assert_eq!(date(2024, 0, 15).subtract(1, DateUnit::Month), date(2023, 11, 15));
        assert_eq!(date(2024, 2, 1).subtract(1, DateUnit::Day), date(2024, 1, 29));
        assert_eq!(date(2024, 11, 31).add(1, DateUnit::Day), date(2025, 0, 1));
    }

    #[test]
    fn test_setters_clamp() {
        assert_eq!(date(2024, 1, 29).with_year(2023), date(2023, 1, 28));
        assert_eq!(date(2024, 0, 31).with_month(3), date(2024, 3, 30));
        assert_eq!(date(2024, 0, 31).with_month(40), date(2024, 11, 31));
    }

    #[test]
    fn test_granularity_comparisons() {
        let a = date(2024, 2, 1);
        let b = date(2024, 2, 20);
        let c = date(2025, 0, 1);

        assert!(a.is_same(&b, Granularity::Month));
        assert!(!a.is_same(&b, Granularity::Date));
        assert!(a.is_before(&b, Granularity::Date));
        assert!(!a.is_before(&b, Granularity::Month));
        assert!(a.is_same_or_before(&b, Granularity::Year));
        assert!(c.is_after(&b, Granularity::Year));
        assert!(c.is_same_or_after(&c, Granularity::Date));
        assert!(b.is_between(&a, &c, Granularity::Date));
        assert!(!b.is_between(&a, &c, Granularity::Month));
    }

    #[test]
    fn test_weekday_and_month_length() {
        // 2024-06-01 was a Saturday
        assert_eq!(date(2024, 5, 1).weekday(), 6);
        assert_eq!(date(2024, 1, 10).days_in_month(), 29);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(2023, 10), 30);
    }

    #[test]
    fn test_serde_is_iso() {
        let d = date(2024, 5, 15);
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2024-06-15\"");
        let back: CalendarDate = serde_json::from_str("\"2024-06-15\"").unwrap();
        assert_eq!(back, d);
    }
}

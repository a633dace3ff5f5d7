//! Pluggable date formatting
//!
//! Patterns use the token syntax of the picker's `date_format` setting
//! (`YYYY/MM/DD` and friends). The default formatter translates those tokens
//! into `chrono` format items and renders English names.

use chrono::{Month, Weekday};

use crate::date::CalendarDate;

/// Default pattern used when the owner does not configure one
pub const DEFAULT_DATE_FORMAT: &str = "YYYY/MM/DD";

/// Placeholder shown for an empty year selection
pub const YEAR_PLACEHOLDER: &str = "YYYY";

/// Placeholder shown for an empty month selection
pub const MONTH_PLACEHOLDER: &str = "MMMM YYYY";

/// Pattern tokens, longest first within each family
const TOKENS: [(&str, &str); 10] = [
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("DD", "%d"),
    ("D", "%-d"),
];

/// Turns dates and calendar units into display text
pub trait DateFormatter: Send + Sync {
    /// Render a date with a token pattern
    fn format(&self, date: &CalendarDate, pattern: &str) -> String;

    /// Full name of a zero-based month
    fn month_name(&self, month: u32) -> String;

    /// Abbreviated name of a zero-based month
    fn month_short_name(&self, month: u32) -> String;

    /// Abbreviated weekday name, 0 = Sunday
    fn weekday_short_name(&self, weekday: u32) -> String;
}

/// English formatter backed by `chrono`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl DateFormatter for DefaultFormatter {
    fn format(&self, date: &CalendarDate, pattern: &str) -> String {
        date.as_naive().format(&to_chrono_pattern(pattern)).to_string()
    }

    fn month_name(&self, month: u32) -> String {
        month_of(month).name().to_string()
    }

    fn month_short_name(&self, month: u32) -> String {
        month_of(month).name().chars().take(3).collect()
    }

    fn weekday_short_name(&self, weekday: u32) -> String {
        // chrono numbers weekdays from Monday
        let from_monday = ((weekday % 7) + 6) % 7;
        Weekday::try_from(from_monday as u8)
            .map(|day| day.to_string())
            .unwrap_or_default()
    }
}

fn month_of(month: u32) -> Month {
    Month::try_from((month.min(11) + 1) as u8).unwrap_or(Month::January)
}

/// Translate a token pattern into a `chrono` strftime string.
///
/// Characters outside the token set are copied literally.
pub fn to_chrono_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    'scan: while !rest.is_empty() {
        for (token, chrono_token) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(chrono_token);
                rest = tail;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        match chars.next() {
            Some('%') => out.push_str("%%"),
            Some(c) => out.push(c),
            None => {}
        }
        rest = chars.as_str();
    }

    out
}

//! Display text for the picker button and header

use crate::date::{CalendarDate, Granularity, TargetGranularity};
use crate::decade::DecadeWindow;
use crate::format::{DateFormatter, MONTH_PLACEHOLDER, YEAR_PLACEHOLDER};
use crate::selection::SelectionMode;

/// Text for the field showing the committed selection.
///
/// An empty selection shows a placeholder for `target`.
pub fn format_label(
    selection: &[CalendarDate],
    target: TargetGranularity,
    mode: SelectionMode,
    pattern: &str,
    formatter: &dyn DateFormatter,
) -> String {
    if selection.is_empty() {
        return match target {
            Granularity::Date => pattern.to_string(),
            Granularity::Month => MONTH_PLACEHOLDER.to_string(),
            Granularity::Year => YEAR_PLACEHOLDER.to_string(),
        };
    }

    let separator = match mode {
        SelectionMode::Range => " - ",
        SelectionMode::Single | SelectionMode::Multiple => ", ",
    };

    selection
        .iter()
        .map(|date| format_unit(date, target, pattern, formatter))
        .collect::<Vec<_>>()
        .join(separator)
}

/// One date rendered at `granularity`
pub fn format_unit(
    date: &CalendarDate,
    granularity: Granularity,
    pattern: &str,
    formatter: &dyn DateFormatter,
) -> String {
    match granularity {
        Granularity::Date => formatter.format(date, pattern),
        Granularity::Month => format!("{} {}", formatter.month_name(date.month()), date.year()),
        Granularity::Year => date.year().to_string(),
    }
}

/// Header caption of the year picker, e.g. `2020–2029`
pub fn decade_label(window: &DecadeWindow) -> String {
    format!("{}\u{2013}{}", window.first(), window.last())
}

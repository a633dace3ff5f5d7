//! Selection modes, the external value shape, and the commit reducer

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::date::{CalendarDate, Granularity};

/// How successive picks combine into a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
    Range,
}

/// Ordered selected dates.
///
/// Single holds at most one date, Multiple holds distinct days in pick
/// order, Range holds `[]`, `[start]` or `[start, end]` with `start <= end`.
pub type SelectionState = Vec<CalendarDate>;

/// The owner-controlled value, as passed in and reported back
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PickerValue {
    #[default]
    Empty,
    Date(CalendarDate),
    Dates(Vec<CalendarDate>),
}

impl PickerValue {
    /// Last date carried by the value, if any
    pub fn last(&self) -> Option<CalendarDate> {
        match self {
            PickerValue::Empty => None,
            PickerValue::Date(date) => Some(*date),
            PickerValue::Dates(dates) => dates.last().copied(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.last().is_none()
    }

    /// Interpret the value for `mode`.
    ///
    /// A value whose shape does not fit the mode degrades to an empty
    /// selection instead of failing.
    pub fn to_selection(&self, mode: SelectionMode) -> SelectionState {
        match (mode, self) {
            (_, PickerValue::Empty) => Vec::new(),
            (SelectionMode::Single, PickerValue::Date(date)) => vec![*date],
            (SelectionMode::Single, PickerValue::Dates(dates)) if dates.len() <= 1 => dates.clone(),
            (SelectionMode::Multiple, PickerValue::Dates(dates)) => {
                let mut unique: SelectionState = Vec::with_capacity(dates.len());
                for date in dates {
                    if !unique.iter().any(|seen| seen.is_same(date, Granularity::Date)) {
                        unique.push(*date);
                    }
                }
                unique
            }
            (SelectionMode::Range, PickerValue::Dates(dates))
                if dates.len() <= 2 && is_ordered(dates) =>
            {
                dates.clone()
            }
            _ => {
                warn!("Ignoring value {:?}: shape does not fit {:?} selection", self, mode);
                Vec::new()
            }
        }
    }

    /// The value reported to the owner for a selection
    pub fn from_selection(selection: &[CalendarDate], mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => selection
                .first()
                .map(|date| PickerValue::Date(*date))
                .unwrap_or(PickerValue::Empty),
            SelectionMode::Multiple | SelectionMode::Range => {
                PickerValue::Dates(selection.to_vec())
            }
        }
    }
}

fn is_ordered(dates: &[CalendarDate]) -> bool {
    dates
        .windows(2)
        .all(|pair| !pair[1].is_before(&pair[0], Granularity::Date))
}

impl From<CalendarDate> for PickerValue {
    fn from(date: CalendarDate) -> Self {
        PickerValue::Date(date)
    }
}

impl From<Option<CalendarDate>> for PickerValue {
    fn from(date: Option<CalendarDate>) -> Self {
        date.map(PickerValue::Date).unwrap_or(PickerValue::Empty)
    }
}

impl From<Vec<CalendarDate>> for PickerValue {
    fn from(dates: Vec<CalendarDate>) -> Self {
        PickerValue::Dates(dates)
    }
}

/// Fold a picked date into the current selection.
///
/// Range picks restart whenever the range is empty or already complete, or
/// when the candidate precedes the open start.
pub fn commit(
    candidate: CalendarDate,
    current: &[CalendarDate],
    mode: SelectionMode,
) -> SelectionState {
    match mode {
        SelectionMode::Single => vec![candidate],
        SelectionMode::Multiple => {
            let mut next = current.to_vec();
            match next
                .iter()
                .position(|date| date.is_same(&candidate, Granularity::Date))
            {
                Some(index) => {
                    next.remove(index);
                }
                None => next.push(candidate),
            }
            next
        }
        SelectionMode::Range => match current {
            [start] if !candidate.is_before(start, Granularity::Date) => vec![*start, candidate],
            _ => vec![candidate],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_single_replaces() {
        let a = date(2024, 2, 1);
        let b = date(2024, 2, 9);
        assert_eq!(commit(a, &[], SelectionMode::Single), vec![a]);
        assert_eq!(commit(b, &[a], SelectionMode::Single), vec![b]);
    }

    #[test]
    fn test_multiple_toggles() {
        let a = date(2024, 2, 1);
        let b = date(2024, 2, 9);

        let once = commit(a, &[], SelectionMode::Multiple);
        assert_eq!(commit(a, &once, SelectionMode::Multiple), Vec::<CalendarDate>::new());

        let both = commit(a, &commit(b, &[], SelectionMode::Multiple), SelectionMode::Multiple);
        assert_eq!(both, vec![b, a]);
        assert_eq!(commit(b, &both, SelectionMode::Multiple), vec![a]);
    }

    #[test]
    fn test_range_law() {
        let d1 = date(2024, 2, 1);
        let later = date(2024, 2, 10);
        let earlier = date(2024, 1, 20);

        let open = commit(d1, &[], SelectionMode::Range);
        assert_eq!(open, vec![d1]);
        assert_eq!(commit(later, &open, SelectionMode::Range), vec![d1, later]);
        assert_eq!(commit(earlier, &open, SelectionMode::Range), vec![earlier]);
        assert_eq!(commit(d1, &open, SelectionMode::Range), vec![d1, d1]);
    }

    #[test]
    fn test_range_restarts_when_complete() {
        let range = vec![date(2024, 2, 1), date(2024, 2, 10)];
        let inside = date(2024, 2, 5);
        assert_eq!(commit(inside, &range, SelectionMode::Range), vec![inside]);
    }

    #[test]
    fn test_value_shapes() {
        let a = date(2024, 2, 1);
        let b = date(2024, 2, 10);

        assert_eq!(PickerValue::Date(a).to_selection(SelectionMode::Single), vec![a]);
        assert!(PickerValue::Date(a).to_selection(SelectionMode::Multiple).is_empty());
        assert!(PickerValue::Dates(vec![a, b]).to_selection(SelectionMode::Single).is_empty());
        assert_eq!(PickerValue::Dates(vec![a, b]).to_selection(SelectionMode::Range), vec![a, b]);
        assert!(PickerValue::Dates(vec![b, a]).to_selection(SelectionMode::Range).is_empty());
        assert!(PickerValue::Dates(vec![a, a, b]).to_selection(SelectionMode::Range).is_empty());
        assert_eq!(
            PickerValue::Dates(vec![a, b, a]).to_selection(SelectionMode::Multiple),
            vec![a, b]
        );
        assert!(PickerValue::Empty.to_selection(SelectionMode::Range).is_empty());
    }

    #[test]
    fn test_value_serde() {
        let a = date(2024, 2, 1);
        assert_eq!(serde_json::to_string(&PickerValue::Empty).unwrap(), "null");
        assert_eq!(serde_json::to_string(&PickerValue::Date(a)).unwrap(), "\"2024-03-01\"");

        let parsed: PickerValue = serde_json::from_str("[\"2024-03-01\"]").unwrap();
        assert_eq!(parsed, PickerValue::Dates(vec![a]));
        let parsed: PickerValue = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, PickerValue::Empty);
    }

    #[test]
    fn test_from_selection() {
        let a = date(2024, 2, 1);
        assert_eq!(PickerValue::from_selection(&[a], SelectionMode::Single), PickerValue::Date(a));
        assert_eq!(PickerValue::from_selection(&[], SelectionMode::Single), PickerValue::Empty);
        assert_eq!(
            PickerValue::from_selection(&[], SelectionMode::Multiple),
            PickerValue::Dates(Vec::new())
        );
    }
}

//! Eligibility rules for years, months, dates and navigation steps

use serde::{Deserialize, Serialize};

use crate::date::{CalendarDate, DateUnit, Granularity, ZoomLevel};
use crate::decade::DecadeWindow;
use crate::grid::DayCell;

/// Owner-supplied constraints on what may be selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min_date: Option<CalendarDate>,
    pub max_date: Option<CalendarDate>,
    pub block_future_dates: bool,
}

/// Direction of a navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn step(self) -> i32 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Pure predicates over [`Bounds`] relative to a fixed "today".
///
/// Absent bounds never constrain anything.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryPolicy {
    bounds: Bounds,
    today: CalendarDate,
}

impl BoundaryPolicy {
    pub fn new(bounds: Bounds, today: CalendarDate) -> Self {
        Self { bounds, today }
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    pub fn year_disabled(&self, year: i32) -> bool {
        match CalendarDate::from_year(year) {
            Ok(date) => self.out_of_bounds(&date, Granularity::Year),
            Err(_) => true,
        }
    }

    /// `month` is zero-based; `context_year` is the year being browsed
    pub fn month_disabled(&self, month: u32, context_year: i32) -> bool {
        match CalendarDate::from_year_month(context_year, month) {
            Ok(date) => self.out_of_bounds(&date, Granularity::Month),
            Err(_) => true,
        }
    }

    /// Fill cells from neighbouring months are never selectable
    pub fn date_disabled(&self, cell: &DayCell) -> bool {
        !cell.belongs_to_displayed_month || self.out_of_bounds(&cell.date, Granularity::Date)
    }

    /// Whether a step from the current view would land entirely out of bounds.
    ///
    /// Upper constraints (future blocking, `max_date`) only restrict `Next`;
    /// `min_date` only restricts `Previous`.
    pub fn navigation_disabled(
        &self,
        direction: Direction,
        zoom: ZoomLevel,
        visible: &CalendarDate,
        window: &DecadeWindow,
    ) -> bool {
        let (target, granularity) = match zoom {
            Granularity::Year => {
                let year = match direction {
                    Direction::Next => window.last() + 1,
                    Direction::Previous => window.first() - 1,
                };
                match CalendarDate::from_year(year) {
                    Ok(date) => (date, Granularity::Year),
                    Err(_) => return true,
                }
            }
            Granularity::Month => (
                visible.add(direction.step(), DateUnit::Year),
                Granularity::Year,
            ),
            Granularity::Date => (
                visible.add(direction.step(), DateUnit::Month),
                Granularity::Month,
            ),
        };

        match direction {
            Direction::Next => self.exceeds_upper(&target, granularity),
            Direction::Previous => self.exceeds_lower(&target, granularity),
        }
    }

    fn out_of_bounds(&self, date: &CalendarDate, granularity: Granularity) -> bool {
        self.exceeds_upper(date, granularity) || self.exceeds_lower(date, granularity)
    }

    fn exceeds_upper(&self, date: &CalendarDate, granularity: Granularity) -> bool {
        (self.bounds.block_future_dates && date.is_after(&self.today, granularity))
            || self
                .bounds
                .max_date
                .is_some_and(|max| date.is_after(&max, granularity))
    }

    fn exceeds_lower(&self, date: &CalendarDate, granularity: Granularity) -> bool {
        self.bounds
            .min_date
            .is_some_and(|min| date.is_before(&min, granularity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_month;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn future_only() -> BoundaryPolicy {
        BoundaryPolicy::new(
            Bounds { block_future_dates: true, ..Bounds::default() },
            date(2024, 5, 15),
        )
    }

    fn bounded_2024() -> BoundaryPolicy {
        BoundaryPolicy::new(
            Bounds {
                min_date: Some(date(2024, 0, 1)),
                max_date: Some(date(2024, 11, 31)),
                block_future_dates: false,
            },
            date(2024, 5, 15),
        )
    }

    #[test]
    fn test_unconstrained_allows_everything() {
        let policy = BoundaryPolicy::new(Bounds::default(), date(2024, 5, 15));
        assert!(!policy.year_disabled(9999));
        assert!(!policy.month_disabled(11, 3000));
        let window = DecadeWindow::build(2024);
        for zoom in [Granularity::Year, Granularity::Month, Granularity::Date] {
            for direction in [Direction::Previous, Direction::Next] {
                assert!(!policy.navigation_disabled(direction, zoom, &date(2024, 5, 15), &window));
            }
        }
    }

    #[test]
    fn test_future_years_are_monotonic() {
        let policy = future_only();
        assert!(!policy.year_disabled(2024));
        let first_blocked = (2000..2100).find(|y| policy.year_disabled(*y)).unwrap();
        assert_eq!(first_blocked, 2025);
        assert!((first_blocked..2100).all(|y| policy.year_disabled(y)));
    }

    #[test]
    fn test_month_checks_use_context_year() {
        let policy = future_only();
        assert!(!policy.month_disabled(5, 2024));
        assert!(policy.month_disabled(6, 2024));
        assert!(!policy.month_disabled(11, 2023));

        let policy = bounded_2024();
        assert!(policy.month_disabled(11, 2023));
        assert!(!policy.month_disabled(0, 2024));
        assert!(policy.month_disabled(0, 2025));
    }

    #[test]
    fn test_date_cells() {
        let policy = future_only();
        let grid = build_month(5, 2024, &policy.today());

        for cell in grid.cells() {
            let expected = !cell.belongs_to_displayed_month || cell.day() > 15;
            assert_eq!(policy.date_disabled(cell), expected, "{}", cell.date);
        }
    }

    #[test]
    fn test_min_max_navigation() {
        let policy = bounded_2024();
        let window = DecadeWindow::build(2024);
        let blocked = |direction, zoom, visible: CalendarDate| {
            policy.navigation_disabled(direction, zoom, &visible, &window)
        };
        let january = date(2024, 0, 15);
        let december = date(2024, 11, 15);

        assert!(blocked(Direction::Previous, Granularity::Month, january));
        assert!(blocked(Direction::Next, Granularity::Month, december));

        assert!(blocked(Direction::Previous, Granularity::Date, january));
        assert!(!blocked(Direction::Next, Granularity::Date, january));
        assert!(blocked(Direction::Next, Granularity::Date, december));

        assert!(blocked(Direction::Previous, Granularity::Year, january));
        assert!(blocked(Direction::Next, Granularity::Year, january));
    }

    #[test]
    fn test_future_blocking_only_limits_next() {
        let policy = future_only();
        let window = DecadeWindow::build(2024);
        let visible = date(2024, 5, 1);
        let blocked = |direction, zoom, visible: CalendarDate| {
            policy.navigation_disabled(direction, zoom, &visible, &window)
        };

        assert!(blocked(Direction::Next, Granularity::Date, visible));
        assert!(!blocked(Direction::Previous, Granularity::Date, visible));
        assert!(blocked(Direction::Next, Granularity::Month, visible));
        assert!(blocked(Direction::Next, Granularity::Year, visible));
        assert!(!policy.navigation_disabled(
            Direction::Next,
            Granularity::Year,
            &visible,
            &DecadeWindow::build(2010)
        ));
        assert!(!blocked(Direction::Next, Granularity::Date, date(2024, 4, 31)));
    }
}

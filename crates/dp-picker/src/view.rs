//! Render-facing snapshot of a picker
//!
//! The rendering layer draws a [`PickerView`] and feeds clicks back through
//! [`CalendarStateMachine::activate`]; it never computes eligibility or
//! highlight state itself.

use dp_core::{
    decade_label, CalendarDate, CellRef, DayCell, DecadeWindow, Direction, Granularity,
    SelectionStatus, ZoomLevel,
};
use serde::Serialize;

use crate::machine::{CalendarStateMachine, EngineState};

/// Months per row in the month grid
pub const MONTH_COLUMNS: usize = 4;

/// Years per row in the year grid
pub const YEAR_COLUMNS: usize = 5;

/// What a click on a cell does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CellAction {
    SelectYear(i32),
    SelectMonth(u32),
    SelectDate(DayCell),
}

/// Everything needed to draw one cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Text shown in the cell
    pub text: String,
    /// Stable identity across renders
    pub key: String,
    /// Long-form caption, e.g. for a tooltip
    pub title: String,
    pub disabled: bool,
    /// The cell contains today
    pub highlighted: bool,
    /// The cell is the month/year being browsed
    pub current: bool,
    pub rounded: bool,
    pub status: SelectionStatus,
    pub action: CellAction,
}

/// Header captions; only the entries relevant to the zoom level are set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderLabels {
    /// Decade range in the year grid
    pub decade: Option<String>,
    /// Month button in the date grid
    pub month: Option<String>,
    /// Year button in the month and date grids
    pub year: Option<String>,
}

/// Consistent picture of the picker at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerView {
    pub zoom_level: ZoomLevel,
    pub overlay_open: bool,
    pub label: String,
    pub header: HeaderLabels,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    /// Weekday names above the date grid, Sunday first
    pub column_headers: Vec<String>,
    pub rows: Vec<Vec<CellView>>,
}

impl CalendarStateMachine {
    /// Build a view from a single read of the state
    pub fn view(&self) -> PickerView {
        let state = self.state();

        let (column_headers, rows) = match state.zoom_level {
            Granularity::Date => (
                (0..7).map(|i| self.formatter.weekday_short_name(i)).collect(),
                self.date_rows(&state),
            ),
            Granularity::Month => (Vec::new(), self.month_rows(&state)),
            Granularity::Year => (Vec::new(), self.year_rows(&state)),
        };

        PickerView {
            zoom_level: state.zoom_level,
            overlay_open: state.overlay_open,
            label: self.label_for(&state),
            header: self.header_for(&state),
            prev_disabled: self.navigation_disabled_for(&state, Direction::Previous),
            next_disabled: self.navigation_disabled_for(&state, Direction::Next),
            column_headers,
            rows,
        }
    }

    /// Header captions for the current zoom level
    pub fn header(&self) -> HeaderLabels {
        self.header_for(&self.state())
    }

    /// Run the transition behind a clicked cell
    pub fn activate(&self, action: CellAction) -> bool {
        match action {
            CellAction::SelectYear(year) => self.select_year(year),
            CellAction::SelectMonth(month) => self.select_month(month),
            CellAction::SelectDate(cell) => self.select_date(&cell),
        }
    }

    fn header_for(&self, state: &EngineState) -> HeaderLabels {
        let visible = state.visible_date;
        match state.zoom_level {
            Granularity::Year => HeaderLabels {
                decade: Some(decade_label(&DecadeWindow::build(state.decade_base_year))),
                ..HeaderLabels::default()
            },
            Granularity::Month => HeaderLabels {
                year: Some(visible.year().to_string()),
                ..HeaderLabels::default()
            },
            Granularity::Date => HeaderLabels {
                month: Some(self.formatter.month_name(visible.month())),
                year: Some(visible.year().to_string()),
                ..HeaderLabels::default()
            },
        }
    }

    fn date_rows(&self, state: &EngineState) -> Vec<Vec<CellView>> {
        let grid = self.grid_for(state);
        grid.weeks
            .iter()
            .map(|week| {
                week.iter()
                    .map(|cell| CellView {
                        text: cell.day().to_string(),
                        key: cell.date.to_string(),
                        title: cell.date.format(&self.config.date_format, self.formatter.as_ref()),
                        disabled: self.policy.date_disabled(cell),
                        highlighted: cell.is_today,
                        current: false,
                        rounded: true,
                        status: self.status_for(state, CellRef::Date(cell.date)),
                        action: CellAction::SelectDate(*cell),
                    })
                    .collect()
            })
            .collect()
    }

    fn month_rows(&self, state: &EngineState) -> Vec<Vec<CellView>> {
        let year = state.visible_date.year();
        let today = self.policy.today();
        let cells: Vec<CellView> = (0..12)
            .map(|month| CellView {
                text: self.formatter.month_short_name(month),
                key: format!("{year}-{:02}", month + 1),
                title: format!("{} {}", self.formatter.month_name(month), year),
                disabled: self.policy.month_disabled(month, year),
                highlighted: CalendarDate::from_year_month(year, month)
                    .is_ok_and(|date| date.is_same(&today, Granularity::Month)),
                current: state.visible_date.month() == month,
                rounded: false,
                status: self.status_for(state, CellRef::Month(month)),
                action: CellAction::SelectMonth(month),
            })
            .collect();
        chunk(cells, MONTH_COLUMNS)
    }

    fn year_rows(&self, state: &EngineState) -> Vec<Vec<CellView>> {
        let today = self.policy.today();
        let cells: Vec<CellView> = DecadeWindow::build(state.decade_base_year)
            .years()
            .iter()
            .map(|&year| CellView {
                text: year.to_string(),
                key: year.to_string(),
                title: year.to_string(),
                disabled: self.policy.year_disabled(year),
                highlighted: year == today.year(),
                current: year == state.visible_date.year(),
                rounded: false,
                status: self.status_for(state, CellRef::Year(year)),
                action: CellAction::SelectYear(year),
            })
            .collect();
        chunk(cells, YEAR_COLUMNS)
    }
}

fn chunk(cells: Vec<CellView>, columns: usize) -> Vec<Vec<CellView>> {
    cells.chunks(columns).map(<[CellView]>::to_vec).collect()
}

//! Calendar state machine implementation

use std::sync::{Arc, Weak};

use dp_core::{
    build_month, commit, format_label, resolve, BoundaryPolicy, CalendarDate, CellRef,
    DateFormatter, DateUnit, DayCell, DecadeWindow, DefaultFormatter, Direction, Granularity,
    MonthGrid, PickerConfig, PickerError, PickerValue, SelectionMode, SelectionState,
    SelectionStatus, ZoomLevel,
};
use parking_lot::RwLock;
use tracing::debug;

use crate::subscriber::ChangeSubscriber;

/// Browsing state of one picker, replaced as a whole by every transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    pub zoom_level: ZoomLevel,
    /// Anchor of the month/year being browsed
    pub visible_date: CalendarDate,
    pub decade_base_year: i32,
    pub overlay_open: bool,
    pub selection: SelectionState,
}

/// The picker engine.
///
/// Holds the transient view state for one widget instance, derives display
/// data from it, and reports committed selections to subscribers. The
/// owner's value is authoritative: picks only propose a new value, and the
/// selection changes once the owner passes it to
/// [`CalendarStateMachine::set_value`].
pub struct CalendarStateMachine {
    pub(crate) config: PickerConfig,
    pub(crate) policy: BoundaryPolicy,
    pub(crate) formatter: Arc<dyn DateFormatter>,
    pub(crate) state: RwLock<EngineState>,
    subscribers: RwLock<Vec<Weak<dyn ChangeSubscriber>>>,
}

impl CalendarStateMachine {
    /// Create a machine for `value`, using the local date as today
    pub fn new(config: PickerConfig, value: PickerValue) -> Result<Self, PickerError> {
        Self::new_at(config, value, CalendarDate::today())
    }

    /// Create a machine with a fixed notion of today
    pub fn new_at(
        config: PickerConfig,
        value: PickerValue,
        today: CalendarDate,
    ) -> Result<Self, PickerError> {
        config.validate()?;

        let visible_date = value.last().unwrap_or(today);
        let state = EngineState {
            zoom_level: config.target_granularity,
            visible_date,
            decade_base_year: visible_date.year(),
            overlay_open: false,
            selection: value.to_selection(config.selection_mode),
        };

        Ok(Self {
            policy: BoundaryPolicy::new(config.bounds(), today),
            config,
            formatter: Arc::new(DefaultFormatter),
            state: RwLock::new(state),
            subscribers: RwLock::new(Vec::new()),
        })
    }

    /// Replace the date formatter
    pub fn with_formatter(mut self, formatter: Arc<dyn DateFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Add a subscriber.
    ///
    /// Only a weak reference is stored: the caller must keep the `Arc` alive
    /// for as long as it wants commits, otherwise they are silently dropped.
    pub fn add_subscriber(&self, subscriber: Arc<dyn ChangeSubscriber>) {
        self.subscribers.write().push(Arc::downgrade(&subscriber));
    }

    /// Adopt a new external value.
    ///
    /// Never notifies subscribers.
    pub fn set_value(&self, value: PickerValue) {
        let mut state = self.state.write();
        state.selection = value.to_selection(self.config.selection_mode);
        state.visible_date = value.last().unwrap_or(self.policy.today());
        state.decade_base_year = state.visible_date.year();
        debug!("Resynchronized to {:?}, visible {}", value, state.visible_date);
    }

    /// Open or close the overlay; `None` toggles.
    ///
    /// Closing resets the zoom level to the target granularity.
    pub fn toggle_overlay(&self, explicit: Option<bool>) {
        let mut state = self.state.write();
        let open = explicit.unwrap_or(!state.overlay_open);
        state.overlay_open = open;
        if !open {
            state.zoom_level = self.config.target_granularity;
        }
        debug!("Overlay {}", if open { "opened" } else { "closed" });
    }

    /// Step to the previous/next decade, year or month depending on zoom.
    ///
    /// Returns false, leaving the state untouched, when the step is out of bounds.
    pub fn navigate(&self, direction: Direction) -> bool {
        let mut state = self.state.write();
        let window = DecadeWindow::build(state.decade_base_year);

        if self
            .policy
            .navigation_disabled(direction, state.zoom_level, &state.visible_date, &window)
        {
            debug!("Navigation {:?} blocked at {:?} zoom", direction, state.zoom_level);
            return false;
        }

        let step = direction.step();
        match state.zoom_level {
            Granularity::Year => {
                state.decade_base_year += step * 10;
            }
            Granularity::Month => {
                state.visible_date = state.visible_date.add(step, DateUnit::Year);
                state.decade_base_year = state.visible_date.year();
            }
            Granularity::Date => {
                state.visible_date = state.visible_date.add(step, DateUnit::Month);
                state.decade_base_year = state.visible_date.year();
            }
        }

        debug!("Navigated {:?} to {}", direction, state.visible_date);
        true
    }

    /// Switch the displayed grid without touching the selection
    pub fn drill_to(&self, zoom: ZoomLevel) {
        let mut state = self.state.write();
        state.zoom_level = zoom;
        if zoom == Granularity::Year {
            state.decade_base_year = state.visible_date.year();
        }
        debug!("Drilled to {:?}", zoom);
    }

    /// Pick a year from the year grid.
    ///
    /// Drills into the month grid unless years are the target granularity,
    /// in which case January 1st of the year is committed.
    pub fn select_year(&self, year: i32) -> bool {
        if self.policy.year_disabled(year) {
            debug!("Year {} is disabled", year);
            return false;
        }

        let committed = {
            let mut state = self.state.write();
            state.visible_date = state.visible_date.with_year(year);
            state.decade_base_year = year;

            match self.config.target_granularity {
                Granularity::Month | Granularity::Date => {
                    state.zoom_level = Granularity::Month;
                    None
                }
                Granularity::Year => match CalendarDate::from_year(year) {
                    Ok(candidate) => Some(self.commit_locked(&mut state, candidate)),
                    Err(_) => None,
                },
            }
        };

        if let Some(value) = committed {
            self.notify_subscribers(&value);
        }
        true
    }

    /// Pick a zero-based month of the browsed year.
    ///
    /// Drills into the date grid for date targets and commits the 1st of the
    /// month for month targets. With a year target only the view moves.
    pub fn select_month(&self, month: u32) -> bool {
        let committed = {
            let mut state = self.state.write();
            let year = state.visible_date.year();
            if month > 11 || self.policy.month_disabled(month, year) {
                debug!("Month {} of {} is disabled", month, year);
                return false;
            }
            state.visible_date = state.visible_date.with_month(month);

            match self.config.target_granularity {
                Granularity::Date => {
                    state.zoom_level = Granularity::Date;
                    None
                }
                Granularity::Month => match CalendarDate::from_year_month(year, month) {
                    Ok(candidate) => Some(self.commit_locked(&mut state, candidate)),
                    Err(_) => None,
                },
                Granularity::Year => {
                    debug!("Month pick with a year target only moves the view");
                    None
                }
            }
        };

        if let Some(value) = committed {
            self.notify_subscribers(&value);
        }
        true
    }

    /// Pick a day from the month grid; disabled cells are ignored
    pub fn select_date(&self, cell: &DayCell) -> bool {
        if self.policy.date_disabled(cell) {
            debug!("Date {} is disabled", cell.date);
            return false;
        }

        let value = {
            let mut state = self.state.write();
            self.commit_locked(&mut state, cell.date)
        };
        self.notify_subscribers(&value);
        true
    }

    /// Snapshot of the whole state
    pub fn state(&self) -> EngineState {
        self.state.read().clone()
    }

    pub fn zoom_level(&self) -> ZoomLevel {
        self.state.read().zoom_level
    }

    pub fn visible_date(&self) -> CalendarDate {
        self.state.read().visible_date
    }

    pub fn decade_base_year(&self) -> i32 {
        self.state.read().decade_base_year
    }

    pub fn overlay_open(&self) -> bool {
        self.state.read().overlay_open
    }

    pub fn selection(&self) -> SelectionState {
        self.state.read().selection.clone()
    }

    /// The selection in the shape reported to the owner
    pub fn value(&self) -> PickerValue {
        PickerValue::from_selection(&self.state.read().selection, self.config.selection_mode)
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn today(&self) -> CalendarDate {
        self.policy.today()
    }

    /// The month grid, only while the date grid is shown
    pub fn month_grid(&self) -> Option<MonthGrid> {
        let state = self.state.read();
        (state.zoom_level == Granularity::Date).then(|| self.grid_for(&state))
    }

    /// The decade, only while the year grid is shown
    pub fn decade_window(&self) -> Option<DecadeWindow> {
        let state = self.state.read();
        (state.zoom_level == Granularity::Year).then(|| DecadeWindow::build(state.decade_base_year))
    }

    /// Text for the field showing the committed selection
    pub fn label(&self) -> String {
        self.label_for(&self.state.read())
    }

    pub fn is_year_disabled(&self, year: i32) -> bool {
        self.policy.year_disabled(year)
    }

    /// Month eligibility within the browsed year
    pub fn is_month_disabled(&self, month: u32) -> bool {
        self.policy.month_disabled(month, self.state.read().visible_date.year())
    }

    pub fn is_date_disabled(&self, cell: &DayCell) -> bool {
        self.policy.date_disabled(cell)
    }

    pub fn is_navigation_disabled(&self, direction: Direction) -> bool {
        self.navigation_disabled_for(&self.state.read(), direction)
    }

    /// Highlight flags for a cell, relative to the target granularity
    pub fn selection_status(&self, cell: CellRef) -> SelectionStatus {
        self.status_for(&self.state.read(), cell)
    }

    pub(crate) fn grid_for(&self, state: &EngineState) -> MonthGrid {
        build_month(state.visible_date.month(), state.visible_date.year(), &self.policy.today())
    }

    pub(crate) fn label_for(&self, state: &EngineState) -> String {
        format_label(
            &state.selection,
            self.config.target_granularity,
            self.config.selection_mode,
            &self.config.date_format,
            self.formatter.as_ref(),
        )
    }

    pub(crate) fn navigation_disabled_for(
        &self,
        state: &EngineState,
        direction: Direction,
    ) -> bool {
        let window = DecadeWindow::build(state.decade_base_year);
        self.policy
            .navigation_disabled(direction, state.zoom_level, &state.visible_date, &window)
    }

    pub(crate) fn status_for(&self, state: &EngineState, cell: CellRef) -> SelectionStatus {
        resolve(
            self.config.target_granularity,
            cell,
            &state.selection,
            self.config.selection_mode,
            state.visible_date.year(),
        )
    }

    /// Derive the value to report for `candidate`.
    ///
    /// The selection itself is left alone; it only changes when the owner
    /// hands the value back through [`CalendarStateMachine::set_value`].
    fn commit_locked(&self, state: &mut EngineState, candidate: CalendarDate) -> PickerValue {
        let mode = self.config.selection_mode;
        let next = commit(candidate, &state.selection, mode);
        if mode == SelectionMode::Single {
            state.overlay_open = false;
            state.zoom_level = self.config.target_granularity;
        }
        debug!("Committed {} ({:?}), proposing {:?}", candidate, mode, next);
        PickerValue::from_selection(&next, mode)
    }

    /// Notify all live subscribers of a committed value
    fn notify_subscribers(&self, value: &PickerValue) {
        let live: Vec<Arc<dyn ChangeSubscriber>> = {
            let mut subscribers = self.subscribers.write();

            // Remove any dead weak references
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        for subscriber in live {
            subscriber.on_change(value);
        }
    }
}

//! Stateful date picker engine
//!
//! [`CalendarStateMachine`] owns the browsing state of one picker widget
//! (zoom level, visible month, decade, overlay) and turns user events into
//! committed selections, built from the pure pieces in `dp-core`.

pub mod machine;
pub mod subscriber;
pub mod view;

pub use machine::{CalendarStateMachine, EngineState};
pub use subscriber::{subscriber_from_fn, ChangeSubscriber, FnSubscriber};
pub use view::{CellAction, CellView, HeaderLabels, PickerView};

pub use dp_core;

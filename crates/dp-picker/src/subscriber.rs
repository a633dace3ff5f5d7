//! Change subscriber trait

use std::sync::Arc;

use dp_core::PickerValue;

/// Receives the value produced by a commit, so the owner can adopt it
pub trait ChangeSubscriber: Send + Sync {
    /// Called after a pick changed the selection
    fn on_change(&self, value: &PickerValue);
}

/// Adapter turning a closure into a subscriber
pub struct FnSubscriber<F> {
    handler: F,
}

impl<F> ChangeSubscriber for FnSubscriber<F>
where
    F: Fn(&PickerValue) + Send + Sync,
{
    fn on_change(&self, value: &PickerValue) {
        (self.handler)(value);
    }
}

/// Create a subscriber from a closure.
///
/// Pickers only keep weak references, so hold on to the returned `Arc`.
pub fn subscriber_from_fn<F>(f: F) -> Arc<dyn ChangeSubscriber>
where
    F: Fn(&PickerValue) + Send + Sync + 'static,
{
    Arc::new(FnSubscriber { handler: f })
}

//! # Listener Kernel (Hook)
//!
//! The callback interface for notifications.
//!
//! Hooks run synchronously, in subscription order, on the caller's thread.
//! Every subscribed hook sees every event; no hook can withhold an event
//! from the ones after it.

use crate::{error::BoxError, event::Message};

/// A listener for events of type `E`.
///
/// Closures of the form `Fn(&E) -> Result<(), BoxError>` are hooks.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Hook<{E}>`",
    label = "missing `Hook` implementation",
    note = "Hooks must implement `on_event` for the specific event type `{E}`."
)]
pub trait Hook<E: Message>: 'static {
    /// Called when an event is delivered.
    ///
    /// An error is logged by the emitter and otherwise ignored.
    fn on_event(&self, event: &E) -> Result<(), BoxError>;
}

impl<E, F> Hook<E> for F
where
    E: Message,
    F: Fn(&E) -> Result<(), BoxError> + 'static,
{
    fn on_event(&self, event: &E) -> Result<(), BoxError> {
        self(event)
    }
}

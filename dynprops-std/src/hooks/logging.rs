//! Logging hook for notification observation.

use dynprops_core::{BoxError, Hook, Message};

/// A hook that logs every notification it receives.
pub struct LoggingHook;

impl<E: Message + std::fmt::Debug> Hook<E> for LoggingHook {
    fn on_event(&self, event: &E) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(?event, "notification");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = event;
        }
        Ok(())
    }
}

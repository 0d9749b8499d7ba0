//! Testing utilities for dynprops.
//!
//! Hooks that make notification behavior observable in tests.
//!
//! # Features
//!
//! - [`RecordingHook`]: A hook that records all events it receives
//! - [`CountingHook`]: A hook that counts invocations
//! - [`FailingHook`]: A hook that always returns an error

use dynprops_core::{BoxError, Hook, Message};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Hook
// ============================================================================

/// A hook that records all events it receives.
///
/// Clones share one recording.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHook::<PropertyAdded>::new();
/// obj.subscribe_added(recorder.clone());
///
/// addprop(&obj, "speed")?;
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingHook<E: Clone> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E: Clone> RecordingHook<E> {
    /// Create a new, empty recording hook.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<E> {
        self.events.lock().unwrap().clone()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl<E: Clone> Default for RecordingHook<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for RecordingHook<E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<E: Message + Clone> Hook<E> for RecordingHook<E> {
    fn on_event(&self, event: &E) -> Result<(), BoxError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

// ============================================================================
// Counting Hook
// ============================================================================

/// A hook that counts invocations, whatever the event type.
#[derive(Clone, Default)]
pub struct CountingHook {
    count: Arc<AtomicUsize>,
}

impl CountingHook {
    /// Create a new counting hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<E: Message> Hook<E> for CountingHook {
    fn on_event(&self, _event: &E) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Hook
// ============================================================================

/// A hook that always fails with the given message.
#[derive(Clone)]
pub struct FailingHook {
    message: String,
}

impl FailingHook {
    /// Create a hook failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<E: Message> Hook<E> for FailingHook {
    fn on_event(&self, _event: &E) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}

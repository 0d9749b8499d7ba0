//! Filter hook for conditional delivery.

use dynprops_core::{BoxError, Hook, Message};

/// A hook that forwards only events matching a predicate.
///
/// Rejected events are ignored; other listeners still receive them.
///
/// # Example
///
/// ```rust,ignore
/// let only_speed = FilterHook::new(|e: &PropertyAdded| e.name == "speed", recorder);
/// obj.subscribe_added(only_speed);
/// ```
pub struct FilterHook<F, H> {
    predicate: F,
    inner: H,
}

impl<F, H> FilterHook<F, H> {
    /// Wrap `inner` so it only sees events accepted by `predicate`.
    pub fn new(predicate: F, inner: H) -> Self {
        Self { predicate, inner }
    }
}

impl<E, F, H> Hook<E> for FilterHook<F, H>
where
    E: Message,
    F: Fn(&E) -> bool + 'static,
    H: Hook<E>,
{
    fn on_event(&self, event: &E) -> Result<(), BoxError> {
        if (self.predicate)(event) {
            self.inner.on_event(event)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingHook;

    #[test]
    fn forwards_matching_events_only() {
        let counter = CountingHook::new();
        let hook = FilterHook::new(|e: &String| e.starts_with("keep"), counter.clone());

        hook.on_event(&"drop me".to_owned()).unwrap();
        assert_eq!(counter.count(), 0);

        hook.on_event(&"keep me".to_owned()).unwrap();
        assert_eq!(counter.count(), 1);
    }
}

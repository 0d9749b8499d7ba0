//! Listener registry with best-effort delivery.

use dynprops_core::{Hook, HookError, Message};
use std::{
    fmt,
    panic::{self, AssertUnwindSafe},
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

/// Handle returned by [`Registry::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Outcome of delivering one event.
#[derive(Debug, Default)]
pub struct Delivery {
    /// Hooks that were invoked, including failed ones.
    pub invoked: usize,
    /// Errors and panics raised by hooks, in delivery order.
    pub failures: Vec<HookError>,
}

/// An ordered set of hooks for events of type `E`.
///
/// Cloning is cheap and yields a snapshot sharing the same hooks.
pub struct Registry<E: Message> {
    hooks: Vec<(ListenerId, Rc<dyn Hook<E>>)>,
}

impl<E: Message> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Message> Clone for Registry<E> {
    fn clone(&self) -> Self {
        Self {
            hooks: self.hooks.clone(),
        }
    }
}

impl<E: Message> fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("listeners", &self.hooks.len())
            .finish()
    }
}

impl<E: Message> Registry<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a hook. Hooks run in subscription order.
    pub fn subscribe<H: Hook<E>>(&mut self, hook: H) -> ListenerId {
        let id = ListenerId::next();
        self.hooks.push((id, Rc::new(hook)));
        id
    }

    /// Remove a hook. Returns `false` if `id` is not registered here.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.hooks.len();
        self.hooks.retain(|(hook_id, _)| *hook_id != id);
        self.hooks.len() != before
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns `true` if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Deliver `event` to every hook in order.
    ///
    /// Never fails: hook errors and panics are collected into the returned
    /// [`Delivery`] and every remaining hook still runs.
    pub fn notify(&self, event: &E) -> Delivery {
        let mut delivery = Delivery::default();
        for (_, hook) in &self.hooks {
            delivery.invoked += 1;
            match panic::catch_unwind(AssertUnwindSafe(|| hook.on_event(event))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => delivery.failures.push(HookError::Custom(e)),
                Err(payload) => delivery.failures.push(HookError::Panic(panic_message(&*payload))),
            }
        }
        delivery
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}

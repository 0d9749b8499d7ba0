//! Notifications emitted by the registrar.

use crate::name::FieldName;
use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

/// A payload that can be delivered to listeners.
///
/// Delivery is synchronous on the emitting thread, so no `Send` bound.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be delivered to listeners",
    label = "missing `Message` implementation",
    note = "Add `impl Message for {Self} {{}}`."
)]
pub trait Message: 'static {}

impl Message for () {}
impl Message for String {}
impl Message for &'static str {}

/// Process-unique identity of an instance.
///
/// All aliases of one instance share the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Emitted once per target each time `addprop` registers a name,
/// including idempotent re-registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAdded {
    /// The instance that received the field.
    pub instance: InstanceId,
    /// The registered name.
    pub name: FieldName,
}

impl Message for PropertyAdded {}

/// Emitted once per target when `rmprop` removes a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRemoved {
    /// The instance that lost the field.
    pub instance: InstanceId,
    /// The removed name.
    pub name: FieldName,
}

impl Message for PropertyRemoved {}

//! # Access Interceptor
//!
//! Every read and write of an instance field goes through here.
//!
//! 1. [`subs_added`] rewrites the request: if its first step names a
//!    dynamic field, a synthetic step naming the store
//!    ([`DYNAMIC_STORE_FIELD`]) is put in front of it.
//! 2. The default mechanism resolves the rewritten request. The first
//!    step selects a static field or the store; the rest walk the value
//!    with [`dynprops_std::path`].
//!
//! Static fields always win: a name is only redirected into the store if
//! the type does not declare it.

use crate::instance::{Dynamic, Inner};
use dynprops_core::{AccessError, Fields, Step, Subscript, Value};
use dynprops_std::path;

/// Name of the synthetic member that addresses an instance's dynamic store.
///
/// Not a valid identifier, so it can never clash with a field.
pub const DYNAMIC_STORE_FIELD: &str = "@dynamic";

/// Rewrite `request` so that a leading dynamic name resolves through the store.
///
/// Pure: the instance is not modified. Only the first step is examined;
/// later steps are never redirected.
///
/// Types that wrap [`subsref`]/[`subsasgn`] with their own entry points
/// must run requests through this first.
pub fn subs_added<T: Fields>(instance: &Dynamic<T>, request: impl Into<Subscript>) -> Subscript {
    let request = request.into();
    if request.is_empty() {
        return request;
    }

    // Left as is while mutably borrowed; the access itself reports it.
    let Ok(inner) = instance.inner().try_borrow() else {
        return request;
    };
    if inner.store.is_empty() {
        return request;
    }

    match request.first() {
        Some(Step::Member(name)) if !T::has_field(name) && inner.store.contains(name) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(instance = %inner.id, %name, "redirecting to dynamic store");
            request.prepend(Step::Member(DYNAMIC_STORE_FIELD.to_owned()))
        }
        _ => request,
    }
}

/// Read the value addressed by `request`.
///
/// Errors from the default mechanism propagate unchanged. Fails with
/// [`AccessError::Borrowed`] inside [`Dynamic::with_mut`].
pub fn subsref<T: Fields>(
    instance: &Dynamic<T>,
    request: impl Into<Subscript>,
) -> Result<Value, AccessError> {
    let request = subs_added(instance, request);
    let inner = instance
        .inner()
        .try_borrow()
        .map_err(|_| AccessError::Borrowed)?;
    inner.resolve(request.steps())
}

/// Assign `value` at the location addressed by `request`.
///
/// Returns the instance handle, which aliases `instance`. Writing a name
/// that is neither declared nor registered fails with
/// [`AccessError::NoSuchField`]; dynamic fields must be added with
/// [`addprop`](crate::addprop) first. Nothing is committed on error.
///
/// Fails with [`AccessError::Borrowed`] while the instance is borrowed by
/// [`Dynamic::with`], [`Dynamic::with_mut`] or a held [`Dynamic::store`].
pub fn subsasgn<T: Fields>(
    instance: &Dynamic<T>,
    request: impl Into<Subscript>,
    value: impl Into<Value>,
) -> Result<Dynamic<T>, AccessError> {
    let request = subs_added(instance, request);
    instance
        .inner()
        .try_borrow_mut()
        .map_err(|_| AccessError::Borrowed)?
        .assign(request.steps(), value.into())?;
    Ok(instance.clone())
}

impl<T: Fields> Inner<T> {
    /// The default read mechanism.
    pub(crate) fn resolve(&self, steps: &[Step]) -> Result<Value, AccessError> {
        let (head, rest) = split_member(steps)?;

        if head == DYNAMIC_STORE_FIELD {
            let Some((field, rest)) = rest.split_first() else {
                return Ok(self.store.to_value());
            };
            let name = expect_member(field)?;
            let slot = self
                .store
                .get(name)
                .ok_or_else(|| AccessError::NoSuchField { name: name.to_owned() })?;
            return path::read(&slot.value, rest);
        }

        let value = self
            .value
            .get_field(head)
            .ok_or_else(|| AccessError::NoSuchField { name: head.to_owned() })?;
        path::read(&value, rest)
    }

    /// The default write mechanism.
    ///
    /// Deep writes go into a copy of the field value which is committed
    /// only once the whole path succeeded.
    pub(crate) fn assign(&mut self, steps: &[Step], value: Value) -> Result<(), AccessError> {
        let (head, rest) = split_member(steps)?;

        if head == DYNAMIC_STORE_FIELD {
            let Some((field, rest)) = rest.split_first() else {
                return Err(AccessError::ReadOnly {
                    name: DYNAMIC_STORE_FIELD.to_owned(),
                });
            };
            let name = expect_member(field)?;
            let slot = self
                .store
                .get_mut(name)
                .ok_or_else(|| AccessError::NoSuchField { name: name.to_owned() })?;
            if slot.is_read_only() {
                return Err(AccessError::ReadOnly { name: name.to_owned() });
            }
            let mut updated = slot.value.clone();
            path::write(&mut updated, rest, value)?;
            slot.value = updated;
            return Ok(());
        }

        if rest.is_empty() {
            return self.value.set_field(head, value);
        }
        let mut updated = self
            .value
            .get_field(head)
            .ok_or_else(|| AccessError::NoSuchField { name: head.to_owned() })?;
        path::write(&mut updated, rest, value)?;
        self.value.set_field(head, updated)
    }
}

fn split_member(steps: &[Step]) -> Result<(&str, &[Step]), AccessError> {
    let (head, rest) = steps.split_first().ok_or(AccessError::EmptyRequest)?;
    Ok((expect_member(head)?, rest))
}

fn expect_member(step: &Step) -> Result<&str, AccessError> {
    step.member().ok_or(AccessError::NotIndexable {
        step: step.kind(),
        found: "object",
    })
}

//! # Property Registrar
//!
//! Adds and removes dynamic fields on one or more instances.
//!
//! All checks run before any store is touched, so a rejected call leaves
//! every target unchanged. Listener failures are logged and dropped; they
//! never fail a registration.

use crate::instance::Dynamic;
use dynprops_core::{FieldName, Fields, IntoFieldName, RegistrationError, ValidationError, Value};
use dynprops_std::{DynamicField, FieldFlags};
use std::slice;

/// One instance or an ordered collection of instances of the same type.
pub trait Targets {
    /// The statically declared type behind each instance.
    type Item: Fields;

    /// The instances, in order.
    fn as_targets(&self) -> &[Dynamic<Self::Item>];
}

impl<T: Fields> Targets for Dynamic<T> {
    type Item = T;

    fn as_targets(&self) -> &[Dynamic<T>] {
        slice::from_ref(self)
    }
}

impl<T: Fields> Targets for [Dynamic<T>] {
    type Item = T;

    fn as_targets(&self) -> &[Dynamic<T>] {
        self
    }
}

impl<T: Fields, const N: usize> Targets for [Dynamic<T>; N] {
    type Item = T;

    fn as_targets(&self) -> &[Dynamic<T>] {
        self
    }
}

impl<T: Fields> Targets for Vec<Dynamic<T>> {
    type Item = T;

    fn as_targets(&self) -> &[Dynamic<T>] {
        self
    }
}

/// How a new dynamic field starts out.
///
/// Options only apply when the field is created; re-adding an existing
/// name keeps its value and flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
    initial: Value,
    flags: FieldFlags,
}

impl FieldOptions {
    /// Empty initial value, visible and writable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the field with `value` instead of [`Value::Empty`].
    pub fn initial(mut self, value: impl Into<Value>) -> Self {
        self.initial = value.into();
        self
    }

    /// Leave the field out of [`Dynamic::field_names`].
    pub fn hidden(mut self) -> Self {
        self.flags |= FieldFlags::HIDDEN;
        self
    }

    /// Reject writes through the interceptor.
    pub fn read_only(mut self) -> Self {
        self.flags |= FieldFlags::READ_ONLY;
        self
    }
}

/// Add the dynamic field `name` to every instance in `targets`.
///
/// The new field starts as [`Value::Empty`]. Adding a name an instance
/// already has keeps the current value, but listeners are notified again.
///
/// # Errors
///
/// - a [`ValidationError`] naming the first failed name check
/// - [`ValidationError::NoTargets`] for an empty collection
/// - [`ValidationError::ShadowsStaticField`] if the type declares `name`
///
/// # Panics
///
/// If a target is borrowed through [`Dynamic::with`],
/// [`Dynamic::with_mut`] or [`Dynamic::store`] at the time of the call.
///
/// # Example
///
/// ```rust,ignore
/// let sensors = vec![Dynamic::new(Sensor::default()), Dynamic::new(Sensor::default())];
/// addprop(&sensors, "calibrated")?;
/// sensors[0].set("calibrated", true)?;
/// assert_eq!(sensors[1].get("calibrated")?, Value::Empty);
/// ```
pub fn addprop<S>(targets: &S, name: impl IntoFieldName) -> Result<FieldName, ValidationError>
where
    S: Targets + ?Sized,
{
    addprop_with(targets, name, FieldOptions::default())
}

/// [`addprop`] with a non-default initial value or flags.
pub fn addprop_with<S>(
    targets: &S,
    name: impl IntoFieldName,
    options: FieldOptions,
) -> Result<FieldName, ValidationError>
where
    S: Targets + ?Sized,
{
    let name = name.into_field_name()?;
    let targets = targets.as_targets();
    if targets.is_empty() {
        return Err(ValidationError::NoTargets);
    }
    if S::Item::has_field(&name) {
        return Err(ValidationError::ShadowsStaticField(name.into()));
    }

    for target in targets {
        let field = DynamicField::new(options.initial.clone(), options.flags);
        let created = target.insert_field(&name, field);
        #[cfg(feature = "tracing")]
        tracing::debug!(instance = %target.id(), %name, created, "dynamic field added");
        #[cfg(not(feature = "tracing"))]
        let _ = created;
        target.notify_added(&name);
    }
    Ok(name)
}

/// Remove the dynamic field `name` from every instance in `targets`.
///
/// # Errors
///
/// Fails without removing anything if the name is invalid, `targets` is
/// empty, or any instance lacks a dynamic field called `name`.
///
/// # Panics
///
/// Under the same conditions as [`addprop`].
pub fn rmprop<S>(targets: &S, name: impl IntoFieldName) -> Result<FieldName, RegistrationError>
where
    S: Targets + ?Sized,
{
    let name = name.into_field_name()?;
    let targets = targets.as_targets();
    if targets.is_empty() {
        return Err(ValidationError::NoTargets.into());
    }
    if let Some(missing) = targets.iter().find(|target| !target.is_dynamic(&name)) {
        return Err(RegistrationError::NotDynamic {
            name: name.into(),
            instance: missing.id(),
        });
    }

    for target in targets {
        // An aliased target may already have lost the field earlier in this loop.
        if target.remove_field(&name).is_none() {
            continue;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(instance = %target.id(), %name, "dynamic field removed");
        target.notify_removed(&name);
    }
    Ok(name)
}

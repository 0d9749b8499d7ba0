//! The static declaration of a type.

use crate::{error::AccessError, value::Value};

/// The statically declared shape of a type.
///
/// This is the default access mechanism that dynamic fields sit on top of:
/// a fixed set of names with getters and setters that convert through
/// [`Value`]. Usually produced by `#[derive(Fields)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Fields)]
/// struct Sensor {
///     label: String,
///     reading: f64,
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no static field declaration",
    label = "missing `Fields` implementation",
    note = "Derive it with `#[derive(dynprops::Fields)]` or implement `Fields` by hand."
)]
pub trait Fields: 'static {
    /// Statically declared field names, in declaration order.
    const FIELD_NAMES: &'static [&'static str];

    /// Returns `true` if `name` is statically declared.
    fn has_field(name: &str) -> bool {
        Self::FIELD_NAMES.contains(&name)
    }

    /// Read a static field. `None` if `name` is not declared.
    fn get_field(&self, name: &str) -> Option<Value>;

    /// Write a static field.
    ///
    /// Fails with [`AccessError::NoSuchField`] for undeclared names and
    /// [`AccessError::TypeMismatch`] if `value` does not convert.
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), AccessError>;
}

/// A type with no static fields.
impl Fields for () {
    const FIELD_NAMES: &'static [&'static str] = &[];

    fn get_field(&self, _name: &str) -> Option<Value> {
        None
    }

    fn set_field(&mut self, name: &str, _value: Value) -> Result<(), AccessError> {
        Err(AccessError::NoSuchField {
            name: name.to_owned(),
        })
    }
}

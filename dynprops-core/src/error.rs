//! Error types for dynprops.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`DynpropsError`] - Top-level error type for all dynprops operations
//! - [`ValidationError`] - Rejected field names or empty target sets
//! - [`AccessError`] - Failures of the default member/index access mechanism
//! - [`RegistrationError`] - Errors from adding or removing dynamic fields
//! - [`HookError`] - Listener failures (collected, never surfaced by the registrar)

use crate::{event::InstanceId, subscript::StepKind};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all dynprops operations.
#[derive(Error, Debug)]
pub enum DynpropsError {
    /// A field name or target set was rejected.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A read or write request could not be resolved.
    #[error("access error: {0}")]
    Access(#[from] AccessError),

    /// Adding or removing a dynamic field failed.
    #[error("registration error: {0}")]
    Registration(#[from] RegistrationError),
}

/// Reasons a candidate field name or target set is rejected.
///
/// Validation always runs before any store is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name argument was not a string.
    #[error("field name must be a string, got {found}")]
    NotAString {
        /// Kind of the value that was supplied instead.
        found: &'static str,
    },

    /// The name was empty after trimming.
    #[error("field name must not be empty")]
    Empty,

    /// The name is not a syntactically valid identifier.
    #[error("`{0}` is not a valid identifier")]
    InvalidIdentifier(String),

    /// The name exceeds the maximum identifier length.
    #[error("`{name}` is longer than {max} characters")]
    TooLong {
        /// The rejected name.
        name: String,
        /// The maximum allowed length.
        max: usize,
    },

    /// The name is a reserved word.
    #[error("`{0}` is a reserved word")]
    Reserved(String),

    /// No instance was supplied.
    #[error("no target instance supplied")]
    NoTargets,

    /// The name is already a statically declared field of the target type.
    #[error("`{0}` is a statically declared field")]
    ShadowsStaticField(String),
}

/// Errors raised by the default access mechanism.
///
/// The interceptor itself adds no error kinds; these propagate unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The name is neither a static nor a dynamic field.
    #[error("no field named `{name}`")]
    NoSuchField {
        /// The unresolved name.
        name: String,
    },

    /// An index step addressed an element past the end of a collection.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the indexed collection.
        len: usize,
    },

    /// A step was applied to a value that does not support it.
    #[error("cannot apply {step} step to {found}")]
    NotIndexable {
        /// Kind of the step that failed.
        step: StepKind,
        /// Kind of the value it was applied to.
        found: &'static str,
    },

    /// A value could not be converted into the type of a static field.
    #[error("field `{field}` expects {expected}, got {found}")]
    TypeMismatch {
        /// The static field being assigned.
        field: String,
        /// The expected Rust type.
        expected: &'static str,
        /// Kind of the supplied value.
        found: &'static str,
    },

    /// The field rejects writes.
    #[error("field `{name}` is read-only")]
    ReadOnly {
        /// The read-only field.
        name: String,
    },

    /// An assignment addressed more or fewer than one element.
    #[error("assignment requires exactly one index, got {count}")]
    IndexArity {
        /// Number of indices supplied.
        count: usize,
    },

    /// The request contained no steps.
    #[error("empty access request")]
    EmptyRequest,

    /// The instance is borrowed by an enclosing `with`/`with_mut` or a
    /// held store reference.
    #[error("instance is already borrowed")]
    Borrowed,
}

/// Errors from adding or removing dynamic fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// Name or targets failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The name is not a dynamic field of the instance.
    #[error("`{name}` is not a dynamic field of instance {instance}")]
    NotDynamic {
        /// The missing name.
        name: String,
        /// The instance that lacks it.
        instance: InstanceId,
    },
}

/// Errors that can occur in listeners.
#[derive(Error, Debug)]
pub enum HookError {
    /// The listener panicked during execution.
    #[error("listener panicked: {0}")]
    Panic(String),

    /// The listener returned an error.
    #[error(transparent)]
    Custom(BoxError),
}

impl From<BoxError> for HookError {
    fn from(err: BoxError) -> Self {
        HookError::Custom(err)
    }
}

//! # dynprops-core
//!
//! Core types and traits for runtime-extensible objects.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that only needs to describe values, names and requests without the
//! full `dynprops` instance machinery.
//!
//! # Building Blocks
//!
//! ## Values ([`Value`])
//!
//! Dynamic fields are value-erased: each slot holds a [`Value`]. Static
//! fields convert through it at the access boundary.
//!
//! ## Static shape ([`Fields`])
//!
//! The fixed declaration of a type: names plus getters and setters. This is
//! the default access mechanism that dynamic fields extend.
//!
//! ## Requests ([`Subscript`])
//!
//! An access such as `obj.data(2){0}` is a sequence of [`Step`]s. Requests
//! are rewritten by the interceptor before the default mechanism sees them.
//!
//! ## Names ([`FieldName`])
//!
//! Validated identifiers. Every dynamic field name passed validation.
//!
//! ## Notifications ([`Hook`])
//!
//! Synchronous listeners for [`PropertyAdded`] and [`PropertyRemoved`].
//!
//! # Error Types
//!
//! - [`DynpropsError`] - Top-level error type
//! - [`ValidationError`] - Rejected names and empty target sets
//! - [`AccessError`] - Read/write failures
//! - [`RegistrationError`] - Add/remove failures
//! - [`HookError`] - Listener failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod event;
mod fields;
mod hook;
mod name;
mod subscript;
mod value;

// Re-exports
pub use error::{
    AccessError, BoxError, DynpropsError, HookError, RegistrationError, ValidationError,
};
pub use event::{InstanceId, Message, PropertyAdded, PropertyRemoved};
pub use fields::Fields;
pub use hook::Hook;
pub use name::{FieldName, IntoFieldName, MAX_NAME_LENGTH, is_identifier, is_reserved};
pub use subscript::{Step, StepKind, Subscript};
pub use value::Value;

pub use indexmap::IndexMap;

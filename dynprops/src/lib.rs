//! # dynprops - Runtime fields for static types
//!
//! `dynprops` lets an instance of a statically declared type acquire new
//! named fields after construction, without touching the type's
//! declaration. Reads and writes of `obj.name` go through an interceptor
//! that sends undeclared names to a per-instance dynamic store.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dynprops::prelude::*;
//!
//! #[derive(Default, Fields)]
//! struct Sensor {
//!     label: String,
//!     reading: f64,
//! }
//!
//! let obj = Dynamic::new(Sensor::default());
//! addprop(&obj, "field1")?;
//! obj.set("field1", 42)?;
//! assert_eq!(obj.get("field1")?, Value::Int(42));
//!
//! // Static fields are reached through the same interface.
//! obj.set("reading", 1.5)?;
//! ```
//!
//! ## Notifications
//!
//! Every registration emits a [`PropertyAdded`] event to the listeners of
//! that instance. Listeners are plain [`Hook`]s, or functions annotated
//! with `#[listener]`:
//!
//! ```rust,ignore
//! #[dynprops::listener]
//! fn log_added(event: &PropertyAdded) -> Result<(), BoxError> {
//!     println!("{} gained {}", event.instance, event.name);
//!     Ok(())
//! }
//!
//! obj.subscribe_added(log_added);
//! ```
//!
//! ## Features
//!
//! - `macros` (default): `#[derive(Fields)]` and `#[listener]`
//! - `tracing` (default): diagnostics through the `tracing` crate

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

extern crate self as dynprops;

mod access;
mod instance;
mod registrar;

pub use access::{DYNAMIC_STORE_FIELD, subs_added, subsasgn, subsref};
pub use instance::Dynamic;
pub use registrar::{FieldOptions, Targets, addprop, addprop_with, rmprop};

pub use dynprops_core::{
    // Errors
    AccessError,
    BoxError,
    DynpropsError,
    // Values and names
    FieldName,
    Fields,
    HookError,
    IndexMap,
    // Events
    InstanceId,
    IntoFieldName,
    MAX_NAME_LENGTH,
    // Hooks
    Hook,
    Message,
    PropertyAdded,
    PropertyRemoved,
    RegistrationError,
    // Requests
    Step,
    StepKind,
    Subscript,
    ValidationError,
    Value,
    is_identifier,
    is_reserved,
};

pub use dynprops_std::{Delivery, DynamicField, DynamicStore, FieldFlags, ListenerId, Registry};

#[cfg(feature = "macros")]
pub use dynprops_macros::{Fields, listener};

/// Default member/index access over values.
pub mod path {
    pub use dynprops_std::path::{read, write};
}

/// Standard hook implementations.
pub mod hooks {
    pub use dynprops_std::hooks::{FilterHook, LoggingHook};
}

/// Testing utilities.
pub mod testing {
    pub use dynprops_std::testing::{CountingHook, FailingHook, RecordingHook};
}

/// Prelude module - common imports for dynprops.
///
/// # Usage
///
/// ```rust,ignore
/// use dynprops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AccessError, BoxError, Dynamic, FieldOptions, Fields, Hook, PropertyAdded,
        PropertyRemoved, Subscript, ValidationError, Value, addprop, addprop_with, rmprop,
        subsasgn, subsref,
    };
}

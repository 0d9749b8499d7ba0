//! # dynprops-std
//!
//! Standard implementations for runtime-extensible objects.
//!
//! This crate provides:
//! - **Storage**: [`DynamicStore`], the per-instance ordered field map
//! - **Notification**: [`Registry`], best-effort sequential listener delivery
//! - **Access**: [`path`], the default member/index mechanism over values
//! - **Standard hooks**: Logging, Filter
//! - **Testing utilities**: recording and counting hooks

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use dynprops_core;

// Modules
pub mod hooks;
pub mod path;
pub mod registry;
pub mod store;
pub mod testing;

pub use registry::{Delivery, ListenerId, Registry};
pub use store::{DynamicField, DynamicStore, FieldFlags};

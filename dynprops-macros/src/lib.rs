//! Procedural macros for dynprops.
//!
//! - `#[derive(Fields)]` - static field declaration for a struct
//! - `#[listener]` - a notification `Hook` from a plain function

use proc_macro::TokenStream;

mod fields;
mod listener;

/// Derive the static field declaration (`dynprops::Fields`) of a struct.
///
/// Every named field becomes a static field. Field types must be `Clone`,
/// convertible into `dynprops::Value`, and `TryFrom<dynprops::Value>`.
///
/// Field attributes:
/// - `#[fields(skip)]` - not part of the declaration
/// - `#[fields(rename = "name")]` - declared under another name
#[proc_macro_derive(Fields, attributes(fields))]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    fields::derive_fields_impl(input)
}

/// Turn a function into a notification hook.
///
/// ```rust,ignore
/// #[dynprops::listener(filter = |e: &PropertyAdded| e.name == "speed")]
/// fn on_speed(event: &PropertyAdded) -> Result<(), BoxError> {
///     println!("speed added to {}", event.instance);
///     Ok(())
/// }
///
/// obj.subscribe_added(on_speed);
/// ```
#[proc_macro_attribute]
pub fn listener(attr: TokenStream, item: TokenStream) -> TokenStream {
    listener::listener_impl(attr, item)
}

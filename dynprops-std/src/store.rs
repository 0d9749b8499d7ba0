//! Per-instance dynamic field storage.

use bitflags::bitflags;
use dynprops_core::{FieldName, Value};
use indexmap::IndexMap;

bitflags! {
    /// Attributes of a dynamic field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FieldFlags: u8 {
        /// Excluded from field enumeration. Still readable and writable.
        const HIDDEN = 1 << 0;
        /// Writes through the interceptor are rejected.
        const READ_ONLY = 1 << 1;
    }
}

/// One dynamic slot: a value plus its attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicField {
    /// Current value.
    pub value: Value,
    /// Attributes fixed at registration.
    pub flags: FieldFlags,
}

impl DynamicField {
    /// A slot holding `value` with the given flags.
    pub fn new(value: Value, flags: FieldFlags) -> Self {
        Self { value, flags }
    }

    /// Returns `true` if the field is excluded from enumeration.
    pub fn is_hidden(&self) -> bool {
        self.flags.contains(FieldFlags::HIDDEN)
    }

    /// Returns `true` if the field rejects writes.
    pub fn is_read_only(&self) -> bool {
        self.flags.contains(FieldFlags::READ_ONLY)
    }
}

/// Ordered mapping from field name to dynamic slot.
///
/// Iteration follows registration order. Removal keeps the order of the
/// remaining fields.
#[derive(Debug, Clone, Default)]
pub struct DynamicStore {
    fields: IndexMap<String, DynamicField>,
}

impl DynamicStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no dynamic fields exist.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of dynamic fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if `name` is a dynamic field.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Borrow a slot.
    pub fn get(&self, name: &str) -> Option<&DynamicField> {
        self.fields.get(name)
    }

    /// Mutably borrow a slot.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut DynamicField> {
        self.fields.get_mut(name)
    }

    /// Insert `name` with `field` unless it already exists.
    ///
    /// Returns `true` if the name was new. An existing slot is left
    /// untouched, value and flags alike.
    pub fn insert(&mut self, name: &FieldName, field: DynamicField) -> bool {
        if self.fields.contains_key(name.as_str()) {
            return false;
        }
        self.fields.insert(name.as_str().to_owned(), field);
        true
    }

    /// Remove `name`, returning its slot.
    pub fn remove(&mut self, name: &str) -> Option<DynamicField> {
        self.fields.shift_remove(name)
    }

    /// All names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Names of fields not flagged [`FieldFlags::HIDDEN`].
    pub fn visible_names(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, field)| !field.is_hidden())
            .map(|(name, _)| name.as_str())
    }

    /// Iterate over `(name, slot)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DynamicField)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Snapshot the store as a [`Value::Struct`].
    pub fn to_value(&self) -> Value {
        Value::Struct(
            self.fields
                .iter()
                .map(|(name, field)| (name.clone(), field.value.clone()))
                .collect(),
        )
    }
}

//! The value-erased payload held by fields.

use crate::error::AccessError;
use indexmap::IndexMap;
use std::fmt;

/// A tagged value stored in a field.
///
/// Dynamic fields carry no declared type; every slot holds one of these.
/// Static fields convert to and from `Value` at the access boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// The empty value. Freshly registered dynamic fields hold this.
    #[default]
    Empty,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered list, addressed by `Index` steps.
    List(Vec<Value>),
    /// A heterogeneous cell array, addressed by `CellIndex` steps.
    Cell(Vec<Value>),
    /// A nested record, addressed by `Member` steps.
    Struct(IndexMap<String, Value>),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Empty => "empty",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Cell(_) => "cell",
            Value::Struct(_) => "struct",
        }
    }

    /// Returns `true` for [`Value::Empty`].
    pub const fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Builds a [`Value::Cell`] from anything convertible to values.
    pub fn cell<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Cell(items.into_iter().map(Into::into).collect())
    }

    /// Builds a [`Value::Struct`] from `(name, value)` pairs.
    pub fn record<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Struct(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Borrow the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer payload, if any.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => f.write_str("[]"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::List(items) => write_seq(f, items, '[', ']'),
            Value::Cell(items) => write_seq(f, items, '{', '}'),
            Value::Struct(fields) => {
                f.write_str("struct(")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str(")")
            }
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "{close}")
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Empty
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Int(i64::from(n))
            }
        }
    )*};
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

// Values past `i64::MAX` fall back to a float.
macro_rules! from_wide_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self {
                i64::try_from(n).map_or(Value::Float(n as f64), Value::Int)
            }
        }
    )*};
}

from_wide_int!(isize, u64, usize);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Value::Struct(fields)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}

/// Conversion failure from [`Value`] into a concrete Rust type.
///
/// The static-field setters generated by `#[derive(Fields)]` map this into
/// [`AccessError::TypeMismatch`] with the field name attached.
fn mismatch(expected: &'static str, found: &Value) -> AccessError {
    AccessError::TypeMismatch {
        field: String::new(),
        expected,
        found: found.kind(),
    }
}

impl TryFrom<Value> for bool {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch("bool", &other)),
        }
    }
}

// Integral floats are accepted; anything outside the target range is a mismatch.
macro_rules! try_into_int {
    ($($t:ty),*) => {$(
        impl TryFrom<Value> for $t {
            type Error = AccessError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                let converted = match value {
                    Value::Int(n) => <$t>::try_from(n).ok(),
                    Value::Float(x)
                        if x.fract() == 0.0 && x >= <$t>::MIN as f64 && x <= <$t>::MAX as f64 =>
                    {
                        Some(x as $t)
                    }
                    _ => None,
                };
                converted.ok_or_else(|| mismatch(stringify!($t), &value))
            }
        }
    )*};
}

try_into_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TryFrom<Value> for f32 {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(x) if !x.is_finite() || (x as f32).is_finite() => Ok(x as f32),
            Value::Int(n) => Ok(n as f32),
            other => Err(mismatch("f32", &other)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(x) => Ok(x),
            // integers widen
            Value::Int(n) => Ok(n as f64),
            other => Err(mismatch("f64", &other)),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(mismatch("string", &other)),
        }
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) | Value::Cell(items) => Ok(items),
            Value::Empty => Ok(Vec::new()),
            other => Err(mismatch("list", &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(Value::default().is_empty());
        assert_eq!(Value::from(()), Value::Empty);
    }

    #[test]
    fn record_preserves_order() {
        let v = Value::record([("b", 1), ("a", 2)]);
        let Value::Struct(fields) = v else {
            panic!("expected struct");
        };
        let names: Vec<_> = fields.keys().cloned().collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn conversions_report_kind() {
        let err = i64::try_from(Value::from("x")).unwrap_err();
        assert_eq!(
            err,
            AccessError::TypeMismatch {
                field: String::new(),
                expected: "i64",
                found: "string",
            }
        );
        assert_eq!(f64::try_from(Value::Int(3)).unwrap(), 3.0);
    }

    #[test]
    fn narrow_integers() {
        assert_eq!(Value::from(7u8), Value::Int(7));
        assert_eq!(u32::try_from(Value::Int(7)).unwrap(), 7);
        assert_eq!(i16::try_from(Value::Float(-2.0)).unwrap(), -2);
        assert_eq!(
            u8::try_from(Value::Int(300)).unwrap_err(),
            AccessError::TypeMismatch {
                field: String::new(),
                expected: "u8",
                found: "int",
            }
        );
        assert!(u32::try_from(Value::Int(-1)).is_err());
        assert!(usize::try_from(Value::Float(1.5)).is_err());
    }

    #[test]
    fn wide_integers_and_f32() {
        assert_eq!(Value::from(5usize), Value::Int(5));
        assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));
        assert_eq!(Value::from(0.5f32), Value::Float(0.5));
        assert_eq!(f32::try_from(Value::Int(2)).unwrap(), 2.0);
        assert_eq!(f32::try_from(Value::Float(0.25)).unwrap(), 0.25);
        assert!(f32::try_from(Value::Float(1e300)).is_err());
    }

    #[test]
    fn display() {
        let v = Value::record([
            ("xs", Value::from_iter([Value::Int(1), Value::Int(2)])),
            ("c", Value::cell(["a"])),
        ]);
        assert_eq!(v.to_string(), r#"struct(xs: [1, 2], c: {"a"})"#);
    }
}

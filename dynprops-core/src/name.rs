//! Validated field names.

use crate::{error::ValidationError, value::Value};
use std::{borrow::Borrow, fmt, ops::Deref};

/// Maximum length of a field name.
pub const MAX_NAME_LENGTH: usize = 63;

/// Words that can never name a field: the interpreter's keywords.
static RESERVED: phf::Set<&'static str> = phf::phf_set! {
    "__FILE__", "__LINE__", "arguments", "break", "case", "catch", "classdef",
    "continue", "do", "else", "elseif", "end", "end_try_catch",
    "end_unwind_protect", "endarguments", "endclassdef", "endenumeration",
    "endevents", "endfor", "endfunction", "endif", "endmethods", "endparfor",
    "endproperties", "endspmd", "endswitch", "endwhile", "enumeration",
    "events", "for", "function", "global", "if", "methods", "otherwise",
    "parfor", "persistent", "properties", "return", "spmd", "switch", "try",
    "until", "unwind_protect", "unwind_protect_cleanup", "while",
};

/// Returns `true` if `word` is reserved.
pub fn is_reserved(word: &str) -> bool {
    RESERVED.contains(word)
}

/// Returns `true` if `name` is made of ASCII letters, digits and
/// underscores and does not start with a digit.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A field name that passed validation.
///
/// Construct with [`FieldName::parse`] or through [`IntoFieldName`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldName(String);

impl FieldName {
    /// Trim `raw` and validate it as a field name.
    ///
    /// Checks run in order: non-empty, identifier syntax, length, reserved word.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::Empty);
        }
        if !is_identifier(name) {
            return Err(ValidationError::InvalidIdentifier(name.to_owned()));
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(ValidationError::TooLong {
                name: name.to_owned(),
                max: MAX_NAME_LENGTH,
            });
        }
        if is_reserved(name) {
            return Err(ValidationError::Reserved(name.to_owned()));
        }
        Ok(Self(name.to_owned()))
    }

    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for FieldName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for FieldName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<FieldName> for String {
    fn from(name: FieldName) -> Self {
        name.0
    }
}

/// Anything that can be turned into a validated [`FieldName`].
///
/// Strings are validated directly; a [`Value`] must hold a string first,
/// otherwise [`ValidationError::NotAString`] is returned.
pub trait IntoFieldName {
    /// Validate and convert.
    fn into_field_name(self) -> Result<FieldName, ValidationError>;
}

impl IntoFieldName for FieldName {
    fn into_field_name(self) -> Result<FieldName, ValidationError> {
        Ok(self)
    }
}

impl IntoFieldName for &FieldName {
    fn into_field_name(self) -> Result<FieldName, ValidationError> {
        Ok(self.clone())
    }
}

impl IntoFieldName for &str {
    fn into_field_name(self) -> Result<FieldName, ValidationError> {
        FieldName::parse(self)
    }
}

impl IntoFieldName for String {
    fn into_field_name(self) -> Result<FieldName, ValidationError> {
        FieldName::parse(&self)
    }
}

impl IntoFieldName for &String {
    fn into_field_name(self) -> Result<FieldName, ValidationError> {
        FieldName::parse(self)
    }
}

impl IntoFieldName for &Value {
    fn into_field_name(self) -> Result<FieldName, ValidationError> {
        match self {
            Value::Str(s) => FieldName::parse(s),
            other => Err(ValidationError::NotAString {
                found: other.kind(),
            }),
        }
    }
}

impl IntoFieldName for Value {
    fn into_field_name(self) -> Result<FieldName, ValidationError> {
        (&self).into_field_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_identifiers() {
        for name in ["x", "field1", "_private", "camelCase", "A_B_9"] {
            assert_eq!(FieldName::parse(name).unwrap(), name);
        }
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(FieldName::parse("  speed \n").unwrap(), "speed");
    }

    #[test]
    fn rejects_in_order() {
        assert_eq!(FieldName::parse(""), Err(ValidationError::Empty));
        assert_eq!(FieldName::parse("   "), Err(ValidationError::Empty));
        assert_eq!(
            FieldName::parse("2bad"),
            Err(ValidationError::InvalidIdentifier("2bad".into()))
        );
        assert_eq!(
            FieldName::parse("has space"),
            Err(ValidationError::InvalidIdentifier("has space".into()))
        );
        assert_eq!(
            FieldName::parse("for"),
            Err(ValidationError::Reserved("for".into()))
        );
    }

    #[test]
    fn block_terminators_are_reserved() {
        for word in [
            "endfunction",
            "endif",
            "do",
            "until",
            "unwind_protect",
            "end_try_catch",
            "__FILE__",
        ] {
            assert_eq!(
                FieldName::parse(word),
                Err(ValidationError::Reserved(word.into()))
            );
        }
        assert!(!is_reserved("ending"));
        assert!(!is_reserved("End"));
    }

    #[test]
    fn length_limit() {
        let ok = "a".repeat(MAX_NAME_LENGTH);
        assert!(FieldName::parse(&ok).is_ok());
        let long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(matches!(
            FieldName::parse(&long),
            Err(ValidationError::TooLong { max: MAX_NAME_LENGTH, .. })
        ));
    }

    #[test]
    fn value_names_must_be_strings() {
        assert_eq!(
            Value::Int(123).into_field_name(),
            Err(ValidationError::NotAString { found: "int" })
        );
        assert_eq!(Value::from("ok").into_field_name().unwrap(), "ok");
    }

    #[test]
    fn non_ascii_is_not_an_identifier() {
        assert!(!is_identifier("café"));
        assert!(!is_identifier("a-b"));
    }
}

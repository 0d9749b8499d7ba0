#![allow(dead_code)]

use dynprops::{AccessError, Dynamic, Fields, Value};

// ============================================================================
// Test Types
// ============================================================================

/// A hand-written `Fields` implementation, independent of the derive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sensor {
    pub label: String,
    pub reading: f64,
}

impl Sensor {
    pub fn new(label: &str, reading: f64) -> Self {
        Self {
            label: label.to_owned(),
            reading,
        }
    }
}

impl Fields for Sensor {
    const FIELD_NAMES: &'static [&'static str] = &["label", "reading"];

    fn get_field(&self, name: &str) -> Option<Value> {
        match name {
            "label" => Some(Value::from(self.label.as_str())),
            "reading" => Some(Value::Float(self.reading)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<(), AccessError> {
        let found = value.kind();
        let mismatch = |expected: &'static str| AccessError::TypeMismatch {
            field: name.to_owned(),
            expected,
            found,
        };
        match name {
            "label" => self.label = String::try_from(value).map_err(|_| mismatch("String"))?,
            "reading" => self.reading = f64::try_from(value).map_err(|_| mismatch("f64"))?,
            _ => {
                return Err(AccessError::NoSuchField {
                    name: name.to_owned(),
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub fn sensor() -> Dynamic<Sensor> {
    Dynamic::new(Sensor::new("gauge", 0.5))
}

pub fn sensors(n: usize) -> Vec<Dynamic<Sensor>> {
    (0..n)
        .map(|i| Dynamic::new(Sensor::new(&format!("s{i}"), i as f64)))
        .collect()
}

//! Field value types and side effects.

use super::FieldKind;

/// Runtime representation of a field value, used by the by-name API.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(u32),
    Money(f64),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Integer(_) => FieldKind::Integer,
            FieldValue::Money(_) => FieldKind::Money,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<u32> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a monetary amount. Whole numbers are accepted as amounts.
    pub fn as_money(&self) -> Option<f64> {
        match self {
            FieldValue::Money(v) => Some(*v),
            FieldValue::Integer(v) => Some(f64::from(*v)),
            FieldValue::Text(_) => None,
        }
    }

    /// Convert to a value of `kind`, widening whole numbers to amounts.
    pub fn coerce(&self, kind: FieldKind) -> Option<FieldValue> {
        match kind {
            FieldKind::Text => self.as_text().map(|s| FieldValue::Text(s.to_string())),
            FieldKind::Integer => self.as_integer().map(FieldValue::Integer),
            FieldKind::Money => self.as_money().map(FieldValue::Money),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Money(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// What a successful write did besides storing the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetEffect {
    /// Nothing else changed.
    None,

    /// Cached derived fields were cleared and will be recomputed on next read.
    Invalidated(Vec<&'static str>),
}

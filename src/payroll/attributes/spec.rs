//! Field specifications and registry.
//!
//! This module defines the schema for record fields: what kind of value each
//! holds, whether it can change after construction, whether writes are
//! validated, and which fields are derived from which.

use std::fmt;

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text (e.g., `name`, `position`)
    Text,

    /// Whole number (e.g., `age`)
    Integer,

    /// Monetary amount (e.g., `salary`, `annual_salary`)
    Money,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "a whole number",
            FieldKind::Money => "an amount",
        };
        f.write_str(label)
    }
}

/// Read/write policy for a field.
///
/// Policies are static per record type. The salary field takes its policy
/// from the record's access mode; the other fields have fixed policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    ReadWrite,
    ReadOnly,
    WriteOnly,
    /// Neither readable nor writable from outside the record.
    Sealed,
}

impl Access {
    pub fn can_read(self) -> bool {
        matches!(self, Access::ReadWrite | Access::ReadOnly)
    }

    pub fn can_write(self) -> bool {
        matches!(self, Access::ReadWrite | Access::WriteOnly)
    }

    /// Policy of a field derived from a source with this policy.
    ///
    /// Derived fields are never writable and are only readable when the
    /// source is.
    pub fn derived(self) -> Access {
        if self.can_read() {
            Access::ReadOnly
        } else {
            Access::Sealed
        }
    }
}

/// Specification for a single field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// The field name used in the by-name API (e.g., "salary")
    pub name: &'static str,

    /// The kind of value this field holds
    pub kind: FieldKind,

    /// Whether the field can be written after construction
    pub mutable: bool,

    /// Whether writes must pass the minimum wage check
    pub wage_checked: bool,

    /// Whether the field's access follows the record's access mode
    pub follows_mode: bool,

    /// Source field for derived fields; derived fields are cached
    pub derived_from: Option<&'static str>,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            mutable: false,
            wage_checked: false,
            follows_mode: false,
            derived_from: None,
        }
    }

    const fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }

    const fn wage_checked(mut self) -> Self {
        self.wage_checked = true;
        self
    }

    const fn follows_mode(mut self) -> Self {
        self.follows_mode = true;
        self
    }

    const fn derived_from(mut self, source: &'static str) -> Self {
        self.derived_from = Some(source);
        self
    }

    pub fn is_derived(&self) -> bool {
        self.derived_from.is_some()
    }

    /// Resolve this field's policy for a record whose mode is `mode`.
    pub fn access(&self, mode: Access) -> Access {
        if let Some(source) = self.derived_from {
            return get_spec(source)
                .map(|spec| spec.access(mode).derived())
                .unwrap_or(Access::Sealed);
        }
        if self.follows_mode {
            mode
        } else if self.mutable {
            Access::ReadWrite
        } else {
            Access::ReadOnly
        }
    }
}

/// Registry of all employee fields.
///
/// Adding a field means adding an entry here and a storage slot on the record.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", FieldKind::Text),
    FieldSpec::new("age", FieldKind::Integer),
    FieldSpec::new("position", FieldKind::Text),
    FieldSpec::new("salary", FieldKind::Money)
        .mutable()
        .wage_checked()
        .follows_mode(),
    FieldSpec::new("annual_salary", FieldKind::Money).derived_from("salary"),
];

/// Look up a field spec by name.
pub fn get_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

/// Fields whose cached values depend on `source`.
pub fn derived_from(source: &str) -> impl Iterator<Item = &'static str> + '_ {
    FIELDS
        .iter()
        .filter(move |spec| spec.derived_from == Some(source))
        .map(|spec| spec.name)
}

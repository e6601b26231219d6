//! # Field System
//!
//! Records expose their fields through one by-name interface instead of a
//! hand-written getter and setter per field. The field system provides:
//!
//! - **Value types**: What a field can hold ([`FieldValue`])
//! - **Specifications**: Static metadata about each field (kind, mutability,
//!   validation, derivation) in a single registry ([`FIELDS`])
//! - **Access policy**: Read/write restrictions ([`Access`]) resolved per
//!   record type, never per instance
//! - **Side effects**: What a successful write did besides storing the value
//!   ([`SetEffect`]), such as clearing a cached derived field
//!
//! ## Fields
//!
//! | Name | Kind | Notes |
//! |------|------|-------|
//! | `name` | `Text` | Fixed at construction |
//! | `age` | `Integer` | Fixed at construction |
//! | `position` | `Text` | Fixed at construction |
//! | `salary` | `Money` | Validated against the minimum wage, access follows the record mode |
//! | `annual_salary` | `Money` | Derived from `salary`, cached |
//!
//! ## Usage
//!
//! ```ignore
//! let value = employee.get("salary")?;
//! let effect = employee.set("salary", FieldValue::Money(1500.0))?;
//! let annual = employee.get_derived("annual_salary")?;
//! ```

mod spec;
mod value;

pub use spec::{derived_from, get_spec, Access, FieldKind, FieldSpec, FIELDS};
pub use value::{FieldValue, SetEffect};

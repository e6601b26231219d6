//! # Domain Model: Employee Records
//!
//! This module defines [`Employee`], a record whose salary is validated on
//! every write, whose annual salary is derived and cached, and whose salary
//! access is restricted per record type.
//!
//! ## Access Modes
//!
//! The access policy is a type parameter, so it is static per type and can
//! never differ between two instances of the same type:
//!
//! | Mode | `get("salary")` | `set("salary", ..)` | Typed accessors |
//! |------|-----------------|---------------------|-----------------|
//! | [`ReadWrite`] | ok | validated | `salary()`, `set_salary()` |
//! | [`ReadOnly`] | ok | `AccessDenied` | `salary()` |
//! | [`WriteOnly`] | `AccessDenied` | validated | `set_salary()` |
//!
//! The by-name API (`get`/`set`/`get_derived`) checks the policy at runtime.
//! The typed accessors are only implemented for modes that allow them, so a
//! forbidden typed call does not compile.
//!
//! ## Derived Cache
//!
//! `annual_salary` is `salary * 12`. It is computed on first read and cached
//! until the salary changes. Every salary write goes through one path which
//! validates against the [`WagePolicy`] and then clears the cache, so a stale
//! value is never observed.

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;

use once_cell::unsync::OnceCell;
use tracing::debug;

use crate::attributes::{derived_from, get_spec, Access, FieldSpec, FieldValue, SetEffect};
use crate::error::{PayrollError, Result};
use crate::policy::WagePolicy;
use crate::project::Project;

/// Static salary access policy of a record type.
pub trait AccessMode: Copy + Default + fmt::Debug + 'static {
    const SALARY: Access;
}

/// Modes whose salary can be read through typed accessors.
pub trait Readable: AccessMode {}

/// Modes whose salary can be written through typed accessors.
pub trait Writable: AccessMode {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadWrite;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOnly;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOnly;

impl AccessMode for ReadWrite {
    const SALARY: Access = Access::ReadWrite;
}

impl AccessMode for ReadOnly {
    const SALARY: Access = Access::ReadOnly;
}

impl AccessMode for WriteOnly {
    const SALARY: Access = Access::WriteOnly;
}

impl Readable for ReadWrite {}
impl Readable for ReadOnly {}
impl Writable for ReadWrite {}
impl Writable for WriteOnly {}

#[derive(Debug, Clone)]
pub struct Employee<A: AccessMode = ReadWrite> {
    name: String,
    age: u32,
    position: String,
    salary: f64,
    annual_salary: OnceCell<f64>,
    // Number of times a derived value was actually computed.
    computations: Cell<u32>,
    project: Option<Project>,
    policy: WagePolicy,
    mode: PhantomData<A>,
}

impl<A: AccessMode> Employee<A> {
    /// Build a record. The salary is checked against the policy's current
    /// minimum wage, in every access mode.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        salary: f64,
        policy: &WagePolicy,
    ) -> Result<Self> {
        let mut record = Self {
            name: name.into(),
            age,
            position: String::new(),
            salary: 0.0,
            annual_salary: OnceCell::new(),
            computations: Cell::new(0),
            project: None,
            policy: policy.clone(),
            mode: PhantomData,
        };
        record.write(lookup("salary")?, FieldValue::Money(salary))?;
        Ok(record)
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.project = Some(project);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn policy(&self) -> &WagePolicy {
        &self.policy
    }

    /// How many times a derived field has been computed rather than served
    /// from the cache.
    pub fn computations(&self) -> u32 {
        self.computations.get()
    }

    /// Whether the named derived field currently holds a cached value.
    pub fn is_cached(&self, field: &str) -> bool {
        match field {
            "annual_salary" => self.annual_salary.get().is_some(),
            _ => false,
        }
    }

    /// Get a field value by name.
    ///
    /// Derived fields are served through the cache, same as [`Self::get_derived`].
    pub fn get(&self, field: &str) -> Result<FieldValue> {
        let spec = self.readable_spec(field)?;
        if spec.is_derived() {
            return self.derived_value(spec);
        }
        match spec.name {
            "name" => Ok(FieldValue::Text(self.name.clone())),
            "age" => Ok(FieldValue::Integer(self.age)),
            "position" => Ok(FieldValue::Text(self.position.clone())),
            "salary" => Ok(FieldValue::Money(self.salary)),
            other => Err(PayrollError::UnknownField(other.to_string())),
        }
    }

    /// Set a field value by name.
    ///
    /// On success, returns the cached fields the write invalidated. On failure
    /// the record is unchanged.
    pub fn set(&mut self, field: &str, value: FieldValue) -> Result<SetEffect> {
        let spec = lookup(field)?;
        if !spec.access(A::SALARY).can_write() {
            return Err(PayrollError::AccessDenied(format!(
                "{} is read only",
                spec.name
            )));
        }
        self.write(spec, value)
    }

    /// Get a derived field, computing and caching it on first read.
    pub fn get_derived(&self, field: &str) -> Result<FieldValue> {
        let spec = self.readable_spec(field)?;
        if !spec.is_derived() {
            return Err(PayrollError::UnknownField(format!(
                "{} is not a derived field",
                spec.name
            )));
        }
        self.derived_value(spec)
    }

    fn readable_spec(&self, field: &str) -> Result<&'static FieldSpec> {
        let spec = lookup(field)?;
        if !spec.access(A::SALARY).can_read() {
            return Err(PayrollError::AccessDenied(format!(
                "{} is write only",
                spec.name
            )));
        }
        Ok(spec)
    }

    fn derived_value(&self, spec: &FieldSpec) -> Result<FieldValue> {
        match spec.name {
            "annual_salary" => Ok(FieldValue::Money(self.cached_annual_salary())),
            other => Err(PayrollError::UnknownField(other.to_string())),
        }
    }

    fn cached_annual_salary(&self) -> f64 {
        *self.annual_salary.get_or_init(|| {
            self.computations.set(self.computations.get() + 1);
            let annual = self.salary * 12.0;
            debug!(employee = %self.name, annual, "computed annual salary");
            annual
        })
    }

    fn store_salary(&mut self, salary: f64) -> Result<SetEffect> {
        self.write(lookup("salary")?, FieldValue::Money(salary))
    }

    /// The single write path: coerce to the field's kind, run the checks the
    /// field declares, store, then clear caches derived from it.
    fn write(&mut self, spec: &'static FieldSpec, value: FieldValue) -> Result<SetEffect> {
        let value = value.coerce(spec.kind).ok_or_else(|| {
            PayrollError::InvalidValue(format!(
                "{} must be {}, got {:?}",
                spec.name, spec.kind, value
            ))
        })?;
        let value = match value {
            FieldValue::Money(amount) if spec.wage_checked => {
                FieldValue::Money(self.policy.check(amount)?)
            }
            other => other,
        };
        match (spec.name, value) {
            ("salary", FieldValue::Money(amount)) => self.salary = amount,
            (name, _) => return Err(PayrollError::UnknownField(name.to_string())),
        }
        Ok(self.invalidate(spec.name))
    }

    fn invalidate(&mut self, source: &str) -> SetEffect {
        let mut cleared = Vec::new();
        for name in derived_from(source) {
            let was_cached = match name {
                "annual_salary" => self.annual_salary.take().is_some(),
                _ => false,
            };
            if was_cached {
                debug!(employee = %self.name, field = name, "invalidated cache");
                cleared.push(name);
            }
        }
        if cleared.is_empty() {
            SetEffect::None
        } else {
            SetEffect::Invalidated(cleared)
        }
    }

    /// Raw salary for internal formatting that applies its own policy.
    pub(crate) fn raw_salary(&self) -> f64 {
        self.salary
    }
}

impl<A: Readable> Employee<A> {
    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn annual_salary(&self) -> f64 {
        self.cached_annual_salary()
    }
}

impl<A: Writable> Employee<A> {
    pub fn set_salary(&mut self, salary: f64) -> Result<SetEffect> {
        self.store_salary(salary)
    }

    pub fn increase_salary(&mut self, percent: f64) -> Result<SetEffect> {
        self.increase_salary_with_bonus(percent, 0.0)
    }

    /// Raise by `percent` and then add `bonus`. The result goes through the
    /// same validation as any other salary write.
    pub fn increase_salary_with_bonus(&mut self, percent: f64, bonus: f64) -> Result<SetEffect> {
        let raised = self.salary + self.salary * (percent / 100.0) + bonus;
        self.store_salary(raised)
    }
}

fn lookup(field: &str) -> Result<&'static FieldSpec> {
    get_spec(field).ok_or_else(|| PayrollError::UnknownField(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abi<A: AccessMode>(salary: f64) -> Employee<A> {
        Employee::new("Abi", 39, salary, &WagePolicy::default())
            .unwrap()
            .with_position("Programmer")
    }

    #[test]
    fn valid_salary_is_stored_exactly() {
        let mut e: Employee = abi(1200.0);
        for salary in [1000.0, 1000.5, 2500.0, 50000.0] {
            e.set("salary", FieldValue::Money(salary)).unwrap();
            assert_eq!(e.get("salary").unwrap(), FieldValue::Money(salary));
        }
    }

    #[test]
    fn salary_below_minimum_is_rejected_and_unchanged() {
        let mut e: Employee = abi(1000.0);
        for salary in [999.0, 0.0, -5.0] {
            let err = e.set("salary", FieldValue::Money(salary)).unwrap_err();
            assert!(err.is_invalid_value());
            assert_eq!(e.salary(), 1000.0);
        }
    }

    #[test]
    fn construct_below_minimum_fails() {
        let err = Employee::<ReadWrite>::new("Bob", 23, 999.0, &WagePolicy::default())
            .unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn construct_read_only_still_validates() {
        let result = Employee::<ReadOnly>::new("Bob", 23, 500.0, &WagePolicy::default());
        assert!(result.unwrap_err().is_invalid_value());
    }

    #[test]
    fn annual_salary_tracks_salary() {
        let mut e: Employee = abi(1200.0);
        assert_eq!(e.get_derived("annual_salary").unwrap(), FieldValue::Money(14400.0));
        e.set("salary", FieldValue::Money(1000.0)).unwrap();
        assert_eq!(e.get_derived("annual_salary").unwrap(), FieldValue::Money(12000.0));
    }

    #[test]
    fn annual_salary_is_cached_between_reads() {
        let e: Employee = abi(1200.0);
        assert!(!e.is_cached("annual_salary"));
        let first = e.get_derived("annual_salary").unwrap();
        let second = e.get_derived("annual_salary").unwrap();
        assert_eq!(first, second);
        assert_eq!(e.computations(), 1);
        assert!(e.is_cached("annual_salary"));
    }

    #[test]
    fn get_by_name_uses_the_same_cache() {
        let e: Employee = abi(1200.0);
        e.get("annual_salary").unwrap();
        e.annual_salary();
        assert_eq!(e.computations(), 1);
    }

    #[test]
    fn salary_write_invalidates_cache() {
        let mut e: Employee = abi(1200.0);
        e.annual_salary();
        let effect = e.set_salary(1500.0).unwrap();
        assert_eq!(effect, SetEffect::Invalidated(vec!["annual_salary"]));
        assert!(!e.is_cached("annual_salary"));
        assert_eq!(e.annual_salary(), 18000.0);
        assert_eq!(e.computations(), 2);
    }

    #[test]
    fn write_without_cache_reports_no_effect() {
        let mut e: Employee = abi(1200.0);
        assert_eq!(e.set_salary(1300.0).unwrap(), SetEffect::None);
    }

    #[test]
    fn rejected_write_keeps_cache() {
        let mut e: Employee = abi(1200.0);
        e.annual_salary();
        assert!(e.set_salary(10.0).is_err());
        assert!(e.is_cached("annual_salary"));
        assert_eq!(e.annual_salary(), 14400.0);
    }

    #[test]
    fn read_only_rejects_every_write() {
        let mut e: Employee<ReadOnly> = abi(2000.0);
        for salary in [500.0, 2000.0, 30000.0] {
            let err = e.set("salary", FieldValue::Money(salary)).unwrap_err();
            assert!(err.is_access_denied());
        }
        assert_eq!(e.get("salary").unwrap(), FieldValue::Money(2000.0));
        assert_eq!(e.salary(), 2000.0);
    }

    #[test]
    fn read_only_allows_derived_read() {
        let e: Employee<ReadOnly> = abi(2000.0);
        assert_eq!(e.get_derived("annual_salary").unwrap(), FieldValue::Money(24000.0));
    }

    #[test]
    fn write_only_rejects_every_read() {
        let mut e: Employee<WriteOnly> = abi(2000.0);
        assert!(e.get("salary").unwrap_err().is_access_denied());
        assert!(e.get_derived("annual_salary").unwrap_err().is_access_denied());
        e.set("salary", FieldValue::Money(25000.0)).unwrap();
        assert!(e.get("salary").unwrap_err().is_access_denied());
    }

    #[test]
    fn write_only_still_validates() {
        let mut e: Employee<WriteOnly> = abi(2000.0);
        let err = e.set_salary(999.0).unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(e.raw_salary(), 2000.0);
    }

    #[test]
    fn write_only_can_increase() {
        let mut e: Employee<WriteOnly> = abi(2000.0);
        e.increase_salary(10.0).unwrap();
        assert_eq!(e.raw_salary(), 2200.0);
    }

    #[test]
    fn fixed_fields_are_readable_but_not_writable() {
        let mut e: Employee<WriteOnly> = abi(2000.0);
        assert_eq!(e.get("name").unwrap(), FieldValue::Text("Abi".into()));
        assert_eq!(e.get("age").unwrap(), FieldValue::Integer(39));
        assert_eq!(e.get("position").unwrap(), FieldValue::Text("Programmer".into()));
        assert!(e.set("name", "Bob".into()).unwrap_err().is_access_denied());
        assert!(e.set("age", 40u32.into()).unwrap_err().is_access_denied());
    }

    #[test]
    fn derived_field_cannot_be_written() {
        let mut e: Employee = abi(1200.0);
        let err = e.set("annual_salary", FieldValue::Money(1.0)).unwrap_err();
        assert!(err.is_access_denied());
    }

    #[test]
    fn unknown_field_is_reported() {
        let mut e: Employee = abi(1200.0);
        assert!(matches!(e.get("bonus"), Err(PayrollError::UnknownField(_))));
        assert!(matches!(
            e.set("bonus", FieldValue::Money(1.0)),
            Err(PayrollError::UnknownField(_))
        ));
        assert!(matches!(
            e.get_derived("salary"),
            Err(PayrollError::UnknownField(_))
        ));
    }

    #[test]
    fn salary_accepts_whole_numbers_but_not_text() {
        let mut e: Employee = abi(1200.0);
        e.set("salary", FieldValue::Integer(1500)).unwrap();
        assert_eq!(e.salary(), 1500.0);
        let err = e.set("salary", FieldValue::from("lots")).unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(e.salary(), 1500.0);
    }

    #[test]
    fn increase_by_twenty_percent() {
        let mut e: Employee = abi(1200.0);
        e.increase_salary(20.0).unwrap();
        assert_eq!(e.salary(), 1440.0);
    }

    #[test]
    fn increase_with_bonus_applies_bonus_after_percent() {
        let mut e: Employee = abi(1200.0);
        e.increase_salary_with_bonus(50.0, 50.0).unwrap();
        assert_eq!(e.salary(), 1850.0);
    }

    #[test]
    fn increase_below_minimum_is_rejected() {
        let mut e: Employee = abi(1000.0);
        let err = e.increase_salary(-10.0).unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(e.salary(), 1000.0);
    }

    #[test]
    fn increase_invalidates_cache() {
        let mut e: Employee = abi(1200.0);
        assert_eq!(e.annual_salary(), 14400.0);
        e.increase_salary(20.0).unwrap();
        assert_eq!(e.annual_salary(), 17280.0);
    }

    #[test]
    fn minimum_wage_change_applies_to_later_writes() {
        let policy = WagePolicy::default();
        let mut a = Employee::<ReadWrite>::new("Abi", 39, 1200.0, &policy).unwrap();
        let mut b = Employee::<ReadWrite>::new("Bob", 23, 1000.0, &policy).unwrap();

        policy.change_minimum_wage(400.0).unwrap();
        a.set_salary(500.0).unwrap();
        assert_eq!(a.salary(), 500.0);

        policy.change_minimum_wage(2000.0).unwrap();
        assert_eq!(b.salary(), 1000.0);
        assert!(b.set_salary(1500.0).unwrap_err().is_invalid_value());
    }

    #[test]
    fn write_checks_kind_declared_by_registry() {
        let mut e: Employee = abi(1200.0);
        let err = e.set("salary", FieldValue::from("lots")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value: salary must be an amount, got Text(\"lots\")"
        );
        assert!(get_spec("salary").unwrap().wage_checked);
        let err = e.set("salary", FieldValue::Integer(999)).unwrap_err();
        assert!(err.to_string().contains("minimum wage is $1000"));
        assert_eq!(e.salary(), 1200.0);
    }

    #[test]
    fn project_can_be_assigned() {
        let p = Project::new("Django App", 20000, "Globomantics");
        let e: Employee = abi(1000.0).with_project(p.clone());
        assert_eq!(e.project(), Some(&p));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn valid_salary_reads_back_exactly(
                start in 1000.0f64..1e9,
                salary in 1000.0f64..1e9
            ) {
                let mut e: Employee = abi(start);
                e.set("salary", FieldValue::Money(salary)).unwrap();
                prop_assert_eq!(e.get("salary").unwrap(), FieldValue::Money(salary));
                prop_assert_eq!(e.salary(), salary);
            }

            #[test]
            fn salary_below_floor_is_rejected_and_kept(
                (floor, salary) in (1.0f64..3000.0).prop_flat_map(|f| (Just(f), -1e6..f))
            ) {
                let policy = WagePolicy::new(floor, 3000.0).unwrap();
                let mut e = Employee::<ReadWrite>::new("Abi", 39, 3000.0, &policy).unwrap();
                let err = e.set("salary", FieldValue::Money(salary)).unwrap_err();
                prop_assert!(err.is_invalid_value());
                prop_assert_eq!(e.salary(), 3000.0);
                prop_assert!(Employee::<ReadOnly>::new("Bob", 23, salary, &policy).is_err());
            }

            #[test]
            fn annual_salary_follows_every_write(
                salaries in prop::collection::vec(1000.0f64..1e9, 1..8)
            ) {
                let mut e: Employee = abi(1200.0);
                for salary in salaries {
                    e.annual_salary();
                    e.set("salary", FieldValue::Money(salary)).unwrap();
                    prop_assert_eq!(
                        e.get_derived("annual_salary").unwrap(),
                        FieldValue::Money(salary * 12.0)
                    );
                }
            }

            #[test]
            fn read_only_denies_every_write(value in any::<f64>(), whole in any::<u32>()) {
                let mut e: Employee<ReadOnly> = abi(2000.0);
                let err = e.set("salary", FieldValue::Money(value)).unwrap_err();
                prop_assert!(err.is_access_denied());
                let err = e.set("salary", FieldValue::Integer(whole)).unwrap_err();
                prop_assert!(err.is_access_denied());
                prop_assert_eq!(e.salary(), 2000.0);
            }

            #[test]
            fn write_only_denies_every_read(salary in 1000.0f64..1e9) {
                let mut e: Employee<WriteOnly> = abi(2000.0);
                e.set("salary", FieldValue::Money(salary)).unwrap();
                prop_assert!(e.get("salary").unwrap_err().is_access_denied());
                prop_assert!(e.get_derived("annual_salary").unwrap_err().is_access_denied());
                prop_assert_eq!(e.raw_salary(), salary);
            }
        }
    }
}

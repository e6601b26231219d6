//! # Roles and Capabilities
//!
//! Roles are built by composition. A role wraps an [`Employee`] and picks
//! up capabilities by implementing traits:
//!
//! - [`Record`]: the base record surface (identity, salary, raises)
//! - [`LayoutIntrospect`]: reports the fixed set of fields the type stores
//!
//! Code that only needs one capability takes `impl Record` or
//! `impl LayoutIntrospect`; code that needs both bounds on both.

use crate::attributes::{SetEffect, FIELDS};
use crate::error::Result;
use crate::model::{AccessMode, Employee, ReadWrite, Readable, Writable};
use crate::policy::WagePolicy;

pub trait Record {
    fn name(&self) -> &str;
    fn age(&self) -> u32;
    fn salary(&self) -> f64;
    fn increase_salary(&mut self, percent: f64) -> Result<SetEffect>;
}

pub trait LayoutIntrospect {
    /// Stored fields, in declaration order. Derived fields are not stored.
    fn field_names(&self) -> Vec<&'static str>;
}

impl<A: Readable + Writable> Record for Employee<A> {
    fn name(&self) -> &str {
        Employee::name(self)
    }

    fn age(&self) -> u32 {
        Employee::age(self)
    }

    fn salary(&self) -> f64 {
        Employee::salary(self)
    }

    fn increase_salary(&mut self, percent: f64) -> Result<SetEffect> {
        Employee::increase_salary(self, percent)
    }
}

impl<A: AccessMode> LayoutIntrospect for Employee<A> {
    fn field_names(&self) -> Vec<&'static str> {
        FIELDS
            .iter()
            .filter(|spec| !spec.is_derived())
            .map(|spec| spec.name)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Tester {
    employee: Employee<ReadWrite>,
}

impl Tester {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        salary: f64,
        policy: &WagePolicy,
    ) -> Result<Self> {
        Ok(Self {
            employee: Employee::new(name, age, salary, policy)?.with_position("Tester"),
        })
    }

    pub fn employee(&self) -> &Employee<ReadWrite> {
        &self.employee
    }

    /// Progress lines of a test run.
    pub fn run_tests(&self) -> Vec<String> {
        vec![
            format!("Testing is started by {}...", self.employee.name()),
            "Tests are done.".to_string(),
        ]
    }
}

impl Record for Tester {
    fn name(&self) -> &str {
        self.employee.name()
    }

    fn age(&self) -> u32 {
        self.employee.age()
    }

    fn salary(&self) -> f64 {
        self.employee.salary()
    }

    fn increase_salary(&mut self, percent: f64) -> Result<SetEffect> {
        self.employee.increase_salary(percent)
    }
}

impl LayoutIntrospect for Tester {
    fn field_names(&self) -> Vec<&'static str> {
        self.employee.field_names()
    }
}

#[derive(Debug, Clone)]
pub struct Developer {
    employee: Employee<ReadWrite>,
    framework: String,
}

impl Developer {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        salary: f64,
        framework: impl Into<String>,
        policy: &WagePolicy,
    ) -> Result<Self> {
        Ok(Self {
            employee: Employee::new(name, age, salary, policy)?.with_position("Developer"),
            framework: framework.into(),
        })
    }

    pub fn employee(&self) -> &Employee<ReadWrite> {
        &self.employee
    }

    pub fn framework(&self) -> &str {
        &self.framework
    }

    pub fn increase_salary_with_bonus(&mut self, percent: f64, bonus: f64) -> Result<SetEffect> {
        self.employee.increase_salary_with_bonus(percent, bonus)
    }
}

impl Record for Developer {
    fn name(&self) -> &str {
        self.employee.name()
    }

    fn age(&self) -> u32 {
        self.employee.age()
    }

    fn salary(&self) -> f64 {
        self.employee.salary()
    }

    fn increase_salary(&mut self, percent: f64) -> Result<SetEffect> {
        self.increase_salary_with_bonus(percent, 0.0)
    }
}

impl LayoutIntrospect for Developer {
    fn field_names(&self) -> Vec<&'static str> {
        let mut names = self.employee.field_names();
        names.push("framework");
        names
    }
}

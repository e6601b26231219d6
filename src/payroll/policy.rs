//! # Wage Policy
//!
//! The minimum wage is configuration shared by every record built against the
//! same policy. Instead of a process-wide global, a [`WagePolicy`] is an
//! explicit handle: clones share one floor, and [`WagePolicy::change_minimum_wage`]
//! is the only way to move it.
//!
//! Changing the floor never rewrites stored salaries. It only tightens or
//! loosens the check applied to later writes.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::config::PayrollConfig;
use crate::error::{PayrollError, Result};
use crate::model::{Employee, ReadWrite};

pub const DEFAULT_MINIMUM_WAGE: f64 = 1000.0;
pub const DEFAULT_WAGE_CEILING: f64 = 3000.0;

#[derive(Debug, Clone)]
pub struct WagePolicy {
    minimum: Rc<Cell<f64>>,
    ceiling: f64,
}

impl Default for WagePolicy {
    fn default() -> Self {
        Self {
            minimum: Rc::new(Cell::new(DEFAULT_MINIMUM_WAGE)),
            ceiling: DEFAULT_WAGE_CEILING,
        }
    }
}

impl WagePolicy {
    /// Build a policy with its own floor.
    ///
    /// Both amounts must be finite, the floor non-negative and not above
    /// the ceiling.
    pub fn new(minimum: f64, ceiling: f64) -> Result<Self> {
        if !ceiling.is_finite() || ceiling < 0.0 {
            return Err(PayrollError::InvalidValue(format!(
                "wage ceiling must be a non-negative amount, got {}",
                ceiling
            )));
        }
        check_floor(minimum, ceiling)?;
        Ok(Self {
            minimum: Rc::new(Cell::new(minimum)),
            ceiling,
        })
    }

    pub fn from_config(config: &PayrollConfig) -> Result<Self> {
        Self::new(config.minimum_wage, config.wage_ceiling)
    }

    pub fn minimum_wage(&self) -> f64 {
        self.minimum.get()
    }

    pub fn wage_ceiling(&self) -> f64 {
        self.ceiling
    }

    /// Move the floor for every record sharing this policy.
    pub fn change_minimum_wage(&self, new_wage: f64) -> Result<()> {
        check_floor(new_wage, self.ceiling)?;
        let previous = self.minimum.replace(new_wage);
        info!(previous, current = new_wage, "minimum wage changed");
        Ok(())
    }

    /// Check a salary against the current floor.
    pub fn check(&self, salary: f64) -> Result<f64> {
        let floor = self.minimum_wage();
        if !salary.is_finite() || salary < floor {
            return Err(PayrollError::InvalidValue(format!(
                "minimum wage is ${}, got ${}",
                floor, salary
            )));
        }
        Ok(salary)
    }

    /// Hire someone at the current minimum wage.
    ///
    /// Age is whole years from `dob` to `today`.
    pub fn new_employee(
        &self,
        name: impl Into<String>,
        dob: NaiveDate,
        today: NaiveDate,
    ) -> Result<Employee<ReadWrite>> {
        let age = age_on(dob, today)?;
        Employee::new(name, age, self.minimum_wage(), self)
    }
}

fn check_floor(minimum: f64, ceiling: f64) -> Result<()> {
    if !minimum.is_finite() || minimum < 0.0 {
        return Err(PayrollError::InvalidValue(format!(
            "minimum wage must be a non-negative amount, got {}",
            minimum
        )));
    }
    if minimum > ceiling {
        return Err(PayrollError::InvalidValue(format!(
            "company is bankrupt: minimum wage {} exceeds ceiling {}",
            minimum, ceiling
        )));
    }
    Ok(())
}

/// Whole years between `dob` and `today`.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> Result<u32> {
    if dob > today {
        return Err(PayrollError::InvalidValue(format!(
            "date of birth {} is after {}",
            dob, today
        )));
    }
    let birthday_pending = (today.month(), today.day()) < (dob.month(), dob.day());
    let years = today.year() - dob.year() - i32::from(birthday_pending);
    u32::try_from(years)
        .map_err(|_| PayrollError::InvalidValue(format!("invalid age {}", years)))
}

use crate::attributes::FieldValue;
use crate::commands::raise::format_amount;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Employee, ReadOnly, WriteOnly};
use crate::policy::WagePolicy;

/// Show a read-only salary. An attempted write fails with `AccessDenied`.
pub fn read_only(
    policy: &WagePolicy,
    name: &str,
    age: u32,
    salary: f64,
    attempt: Option<f64>,
) -> Result<CmdResult> {
    let mut employee = Employee::<ReadOnly>::new(name, age, salary, policy)?;
    if let Some(value) = attempt {
        employee.set("salary", FieldValue::Money(value))?;
    }

    let mut result = CmdResult::default();
    result.add_line(format_amount(employee.salary()));
    result.add_line(format!(
        "{} ({}) has a salary of ${:.2}.",
        employee.name(),
        employee.age(),
        employee.salary()
    ));
    Ok(result)
}

/// Update a write-only salary. An attempted read fails with `AccessDenied`.
pub fn write_only(
    policy: &WagePolicy,
    name: &str,
    age: u32,
    salary: f64,
    new_salary: Option<f64>,
    reveal: bool,
) -> Result<CmdResult> {
    let mut employee = Employee::<WriteOnly>::new(name, age, salary, policy)?;
    let mut result = CmdResult::default();

    if let Some(value) = new_salary {
        employee.set_salary(value)?;
        result.add_message(CmdMessage::success(format!(
            "Salary of {} updated",
            employee.name()
        )));
    }
    if reveal {
        let value = employee.get("salary")?;
        result.add_line(format!("{:?}", value));
    }
    result.add_line(format!(
        "{} ({}) has a salary of $****.",
        employee.name(),
        employee.age()
    ));
    Ok(result)
}

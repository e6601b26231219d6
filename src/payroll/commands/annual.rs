use crate::commands::raise::format_amount;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Employee, ReadWrite};
use crate::policy::WagePolicy;

/// Show the annual salary before and after a salary change, and how often it
/// was actually computed.
pub fn run(
    policy: &WagePolicy,
    name: &str,
    age: u32,
    salary: f64,
    position: &str,
    new_salary: f64,
) -> Result<CmdResult> {
    let mut employee =
        Employee::<ReadWrite>::new(name, age, salary, policy)?.with_position(position);
    let mut result = CmdResult::default();

    result.add_line(format_amount(employee.salary()));
    result.add_line(employee.to_string());
    result.add_line(format_amount(employee.annual_salary()));
    // Second read is served from the cache.
    employee.annual_salary();

    employee.set_salary(new_salary)?;
    result.add_line(format_amount(employee.annual_salary()));

    result.add_message(CmdMessage::info(format!(
        "annual salary computed {} times",
        employee.computations()
    )));
    Ok(result)
}

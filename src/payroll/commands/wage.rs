use chrono::NaiveDate;

use crate::commands::raise::format_amount;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::policy::WagePolicy;

#[derive(Debug, Clone)]
pub struct Hire {
    pub name: String,
    pub dob: NaiveDate,
}

/// Optionally move the minimum wage, then hire each person at the floor.
///
/// Prints the floor, then name, age and salary of every hire.
pub fn run(
    policy: &WagePolicy,
    new_minimum: Option<f64>,
    hires: &[Hire],
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Some(minimum) = new_minimum {
        let previous = policy.minimum_wage();
        policy.change_minimum_wage(minimum)?;
        result.add_message(CmdMessage::success(format!(
            "Minimum wage changed to {}",
            format_amount(minimum)
        )));
        if minimum < previous {
            result.add_message(CmdMessage::warning(format!(
                "Existing salaries keep the previous floor of {} or more",
                format_amount(previous)
            )));
        }
    }
    result.add_line(format_amount(policy.minimum_wage()));

    for hire in hires {
        let employee = policy.new_employee(&hire.name, hire.dob, today)?;
        result.add_line(employee.name());
        result.add_line(employee.age().to_string());
        result.add_line(format_amount(employee.salary()));
    }
    Ok(result)
}

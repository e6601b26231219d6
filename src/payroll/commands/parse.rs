use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Employee, ReadWrite};
use crate::policy::WagePolicy;
use crate::repr::parse_repr;

/// Rebuild a record from its repr, optionally raise it, and print both forms.
pub fn run(policy: &WagePolicy, text: &str, raise: Option<f64>) -> Result<CmdResult> {
    let mut employee: Employee<ReadWrite> = parse_repr(text, policy)?;
    if let Some(percent) = raise {
        employee.increase_salary(percent)?;
    }

    let mut result = CmdResult::default();
    result.add_line(employee.to_string());
    result.add_line(employee.to_repr()?);
    result.add_message(CmdMessage::info(format!("Parsed record for {}", employee.name())));
    Ok(result)
}

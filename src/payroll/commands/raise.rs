use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Employee, ReadWrite};
use crate::policy::WagePolicy;

#[derive(Debug, Clone)]
pub struct RaiseRequest {
    pub name: String,
    pub age: u32,
    pub salary: f64,
    pub percent: f64,
    pub bonus: f64,
}

/// Hire at `salary`, then raise by `percent` plus `bonus`.
pub fn run(policy: &WagePolicy, request: &RaiseRequest) -> Result<CmdResult> {
    let mut employee =
        Employee::<ReadWrite>::new(&request.name, request.age, request.salary, policy)?;
    employee.increase_salary_with_bonus(request.percent, request.bonus)?;

    let mut result = CmdResult::default();
    result.add_line(format_amount(employee.salary()));
    result.add_message(CmdMessage::success(format!(
        "Raised {} by {}%{}",
        employee.name(),
        request.percent,
        if request.bonus != 0.0 {
            format!(" plus {}", request.bonus)
        } else {
            String::new()
        }
    )));
    Ok(result)
}

/// Amounts print with a decimal point, whole or not (e.g. `1440.0`).
pub fn format_amount(amount: f64) -> String {
    format!("{:?}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(salary: f64, percent: f64, bonus: f64) -> RaiseRequest {
        RaiseRequest {
            name: "Abi".into(),
            age: 39,
            salary,
            percent,
            bonus,
        }
    }

    #[test]
    fn raise_by_twenty_percent() {
        let result = run(&WagePolicy::default(), &request(1200.0, 20.0, 0.0)).unwrap();
        assert_eq!(result.lines, vec!["1440.0"]);
        assert_eq!(result.messages[0].content, "Raised Abi by 20%");
    }

    #[test]
    fn raise_with_bonus() {
        let result = run(&WagePolicy::default(), &request(50000.0, 20.0, 100.0)).unwrap();
        assert_eq!(result.lines, vec!["60100.0"]);
        assert!(result.messages[0].content.ends_with("plus 100"));
    }

    #[test]
    fn cut_below_minimum_fails() {
        let err = run(&WagePolicy::default(), &request(1000.0, -1.0, 0.0)).unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn hire_below_minimum_fails() {
        let err = run(&WagePolicy::default(), &request(999.0, 20.0, 0.0)).unwrap_err();
        assert!(err.is_invalid_value());
    }
}

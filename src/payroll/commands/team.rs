use crate::commands::raise::format_amount;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::policy::WagePolicy;
use crate::roles::{Developer, LayoutIntrospect, Record, Tester};

#[derive(Debug, Clone)]
pub struct TeamRequest {
    pub tester: String,
    pub tester_age: u32,
    pub tester_salary: f64,
    pub developer: String,
    pub developer_age: u32,
    pub developer_salary: f64,
    pub framework: String,
    pub percent: f64,
    pub bonus: f64,
}

/// Raise a tester and a developer, run the tester's tests and report the
/// developer's layout.
pub fn run(policy: &WagePolicy, request: &TeamRequest) -> Result<CmdResult> {
    let mut tester = Tester::new(
        &request.tester,
        request.tester_age,
        request.tester_salary,
        policy,
    )?;
    let mut developer = Developer::new(
        &request.developer,
        request.developer_age,
        request.developer_salary,
        &request.framework,
        policy,
    )?;

    tester.increase_salary(request.percent)?;
    developer.increase_salary_with_bonus(request.percent, request.bonus)?;

    let mut result = CmdResult::default();
    result.add_line(format_amount(tester.salary()));
    for line in tester.run_tests() {
        result.add_line(line);
    }
    result.add_line(format_amount(developer.salary()));
    result.add_line(format!("{} {}", developer.name(), developer.framework()));
    result.add_line(describe_layout(&developer));
    Ok(result)
}

fn describe_layout(record: &impl LayoutIntrospect) -> String {
    format!("fields: {}", record.field_names().join(", "))
}

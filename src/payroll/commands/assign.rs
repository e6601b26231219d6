use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Employee, ReadWrite};
use crate::policy::WagePolicy;
use crate::project::Project;

/// Assign a project to a new employee and notify the client.
pub fn run(
    policy: &WagePolicy,
    employee: &str,
    age: u32,
    salary: f64,
    project: Project,
) -> Result<CmdResult> {
    let employee =
        Employee::<ReadWrite>::new(employee, age, salary, policy)?.with_project(project);

    let mut result = CmdResult::default();
    if let Some(project) = employee.project() {
        result.add_line(serde_json::to_string(project)?);
        result.add_line(project.notify_client());
        result.add_message(CmdMessage::success(format!(
            "{} ({}) assigned to {}",
            employee.name(),
            employee.age(),
            project.name
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_notifies_client() {
        let project = Project::new("Django App", 20000, "Globomantics");
        let result = run(&WagePolicy::default(), "Abi", 39, 1000.0, project).unwrap();
        assert_eq!(
            result.lines,
            vec![
                r#"{"name":"Django App","payment":20000,"client":"Globomantics"}"#,
                "Notifying Globomantics about the progress of the Django App ...",
            ]
        );
        assert_eq!(result.messages[0].content, "Abi (39) assigned to Django App");
    }
}

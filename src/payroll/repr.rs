//! # Textual Form
//!
//! Records have two printable forms:
//!
//! - **Display**: a sentence for people,
//!   `Abi is 39 years old. Employee is a Programmer with a salary of $2600.00.`
//! - **Repr**: a constructor-shaped form for round trips,
//!   `Employee('Abi', 39, 2600.0, 'Programmer')`
//!
//! Rebuilding a record from its repr goes through [`parse_repr`], which
//! accepts only that exact shape and then builds the record through the
//! normal constructor, so the minimum wage check applies to parsed input
//! the same as to any other.
//!
//! Write-only records redact the salary in Display and refuse to produce a
//! repr at all, since either would expose the value.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::{PayrollError, Result};
use crate::model::{AccessMode, Employee};
use crate::policy::WagePolicy;

const REPR_PREFIX: &str = "Employee(";
const REDACTED: &str = "****";

impl<A: AccessMode> fmt::Display for Employee<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is {} years old. Employee is a {} with a salary of $",
            self.name(),
            self.age(),
            self.position()
        )?;
        if A::SALARY.can_read() {
            write!(f, "{:.2}.", self.raw_salary())
        } else {
            write!(f, "{}.", REDACTED)
        }
    }
}

impl<A: AccessMode> Employee<A> {
    /// Constructor-shaped text that [`parse_repr`] turns back into an equal record.
    pub fn to_repr(&self) -> Result<String> {
        if !A::SALARY.can_read() {
            return Err(PayrollError::AccessDenied(
                "salary is write only".to_string(),
            ));
        }
        Ok(format!(
            "Employee({}, {}, {:?}, {})",
            quote(self.name()),
            self.age(),
            self.raw_salary(),
            quote(self.position())
        ))
    }
}

/// Rebuild a record from its repr.
///
/// Accepts `Employee('name', age, salary, 'position')`, with the position
/// optional. Strings may use single or double quotes.
pub fn parse_repr<A: AccessMode>(text: &str, policy: &WagePolicy) -> Result<Employee<A>> {
    let args = split_args(text)?;
    let (name, age, salary, position) = match args.as_slice() {
        [name, age, salary] => (name, age, salary, None),
        [name, age, salary, position] => (name, age, salary, Some(position)),
        _ => {
            return Err(PayrollError::Parse(format!(
                "expected 3 or 4 arguments, found {}",
                args.len()
            )))
        }
    };

    let name = name.text("name")?;
    let age: u32 = age
        .number("age")?
        .parse()
        .map_err(|_| PayrollError::Parse(format!("age must be a whole number: {:?}", age)))?;
    let salary: f64 = salary
        .number("salary")?
        .parse()
        .map_err(|_| PayrollError::Parse(format!("salary must be a number: {:?}", salary)))?;

    let employee = Employee::new(name, age, salary, policy)?;
    match position {
        Some(position) => Ok(employee.with_position(position.text("position")?)),
        None => Ok(employee),
    }
}

fn quote(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

#[derive(Debug, Clone, PartialEq)]
enum Arg {
    Text(String),
    Number(String),
}

impl Arg {
    fn text(&self, what: &str) -> Result<&str> {
        match self {
            Arg::Text(s) => Ok(s.as_str()),
            Arg::Number(n) => Err(PayrollError::Parse(format!(
                "{} must be a quoted string, found {}",
                what, n
            ))),
        }
    }

    fn number(&self, what: &str) -> Result<&str> {
        match self {
            Arg::Number(n) => Ok(n.as_str()),
            Arg::Text(s) => Err(PayrollError::Parse(format!(
                "{} must be a number, found '{}'",
                what, s
            ))),
        }
    }
}

fn split_args(text: &str) -> Result<Vec<Arg>> {
    let inner = text
        .trim()
        .strip_prefix(REPR_PREFIX)
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            PayrollError::Parse(format!("expected {}...), found {:?}", REPR_PREFIX, text))
        })?;

    let mut chars = inner.chars().peekable();
    let mut args = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        let arg = match chars.peek() {
            None if args.is_empty() => break,
            None => return Err(PayrollError::Parse("trailing comma".to_string())),
            Some('\'') | Some('"') => Arg::Text(read_quoted(&mut chars)?),
            Some(_) => Arg::Number(read_bare(&mut chars)?),
        };
        args.push(arg);

        skip_whitespace(&mut chars);
        match chars.next() {
            None => break,
            Some(',') => continue,
            Some(c) => {
                return Err(PayrollError::Parse(format!(
                    "expected ',' between arguments, found '{}'",
                    c
                )))
            }
        }
    }
    Ok(args)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn read_quoted(chars: &mut Peekable<Chars<'_>>) -> Result<String> {
    let Some(delimiter) = chars.next() else {
        return Err(PayrollError::Parse("expected a quoted string".to_string()));
    };
    let mut out = String::new();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => out.push(escaped),
                None => break,
            },
            c if c == delimiter => return Ok(out),
            c => out.push(c),
        }
    }
    Err(PayrollError::Parse("unterminated string".to_string()))
}

fn read_bare(chars: &mut Peekable<Chars<'_>>) -> Result<String> {
    let mut out = String::new();
    while let Some(c) = chars.next_if(|c| *c != ',' && !c.is_whitespace()) {
        out.push(c);
    }
    if out.is_empty() {
        return Err(PayrollError::Parse("empty argument".to_string()));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ReadOnly, ReadWrite, WriteOnly};

    fn abi() -> Employee<ReadWrite> {
        Employee::new("Abi", 39, 2000.0, &WagePolicy::default())
            .unwrap()
            .with_position("Programmer")
    }

    #[test]
    fn display_formats_salary_with_cents() {
        let mut e = abi();
        e.increase_salary(30.0).unwrap();
        assert_eq!(
            e.to_string(),
            "Abi is 39 years old. Employee is a Programmer with a salary of $2600.00."
        );
    }

    #[test]
    fn display_redacts_write_only_salary() {
        let e = Employee::<WriteOnly>::new("Abi", 39, 25000.0, &WagePolicy::default()).unwrap();
        assert!(e.to_string().ends_with("with a salary of $****."));
        assert!(!e.to_string().contains("25000"));
    }

    #[test]
    fn repr_has_constructor_shape() {
        assert_eq!(
            abi().to_repr().unwrap(),
            "Employee('Abi', 39, 2000.0, 'Programmer')"
        );
    }

    #[test]
    fn repr_is_denied_for_write_only() {
        let e = Employee::<WriteOnly>::new("Abi", 39, 2000.0, &WagePolicy::default()).unwrap();
        assert!(e.to_repr().unwrap_err().is_access_denied());
    }

    #[test]
    fn repr_parses_back_to_equal_record() {
        let mut e = abi();
        e.increase_salary(30.0).unwrap();
        let parsed: Employee<ReadWrite> =
            parse_repr(&e.to_repr().unwrap(), &WagePolicy::default()).unwrap();
        assert_eq!(parsed.to_string(), e.to_string());
        assert_eq!(parsed.salary(), e.salary());
    }

    #[test]
    fn parse_accepts_double_quotes_and_missing_position() {
        let e: Employee<ReadOnly> =
            parse_repr(r#"Employee("Bob", 23, 1000)"#, &WagePolicy::default()).unwrap();
        assert_eq!(e.name(), "Bob");
        assert_eq!(e.age(), 23);
        assert_eq!(e.salary(), 1000.0);
        assert_eq!(e.position(), "");
    }

    #[test]
    fn parse_handles_escaped_quotes() {
        let e = Employee::<ReadWrite>::new("O'Neil", 30, 1500.0, &WagePolicy::default()).unwrap();
        let repr = e.to_repr().unwrap();
        assert_eq!(repr, r"Employee('O\'Neil', 30, 1500.0, '')");
        let parsed: Employee<ReadWrite> = parse_repr(&repr, &WagePolicy::default()).unwrap();
        assert_eq!(parsed.name(), "O'Neil");
    }

    #[test]
    fn parse_validates_salary() {
        let policy = WagePolicy::default();
        let result = parse_repr::<ReadWrite>("Employee('Bob', 23, 999.0, 'Driver')", &policy);
        assert!(result.unwrap_err().is_invalid_value());
    }

    #[test]
    fn parse_rejects_malformed_text() {
        let policy = WagePolicy::default();
        for text in [
            "Manager('Abi', 39, 2000.0)",
            "Employee('Abi', 39, 2000.0",
            "Employee('Abi', 39)",
            "Employee('Abi', 39, 2000.0, 'Programmer', 'extra')",
            "Employee(Abi, 39, 2000.0)",
            "Employee('Abi', '39', 2000.0)",
            "Employee('Abi', 39, 2000.0,)",
            "Employee('Abi 39, 2000.0)",
            "Employee('Abi', -1, 2000.0)",
            "Employee('Abi', 39, lots)",
            "__import__('os')",
        ] {
            let err = parse_repr::<ReadWrite>(text, &policy).unwrap_err();
            assert!(
                matches!(err, PayrollError::Parse(_)),
                "{} gave {:?}",
                text,
                err
            );
        }
    }
}

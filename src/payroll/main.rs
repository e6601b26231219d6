use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::*;
use payroll::api::{CmdMessage, CmdResult, ConfigAction, Hire, MessageLevel, PayrollApi};
use payroll::api::{RaiseRequest, TeamRequest};
use payroll::config::config_dir;
use payroll::error::{PayrollError, Result};
use payroll::project::Project;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("payroll=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let api = PayrollApi::from_config_dir(config_dir()?)?;
    if let Some(minimum) = cli.minimum_wage {
        api.policy().change_minimum_wage(minimum)?;
    }

    let result = match cli.command {
        Commands::Raise {
            name,
            age,
            salary,
            percent,
            bonus,
        } => api.raise(&RaiseRequest {
            name,
            age,
            salary,
            percent,
            bonus,
        })?,
        Commands::Wage {
            new_minimum,
            hires,
            today,
        } => handle_wage(&api, new_minimum, &hires, today.as_deref())?,
        Commands::Annual {
            name,
            age,
            salary,
            position,
            new_salary,
        } => api.annual(&name, age, salary, &position, new_salary)?,
        Commands::Readonly {
            name,
            age,
            salary,
            attempt,
        } => api.read_only(&name, age, salary, attempt)?,
        Commands::Writeonly {
            name,
            age,
            salary,
            new_salary,
            reveal,
        } => api.write_only(&name, age, salary, new_salary, reveal)?,
        Commands::Team {
            tester,
            tester_age,
            tester_salary,
            developer,
            developer_age,
            developer_salary,
            framework,
            percent,
            bonus,
        } => api.team(&TeamRequest {
            tester,
            tester_age,
            tester_salary,
            developer,
            developer_age,
            developer_salary,
            framework,
            percent,
            bonus,
        })?,
        Commands::Project {
            employee,
            age,
            salary,
            name,
            payment,
            client,
        } => api.assign(&employee, age, salary, Project::new(name, payment, client))?,
        Commands::Parse { text, raise } => api.parse(&text, raise)?,
        Commands::Config { key, value } => handle_config(&api, key, value)?,
    };

    print_result(&result);
    Ok(())
}

fn handle_wage(
    api: &PayrollApi,
    new_minimum: Option<f64>,
    hires: &[String],
    today: Option<&str>,
) -> Result<CmdResult> {
    let today = match today {
        Some(text) => parse_date(text)?,
        None => Local::now().date_naive(),
    };
    let hires = hires
        .iter()
        .map(|spec| parse_hire(spec))
        .collect::<Result<Vec<_>>>()?;
    api.change_wage(new_minimum, &hires, today)
}

fn handle_config(api: &PayrollApi, key: Option<String>, value: Option<f64>) -> Result<CmdResult> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    api.config(action)
}

fn parse_hire(spec: &str) -> Result<Hire> {
    let (name, dob) = spec.split_once(':').ok_or_else(|| {
        PayrollError::Parse(format!("expected NAME:YYYY-MM-DD, found {:?}", spec))
    })?;
    Ok(Hire {
        name: name.to_string(),
        dob: parse_date(dob)?,
    })
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| PayrollError::Parse(format!("invalid date {:?}: {}", text, e)))
}

fn print_result(result: &CmdResult) {
    for line in &result.lines {
        println!("{}", line);
    }
    if let Some(config) = &result.config {
        println!("minimum_wage = {:?}", config.minimum_wage);
        println!("wage_ceiling = {:?}", config.wage_ceiling);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

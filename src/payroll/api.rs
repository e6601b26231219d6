//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It owns the [`WagePolicy`] every command builds records against
//! and the directory configuration is read from.
//!
//! The facade dispatches and returns structured [`CmdResult`]s. It holds no
//! business logic and performs no terminal I/O.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::commands;
use crate::config::PayrollConfig;
use crate::error::Result;
use crate::policy::WagePolicy;
use crate::project::Project;

pub struct PayrollApi {
    policy: WagePolicy,
    config_dir: PathBuf,
}

impl PayrollApi {
    pub fn new(policy: WagePolicy, config_dir: PathBuf) -> Self {
        Self { policy, config_dir }
    }

    /// Build the facade from the config stored in `config_dir`.
    pub fn from_config_dir(config_dir: PathBuf) -> Result<Self> {
        let config = PayrollConfig::load(&config_dir)?;
        Ok(Self::new(WagePolicy::from_config(&config)?, config_dir))
    }

    pub fn policy(&self) -> &WagePolicy {
        &self.policy
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn raise(&self, request: &commands::raise::RaiseRequest) -> Result<commands::CmdResult> {
        commands::raise::run(&self.policy, request)
    }

    pub fn change_wage(
        &self,
        new_minimum: Option<f64>,
        hires: &[commands::wage::Hire],
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        commands::wage::run(&self.policy, new_minimum, hires, today)
    }

    pub fn annual(
        &self,
        name: &str,
        age: u32,
        salary: f64,
        position: &str,
        new_salary: f64,
    ) -> Result<commands::CmdResult> {
        commands::annual::run(&self.policy, name, age, salary, position, new_salary)
    }

    pub fn read_only(
        &self,
        name: &str,
        age: u32,
        salary: f64,
        attempt: Option<f64>,
    ) -> Result<commands::CmdResult> {
        commands::access::read_only(&self.policy, name, age, salary, attempt)
    }

    pub fn write_only(
        &self,
        name: &str,
        age: u32,
        salary: f64,
        new_salary: Option<f64>,
        reveal: bool,
    ) -> Result<commands::CmdResult> {
        commands::access::write_only(&self.policy, name, age, salary, new_salary, reveal)
    }

    pub fn team(&self, request: &commands::team::TeamRequest) -> Result<commands::CmdResult> {
        commands::team::run(&self.policy, request)
    }

    pub fn assign(
        &self,
        employee: &str,
        age: u32,
        salary: f64,
        project: Project,
    ) -> Result<commands::CmdResult> {
        commands::assign::run(&self.policy, employee, age, salary, project)
    }

    pub fn parse(&self, text: &str, raise: Option<f64>) -> Result<commands::CmdResult> {
        commands::parse::run(&self.policy, text, raise)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::raise::RaiseRequest;
pub use commands::team::TeamRequest;
pub use commands::wage::Hire;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "payroll")]
#[command(about = "Employee records with validated salaries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the configured minimum wage for this run
    #[arg(long, global = true)]
    pub minimum_wage: Option<f64>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hire someone and raise their salary
    Raise {
        #[arg(long, default_value = "Abi")]
        name: String,

        #[arg(long, default_value_t = 39)]
        age: u32,

        #[arg(long, default_value_t = 50000.0)]
        salary: f64,

        /// Raise in percent
        #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
        percent: f64,

        /// Flat amount added after the percentage
        #[arg(long, default_value_t = 0.0)]
        bonus: f64,
    },

    /// Change the minimum wage and hire people at the new floor
    Wage {
        /// New minimum wage
        #[arg(long = "set")]
        new_minimum: Option<f64>,

        /// People to hire, as NAME:YYYY-MM-DD
        #[arg(long = "hire", value_name = "NAME:DOB")]
        hires: Vec<String>,

        /// Reference date for ages (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        today: Option<String>,
    },

    /// Show how the cached annual salary follows salary changes
    Annual {
        #[arg(long, default_value = "Abi")]
        name: String,

        #[arg(long, default_value_t = 39)]
        age: u32,

        #[arg(long, default_value_t = 1200.0)]
        salary: f64,

        #[arg(long, default_value = "Programmer")]
        position: String,

        /// Salary to switch to
        #[arg(long = "to", default_value_t = 1000.0)]
        new_salary: f64,
    },

    /// Show a read-only salary, optionally attempting a write
    Readonly {
        #[arg(long, default_value = "Abi")]
        name: String,

        #[arg(long, default_value_t = 39)]
        age: u32,

        #[arg(long, default_value_t = 2000.0)]
        salary: f64,

        /// Attempt to overwrite the salary (always denied)
        #[arg(long = "set")]
        attempt: Option<f64>,
    },

    /// Update a write-only salary, optionally attempting a read
    Writeonly {
        #[arg(long, default_value = "Abi")]
        name: String,

        #[arg(long, default_value_t = 39)]
        age: u32,

        #[arg(long, default_value_t = 2000.0)]
        salary: f64,

        /// New salary
        #[arg(long = "set")]
        new_salary: Option<f64>,

        /// Attempt to read the salary (always denied)
        #[arg(long)]
        reveal: bool,
    },

    /// Raise a tester and a developer
    Team {
        #[arg(long, default_value = "Abi")]
        tester: String,

        #[arg(long, default_value_t = 23)]
        tester_age: u32,

        #[arg(long, default_value_t = 1200.0)]
        tester_salary: f64,

        #[arg(long, default_value = "Bill")]
        developer: String,

        #[arg(long, default_value_t = 44)]
        developer_age: u32,

        #[arg(long, default_value_t = 2000.0)]
        developer_salary: f64,

        #[arg(long, default_value = "JS")]
        framework: String,

        #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
        percent: f64,

        /// Developer bonus
        #[arg(long, default_value_t = 50.0)]
        bonus: f64,
    },

    /// Assign a project and notify its client
    Project {
        #[arg(long, default_value = "Abi")]
        employee: String,

        #[arg(long, default_value_t = 39)]
        age: u32,

        #[arg(long, default_value_t = 1000.0)]
        salary: f64,

        #[arg(long, default_value = "Django App")]
        name: String,

        #[arg(long, default_value_t = 20000)]
        payment: u64,

        #[arg(long, default_value = "Globomantics")]
        client: String,
    },

    /// Rebuild a record from its repr, e.g. "Employee('Abi', 39, 2000.0, 'Programmer')"
    Parse {
        text: String,

        /// Raise in percent before printing
        #[arg(long, allow_negative_numbers = true)]
        raise: Option<f64>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (minimum_wage, wage_ceiling)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<f64>,
    },
}

//! Command-line interface definitions using clap.
//!
//! Every argument struct here converts into a core parameter type with a
//! `From` impl, so clap derives never leak into `tenure-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::civil::Date;
use rust_decimal::Decimal;
use tenure_core::{
    models::OffboardingType,
    params::{
        CreateEmployee, ExportOffboarding, Id, InitiateOffboarding, ListEmployees,
        SetTaskCompletion, UpdateCompensation,
    },
    ExportFormat,
};

/// Track employee onboarding stages and offboarding checklists
///
/// Without a subcommand the active roster is listed.
#[derive(Parser)]
#[command(version, about, name = "tenure")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tenure/tenure.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Days of basic salary paid as gratuity per year of service
    #[arg(long, global = true)]
    pub gratuity_days: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the employee roster
    #[command(alias = "e")]
    Employee {
        #[command(subcommand)]
        command: EmployeeCommands,
    },
    /// Follow a new hire through the onboarding stages
    #[command(alias = "on")]
    Onboarding {
        #[command(subcommand)]
        command: OnboardingCommands,
    },
    /// Run an exit checklist through to settlement
    #[command(alias = "off")]
    Offboarding {
        #[command(subcommand)]
        command: OffboardingCommands,
    },
    /// Inspect final settlement figures and exit documents
    #[command(alias = "s")]
    Settlement {
        #[command(subcommand)]
        command: SettlementCommands,
    },
}

// ============================================================================
// Employee commands
// ============================================================================

/// Add an employee to the roster
///
/// New hires start onboarding at the first stage. Use --active to import
/// someone who is already employed.
#[derive(ClapArgs)]
pub struct AddEmployeeArgs {
    /// Full name
    pub name: String,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(short, long)]
    pub department: Option<String>,
    /// Job title
    #[arg(short, long)]
    pub position: Option<String>,
    /// Basic monthly salary
    #[arg(long, default_value = "0")]
    pub salary: Decimal,
    /// Recurring monthly allowances
    #[arg(long, default_value = "0")]
    pub allowances: Decimal,
    /// Outstanding deductions
    #[arg(long, default_value = "0")]
    pub deductions: Decimal,
    /// Accrued leave days not yet taken
    #[arg(long, default_value_t = 0)]
    pub leave_days: u32,
    /// First day of employment (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub hire_date: Option<Date>,
    /// Import as already employed, skipping onboarding
    #[arg(long)]
    pub active: bool,
}

impl From<AddEmployeeArgs> for CreateEmployee {
    fn from(val: AddEmployeeArgs) -> Self {
        CreateEmployee {
            name: val.name,
            email: val.email,
            department: val.department,
            position: val.position,
            monthly_salary: val.salary,
            allowances: val.allowances,
            deductions: val.deductions,
            unused_leave_days: val.leave_days,
            hire_date: val.hire_date,
            active: val.active,
        }
    }
}

/// List the roster
#[derive(ClapArgs)]
pub struct ListEmployeesArgs {
    /// Show archived employees instead of the active roster
    #[arg(long)]
    pub archived: bool,
    /// Only list one department
    #[arg(short, long)]
    pub department: Option<String>,
}

impl From<ListEmployeesArgs> for ListEmployees {
    fn from(val: ListEmployeesArgs) -> Self {
        ListEmployees {
            archived: val.archived,
            department: val.department,
        }
    }
}

/// Identifies one employee
#[derive(ClapArgs)]
pub struct EmployeeIdArgs {
    #[arg(help = "Employee ID")]
    pub id: u64,
}

impl From<EmployeeIdArgs> for Id {
    fn from(val: EmployeeIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Correct pay data on file
///
/// Typically used to fix missing salary data before retrying a settlement.
#[derive(ClapArgs)]
pub struct PayArgs {
    #[arg(help = "Employee ID")]
    pub id: u64,
    #[arg(long)]
    pub salary: Option<Decimal>,
    #[arg(long)]
    pub allowances: Option<Decimal>,
    #[arg(long)]
    pub deductions: Option<Decimal>,
    #[arg(long)]
    pub leave_days: Option<u32>,
}

impl From<PayArgs> for UpdateCompensation {
    fn from(val: PayArgs) -> Self {
        UpdateCompensation {
            employee_id: val.id,
            monthly_salary: val.salary,
            allowances: val.allowances,
            deductions: val.deductions,
            unused_leave_days: val.leave_days,
        }
    }
}

#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// Add an employee
    #[command(alias = "a")]
    Add(AddEmployeeArgs),
    /// List employees
    #[command(aliases = ["l", "ls"])]
    List(ListEmployeesArgs),
    /// Show one employee
    #[command(alias = "s")]
    Show(EmployeeIdArgs),
    /// Correct salary, allowances, deductions or leave balance
    Pay(PayArgs),
}

// ============================================================================
// Checklist task commands
// ============================================================================

/// Complete or reopen one checklist task
#[derive(ClapArgs)]
pub struct TaskArgs {
    #[arg(help = "Employee ID")]
    pub id: u64,
    /// Task name, e.g. exit_interview
    pub task: String,
    /// Reopen the task instead of completing it
    #[arg(long)]
    pub undo: bool,
    /// Who made the change
    #[arg(long)]
    pub by: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<TaskArgs> for SetTaskCompletion {
    fn from(val: TaskArgs) -> Self {
        SetTaskCompletion {
            employee_id: val.id,
            task: val.task,
            completed: !val.undo,
            completed_by: val.by,
            notes: val.notes,
        }
    }
}

#[derive(Subcommand)]
pub enum OnboardingCommands {
    /// Show stage, progress and the reference checklist
    #[command(alias = "s")]
    Show(EmployeeIdArgs),
    /// Move to the next stage
    #[command(alias = "a")]
    Advance(EmployeeIdArgs),
    /// Complete or reopen a reference checklist task
    #[command(alias = "t")]
    Task(TaskArgs),
}

// ============================================================================
// Offboarding commands
// ============================================================================

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OffboardingTypeArg {
    Resignation,
    Termination,
    Retirement,
    ContractEnd,
}

impl From<OffboardingTypeArg> for OffboardingType {
    fn from(val: OffboardingTypeArg) -> Self {
        match val {
            OffboardingTypeArg::Resignation => OffboardingType::VoluntaryResignation,
            OffboardingTypeArg::Termination => OffboardingType::InvoluntaryTermination,
            OffboardingTypeArg::Retirement => OffboardingType::Retirement,
            OffboardingTypeArg::ContractEnd => OffboardingType::ContractEnd,
        }
    }
}

/// Start an offboarding for an active employee
#[derive(ClapArgs)]
pub struct StartOffboardingArgs {
    #[arg(help = "Employee ID")]
    pub id: u64,
    #[arg(long = "type", value_enum)]
    pub offboarding_type: OffboardingTypeArg,
    /// Planned last working day (YYYY-MM-DD)
    #[arg(long)]
    pub exit_date: Date,
    #[arg(long)]
    pub reason: Option<String>,
}

impl From<StartOffboardingArgs> for InitiateOffboarding {
    fn from(val: StartOffboardingArgs) -> Self {
        InitiateOffboarding {
            employee_id: val.id,
            offboarding_type: val.offboarding_type.into(),
            reason: val.reason,
            target_exit_date: val.exit_date,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    Json,
    Csv,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(val: ExportFormatArg) -> Self {
        match val {
            ExportFormatArg::Json => ExportFormat::Json,
            ExportFormatArg::Csv => ExportFormat::Csv,
        }
    }
}

/// Export an offboarding snapshot for reporting
#[derive(ClapArgs)]
pub struct ExportArgs {
    #[arg(help = "Employee ID")]
    pub id: u64,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormatArg,
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl From<&ExportArgs> for ExportOffboarding {
    fn from(val: &ExportArgs) -> Self {
        ExportOffboarding {
            employee_id: val.id,
            format: val.format.into(),
        }
    }
}

#[derive(Subcommand)]
pub enum OffboardingCommands {
    /// Start an offboarding
    Start(StartOffboardingArgs),
    /// Show status, progress and the checklist
    #[command(alias = "s")]
    Show(EmployeeIdArgs),
    /// Complete or reopen a checklist task
    #[command(alias = "t")]
    Task(TaskArgs),
    /// Re-run a failed settlement from the first step
    Retry(EmployeeIdArgs),
    /// Export the offboarding as JSON or CSV
    Export(ExportArgs),
}

#[derive(Subcommand)]
pub enum SettlementCommands {
    /// Show the final settlement breakdown
    #[command(alias = "s")]
    Show(EmployeeIdArgs),
    /// Show generated exit documents
    #[command(alias = "d")]
    Documents(EmployeeIdArgs),
}

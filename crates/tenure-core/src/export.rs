//! Offboarding snapshots for report export.
//!
//! An [`ExitSnapshot`] is a sanitized view of one offboarding (no salary
//! figures) shaped for the report generators:
//!
//! ```text
//! {employee: {...}, offboarding: {initiated_date, target_exit_date, status,
//!  progress, tasks: [{category, name, completed, due_date}]}}
//! ```

use std::fmt;
use std::str::FromStr;

use jiff::{civil::Date, tz::TimeZone};
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{Employee, EmployeeStatus, Offboarding, OffboardingStatus},
};

/// Supported export encodings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(format!("Invalid export format: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeSnapshot {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub hire_date: Date,
    pub status: EmployeeStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskSnapshot {
    pub category: Option<String>,
    pub name: String,
    pub completed: bool,
    pub due_date: Option<Date>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OffboardingSnapshot {
    pub initiated_date: Date,
    pub target_exit_date: Date,
    pub status: OffboardingStatus,
    pub progress: u8,
    pub tasks: Vec<TaskSnapshot>,
}

/// Export payload for one employee's offboarding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExitSnapshot {
    pub employee: EmployeeSnapshot,
    pub offboarding: OffboardingSnapshot,
}

/// Flat CSV row: one per task, employee columns repeated.
#[derive(Serialize)]
struct CsvRow<'a> {
    employee_id: u64,
    employee_name: &'a str,
    department: &'a str,
    initiated_date: Date,
    target_exit_date: Date,
    status: &'a str,
    progress: u8,
    category: &'a str,
    task: &'a str,
    completed: bool,
    due_date: Option<Date>,
}

impl ExitSnapshot {
    pub fn new(employee: &Employee, offboarding: &Offboarding) -> Self {
        let tasks = offboarding
            .checklist
            .tasks()
            .iter()
            .map(|task| TaskSnapshot {
                category: task.category.clone(),
                name: task.name.clone(),
                completed: task.completed,
                due_date: task.due_date,
            })
            .collect();

        Self {
            employee: EmployeeSnapshot {
                id: employee.id,
                name: employee.name.clone(),
                email: employee.email.clone(),
                department: employee.department.clone(),
                position: employee.position.clone(),
                hire_date: employee.hire_date,
                status: employee.status,
            },
            offboarding: OffboardingSnapshot {
                initiated_date: offboarding.initiated_at.to_zoned(TimeZone::UTC).date(),
                target_exit_date: offboarding.target_exit_date,
                status: offboarding.status(),
                progress: offboarding.progress(),
                tasks,
            },
        }
    }

    /// Encode the snapshot in the requested format.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleError::Serialization` or `LifecycleError::Export` if
    /// encoding fails.
    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => self.to_json(),
            ExportFormat::Csv => self.to_csv(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        let department = self.employee.department.as_deref().unwrap_or("");
        for task in &self.offboarding.tasks {
            writer.serialize(CsvRow {
                employee_id: self.employee.id,
                employee_name: &self.employee.name,
                department,
                initiated_date: self.offboarding.initiated_date,
                target_exit_date: self.offboarding.target_exit_date,
                status: self.offboarding.status.as_str(),
                progress: self.offboarding.progress,
                category: task.category.as_deref().unwrap_or(""),
                task: &task.name,
                completed: task.completed,
                due_date: task.due_date,
            })?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

//! Roster summary rows.

use serde::{Deserialize, Serialize};

use super::{Employee, EmployeeStatus, Offboarding, Onboarding};

/// One roster line: an employee plus the progress of their open process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub id: u64,
    pub name: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub status: EmployeeStatus,
    pub on_payroll: bool,
    /// Progress of the onboarding or offboarding currently open, if any
    pub progress: Option<u8>,
}

impl EmployeeSummary {
    /// Build a summary, taking progress from whichever process is open.
    pub fn new(
        employee: &Employee,
        onboarding: Option<&Onboarding>,
        offboarding: Option<&Offboarding>,
    ) -> Self {
        let progress = match employee.status {
            EmployeeStatus::Onboarding => onboarding.map(Onboarding::progress),
            EmployeeStatus::Offboarding => offboarding.map(Offboarding::progress),
            EmployeeStatus::Active | EmployeeStatus::Archived => None,
        };

        Self {
            id: employee.id,
            name: employee.name.clone(),
            department: employee.department.clone(),
            position: employee.position.clone(),
            status: employee.status,
            on_payroll: employee.on_payroll,
            progress,
        }
    }
}

//! Parameter structures for lifecycle operations
//!
//! These structures are shared by every interface (the CLI today) without
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From` impls, keeping clap and friends
//! out of the core.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Tracker      │
//! │  (clap derives) │───▶│ (serde derives) │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    error::{LifecycleError, Result},
    export::ExportFormat,
    models::{OffboardingType, TaskUpdate},
};

/// Generic parameters for operations requiring just an employee ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the employee to operate on
    pub id: u64,
}

/// Parameters for adding an employee to the roster.
///
/// Unless `active` is set the employee starts in onboarding with a seeded
/// onboarding checklist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEmployee {
    /// Full name (required)
    pub name: String,
    pub email: Option<String>,
    pub department: Option<String>,
    /// Job title
    pub position: Option<String>,
    /// Basic monthly salary
    #[serde(default)]
    pub monthly_salary: Decimal,
    #[serde(default)]
    pub allowances: Decimal,
    #[serde(default)]
    pub deductions: Decimal,
    #[serde(default)]
    pub unused_leave_days: u32,
    /// First day of employment; defaults to today
    pub hire_date: Option<Date>,
    /// Import as already employed, skipping onboarding
    #[serde(default)]
    pub active: bool,
}

impl CreateEmployee {
    /// # Errors
    ///
    /// Returns `LifecycleError::InvalidInput` for a blank name or negative
    /// money amounts.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LifecycleError::invalid_input("name").with_reason("Name cannot be empty"));
        }
        for (field, amount) in [
            ("monthly_salary", self.monthly_salary),
            ("allowances", self.allowances),
            ("deductions", self.deductions),
        ] {
            if amount.is_sign_negative() && !amount.is_zero() {
                return Err(LifecycleError::invalid_input(field)
                    .with_reason("Amount cannot be negative"));
            }
        }
        Ok(())
    }
}

/// Parameters for correcting pay data on file, typically before retrying a
/// settlement that failed for lack of data. Absent fields are left as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCompensation {
    pub employee_id: u64,
    pub monthly_salary: Option<Decimal>,
    pub allowances: Option<Decimal>,
    pub deductions: Option<Decimal>,
    pub unused_leave_days: Option<u32>,
}

impl UpdateCompensation {
    /// # Errors
    ///
    /// Returns `LifecycleError::InvalidInput` for negative amounts.
    pub fn validate(&self) -> Result<()> {
        for (field, amount) in [
            ("monthly_salary", self.monthly_salary),
            ("allowances", self.allowances),
            ("deductions", self.deductions),
        ] {
            if amount.is_some_and(|a| a.is_sign_negative() && !a.is_zero()) {
                return Err(LifecycleError::invalid_input(field)
                    .with_reason("Amount cannot be negative"));
            }
        }
        Ok(())
    }
}

/// Parameters for listing the roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListEmployees {
    /// List archived employees instead of the active roster
    #[serde(default)]
    pub archived: bool,
    /// Restrict to one department
    pub department: Option<String>,
}

/// Parameters for starting an offboarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitiateOffboarding {
    pub employee_id: u64,
    pub offboarding_type: OffboardingType,
    pub reason: Option<String>,
    /// Planned last working day
    pub target_exit_date: Date,
}

/// Parameters for completing or reopening one checklist task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetTaskCompletion {
    pub employee_id: u64,
    /// Task name within the checklist
    pub task: String,
    pub completed: bool,
    /// Who made the change
    pub completed_by: Option<String>,
    pub notes: Option<String>,
}

impl From<&SetTaskCompletion> for TaskUpdate {
    fn from(params: &SetTaskCompletion) -> Self {
        TaskUpdate {
            name: params.task.clone(),
            completed: params.completed,
            completed_by: params.completed_by.clone(),
            notes: params.notes.clone(),
        }
    }
}

/// Parameters for exporting an offboarding snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOffboarding {
    pub employee_id: u64,
    pub format: ExportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_employee_validation() {
        let mut params = CreateEmployee {
            name: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(LifecycleError::InvalidInput { ref field, .. }) if field == "name"
        ));

        params.name = "Ana Souza".into();
        params.deductions = Decimal::from(-10);
        assert!(matches!(
            params.validate(),
            Err(LifecycleError::InvalidInput { ref field, .. }) if field == "deductions"
        ));

        params.deductions = Decimal::ZERO;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_task_update_conversion() {
        let params = SetTaskCompletion {
            employee_id: 2,
            task: "exit_interview".into(),
            completed: true,
            completed_by: Some("hr-admin".into()),
            notes: None,
        };
        let update = TaskUpdate::from(&params);
        assert_eq!(update, TaskUpdate::complete("exit_interview").by("hr-admin"));
    }
}

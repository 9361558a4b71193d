//! Employee model definition.

use jiff::{civil::Date, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeStatus;

/// An employee on the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    /// Unique identifier for the employee
    pub id: u64,

    /// Full name
    pub name: String,

    pub email: Option<String>,

    pub department: Option<String>,

    /// Job title
    pub position: Option<String>,

    /// Basic monthly salary
    pub monthly_salary: Decimal,

    /// Recurring monthly allowances (housing, transport, ...)
    #[serde(default)]
    pub allowances: Decimal,

    /// Outstanding deductions owed by the employee
    #[serde(default)]
    pub deductions: Decimal,

    /// Accrued leave days not yet taken
    #[serde(default)]
    pub unused_leave_days: u32,

    /// First day of employment
    pub hire_date: Date,

    /// Current employment status
    #[serde(default)]
    pub status: EmployeeStatus,

    /// Whether the employee is included in payroll runs
    pub on_payroll: bool,

    /// When the employee was archived, if ever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<Timestamp>,

    /// Timestamp when the employee was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the employee was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Employee {
    /// Whether the employee is excluded from active rosters.
    pub fn is_archived(&self) -> bool {
        self.status == EmployeeStatus::Archived
    }
}

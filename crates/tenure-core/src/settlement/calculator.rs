//! Final settlement calculation.
//!
//! The figures are a straightforward breakdown for the exit report: one
//! month's basic salary, end-of-service gratuity pro-rated by years of
//! service, encashment of untaken leave, recurring allowances, less
//! outstanding deductions. All amounts are rounded to two decimal places.

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    error::{LifecycleError, Result},
    models::{Employee, FinalSettlement},
};

/// Tunable inputs of the settlement calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementPolicy {
    /// Days of basic salary paid as gratuity per year of service
    pub gratuity_days_per_year: u32,
    /// Divisor turning a monthly salary into a daily rate
    pub days_per_month: u32,
}

impl Default for SettlementPolicy {
    fn default() -> Self {
        Self {
            gratuity_days_per_year: 21,
            days_per_month: 30,
        }
    }
}

impl SettlementPolicy {
    /// # Errors
    ///
    /// Returns `LifecycleError::Configuration` if `days_per_month` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.days_per_month == 0 {
            return Err(LifecycleError::Configuration {
                message: "days_per_month must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Computes the settlement breakdown for `employee` leaving on `exit_date`.
///
/// # Errors
///
/// Returns `LifecycleError::InvalidInput` when the employee has no salary on
/// record or the exit date precedes the hire date, and
/// `LifecycleError::Configuration` for an invalid policy.
pub fn calculate_final_settlement(
    employee: &Employee,
    policy: &SettlementPolicy,
    exit_date: Date,
) -> Result<FinalSettlement> {
    policy.validate()?;

    if employee.monthly_salary <= Decimal::ZERO {
        return Err(LifecycleError::invalid_input("monthly_salary")
            .with_reason("Insufficient data: no salary on record for settlement"));
    }
    if exit_date < employee.hire_date {
        return Err(LifecycleError::invalid_input("exit_date")
            .with_reason("Exit date is before the hire date"));
    }

    let days_served = employee
        .hire_date
        .until(exit_date)
        .map_err(|e| {
            LifecycleError::invalid_input("exit_date").with_reason(e.to_string())
        })?
        .get_days();
    let years_of_service = (Decimal::from(days_served) / Decimal::from(365)).round_dp(2);

    let daily_rate = employee.monthly_salary / Decimal::from(policy.days_per_month);
    let gratuity = in_range(
        daily_rate
            .checked_mul(Decimal::from(policy.gratuity_days_per_year))
            .and_then(|amount| amount.checked_mul(years_of_service)),
    )?
    .round_dp(2);
    let leave_encashment =
        in_range(daily_rate.checked_mul(Decimal::from(employee.unused_leave_days)))?.round_dp(2);
    let basic_salary = employee.monthly_salary.round_dp(2);
    let allowances = employee.allowances.round_dp(2);
    let deductions = employee.deductions.round_dp(2);
    let total = in_range(
        basic_salary
            .checked_add(gratuity)
            .and_then(|sum| sum.checked_add(leave_encashment))
            .and_then(|sum| sum.checked_add(allowances))
            .and_then(|sum| sum.checked_sub(deductions)),
    )?;

    Ok(FinalSettlement {
        employee_id: employee.id,
        employee_name: employee.name.clone(),
        years_of_service,
        basic_salary,
        gratuity,
        leave_encashment,
        allowances,
        deductions,
        total,
    })
}

/// Overflowing arithmetic means the amounts on file cannot be settled.
fn in_range(amount: Option<Decimal>) -> Result<Decimal> {
    amount.ok_or_else(|| {
        LifecycleError::invalid_input("monthly_salary")
            .with_reason("Amounts on record are too large to settle")
    })
}

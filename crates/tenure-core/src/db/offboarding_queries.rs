//! Offboarding record queries, checklist updates and settlement bookkeeping.

use jiff::{civil::Date, Timestamp};
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension};

use super::utils::{
    date_at, enum_at, optional_date_at, optional_enum_at, optional_timestamp_at, timestamp_at,
};
use crate::{
    error::{DatabaseResultExt, LifecycleError, Result},
    models::{
        templates, EmployeeStatus, LifecycleKind, Offboarding, OffboardingStatus,
        SettlementState, TaskUpdate,
    },
    params::InitiateOffboarding,
    progress::CompletionEdge,
    settlement::SettlementStep,
};

const INSERT_OFFBOARDING_SQL: &str = "INSERT INTO offboardings (employee_id, offboarding_type, reason, initiated_at, target_exit_date, settlement_state, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_OFFBOARDING_SQL: &str = "SELECT employee_id, offboarding_type, reason, initiated_at, target_exit_date, actual_exit_date, settlement_state, failed_step, settlement_error, settled_at, updated_at FROM offboardings WHERE employee_id = ?1";
const TOUCH_OFFBOARDING_SQL: &str =
    "UPDATE offboardings SET updated_at = ?1 WHERE employee_id = ?2";
const UPDATE_SETTLEMENT_SUCCESS_SQL: &str = "UPDATE offboardings SET settlement_state = ?1, actual_exit_date = ?2, settled_at = ?3, failed_step = NULL, settlement_error = NULL, updated_at = ?3 WHERE employee_id = ?4";
const UPDATE_SETTLEMENT_FAILURE_SQL: &str = "UPDATE offboardings SET settlement_state = ?1, failed_step = ?2, settlement_error = ?3, updated_at = ?4 WHERE employee_id = ?5";

/// Result of a checklist change on an offboarding.
#[derive(Debug, Clone)]
pub struct OffboardingChange {
    /// Derived status before the change was applied
    pub previous_status: OffboardingStatus,
    /// The record after the change
    pub record: Offboarding,
}

impl OffboardingChange {
    /// Whether the change crossed into or out of `completed`.
    pub fn edge(&self) -> CompletionEdge {
        CompletionEdge::between(self.previous_status, self.record.status())
    }

    pub fn status_changed(&self) -> bool {
        self.previous_status != self.record.status()
    }
}

impl super::Database {
    pub(super) fn find_offboarding(
        conn: &Connection,
        employee_id: u64,
    ) -> Result<Option<Offboarding>> {
        let record = conn
            .query_row(SELECT_OFFBOARDING_SQL, params![employee_id as i64], |row| {
                Ok(Offboarding {
                    employee_id: row.get::<_, i64>(0)? as u64,
                    offboarding_type: enum_at(row, 1)?,
                    reason: row.get(2)?,
                    checklist: Default::default(),
                    initiated_at: timestamp_at(row, 3)?,
                    target_exit_date: date_at(row, 4)?,
                    actual_exit_date: optional_date_at(row, 5)?,
                    settlement_state: enum_at(row, 6)?,
                    failed_step: optional_enum_at(row, 7)?,
                    settlement_error: row.get(8)?,
                    settled_at: optional_timestamp_at(row, 9)?,
                    updated_at: timestamp_at(row, 10)?,
                })
            })
            .optional()
            .db_context("Failed to query offboarding")?;

        match record {
            Some(mut record) => {
                record.checklist =
                    Self::load_checklist(conn, employee_id, LifecycleKind::Offboarding)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    fn fetch_offboarding(conn: &Connection, employee_id: u64) -> Result<Offboarding> {
        Self::ensure_employee(conn, employee_id)?;
        Self::find_offboarding(conn, employee_id)?.ok_or(LifecycleError::LifecycleNotFound {
            employee_id,
            kind: LifecycleKind::Offboarding,
        })
    }

    /// Starts an offboarding for an active employee.
    ///
    /// Seeds the categorized template checklist, every task due on the
    /// target exit date, and moves the employee to `offboarding`. Employees
    /// still onboarding, already offboarding or archived are rejected.
    pub fn initiate_offboarding(&mut self, params: &InitiateOffboarding) -> Result<Offboarding> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let employee = Self::fetch_employee(&tx, params.employee_id)?;
        if employee.status != EmployeeStatus::Active {
            return Err(LifecycleError::invalid_transition(format!(
                "Cannot start offboarding for employee {} while {}",
                employee.id,
                employee.status.as_str()
            )));
        }
        if params.target_exit_date < employee.hire_date {
            return Err(LifecycleError::invalid_input("target_exit_date")
                .with_reason("Exit date is before the hire date"));
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_OFFBOARDING_SQL,
            params![
                params.employee_id as i64,
                params.offboarding_type.as_str(),
                params.reason.as_deref(),
                &now_str,
                params.target_exit_date.to_string(),
                SettlementState::Pending.as_str(),
                &now_str
            ],
        )
        .db_context("Failed to insert offboarding")?;

        let checklist = templates::offboarding_checklist(params.target_exit_date);
        Self::insert_checklist(&tx, params.employee_id, LifecycleKind::Offboarding, &checklist)?;
        Self::write_employee_status(&tx, params.employee_id, EmployeeStatus::Offboarding, &now_str)?;

        // Reload for the task row ids
        let record = Self::fetch_offboarding(&tx, params.employee_id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        info!(
            "Offboarding initiated for employee {} ({})",
            params.employee_id,
            params.offboarding_type.as_str()
        );

        Ok(record)
    }

    /// Gets the offboarding record of an employee. Status and progress are
    /// derived from the returned checklist.
    pub fn get_offboarding(&self, employee_id: u64) -> Result<Offboarding> {
        Self::fetch_offboarding(&self.connection, employee_id)
    }

    /// Completes or reopens one offboarding task.
    ///
    /// Once the checklist is complete the record only moves through
    /// settlement, so task changes on a completed or settled offboarding
    /// fail with `LifecycleError::InvalidTransition`.
    pub fn save_task_completion(
        &mut self,
        employee_id: u64,
        update: &TaskUpdate,
    ) -> Result<OffboardingChange> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = Self::fetch_offboarding(&tx, employee_id)?;
        if current.is_settled() {
            return Err(LifecycleError::invalid_transition(format!(
                "Offboarding for employee {employee_id} is settled"
            )));
        }
        let previous_status = current.status();
        if previous_status == OffboardingStatus::Completed {
            return Err(LifecycleError::invalid_transition(format!(
                "Offboarding checklist for employee {employee_id} is completed"
            )));
        }

        let now = Timestamp::now();
        let checklist = current.checklist.apply(update, now)?;
        if let Some(task) = checklist.task(&update.name) {
            Self::write_task(&tx, employee_id, LifecycleKind::Offboarding, task)?;
        }
        tx.execute(
            TOUCH_OFFBOARDING_SQL,
            params![now.to_string(), employee_id as i64],
        )
        .db_context("Failed to update offboarding timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!(
            "Offboarding task '{}' for employee {employee_id} set to {}",
            update.name, update.completed
        );

        Ok(OffboardingChange {
            previous_status,
            record: Offboarding {
                checklist,
                updated_at: now,
                ..current
            },
        })
    }

    /// Marks settlement complete and stamps the actual exit date.
    pub fn record_settlement_success(
        &mut self,
        employee_id: u64,
        actual_exit_date: Date,
    ) -> Result<Offboarding> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                UPDATE_SETTLEMENT_SUCCESS_SQL,
                params![
                    SettlementState::Completed.as_str(),
                    actual_exit_date.to_string(),
                    &now,
                    employee_id as i64
                ],
            )
            .db_context("Failed to record settlement")?;

        self.get_offboarding(employee_id)
    }

    /// Records the step that stopped a settlement run.
    pub fn record_settlement_failure(
        &mut self,
        employee_id: u64,
        step: SettlementStep,
        message: &str,
    ) -> Result<Offboarding> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                UPDATE_SETTLEMENT_FAILURE_SQL,
                params![
                    SettlementState::Failed.as_str(),
                    step.as_str(),
                    message,
                    &now,
                    employee_id as i64
                ],
            )
            .db_context("Failed to record settlement failure")?;

        self.get_offboarding(employee_id)
    }
}

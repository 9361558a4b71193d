//! Onboarding record queries and stage transitions.

use jiff::Timestamp;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};

use super::utils::{enum_at, optional_timestamp_at, timestamp_at};
use crate::{
    error::{DatabaseResultExt, LifecycleError, Result},
    models::{templates, EmployeeStatus, LifecycleKind, Onboarding, OnboardingStage, TaskUpdate},
    progress,
};

const INSERT_ONBOARDING_SQL: &str = "INSERT INTO onboardings (employee_id, stage, initiated_at, updated_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_ONBOARDING_SQL: &str = "SELECT employee_id, stage, initiated_at, completed_at, updated_at FROM onboardings WHERE employee_id = ?1";
const UPDATE_STAGE_SQL: &str =
    "UPDATE onboardings SET stage = ?1, completed_at = ?2, updated_at = ?3 WHERE employee_id = ?4";
const TOUCH_ONBOARDING_SQL: &str = "UPDATE onboardings SET updated_at = ?1 WHERE employee_id = ?2";

impl super::Database {
    /// Creates the onboarding record and template checklist for a new hire.
    pub(super) fn seed_onboarding(conn: &Connection, employee_id: u64, now: &str) -> Result<()> {
        conn.execute(
            INSERT_ONBOARDING_SQL,
            params![
                employee_id as i64,
                OnboardingStage::NotStarted.as_str(),
                now,
                now
            ],
        )
        .db_context("Failed to insert onboarding")?;

        Self::insert_checklist(
            conn,
            employee_id,
            LifecycleKind::Onboarding,
            &templates::onboarding_checklist(),
        )
    }

    pub(super) fn find_onboarding(conn: &Connection, employee_id: u64) -> Result<Option<Onboarding>> {
        let record = conn
            .query_row(SELECT_ONBOARDING_SQL, params![employee_id as i64], |row| {
                Ok(Onboarding {
                    employee_id: row.get::<_, i64>(0)? as u64,
                    stage: enum_at(row, 1)?,
                    checklist: Default::default(),
                    initiated_at: timestamp_at(row, 2)?,
                    completed_at: optional_timestamp_at(row, 3)?,
                    updated_at: timestamp_at(row, 4)?,
                })
            })
            .optional()
            .db_context("Failed to query onboarding")?;

        match record {
            Some(mut record) => {
                record.checklist =
                    Self::load_checklist(conn, employee_id, LifecycleKind::Onboarding)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    fn fetch_onboarding(conn: &Connection, employee_id: u64) -> Result<Onboarding> {
        Self::ensure_employee(conn, employee_id)?;
        Self::find_onboarding(conn, employee_id)?.ok_or(LifecycleError::LifecycleNotFound {
            employee_id,
            kind: LifecycleKind::Onboarding,
        })
    }

    /// Gets the onboarding record of an employee with its checklist.
    pub fn get_onboarding(&self, employee_id: u64) -> Result<Onboarding> {
        Self::fetch_onboarding(&self.connection, employee_id)
    }

    /// Moves the onboarding one stage forward.
    ///
    /// Reaching `completed` stamps `completed_at` and makes the employee
    /// active. Advancing a completed onboarding fails with
    /// `LifecycleError::InvalidTransition`.
    pub fn advance_stage(&mut self, employee_id: u64) -> Result<Onboarding> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = Self::fetch_onboarding(&tx, employee_id)?;
        let stage = progress::next_stage(current.stage)?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        let completed_at = stage.is_terminal().then_some(now);

        tx.execute(
            UPDATE_STAGE_SQL,
            params![
                stage.as_str(),
                completed_at.map(|t| t.to_string()),
                &now_str,
                employee_id as i64
            ],
        )
        .db_context("Failed to update onboarding stage")?;

        if stage.is_terminal() {
            let employee = Self::fetch_employee(&tx, employee_id)?;
            if employee.status == EmployeeStatus::Onboarding {
                Self::write_employee_status(&tx, employee_id, EmployeeStatus::Active, &now_str)?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        info!(
            "Onboarding for employee {employee_id} moved from {} to {}",
            current.stage.as_str(),
            stage.as_str()
        );

        Ok(Onboarding {
            stage,
            completed_at,
            updated_at: now,
            ..current
        })
    }

    /// Completes or reopens a task on the reference onboarding checklist.
    ///
    /// The checklist does not move the stage. Completed onboardings reject
    /// task changes.
    pub fn save_onboarding_task(
        &mut self,
        employee_id: u64,
        update: &TaskUpdate,
    ) -> Result<Onboarding> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = Self::fetch_onboarding(&tx, employee_id)?;
        if current.is_completed() {
            return Err(LifecycleError::invalid_transition(format!(
                "Onboarding for employee {employee_id} is completed"
            )));
        }

        let now = Timestamp::now();
        let checklist = current.checklist.apply(update, now)?;
        if let Some(task) = checklist.task(&update.name) {
            Self::write_task(&tx, employee_id, LifecycleKind::Onboarding, task)?;
        }
        tx.execute(
            TOUCH_ONBOARDING_SQL,
            params![now.to_string(), employee_id as i64],
        )
        .db_context("Failed to update onboarding timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Onboarding {
            checklist,
            updated_at: now,
            ..current
        })
    }
}

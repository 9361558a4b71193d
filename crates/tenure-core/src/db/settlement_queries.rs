//! Settlement side effects backed by the store: archival, payroll removal
//! and exit documents.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Row};

use super::utils::{enum_at, timestamp_at, today};
use crate::{
    error::{DatabaseResultExt, LifecycleError, Result},
    models::{EmployeeStatus, ExitDocument, FinalSettlement, LifecycleKind},
    settlement::{calculate_final_settlement, documents::exit_documents, ExitSteps, SettlementPolicy},
};

const ARCHIVE_EMPLOYEE_SQL: &str = "UPDATE employees SET status = ?1, archived_at = ?2, updated_at = ?2 WHERE id = ?3 AND status != ?1";
const REMOVE_FROM_PAYROLL_SQL: &str =
    "UPDATE employees SET on_payroll = 0, updated_at = ?1 WHERE id = ?2 AND on_payroll = 1";
const UPSERT_DOCUMENT_SQL: &str = "INSERT INTO exit_documents (employee_id, kind, title, content, generated_at) VALUES (?1, ?2, ?3, ?4, ?5) ON CONFLICT(employee_id, kind) DO UPDATE SET title = excluded.title, content = excluded.content, generated_at = excluded.generated_at";
const SELECT_DOCUMENTS_SQL: &str = "SELECT employee_id, kind, title, content, generated_at FROM exit_documents WHERE employee_id = ?1 ORDER BY id";

impl super::Database {
    fn build_document_from_row(row: &Row) -> rusqlite::Result<ExitDocument> {
        Ok(ExitDocument {
            employee_id: row.get::<_, i64>(0)? as u64,
            kind: enum_at(row, 1)?,
            title: row.get(2)?,
            content: row.get(3)?,
            generated_at: timestamp_at(row, 4)?,
        })
    }

    /// Marks the employee archived. Archiving an archived employee is a
    /// no-op that keeps the original `archived_at`.
    pub fn archive_employee(&mut self, employee_id: u64) -> Result<()> {
        let now = Timestamp::now().to_string();
        let changed = self
            .connection
            .execute(
                ARCHIVE_EMPLOYEE_SQL,
                params![EmployeeStatus::Archived.as_str(), &now, employee_id as i64],
            )
            .db_context("Failed to archive employee")?;

        if changed == 0 {
            Self::ensure_employee(&self.connection, employee_id)?;
            debug!("Employee {employee_id} already archived");
        }
        Ok(())
    }

    /// Excludes the employee from payroll. Idempotent.
    pub fn remove_from_payroll(&mut self, employee_id: u64) -> Result<()> {
        let now = Timestamp::now().to_string();
        let changed = self
            .connection
            .execute(REMOVE_FROM_PAYROLL_SQL, params![&now, employee_id as i64])
            .db_context("Failed to remove employee from payroll")?;

        if changed == 0 {
            Self::ensure_employee(&self.connection, employee_id)?;
            debug!("Employee {employee_id} already off payroll");
        }
        Ok(())
    }

    /// Computes the settlement breakdown as of the offboarding's target exit
    /// date, or today when the employee has no offboarding. Read-only.
    pub fn final_settlement(
        &self,
        employee_id: u64,
        policy: &SettlementPolicy,
    ) -> Result<FinalSettlement> {
        let employee = Self::fetch_employee(&self.connection, employee_id)?;
        let exit_date = Self::find_offboarding(&self.connection, employee_id)?
            .map(|record| record.target_exit_date)
            .unwrap_or_else(today);

        calculate_final_settlement(&employee, policy, exit_date)
    }

    /// Generates and stores the exit documents, replacing earlier copies of
    /// the same kind.
    pub fn generate_final_documents(
        &mut self,
        employee_id: u64,
        policy: &SettlementPolicy,
    ) -> Result<Vec<ExitDocument>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let employee = Self::fetch_employee(&tx, employee_id)?;
        let record = Self::find_offboarding(&tx, employee_id)?.ok_or(
            LifecycleError::LifecycleNotFound {
                employee_id,
                kind: LifecycleKind::Offboarding,
            },
        )?;
        let settlement = calculate_final_settlement(&employee, policy, record.target_exit_date)?;
        let documents = exit_documents(
            &employee,
            &settlement,
            record.target_exit_date,
            Timestamp::now(),
        );

        for document in &documents {
            tx.execute(
                UPSERT_DOCUMENT_SQL,
                params![
                    employee_id as i64,
                    document.kind.as_str(),
                    &document.title,
                    &document.content,
                    document.generated_at.to_string()
                ],
            )
            .db_context("Failed to store exit document")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(documents)
    }

    /// Lists the stored exit documents of an employee.
    pub fn get_documents(&self, employee_id: u64) -> Result<Vec<ExitDocument>> {
        Self::ensure_employee(&self.connection, employee_id)?;

        let mut stmt = self
            .connection
            .prepare(SELECT_DOCUMENTS_SQL)
            .db_context("Failed to prepare document query")?;
        let documents = stmt
            .query_map(params![employee_id as i64], Self::build_document_from_row)
            .db_context("Failed to query documents")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read document rows")?;

        Ok(documents)
    }
}

/// [`ExitSteps`] implemented directly against the store.
pub struct StoreSteps<'a> {
    db: &'a mut super::Database,
    policy: &'a SettlementPolicy,
}

impl<'a> StoreSteps<'a> {
    pub fn new(db: &'a mut super::Database, policy: &'a SettlementPolicy) -> Self {
        Self { db, policy }
    }
}

impl ExitSteps for StoreSteps<'_> {
    fn archive_employee(&mut self, employee_id: u64) -> Result<()> {
        self.db.archive_employee(employee_id)
    }

    fn remove_from_payroll(&mut self, employee_id: u64) -> Result<()> {
        self.db.remove_from_payroll(employee_id)
    }

    fn generate_final_documents(&mut self, employee_id: u64) -> Result<Vec<ExitDocument>> {
        self.db.generate_final_documents(employee_id, self.policy)
    }
}

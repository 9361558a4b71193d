//! Checklist task storage shared by onboarding and offboarding records.
//!
//! Tasks are keyed by `(employee_id, kind, name)` and kept in template order
//! through `task_order`.

use rusqlite::{params, Connection, Row};

use super::utils::{optional_date_at, optional_timestamp_at};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Checklist, LifecycleKind, Task},
};

const SELECT_TASKS_SQL: &str = "SELECT id, name, category, completed, completed_at, completed_by, due_date, notes FROM lifecycle_tasks WHERE employee_id = ?1 AND kind = ?2 ORDER BY task_order";
const INSERT_TASK_SQL: &str = "INSERT INTO lifecycle_tasks (employee_id, kind, name, category, task_order, completed, completed_at, completed_by, due_date, notes) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const UPDATE_TASK_SQL: &str = "UPDATE lifecycle_tasks SET completed = ?1, completed_at = ?2, completed_by = ?3, notes = ?4 WHERE employee_id = ?5 AND kind = ?6 AND name = ?7";

impl super::Database {
    fn build_task_from_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: Some(row.get::<_, i64>(0)? as u64),
            name: row.get(1)?,
            category: row.get(2)?,
            completed: row.get(3)?,
            completed_at: optional_timestamp_at(row, 4)?,
            completed_by: row.get(5)?,
            due_date: optional_date_at(row, 6)?,
            notes: row.get(7)?,
        })
    }

    /// Loads the checklist of one lifecycle record in display order.
    pub(super) fn load_checklist(
        conn: &Connection,
        employee_id: u64,
        kind: LifecycleKind,
    ) -> Result<Checklist> {
        let mut stmt = conn
            .prepare(SELECT_TASKS_SQL)
            .db_context("Failed to prepare task query")?;
        let tasks = stmt
            .query_map(params![employee_id as i64, kind.as_str()], Self::build_task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read task rows")?;

        Checklist::new(tasks)
    }

    /// Seeds the checklist of a newly initiated lifecycle record.
    pub(super) fn insert_checklist(
        conn: &Connection,
        employee_id: u64,
        kind: LifecycleKind,
        checklist: &Checklist,
    ) -> Result<()> {
        let mut stmt = conn
            .prepare(INSERT_TASK_SQL)
            .db_context("Failed to prepare task insert")?;
        for (order, task) in checklist.tasks().iter().enumerate() {
            stmt.execute(params![
                employee_id as i64,
                kind.as_str(),
                &task.name,
                task.category.as_deref(),
                order as i64,
                task.completed,
                task.completed_at.map(|t| t.to_string()),
                task.completed_by.as_deref(),
                task.due_date.map(|d| d.to_string()),
                task.notes.as_deref(),
            ])
            .db_context("Failed to insert task")?;
        }
        Ok(())
    }

    /// Writes the completion fields of one task back to the store.
    pub(super) fn write_task(
        conn: &Connection,
        employee_id: u64,
        kind: LifecycleKind,
        task: &Task,
    ) -> Result<()> {
        conn.execute(
            UPDATE_TASK_SQL,
            params![
                task.completed,
                task.completed_at.map(|t| t.to_string()),
                task.completed_by.as_deref(),
                task.notes.as_deref(),
                employee_id as i64,
                kind.as_str(),
                &task.name,
            ],
        )
        .db_context("Failed to update task")?;
        Ok(())
    }
}

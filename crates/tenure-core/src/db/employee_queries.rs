//! Employee CRUD operations and roster queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::utils::{date_at, decimal_at, enum_at, optional_timestamp_at, timestamp_at, today};
use crate::{
    error::{DatabaseResultExt, LifecycleError, Result},
    models::{Employee, EmployeeFilter, EmployeeStatus, EmployeeSummary},
    params::{CreateEmployee, UpdateCompensation},
};

const EMPLOYEE_COLUMNS: &str = "id, name, email, department, position, monthly_salary, allowances, deductions, unused_leave_days, hire_date, status, on_payroll, archived_at, created_at, updated_at";
const INSERT_EMPLOYEE_SQL: &str = "INSERT INTO employees (name, email, department, position, monthly_salary, allowances, deductions, unused_leave_days, hire_date, status, on_payroll, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, 1, ?11, ?12)";
const CHECK_EMPLOYEE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM employees WHERE id = ?1)";
const UPDATE_EMPLOYEE_STATUS_SQL: &str =
    "UPDATE employees SET status = ?1, updated_at = ?2 WHERE id = ?3";
const UPDATE_COMPENSATION_SQL: &str = "UPDATE employees SET monthly_salary = ?1, allowances = ?2, deductions = ?3, unused_leave_days = ?4, updated_at = ?5 WHERE id = ?6";

impl super::Database {
    fn build_employee_from_row(row: &Row) -> rusqlite::Result<Employee> {
        Ok(Employee {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            email: row.get(2)?,
            department: row.get(3)?,
            position: row.get(4)?,
            monthly_salary: decimal_at(row, 5)?,
            allowances: decimal_at(row, 6)?,
            deductions: decimal_at(row, 7)?,
            unused_leave_days: row.get::<_, i64>(8)? as u32,
            hire_date: date_at(row, 9)?,
            status: enum_at(row, 10)?,
            on_payroll: row.get(11)?,
            archived_at: optional_timestamp_at(row, 12)?,
            created_at: timestamp_at(row, 13)?,
            updated_at: timestamp_at(row, 14)?,
        })
    }

    /// Loads one employee, failing with `EmployeeNotFound` if absent.
    pub(super) fn fetch_employee(conn: &Connection, id: u64) -> Result<Employee> {
        conn.query_row(
            &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?1"),
            params![id as i64],
            Self::build_employee_from_row,
        )
        .optional()
        .db_context("Failed to query employee")?
        .ok_or(LifecycleError::EmployeeNotFound { id })
    }

    pub(super) fn ensure_employee(conn: &Connection, id: u64) -> Result<()> {
        let exists: bool = conn
            .query_row(CHECK_EMPLOYEE_EXISTS_SQL, params![id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check employee existence")?;
        if exists {
            Ok(())
        } else {
            Err(LifecycleError::EmployeeNotFound { id })
        }
    }

    pub(super) fn write_employee_status(
        conn: &Connection,
        id: u64,
        status: EmployeeStatus,
        now: &str,
    ) -> Result<()> {
        conn.execute(
            UPDATE_EMPLOYEE_STATUS_SQL,
            params![status.as_str(), now, id as i64],
        )
        .db_context("Failed to update employee status")?;
        Ok(())
    }

    /// Adds an employee to the roster.
    ///
    /// New hires start in onboarding and get an onboarding record with the
    /// template checklist in the same transaction. With `active` set the
    /// employee is imported as already employed and no onboarding is seeded.
    pub fn create_employee(&mut self, params: &CreateEmployee) -> Result<Employee> {
        params.validate()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        let hire_date = params.hire_date.unwrap_or_else(today);
        let status = if params.active {
            EmployeeStatus::Active
        } else {
            EmployeeStatus::Onboarding
        };

        tx.execute(
            INSERT_EMPLOYEE_SQL,
            params![
                params.name.trim(),
                params.email.as_deref(),
                params.department.as_deref(),
                params.position.as_deref(),
                params.monthly_salary.to_string(),
                params.allowances.to_string(),
                params.deductions.to_string(),
                params.unused_leave_days as i64,
                hire_date.to_string(),
                status.as_str(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert employee")?;

        let id = tx.last_insert_rowid() as u64;

        if status == EmployeeStatus::Onboarding {
            Self::seed_onboarding(&tx, id, &now_str)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Created employee {id} with status {}", status.as_str());

        Ok(Employee {
            id,
            name: params.name.trim().to_string(),
            email: params.email.clone(),
            department: params.department.clone(),
            position: params.position.clone(),
            monthly_salary: params.monthly_salary,
            allowances: params.allowances,
            deductions: params.deductions,
            unused_leave_days: params.unused_leave_days,
            hire_date,
            status,
            on_payroll: true,
            archived_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Gets an employee by ID.
    pub fn get_employee(&self, id: u64) -> Result<Employee> {
        Self::fetch_employee(&self.connection, id)
    }

    /// Lists employees with optional filtering. Archived employees are
    /// excluded unless the filter asks for them.
    pub fn list_employees(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>> {
        let mut query = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if !filter.include_archived {
            conditions.push("status != 'archived'".to_string());
        }

        if let Some(status) = filter.status {
            params_vec.push(Box::new(status.as_str()));
            conditions.push(format!("status = ?{}", params_vec.len()));
        }

        if let Some(department) = &filter.department {
            params_vec.push(Box::new(department.clone()));
            conditions.push(format!("department = ?{}", params_vec.len()));
        }

        if let Some(name) = &filter.name_contains {
            params_vec.push(Box::new(format!("%{}%", name.to_lowercase())));
            conditions.push(format!("LOWER(name) LIKE ?{}", params_vec.len()));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare employee query")?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|p| p.as_ref()).collect();
        let employees = stmt
            .query_map(param_refs.as_slice(), Self::build_employee_from_row)
            .db_context("Failed to query employees")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read employee rows")?;

        Ok(employees)
    }

    /// Roster rows with the progress of each employee's open process.
    pub fn list_summaries(&self, filter: &EmployeeFilter) -> Result<Vec<EmployeeSummary>> {
        self.list_employees(filter)?
            .iter()
            .map(|employee| {
                let onboarding = match employee.status {
                    EmployeeStatus::Onboarding => {
                        Self::find_onboarding(&self.connection, employee.id)?
                    }
                    _ => None,
                };
                let offboarding = match employee.status {
                    EmployeeStatus::Offboarding => {
                        Self::find_offboarding(&self.connection, employee.id)?
                    }
                    _ => None,
                };
                Ok(EmployeeSummary::new(
                    employee,
                    onboarding.as_ref(),
                    offboarding.as_ref(),
                ))
            })
            .collect()
    }

    /// Corrects pay data on file. Allowed for archived employees so a
    /// settlement that failed on missing data can be retried.
    pub fn update_compensation(&mut self, params: &UpdateCompensation) -> Result<Employee> {
        params.validate()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = Self::fetch_employee(&tx, params.employee_id)?;

        let now = Timestamp::now();
        let updated = Employee {
            monthly_salary: params.monthly_salary.unwrap_or(current.monthly_salary),
            allowances: params.allowances.unwrap_or(current.allowances),
            deductions: params.deductions.unwrap_or(current.deductions),
            unused_leave_days: params.unused_leave_days.unwrap_or(current.unused_leave_days),
            updated_at: now,
            ..current
        };

        tx.execute(
            UPDATE_COMPENSATION_SQL,
            params![
                updated.monthly_salary.to_string(),
                updated.allowances.to_string(),
                updated.deductions.to_string(),
                updated.unused_leave_days as i64,
                now.to_string(),
                params.employee_id as i64
            ],
        )
        .db_context("Failed to update compensation")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(updated)
    }
}

//! Database operations and SQLite management for employees and their
//! lifecycle records.
//!
//! This module stands in for the document store behind the REST API. It
//! handles connections and schema management and provides query interfaces
//! grouped by record: employees, onboardings, offboardings, checklist tasks
//! and settlement documents.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod employee_queries;
pub mod migrations;
pub mod offboarding_queries;
pub mod onboarding_queries;
pub mod settlement_queries;
pub mod task_queries;
pub mod utils;

pub use offboarding_queries::OffboardingChange;
pub use settlement_queries::StoreSteps;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

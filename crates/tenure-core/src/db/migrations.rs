//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply additive migrations for databases created by older versions.
    fn apply_migrations(&self) -> Result<()> {
        // Task notes arrived after the first release
        if !self.has_column("lifecycle_tasks", "notes")? {
            self.connection
                .execute("ALTER TABLE lifecycle_tasks ADD COLUMN notes TEXT", [])
                .db_context("Failed to add notes column to lifecycle_tasks table")?;
        }

        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect table columns")
    }
}

#[cfg(test)]
mod tests {
    use super::super::Database;

    #[test]
    fn test_schema_is_reentrant() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("schema.db");

        Database::new(&path).expect("First open");
        let db = Database::new(&path).expect("Second open");

        assert!(db
            .has_column("lifecycle_tasks", "notes")
            .expect("Column lookup"));
    }
}

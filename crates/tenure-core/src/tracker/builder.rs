//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{LifecycleError, Result},
    events::{EventBus, DEFAULT_EVENT_CAPACITY},
    settlement::SettlementPolicy,
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    policy: SettlementPolicy,
    event_capacity: usize,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            policy: SettlementPolicy::default(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tenure/tenure.db` or `~/.local/share/tenure/tenure.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the policy used for settlement figures and documents.
    pub fn with_settlement_policy(mut self, policy: SettlementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets how many events a slow subscriber may fall behind by.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleError::Configuration` for an invalid settlement policy,
    /// `LifecycleError::FileSystem` if the database directory cannot be
    /// created, and `LifecycleError::Database` if initialization fails.
    pub async fn build(self) -> Result<Tracker> {
        self.policy.validate()?;

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| LifecycleError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), LifecycleError>(())
        })
        .await
        .map_err(|e| LifecycleError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Tracker::new(
            db_path,
            self.policy,
            EventBus::new(self.event_capacity),
        ))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tenure")
            .place_data_file("tenure.db")
            .map_err(|e| LifecycleError::XdgDirectory(e.to_string()))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

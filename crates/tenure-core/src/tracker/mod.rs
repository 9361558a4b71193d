//! High-level tracker API over employees and their lifecycle records.
//!
//! [`Tracker`] is the async facade every interface talks to. Each call opens
//! a fresh [`Database`] connection on the blocking pool, performs one
//! transaction-sized unit of work and publishes the matching
//! [`LifecycleEvent`] once it has committed.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interfaces    │    │    Tracker      │    │    Database     │
//! │  (CLI, tests)   │───▶│ (*_ops modules) │───▶│   (via db/)     │
//! └─────────────────┘    └────────┬────────┘    └─────────────────┘
//!                                 │ publish
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │    EventBus     │
//!                        └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configures database path, settlement policy and event
//!   capacity
//! - [`employee_ops`]: roster operations
//! - [`onboarding_ops`]: stage advancement and reference checklist
//! - [`offboarding_ops`]: checklist-driven offboarding and settlement runs
//! - [`settlement_ops`]: settlement figures, documents and exports
//!
//! # Examples
//!
//! ```rust,no_run
//! use tenure_core::{params::{CreateEmployee, Id}, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path("/tmp/tenure.db")
//!     .build()
//!     .await?;
//! let mut events = tracker.subscribe();
//!
//! let employee = tracker
//!     .create_employee(&CreateEmployee {
//!         name: "Ana Souza".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! let onboarding = tracker.advance_stage(&Id { id: employee.id }).await?;
//! assert_eq!(onboarding.progress(), 20);
//! println!("{:?}", events.recv().await?);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::{sync::broadcast, task};

use crate::{
    db::Database,
    error::{LifecycleError, Result},
    events::{EventBus, LifecycleEvent},
    settlement::SettlementPolicy,
};

pub mod builder;
pub mod employee_ops;
pub mod offboarding_ops;
pub mod onboarding_ops;
pub mod settlement_ops;


pub use builder::TrackerBuilder;
pub use offboarding_ops::{OffboardingUpdate, SettlementOutcome};

/// Main tracker interface for employee lifecycles.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) policy: SettlementPolicy,
    events: EventBus,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf, policy: SettlementPolicy, events: EventBus) -> Self {
        Self {
            db_path,
            policy,
            events,
        }
    }

    /// Subscribes to lifecycle events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<LifecycleEvent> {
        self.events.subscribe()
    }

    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    pub(crate) fn publish(&self, event: LifecycleEvent) {
        self.events.publish(event);
    }

    /// Runs `work` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, work: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            work(&mut db)
        })
        .await
        .map_err(|e| LifecycleError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

//! Core library for the Tenure employee lifecycle tracker.
//!
//! Tenure tracks two processes per employee. Onboarding moves through a fixed
//! sequence of stages, one explicit command at a time. Offboarding is driven
//! by its categorized checklist: once every task is complete, the employee is
//! archived, removed from payroll and their exit documents are generated.
//!
//! # Crate layout
//!
//! - [`models`]: employees, lifecycle records, checklists and tasks
//! - [`progress`]: the single home of progress and status arithmetic
//! - [`settlement`]: the completion sequence and final settlement figures
//! - [`db`]: SQLite persistence
//! - [`tracker`]: the async facade every interface uses
//! - [`events`]: lifecycle notifications for subscribed views
//! - [`view`]: optimistic checklist state for interactive clients
//! - [`display`] and [`export`]: markdown rendering and JSON/CSV snapshots
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jiff::civil::date;
//! use tenure_core::{
//!     models::OffboardingType,
//!     params::{CreateEmployee, InitiateOffboarding, SetTaskCompletion},
//!     TrackerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path("tenure.db")
//!     .build()
//!     .await?;
//!
//! let employee = tracker
//!     .create_employee(&CreateEmployee {
//!         name: "Lena Ortiz".to_string(),
//!         active: true,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! tracker
//!     .initiate_offboarding(&InitiateOffboarding {
//!         employee_id: employee.id,
//!         offboarding_type: OffboardingType::Retirement,
//!         reason: None,
//!         target_exit_date: date(2026, 12, 31),
//!     })
//!     .await?;
//!
//! let update = tracker
//!     .set_offboarding_task(&SetTaskCompletion {
//!         employee_id: employee.id,
//!         task: "exit_interview".to_string(),
//!         completed: true,
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{}", update.record);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod events;
pub mod export;
pub mod models;
pub mod params;
pub mod progress;
pub mod settlement;
pub mod tracker;
pub mod view;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, EmployeeSummaries, ExitDocuments, OperationStatus, ProgressBar, UpdateResult,
};
pub use error::{LifecycleError, Result};
pub use events::{EventBus, LifecycleEvent};
pub use export::{ExitSnapshot, ExportFormat};
pub use models::{
    Checklist, Employee, EmployeeStatus, EmployeeSummary, ExitDocument, FinalSettlement,
    Offboarding, OffboardingStatus, OffboardingType, Onboarding, OnboardingStage, Task,
    TaskUpdate,
};
pub use settlement::{SettlementPolicy, SettlementStep};
pub use tracker::{OffboardingUpdate, SettlementOutcome, Tracker, TrackerBuilder};
pub use view::{OptimisticChecklist, Settled};

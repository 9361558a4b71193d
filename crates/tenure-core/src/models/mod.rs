//! Data models for employees and their lifecycle records.
//!
//! Display implementations for these models live in
//! [`crate::display::models`]; derived values (progress, offboarding status)
//! come from [`crate::progress`] so every caller shares one computation.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use tenure_core::models::{Checklist, OffboardingStatus, Task};
//! use tenure_core::progress::derive_status;
//!
//! let checklist = Checklist::new(vec![
//!     Task::new("exit_interview").in_category("documentation"),
//!     Task::new("equipment_return").in_category("assets"),
//! ])?;
//! let checklist = checklist.set_task_completed("exit_interview", true, Timestamp::now())?;
//!
//! assert_eq!(checklist.progress(), 50);
//! assert_eq!(derive_status(&checklist), OffboardingStatus::InProgress);
//! # Ok::<(), tenure_core::LifecycleError>(())
//! ```

pub mod checklist;
pub mod employee;
pub mod filters;
pub mod lifecycle;
pub mod requests;
pub mod settlement;
pub mod status;
pub mod summary;
pub mod task;
pub mod templates;

#[cfg(test)]
mod tests;

pub use checklist::Checklist;
pub use employee::Employee;
pub use filters::EmployeeFilter;
pub use lifecycle::{Offboarding, Onboarding};
pub use requests::TaskUpdate;
pub use settlement::{DocumentKind, ExitDocument, FinalSettlement};
pub use status::{
    EmployeeStatus, LifecycleKind, OffboardingStatus, OffboardingType, OnboardingStage,
    SettlementState,
};
pub use summary::EmployeeSummary;
pub use task::Task;

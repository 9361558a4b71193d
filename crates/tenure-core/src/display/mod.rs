//! Markdown presentation of models and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation outcomes are wrapped in newtypes so every interface renders
//! them the same way.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │    Markdown     │
//! │ (Employee, ...) │───▶│ Result Types    │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: roster and document lists
//! - [`results`]: create and update outcomes
//! - [`status`]: confirmation messages and progress bars
//! - [`datetime`]: local time formatting
//!
//! # Examples
//!
//! ```rust
//! use tenure_core::display::{OperationStatus, ProgressBar};
//!
//! assert_eq!(ProgressBar(40).to_string(), "[████░░░░░░] 40%");
//!
//! let status = OperationStatus::failure("Settlement step 'archive' failed".to_string());
//! assert!(status.to_string().starts_with("Error:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{EmployeeSummaries, ExitDocuments};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, UpdateResult};
pub use status::{OperationStatus, ProgressBar};

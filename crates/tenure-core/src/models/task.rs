//! Task model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

/// An atomic unit of work within one lifecycle checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Row identifier assigned by the store, if persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Name of the task, unique within its checklist
    pub name: String,

    /// Grouping used by offboarding checklists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Whether the task has been completed
    pub completed: bool,

    /// When the task was completed; set exactly when `completed` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// Who completed the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,

    /// Date the task should be done by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,

    /// Free-form notes recorded with the latest completion change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Task {
    /// Create a new, incomplete task.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: None,
            completed: false,
            completed_at: None,
            completed_by: None,
            due_date: None,
            notes: None,
        }
    }

    /// Set the task's category.
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the task's due date.
    pub fn due_on(mut self, due_date: Option<Date>) -> Self {
        self.due_date = due_date;
        self
    }
}

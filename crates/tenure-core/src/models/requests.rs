//! Request types for mutating models.

/// A single "set completed" change for one checklist task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub name: String,
    pub completed: bool,
    pub completed_by: Option<String>,
    pub notes: Option<String>,
}

impl TaskUpdate {
    /// Mark the named task complete.
    pub fn complete(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: true,
            ..Default::default()
        }
    }

    /// Mark the named task incomplete.
    pub fn undo(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
            ..Default::default()
        }
    }

    /// Record who made the change.
    pub fn by(mut self, who: impl Into<String>) -> Self {
        self.completed_by = Some(who.into());
        self
    }

    /// Attach notes to the change.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

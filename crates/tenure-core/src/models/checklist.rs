//! Checklist of tasks owned by a lifecycle record.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Task, TaskUpdate};
use crate::{
    error::{LifecycleError, Result},
    progress,
};

/// An ordered sequence of tasks with name-unique entries.
///
/// Deserialization goes through [`Checklist::new`], so duplicate names are
/// rejected there too.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<Task>", into = "Vec<Task>")]
pub struct Checklist {
    tasks: Vec<Task>,
}

impl TryFrom<Vec<Task>> for Checklist {
    type Error = LifecycleError;

    fn try_from(tasks: Vec<Task>) -> Result<Self> {
        Self::new(tasks)
    }
}

impl From<Checklist> for Vec<Task> {
    fn from(checklist: Checklist) -> Self {
        checklist.tasks
    }
}

impl Checklist {
    /// Build a checklist from tasks in display order.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleError::InvalidInput` if two tasks share a name.
    pub fn new(tasks: Vec<Task>) -> Result<Self> {
        for (i, task) in tasks.iter().enumerate() {
            if tasks[..i].iter().any(|other| other.name == task.name) {
                return Err(LifecycleError::invalid_input("tasks")
                    .with_reason(format!("Duplicate task name '{}'", task.name)));
            }
        }
        Ok(Self { tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.name == name)
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Percentage of completed tasks, see [`progress::compute_checklist_progress`].
    pub fn progress(&self) -> u8 {
        progress::compute_checklist_progress(self)
    }

    /// Returns a copy of the checklist with one task's completion flag set.
    ///
    /// Completing an already completed task keeps its original timestamp, so
    /// applying the same change twice yields the same checklist. Undoing a
    /// task clears `completed_at` and `completed_by`.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleError::TaskNotFound` if no task has that name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::Timestamp;
    /// use tenure_core::models::{Checklist, Task};
    ///
    /// let checklist = Checklist::new(vec![
    ///     Task::new("exit_interview"),
    ///     Task::new("equipment_return"),
    /// ])?;
    /// let updated = checklist.set_task_completed("exit_interview", true, Timestamp::now())?;
    /// assert_eq!(updated.progress(), 50);
    /// assert_eq!(checklist.progress(), 0);
    /// # Ok::<(), tenure_core::LifecycleError>(())
    /// ```
    pub fn set_task_completed(&self, name: &str, completed: bool, at: Timestamp) -> Result<Self> {
        let update = TaskUpdate {
            name: name.to_string(),
            completed,
            ..Default::default()
        };
        self.apply(&update, at)
    }

    /// Applies a full [`TaskUpdate`], including completer and notes.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleError::TaskNotFound` if no task has that name.
    pub fn apply(&self, update: &TaskUpdate, at: Timestamp) -> Result<Self> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.name == update.name)
            .ok_or_else(|| LifecycleError::TaskNotFound {
                name: update.name.clone(),
            })?;

        let mut tasks = self.tasks.clone();
        let task = &mut tasks[index];
        match (task.completed, update.completed) {
            (false, true) => {
                task.completed = true;
                task.completed_at = Some(at);
                task.completed_by = update.completed_by.clone();
            }
            (true, true) => {
                if task.completed_by.is_none() {
                    task.completed_by = update.completed_by.clone();
                }
            }
            (_, false) => {
                task.completed = false;
                task.completed_at = None;
                task.completed_by = None;
            }
        }
        if update.notes.is_some() {
            task.notes = update.notes.clone();
        }

        Ok(Self { tasks })
    }

    /// Tasks grouped by category, preserving first-seen category order.
    pub fn by_category(&self) -> Vec<(Option<&str>, Vec<&Task>)> {
        let mut groups: Vec<(Option<&str>, Vec<&Task>)> = Vec::new();
        for task in &self.tasks {
            let category = task.category.as_deref();
            match groups.iter_mut().find(|(name, _)| *name == category) {
                Some((_, members)) => members.push(task),
                None => groups.push((category, vec![task])),
            }
        }
        groups
    }
}

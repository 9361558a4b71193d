//! Local checklist state with optimistic updates.
//!
//! A view applies a task change locally before the store confirms it, then
//! settles against the store's answer: the authoritative checklist replaces
//! the optimistic one on success, and the last confirmed checklist is
//! restored on failure. The revert path is a single match arm on the
//! store's `Result`.

use jiff::Timestamp;

use crate::{
    error::{LifecycleError, Result},
    models::{Checklist, TaskUpdate},
};

/// Checklist state as seen by one client.
#[derive(Debug, Clone)]
pub struct OptimisticChecklist {
    confirmed: Checklist,
    pending: Option<Checklist>,
}

/// How a pending optimistic change was resolved.
#[derive(Debug)]
pub enum Settled {
    /// The store accepted the change; its checklist is now current
    Confirmed,
    /// The store rejected the change; the previous checklist was restored
    Reverted(LifecycleError),
}

impl OptimisticChecklist {
    pub fn new(confirmed: Checklist) -> Self {
        Self {
            confirmed,
            pending: None,
        }
    }

    /// The checklist to render: the optimistic one while a change is pending.
    pub fn current(&self) -> &Checklist {
        self.pending.as_ref().unwrap_or(&self.confirmed)
    }

    /// The last checklist the store confirmed.
    pub fn confirmed(&self) -> &Checklist {
        &self.confirmed
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Applies `update` locally ahead of the store.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleError::TaskNotFound` without changing the view if the
    /// task does not exist locally.
    pub fn apply(&mut self, update: &TaskUpdate, at: Timestamp) -> Result<&Checklist> {
        let next = self.current().apply(update, at)?;
        let pending = self.pending.insert(next);
        Ok(&*pending)
    }

    /// Resolves the pending change with the store's outcome.
    pub fn settle(&mut self, outcome: Result<Checklist>) -> Settled {
        self.pending = None;
        match outcome {
            Ok(authoritative) => {
                self.confirmed = authoritative;
                Settled::Confirmed
            }
            Err(error) => Settled::Reverted(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn view() -> OptimisticChecklist {
        OptimisticChecklist::new(
            Checklist::new(vec![Task::new("exit_interview"), Task::new("equipment_return")])
                .expect("unique names"),
        )
    }

    #[test]
    fn test_optimistic_then_confirmed() {
        let mut view = view();
        let now = Timestamp::now();

        let shown = view
            .apply(&TaskUpdate::complete("exit_interview"), now)
            .expect("Task should exist")
            .progress();
        assert_eq!(shown, 50);
        assert!(view.is_pending());
        assert_eq!(view.confirmed().progress(), 0);

        let from_store = view.current().clone();
        assert!(matches!(view.settle(Ok(from_store)), Settled::Confirmed));
        assert!(!view.is_pending());
        assert_eq!(view.current().progress(), 50);
    }

    #[test]
    fn test_failure_reverts_to_confirmed() {
        let mut view = view();
        view.apply(&TaskUpdate::complete("equipment_return"), Timestamp::now())
            .expect("Task should exist");

        let settled = view.settle(Err(LifecycleError::PermissionDenied {
            action: "update offboarding task".into(),
        }));

        assert!(matches!(
            settled,
            Settled::Reverted(LifecycleError::PermissionDenied { .. })
        ));
        assert_eq!(view.current().progress(), 0);
        assert!(!view.current().tasks()[1].completed);
    }

    #[test]
    fn test_unknown_task_leaves_view_untouched() {
        let mut view = view();
        assert!(view
            .apply(&TaskUpdate::complete("badge_return"), Timestamp::now())
            .is_err());
        assert!(!view.is_pending());
    }
}

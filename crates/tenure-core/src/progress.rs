//! Progress, stage and status evaluation.
//!
//! Two progress sources exist and are kept apart on purpose:
//!
//! - [`progress_for_stage`]: the fixed onboarding stage table, authoritative
//!   for onboarding.
//! - [`compute_checklist_progress`]: the completed/total task ratio,
//!   authoritative for offboarding.
//!
//! Onboarding moves only through [`next_stage`], invoked by an explicit
//! command. Offboarding status is [`derive_status`] of the checklist,
//! re-evaluated on every change rather than tracked incrementally.

use crate::{
    error::{LifecycleError, Result},
    models::{Checklist, OffboardingStatus, OnboardingStage},
};

/// Percentage of completed tasks, rounded half up; `0` for an empty checklist.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use tenure_core::{models::{Checklist, Task}, progress::compute_checklist_progress};
///
/// let checklist = Checklist::new(vec![Task::new("a"), Task::new("b"), Task::new("c")])?;
/// let checklist = checklist.set_task_completed("a", true, Timestamp::now())?;
/// assert_eq!(compute_checklist_progress(&checklist), 33);
///
/// let checklist = checklist.set_task_completed("b", true, Timestamp::now())?;
/// assert_eq!(compute_checklist_progress(&checklist), 67);
/// # Ok::<(), tenure_core::LifecycleError>(())
/// ```
pub fn compute_checklist_progress(checklist: &Checklist) -> u8 {
    ratio_percent(checklist.completed_count(), checklist.total_count())
}

fn ratio_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    // round(100 * c / t) with halves rounded up, in integers
    ((200 * completed + total) / (2 * total)) as u8
}

/// Fixed onboarding percentage for a stage.
pub fn progress_for_stage(stage: OnboardingStage) -> u8 {
    match stage {
        OnboardingStage::NotStarted => 0,
        OnboardingStage::ContractStage => 20,
        OnboardingStage::DocumentationStage => 40,
        OnboardingStage::ItSetupStage => 60,
        OnboardingStage::TrainingStage => 80,
        OnboardingStage::Completed => 100,
    }
}

/// The stage that follows `stage`.
///
/// # Errors
///
/// Returns `LifecycleError::InvalidTransition` for `completed`, which has no
/// successor.
///
/// # Examples
///
/// ```rust
/// use tenure_core::{models::OnboardingStage, progress::{next_stage, progress_for_stage}};
///
/// let stage = next_stage(OnboardingStage::NotStarted)?;
/// assert_eq!(stage, OnboardingStage::ContractStage);
/// assert_eq!(progress_for_stage(stage), 20);
/// assert!(next_stage(OnboardingStage::Completed).is_err());
/// # Ok::<(), tenure_core::LifecycleError>(())
/// ```
pub fn next_stage(stage: OnboardingStage) -> Result<OnboardingStage> {
    match stage {
        OnboardingStage::NotStarted => Ok(OnboardingStage::ContractStage),
        OnboardingStage::ContractStage => Ok(OnboardingStage::DocumentationStage),
        OnboardingStage::DocumentationStage => Ok(OnboardingStage::ItSetupStage),
        OnboardingStage::ItSetupStage => Ok(OnboardingStage::TrainingStage),
        OnboardingStage::TrainingStage => Ok(OnboardingStage::Completed),
        OnboardingStage::Completed => Err(LifecycleError::invalid_transition(
            "onboarding stage 'completed' has no successor",
        )),
    }
}

/// Offboarding status as a pure function of the checklist.
///
/// An empty checklist is `pending_exit`, never `completed`.
pub fn derive_status(checklist: &Checklist) -> OffboardingStatus {
    let completed = checklist.completed_count();
    let total = checklist.total_count();

    if completed == 0 {
        OffboardingStatus::PendingExit
    } else if completed == total {
        OffboardingStatus::Completed
    } else {
        OffboardingStatus::InProgress
    }
}

/// How the offboarding status moved across one change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionEdge {
    /// Moved into `completed`: the settlement side effects must run
    Entered,
    /// Moved out of `completed`
    Left,
    /// `completed` before and after, or neither
    Unchanged,
}

impl CompletionEdge {
    /// Classify the transition from `before` to `after`.
    pub fn between(before: OffboardingStatus, after: OffboardingStatus) -> Self {
        match (
            before == OffboardingStatus::Completed,
            after == OffboardingStatus::Completed,
        ) {
            (false, true) => CompletionEdge::Entered,
            (true, false) => CompletionEdge::Left,
            _ => CompletionEdge::Unchanged,
        }
    }

    /// Whether the completion side effects fire on this edge.
    pub fn fires_settlement(&self) -> bool {
        matches!(self, CompletionEdge::Entered)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::Task;

    fn checklist_of(states: &[bool]) -> Checklist {
        let now = Timestamp::now();
        let names: Vec<String> = (0..states.len()).map(|i| format!("task_{i}")).collect();
        let mut checklist =
            Checklist::new(names.iter().map(Task::new).collect()).expect("unique names");
        for (name, done) in names.iter().zip(states) {
            if *done {
                checklist = checklist
                    .set_task_completed(name, true, now)
                    .expect("task exists");
            }
        }
        checklist
    }

    #[test]
    fn test_progress_bounds_and_full_completion() {
        for total in 0..=12usize {
            for completed in 0..=total {
                let states: Vec<bool> = (0..total).map(|i| i < completed).collect();
                let progress = compute_checklist_progress(&checklist_of(&states));
                assert!(progress <= 100);
                if total > 0 {
                    assert_eq!(progress == 100, completed == total, "{completed}/{total}");
                }
            }
        }
    }

    #[test]
    fn test_progress_rounds_to_nearest() {
        assert_eq!(ratio_percent(0, 0), 0);
        assert_eq!(ratio_percent(1, 3), 33);
        assert_eq!(ratio_percent(2, 3), 67);
        assert_eq!(ratio_percent(1, 8), 13);
        assert_eq!(ratio_percent(1, 200), 1);
        assert_eq!(ratio_percent(199, 200), 100);
        assert_eq!(ratio_percent(4, 5), 80);
    }

    #[test]
    fn test_stage_table() {
        let expected = [0, 20, 40, 60, 80, 100];
        for (stage, pct) in OnboardingStage::ALL.iter().zip(expected) {
            assert_eq!(progress_for_stage(*stage), pct);
        }
    }

    #[test]
    fn test_next_stage_is_one_step_forward() {
        for pair in OnboardingStage::ALL.windows(2) {
            assert_eq!(next_stage(pair[0]).expect("non-terminal"), pair[1]);
        }
        assert!(matches!(
            next_stage(OnboardingStage::Completed),
            Err(LifecycleError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_derive_status() {
        assert_eq!(derive_status(&checklist_of(&[])), OffboardingStatus::PendingExit);
        assert_eq!(
            derive_status(&checklist_of(&[false, false])),
            OffboardingStatus::PendingExit
        );
        assert_eq!(
            derive_status(&checklist_of(&[true, false])),
            OffboardingStatus::InProgress
        );
        assert_eq!(
            derive_status(&checklist_of(&[true, true])),
            OffboardingStatus::Completed
        );
    }

    #[test]
    fn test_completion_edge() {
        use OffboardingStatus::*;

        assert_eq!(CompletionEdge::between(InProgress, Completed), CompletionEdge::Entered);
        assert_eq!(CompletionEdge::between(PendingExit, Completed), CompletionEdge::Entered);
        assert_eq!(CompletionEdge::between(Completed, Completed), CompletionEdge::Unchanged);
        assert_eq!(CompletionEdge::between(Completed, InProgress), CompletionEdge::Left);
        assert!(CompletionEdge::between(InProgress, Completed).fires_settlement());
        assert!(!CompletionEdge::between(Completed, Completed).fires_settlement());
    }
}

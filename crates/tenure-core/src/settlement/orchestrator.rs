//! Completion side-effect sequencing.
//!
//! [`run_settlement`] is invoked once when an offboarding checklist enters
//! `completed`, and again only on an explicit retry. Steps run in
//! [`SettlementStep::SEQUENCE`] order; the first failure stops the run and is
//! reported as `LifecycleError::DependencyFailure` naming the step. Steps that
//! already succeeded are not rolled back, so every [`ExitSteps`]
//! implementation must be idempotent for retries to be safe.

use log::{info, warn};

use super::SettlementStep;
use crate::{
    error::{LifecycleError, Result},
    models::ExitDocument,
};

/// The collaborators the completion sequence drives.
pub trait ExitSteps {
    /// Mark the employee inactive and exclude them from active rosters.
    fn archive_employee(&mut self, employee_id: u64) -> Result<()>;

    /// Exclude the employee from future payroll runs.
    fn remove_from_payroll(&mut self, employee_id: u64) -> Result<()>;

    /// Produce the final settlement and exit documents.
    fn generate_final_documents(&mut self, employee_id: u64) -> Result<Vec<ExitDocument>>;
}

/// Outcome of a fully successful settlement run.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementReport {
    pub employee_id: u64,
    /// Documents to surface to the operator
    pub documents: Vec<ExitDocument>,
}

/// Runs the completion sequence for one employee.
///
/// # Errors
///
/// Returns `LifecycleError::DependencyFailure` identifying the first step
/// that failed. Earlier steps remain applied.
pub fn run_settlement<S>(steps: &mut S, employee_id: u64) -> Result<SettlementReport>
where
    S: ExitSteps + ?Sized,
{
    info!("Running settlement for employee {employee_id}");

    guard(SettlementStep::Archive, employee_id, steps.archive_employee(employee_id))?;
    guard(
        SettlementStep::PayrollRemoval,
        employee_id,
        steps.remove_from_payroll(employee_id),
    )?;
    let documents = guard(
        SettlementStep::DocumentGeneration,
        employee_id,
        steps.generate_final_documents(employee_id),
    )?;

    info!(
        "Settlement for employee {employee_id} produced {} document(s)",
        documents.len()
    );
    Ok(SettlementReport {
        employee_id,
        documents,
    })
}

fn guard<T>(step: SettlementStep, employee_id: u64, outcome: Result<T>) -> Result<T> {
    outcome.map_err(|source| {
        warn!("Settlement step '{step}' failed for employee {employee_id}: {source}");
        match source {
            failure @ LifecycleError::DependencyFailure { .. } => failure,
            other => LifecycleError::DependencyFailure {
                step,
                message: other.to_string(),
            },
        }
    })
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::DocumentKind;

    /// Records calls and fails on a chosen step.
    #[derive(Default)]
    struct FakeSteps {
        calls: Vec<SettlementStep>,
        fail_on: Option<SettlementStep>,
        archived: u32,
        removed: u32,
    }

    impl FakeSteps {
        fn check(&mut self, step: SettlementStep) -> Result<()> {
            self.calls.push(step);
            if self.fail_on == Some(step) {
                return Err(LifecycleError::PermissionDenied {
                    action: step.to_string(),
                });
            }
            Ok(())
        }
    }

    impl ExitSteps for FakeSteps {
        fn archive_employee(&mut self, _employee_id: u64) -> Result<()> {
            self.check(SettlementStep::Archive)?;
            self.archived = 1;
            Ok(())
        }

        fn remove_from_payroll(&mut self, _employee_id: u64) -> Result<()> {
            self.check(SettlementStep::PayrollRemoval)?;
            self.removed = 1;
            Ok(())
        }

        fn generate_final_documents(&mut self, employee_id: u64) -> Result<Vec<ExitDocument>> {
            self.check(SettlementStep::DocumentGeneration)?;
            Ok(vec![ExitDocument {
                employee_id,
                kind: DocumentKind::FinalSettlement,
                title: "Final settlement".into(),
                content: String::new(),
                generated_at: Timestamp::now(),
            }])
        }
    }

    #[test]
    fn test_steps_run_in_order() {
        let mut steps = FakeSteps::default();
        let report = run_settlement(&mut steps, 4).expect("Settlement should succeed");

        assert_eq!(steps.calls, SettlementStep::SEQUENCE.to_vec());
        assert_eq!(report.employee_id, 4);
        assert_eq!(report.documents.len(), 1);
    }

    #[test]
    fn test_failure_stops_without_rollback() {
        let mut steps = FakeSteps {
            fail_on: Some(SettlementStep::PayrollRemoval),
            ..Default::default()
        };

        let err = run_settlement(&mut steps, 4).expect_err("Payroll removal should fail");

        match err {
            LifecycleError::DependencyFailure { step, ref message } => {
                assert_eq!(step, SettlementStep::PayrollRemoval);
                assert!(message.contains("payroll removal"));
            }
            ref other => panic!("Unexpected error: {other}"),
        }
        assert!(err.to_string().contains("payroll removal"));
        assert_eq!(
            steps.calls,
            vec![SettlementStep::Archive, SettlementStep::PayrollRemoval]
        );
        assert_eq!(steps.archived, 1, "archive is not undone");
        assert_eq!(steps.removed, 0);
    }

    #[test]
    fn test_retry_reruns_from_top() {
        let mut steps = FakeSteps {
            fail_on: Some(SettlementStep::DocumentGeneration),
            ..Default::default()
        };
        assert!(run_settlement(&mut steps, 9).is_err());

        steps.fail_on = None;
        steps.calls.clear();
        run_settlement(&mut steps, 9).expect("Retry should succeed");

        assert_eq!(steps.calls, SettlementStep::SEQUENCE.to_vec());
        assert_eq!(steps.archived, 1);
        assert_eq!(steps.removed, 1);
    }
}

//! Offboarding operations for the Tracker.
//!
//! An offboarding advances only through its checklist. The task change that
//! takes the checklist into `completed` runs the settlement sequence in the
//! same blocking call; re-reading a completed record never does. After a
//! failed run, [`Tracker::retry_settlement`] is the only way forward.

use log::{info, warn};

use super::Tracker;
use crate::{
    db::{utils::today, Database, StoreSteps},
    error::{LifecycleError, Result},
    events::LifecycleEvent,
    models::{ExitDocument, Offboarding, OffboardingStatus, TaskUpdate},
    params::{Id, InitiateOffboarding, SetTaskCompletion},
    settlement::{run_settlement, SettlementPolicy, SettlementStep},
};

/// How a settlement run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SettlementOutcome {
    /// Every step succeeded
    Completed { documents: Vec<ExitDocument> },
    /// A step failed; the steps before it stay applied
    Failed {
        step: SettlementStep,
        message: String,
    },
}

impl SettlementOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SettlementOutcome::Failed { .. })
    }
}

/// Result of an offboarding task change or settlement retry.
#[derive(Debug, Clone)]
pub struct OffboardingUpdate {
    /// The record as stored after the change
    pub record: Offboarding,
    /// Derived status before the change
    pub previous_status: OffboardingStatus,
    /// Present when the change ran the settlement sequence
    pub settlement: Option<SettlementOutcome>,
}

/// Runs the settlement sequence against the store and records its outcome.
fn settle(
    db: &mut Database,
    policy: &SettlementPolicy,
    employee_id: u64,
) -> Result<(Offboarding, SettlementOutcome)> {
    let outcome = {
        let mut steps = StoreSteps::new(db, policy);
        run_settlement(&mut steps, employee_id)
    };

    match outcome {
        Ok(report) => {
            let record = db.record_settlement_success(employee_id, today())?;
            Ok((
                record,
                SettlementOutcome::Completed {
                    documents: report.documents,
                },
            ))
        }
        Err(LifecycleError::DependencyFailure { step, message }) => {
            let record = db.record_settlement_failure(employee_id, step, &message)?;
            Ok((record, SettlementOutcome::Failed { step, message }))
        }
        Err(other) => Err(other),
    }
}

impl Tracker {
    /// Starts an offboarding for an active employee and publishes
    /// `OffboardingInitiated`.
    pub async fn initiate_offboarding(&self, params: &InitiateOffboarding) -> Result<Offboarding> {
        let params = params.clone();
        let record = self
            .with_database(move |db| db.initiate_offboarding(&params))
            .await?;

        self.publish(LifecycleEvent::OffboardingInitiated {
            employee_id: record.employee_id,
        });
        Ok(record)
    }

    /// Retrieves an offboarding. Reading never runs settlement, even for a
    /// completed checklist.
    pub async fn get_offboarding(&self, params: &Id) -> Result<Offboarding> {
        let id = params.id;
        self.with_database(move |db| db.get_offboarding(id)).await
    }

    /// Completes or reopens an offboarding task.
    ///
    /// When the change moves the checklist into `completed`, the settlement
    /// sequence runs once and its outcome is returned and published. A failed
    /// settlement is not an error of this call: the task change is stored.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleError::TaskNotFound` for an unknown task and
    /// `LifecycleError::InvalidTransition` once the checklist is completed.
    pub async fn set_offboarding_task(&self, params: &SetTaskCompletion) -> Result<OffboardingUpdate> {
        let employee_id = params.employee_id;
        let update = TaskUpdate::from(params);
        let policy = self.policy;

        let result = self
            .with_database({
                let update = update.clone();
                move |db| {
                    let change = db.save_task_completion(employee_id, &update)?;
                    if !change.edge().fires_settlement() {
                        return Ok(OffboardingUpdate {
                            record: change.record,
                            previous_status: change.previous_status,
                            settlement: None,
                        });
                    }

                    info!("Offboarding checklist for employee {employee_id} completed");
                    let (record, outcome) = settle(db, &policy, employee_id)?;
                    Ok(OffboardingUpdate {
                        record,
                        previous_status: change.previous_status,
                        settlement: Some(outcome),
                    })
                }
            })
            .await?;

        self.publish(LifecycleEvent::TaskUpdated {
            employee_id,
            task: update.name,
            completed: update.completed,
            progress: result.record.progress(),
        });
        let status = result.record.status();
        if status != result.previous_status {
            self.publish(LifecycleEvent::OffboardingStatusChanged {
                employee_id,
                status,
            });
        }
        self.publish_settlement(employee_id, result.settlement.as_ref());

        Ok(result)
    }

    /// Re-runs the settlement sequence from the first step after a failure.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleError::InvalidTransition` if the checklist is not
    /// completed or the offboarding is already settled.
    pub async fn retry_settlement(&self, params: &Id) -> Result<OffboardingUpdate> {
        let employee_id = params.id;
        let policy = self.policy;

        let result = self
            .with_database(move |db| {
                let current = db.get_offboarding(employee_id)?;
                if current.is_settled() {
                    return Err(LifecycleError::invalid_transition(format!(
                        "Offboarding for employee {employee_id} is already settled"
                    )));
                }
                let status = current.status();
                if status != OffboardingStatus::Completed {
                    return Err(LifecycleError::invalid_transition(format!(
                        "Offboarding checklist for employee {employee_id} is {}",
                        status.as_str()
                    )));
                }

                info!("Retrying settlement for employee {employee_id}");
                let (record, outcome) = settle(db, &policy, employee_id)?;
                Ok(OffboardingUpdate {
                    record,
                    previous_status: status,
                    settlement: Some(outcome),
                })
            })
            .await?;

        self.publish_settlement(employee_id, result.settlement.as_ref());
        Ok(result)
    }

    fn publish_settlement(&self, employee_id: u64, outcome: Option<&SettlementOutcome>) {
        match outcome {
            Some(SettlementOutcome::Completed { documents }) => {
                self.publish(LifecycleEvent::OffboardingCompleted {
                    employee_id,
                    documents: documents.clone(),
                });
            }
            Some(SettlementOutcome::Failed { step, message }) => {
                warn!("Settlement for employee {employee_id} stopped at {step}: {message}");
                self.publish(LifecycleEvent::SettlementFailed {
                    employee_id,
                    step: *step,
                    message: message.clone(),
                });
            }
            None => {}
        }
    }
}

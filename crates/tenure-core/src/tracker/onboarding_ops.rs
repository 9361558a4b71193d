//! Onboarding operations for the Tracker.

use log::info;

use super::Tracker;
use crate::{
    error::Result,
    events::LifecycleEvent,
    models::{Onboarding, TaskUpdate},
    params::{Id, SetTaskCompletion},
};

impl Tracker {
    /// Retrieves an employee's onboarding with its reference checklist.
    pub async fn get_onboarding(&self, params: &Id) -> Result<Onboarding> {
        let id = params.id;
        self.with_database(move |db| db.get_onboarding(id)).await
    }

    /// Moves an onboarding to its next stage. This is the only way an
    /// onboarding progresses.
    pub async fn advance_stage(&self, params: &Id) -> Result<Onboarding> {
        let id = params.id;
        let record = self.with_database(move |db| db.advance_stage(id)).await?;

        if record.is_completed() {
            info!("Employee {id} completed onboarding");
        }
        self.publish(LifecycleEvent::StageAdvanced {
            employee_id: id,
            stage: record.stage,
            progress: record.progress(),
        });
        Ok(record)
    }

    /// Completes or reopens a task on the reference onboarding checklist.
    /// The event carries the checklist ratio, not the stage progress.
    pub async fn set_onboarding_task(&self, params: &SetTaskCompletion) -> Result<Onboarding> {
        let employee_id = params.employee_id;
        let update = TaskUpdate::from(params);
        let record = self
            .with_database({
                let update = update.clone();
                move |db| db.save_onboarding_task(employee_id, &update)
            })
            .await?;

        self.publish(LifecycleEvent::TaskUpdated {
            employee_id,
            task: update.name,
            completed: update.completed,
            progress: record.checklist_progress(),
        });
        Ok(record)
    }
}

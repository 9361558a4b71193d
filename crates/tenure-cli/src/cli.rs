//! Command handlers.
//!
//! Each handler calls one tracker operation and renders the result as
//! markdown through the [`TerminalRenderer`].

use std::fs;

use anyhow::{bail, Context, Result};
use tenure_core::{
    params::{ExportOffboarding, ListEmployees, SetTaskCompletion, UpdateCompensation},
    CreateResult, OffboardingUpdate, OperationStatus, SettlementOutcome, Tracker, UpdateResult,
};

use crate::{
    args::{EmployeeCommands, OffboardingCommands, OnboardingCommands, SettlementCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_employee_command(&self, command: EmployeeCommands) -> Result<()> {
        match command {
            EmployeeCommands::Add(args) => {
                let employee = self.tracker.create_employee(&args.into()).await?;
                self.renderer
                    .render(&CreateResult::new(employee).to_string())
            }
            EmployeeCommands::List(args) => self.list_employees(&args.into()).await,
            EmployeeCommands::Show(args) => {
                let employee = self.tracker.get_employee(&args.into()).await?;
                self.renderer.render(&employee.to_string())
            }
            EmployeeCommands::Pay(args) => {
                let params = UpdateCompensation::from(args);
                let employee = self.tracker.update_compensation(&params).await?;
                let changes = compensation_changes(&params);
                self.renderer
                    .render(&UpdateResult::with_changes(employee, changes).to_string())
            }
        }
    }

    pub async fn handle_onboarding_command(&self, command: OnboardingCommands) -> Result<()> {
        match command {
            OnboardingCommands::Show(args) => {
                let onboarding = self.tracker.get_onboarding(&args.into()).await?;
                self.renderer.render(&onboarding.to_string())
            }
            OnboardingCommands::Advance(args) => {
                let onboarding = self.tracker.advance_stage(&args.into()).await?;
                let change = format!("Stage: {}", onboarding.stage.label());
                self.renderer
                    .render(&UpdateResult::with_changes(onboarding, vec![change]).to_string())
            }
            OnboardingCommands::Task(args) => {
                let params = SetTaskCompletion::from(args);
                let onboarding = self.tracker.set_onboarding_task(&params).await?;
                self.renderer.render(
                    &UpdateResult::with_changes(onboarding, vec![task_change(&params)])
                        .to_string(),
                )
            }
        }
    }

    pub async fn handle_offboarding_command(&self, command: OffboardingCommands) -> Result<()> {
        match command {
            OffboardingCommands::Start(args) => {
                let record = self.tracker.initiate_offboarding(&args.into()).await?;
                self.renderer.render(&CreateResult::new(record).to_string())
            }
            OffboardingCommands::Show(args) => {
                let record = self.tracker.get_offboarding(&args.into()).await?;
                self.renderer.render(&record.to_string())
            }
            OffboardingCommands::Task(args) => {
                let params = SetTaskCompletion::from(args);
                let update = self.tracker.set_offboarding_task(&params).await?;
                self.render_offboarding_update(update, vec![task_change(&params)])
            }
            OffboardingCommands::Retry(args) => {
                let update = self.tracker.retry_settlement(&args.into()).await?;
                self.render_offboarding_update(update, Vec::new())
            }
            OffboardingCommands::Export(args) => {
                let params = ExportOffboarding::from(&args);
                let rendered = self.tracker.export_offboarding(&params).await?;
                match args.output {
                    Some(path) => {
                        fs::write(&path, rendered)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        self.renderer.render(
                            &OperationStatus::success(format!(
                                "Exported offboarding for employee {} to {}",
                                params.employee_id,
                                path.display()
                            ))
                            .to_string(),
                        )
                    }
                    None => {
                        print!("{rendered}");
                        Ok(())
                    }
                }
            }
        }
    }

    pub async fn handle_settlement_command(&self, command: SettlementCommands) -> Result<()> {
        match command {
            SettlementCommands::Show(args) => {
                let settlement = self.tracker.final_settlement(&args.into()).await?;
                self.renderer.render(&settlement.to_string())
            }
            SettlementCommands::Documents(args) => {
                let documents = self.tracker.documents(&args.into()).await?;
                self.renderer.render(&documents.to_string())
            }
        }
    }

    pub async fn list_employees(&self, params: &ListEmployees) -> Result<()> {
        let summaries = self.tracker.list_employees(params).await?;
        self.renderer.render(&summaries.to_string())
    }

    /// Renders the stored record followed by the settlement outcome. A failed
    /// settlement exits with an error after the record is shown.
    fn render_offboarding_update(
        &self,
        update: OffboardingUpdate,
        mut changes: Vec<String>,
    ) -> Result<()> {
        if update.record.status() != update.previous_status {
            changes.push(format!("Status: {}", update.record.status().with_icon()));
        }
        let employee_id = update.record.employee_id;
        self.renderer
            .render(&UpdateResult::with_changes(update.record, changes).to_string())?;

        match update.settlement {
            Some(SettlementOutcome::Completed { documents }) => {
                let status = OperationStatus::success(format!(
                    "Offboarding for employee {employee_id} completed, {} documents generated",
                    documents.len()
                ));
                self.renderer.render(&status.to_string())
            }
            Some(SettlementOutcome::Failed { step, message }) => {
                let status = OperationStatus::failure(format!(
                    "Settlement failed at {step}: {message}"
                ));
                self.renderer.render(&status.to_string())?;
                bail!(
                    "Settlement for employee {employee_id} did not complete; fix the cause and run `tenure offboarding retry {employee_id}`"
                )
            }
            None => Ok(()),
        }
    }
}

fn task_change(params: &SetTaskCompletion) -> String {
    let verb = if params.completed { "Completed" } else { "Reopened" };
    format!("{verb} task: {}", params.task)
}

fn compensation_changes(params: &UpdateCompensation) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(salary) = params.monthly_salary {
        changes.push(format!("Monthly salary: {salary}"));
    }
    if let Some(allowances) = params.allowances {
        changes.push(format!("Allowances: {allowances}"));
    }
    if let Some(deductions) = params.deductions {
        changes.push(format!("Deductions: {deductions}"));
    }
    if let Some(days) = params.unused_leave_days {
        changes.push(format!("Unused leave days: {days}"));
    }
    changes
}

//! Display implementations for domain models.
//!
//! Records render as markdown: a heading, a metadata list, then checklist
//! tasks as task-list items grouped by category.

use std::fmt;

use super::{datetime::LocalDateTime, status::ProgressBar};
use crate::models::{
    Checklist, Employee, EmployeeStatus, EmployeeSummary, ExitDocument, FinalSettlement,
    LifecycleKind, Offboarding, OffboardingStatus, OffboardingType, Onboarding, OnboardingStage,
    SettlementState, Task,
};

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    EmployeeStatus,
    LifecycleKind,
    OffboardingStatus,
    OffboardingType,
    OnboardingStage,
    SettlementState,
);

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        write!(f, "- [{mark}] {}", self.name)?;

        let mut details = Vec::new();
        if let Some(due) = self.due_date {
            details.push(format!("due {due}"));
        }
        if let Some(by) = &self.completed_by {
            details.push(format!("by {by}"));
        }
        if !details.is_empty() {
            write!(f, " ({})", details.join(", "))?;
        }
        writeln!(f)?;

        if let Some(notes) = &self.notes {
            writeln!(f, "  - Notes: {notes}")?;
        }
        Ok(())
    }
}

/// Renders tasks under `###` category headings, or as one flat list when
/// the checklist is ungrouped.
fn write_checklist(f: &mut fmt::Formatter<'_>, checklist: &Checklist) -> fmt::Result {
    if checklist.is_empty() {
        return writeln!(f, "No tasks in this checklist.");
    }
    for (category, tasks) in checklist.by_category() {
        if let Some(category) = category {
            writeln!(f, "### {}", category.replace('_', " "))?;
            writeln!(f)?;
        }
        for task in tasks {
            write!(f, "{task}")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status)?;
        if let Some(email) = &self.email {
            writeln!(f, "- Email: {email}")?;
        }
        if let Some(department) = &self.department {
            writeln!(f, "- Department: {department}")?;
        }
        if let Some(position) = &self.position {
            writeln!(f, "- Position: {position}")?;
        }
        writeln!(f, "- Hire date: {}", self.hire_date)?;
        writeln!(
            f,
            "- Payroll: {}",
            if self.on_payroll { "included" } else { "removed" }
        )?;
        writeln!(f, "- Monthly salary: {}", self.monthly_salary)?;
        if !self.allowances.is_zero() {
            writeln!(f, "- Allowances: {}", self.allowances)?;
        }
        if !self.deductions.is_zero() {
            writeln!(f, "- Deductions: {}", self.deductions)?;
        }
        writeln!(f, "- Unused leave days: {}", self.unused_leave_days)?;
        if let Some(archived_at) = &self.archived_at {
            writeln!(f, "- Archived: {}", LocalDateTime(archived_at))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))
    }
}

impl fmt::Display for Onboarding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Onboarding: employee {}", self.employee_id)?;
        writeln!(f)?;

        writeln!(f, "- Stage: {}", self.stage.label())?;
        writeln!(f, "- Progress: {}", ProgressBar(self.progress()))?;
        writeln!(
            f,
            "- Checklist: {}/{} tasks",
            self.checklist.completed_count(),
            self.checklist.total_count()
        )?;
        writeln!(f, "- Initiated: {}", LocalDateTime(&self.initiated_at))?;
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed_at))?;
        }

        writeln!(f, "\n## Stages")?;
        writeln!(f)?;
        for stage in OnboardingStage::ALL {
            let mark = if stage <= self.stage { "x" } else { " " };
            writeln!(f, "- [{mark}] {}", stage.label())?;
        }

        writeln!(f, "\n## Checklist")?;
        writeln!(f)?;
        write_checklist(f, &self.checklist)
    }
}

impl fmt::Display for Offboarding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Offboarding: employee {}", self.employee_id)?;
        writeln!(f)?;

        writeln!(f, "- Type: {}", self.offboarding_type)?;
        writeln!(f, "- Status: {}", self.status().with_icon())?;
        writeln!(
            f,
            "- Progress: {} ({}/{})",
            ProgressBar(self.progress()),
            self.checklist.completed_count(),
            self.checklist.total_count()
        )?;
        writeln!(f, "- Target exit date: {}", self.target_exit_date)?;
        if let Some(actual) = self.actual_exit_date {
            writeln!(f, "- Actual exit date: {actual}")?;
        }
        match self.settlement_state {
            SettlementState::Failed => {
                let details = self.settlement_error.as_deref().unwrap_or("no details");
                match self.failed_step {
                    Some(step) => {
                        writeln!(f, "- Settlement: failed at {step}: {details}")?;
                        let applied: Vec<String> =
                            step.preceding().iter().map(ToString::to_string).collect();
                        if !applied.is_empty() {
                            writeln!(f, "- Already applied: {}", applied.join(", "))?;
                        }
                    }
                    None => writeln!(f, "- Settlement: failed: {details}")?,
                }
            }
            state => writeln!(f, "- Settlement: {state}")?,
        }
        writeln!(f, "- Initiated: {}", LocalDateTime(&self.initiated_at))?;

        if let Some(reason) = &self.reason {
            writeln!(f)?;
            writeln!(f, "{reason}")?;
        }

        writeln!(f, "\n## Checklist")?;
        writeln!(f)?;
        write_checklist(f, &self.checklist)
    }
}

impl fmt::Display for FinalSettlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Final settlement: {} (ID: {})",
            self.employee_name, self.employee_id
        )?;
        writeln!(f)?;
        writeln!(f, "- Years of service: {}", self.years_of_service)?;
        writeln!(f)?;
        writeln!(f, "| Component | Amount |")?;
        writeln!(f, "|---|---:|")?;
        writeln!(f, "| Basic salary | {} |", self.basic_salary)?;
        writeln!(f, "| Gratuity | {} |", self.gratuity)?;
        writeln!(f, "| Leave encashment | {} |", self.leave_encashment)?;
        writeln!(f, "| Allowances | {} |", self.allowances)?;
        writeln!(f, "| Deductions | -{} |", self.deductions)?;
        writeln!(f, "| **Total** | **{}** |", self.total)
    }
}

impl fmt::Display for ExitDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- File: {}", self.kind.file_name(self.employee_id))?;
        writeln!(f, "- Generated: {}", LocalDateTime(&self.generated_at))?;
        writeln!(f)?;
        writeln!(f, "{}", self.content.trim_end())?;
        writeln!(f)
    }
}

impl fmt::Display for EmployeeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;

        match self.progress {
            Some(progress) => writeln!(f, "- **Status**: {} ({progress}%)", self.status)?,
            None => writeln!(f, "- **Status**: {}", self.status)?,
        }
        if let Some(department) = &self.department {
            writeln!(f, "- **Department**: {department}")?;
        }
        if let Some(position) = &self.position {
            writeln!(f, "- **Position**: {position}")?;
        }
        if !self.on_payroll {
            writeln!(f, "- **Payroll**: removed")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::{models::templates, settlement::SettlementStep};

    fn offboarding() -> Offboarding {
        let now = Timestamp::from_second(1_767_225_600).expect("valid timestamp");
        Offboarding {
            employee_id: 9,
            offboarding_type: OffboardingType::ContractEnd,
            reason: None,
            checklist: templates::offboarding_checklist(date(2026, 3, 31))
                .apply(
                    &crate::models::TaskUpdate::complete("exit_interview").by("hr-admin"),
                    now,
                )
                .expect("Task should exist"),
            initiated_at: now,
            target_exit_date: date(2026, 3, 31),
            actual_exit_date: None,
            settlement_state: SettlementState::Failed,
            failed_step: Some(SettlementStep::PayrollRemoval),
            settlement_error: Some("payroll service unavailable".to_string()),
            settled_at: None,
            updated_at: now,
        }
    }

    #[test]
    fn test_offboarding_display() {
        let output = offboarding().to_string();

        assert!(output.starts_with("# Offboarding: employee 9"));
        assert!(output.contains("- Status: ➤ In Progress"));
        assert!(output.contains("(1/7)"));
        assert!(output.contains("- Settlement: failed at payroll removal: payroll service unavailable"));
        assert!(output.contains("- Already applied: archive\n"));
        assert!(output.contains("### knowledge transfer"));
        assert!(output.contains("- [x] exit_interview (due 2026-03-31, by hr-admin)"));
        assert!(output.contains("- [ ] equipment_return (due 2026-03-31)"));
    }

    #[test]
    fn test_onboarding_stage_pipeline() {
        let now = Timestamp::from_second(1_767_225_600).expect("valid timestamp");
        let onboarding = Onboarding {
            employee_id: 2,
            stage: OnboardingStage::DocumentationStage,
            checklist: templates::onboarding_checklist(),
            initiated_at: now,
            completed_at: None,
            updated_at: now,
        };
        let output = onboarding.to_string();

        assert!(output.contains("- Stage: Documentation"));
        assert!(output.contains("[████░░░░░░] 40%"));
        assert!(output.contains("- [x] Contract"));
        assert!(output.contains("- [ ] IT Setup"));
        assert!(output.contains("- Checklist: 0/7 tasks"));
        assert!(!output.contains("###"));
    }

    #[test]
    fn test_status_display_uses_storage_names() {
        assert_eq!(EmployeeStatus::Archived.to_string(), "archived");
        assert_eq!(LifecycleKind::Offboarding.to_string(), "offboarding");
        assert_eq!(
            OffboardingType::VoluntaryResignation.to_string(),
            "voluntary_resignation"
        );
    }
}

//! Seed task lists used when a lifecycle record is initiated.

use jiff::civil::Date;

use super::{Checklist, Task};

/// Onboarding tasks, ungrouped, in display order.
pub const ONBOARDING_TASKS: &[&str] = &[
    "sign_contract",
    "submit_identity_documents",
    "submit_bank_details",
    "create_system_accounts",
    "issue_equipment",
    "orientation_session",
    "compliance_training",
];

/// Offboarding tasks as `(category, name)` pairs, in display order.
pub const OFFBOARDING_TASKS: &[(&str, &str)] = &[
    ("documentation", "resignation_letter"),
    ("documentation", "exit_interview"),
    ("assets", "equipment_return"),
    ("assets", "access_card_return"),
    ("it", "revoke_system_access"),
    ("finance", "clear_outstanding_advances"),
    ("knowledge_transfer", "handover_documentation"),
];

/// Fresh onboarding checklist.
pub fn onboarding_checklist() -> Checklist {
    Checklist::from_template(ONBOARDING_TASKS.iter().map(|name| Task::new(*name)))
}

/// Fresh offboarding checklist with every task due on the exit date.
pub fn offboarding_checklist(target_exit_date: Date) -> Checklist {
    Checklist::from_template(OFFBOARDING_TASKS.iter().map(|(category, name)| {
        Task::new(*name)
            .in_category(*category)
            .due_on(Some(target_exit_date))
    }))
}

impl Checklist {
    /// Templates are name-unique by construction.
    fn from_template(tasks: impl Iterator<Item = Task>) -> Self {
        Self::new(tasks.collect()).unwrap_or_default()
    }
}

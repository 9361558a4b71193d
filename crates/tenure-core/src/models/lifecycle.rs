//! Lifecycle records: the onboarding and offboarding state of one employee.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Checklist, OffboardingStatus, OffboardingType, OnboardingStage, SettlementState};
use crate::{progress, settlement::SettlementStep};

/// Onboarding state for one employee. Progress follows the stage, not the
/// checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Onboarding {
    pub employee_id: u64,

    /// Current stage; advanced only by explicit command
    pub stage: OnboardingStage,

    /// Reference checklist; does not drive the stage
    pub checklist: Checklist,

    pub initiated_at: Timestamp,

    /// Set when the stage reaches `completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    pub updated_at: Timestamp,
}

impl Onboarding {
    /// Stage-table progress, the authoritative onboarding percentage.
    pub fn progress(&self) -> u8 {
        progress::progress_for_stage(self.stage)
    }

    /// Task-ratio progress of the reference checklist.
    pub fn checklist_progress(&self) -> u8 {
        progress::compute_checklist_progress(&self.checklist)
    }

    pub fn is_completed(&self) -> bool {
        self.stage.is_terminal()
    }
}

/// Offboarding state for one employee. Status and progress are derived from
/// the checklist on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offboarding {
    pub employee_id: u64,

    pub offboarding_type: OffboardingType,

    pub reason: Option<String>,

    pub checklist: Checklist,

    pub initiated_at: Timestamp,

    pub target_exit_date: Date,

    /// Stamped once every completion side effect succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_exit_date: Option<Date>,

    /// Outcome of the completion side effects
    #[serde(default)]
    pub settlement_state: SettlementState,

    /// Step named in the last settlement failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_step: Option<SettlementStep>,

    /// Message of the last settlement failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_at: Option<Timestamp>,

    pub updated_at: Timestamp,
}

impl Offboarding {
    pub fn status(&self) -> OffboardingStatus {
        progress::derive_status(&self.checklist)
    }

    pub fn progress(&self) -> u8 {
        progress::compute_checklist_progress(&self.checklist)
    }

    /// Settled records are terminal and accept no further task changes.
    pub fn is_settled(&self) -> bool {
        self.settlement_state == SettlementState::Completed
    }
}

//! Status enumerations for employees and their lifecycle records.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordered onboarding stages. Declaration order is progression order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStage {
    #[default]
    NotStarted,
    ContractStage,
    DocumentationStage,
    ItSetupStage,
    TrainingStage,
    Completed,
}

impl OnboardingStage {
    /// Every stage, in progression order.
    pub const ALL: [OnboardingStage; 6] = [
        OnboardingStage::NotStarted,
        OnboardingStage::ContractStage,
        OnboardingStage::DocumentationStage,
        OnboardingStage::ItSetupStage,
        OnboardingStage::TrainingStage,
        OnboardingStage::Completed,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingStage::NotStarted => "not_started",
            OnboardingStage::ContractStage => "contract_stage",
            OnboardingStage::DocumentationStage => "documentation_stage",
            OnboardingStage::ItSetupStage => "it_setup_stage",
            OnboardingStage::TrainingStage => "training_stage",
            OnboardingStage::Completed => "completed",
        }
    }

    /// Human readable label used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            OnboardingStage::NotStarted => "Not Started",
            OnboardingStage::ContractStage => "Contract",
            OnboardingStage::DocumentationStage => "Documentation",
            OnboardingStage::ItSetupStage => "IT Setup",
            OnboardingStage::TrainingStage => "Training",
            OnboardingStage::Completed => "Completed",
        }
    }

    /// Whether the stage is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OnboardingStage::Completed)
    }
}

impl FromStr for OnboardingStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not_started" => Ok(OnboardingStage::NotStarted),
            "contract_stage" | "contract" => Ok(OnboardingStage::ContractStage),
            "documentation_stage" | "documentation" => Ok(OnboardingStage::DocumentationStage),
            "it_setup_stage" | "it_setup" => Ok(OnboardingStage::ItSetupStage),
            "training_stage" | "training" => Ok(OnboardingStage::TrainingStage),
            "completed" => Ok(OnboardingStage::Completed),
            _ => Err(format!("Invalid onboarding stage: {s}")),
        }
    }
}

/// Offboarding status, always derived from the checklist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OffboardingStatus {
    /// No checklist task has been completed yet
    PendingExit,

    /// Some but not all tasks are complete
    InProgress,

    /// Every task is complete
    Completed,
}

impl OffboardingStatus {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OffboardingStatus::PendingExit => "pending_exit",
            OffboardingStatus::InProgress => "in_progress",
            OffboardingStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tenure_core::models::OffboardingStatus;
    ///
    /// assert_eq!(OffboardingStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(OffboardingStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(OffboardingStatus::PendingExit.with_icon(), "○ Pending Exit");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            OffboardingStatus::Completed => "✓ Completed",
            OffboardingStatus::InProgress => "➤ In Progress",
            OffboardingStatus::PendingExit => "○ Pending Exit",
        }
    }
}

/// Why the employee is leaving.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OffboardingType {
    VoluntaryResignation,
    InvoluntaryTermination,
    Retirement,
    ContractEnd,
}

impl OffboardingType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OffboardingType::VoluntaryResignation => "voluntary_resignation",
            OffboardingType::InvoluntaryTermination => "involuntary_termination",
            OffboardingType::Retirement => "retirement",
            OffboardingType::ContractEnd => "contract_end",
        }
    }
}

impl FromStr for OffboardingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "voluntary_resignation" | "resignation" => Ok(OffboardingType::VoluntaryResignation),
            "involuntary_termination" | "termination" => {
                Ok(OffboardingType::InvoluntaryTermination)
            }
            "retirement" => Ok(OffboardingType::Retirement),
            "contract_end" => Ok(OffboardingType::ContractEnd),
            _ => Err(format!("Invalid offboarding type: {s}")),
        }
    }
}

/// Employment status of an employee on the roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    /// Onboarding is in progress
    #[default]
    Onboarding,

    /// Regular active employment
    Active,

    /// Offboarding is in progress
    Offboarding,

    /// Excluded from active rosters
    Archived,
}

impl EmployeeStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Onboarding => "onboarding",
            EmployeeStatus::Active => "active",
            EmployeeStatus::Offboarding => "offboarding",
            EmployeeStatus::Archived => "archived",
        }
    }
}

impl FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "onboarding" => Ok(EmployeeStatus::Onboarding),
            "active" => Ok(EmployeeStatus::Active),
            "offboarding" => Ok(EmployeeStatus::Offboarding),
            "archived" => Ok(EmployeeStatus::Archived),
            _ => Err(format!("Invalid employee status: {s}")),
        }
    }
}

/// The two lifecycle processes an employee goes through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleKind {
    Onboarding,
    Offboarding,
}

impl LifecycleKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleKind::Onboarding => "onboarding",
            LifecycleKind::Offboarding => "offboarding",
        }
    }
}

impl FromStr for LifecycleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "onboarding" => Ok(LifecycleKind::Onboarding),
            "offboarding" => Ok(LifecycleKind::Offboarding),
            _ => Err(format!("Invalid lifecycle kind: {s}")),
        }
    }
}

/// Bookkeeping for the completion side effects of an offboarding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SettlementState {
    /// Side effects have not run yet
    #[default]
    Pending,

    /// The last run stopped at a failed step
    Failed,

    /// Every step succeeded
    Completed,
}

impl SettlementState {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SettlementState::Pending => "pending",
            SettlementState::Failed => "failed",
            SettlementState::Completed => "completed",
        }
    }
}

impl FromStr for SettlementState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(SettlementState::Pending),
            "failed" => Ok(SettlementState::Failed),
            "completed" => Ok(SettlementState::Completed),
            _ => Err(format!("Invalid settlement state: {s}")),
        }
    }
}

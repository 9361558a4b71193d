//! Offboarding completion side effects and final settlement.
//!
//! - [`orchestrator`]: runs archive, payroll removal and document generation
//!   in order, stopping at the first failure.
//! - [`calculator`]: final settlement breakdown from employee data and a
//!   [`SettlementPolicy`].
//! - [`documents`]: markdown bodies of the generated exit documents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod calculator;
pub mod documents;
pub mod orchestrator;

pub use calculator::{calculate_final_settlement, SettlementPolicy};
pub use orchestrator::{run_settlement, ExitSteps, SettlementReport};

/// One step of the completion sequence, in execution order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SettlementStep {
    Archive,
    PayrollRemoval,
    DocumentGeneration,
}

impl SettlementStep {
    /// Every step, in execution order.
    pub const SEQUENCE: [SettlementStep; 3] = [
        SettlementStep::Archive,
        SettlementStep::PayrollRemoval,
        SettlementStep::DocumentGeneration,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SettlementStep::Archive => "archive",
            SettlementStep::PayrollRemoval => "payroll_removal",
            SettlementStep::DocumentGeneration => "document_generation",
        }
    }

    /// Steps that have already succeeded when this one fails.
    pub fn preceding(&self) -> &'static [SettlementStep] {
        let index = Self::SEQUENCE
            .iter()
            .position(|step| step == self)
            .unwrap_or(0);
        &Self::SEQUENCE[..index]
    }
}

impl fmt::Display for SettlementStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SettlementStep::Archive => "archive",
            SettlementStep::PayrollRemoval => "payroll removal",
            SettlementStep::DocumentGeneration => "document generation",
        };
        f.write_str(label)
    }
}

impl FromStr for SettlementStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(' ', "_").as_str() {
            "archive" => Ok(SettlementStep::Archive),
            "payroll_removal" => Ok(SettlementStep::PayrollRemoval),
            "document_generation" => Ok(SettlementStep::DocumentGeneration),
            _ => Err(format!("Invalid settlement step: {s}")),
        }
    }
}

//! Final settlement breakdown and generated exit documents.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Exit payment breakdown for one employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinalSettlement {
    pub employee_id: u64,
    pub employee_name: String,
    /// Completed years of service at the settlement date
    pub years_of_service: Decimal,
    pub basic_salary: Decimal,
    pub gratuity: Decimal,
    /// Payment for accrued, untaken leave
    pub leave_encashment: Decimal,
    pub allowances: Decimal,
    pub deductions: Decimal,
    pub total: Decimal,
}

/// Kinds of document produced when an offboarding settles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    FinalSettlement,
    ExperienceLetter,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::FinalSettlement => "final_settlement",
            DocumentKind::ExperienceLetter => "experience_letter",
        }
    }

    /// Suggested file name for a downloaded copy.
    pub fn file_name(&self, employee_id: u64) -> String {
        format!("{}-{employee_id}.md", self.as_str().replace('_', "-"))
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "final_settlement" => Ok(DocumentKind::FinalSettlement),
            "experience_letter" => Ok(DocumentKind::ExperienceLetter),
            _ => Err(format!("Invalid document kind: {s}")),
        }
    }
}

/// A generated exit document, one per kind per employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExitDocument {
    pub employee_id: u64,
    pub kind: DocumentKind,
    pub title: String,
    /// Markdown body
    pub content: String,
    pub generated_at: Timestamp,
}

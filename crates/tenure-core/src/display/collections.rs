//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{EmployeeSummary, ExitDocument};

/// Roster listing.
///
/// # Examples
///
/// ```rust
/// use tenure_core::{
///     display::EmployeeSummaries,
///     models::{EmployeeStatus, EmployeeSummary},
/// };
///
/// let roster = EmployeeSummaries(vec![EmployeeSummary {
///     id: 1,
///     name: "Ana Souza".to_string(),
///     department: Some("Finance".to_string()),
///     position: None,
///     status: EmployeeStatus::Onboarding,
///     on_payroll: true,
///     progress: Some(40),
/// }]);
/// let output = roster.to_string();
/// assert!(output.contains("## Ana Souza (ID: 1)"));
/// assert!(output.contains("onboarding (40%)"));
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeSummaries(pub Vec<EmployeeSummary>);

impl EmployeeSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmployeeSummary> {
        self.0.iter()
    }
}

impl Index<usize> for EmployeeSummaries {
    type Output = EmployeeSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a EmployeeSummaries {
    type Item = &'a EmployeeSummary;
    type IntoIter = std::slice::Iter<'a, EmployeeSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for EmployeeSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No employees found.")
        } else {
            for employee in &self.0 {
                write!(f, "{employee}")?;
            }
            Ok(())
        }
    }
}

/// Generated exit documents of one employee.
#[derive(Debug, Clone)]
pub struct ExitDocuments(pub Vec<ExitDocument>);

impl ExitDocuments {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExitDocument> {
        self.0.iter()
    }
}

impl Index<usize> for ExitDocuments {
    type Output = ExitDocument;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ExitDocuments {
    type Item = ExitDocument;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ExitDocuments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No exit documents generated.")
        } else {
            for document in &self.0 {
                write!(f, "{document}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeStatus;

    #[test]
    fn test_empty_collections() {
        assert_eq!(EmployeeSummaries(vec![]).to_string(), "No employees found.\n");
        assert_eq!(ExitDocuments(vec![]).to_string(), "No exit documents generated.\n");
    }

    #[test]
    fn test_archived_summary_has_no_progress() {
        let roster = EmployeeSummaries(vec![EmployeeSummary {
            id: 4,
            name: "Omar Haddad".to_string(),
            department: None,
            position: Some("Analyst".to_string()),
            status: EmployeeStatus::Archived,
            on_payroll: false,
            progress: None,
        }]);
        let output = roster.to_string();

        assert!(output.contains("- **Status**: archived\n"));
        assert!(output.contains("- **Payroll**: removed"));
        assert!(output.contains("- **Position**: Analyst"));
    }
}

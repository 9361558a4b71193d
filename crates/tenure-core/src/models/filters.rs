//! Filter types for querying the roster.

use super::EmployeeStatus;

/// Filter options for listing employees.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    /// Filter by employee name (case-insensitive partial match)
    pub name_contains: Option<String>,

    /// Filter by department (exact match)
    pub department: Option<String>,

    /// Filter by employment status
    pub status: Option<EmployeeStatus>,

    /// Show archived employees as well as the active roster
    pub include_archived: bool,
}

impl From<&crate::params::ListEmployees> for EmployeeFilter {
    /// `archived: true` lists only archived employees; otherwise the active
    /// roster (everyone not archived) is listed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tenure_core::{models::{EmployeeFilter, EmployeeStatus}, params::ListEmployees};
    ///
    /// let params = ListEmployees { archived: true, department: None };
    /// let filter: EmployeeFilter = (&params).into();
    /// assert_eq!(filter.status, Some(EmployeeStatus::Archived));
    /// assert!(filter.include_archived);
    /// ```
    fn from(params: &crate::params::ListEmployees) -> Self {
        if params.archived {
            Self {
                status: Some(EmployeeStatus::Archived),
                include_archived: true,
                department: params.department.clone(),
                ..Default::default()
            }
        } else {
            Self {
                include_archived: false,
                department: params.department.clone(),
                ..Default::default()
            }
        }
    }
}

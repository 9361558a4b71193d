//! Roster operations for the Tracker.

use super::Tracker;
use crate::{
    display::EmployeeSummaries,
    error::Result,
    events::LifecycleEvent,
    models::{Employee, EmployeeFilter, EmployeeStatus},
    params::{CreateEmployee, Id, ListEmployees, UpdateCompensation},
};

impl Tracker {
    /// Adds an employee. New hires start onboarding and an
    /// `OnboardingInitiated` event is published.
    pub async fn create_employee(&self, params: &CreateEmployee) -> Result<Employee> {
        let params = params.clone();
        let employee = self
            .with_database(move |db| db.create_employee(&params))
            .await?;

        if employee.status == EmployeeStatus::Onboarding {
            self.publish(LifecycleEvent::OnboardingInitiated {
                employee_id: employee.id,
            });
        }
        Ok(employee)
    }

    /// Retrieves an employee by ID.
    pub async fn get_employee(&self, params: &Id) -> Result<Employee> {
        let id = params.id;
        self.with_database(move |db| db.get_employee(id)).await
    }

    /// Lists the roster with the progress of each open process.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use tenure_core::{params::ListEmployees, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let roster = tracker.list_employees(&ListEmployees::default()).await?;
    /// println!("{roster}");
    /// # Result::<(), tenure_core::LifecycleError>::Ok(())
    /// # };
    /// ```
    pub async fn list_employees(&self, params: &ListEmployees) -> Result<EmployeeSummaries> {
        let filter = EmployeeFilter::from(params);
        let summaries = self
            .with_database(move |db| db.list_summaries(&filter))
            .await?;
        Ok(EmployeeSummaries(summaries))
    }

    /// Corrects salary, allowances, deductions or leave balance.
    pub async fn update_compensation(&self, params: &UpdateCompensation) -> Result<Employee> {
        let params = params.clone();
        self.with_database(move |db| db.update_compensation(&params))
            .await
    }
}

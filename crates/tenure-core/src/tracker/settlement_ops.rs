//! Settlement figures, exit documents and exports for the Tracker.

use super::Tracker;
use crate::{
    display::ExitDocuments,
    error::Result,
    export::ExitSnapshot,
    models::FinalSettlement,
    params::{ExportOffboarding, Id},
};

impl Tracker {
    /// Computes the settlement breakdown with the tracker's policy. Safe to
    /// call at any time; nothing is stored.
    pub async fn final_settlement(&self, params: &Id) -> Result<FinalSettlement> {
        let id = params.id;
        let policy = self.policy;
        self.with_database(move |db| db.final_settlement(id, &policy))
            .await
    }

    /// Lists the documents generated by the last successful settlement run.
    pub async fn documents(&self, params: &Id) -> Result<ExitDocuments> {
        let id = params.id;
        let documents = self.with_database(move |db| db.get_documents(id)).await?;
        Ok(ExitDocuments(documents))
    }

    /// Builds the export snapshot of an offboarding.
    pub async fn exit_snapshot(&self, params: &Id) -> Result<ExitSnapshot> {
        let id = params.id;
        self.with_database(move |db| {
            let employee = db.get_employee(id)?;
            let record = db.get_offboarding(id)?;
            Ok(ExitSnapshot::new(&employee, &record))
        })
        .await
    }

    /// Renders the offboarding snapshot as JSON or CSV.
    pub async fn export_offboarding(&self, params: &ExportOffboarding) -> Result<String> {
        self.exit_snapshot(&Id {
            id: params.employee_id,
        })
        .await?
        .render(params.format)
    }
}

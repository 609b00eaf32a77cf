use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ReportStatus, WasteType};
use crate::errors::CoreError;

/// Where a waste incident was observed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// A reported waste incident.
///
/// `user_name` is denormalized from the reporting `User` for display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WasteReport {
    pub id: String,
    /// Reporting user (`User::id`).
    pub user_id: String,
    pub user_name: String,
    pub description: String,
    pub image_url: String,
    pub location: Location,
    pub status: ReportStatus,
    pub waste_type: WasteType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WasteReport {
    /// Move the report to `next` and stamp `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` when the lifecycle does not
    /// allow `status -> next`. The report is left unchanged.
    pub fn transition_to(
        &mut self,
        next: ReportStatus,
        at: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "waste_report".to_string(),
                id: self.id.clone(),
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        self.updated_at = at;
        Ok(())
    }
}

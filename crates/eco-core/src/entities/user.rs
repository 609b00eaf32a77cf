use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// A registered account.
///
/// Created on registration and mutated on role change or point accrual,
/// both of which happen outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    /// Accumulated reward points. Unsigned, so never negative.
    pub points: u64,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Add `amount` points, saturating at `u64::MAX`.
    pub const fn award_points(&mut self, amount: u64) {
        self.points = self.points.saturating_add(amount);
    }
}

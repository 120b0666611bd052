use serde::{Deserialize, Serialize};

use crate::common::{id_from_any, opt_number_from_any};
use crate::status::{RatingStatus, UserRole};

/// A rating left by one party of a contract about the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rating {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(alias = "from")]
    pub from_user: Option<String>,
    #[serde(alias = "to")]
    pub to_user: Option<String>,
    #[serde(alias = "role")]
    pub reviewer_role: UserRole,
    #[serde(deserialize_with = "opt_number_from_any")]
    pub score: Option<f64>,
    pub comment: Option<String>,
    pub status: RatingStatus,
    pub created_at: Option<String>,
}

impl Rating {
    /// Score rounded and clamped to the 0..=5 star range.
    pub fn stars(&self) -> u8 {
        self.score
            .map(|s| s.round().clamp(0.0, 5.0) as u8)
            .unwrap_or(0)
    }
}

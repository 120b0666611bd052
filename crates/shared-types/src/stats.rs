use serde::{Deserialize, Serialize};

use crate::common::opt_number_from_any;

/// Platform-wide counters from `GET /admin/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformStats {
    pub total_workers: u64,
    pub total_employers: u64,
    pub active_jobs: u64,
    pub active_contracts: u64,
    pub pending_payments: u64,
    #[serde(alias = "pendingKycReviews")]
    pub pending_kyc: u64,
    /// Sum of settled payment amounts.
    #[serde(deserialize_with = "opt_number_from_any")]
    pub settled_volume: Option<f64>,
}

use serde::{Deserialize, Serialize};

use crate::common::{id_from_any, opt_number_from_any};
use crate::status::{ContractStatus, JobStatus};

/// A job posting as returned by `GET /admin/jobs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    pub title: String,
    #[serde(alias = "employer")]
    pub employer_name: Option<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "opt_number_from_any")]
    pub wage: Option<f64>,
    pub status: JobStatus,
    #[serde(alias = "applicants")]
    pub applicant_count: u32,
    pub description: Option<String>,
    pub created_at: Option<String>,
}

/// A work contract as returned by `GET /admin/contracts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contract {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    pub job_title: Option<String>,
    #[serde(alias = "worker")]
    pub worker_name: Option<String>,
    #[serde(alias = "employer")]
    pub employer_name: Option<String>,
    #[serde(deserialize_with = "opt_number_from_any")]
    pub wage: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: ContractStatus,
    /// On-chain transaction reference, displayed only.
    #[serde(alias = "hash", alias = "chainTxHash")]
    pub tx_hash: Option<String>,
    pub created_at: Option<String>,
}

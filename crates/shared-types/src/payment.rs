use serde::{Deserialize, Serialize};

use crate::common::{id_from_any, opt_id_from_any, opt_number_from_any};
use crate::status::{PaymentMethod, PaymentStatus};

/// A payment record as returned by `GET /admin/payments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(deserialize_with = "opt_id_from_any")]
    pub contract_id: Option<String>,
    #[serde(alias = "payer")]
    pub sender: Option<String>,
    #[serde(alias = "payee")]
    pub receiver: Option<String>,
    #[serde(deserialize_with = "opt_number_from_any")]
    pub amount: Option<f64>,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub idempotency_key: Option<String>,
    #[serde(alias = "externalReference")]
    pub external_ref: Option<String>,
    #[serde(alias = "chainTxHash")]
    pub tx_hash: Option<String>,
    pub created_at: Option<String>,
}

use serde::{Deserialize, Serialize};

use crate::common::{id_from_any, opt_number_from_any};
use crate::status::{AccountStatus, KycStatus, UserRole};

/// A worker or employer account as returned by `GET /admin/users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAccount {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(alias = "fullName")]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub kyc_status: KycStatus,
    /// Account standing. The backend calls this field `status`.
    #[serde(rename = "status", alias = "accountStatus")]
    pub account_status: AccountStatus,
    pub wallet_address: Option<String>,
    /// Workers only.
    pub skill: Option<String>,
    /// Employers only.
    #[serde(alias = "companyName")]
    pub company: Option<String>,
    /// Employers only.
    pub business_field: Option<String>,
    /// Employers only: the person registered behind the company.
    pub contact_person: Option<String>,
    #[serde(alias = "domicile")]
    pub location: Option<String>,
    #[serde(deserialize_with = "opt_number_from_any")]
    pub rating: Option<f64>,
    #[serde(alias = "profilePhotoUrl")]
    pub photo_url: Option<String>,
    #[serde(alias = "ktpUrl")]
    pub id_card_url: Option<String>,
    pub kyc_verified_at: Option<String>,
    pub last_active: Option<String>,
    pub created_at: Option<String>,
}

impl UserAccount {
    pub fn is_verified(&self) -> bool {
        self.kyc_status == KycStatus::Verified
    }

    /// Company name for employers, falling back to the account name.
    pub fn display_company(&self) -> &str {
        self.company
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(&self.name)
    }
}

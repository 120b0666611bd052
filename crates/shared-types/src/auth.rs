use serde::{Deserialize, Serialize};

use crate::common::id_from_any;
use crate::status::UserRole;

/// The signed-in administrator, as stored alongside the token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminUser {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl AdminUser {
    /// Name for the top bar, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `data` of a successful login envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AdminUser,
}

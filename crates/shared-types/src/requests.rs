use serde::{Deserialize, Serialize};

use crate::status::{KycStatus, StatusVocabulary, UserRole};

/// Anything that can be rendered as list-endpoint query parameters.
///
/// Implementations omit empty values; the client never sends `search=`.
pub trait QueryParams {
    fn pairs(&self) -> Vec<(&'static str, String)>;
}

/// Endpoints without parameters.
impl QueryParams for () {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

fn push_non_empty(out: &mut Vec<(&'static str, String)>, key: &'static str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        out.push((key, value.to_string()));
    }
}

/// Query for the jobs, contracts, payments and ratings lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    /// Backend status key, empty for "all".
    pub status: String,
}

impl ListQuery {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.status.trim().is_empty()
    }
}

impl QueryParams for ListQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push_non_empty(&mut out, "search", &self.search);
        push_non_empty(&mut out, "status", &self.status);
        out
    }
}

/// Query for `GET /admin/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    pub role: Option<UserRole>,
    pub search: String,
    /// KYC status key, empty for "all".
    pub kyc_status: String,
}

impl UserQuery {
    pub fn for_role(role: UserRole) -> Self {
        Self {
            role: Some(role),
            ..Default::default()
        }
    }
}

impl QueryParams for UserQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(role) = self.role.filter(|r| *r != UserRole::Unknown) {
            out.push(("role", role.as_str().to_string()));
        }
        push_non_empty(&mut out, "search", &self.search);
        push_non_empty(&mut out, "kycStatus", &self.kyc_status);
        out
    }
}

/// Body of `POST /admin/users/{id}/verify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyKycRequest {
    pub status: KycStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl VerifyKycRequest {
    /// Blank notes are dropped from the body.
    pub fn new(status: KycStatus, note: &str) -> Self {
        let note = note.trim();
        Self {
            status,
            note: (!note.is_empty()).then(|| note.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_omits_empty_values() {
        let q = ListQuery {
            search: "  ".into(),
            status: "open".into(),
        };
        assert_eq!(q.pairs(), vec![("status", "open".to_string())]);
        assert!(ListQuery::default().pairs().is_empty());
        assert!(ListQuery::default().is_empty());
    }

    #[test]
    fn user_query_uses_backend_keys() {
        let q = UserQuery {
            role: Some(UserRole::Worker),
            search: "siti".into(),
            kyc_status: "pending".into(),
        };
        assert_eq!(
            q.pairs(),
            vec![
                ("role", "worker".to_string()),
                ("search", "siti".to_string()),
                ("kycStatus", "pending".to_string()),
            ]
        );
    }

    #[test]
    fn verify_request_drops_blank_note() {
        let req = VerifyKycRequest::new(KycStatus::Verified, "   ");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"status": "verified"})
        );
        let req = VerifyKycRequest::new(KycStatus::Rejected, " blurry photo ");
        assert_eq!(req.note.as_deref(), Some("blurry photo"));
    }
}

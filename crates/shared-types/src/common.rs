use serde::{Deserialize, Deserializer, Serialize};

use crate::AppError;

/// The backend's JSON response wrapper: `{ success, data, message? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Unwrap the payload, turning `success: false` into a `Rejected` error.
    pub fn into_result(self) -> Result<T, AppError> {
        if !self.success {
            return Err(AppError::rejected(
                self.message
                    .unwrap_or_else(|| "The request was rejected by the server".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| AppError::decode("Response envelope has no data"))
    }
}

/// Error body shape used by the backend on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best-effort message extraction from a raw error body.
    pub fn message_from(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        parsed
            .message
            .or(parsed.error)
            .filter(|m| !m.trim().is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl RawScalar {
    fn into_string(self) -> String {
        match self {
            RawScalar::Text(s) => s,
            RawScalar::Int(i) => i.to_string(),
            RawScalar::Float(f) => f.to_string(),
            RawScalar::Bool(b) => b.to_string(),
        }
    }

    fn into_f64(self) -> Option<f64> {
        match self {
            RawScalar::Text(s) => s.trim().parse().ok(),
            RawScalar::Int(i) => Some(i as f64),
            RawScalar::Float(f) => Some(f),
            RawScalar::Bool(_) => None,
        }
    }
}

/// Deserialize an id that the backend may send as a string or a number.
pub fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawScalar::deserialize(deserializer)?.into_string())
}

/// Optional variant of [`id_from_any`]; `null` and absent both become `None`.
pub fn opt_id_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawScalar>::deserialize(deserializer)?.map(RawScalar::into_string))
}

/// Deserialize a money or score value sent as a number or a numeric string
/// (decimal columns often arrive as `"150000.00"`). Unparseable text is `None`.
pub fn opt_number_from_any<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawScalar>::deserialize(deserializer)?.and_then(RawScalar::into_f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "id_from_any")]
        id: String,
        #[serde(default, deserialize_with = "opt_number_from_any")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "opt_id_from_any")]
        parent: Option<String>,
    }

    #[test]
    fn id_accepts_numbers_and_strings() {
        let a: Probe = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        let b: Probe = serde_json::from_str(r#"{"id": "W-1001"}"#).unwrap();
        assert_eq!(a.id, "42");
        assert_eq!(b.id, "W-1001");
    }

    #[test]
    fn amount_accepts_numeric_strings() {
        let p: Probe = serde_json::from_str(r#"{"id": 1, "amount": "150000.00"}"#).unwrap();
        assert_eq!(p.amount, Some(150000.0));
        let p: Probe = serde_json::from_str(r#"{"id": 1, "amount": 99.5}"#).unwrap();
        assert_eq!(p.amount, Some(99.5));
        let p: Probe = serde_json::from_str(r#"{"id": 1, "amount": "n/a"}"#).unwrap();
        assert_eq!(p.amount, None);
    }

    #[test]
    fn optional_id_handles_null_and_absent() {
        let p: Probe = serde_json::from_str(r#"{"id": 1, "parent": null}"#).unwrap();
        assert_eq!(p.parent, None);
        let p: Probe = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(p.parent, None);
        let p: Probe = serde_json::from_str(r#"{"id": 1, "parent": 7}"#).unwrap();
        assert_eq!(p.parent.as_deref(), Some("7"));
    }

    #[test]
    fn envelope_success_unwraps_data() {
        let env: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": true, "data": [1, 2, 3]}"#).unwrap();
        assert_eq!(env.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn envelope_failure_carries_message() {
        let env: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": false, "message": "Invalid status"}"#).unwrap();
        let err = env.into_result().unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::Rejected);
        assert_eq!(err.message, "Invalid status");
    }

    #[test]
    fn envelope_success_without_data_is_decode_error() {
        let env: ApiEnvelope<Vec<u32>> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(
            env.into_result().unwrap_err().kind,
            crate::AppErrorKind::Decode
        );
    }

    #[test]
    fn error_body_prefers_message_then_error() {
        assert_eq!(
            ErrorBody::message_from(r#"{"message": "Token expired"}"#).as_deref(),
            Some("Token expired")
        );
        assert_eq!(
            ErrorBody::message_from(r#"{"error": "Forbidden"}"#).as_deref(),
            Some("Forbidden")
        );
        assert_eq!(ErrorBody::message_from("<html>502</html>"), None);
        assert_eq!(ErrorBody::message_from(r#"{"message": ""}"#), None);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of failures surfaced by the admin API client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// The request never produced an HTTP response (DNS, CORS, offline, timeout).
    Network,
    Unauthorized,
    Forbidden,
    NotFound,
    BadRequest,
    /// HTTP 2xx, but the envelope reported `success: false`.
    Rejected,
    /// Any other non-2xx status.
    Server,
    /// The body could not be decoded into the expected shape.
    Decode,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::Rejected => write!(f, "Rejected"),
            AppErrorKind::Server => write!(f, "Server"),
            AppErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// Structured error returned by every client call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// HTTP status, when the failure came from a response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Rejected, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Server, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Decode, message)
    }

    /// Build an error from a non-2xx HTTP status.
    ///
    /// 400 and 422 map to `BadRequest`; 401, 403 and 404 to their own kinds;
    /// everything else to `Server`.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            400 | 422 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            _ => AppErrorKind::Server,
        };
        Self {
            kind,
            message: message.into(),
            status: Some(status),
        }
    }

    /// Whether this error means the stored session is no longer valid.
    pub fn is_unauthorized(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }

    /// Message suitable for a toast.
    ///
    /// Backend-provided messages are shown as-is; transport and decode
    /// failures get a generic sentence since their detail is not actionable.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Network => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            AppErrorKind::Decode => "The server sent an unexpected response.".to_string(),
            AppErrorKind::Unauthorized => {
                "Your session has expired. Please sign in again.".to_string()
            }
            _ if self.message.trim().is_empty() => {
                "Something went wrong. Please try again.".to_string()
            }
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

use shared_types::AppError;
use shared_ui::{error_toast_options, ToastOptions, Toasts};

use crate::auth::AuthState;

/// Toast title used when a request comes back `401`.
pub const SESSION_EXPIRED: &str = "Session expired";

/// What the user should see for a failed call.
///
/// Returns the toast title and detail. An expired session replaces the
/// caller's title, since the action itself is no longer the problem.
fn error_toast_text(action: &str, err: &AppError) -> (String, String) {
    if err.is_unauthorized() {
        (SESSION_EXPIRED.to_string(), err.friendly_message())
    } else {
        (action.to_string(), err.friendly_message())
    }
}

/// Log a failed call and surface it as an error toast.
///
/// `401` also ends the session; the auth guard then sends the admin back to
/// the login screen.
pub fn report_error(mut auth: AuthState, toasts: Toasts, action: &str, err: &AppError) {
    tracing::warn!(
        kind = %err.kind,
        status = ?err.status,
        error = %err.message,
        "{action}"
    );
    let (title, detail) = error_toast_text(action, err);
    toasts.error(title, error_toast_options(detail));
    if err.is_unauthorized() {
        auth.logout();
    }
}

pub fn report_success(toasts: Toasts, message: impl Into<String>) {
    toasts.success(message.into(), ToastOptions::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_uses_session_title() {
        let err = AppError::from_status(401, "jwt expired");
        let (title, detail) = error_toast_text("Could not load jobs", &err);
        assert_eq!(title, SESSION_EXPIRED);
        assert_eq!(detail, "Your session has expired. Please sign in again.");
    }

    #[test]
    fn other_errors_keep_action_title() {
        let err = AppError::rejected("Note is required for rejection");
        let (title, detail) = error_toast_text("Could not save KYC decision", &err);
        assert_eq!(title, "Could not save KYC decision");
        assert_eq!(detail, "Note is required for rejection");
    }

    #[test]
    fn network_errors_get_generic_detail() {
        let err = AppError::network("error sending request: connection refused");
        let (_, detail) = error_toast_text("Could not load workers", &err);
        assert!(detail.starts_with("Could not reach the server"));
    }
}

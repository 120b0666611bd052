use client::Session;
use dioxus::prelude::*;
use shared_types::{AppError, AppErrorKind};
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

use crate::auth::use_auth;
use crate::routes::Route;

/// Inline text for a failed sign-in.
///
/// Credential and validation failures carry a useful backend message;
/// everything else gets the generic wording for its kind.
fn login_error_message(err: &AppError) -> String {
    match err.kind {
        AppErrorKind::Unauthorized | AppErrorKind::Rejected | AppErrorKind::BadRequest
            if !err.message.trim().is_empty() =>
        {
            err.message.clone()
        }
        AppErrorKind::Unauthorized => "Incorrect email or password.".to_string(),
        _ => err.friendly_message(),
    }
}

/// Route to open after signing in.
///
/// Only in-app absolute paths are honoured; anything else, including
/// protocol-relative `//host` targets and the login page itself, falls back
/// to the dashboard.
fn safe_redirect(target: Option<&str>) -> Route {
    target
        .map(str::trim)
        .filter(|t| t.starts_with('/') && !t.starts_with("//"))
        .and_then(|t| t.parse::<Route>().ok())
        .filter(|r| !matches!(r, Route::Login { .. } | Route::NotFound { .. }))
        .unwrap_or(Route::Dashboard {})
}

/// Sign-in form. `redirect` comes from the auth guard.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let redirect_target = use_signal(move || redirect);
    let go_to_destination = move || {
        let route = safe_redirect(redirect_target.read().as_deref());
        navigator().replace(route);
    };

    if auth.is_ready() && auth.is_authenticated() {
        go_to_destination();
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        if email().trim().is_empty() || password().is_empty() {
            error_msg.set(Some("Enter your email and password.".to_string()));
            return;
        }
        loading.set(true);
        error_msg.set(None);

        match auth.client().login(&email(), &password()).await {
            Ok(resp) => {
                auth.login(Session::new(resp.token, resp.user));
                go_to_destination();
            }
            Err(err) => {
                tracing::warn!(kind = %err.kind, error = %err.message, "Sign-in failed");
                password.set(String::new());
                error_msg.set(Some(login_error_message(&err)));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    div { class: "auth-brand",
                        span { class: "auth-brand-mark", "GL" }
                    }
                    CardTitle { "Admin sign in" }
                    CardDescription { "Use your administrator account to manage the marketplace" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            placeholder: "admin@example.com",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            class: "auth-submit",
                            button_type: "submit",
                            loading: loading(),
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn backend_message_shown_for_bad_credentials() {
        let err = AppError::from_status(401, "Invalid email or password");
        assert_eq!(login_error_message(&err), "Invalid email or password");
        let err = AppError::rejected("Account is blocked");
        assert_eq!(login_error_message(&err), "Account is blocked");
        let err = AppError::bad_request("Email must be a valid address");
        assert_eq!(login_error_message(&err), "Email must be a valid address");
    }

    #[test]
    fn blank_unauthorized_gets_generic_text() {
        let err = AppError::from_status(401, "");
        assert_eq!(login_error_message(&err), "Incorrect email or password.");
    }

    #[test]
    fn network_failure_uses_friendly_text() {
        let err = AppError::network("error sending request");
        assert_eq!(
            login_error_message(&err),
            "Could not reach the server. Check your connection and try again."
        );
    }

    #[test]
    fn redirect_accepts_internal_paths() {
        assert_eq!(safe_redirect(Some("/payments")), Route::Payments {});
        assert_eq!(safe_redirect(Some("/workers")), Route::Workers {});
    }

    #[test]
    fn redirect_rejects_everything_else() {
        assert_eq!(safe_redirect(None), Route::Dashboard {});
        assert_eq!(safe_redirect(Some("https://evil.example")), Route::Dashboard {});
        assert_eq!(safe_redirect(Some("//evil.example")), Route::Dashboard {});
        assert_eq!(safe_redirect(Some("/login")), Route::Dashboard {});
        assert_eq!(safe_redirect(Some("/no/such/page")), Route::Dashboard {});
    }
}

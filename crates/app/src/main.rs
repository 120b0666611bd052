use dioxus::prelude::*;
use shared_ui::theme::{ThemeFamily, ThemeState};

mod auth;
mod components;
mod format_helpers;
mod list_state;
mod notify;
mod routes;

use auth::{AuthState, SessionLoader};
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const THEME_HARBOR: Asset = asset!("/assets/themes/harbor.css");
const THEME_LEDGER: Asset = asset!("/assets/themes/ledger.css");
const THEME_MIDNIGHT: Asset = asset!("/assets/themes/midnight.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);
    use_context_provider(|| ThemeState {
        family: Signal::new(ThemeFamily::default()),
        is_dark: Signal::new(false),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: THEME_HARBOR }
        document::Link { rel: "stylesheet", href: THEME_LEDGER }
        document::Link { rel: "stylesheet", href: THEME_MIDNIGHT }
        shared_ui::theme::ThemeSeed {}
        SessionLoader {}
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

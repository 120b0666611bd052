use dioxus::prelude::*;
use shared_types::StatusVocabulary;
use shared_ui::theme::{ThemeFamily, ThemeState, ALL_FAMILIES};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, DetailItem, DetailList, FormSelect,
    LabeledSwitch,
};

use crate::auth::use_auth;

fn family_options() -> Vec<(String, String)> {
    ALL_FAMILIES
        .iter()
        .map(|f| (f.as_str().to_string(), f.display_name().to_string()))
        .collect()
}

/// Short note under the dark-mode switch.
fn mode_hint(family: ThemeFamily) -> &'static str {
    match (family.has_light(), family.has_dark()) {
        (true, true) => "Switch between the light and dark variants.",
        (true, false) => "This theme has a light variant only.",
        _ => "This theme has a dark variant only.",
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        div { class: "settings-page",
            AppearanceSection {}
            ConnectionSection {}
        }
    }
}

#[component]
fn AppearanceSection() -> Element {
    let mut theme_state: ThemeState = use_context();
    let family = (theme_state.family)();
    let is_dark = (theme_state.is_dark)();
    let hint = mode_hint(family);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Appearance" }
                CardDescription { "Theme preferences are stored in this browser." }
            }
            CardContent {
                div { class: "settings-fields",
                    FormSelect {
                        label: "Theme",
                        value: family.as_str().to_string(),
                        options: family_options(),
                        on_change: move |key: String| {
                            let next = ThemeFamily::from_key(&key);
                            theme_state.family.set(next);
                            if !next.has_light() {
                                theme_state.is_dark.set(true);
                            } else if !next.has_dark() {
                                theme_state.is_dark.set(false);
                            }
                            theme_state.apply();
                        },
                    }
                    LabeledSwitch {
                        label: "Dark mode",
                        checked: is_dark,
                        disabled: !theme_state.mode_switchable(),
                        on_change: move |dark: bool| {
                            theme_state.is_dark.set(dark);
                            theme_state.apply();
                        },
                    }
                    p { class: "settings-hint", "{hint}" }
                }
            }
        }
    }
}

#[component]
fn ConnectionSection() -> Element {
    let auth = use_auth();
    let config = client::config();
    let user = auth.current_user().unwrap_or_default();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Connection" }
                CardDescription { "Read from config.toml when the dashboard was built." }
            }
            CardContent {
                DetailList {
                    DetailItem { label: "API base URL", value: config.api.base_url.clone() }
                    DetailItem { label: "Block explorer", value: config.api.explorer_url.clone() }
                    DetailItem { label: "Rows per page", value: config.table.page_size.to_string() }
                    DetailItem { label: "Signed in as", value: user.email.clone() }
                    DetailItem { label: "Role", value: user.role.label() }
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
    fn every_family_is_offered() {
        let options = family_options();
        assert_eq!(options.len(), ALL_FAMILIES.len());
        assert_eq!(options[0], ("harbor".to_string(), "Harbor".to_string()));
    }

    #[test]
    fn hints_follow_available_modes() {
        assert_eq!(mode_hint(ThemeFamily::Harbor), "Switch between the light and dark variants.");
        assert_eq!(mode_hint(ThemeFamily::Ledger), "This theme has a light variant only.");
        assert_eq!(mode_hint(ThemeFamily::Midnight), "This theme has a dark variant only.");
    }
}

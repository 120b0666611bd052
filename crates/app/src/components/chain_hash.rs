use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCopy, LdExternalLink};
use dioxus_free_icons::Icon;
use shared_types::ApiConfig;
use shared_ui::use_toast;

use crate::format_helpers::{truncate_hash, EMPTY};
use crate::notify::report_success;

/// What an on-chain reference points at. Decides the explorer path and copy text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainRef {
    #[default]
    Transaction,
    Address,
}

impl ChainRef {
    pub fn explorer_url(&self, api: &ApiConfig, value: &str) -> String {
        match self {
            ChainRef::Transaction => api.explorer_tx_url(value),
            ChainRef::Address => api.explorer_address_url(value),
        }
    }

    fn copy_label(&self) -> &'static str {
        match self {
            ChainRef::Transaction => "Copy transaction hash",
            ChainRef::Address => "Copy wallet address",
        }
    }

    fn copied_message(&self) -> &'static str {
        match self {
            ChainRef::Transaction => "Transaction hash copied",
            ChainRef::Address => "Wallet address copied",
        }
    }
}

/// Shortened chain reference with a copy button and an explorer link.
#[component]
pub fn ChainHash(value: Option<String>, #[props(default)] kind: ChainRef) -> Element {
    let toasts = use_toast();
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return rsx! { span { class: "chain-hash-empty", "{EMPTY}" } };
    };
    let short = truncate_hash(&value);
    let explorer = kind.explorer_url(&client::config().api, &value);
    let copy_value = value.clone();

    rsx! {
        span { class: "chain-hash",
            code { class: "chain-hash-value", title: "{value}", "{short}" }
            button {
                r#type: "button",
                class: "chain-hash-action",
                "aria-label": kind.copy_label(),
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    match serde_json::to_string(&copy_value) {
                        Ok(literal) => {
                            document::eval(&format!("navigator.clipboard.writeText({literal});"));
                            report_success(toasts, kind.copied_message());
                        }
                        Err(e) => tracing::warn!(error = %e, "Could not copy chain reference"),
                    }
                },
                Icon::<LdCopy> { icon: LdCopy, width: 14, height: 14 }
            }
            a {
                class: "chain-hash-action",
                href: "{explorer}",
                target: "_blank",
                rel: "noopener noreferrer",
                "aria-label": "Open in block explorer",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                Icon::<LdExternalLink> { icon: LdExternalLink, width: 14, height: 14 }
            }
        }
    }
}

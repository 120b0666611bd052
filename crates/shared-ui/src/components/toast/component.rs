use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{consume_toast, use_toast, ToastOptions, ToastType, Toasts};

/// How long error toasts stay up. Errors linger longer than confirmations.
pub const ERROR_TOAST_DURATION: Duration = Duration::from_secs(6);

#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}

#[component]
pub fn Toast(mut props: prim::ToastProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "admin-toast", None, false));

    rsx! {
        prim::Toast { ..props }
    }
}

/// Options for an error toast with a detail line.
pub fn error_toast_options(detail: impl Into<String>) -> ToastOptions {
    ToastOptions::new()
        .description(detail.into())
        .duration(ERROR_TOAST_DURATION)
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

/// Which edge of the screen the sheet slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetSide {
    #[default]
    Right,
    /// Centered dialog instead of an edge panel.
    Center,
}

impl SheetSide {
    fn class(&self) -> &'static str {
        match self {
            SheetSide::Right => "right",
            SheetSide::Center => "center",
        }
    }
}

/// Modal panel over a dimmed backdrop.
///
/// Closes on backdrop click and on Escape. Renders nothing while closed.
#[component]
pub fn Sheet(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] side: SheetSide,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sheet-overlay",
            "data-open": "true",
            tabindex: -1,
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet-panel",
                role: "dialog",
                "aria-modal": "true",
                "data-side": side.class(),
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn SheetContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sheet-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Title row with a close button.
#[component]
pub fn SheetHeader(
    title: String,
    #[props(default)] description: String,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "sheet-header",
            div {
                h2 { class: "sheet-title", "{title}" }
                if !description.is_empty() {
                    p { class: "sheet-description", "{description}" }
                }
            }
            button {
                class: "sheet-close",
                r#type: "button",
                "aria-label": "Close",
                onclick: move |_| on_close.call(()),
                Icon::<LdX> { icon: LdX, width: 16, height: 16 }
            }
        }
    }
}

#[component]
pub fn SheetFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sheet-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

use dioxus::prelude::*;

/// Page heading with an optional description and trailing actions.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] description: String,
    #[props(default)] actions: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div { class: "page-header-text",
                h1 { class: "page-title", "{title}" }
                if !description.is_empty() {
                    p { class: "page-description", "{description}" }
                }
            }
            if let Some(actions) = actions {
                div { class: "page-actions", {actions} }
            }
        }
    }
}

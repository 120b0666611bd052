use dioxus::prelude::*;

/// Vertical list of label/value rows for detail panels.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// One label/value row inside a [`DetailList`].
///
/// Plain text goes in `value`; badges, links and buttons go in children.
/// An empty value renders as a dash.
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default, into)] value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());
    let text = if value.trim().is_empty() {
        "-".to_string()
    } else {
        value
    };

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value",
                if has_children {
                    {children}
                } else {
                    "{text}"
                }
            }
        }
    }
}

/// Titled block of detail content, e.g. identity documents.
#[component]
pub fn DetailSection(title: &'static str, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section { class: "detail-section",
            h4 { class: "detail-section-title", "{title}" }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_renders_dash() {
        fn app() -> Element {
            rsx! {
                DetailList {
                    DetailItem { label: "Phone", value: "" }
                    DetailItem { label: "Email", value: "siti@example.com" }
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(">-</dd>"));
        assert!(html.contains("siti@example.com"));
    }
}

use dioxus::prelude::*;

/// Loading placeholder with an animated shimmer.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![
        Attribute::new("class", "skeleton", None, false),
        Attribute::new("aria-hidden", "true", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// A stack of skeleton lines, for cards and detail panels.
#[component]
pub fn SkeletonLines(#[props(default = 3)] lines: usize) -> Element {
    rsx! {
        div { class: "skeleton-lines",
            for i in 0..lines {
                Skeleton { key: "{i}", class: if i + 1 == lines { "skeleton-line short" } else { "skeleton-line" } }
            }
        }
    }
}

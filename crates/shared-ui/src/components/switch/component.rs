use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}

/// A switch with a text label, laid out as a settings row.
#[component]
pub fn LabeledSwitch(
    label: String,
    checked: bool,
    #[props(default = false)] disabled: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "switch-row",
            span { class: "switch-row-label", "{label}" }
            Switch {
                checked: checked,
                disabled: disabled,
                on_checked_change: move |value: bool| on_change.call(value),
                SwitchThumb {}
            }
        }
    }
}

use dioxus::prelude::*;

/// Native `<select>` bound to a string value, for filters and small forms.
///
/// `options` are `(value, label)` pairs. When `placeholder` is set it is
/// rendered as a leading option with an empty value ("All ...").
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    options: Vec<(String, String)>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_change: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: "{value}",
                disabled: disabled,
                onchange: move |evt| on_change.call(evt.value()),
                if let Some(text) = placeholder {
                    option { value: "", selected: value.is_empty(), "{text}" }
                }
                for (opt_value, opt_label) in options {
                    option {
                        key: "{opt_value}",
                        selected: opt_value == value,
                        value: "{opt_value}",
                        "{opt_label}"
                    }
                }
            }
        }
    }
}


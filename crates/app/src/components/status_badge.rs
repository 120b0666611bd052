use dioxus::prelude::*;
use shared_types::{StatusVocabulary, Tone};
use shared_ui::{Badge, BadgeVariant};

/// Badge variant for a status tone.
pub fn tone_variant(tone: Tone) -> BadgeVariant {
    match tone {
        Tone::Neutral => BadgeVariant::Secondary,
        Tone::Info => BadgeVariant::Info,
        Tone::Success => BadgeVariant::Success,
        Tone::Warning => BadgeVariant::Warning,
        Tone::Danger => BadgeVariant::Destructive,
    }
}

/// Label badge for any status vocabulary value.
#[component]
pub fn StatusBadge<S: StatusVocabulary>(status: S) -> Element {
    rsx! {
        span { class: "status-badge", "data-status": status.as_str(),
            Badge { variant: tone_variant(status.tone()), "{status.label()}" }
        }
    }
}

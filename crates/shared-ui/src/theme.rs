use dioxus::prelude::*;

/// Theme families available in the dashboard.
///
/// Harbor has both modes. Ledger is light-only and Midnight is dark-only;
/// single-mode families resolve to their mode regardless of `is_dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeFamily {
    #[default]
    Harbor,
    /// High-contrast light theme for long table sessions.
    Ledger,
    Midnight,
}

/// All theme families in display order.
pub const ALL_FAMILIES: &[ThemeFamily] = &[
    ThemeFamily::Harbor,
    ThemeFamily::Ledger,
    ThemeFamily::Midnight,
];

/// `data-theme` value used before anything has been persisted.
pub const DEFAULT_THEME: &str = "harbor-light";

impl ThemeFamily {
    /// Key used for storage and select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeFamily::Harbor => "harbor",
            ThemeFamily::Ledger => "ledger",
            ThemeFamily::Midnight => "midnight",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeFamily::Harbor => "Harbor",
            ThemeFamily::Ledger => "Ledger",
            ThemeFamily::Midnight => "Midnight",
        }
    }

    /// Parse a family key, falling back to Harbor.
    pub fn from_key(s: &str) -> Self {
        match s {
            "ledger" => ThemeFamily::Ledger,
            "midnight" => ThemeFamily::Midnight,
            _ => ThemeFamily::Harbor,
        }
    }

    pub fn has_dark(&self) -> bool {
        !matches!(self, ThemeFamily::Ledger)
    }

    pub fn has_light(&self) -> bool {
        !matches!(self, ThemeFamily::Midnight)
    }

    /// Resolve to the CSS `data-theme` attribute value.
    pub fn resolve(&self, is_dark: bool) -> &'static str {
        match (self, is_dark) {
            (ThemeFamily::Harbor, true) => "harbor-dark",
            (ThemeFamily::Harbor, false) => "harbor-light",
            (ThemeFamily::Ledger, _) => "ledger",
            (ThemeFamily::Midnight, _) => "midnight",
        }
    }

    /// Inverse of [`ThemeFamily::resolve`] for a persisted `data-theme` value.
    pub fn from_theme(theme: &str) -> (ThemeFamily, bool) {
        match theme {
            "harbor-dark" => (ThemeFamily::Harbor, true),
            "ledger" => (ThemeFamily::Ledger, false),
            "midnight" => (ThemeFamily::Midnight, true),
            _ => (ThemeFamily::Harbor, false),
        }
    }
}

/// Shared theme state provided as context.
///
/// The top bar (dark toggle) and Settings (family picker) both write these
/// signals and then call [`ThemeState::apply`].
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub family: Signal<ThemeFamily>,
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    /// The `data-theme` value for the current selection.
    pub fn resolved(&self) -> &'static str {
        self.family.read().resolve(*self.is_dark.read())
    }

    /// Apply the current family and mode to the document.
    pub fn apply(&self) {
        set_theme(self.resolved());
    }

    /// Whether the dark toggle has any effect for the current family.
    pub fn mode_switchable(&self) -> bool {
        let family = *self.family.read();
        family.has_dark() && family.has_light()
    }
}

/// Seed the theme on startup from the `theme` cookie.
///
/// Applies the persisted value to `<html>` and, when a [`ThemeState`] is in
/// context, syncs its signals. Render once near the root.
#[component]
pub fn ThemeSeed() -> Element {
    let state = try_consume_context::<ThemeState>();

    use_future(move || async move {
        let mut eval = document::eval(&format!(
            r#"
            var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
            var theme = match ? match[1] : '{DEFAULT_THEME}';
            document.documentElement.setAttribute('data-theme', theme);
            dioxus.send(theme);
            "#,
        ));
        if let Ok(theme) = eval.recv::<String>().await {
            if let Some(mut state) = state {
                let (family, is_dark) = ThemeFamily::from_theme(&theme);
                state.family.set(family);
                state.is_dark.set(is_dark);
            }
        }
    });

    rsx! {}
}

/// Set the active theme, persisting it to a cookie and updating the document.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
        document.documentElement.setAttribute('data-theme', '{theme}');
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_family_is_harbor() {
        assert_eq!(ThemeFamily::default(), ThemeFamily::Harbor);
    }

    #[test]
    fn key_round_trip() {
        for family in ALL_FAMILIES {
            assert_eq!(ThemeFamily::from_key(family.as_str()), *family);
        }
        assert_eq!(ThemeFamily::from_key("cyberpunk"), ThemeFamily::Harbor);
    }

    #[test]
    fn single_mode_families_ignore_dark_flag() {
        assert_eq!(ThemeFamily::Ledger.resolve(true), "ledger");
        assert_eq!(ThemeFamily::Midnight.resolve(false), "midnight");
        assert!(!ThemeFamily::Ledger.has_dark());
        assert!(!ThemeFamily::Midnight.has_light());
    }

    #[test]
    fn resolved_theme_maps_back() {
        for family in ALL_FAMILIES {
            for dark in [true, false] {
                let theme = family.resolve(dark);
                let (back, _) = ThemeFamily::from_theme(theme);
                assert_eq!(back, *family);
            }
        }
        assert_eq!(
            ThemeFamily::from_theme("harbor-dark"),
            (ThemeFamily::Harbor, true)
        );
        assert_eq!(ThemeFamily::from_theme(DEFAULT_THEME), (ThemeFamily::Harbor, false));
    }
}

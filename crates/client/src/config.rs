use std::sync::OnceLock;

use shared_types::AppConfig;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` embedded at build time; the web target has no filesystem.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Build-time override for `api.base_url`.
const BASE_URL_OVERRIDE: Option<&str> = option_env!("ADMIN_API_BASE_URL");

/// The process-wide configuration, parsed on first use.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let cfg = parse(EMBEDDED_CONFIG, BASE_URL_OVERRIDE);
        tracing::info!(base_url = %cfg.api.base_url, "Loaded admin configuration");
        cfg
    })
}

/// Parse a TOML document, apply the base URL override and normalize.
///
/// An invalid document logs a warning and yields the defaults.
pub fn parse(raw: &str, base_url_override: Option<&str>) -> AppConfig {
    let mut cfg = match toml::from_str::<AppConfig>(raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid config.toml, using defaults");
            AppConfig::default()
        }
    };
    if let Some(url) = base_url_override.filter(|u| !u.trim().is_empty()) {
        cfg.api.base_url = url.to_string();
    }
    cfg.normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        let cfg = parse(EMBEDDED_CONFIG, None);
        assert_eq!(cfg.api.base_url, "http://localhost:3001/api");
        assert_eq!(cfg.table.page_size, 10);
    }

    #[test]
    fn override_replaces_base_url() {
        let cfg = parse(EMBEDDED_CONFIG, Some("https://api.example.com/api/"));
        assert_eq!(cfg.api.base_url, "https://api.example.com/api");
        let cfg = parse(EMBEDDED_CONFIG, Some("  "));
        assert_eq!(cfg.api.base_url, "http://localhost:3001/api");
    }

    #[test]
    fn broken_toml_falls_back_to_defaults() {
        let cfg = parse("[api\nbase_url = ", None);
        assert_eq!(cfg, AppConfig::default().normalized());
    }
}

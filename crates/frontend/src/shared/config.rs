//! Build-time configuration.
//!
//! The storefront has no server to ask, so everything configurable is baked in
//! when the WASM bundle is compiled:
//! - `CDN_CLIENT_ID`: Brandfetch client id appended to logo URLs (optional)
//! - `VAULT_LOG_LEVEL`: console log level: error|warn|info|debug|trace

/// External link shown in the header next to the support button.
pub const PROFILE_BUILDER_URL: &str = "https://theprofilebuilder.com/";

/// Brand logo served from the static assets.
pub const BRAND_LOGO_PATH: &str = "/vault.svg";

/// Base of the messaging deep link, the handle is appended without its `@`.
pub const MESSAGING_LINK_BASE: &str = "https://t.me";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub cdn_client_id: Option<String>,
    pub log_level: log::Level,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("CDN_CLIENT_ID"), option_env!("VAULT_LOG_LEVEL"))
    }

    fn from_values(cdn_client_id: Option<&str>, log_level: Option<&str>) -> Self {
        let cdn_client_id = cdn_client_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        let log_level = log_level
            .and_then(|level| level.trim().parse::<log::Level>().ok())
            .unwrap_or_else(default_log_level);
        Self {
            cdn_client_id,
            log_level,
        }
    }
}

fn default_log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Configuration read once per process.
pub fn app_config() -> &'static AppConfig {
    static CONFIG: once_cell::sync::Lazy<AppConfig> =
        once_cell::sync::Lazy::new(AppConfig::from_build_env);
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.cdn_client_id, None);
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn test_values_are_parsed() {
        let config = AppConfig::from_values(Some(" abc "), Some("warn"));
        assert_eq!(config.cdn_client_id.as_deref(), Some("abc"));
        assert_eq!(config.log_level, log::Level::Warn);
    }

    #[test]
    fn test_blank_client_id_and_bad_level_fall_back() {
        let config = AppConfig::from_values(Some(""), Some("loud"));
        assert_eq!(config.cdn_client_id, None);
        assert_eq!(config.log_level, default_log_level());
    }
}

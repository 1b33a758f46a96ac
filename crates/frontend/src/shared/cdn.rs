//! Logo URLs for service tiles and the details overlay.

use crate::shared::config::app_config;
use contracts::shared::logo::{build_logo_url, LogoSize};

/// Resolves a catalog logo identifier to an `<img src>`.
///
/// Never fails: an identifier that cannot be turned into a URL yields an empty
/// string, which callers render as the monogram fallback.
pub fn cdn_logo_url(logo: &str, size: LogoSize) -> String {
    resolve_logo_url(logo, size, app_config().cdn_client_id.as_deref())
}

pub fn resolve_logo_url(logo: &str, size: LogoSize, client_id: Option<&str>) -> String {
    if client_id.is_none() && !logo.starts_with(contracts::shared::logo::LOCAL_ASSET_MARKER) {
        log::warn!("CDN_CLIENT_ID is not set, requesting '{}' logo without client id", logo);
    }
    match build_logo_url(logo, size, client_id) {
        Ok(url) => url,
        Err(e) => {
            log::error!("Error generating CDN URL for '{}': {}", logo, e);
            String::new()
        }
    }
}

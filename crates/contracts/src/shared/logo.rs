//! Logo URL construction for catalog entries.
//!
//! A logo identifier is either a bundled asset (`@vault.svg` → `/vault.svg`)
//! or a brand domain resolved through the Brandfetch logo CDN.

pub const LOGO_CDN_BASE: &str = "https://cdn.brandfetch.io";
pub const LOCAL_ASSET_MARKER: char = '@';
pub const DEFAULT_LOGO_WIDTH: u32 = 512;
pub const DEFAULT_LOGO_HEIGHT: u32 = 156;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogoUrlError {
    #[error("logo identifier is empty")]
    Empty,
    #[error("local asset marker without a file name")]
    EmptyAssetName,
    #[error("'{0}' is not a valid brand domain")]
    InvalidDomain(String),
    #[error("logo size {width}x{height} is invalid")]
    InvalidSize { width: u32, height: u32 },
}

/// Requested logo dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoSize {
    pub width: u32,
    pub height: u32,
}

impl Default for LogoSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_LOGO_WIDTH,
            height: DEFAULT_LOGO_HEIGHT,
        }
    }
}

/// Where a logo identifier points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoSource<'a> {
    LocalAsset(&'a str),
    BrandDomain(&'a str),
}

impl<'a> LogoSource<'a> {
    pub fn parse(logo: &'a str) -> Result<Self, LogoUrlError> {
        let logo = logo.trim();
        if logo.is_empty() {
            return Err(LogoUrlError::Empty);
        }
        if let Some(file) = logo.strip_prefix(LOCAL_ASSET_MARKER) {
            let file = file.trim_start_matches('/');
            if file.is_empty() {
                return Err(LogoUrlError::EmptyAssetName);
            }
            return Ok(LogoSource::LocalAsset(file));
        }
        if logo.contains(|c: char| c.is_whitespace() || c == '/' || c == '?' || c == '#') {
            return Err(LogoUrlError::InvalidDomain(logo.to_string()));
        }
        Ok(LogoSource::BrandDomain(logo))
    }
}

/// Builds the display URL for a logo identifier.
///
/// `client_id` is appended as `?client_id=` when present. Without it the CDN
/// still answers, possibly rate-limited, so the caller decides whether to warn.
pub fn build_logo_url(
    logo: &str,
    size: LogoSize,
    client_id: Option<&str>,
) -> Result<String, LogoUrlError> {
    match LogoSource::parse(logo)? {
        LogoSource::LocalAsset(file) => Ok(format!("/{file}")),
        LogoSource::BrandDomain(domain) => {
            if size.width == 0 || size.height == 0 {
                return Err(LogoUrlError::InvalidSize {
                    width: size.width,
                    height: size.height,
                });
            }
            let base = format!(
                "{LOGO_CDN_BASE}/{domain}/w/{}/h/{}/logo",
                size.width, size.height
            );
            match client_id.map(str::trim).filter(|id| !id.is_empty()) {
                Some(id) => Ok(format!("{base}?client_id={}", urlencoding::encode(id))),
                None => Ok(base),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_asset() {
        let url = build_logo_url("@logo.png", LogoSize::default(), Some("X")).unwrap();
        assert_eq!(url, "/logo.png");
    }

    #[test]
    fn test_brand_domain_with_client_id() {
        let url = build_logo_url("example.com", LogoSize::default(), Some("X")).unwrap();
        assert_eq!(
            url,
            "https://cdn.brandfetch.io/example.com/w/512/h/156/logo?client_id=X"
        );
    }

    #[test]
    fn test_brand_domain_without_client_id() {
        let expected = "https://cdn.brandfetch.io/example.com/w/512/h/156/logo";
        assert_eq!(
            build_logo_url("example.com", LogoSize::default(), None).unwrap(),
            expected
        );
        assert_eq!(
            build_logo_url("example.com", LogoSize::default(), Some("  ")).unwrap(),
            expected
        );
    }

    #[test]
    fn test_custom_size_and_encoded_client_id() {
        let size = LogoSize {
            width: 96,
            height: 96,
        };
        let url = build_logo_url("discord.com", size, Some("a b&c")).unwrap();
        assert_eq!(
            url,
            "https://cdn.brandfetch.io/discord.com/w/96/h/96/logo?client_id=a%20b%26c"
        );
    }

    #[test]
    fn test_invalid_identifiers() {
        let size = LogoSize::default();
        assert_eq!(build_logo_url("", size, None), Err(LogoUrlError::Empty));
        assert_eq!(
            build_logo_url("@", size, None),
            Err(LogoUrlError::EmptyAssetName)
        );
        assert!(matches!(
            build_logo_url("evil.com/../x", size, None),
            Err(LogoUrlError::InvalidDomain(_))
        ));
        assert!(matches!(
            build_logo_url(
                "example.com",
                LogoSize {
                    width: 0,
                    height: 156
                },
                None
            ),
            Err(LogoUrlError::InvalidSize { .. })
        ));
    }
}

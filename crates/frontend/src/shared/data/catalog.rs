//! The service catalog bundled into the WASM binary.

use contracts::catalog::Catalog;
use once_cell::sync::Lazy;

const BUNDLED_CATALOG_JSON: &str = include_str!("../../../data/services.json");

static BUNDLED: Lazy<Catalog> = Lazy::new(|| load_catalog(BUNDLED_CATALOG_JSON));

/// Parsed once on first access. Broken data leaves the storefront empty
/// rather than failing to start.
pub fn bundled_catalog() -> &'static Catalog {
    &BUNDLED
}

fn load_catalog(json: &str) -> Catalog {
    let catalog = match Catalog::from_json(json) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("{:#}", e);
            return Catalog::default();
        }
    };
    if let Err(issues) = catalog.validate() {
        for issue in issues {
            log::warn!("catalog: {}", issue);
        }
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::BRAND_LOGO_PATH;
    use contracts::enums::service_category::ServiceCategory;
    use contracts::shared::logo::LOCAL_ASSET_MARKER;

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = Catalog::from_json(BUNDLED_CATALOG_JSON).unwrap();
        assert!(catalog.validate().is_ok());
        for category in ServiceCategory::all() {
            assert!(!catalog.services(category).is_empty());
        }
        assert!(catalog.community_url().starts_with("https://"));
        assert!(!catalog.contacts().support_handle.is_empty());
        assert!(!catalog.contacts().messaging_handle.is_empty());
    }

    #[test]
    fn test_local_logo_assets_are_shipped() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let index_html = std::fs::read_to_string(root.join("index.html")).unwrap();
        let catalog = Catalog::from_json(BUNDLED_CATALOG_JSON).unwrap();

        let mut served: Vec<String> = ServiceCategory::all()
            .into_iter()
            .flat_map(|category| catalog.services(category).to_vec())
            .filter_map(|service| {
                service
                    .logo
                    .strip_prefix(LOCAL_ASSET_MARKER)
                    .map(str::to_string)
            })
            .collect();
        served.push(BRAND_LOGO_PATH.trim_start_matches('/').to_string());

        for name in served {
            assert!(root.join("assets").join(&name).is_file(), "missing assets/{name}");
            assert!(
                index_html.contains(&format!(r#"rel="copy-file" href="assets/{name}""#)),
                "assets/{name} is not copied by trunk"
            );
        }
    }

    #[test]
    fn test_broken_json_gives_empty_catalog() {
        let catalog = load_catalog("not json");
        assert!(catalog.is_empty());
        assert_eq!(catalog.community_url(), "");
    }
}

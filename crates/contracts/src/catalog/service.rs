use serde::{Deserialize, Serialize};

use crate::enums::service_category::ServiceCategory;

// ============================================================================
// ID Type
// ============================================================================

/// Opaque identifier of a catalog entry, unique inside its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub String);

impl ServiceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Service record
// ============================================================================

/// One purchasable offering from the static catalog.
///
/// Prices are pre-formatted display strings; nothing computes with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    /// `@file.png` for a bundled asset, otherwise a brand domain for the logo CDN.
    pub logo: String,
    pub price: String,
    pub single_price: String,
    pub bulk_price: String,
    pub category: ServiceCategory,
    #[serde(default)]
    pub delivery_eta: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub information: Vec<String>,
    /// Gradient class applied to the tile background.
    #[serde(default)]
    pub brand_color: String,
}

impl Service {
    /// Delivery ETA, with blank strings treated as "not specified".
    pub fn delivery_eta(&self) -> Option<&str> {
        self.delivery_eta
            .as_deref()
            .map(str::trim)
            .filter(|eta| !eta.is_empty())
    }

    /// First character of the name, shown when the logo cannot be displayed.
    pub fn monogram(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;

use super::service::{Service, ServiceId};
use crate::enums::service_category::ServiceCategory;

// ============================================================================
// File format
// ============================================================================

/// Raw shape of `services.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    #[serde(default)]
    pub accounts: Vec<Service>,
    #[serde(default)]
    pub mail: Vec<Service>,
    #[serde(default)]
    pub discord_server: String,
    #[serde(default)]
    pub support_username: String,
    #[serde(default)]
    pub telegram_username: String,
}

/// Global contact strings shared by every service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogContacts {
    /// Community (Discord) invite link.
    pub community_url: String,
    /// Chat handle copied to the clipboard.
    pub support_handle: String,
    /// Messaging handle used for the t.me deep link.
    pub messaging_handle: String,
}

/// Problems `Catalog::validate` can find in the static data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogIssue {
    #[error("duplicate service id '{id}' in category '{category}'")]
    DuplicateId {
        category: ServiceCategory,
        id: ServiceId,
    },
    #[error("service '{id}' is listed under '{listed}' but declares category '{declared}'")]
    CategoryMismatch {
        id: ServiceId,
        listed: ServiceCategory,
        declared: ServiceCategory,
    },
}

// ============================================================================
// Catalog
// ============================================================================

/// Static catalog split into its two category partitions.
///
/// The catalog is read-only after construction: accessors hand out slices in
/// the order the file lists them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    accounts: Vec<Service>,
    mail: Vec<Service>,
    contacts: CatalogContacts,
}

impl Catalog {
    pub fn from_file(file: CatalogFile) -> Self {
        Self {
            accounts: file.accounts,
            mail: file.mail,
            contacts: CatalogContacts {
                community_url: file.discord_server,
                support_handle: file.support_username,
                messaging_handle: file.telegram_username,
            },
        }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).context("failed to parse service catalog")?;
        Ok(Self::from_file(file))
    }

    /// Services of one category, in catalog order.
    pub fn services(&self, category: ServiceCategory) -> &[Service] {
        match category {
            ServiceCategory::Accounts => &self.accounts,
            ServiceCategory::Mail => &self.mail,
        }
    }

    pub fn contacts(&self) -> &CatalogContacts {
        &self.contacts
    }

    pub fn community_url(&self) -> &str {
        &self.contacts.community_url
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.mail.is_empty()
    }

    /// Checks id uniqueness per partition and that every record sits in the
    /// partition its `category` names. Returns every issue found.
    pub fn validate(&self) -> Result<(), Vec<CatalogIssue>> {
        let mut issues = Vec::new();

        for listed in ServiceCategory::all() {
            let mut seen = HashSet::new();
            for service in self.services(listed) {
                if !seen.insert(&service.id) {
                    issues.push(CatalogIssue::DuplicateId {
                        category: listed,
                        id: service.id.clone(),
                    });
                }
                if service.category != listed {
                    issues.push(CatalogIssue::CategoryMismatch {
                        id: service.id.clone(),
                        listed,
                        declared: service.category,
                    });
                }
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

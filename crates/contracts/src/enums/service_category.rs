use serde::{Deserialize, Serialize};

/// Catalog service categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    #[default]
    Accounts,
    Mail,
}

impl ServiceCategory {
    /// Category code (matches the array key in services.json)
    pub fn code(&self) -> &'static str {
        match self {
            ServiceCategory::Accounts => "accounts",
            ServiceCategory::Mail => "mail",
        }
    }

    /// Human-readable tab label
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceCategory::Accounts => "Accounts",
            ServiceCategory::Mail => "Mail",
        }
    }

    /// All categories in tab order
    pub fn all() -> [ServiceCategory; 2] {
        [ServiceCategory::Accounts, ServiceCategory::Mail]
    }

}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

pub mod aggregate;
pub mod service;

pub use aggregate::{Catalog, CatalogContacts, CatalogFile, CatalogIssue};
pub use service::{Service, ServiceId};

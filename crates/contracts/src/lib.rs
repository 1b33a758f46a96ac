//! Shared data model of the Account Vault storefront.

pub mod catalog;
pub mod enums;
pub mod shared;

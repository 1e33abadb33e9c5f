//! Catalog descriptors.
//!
//! A catalog is one entity collection: the table it lives in and the cache
//! keys used for the whole collection and for single items.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use validator::Validate;

/// Static description of an entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Catalog {
    /// Human-readable resource name used in not-found errors
    pub resource: &'static str,
    /// Relational table name
    pub table: &'static str,
    /// Cache key holding the whole collection
    pub collection_key: &'static str,
    /// Cache key prefix for single items, joined with `:` and the id
    pub item_prefix: &'static str,
}

impl Catalog {
    pub const WEB_PROJECTS: Self = Self {
        resource: "Web project",
        table: "web_projects",
        collection_key: "web_projects:all",
        item_prefix: "web_project",
    };

    pub const MOBILE_PROJECTS: Self = Self {
        resource: "Mobile project",
        table: "mobile_projects",
        collection_key: "mobile_projects:all",
        item_prefix: "mobile_project",
    };

    pub const BOT_PROJECTS: Self = Self {
        resource: "Bot project",
        table: "bots_projects",
        collection_key: "bot_projects:all",
        item_prefix: "bot_project",
    };

    pub const STAFF: Self = Self {
        resource: "Staff member",
        table: "staff",
        collection_key: "staff:all",
        item_prefix: "staff",
    };

    /// All catalogs served by the backend.
    pub const ALL: [Self; 4] = [
        Self::WEB_PROJECTS,
        Self::MOBILE_PROJECTS,
        Self::BOT_PROJECTS,
        Self::STAFF,
    ];
}

/// Ties a stored entity to the draft used to create it.
pub trait CatalogEntity:
    Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static
{
    /// Client-supplied fields for a new record.
    type Draft: Validate + Serialize + Debug + Send + Sync + 'static;
}

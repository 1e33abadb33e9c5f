//! Cache key generators for consistent key naming.

use asmo_core::{Catalog, RecordId};

/// Key holding a whole catalog collection, e.g. `web_projects:all`.
#[must_use]
pub const fn collection(catalog: &Catalog) -> &'static str {
    catalog.collection_key
}

/// Key holding one record, e.g. `web_project:42`.
#[must_use]
pub fn item(catalog: &Catalog, id: RecordId) -> String {
    format!("{}:{}", catalog.item_prefix, id)
}

//! Typeahead filtering over the role catalog, for the role-picker input.

use crate::catalog::RoleCatalog;
use crate::models::role::Role;

pub const DEFAULT_LIMIT: usize = 20;

/// Case-insensitive substring match of `query` against role title or SOC
/// code, first `limit` hits in catalog order. Empty query matches nothing,
/// so the picker stays quiet until the user types.
pub fn filter_roles<'a>(catalog: &'a RoleCatalog, query: &str, limit: usize) -> Vec<&'a Role> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .roles()
        .filter(|r| r.title.to_lowercase().contains(&needle) || r.soc_code.contains(&needle))
        .take(limit)
        .collect()
}

pub mod filter;
pub mod handlers;

use std::collections::HashSet;

use crate::matcher::text::{normalize, tokenize};
use crate::models::role::Role;

/// A catalog role with its normalized title and token set precomputed at
/// load time, so per-query scoring does not re-normalize every title.
#[derive(Debug, Clone)]
pub struct IndexedRole {
    pub role: Role,
    pub title_norm: String,
    pub title_tokens: HashSet<String>,
}

/// The occupation catalog, indexed once at startup and immutable after.
/// Iteration order is the feed's order, which makes first-seen tie-breaking
/// in the matcher deterministic across loads.
#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    entries: Vec<IndexedRole>,
}

impl RoleCatalog {
    pub fn index(roles: Vec<Role>) -> Self {
        let entries = roles
            .into_iter()
            .map(|role| {
                let title_norm = normalize(&role.title);
                let title_tokens = tokenize(&title_norm).into_iter().collect();
                IndexedRole {
                    role,
                    title_norm,
                    title_tokens,
                }
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexedRole> {
        self.entries.iter()
    }

    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.entries.iter().map(|e| &e.role)
    }
}

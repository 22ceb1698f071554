use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Catalog entry: a type name, its optional parent, and the operations it
/// declares itself (inherited ones are not repeated here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub parent: Option<String>,
    pub operations: BTreeSet<String>,
}

/// Validated set of type descriptors.
///
/// Only `CatalogSpec::validate_and_build` constructs one, so every parent
/// exists and parent chains are acyclic.
#[derive(Debug, Clone)]
pub struct Catalog {
    types: BTreeMap<String, TypeDescriptor>,
}

impl Catalog {
    pub(crate) fn from_validated(types: BTreeMap<String, TypeDescriptor>) -> Self {
        Self { types }
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false for a validated catalog; kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Type names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Types without a parent, sorted.
    pub fn roots(&self) -> Vec<&str> {
        self.types
            .values()
            .filter(|t| t.parent.is_none())
            .map(|t| t.name.as_str())
            .collect()
    }

    /// Direct subtypes of `name`, sorted.
    pub fn children(&self, name: &str) -> Vec<&str> {
        self.types
            .values()
            .filter(|t| t.parent.as_deref() == Some(name))
            .map(|t| t.name.as_str())
            .collect()
    }

    /// `name` followed by each ancestor, root last. Empty if `name` is unknown.
    pub fn ancestors(&self, name: &str) -> Vec<&TypeDescriptor> {
        let mut chain = Vec::new();
        let mut current = self.types.get(name);
        while let Some(t) = current {
            chain.push(t);
            current = t.parent.as_deref().and_then(|p| self.types.get(p));
        }
        chain
    }
}

//! Queries that answer "what is this value and what can it do?" against a
//! catalog. Every query is a pure read.

use crate::catalog::{Catalog, TypeDescriptor};
use crate::error::UnsupportedKindError;
use crate::value::Value;

use anyhow::bail;
use std::collections::BTreeSet;

pub type QueryResult<T> = std::result::Result<T, UnsupportedKindError>;

#[derive(Debug, Clone, Copy)]
pub struct Introspector<'a> {
    catalog: &'a Catalog,
}

impl<'a> Introspector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Descriptor of the value's runtime type.
    pub fn describe(&self, value: &Value) -> QueryResult<&'a TypeDescriptor> {
        let kind = value.kind();
        self.catalog
            .get(kind.type_name())
            .ok_or_else(|| UnsupportedKindError::new(kind))
    }

    /// Descriptor of the parent type, `None` for a root.
    pub fn superclass(&self, value: &Value) -> QueryResult<Option<&'a TypeDescriptor>> {
        let t = self.describe(value)?;
        Ok(t.parent.as_deref().and_then(|p| self.catalog.get(p)))
    }

    /// Own operations only, or the union over the ancestor chain.
    pub fn list_operations(
        &self,
        value: &Value,
        include_inherited: bool,
    ) -> QueryResult<BTreeSet<&'a str>> {
        let t = self.describe(value)?;
        if !include_inherited {
            return Ok(t.operations.iter().map(String::as_str).collect());
        }
        Ok(self
            .catalog
            .ancestors(&t.name)
            .into_iter()
            .flat_map(|a| a.operations.iter().map(String::as_str))
            .collect())
    }

    pub fn supports_operation(&self, value: &Value, name: &str) -> QueryResult<bool> {
        let t = self.describe(value)?;
        Ok(self
            .catalog
            .ancestors(&t.name)
            .iter()
            .any(|a| a.operations.contains(name)))
    }

    /// Type name first, root last.
    pub fn ancestor_chain(&self, value: &Value) -> QueryResult<Vec<&'a str>> {
        let t = self.describe(value)?;
        Ok(self
            .catalog
            .ancestors(&t.name)
            .into_iter()
            .map(|a| a.name.as_str())
            .collect())
    }

    /// Whether `type_name` is the value's type or one of its ancestors.
    ///
    /// Unlike the other queries this one can fail for a reason other than
    /// the value: `type_name` itself may not be in the catalog. An
    /// unsupported value is reported first.
    pub fn is_a(&self, value: &Value, type_name: &str) -> anyhow::Result<bool> {
        let chain = self.ancestor_chain(value)?;
        if self.catalog.get(type_name).is_none() {
            let known: Vec<&str> = self.catalog.names().collect();
            bail!(
                "unknown type {} (catalog has: {})",
                type_name,
                known.join(", ")
            );
        }
        Ok(chain.iter().any(|name| *name == type_name))
    }
}

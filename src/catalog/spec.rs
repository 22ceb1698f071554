//! Catalog spec (catalog.json): a flat list of types with optional parents.
//!
//! JSON shape:
//! {
//!   "types": [
//!     {
//!       "name": "Integer",            // unique type name
//!       "parent": "Number",          // optional; absent means root
//!       "operations": ["succ", "gcd"] // declared on this type only
//!     },
//!     ...
//!   ]
//! }
//!
//! We validate names, resolve parents, and reject parent cycles.

use crate::catalog::{Catalog, TypeDescriptor};
use crate::diagnostics;

use anyhow::bail;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSpec {
    #[serde(default)]
    pub types: Vec<RawType>,
}

/// Raw type shape as it appears in catalog.json.
#[derive(Debug, Clone, Deserialize)]
pub struct RawType {
    pub name: String,

    #[serde(default)]
    pub parent: Option<String>,

    #[serde(default)]
    pub operations: Vec<String>,
}

impl CatalogSpec {
    /// Normalize every type, then check structural integrity.
    ///
    /// 1) Normalize rows (trim names, collapse duplicate operations).
    /// 2) Validate unique names and that parents exist.
    /// 3) Reject parent cycles.
    pub fn validate_and_build(&self) -> anyhow::Result<Catalog> {
        // Phase 1: build map keyed by name.
        let mut types: BTreeMap<String, TypeDescriptor> = BTreeMap::new();
        for raw in &self.types {
            let name = raw.name.trim();
            if name.is_empty() {
                bail!("catalog contains a type with an empty name");
            }
            if types.contains_key(name) {
                bail!("duplicate type name in catalog: {}", name);
            }

            let parent = raw
                .parent
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);

            let mut operations = BTreeSet::new();
            for op in &raw.operations {
                let op = op.trim();
                if op.is_empty() {
                    bail!("type {} declares an empty operation name", name);
                }
                if !operations.insert(op.to_string()) {
                    diagnostics::warn(format!(
                        "type {} declares operation '{}' more than once",
                        name, op
                    ));
                }
            }

            types.insert(
                name.to_string(),
                TypeDescriptor {
                    name: name.to_string(),
                    parent,
                    operations,
                },
            );
        }

        if types.is_empty() {
            bail!("catalog contained no types");
        }

        // Phase 2: every parent must exist.
        for t in types.values() {
            if let Some(p) = &t.parent {
                if !types.contains_key(p) {
                    bail!("type {} references missing parent {}", t.name, p);
                }
            }
        }

        // Phase 3: each type has at most one parent, so following the chain
        // and watching for a repeat is enough to find a cycle.
        for start in types.keys() {
            let mut path: Vec<&str> = vec![start.as_str()];
            let mut current = types[start].parent.as_deref();
            while let Some(p) = current {
                let seen = path.contains(&p);
                path.push(p);
                if seen {
                    bail!("parent cycle detected in catalog: {}", path.join(" -> "));
                }
                current = types[p].parent.as_deref();
            }
        }

        tracing::debug!(types = types.len(), "catalog validated");
        Ok(Catalog::from_validated(types))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(json: &str) -> anyhow::Result<Catalog> {
        let spec: CatalogSpec = serde_json::from_str(json)?;
        spec.validate_and_build()
    }

    #[test]
    fn builds_with_defaults_and_trims() {
        let catalog = build(
            r#"{"types": [
                {"name": " Object ", "operations": ["inspect", "inspect", " hash"]},
                {"name": "Array", "parent": "Object"},
                {"name": "Loose", "parent": ""}
            ]}"#,
        )
        .unwrap();

        let object = catalog.get("Object").unwrap();
        assert_eq!(
            object.operations.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["hash", "inspect"]
        );
        assert!(catalog.get("Array").unwrap().operations.is_empty());
        assert_eq!(catalog.get("Loose").unwrap().parent, None);
        assert_eq!(catalog.roots(), vec!["Loose", "Object"]);
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = build(r#"{"types": []}"#).unwrap_err();
        assert!(err.to_string().contains("no types"));
        assert!(build("{}").is_err());
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = build(r#"{"types": [{"name": "A"}, {"name": "A"}]}"#).unwrap_err();
        assert_eq!(err.to_string(), "duplicate type name in catalog: A");
    }

    #[test]
    fn rejects_blank_names() {
        assert!(build(r#"{"types": [{"name": "  "}]}"#).is_err());
        assert!(build(r#"{"types": [{"name": "A", "operations": [""]}]}"#).is_err());
    }

    #[test]
    fn rejects_missing_parent() {
        let err = build(r#"{"types": [{"name": "A", "parent": "B"}]}"#).unwrap_err();
        assert_eq!(err.to_string(), "type A references missing parent B");
    }

    #[test]
    fn rejects_cycles() {
        let err = build(
            r#"{"types": [
                {"name": "A", "parent": "C"},
                {"name": "B", "parent": "A"},
                {"name": "C", "parent": "B"}
            ]}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "parent cycle detected in catalog: A -> C -> B -> A"
        );

        let err = build(r#"{"types": [{"name": "Self", "parent": "Self"}]}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parent cycle detected in catalog: Self -> Self"
        );
    }
}

//! Type catalog: JSON schema + validated in-memory structures.
//!
//! This module owns:
//! - TypeDescriptor (name, parent, own operations)
//! - Catalog (validated, immutable set of descriptors)
//! - CatalogSpec (catalog.json as decoded by serde)

pub mod descriptor;
pub mod spec;

pub use descriptor::{Catalog, TypeDescriptor};
pub use spec::CatalogSpec;

use anyhow::Context;
use std::fs;

const BUILTIN_CATALOG: &str = include_str!("builtin.json");

impl Catalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> anyhow::Result<Catalog> {
        let spec: CatalogSpec =
            serde_json::from_str(BUILTIN_CATALOG).context("decode built-in catalog")?;
        spec.validate_and_build()
            .context("validate built-in catalog")
    }

    /// Load and validate a catalog file.
    pub fn from_path(path: &str) -> anyhow::Result<Catalog> {
        let text =
            fs::read_to_string(path).with_context(|| format!("read catalog file {}", path))?;
        let spec: CatalogSpec = serde_json::from_str(&text)
            .with_context(|| format!("decode catalog file {}", path))?;
        spec.validate_and_build()
            .with_context(|| format!("invalid catalog file {}", path))
    }
}

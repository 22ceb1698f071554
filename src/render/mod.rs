//! Output rendering: plain text lines or pretty JSON.

pub mod text;

use crate::model::{CatalogView, InspectReport};

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

pub fn render_inspect_report(report: &InspectReport, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(text::inspect_report(report)),
        Format::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

pub fn render_catalog(view: &CatalogView, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(text::catalog_tree(view)),
        Format::Json => Ok(serde_json::to_string_pretty(view)?),
    }
}

use crate::value::Kind;

/// A query targeted a value whose kind has no type in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported kind '{kind}': type {type_name} is not registered in the catalog")]
pub struct UnsupportedKindError {
    pub kind: Kind,
    pub type_name: &'static str,
}

impl UnsupportedKindError {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            type_name: kind.type_name(),
        }
    }
}

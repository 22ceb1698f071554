//! Values that can be introspected, and the literal syntax that produces them.

pub mod kind;
pub mod parse;

pub use kind::{Kind, Value};
pub use parse::parse_literal;

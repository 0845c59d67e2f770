//! Column mapping: raw CSV cells to normalized record fields.

mod columns;
mod rules;

pub use columns::{ColumnMap, ColumnSpec};
pub use rules::{ColumnRule, RuleError};

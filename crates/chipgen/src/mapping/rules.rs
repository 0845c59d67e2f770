//! Per-column transform rules.
//!
//! Each vendor column is handled by one rule; several source columns may
//! target the same record key (the radio and crypto capability lists are
//! folded together from many yes/no columns this way). Rules mutate the
//! shared accumulator record and otherwise stay pure.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::record::Record;

/// HTML fragments the vendor export embeds in free-text cells.
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").unwrap());

/// Placeholder the export uses for "not present" in the analog columns.
const EMPTY_PLACEHOLDER: &str = "%u2014";

/// A rule-level failure, converted to a full error by the column map
/// which knows the offending header and row.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A peripheral token did not split into exactly `count-name`.
    #[error("token '{token}' is not of the form count-name")]
    MalformedToken { token: String },
}

/// Transform applied to one raw cell.
#[derive(Debug, Clone)]
pub enum ColumnRule {
    /// Column carries no information we keep.
    Ignore,
    /// Store the value lower-cased.
    Copy,
    /// Store `1` for a case-insensitive `yes`, else `0`.
    YesNo,
    /// Strip the vendor core prefix and lower-case the rest.
    CoreName,
    /// Drop the leading unit-prefix character.
    StripFirst,
    /// Merge the two analog converter columns into one multiplicity-aware
    /// value: equal counts fold to `2x<v>`, differing to `<old>/<new>`.
    AnalogMerge,
    /// Strip markup and hyphens, comma-join the tokens lower-cased, keep
    /// the trailing comma for the assembler to trim.
    TokenList,
    /// Decode `N-PERIPH` tokens into one `PERIPH=N` field each.
    PeripheralCounts,
    /// Append the given token to an accumulated list when the cell is `yes`.
    Flag(&'static str),
    /// Strip the locale suffix from a datasheet-like file name.
    Datasheet,
    /// Lower-case the package name, and strip a matching `-<package>`
    /// suffix off the already-populated part name.
    Package,
    /// Strip markup, comma-join lower-cased tokens, append a unit suffix;
    /// a literal `null` cell is skipped.
    UnitList(&'static str),
    /// Append a unit suffix to the raw value.
    Unit(&'static str),
}

impl ColumnRule {
    /// Apply this rule to one cell, writing into `record` under `key`.
    pub fn apply(
        &self,
        record: &mut Record,
        key: &str,
        raw: &str,
    ) -> std::result::Result<(), RuleError> {
        match self {
            ColumnRule::Ignore => {}

            ColumnRule::Copy => record.set(key, raw.to_lowercase()),

            ColumnRule::YesNo => {
                let bit = if raw.eq_ignore_ascii_case("yes") { "1" } else { "0" };
                record.set(key, bit);
            }

            ColumnRule::CoreName => {
                record.set(key, raw.replace("ARM Cortex-", "").to_lowercase());
            }

            ColumnRule::StripFirst => {
                let mut chars = raw.chars();
                chars.next();
                record.set(key, chars.as_str());
            }

            ColumnRule::AnalogMerge => {
                if raw == EMPTY_PLACEHOLDER {
                    return Ok(());
                }
                let value = raw.replace(' ', "").replace('.', "");
                let existing = record.get(key).map(str::to_owned);
                match existing {
                    Some(existing) if existing == value => {
                        record.set(key, format!("2x{value}"));
                    }
                    Some(existing) => record.set(key, format!("{existing}/{value}")),
                    None => record.set(key, value),
                }
            }

            ColumnRule::TokenList => {
                let cleaned = strip_markup(raw).replace('-', "");
                let tokens: Vec<&str> = cleaned.split_whitespace().collect();
                if !tokens.is_empty() {
                    record.set(key, format!("{},", tokens.join(",").to_lowercase()));
                }
            }

            ColumnRule::PeripheralCounts => {
                let cleaned = strip_markup(raw)
                    .replace('\u{00b2}', "2")
                    .replace(" x ", "-");
                for token in cleaned.split_whitespace() {
                    let parts: Vec<&str> = token.split('-').collect();
                    match parts[..] {
                        [count, name] => record.set(name.to_uppercase(), count),
                        _ => {
                            return Err(RuleError::MalformedToken {
                                token: token.to_string(),
                            })
                        }
                    }
                }
            }

            ColumnRule::Flag(token) => {
                if raw.eq_ignore_ascii_case("yes") {
                    record.append_token(key, token);
                }
            }

            ColumnRule::Datasheet => record.set(key, raw.replace("-jp", "")),

            ColumnRule::Package => {
                let package = raw.to_lowercase();
                let stripped = record
                    .get("NAME")
                    .and_then(|name| name.strip_suffix(&format!("-{package}")))
                    .map(str::to_owned);
                if let Some(name) = stripped {
                    record.set("NAME", name);
                }
                record.set(key, package);
            }

            ColumnRule::UnitList(unit) => {
                let cleaned = strip_markup(raw);
                let cleaned = cleaned.trim();
                if cleaned == "null" {
                    return Ok(());
                }
                let tokens: Vec<&str> = cleaned.split_whitespace().collect();
                record.set(key, format!("{}{unit}", tokens.join(",").to_lowercase()));
            }

            ColumnRule::Unit(unit) => record.set(key, format!("{raw}{unit}")),
        }
        Ok(())
    }
}

/// Drop HTML tags and stray quote characters from a cell.
fn strip_markup(value: &str) -> String {
    HTML_TAG.replace_all(value, "").replace('"', "")
}

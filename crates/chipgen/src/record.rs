//! Normalized attribute record.

use indexmap::IndexMap;

use crate::error::{ChipgenError, Result};

/// One part's normalized attributes, in emission order.
///
/// Keys keep their insertion order so that repeated runs over the same
/// matrix emit byte-identical sections. Writes overwrite by default;
/// capability flags accumulate through [`Record::append_token`].
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, overwriting any previous value.
    ///
    /// Overwriting keeps the key's original position, so a later rewrite
    /// (e.g. the package rule fixing up `NAME`) does not reorder output.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Append `token,` to a comma-accumulated field, creating it if absent.
    pub fn append_token(&mut self, key: &str, token: &str) {
        let value = self.fields.entry(key.to_string()).or_default();
        value.push_str(token);
        value.push(',');
    }

    /// Drop the single trailing comma an accumulator leaves behind.
    pub fn trim_trailing_comma(&mut self, key: &str) {
        if let Some(value) = self.fields.get_mut(key) {
            if value.ends_with(',') {
                value.pop();
            }
        }
    }

    /// Get a field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|s| s.as_str())
    }

    /// Get a field the rest of the pipeline cannot proceed without.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| ChipgenError::MissingColumn {
            column: key.to_string(),
            part: self.get("NAME").unwrap_or("<unnamed>").to_string(),
        })
    }

    /// Whether the record has a field.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_in_place() {
        let mut rec = Record::new();
        rec.set("A", "1");
        rec.set("B", "2");
        rec.set("A", "3");
        let keys: Vec<&str> = rec.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(rec.get("A"), Some("3"));
    }

    #[test]
    fn test_append_token_accumulates() {
        let mut rec = Record::new();
        rec.append_token("RADIO", "ble");
        rec.append_token("RADIO", "ble5");
        assert_eq!(rec.get("RADIO"), Some("ble,ble5,"));
        rec.trim_trailing_comma("RADIO");
        assert_eq!(rec.get("RADIO"), Some("ble,ble5"));
    }

    #[test]
    fn test_trim_is_single_and_safe_on_absent_keys() {
        let mut rec = Record::new();
        rec.trim_trailing_comma("RADIO");
        assert!(!rec.contains("RADIO"));
        rec.set("CRYPTO", "aes128,,");
        rec.trim_trailing_comma("CRYPTO");
        assert_eq!(rec.get("CRYPTO"), Some("aes128,"));
    }

    #[test]
    fn test_require_reports_part_name() {
        let mut rec = Record::new();
        rec.set("NAME", "efm32gg890f512");
        let err = rec.require("CORE").unwrap_err();
        assert!(err.to_string().contains("efm32gg890f512"));
    }
}

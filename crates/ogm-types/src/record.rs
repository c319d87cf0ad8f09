use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TypeError;
use crate::key::RawKey;

/// A raw record fetched from the store: named bins plus a generation counter.
///
/// Bin values ride `serde_json::Value`, which is what the store boundary
/// serializes. The mapper never interprets bins itself; entities read them
/// through the typed accessors during hydration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    bins: BTreeMap<String, Value>,
    generation: u32,
}

impl StoredRecord {
    /// Create an empty record at generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style bin insertion.
    pub fn with_bin(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.bins.insert(name.into(), value.into());
        self
    }

    /// Builder-style generation override.
    pub fn with_generation(mut self, generation: u32) -> Self {
        self.generation = generation;
        self
    }

    /// Insert or replace a bin.
    pub fn set_bin(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.bins.insert(name.into(), value.into());
    }

    /// Raw access to a bin value.
    pub fn bin(&self, name: &str) -> Option<&Value> {
        self.bins.get(name)
    }

    /// All bins, ordered by name.
    pub fn bins(&self) -> &BTreeMap<String, Value> {
        &self.bins
    }

    /// The record's generation counter.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Returns `true` if the record has no bins.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    // -----------------------------------------------------------------------
    // Typed accessors
    // -----------------------------------------------------------------------

    fn required(&self, name: &str) -> Result<&Value, TypeError> {
        self.bins
            .get(name)
            .ok_or_else(|| TypeError::MissingBin(name.to_string()))
    }

    /// Read a string bin.
    pub fn str_bin(&self, name: &str) -> Result<&str, TypeError> {
        self.required(name)?.as_str().ok_or(TypeError::BinType {
            bin: name.to_string(),
            expected: "string",
        })
    }

    /// Read an integer bin.
    pub fn i64_bin(&self, name: &str) -> Result<i64, TypeError> {
        self.required(name)?.as_i64().ok_or(TypeError::BinType {
            bin: name.to_string(),
            expected: "integer",
        })
    }

    /// Read a float bin.
    pub fn f64_bin(&self, name: &str) -> Result<f64, TypeError> {
        self.required(name)?.as_f64().ok_or(TypeError::BinType {
            bin: name.to_string(),
            expected: "float",
        })
    }

    /// Read a boolean bin.
    pub fn bool_bin(&self, name: &str) -> Result<bool, TypeError> {
        self.required(name)?.as_bool().ok_or(TypeError::BinType {
            bin: name.to_string(),
            expected: "boolean",
        })
    }

    /// Read a reference bin as a raw key.
    ///
    /// String and integer bin values are the stored forms of a reference.
    pub fn key_bin(&self, name: &str) -> Result<RawKey, TypeError> {
        value_to_key(self.required(name)?).ok_or(TypeError::BinType {
            bin: name.to_string(),
            expected: "reference key (string or integer)",
        })
    }

    /// Read an optional reference bin.
    ///
    /// Returns `Ok(None)` when the bin is missing or explicitly null; an
    /// unset reference is a valid stored state, not an error.
    pub fn opt_key_bin(&self, name: &str) -> Result<Option<RawKey>, TypeError> {
        match self.bins.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value_to_key(value)
                .map(Some)
                .ok_or(TypeError::BinType {
                    bin: name.to_string(),
                    expected: "reference key (string or integer)",
                }),
        }
    }

    /// Read a list-of-references bin.
    ///
    /// A missing bin is an empty list.
    pub fn key_list_bin(&self, name: &str) -> Result<Vec<RawKey>, TypeError> {
        let Some(value) = self.bins.get(name) else {
            return Ok(Vec::new());
        };
        let items = value.as_array().ok_or(TypeError::BinType {
            bin: name.to_string(),
            expected: "list of reference keys",
        })?;
        items
            .iter()
            .map(|item| {
                value_to_key(item).ok_or(TypeError::BinType {
                    bin: name.to_string(),
                    expected: "list of reference keys",
                })
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Wire form
    // -----------------------------------------------------------------------

    /// Serialize to JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TypeError> {
        serde_json::to_vec(self).map_err(|e| TypeError::Serialization(e.to_string()))
    }

    /// Deserialize from JSON bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TypeError> {
        serde_json::from_slice(data).map_err(|e| TypeError::Serialization(e.to_string()))
    }
}

fn value_to_key(value: &Value) -> Option<RawKey> {
    match value {
        Value::String(s) => Some(RawKey::Str(s.clone())),
        Value::Number(n) => n.as_i64().map(RawKey::Int),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StoredRecord {
        StoredRecord::new()
            .with_bin("name", "alice")
            .with_bin("age", 34)
            .with_bin("score", 1.5)
            .with_bin("active", true)
            .with_bin("account", "acct-9")
            .with_generation(3)
    }

    #[test]
    fn typed_accessors() {
        let record = sample();
        assert_eq!(record.str_bin("name").unwrap(), "alice");
        assert_eq!(record.i64_bin("age").unwrap(), 34);
        assert_eq!(record.f64_bin("score").unwrap(), 1.5);
        assert!(record.bool_bin("active").unwrap());
        assert_eq!(record.generation(), 3);
    }

    #[test]
    fn missing_bin_is_an_error() {
        let record = sample();
        assert_eq!(
            record.str_bin("missing"),
            Err(TypeError::MissingBin("missing".into()))
        );
    }

    #[test]
    fn mistyped_bin_is_an_error() {
        let record = sample();
        assert!(matches!(
            record.i64_bin("name"),
            Err(TypeError::BinType { .. })
        ));
    }

    #[test]
    fn key_bin_reads_string_and_integer_forms() {
        let record = StoredRecord::new()
            .with_bin("by_name", "acct-9")
            .with_bin("by_id", 42);
        assert_eq!(record.key_bin("by_name").unwrap(), RawKey::from("acct-9"));
        assert_eq!(record.key_bin("by_id").unwrap(), RawKey::Int(42));
    }

    #[test]
    fn opt_key_bin_treats_null_and_missing_as_unset() {
        let record = StoredRecord::new().with_bin("cleared", Value::Null);
        assert_eq!(record.opt_key_bin("cleared").unwrap(), None);
        assert_eq!(record.opt_key_bin("never_set").unwrap(), None);
    }

    #[test]
    fn opt_key_bin_rejects_non_key_values() {
        let record = StoredRecord::new().with_bin("bad", true);
        assert!(matches!(
            record.opt_key_bin("bad"),
            Err(TypeError::BinType { .. })
        ));
    }

    #[test]
    fn key_list_bin_reads_mixed_key_forms() {
        let record = StoredRecord::new()
            .with_bin("children", serde_json::json!(["a", 2, "c"]));
        let keys = record.key_list_bin("children").unwrap();
        assert_eq!(
            keys,
            vec![RawKey::from("a"), RawKey::Int(2), RawKey::from("c")]
        );
    }

    #[test]
    fn key_list_bin_missing_is_empty() {
        let record = StoredRecord::new();
        assert!(record.key_list_bin("children").unwrap().is_empty());
    }

    #[test]
    fn wire_roundtrip() {
        let record = sample();
        let bytes = record.to_bytes().unwrap();
        let decoded = StoredRecord::from_bytes(&bytes).unwrap();
        assert_eq!(record, decoded);
    }

    #[test]
    fn len_and_is_empty() {
        assert!(StoredRecord::new().is_empty());
        assert_eq!(sample().len(), 5);
    }
}

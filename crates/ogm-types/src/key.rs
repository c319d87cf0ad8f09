use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The user-supplied identity of a stored record.
///
/// References discovered during hydration carry either the target's user key
/// (integer, string, or raw bytes) or, when the owning record only stored the
/// target's digest, the precomputed 20-byte store digest.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawKey {
    /// Integer user key.
    Int(i64),
    /// String user key.
    Str(String),
    /// Raw byte user key.
    Bytes(Vec<u8>),
    /// Precomputed 20-byte store digest (the original key bytes are unknown).
    Digest([u8; 20]),
}

impl RawKey {
    /// Returns `true` if this key is a precomputed digest.
    pub fn is_digest(&self) -> bool {
        matches!(self, Self::Digest(_))
    }
}

impl fmt::Display for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            Self::Digest(d) => write!(f, "digest:{}", hex::encode(&d[..4])),
        }
    }
}

impl From<i64> for RawKey {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for RawKey {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for RawKey {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<u8>> for RawKey {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<[u8; 20]> for RawKey {
    fn from(d: [u8; 20]) -> Self {
        Self::Digest(d)
    }
}

/// The store-level address of a record: namespace, set, and user key.
///
/// A `RecordKey` is what the store boundary fetches by. Its canonical form
/// (see [`canonical`]) is what the resolution cache and fetch deduplication
/// compare by.
///
/// [`canonical`]: RecordKey::canonical
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    namespace: String,
    set_name: String,
    key: RawKey,
}

impl RecordKey {
    /// Create a new record key.
    pub fn new(
        namespace: impl Into<String>,
        set_name: impl Into<String>,
        key: impl Into<RawKey>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            set_name: set_name.into(),
            key: key.into(),
        }
    }

    /// The store namespace this record lives in.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The set (collection) name within the namespace.
    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    /// The user key identifying the record within the set.
    pub fn key(&self) -> &RawKey {
        &self.key
    }

    /// Derive the canonical key for this record address.
    ///
    /// Pure and deterministic: equal `(namespace, set, key)` triples always
    /// produce equal canonical keys.
    pub fn canonical(&self) -> CanonicalKey {
        CanonicalKey::derive(&self.namespace, &self.set_name, &self.key)
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.namespace, self.set_name, self.key)
    }
}

/// Normalized, comparable record identity.
///
/// A `CanonicalKey` is the domain-separated BLAKE3 digest of a record's
/// `(namespace, set, user key)` triple. It is the key type of the resolution
/// cache and the unit of fetch deduplication. Each [`RawKey`] variant hashes
/// under its own tag, so `Int(1)` and `Str("1")` never collide.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalKey([u8; 32]);

impl CanonicalKey {
    const DOMAIN: &'static str = "ogm-key-v1";

    /// Derive a canonical key from a record address.
    pub fn derive(namespace: &str, set_name: &str, key: &RawKey) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(Self::DOMAIN.as_bytes());
        hasher.update(b":");
        hasher.update(namespace.as_bytes());
        hasher.update(b"/");
        hasher.update(set_name.as_bytes());
        hasher.update(b"/");
        match key {
            RawKey::Int(v) => {
                hasher.update(b"int:");
                hasher.update(&v.to_le_bytes());
            }
            RawKey::Str(s) => {
                hasher.update(b"str:");
                hasher.update(s.as_bytes());
            }
            RawKey::Bytes(b) => {
                hasher.update(b"bytes:");
                hasher.update(b);
            }
            RawKey::Digest(d) => {
                hasher.update(b"digest:");
                hasher.update(d);
            }
        }
        Self(*hasher.finalize().as_bytes())
    }

    /// Create from a pre-computed 32-byte hash.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string (64 hex characters).
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalKey({})", self.short_hex())
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_deterministic() {
        let key = RawKey::from("customer-1");
        let c1 = CanonicalKey::derive("prod", "customers", &key);
        let c2 = CanonicalKey::derive("prod", "customers", &key);
        assert_eq!(c1, c2);
    }

    #[test]
    fn different_namespaces_produce_different_keys() {
        let key = RawKey::from(7);
        let c1 = CanonicalKey::derive("prod", "customers", &key);
        let c2 = CanonicalKey::derive("test", "customers", &key);
        assert_ne!(c1, c2);
    }

    #[test]
    fn different_sets_produce_different_keys() {
        let key = RawKey::from(7);
        let c1 = CanonicalKey::derive("prod", "customers", &key);
        let c2 = CanonicalKey::derive("prod", "accounts", &key);
        assert_ne!(c1, c2);
    }

    #[test]
    fn int_and_str_variants_do_not_collide() {
        let c1 = CanonicalKey::derive("prod", "s", &RawKey::Int(1));
        let c2 = CanonicalKey::derive("prod", "s", &RawKey::Str("1".into()));
        assert_ne!(c1, c2);
    }

    #[test]
    fn bytes_and_digest_variants_do_not_collide() {
        let raw = [9u8; 20];
        let c1 = CanonicalKey::derive("prod", "s", &RawKey::Bytes(raw.to_vec()));
        let c2 = CanonicalKey::derive("prod", "s", &RawKey::Digest(raw));
        assert_ne!(c1, c2);
    }

    #[test]
    fn record_key_canonical_matches_direct_derive() {
        let rk = RecordKey::new("prod", "customers", "alice");
        let direct = CanonicalKey::derive("prod", "customers", &RawKey::from("alice"));
        assert_eq!(rk.canonical(), direct);
    }

    #[test]
    fn record_key_display() {
        let rk = RecordKey::new("prod", "customers", 42);
        assert_eq!(format!("{rk}"), "prod/customers/42");
    }

    #[test]
    fn raw_key_conversions() {
        assert_eq!(RawKey::from(5), RawKey::Int(5));
        assert_eq!(RawKey::from("x"), RawKey::Str("x".into()));
        assert_eq!(RawKey::from(vec![1u8, 2]), RawKey::Bytes(vec![1, 2]));
        assert!(RawKey::from([0u8; 20]).is_digest());
    }

    #[test]
    fn hex_roundtrip() {
        let c = CanonicalKey::derive("prod", "s", &RawKey::Int(1));
        let parsed = CanonicalKey::from_hex(&c.to_hex()).unwrap();
        assert_eq!(c, parsed);
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(matches!(
            CanonicalKey::from_hex("zz"),
            Err(TypeError::InvalidHex(_))
        ));
        assert!(matches!(
            CanonicalKey::from_hex("abcd"),
            Err(TypeError::InvalidLength { .. })
        ));
    }

    #[test]
    fn short_hex_is_8_chars() {
        let c = CanonicalKey::derive("prod", "s", &RawKey::Int(1));
        assert_eq!(c.short_hex().len(), 8);
    }

    #[test]
    fn serde_roundtrip() {
        let rk = RecordKey::new("prod", "customers", RawKey::Digest([3u8; 20]));
        let json = serde_json::to_string(&rk).unwrap();
        let parsed: RecordKey = serde_json::from_str(&json).unwrap();
        assert_eq!(rk, parsed);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn canonical_key_is_pure(ns in ".{0,12}", set in ".{0,12}", k in any::<i64>()) {
                let key = RawKey::Int(k);
                prop_assert_eq!(
                    CanonicalKey::derive(&ns, &set, &key),
                    CanonicalKey::derive(&ns, &set, &key)
                );
            }

            #[test]
            fn distinct_int_keys_do_not_collide(a in any::<i64>(), b in any::<i64>()) {
                prop_assume!(a != b);
                let c1 = CanonicalKey::derive("ns", "set", &RawKey::Int(a));
                let c2 = CanonicalKey::derive("ns", "set", &RawKey::Int(b));
                prop_assert_ne!(c1, c2);
            }
        }
    }
}

//! Hash keys for Monkey hash values.
//!
//! A `HashKey` is the pair (kind, 64-bit value). Only integers, booleans and
//! strings have one; two values of the same kind and content always produce
//! the same key, independent of where they were allocated.
//!
//! | Kind    | Key value                       |
//! |---------|---------------------------------|
//! | INTEGER | the integer's bits              |
//! | BOOLEAN | 0 or 1                          |
//! | STRING  | 64-bit FNV-1a of the UTF-8 bytes |

use rustc_hash::FxHashMap;

use crate::errors::{HashIndexError, UnhashableValue};
use crate::value::{ObjectType, Value};

/// FNV-1a offset basis (64-bit).
const FNV_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;
/// FNV-1a prime (64-bit).
const FNV_PRIME: u64 = 1_099_511_628_211;

/// Canonical identity of a hashable value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct HashKey {
    pub kind: ObjectType,
    pub value: u64,
}

/// An entry of a hash value: the original key alongside its value.
///
/// The key is kept so the hash can render and iterate its real keys.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

/// Storage of a hash value.
pub type HashPairs = FxHashMap<HashKey, HashPair>;

/// 64-bit FNV-1a over `bytes`.
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

impl Value {
    /// Whether this value can be used as a hash key.
    #[inline]
    pub fn is_hashable(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Bool(_) | Value::Str(_))
    }

    /// Derive the hash key of this value.
    ///
    /// Fails for every kind other than INTEGER, BOOLEAN and STRING. The
    /// evaluator is expected to check with `is_hashable` first, or to turn the
    /// failure into an error value with `Value::from`.
    pub fn hash_key(&self) -> Result<HashKey, UnhashableValue> {
        let value = match self {
            Value::Int(n) => u64::from_ne_bytes(n.to_ne_bytes()),
            Value::Bool(b) => u64::from(*b),
            Value::Str(s) => fnv1a_64(s.as_bytes()),
            other => {
                return Err(UnhashableValue {
                    kind: other.object_type(),
                })
            }
        };
        Ok(HashKey {
            kind: self.object_type(),
            value,
        })
    }

    /// Build a hash value from `(key, value)` pairs.
    ///
    /// Later pairs overwrite earlier ones with an equal key. Stops at the
    /// first key that has no hash key.
    pub fn hash_from_pairs(
        pairs: impl IntoIterator<Item = (Value, Value)>,
    ) -> Result<Value, UnhashableValue> {
        let mut entries = HashPairs::default();
        for (key, value) in pairs {
            let hash_key = key.hash_key()?;
            entries.insert(hash_key, HashPair { key, value });
        }
        Ok(Value::hash_map(entries))
    }

    /// Look up `key` in a hash value.
    ///
    /// `Ok(None)` means the key is absent. A receiver that is not a hash is
    /// reported before the key is examined, so a type fault never reads as a
    /// missing key.
    pub fn hash_get(&self, key: &Value) -> Result<Option<&Value>, HashIndexError> {
        let Value::Hash(pairs) = self else {
            return Err(HashIndexError::NotAHash(self.object_type()));
        };
        let hash_key = key.hash_key()?;
        Ok(pairs.get(&hash_key).map(|pair| &pair.value))
    }
}

#[cfg(test)]
mod tests;

use super::*;
use crate::environment::Environment;
use crate::errors::HashIndexError;
use monkey_ir::BlockStatement;
use pretty_assertions::assert_eq;

fn key(value: &Value) -> Option<HashKey> {
    value.hash_key().ok()
}

#[test]
fn test_string_hash_key() {
    let hello1 = Value::string("Hello World");
    let hello2 = Value::string("Hello World");
    let diff1 = Value::string("My name is johny");
    let diff2 = Value::string("My name is johny");

    assert_eq!(key(&hello1), key(&hello2));
    assert_eq!(key(&diff1), key(&diff2));
    assert_ne!(key(&hello1), key(&diff1));
}

#[test]
fn test_boolean_hash_key() {
    let true1 = Value::Bool(true);
    let true2 = Value::Bool(true);
    let false1 = Value::Bool(false);
    let false2 = Value::Bool(false);

    assert_eq!(key(&true1), key(&true2));
    assert_eq!(key(&false1), key(&false2));
    assert_ne!(key(&true1), key(&false1));
}

#[test]
fn test_integer_hash_key() {
    let one1 = Value::int(1);
    let one2 = Value::int(1);
    let ten1 = Value::int(10);
    let ten2 = Value::int(10);

    assert_eq!(key(&one1), key(&one2));
    assert_eq!(key(&ten1), key(&ten2));
    assert_ne!(key(&one1), key(&ten1));
}

#[test]
fn test_key_values() {
    assert_eq!(
        key(&Value::int(7)),
        Some(HashKey {
            kind: ObjectType::Integer,
            value: 7
        })
    );
    assert_eq!(key(&Value::Bool(true)).map(|k| k.value), Some(1));
    assert_eq!(key(&Value::Bool(false)).map(|k| k.value), Some(0));
    assert_eq!(key(&Value::int(-1)).map(|k| k.value), Some(u64::MAX));
}

#[test]
fn test_kinds_never_collide() {
    // Integer 1 and boolean true share the raw value 1.
    assert_ne!(key(&Value::int(1)), key(&Value::Bool(true)));
    assert_ne!(key(&Value::int(0)), key(&Value::Bool(false)));
}

#[test]
fn test_fnv1a_reference_values() {
    assert_eq!(fnv1a_64(b""), FNV_OFFSET_BASIS);
    assert_eq!(fnv1a_64(b"a"), 0xaf63_dc4c_8601_ec8c);
    assert_eq!(fnv1a_64(b"foobar"), 0x8594_4171_f739_67e8);
}

#[test]
fn test_unhashable_kinds() {
    let unhashable = [
        Value::Null,
        Value::array(vec![]),
        Value::hash_map(HashPairs::default()),
        Value::error("e"),
        Value::return_value(Value::int(1)),
        Value::function(vec![], BlockStatement::default(), Environment::new()),
        Value::Builtin(crate::Builtin::Len),
    ];
    for value in &unhashable {
        assert!(!value.is_hashable());
        assert_eq!(
            value.hash_key().err().map(|e| e.kind),
            Some(value.object_type())
        );
    }
}

#[test]
fn test_unhashable_converts_to_error_value() {
    let err = Value::array(vec![]).hash_key().err().map(Value::from);
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("ERROR: unusable as hash key: ARRAY".to_string())
    );
}

#[test]
fn test_hash_from_pairs_and_lookup() {
    let hash = Value::hash_from_pairs([
        (Value::string("one"), Value::int(1)),
        (Value::int(2), Value::int(2)),
        (Value::Bool(true), Value::int(3)),
    ])
    .unwrap_or(Value::Null);

    assert_eq!(hash.as_hash().map(HashPairs::len), Some(3));
    assert_eq!(hash.hash_get(&Value::string("one")).ok().flatten(), Some(&Value::int(1)));
    assert_eq!(hash.hash_get(&Value::int(2)).ok().flatten(), Some(&Value::int(2)));
    assert_eq!(hash.hash_get(&Value::Bool(true)).ok().flatten(), Some(&Value::int(3)));
    assert_eq!(hash.hash_get(&Value::string("missing")).ok().flatten(), None);
    assert!(hash.hash_get(&Value::array(vec![])).is_err());
}

#[test]
fn test_hash_from_pairs_later_key_wins() {
    let hash = Value::hash_from_pairs([
        (Value::string("k"), Value::int(1)),
        (Value::string("k"), Value::int(2)),
    ])
    .unwrap_or(Value::Null);
    assert_eq!(hash.to_string(), "{k: 2}");
}

#[test]
fn test_hash_from_pairs_rejects_unhashable_key() {
    let result = Value::hash_from_pairs([(Value::Null, Value::int(1))]);
    assert_eq!(result.err().map(|e| e.kind), Some(ObjectType::Null));
}

#[test]
fn test_hash_get_on_non_hash_is_not_a_missing_key() {
    let arr = Value::array(vec![Value::int(1)]);
    assert_eq!(
        arr.hash_get(&Value::int(0)),
        Err(HashIndexError::NotAHash(ObjectType::Array))
    );
    assert_eq!(
        Value::Null.hash_get(&Value::string("k")),
        Err(HashIndexError::NotAHash(ObjectType::Null))
    );
    // The receiver is checked before the key.
    assert_eq!(
        Value::int(1).hash_get(&Value::array(vec![])),
        Err(HashIndexError::NotAHash(ObjectType::Integer))
    );
}

#[test]
fn test_hash_get_unhashable_key() {
    let hash = Value::hash_from_pairs([(Value::int(1), Value::int(1))]).unwrap_or(Value::Null);
    assert_eq!(
        hash.hash_get(&Value::Null),
        Err(HashIndexError::Unhashable(UnhashableValue {
            kind: ObjectType::Null
        }))
    );
}

#[test]
fn test_hash_index_errors_convert_to_error_values() {
    let not_a_hash = Value::from(HashIndexError::NotAHash(ObjectType::Integer));
    assert_eq!(
        not_a_hash.error_message(),
        Some("index operator not supported: INTEGER")
    );
    let unhashable = Value::from(HashIndexError::Unhashable(UnhashableValue {
        kind: ObjectType::Function,
    }));
    assert_eq!(
        unhashable.error_message(),
        Some("unusable as hash key: FUNCTION")
    );
}

use super::*;
use crate::print_handler::buffer_handler;
use pretty_assertions::assert_eq;

fn call(builtin: Builtin, args: &[Value]) -> Value {
    BuiltinRegistry::with_print_handler(buffer_handler()).call(builtin, args)
}

fn ints(ns: &[i64]) -> Value {
    Value::array(ns.iter().copied().map(Value::int).collect())
}

fn error_message(value: &Value) -> String {
    value.error_message().unwrap_or("<not an error>").to_string()
}

#[test]
fn test_registry_lookup_by_exact_name() {
    let registry = BuiltinRegistry::new();
    assert_eq!(registry.len(), 6);
    for name in ["len", "first", "last", "rest", "push", "puts"] {
        let found = registry.lookup(name);
        assert!(matches!(found, Some(Value::Builtin(b)) if b.name() == name));
    }
    assert_eq!(registry.lookup("LEN"), None);
    assert_eq!(registry.lookup("print"), None);
}

#[test]
fn test_names_round_trip() {
    let registry = BuiltinRegistry::default();
    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, vec!["len", "first", "last", "rest", "push", "puts"]);
    for builtin in Builtin::ALL {
        assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
    }
}

#[test]
fn test_len() {
    assert_eq!(call(Builtin::Len, &[Value::string("")]), Value::int(0));
    assert_eq!(call(Builtin::Len, &[Value::string("abc")]), Value::int(3));
    assert_eq!(call(Builtin::Len, &[Value::string("hello world")]), Value::int(11));
    assert_eq!(call(Builtin::Len, &[ints(&[])]), Value::int(0));
    assert_eq!(call(Builtin::Len, &[ints(&[1, 2, 3])]), Value::int(3));
}

#[test]
fn test_len_errors() {
    assert_eq!(
        error_message(&call(Builtin::Len, &[Value::int(5)])),
        "argument to `len` not supported, got INTEGER"
    );
    assert_eq!(
        error_message(&call(
            Builtin::Len,
            &[Value::string("one"), Value::string("two")]
        )),
        "wrong number of arguments. got=2, want=1"
    );
    assert_eq!(
        error_message(&call(Builtin::Len, &[])),
        "wrong number of arguments. got=0, want=1"
    );
}

#[test]
fn test_first_and_last() {
    assert_eq!(call(Builtin::First, &[ints(&[1, 2, 3])]), Value::int(1));
    assert_eq!(call(Builtin::Last, &[ints(&[1, 2, 3])]), Value::int(3));
    assert_eq!(call(Builtin::First, &[ints(&[])]), Value::Null);
    assert_eq!(call(Builtin::Last, &[ints(&[])]), Value::Null);
}

#[test]
fn test_first_last_rest_reject_non_arrays() {
    assert_eq!(
        error_message(&call(Builtin::First, &[Value::int(1)])),
        "argument to `first` must be ARRAY, got INTEGER"
    );
    assert_eq!(
        error_message(&call(Builtin::Last, &[Value::string("x")])),
        "argument to `last` must be ARRAY, got STRING"
    );
    assert_eq!(
        error_message(&call(Builtin::Rest, &[Value::Null])),
        "argument to `rest` must be ARRAY, got NULL"
    );
    assert_eq!(
        error_message(&call(Builtin::Rest, &[ints(&[1]), ints(&[2])])),
        "wrong number of arguments. got=2, want=1"
    );
}

#[test]
fn test_rest() {
    assert_eq!(call(Builtin::Rest, &[ints(&[1, 2, 3])]), ints(&[2, 3]));
    assert_eq!(call(Builtin::Rest, &[ints(&[1])]), ints(&[]));
    assert_eq!(call(Builtin::Rest, &[ints(&[])]), Value::Null);
}

#[test]
fn test_rest_does_not_mutate_input() {
    let arr = ints(&[1, 2, 3]);
    let _ = call(Builtin::Rest, &[arr.clone()]);
    assert_eq!(arr, ints(&[1, 2, 3]));
}

#[test]
fn test_push() {
    assert_eq!(call(Builtin::Push, &[ints(&[]), Value::int(1)]), ints(&[1]));
    let nested = call(Builtin::Push, &[ints(&[]), Value::int(1)]);
    assert_eq!(call(Builtin::Push, &[nested, Value::int(2)]), ints(&[1, 2]));
}

#[test]
fn test_push_does_not_mutate_input() {
    let arr = ints(&[1, 2]);
    let pushed = call(Builtin::Push, &[arr.clone(), Value::int(3)]);
    assert_eq!(pushed, ints(&[1, 2, 3]));
    assert_eq!(arr.as_array().map(<[Value]>::len), Some(2));
    assert_eq!(arr, ints(&[1, 2]));
}

#[test]
fn test_push_errors() {
    assert_eq!(
        error_message(&call(Builtin::Push, &[Value::int(1), Value::int(1)])),
        "argument to `push` must be ARRAY, got INTEGER"
    );
    assert_eq!(
        error_message(&call(Builtin::Push, &[ints(&[])])),
        "wrong number of arguments. got=1, want=2"
    );
}

#[test]
fn test_puts_writes_one_line_per_argument() {
    let handler = buffer_handler();
    let registry = BuiltinRegistry::with_print_handler(handler.clone());
    let result = registry.call(
        Builtin::Puts,
        &[Value::string("hello"), ints(&[1, 2]), Value::Null],
    );
    assert_eq!(result, Value::Null);
    assert_eq!(handler.get_output(), "hello\n[1, 2]\nnull\n");
}

#[test]
fn test_puts_without_arguments() {
    let handler = buffer_handler();
    let registry = BuiltinRegistry::with_print_handler(handler.clone());
    assert_eq!(registry.call(Builtin::Puts, &[]), Value::Null);
    assert_eq!(handler.get_output(), "");
}

#[test]
fn test_register_into_binds_all_names() {
    let env = Environment::new();
    BuiltinRegistry::new().register_into(&env);
    for builtin in Builtin::ALL {
        assert_eq!(env.get(builtin.name()), Some(Value::Builtin(builtin)));
    }
}

#[test]
fn test_registry_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BuiltinRegistry>();
}

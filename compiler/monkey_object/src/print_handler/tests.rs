use super::*;
use crate::builtins::{Builtin, BuiltinRegistry};
use crate::value::Value;
use pretty_assertions::assert_eq;

#[test]
fn test_buffer_records_value_renderings() {
    let handler = BufferPrintHandler::default();
    handler.println(&Value::array(vec![Value::int(1), Value::Null]).to_string());
    handler.println(&Value::Bool(false).to_string());
    assert_eq!(handler.get_output(), "[1, null]\nfalse\n");
}

#[test]
fn test_buffer_keeps_embedded_newlines() {
    let handler = buffer_handler();
    handler.println(&Value::string("two\nlines").to_string());
    assert_eq!(handler.get_output(), "two\nlines\n");
    assert_eq!(handler.get_output().lines().count(), 2);
}

#[test]
fn test_host_and_registry_share_one_buffer() {
    let handler = buffer_handler();
    let registry = BuiltinRegistry::with_print_handler(handler.clone());

    registry.call(Builtin::Puts, &[Value::int(1)]);
    assert_eq!(registry.print_handler().get_output(), "1\n");

    // A host resets capture between runs through its own handle.
    handler.clear();
    registry.call(Builtin::Puts, &[Value::string("next")]);
    assert_eq!(handler.get_output(), "next\n");
}

#[test]
fn test_silent_registry_still_returns_null() {
    let registry = BuiltinRegistry::with_print_handler(silent_handler());
    let result = registry.call(Builtin::Puts, &[Value::string("dropped")]);
    assert_eq!(result, Value::Null);
    assert_eq!(registry.print_handler().get_output(), "");
}

#[test]
fn test_stdout_registry_captures_nothing() {
    let registry = BuiltinRegistry::new();
    assert!(matches!(
        **registry.print_handler(),
        PrintHandlerImpl::Stdout(_)
    ));
    assert_eq!(registry.call(Builtin::Puts, &[]), Value::Null);
    assert_eq!(registry.print_handler().get_output(), "");
    registry.print_handler().clear();
}

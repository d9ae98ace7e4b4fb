//! Runtime values.
//!
//! Resolvers, hooks and coercion all operate on [`serde_json::Value`]s. Schema
//! literals (argument defaults, directive arguments, query arguments) stay in
//! their [`ast::Value`] form until they are coerced against a known type.

use crate::ast;

pub type JsonValue = serde_json::Value;
pub type JsonMap = serde_json::Map<String, JsonValue>;

/// Render an arbitrary runtime value for use inside of an error message.
///
/// Strings are rendered quoted, everything else as compact JSON.
pub fn print_json(value: &JsonValue) -> String {
    value.to_string()
}

/// A string that is equal for two values exactly when the values compare
/// equal, regardless of the order object keys were inserted in.
pub(crate) fn canonical_key(value: &JsonValue) -> String {
    match value {
        JsonValue::Array(items) => format!(
            "[{}]",
            items.iter().map(canonical_key).collect::<Vec<_>>().join(","),
        ),
        JsonValue::Object(entries) => {
            let mut entries: Vec<_> = entries.iter().collect();
            entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
            let entries: Vec<_> = entries.into_iter()
                .map(|(key, value)| format!(
                    "{}:{}",
                    JsonValue::String(key.to_owned()),
                    canonical_key(value),
                ))
                .collect();
            format!("{{{}}}", entries.join(","))
        },
        scalar => scalar.to_string(),
    }
}

/// Render an AST literal the way it would appear in GraphQL source text.
pub fn print_ast_value(value: &ast::Value) -> String {
    value.to_string()
}

/// Converts an AST literal into a runtime value without consulting any type
/// information. Variables are substituted from `variables` (absent variables
/// become `null`) and enum literals become strings.
pub fn ast_value_to_json(value: &ast::Value, variables: &JsonMap) -> JsonValue {
    use ast::Value;
    match value {
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Enum(name) => JsonValue::String(name.to_string()),
        Value::Float(f) =>
            serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
        Value::Int(num) =>
            num.as_i64()
                .map(JsonValue::from)
                .unwrap_or(JsonValue::Null),
        Value::List(items) => JsonValue::Array(
            items.iter()
                .map(|item| ast_value_to_json(item, variables))
                .collect()
        ),
        Value::Null => JsonValue::Null,
        Value::Object(entries) => JsonValue::Object(
            entries.iter()
                .map(|(key, val)| (key.to_string(), ast_value_to_json(val, variables)))
                .collect()
        ),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Variable(var_name) =>
            variables.get(var_name.as_str())
                .cloned()
                .unwrap_or(JsonValue::Null),
    }
}

/// Loose truthiness: `null`, `false`, `0`, `0.0`, `""`, `"0"`, `[]` and `{}`
/// are falsy, everything else is truthy.
pub fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(num) =>
            num.as_f64().is_some_and(|n| n != 0.0),
        JsonValue::String(s) => !(s.is_empty() || s == "0"),
        JsonValue::Array(items) => !items.is_empty(),
        JsonValue::Object(entries) => !entries.is_empty(),
    }
}

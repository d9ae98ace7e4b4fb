//! Coercion rules of the five built-in scalar types.

use crate::ast;
use crate::types::CoercionError;
use crate::types::GraphQLTypeKind;
use crate::types::SerializationError;
use crate::value;
use crate::value::JsonMap;
use crate::value::JsonValue;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BuiltinScalar {
    Boolean,
    Float,
    ID,
    Int,
    String,
}
impl BuiltinScalar {
    pub const ALL: [BuiltinScalar; 5] = [
        Self::Boolean,
        Self::Float,
        Self::ID,
        Self::Int,
        Self::String,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scalar| scalar.name() == name)
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        match self {
            Self::Boolean => GraphQLTypeKind::Bool,
            Self::Float => GraphQLTypeKind::Float,
            Self::ID => GraphQLTypeKind::ID,
            Self::Int => GraphQLTypeKind::Int,
            Self::String => GraphQLTypeKind::String,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Boolean =>
                "The `Boolean` scalar type represents `true` or `false`.",
            Self::Float =>
                "The `Float` scalar type represents signed double-precision \
                fractional values as specified by \
                [IEEE 754](http://en.wikipedia.org/wiki/IEEE_floating_point).",
            Self::ID =>
                "The `ID` scalar type represents a unique identifier, often \
                used to refetch an object or as key for a cache. The ID type \
                appears in a JSON response as a String; however, it is not \
                intended to be human-readable. When expected as an input type, \
                any string (such as `\"4\"`) or integer (such as `4`) input \
                value will be accepted as an ID.",
            Self::Int =>
                "The `Int` scalar type represents non-fractional signed whole \
                numeric values. Int can represent values between -(2^31) and \
                2^31 - 1.",
            Self::String =>
                "The `String` scalar type represents textual data, represented \
                as UTF-8 character sequences. The String type is most often \
                used by GraphQL to represent free-form human-readable text.",
        }
    }

    pub fn serialize(&self, internal: &JsonValue) -> Result<JsonValue, SerializationError> {
        match self {
            Self::Boolean => Ok(JsonValue::Bool(value::is_truthy(internal))),
            Self::Float => serialize_float(internal),
            Self::ID => serialize_id(internal),
            Self::Int => serialize_int(internal),
            Self::String => serialize_string(internal),
        }
    }

    pub fn parse_value(&self, input: &JsonValue) -> Result<JsonValue, CoercionError> {
        let printed = || value::print_json(input);
        match (self, input) {
            (Self::Boolean, JsonValue::Bool(_)) => Ok(input.clone()),
            (Self::Boolean, _) => Err(CoercionError::new(format!(
                "Boolean cannot represent a non boolean value: {}",
                printed(),
            ))),

            (Self::Float, JsonValue::Number(_)) => Ok(input.clone()),
            (Self::Float, _) => Err(CoercionError::new(format!(
                "Float cannot represent non numeric value: {}",
                printed(),
            ))),

            (Self::ID, JsonValue::String(_)) => Ok(input.clone()),
            (Self::ID, JsonValue::Number(num)) if num.is_i64() || num.is_u64() =>
                Ok(JsonValue::String(num.to_string())),
            (Self::ID, _) => Err(CoercionError::new(format!(
                "ID cannot represent value: {}",
                printed(),
            ))),

            (Self::Int, JsonValue::Number(num)) => match as_integer(num) {
                Some(int) if fits_i32(int) => Ok(JsonValue::from(int)),
                Some(_) => Err(CoercionError::new(format!(
                    "Int cannot represent non 32-bit signed integer value: {}",
                    printed(),
                ))),
                None => Err(CoercionError::new(format!(
                    "Int cannot represent non-integer value: {}",
                    printed(),
                ))),
            },
            (Self::Int, _) => Err(CoercionError::new(format!(
                "Int cannot represent non-integer value: {}",
                printed(),
            ))),

            (Self::String, JsonValue::String(_)) => Ok(input.clone()),
            (Self::String, _) => Err(CoercionError::new(format!(
                "String cannot represent a non string value: {}",
                printed(),
            ))),
        }
    }

    pub fn parse_literal(
        &self,
        literal: &ast::Value,
        _variables: &JsonMap,
    ) -> Result<JsonValue, CoercionError> {
        let printed = || value::print_ast_value(literal);
        match (self, literal) {
            (Self::Boolean, ast::Value::Boolean(b)) => Ok(JsonValue::Bool(*b)),
            (Self::Boolean, _) => Err(CoercionError::new(format!(
                "Boolean cannot represent a non boolean value: {}",
                printed(),
            ))),

            (Self::Float, ast::Value::Float(f)) => Ok(
                serde_json::Number::from_f64(*f)
                    .map(JsonValue::Number)
                    .unwrap_or(JsonValue::Null)
            ),
            (Self::Float, ast::Value::Int(num)) =>
                Ok(num.as_i64().map(JsonValue::from).unwrap_or(JsonValue::Null)),
            (Self::Float, _) => Err(CoercionError::new(format!(
                "Float cannot represent non numeric value: {}",
                printed(),
            ))),

            (Self::ID, ast::Value::String(s)) => Ok(JsonValue::String(s.to_string())),
            (Self::ID, ast::Value::Int(num)) => match num.as_i64() {
                Some(int) => Ok(JsonValue::String(int.to_string())),
                None => Err(CoercionError::new(format!(
                    "ID cannot represent a non-string and non-integer value: {}",
                    printed(),
                ))),
            },
            (Self::ID, _) => Err(CoercionError::new(format!(
                "ID cannot represent a non-string and non-integer value: {}",
                printed(),
            ))),

            (Self::Int, ast::Value::Int(num)) => match num.as_i64() {
                Some(int) if fits_i32(int) => Ok(JsonValue::from(int)),
                _ => Err(CoercionError::new(format!(
                    "Int cannot represent non 32-bit signed integer value: {}",
                    printed(),
                ))),
            },
            (Self::Int, _) => Err(CoercionError::new(format!(
                "Int cannot represent non-integer value: {}",
                printed(),
            ))),

            (Self::String, ast::Value::String(s)) => Ok(JsonValue::String(s.to_string())),
            (Self::String, _) => Err(CoercionError::new(format!(
                "String cannot represent a non string value: {}",
                printed(),
            ))),
        }
    }
}

fn fits_i32(int: i64) -> bool {
    i32::try_from(int).is_ok()
}

/// Integral numbers, including floats without a fractional part.
fn as_integer(num: &serde_json::Number) -> Option<i64> {
    if let Some(int) = num.as_i64() {
        return Some(int);
    }
    let float = num.as_f64()?;
    (float.fract() == 0.0 && float.abs() <= i64::MAX as f64).then_some(float as i64)
}

fn serialize_float(internal: &JsonValue) -> Result<JsonValue, SerializationError> {
    let float = match internal {
        JsonValue::Number(num) => num.as_f64(),
        JsonValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    float.filter(|f| f.is_finite())
        .and_then(serde_json::Number::from_f64)
        .map(JsonValue::Number)
        .ok_or_else(|| SerializationError::new(format!(
            "Float cannot represent non numeric value: {}",
            value::print_json(internal),
        )))
}

fn serialize_id(internal: &JsonValue) -> Result<JsonValue, SerializationError> {
    let id = match internal {
        JsonValue::String(s) => Some(s.to_string()),
        JsonValue::Number(num) => as_integer(num).map(|int| int.to_string()),
        _ => None,
    };
    id.map(JsonValue::String)
        .ok_or_else(|| SerializationError::new(format!(
            "ID cannot represent value: {}",
            value::print_json(internal),
        )))
}

fn serialize_int(internal: &JsonValue) -> Result<JsonValue, SerializationError> {
    let int = match internal {
        JsonValue::Number(num) => as_integer(num),
        JsonValue::Bool(b) => Some(i64::from(*b)),
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match int {
        Some(int) if fits_i32(int) => Ok(JsonValue::from(int)),
        Some(_) => Err(SerializationError::new(format!(
            "Int cannot represent non 32-bit signed integer value: {}",
            value::print_json(internal),
        ))),
        None => Err(SerializationError::new(format!(
            "Int cannot represent non-integer value: {}",
            value::print_json(internal),
        ))),
    }
}

fn serialize_string(internal: &JsonValue) -> Result<JsonValue, SerializationError> {
    match internal {
        JsonValue::String(_) => Ok(internal.clone()),
        JsonValue::Number(num) => Ok(JsonValue::String(num.to_string())),
        JsonValue::Bool(b) => Ok(JsonValue::String(b.to_string())),
        _ => Err(SerializationError::new(format!(
            "String cannot represent value: {}",
            value::print_json(internal),
        ))),
    }
}

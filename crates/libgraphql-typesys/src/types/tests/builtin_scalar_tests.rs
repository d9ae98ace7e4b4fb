use crate::ast;
use crate::types::BuiltinScalar;
use crate::types::CoercionError;
use crate::value::JsonMap;
use serde_json::json;

type Result<T> = std::result::Result<T, CoercionError>;

mod boolean {
    use super::*;

    #[test]
    fn serialize_uses_loose_truthiness() {
        let falsy = [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!("0"), json!([]), json!({})];
        for value in falsy {
            assert_eq!(BuiltinScalar::Boolean.serialize(&value), Ok(json!(false)), "{value}");
        }

        let truthy = [json!(true), json!(1), json!(-2.5), json!("false"), json!([0]), json!({"a": null})];
        for value in truthy {
            assert_eq!(BuiltinScalar::Boolean.serialize(&value), Ok(json!(true)), "{value}");
        }
    }

    #[test]
    fn parse_value_accepts_only_booleans() -> Result<()> {
        assert_eq!(BuiltinScalar::Boolean.parse_value(&json!(true))?, json!(true));
        assert_eq!(BuiltinScalar::Boolean.parse_value(&json!(false))?, json!(false));

        let err = BuiltinScalar::Boolean.parse_value(&json!(1)).unwrap_err();
        assert_eq!(err.message, "Boolean cannot represent a non boolean value: 1");

        let err = BuiltinScalar::Boolean.parse_value(&json!("true")).unwrap_err();
        assert_eq!(err.message, "Boolean cannot represent a non boolean value: \"true\"");

        Ok(())
    }

    #[test]
    fn parse_literal_accepts_only_boolean_nodes() -> Result<()> {
        let variables = JsonMap::new();
        assert_eq!(
            BuiltinScalar::Boolean.parse_literal(&ast::Value::Boolean(true), &variables)?,
            json!(true),
        );

        let err = BuiltinScalar::Boolean.parse_literal(
            &ast::Value::String("true".to_string()),
            &variables,
        ).unwrap_err();
        assert!(err.message.starts_with("Boolean cannot represent a non boolean value: "));

        Ok(())
    }

    #[test]
    fn description_is_standard() {
        assert_eq!(
            BuiltinScalar::Boolean.description(),
            "The `Boolean` scalar type represents `true` or `false`.",
        );
    }
}

mod int {
    use super::*;

    #[test]
    fn parse_value_enforces_32_bit_range() -> Result<()> {
        assert_eq!(BuiltinScalar::Int.parse_value(&json!(2147483647))?, json!(2147483647));
        assert_eq!(BuiltinScalar::Int.parse_value(&json!(-2147483648))?, json!(-2147483648));

        let err = BuiltinScalar::Int.parse_value(&json!(2147483648_i64)).unwrap_err();
        assert_eq!(
            err.message,
            "Int cannot represent non 32-bit signed integer value: 2147483648",
        );

        let err = BuiltinScalar::Int.parse_value(&json!(1.5)).unwrap_err();
        assert_eq!(err.message, "Int cannot represent non-integer value: 1.5");

        Ok(())
    }

    #[test]
    fn parse_literal_rejects_strings() {
        let err = BuiltinScalar::Int.parse_literal(
            &ast::Value::String("1".to_string()),
            &JsonMap::new(),
        ).unwrap_err();
        assert!(err.message.starts_with("Int cannot represent non-integer value: "));
    }
}

mod id_and_string {
    use super::*;

    #[test]
    fn id_accepts_integers_as_strings() -> Result<()> {
        assert_eq!(BuiltinScalar::ID.parse_value(&json!(4))?, json!("4"));
        assert_eq!(BuiltinScalar::ID.parse_value(&json!("abc"))?, json!("abc"));
        assert!(BuiltinScalar::ID.parse_value(&json!(true)).is_err());
        Ok(())
    }

    #[test]
    fn string_rejects_numbers() -> Result<()> {
        assert_eq!(BuiltinScalar::String.parse_value(&json!("x"))?, json!("x"));
        let err = BuiltinScalar::String.parse_value(&json!(1)).unwrap_err();
        assert_eq!(err.message, "String cannot represent a non string value: 1");
        Ok(())
    }

    #[test]
    fn from_name_round_trips_every_scalar() {
        for scalar in BuiltinScalar::ALL {
            assert_eq!(BuiltinScalar::from_name(scalar.name()), Some(scalar));
        }
        assert_eq!(BuiltinScalar::from_name("Date"), None);
    }
}

use crate::Schema;
use crate::SchemaBuildError;
use crate::SchemaBuilder;
use crate::ast;
use crate::execution::Executor;
use crate::schema::ResolverMap;
use crate::schema::TypeConfigDecorator;
use crate::schema::extend_schema;
use crate::types::FieldResolver;
use crate::types::GraphQLType;
use crate::types::TypeConfig;
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn base_schema() -> Result<Schema> {
    SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { hero: Character }\n",
            "type Character { name: String }\n",
        ))?
        .build()
}

fn field_names<'a>(schema: &'a Schema, type_name: &str) -> Vec<&'a str> {
    schema.lookup_type(type_name)
        .and_then(GraphQLType::as_object)
        .map(|obj_type| obj_type.fields().keys().map(|name| name.as_str()).collect())
        .unwrap_or_default()
}

mod passes {
    use super::*;

    #[test]
    fn base_schema_is_left_unchanged() -> Result<()> {
        let base = base_schema()?;
        let extended = base.extender()
            .load_str(None, "extend type Query { droid(id: ID!): Character }")?
            .extend()?;

        assert_eq!(field_names(&base, "Query"), vec!["hero"]);
        assert_eq!(field_names(&extended, "Query"), vec!["hero", "droid"]);
        assert!(base.query_type().extension_locations().is_empty());
        assert_eq!(extended.query_type().extension_locations().len(), 1);

        Ok(())
    }

    #[test]
    fn two_non_overlapping_passes_resolve_through_the_query_path() -> Result<()> {
        let base = base_schema()?;
        let first = base.extender()
            .load_str(None, "extend type Query { first: String }")?
            .extend()?;
        let second = first.extender()
            .load_str(None, "extend type Query { second: String }")?
            .extend()?;

        assert_eq!(field_names(&second, "Query"), vec!["hero", "first", "second"]);

        let response = Executor::new(&second)
            .root_value(json!({
                "hero": {"name": "Luke"},
                "first": "one",
                "second": "two",
            }))
            .execute_str("{ hero { name } first second }");
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(response.data, Some(json!({
            "hero": {"name": "Luke"},
            "first": "one",
            "second": "two",
        })));

        Ok(())
    }

    #[test]
    fn decorator_sees_only_touched_types_in_declaration_order() -> Result<()> {
        let base = base_schema()?;
        let seen = Arc::new(Mutex::new(vec![]));
        let decorator_seen = Arc::clone(&seen);
        base.extender()
            .load_str(None, concat!(
                "type Starship { name: String }\n",
                "extend type Character { age: Int }\n",
                "type Planet { name: String }\n",
                "extend type Query { ship: Starship planet: Planet }\n",
            ))?
            .decorator(move |config: TypeConfig| {
                decorator_seen.lock().unwrap().push(config.name().to_string());
                config
            })
            .extend()?;

        assert_eq!(*seen.lock().unwrap(), vec!["Query", "Character", "Starship", "Planet"]);

        Ok(())
    }

    #[test]
    fn untouched_types_are_carried_over() -> Result<()> {
        let base = base_schema()?;
        let extended = base.extender()
            .load_str(None, "extend type Query { count: Int }")?
            .extend()?;

        let base_character = base.lookup_type("Character").expect("defined in base");
        let extended_character = extended.lookup_type("Character").expect("carried over");
        assert_eq!(base_character.def_location(), extended_character.def_location());
        assert_eq!(field_names(&extended, "Character"), vec!["name"]);

        Ok(())
    }

    #[test]
    fn extend_schema_visits_extra_documents_after_the_extension() -> Result<()> {
        let base = base_schema()?;
        let extension = ast::schema::parse("extend type Query { ship: Starship }")
            .expect("valid schema text");
        let starship = ast::schema::parse("type Starship { name: String length: Float }")
            .expect("valid schema text");
        let resolvers = ResolverMap::new()
            .field("Query", "ship", FieldResolver::new(|_, _, _, _| {
                Ok(json!({"name": "Millennium Falcon", "length": 34.37}))
            }));

        let extended = extend_schema(
            &base,
            &extension,
            &[starship],
            Some(Arc::new(resolvers) as Arc<dyn TypeConfigDecorator>),
        )?;

        let response = Executor::new(&extended).execute_str("{ ship { name length } }");
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(response.data, Some(json!({
            "ship": {"name": "Millennium Falcon", "length": 34.37},
        })));

        Ok(())
    }
}

mod errors {
    use super::*;

    #[test]
    fn schema_definition_in_extension() -> Result<()> {
        let base = base_schema()?;
        let result = base.extender().load_str(None, "schema { query: Query }");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::SchemaDefinitionInExtension { .. },
        ));
        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() -> Result<()> {
        let base = base_schema()?;
        let result = base.extender()
            .load_str(None, "extend type Starship { name: String }")?
            .extend();
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::ExtensionOfUndefinedType { type_name, .. } if type_name == "Starship",
        ));
        Ok(())
    }

    #[test]
    fn redefinition_of_base_type() -> Result<()> {
        let base = base_schema()?;
        let result = base.extender().load_str(None, "type Character { id: ID }");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateTypeDefinition { type_name, .. } if type_name == "Character",
        ));
        Ok(())
    }

    #[test]
    fn field_collision_with_base_field() -> Result<()> {
        let base = base_schema()?;
        let result = base.extender().load_str(None, "extend type Character { name: Int }");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateFieldNameDefinition { type_name, field_name, .. }
                if type_name == "Character" && field_name == "name",
        ));
        Ok(())
    }

    #[test]
    fn extension_with_wrong_kind() -> Result<()> {
        let base = base_schema()?;
        let result = base.extender().load_str(None, "extend union Character = Query");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::InvalidExtensionType { type_name, .. } if type_name == "Character",
        ));
        Ok(())
    }

    #[test]
    fn failed_extension_keeps_base_usable() -> Result<()> {
        let base = base_schema()?;
        let result = base.extender()
            .load_str(None, "extend type Query { broken: Missing }")?
            .extend();
        assert!(matches!(result.unwrap_err(), SchemaBuildError::TypeValidationErrors { .. }));

        let response = Executor::new(&base)
            .root_value(json!({"hero": {"name": "Leia"}}))
            .execute_str("{ hero { name } }");
        assert_eq!(response.data, Some(json!({"hero": {"name": "Leia"}})));

        Ok(())
    }
}

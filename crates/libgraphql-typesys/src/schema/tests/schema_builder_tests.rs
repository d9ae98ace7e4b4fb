use crate::SchemaBuildError;
use crate::SchemaBuilder;
use crate::loc;
use crate::schema::GraphQLOperationType;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let schema = SchemaBuilder::new().build();
        assert_eq!(schema.unwrap_err(), SchemaBuildError::NoQueryOperationTypeDefined);
    }

    #[test]
    fn load_query_type_str() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { hello: String }")?
            .build()?;

        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());
        assert_eq!(schema.types().len(), 6);
        assert_eq!(schema.all_directives().len(), 4);

        let query_type = schema.query_type();
        assert_eq!(query_type.name(), "Query");
        assert!(query_type.def_location().is_sdl());
        assert_eq!(query_type.fields().keys().collect::<Vec<_>>(), vec!["hello"]);

        Ok(())
    }

    #[test]
    fn load_invalid_schema_syntax() {
        let result = SchemaBuilder::new().load_str(None, "this is not valid syntax");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::ParseError { file, .. } if file == PathBuf::from("str://0"),
        ));
    }

    #[test]
    fn load_str_counts_anonymous_sources() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: String }")?
            .load_str(Some(PathBuf::from("schema.graphql")), "type Other { a: String }")?
            .load_str(None, "type Query { b: String }");

        let Err(SchemaBuildError::DuplicateTypeDefinition { type_name, def1, def2 }) = result else {
            panic!("expected a duplicate type definition");
        };
        assert_eq!(type_name, "Query");
        assert_eq!(
            def1.file_position().and_then(|pos| pos.file.clone()),
            Some(PathBuf::from("str://0")),
        );
        assert_eq!(
            def2.file_position().and_then(|pos| pos.file.clone()),
            Some(PathBuf::from("str://1")),
        );

        Ok(())
    }

    #[test]
    fn object_types_must_define_fields() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query")?
            .build();
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::InvariantViolation { type_name, .. } if type_name == "Query",
        ));
        Ok(())
    }
}

mod root_operations {
    use super::*;

    #[test]
    fn schema_block_renames_roots() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: RootQuery mutation: RootMutation }\n",
                "type RootQuery { a: String }\n",
                "type RootMutation { b: String }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type().name(), "RootQuery");
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("RootMutation"));

        Ok(())
    }

    #[test]
    fn roots_must_be_distinct() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: Root mutation: Root }\ntype Root { a: String }");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::NonUniqueOperationTypes {
                reused_type_name,
                operation1: GraphQLOperationType::Query,
                operation2: GraphQLOperationType::Mutation,
                ..
            } if reused_type_name == "Root",
        ));
        Ok(())
    }

    #[test]
    fn roots_must_be_object_types() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Query }\n",
                "interface Query { a: String }\n",
            ))?
            .build();
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::InvalidRootOperationType {
                operation: GraphQLOperationType::Query,
                type_name,
                ..
            } if type_name == "Query",
        ));
        Ok(())
    }
}

mod extensions {
    use super::*;

    #[test]
    fn extension_may_precede_definition() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "extend type Query { b: Int }\n",
                "type Query { a: String }\n",
            ))?
            .build()?;

        let query_type = schema.query_type();
        assert_eq!(query_type.fields().keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(query_type.extension_locations().len(), 1);
        assert!(matches!(query_type.extension_locations()[0], loc::SourceLocation::Schema(_)));

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: String }\nextend type Missing { b: Int }")?
            .build();
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::ExtensionOfUndefinedType { type_name, .. } if type_name == "Missing",
        ));
        Ok(())
    }

    #[test]
    fn extension_of_another_kind() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: String }\nextend interface Query { b: Int }");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::InvalidExtensionType {
                type_name,
                type_kind: GraphQLTypeKind::Object,
                ..
            } if type_name == "Query",
        ));
        Ok(())
    }

    #[test]
    fn extension_of_builtin_scalar() {
        let result = SchemaBuilder::new()
            .load_str(None, "extend scalar String @specifiedBy(url: \"https://example.com\")");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::InvalidExtensionType {
                type_name,
                type_kind: GraphQLTypeKind::String,
                ..
            } if type_name == "String",
        ));
    }

    #[test]
    fn extension_field_collision() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: String }\nextend type Query { a: Int }");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateFieldNameDefinition { type_name, field_name, .. }
                if type_name == "Query" && field_name == "a",
        ));
        Ok(())
    }

    #[test]
    fn extension_enum_value_collision() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { e: Episode }\n",
                "enum Episode { NEWHOPE EMPIRE }\n",
                "extend enum Episode { JEDI EMPIRE }\n",
            ));
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateEnumValueDefinition { .. },
        ));
        Ok(())
    }

    #[test]
    fn extension_appends_interfaces_and_members() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "interface Node { id: ID! }\n",
                "type Human { id: ID! }\n",
                "type Droid { id: ID! }\n",
                "union Being = Human\n",
                "type Query { node: Node being: Being }\n",
                "extend type Droid implements Node\n",
                "extend union Being = Droid\n",
            ))?
            .build()?;

        let droid = schema.lookup_type("Droid").and_then(GraphQLType::as_object)
            .expect("Droid is an object type");
        assert!(droid.implements_interface("Node"));

        let being = schema.lookup_type("Being").and_then(GraphQLType::as_union)
            .expect("Being is a union type");
        assert_eq!(being.member_type_names(), vec!["Human", "Droid"]);

        Ok(())
    }
}

use crate::Schema;
use crate::SchemaBuilder;
use crate::ast;
use crate::execution::GraphQLLocation;
use crate::validation::KnownTypeNames;
use crate::validation::ValidationError;

fn star_wars_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { user: User droid: Droid }\n",
            "type User { name: String }\n",
            "type Droid { model: String }\n",
        ))
        .and_then(SchemaBuilder::build)
        .expect("schema builds")
}

fn validate_query(schema: &Schema, source: &str) -> Vec<ValidationError> {
    let document = ast::query::parse(source).expect("query parses");
    KnownTypeNames::validate_executable(schema, &document)
}

fn validate_sdl(schema: Option<&Schema>, source: &str) -> Vec<ValidationError> {
    let document = ast::schema::parse(source).expect("schema document parses");
    KnownTypeNames::validate_type_system(schema, &document)
}

fn messages(errors: &[ValidationError]) -> Vec<&str> {
    errors.iter().map(|err| err.message.as_str()).collect()
}

mod executable_documents {
    use super::*;

    #[test]
    fn known_types_are_accepted() {
        let schema = star_wars_schema();
        let errors = validate_query(&schema, concat!(
            "query ($name: String!, $models: [String!]) {\n",
            "  user { ...UserFields }\n",
            "  droid { ... on Droid { model } }\n",
            "}\n",
            "fragment UserFields on User { name }\n",
        ));
        assert_eq!(errors, vec![]);
    }

    #[test]
    fn unknown_variable_type() {
        let schema = star_wars_schema();
        let errors = validate_query(&schema, "query ($u: Usr) { user { name } }");
        assert_eq!(errors, vec![ValidationError {
            message: "Unknown type \"Usr\". Did you mean \"User\"?".to_string(),
            locations: vec![GraphQLLocation { line: 1, column: 8 }],
        }]);
    }

    #[test]
    fn unknown_wrapped_variable_type() {
        let schema = star_wars_schema();
        let errors = validate_query(&schema, "query ($ids: [Droyd!]!) { droid { model } }");
        assert_eq!(messages(&errors), vec!["Unknown type \"Droyd\". Did you mean \"Droid\"?"]);
    }

    #[test]
    fn unknown_fragment_type_condition() {
        let schema = star_wars_schema();
        let errors = validate_query(&schema, "{ user { name } }\nfragment F on Usre { name }");
        assert_eq!(errors, vec![ValidationError {
            message: "Unknown type \"Usre\". Did you mean \"User\"?".to_string(),
            locations: vec![GraphQLLocation { line: 2, column: 1 }],
        }]);
    }

    #[test]
    fn unknown_inline_fragment_type_condition() {
        let schema = star_wars_schema();
        let errors = validate_query(&schema, "{ user { ... on Usre { name } } }");
        // Inline fragments are positioned at their `on` keyword.
        assert_eq!(errors, vec![ValidationError {
            message: "Unknown type \"Usre\". Did you mean \"User\"?".to_string(),
            locations: vec![GraphQLLocation { line: 1, column: 14 }],
        }]);
    }

    #[test]
    fn introspection_types_are_not_variable_types() {
        let schema = star_wars_schema();
        let errors = validate_query(&schema, "query ($t: __Type) { user { name } }");
        assert_eq!(messages(&errors), vec!["Unknown type \"__Type\"."]);
    }

    #[test]
    fn errors_are_reported_in_document_order() {
        let schema = star_wars_schema();
        let errors = validate_query(&schema, concat!(
            "query ($a: Alpha, $b: Beta) { user { ... on Gamma { name } } }\n",
            "fragment F on Delta { name }\n",
        ));
        assert_eq!(messages(&errors), vec![
            "Unknown type \"Alpha\".",
            "Unknown type \"Beta\".",
            "Unknown type \"Gamma\".",
            "Unknown type \"Delta\".",
        ]);
    }
}

mod type_system_documents {
    use super::*;

    #[test]
    fn standard_and_local_types_are_accepted() {
        let errors = validate_sdl(None, concat!(
            "schema { query: Query }\n",
            "type Query { user(id: ID!): User meta: __Type }\n",
            "type User { id: ID friends(first: Int = 10): [User!]! score: Float }\n",
            "input Filter { name: String active: Boolean }\n",
            "directive @limit(max: Int) on FIELD_DEFINITION\n",
        ));
        assert_eq!(errors, vec![]);
    }

    #[test]
    fn unknown_field_type_is_located_at_the_field() {
        let errors = validate_sdl(None, "type Query { user: Usr }\ntype User { id: ID }");
        assert_eq!(errors, vec![ValidationError {
            message: "Unknown type \"Usr\". Did you mean \"User\"?".to_string(),
            locations: vec![GraphQLLocation { line: 1, column: 14 }],
        }]);
    }

    #[test]
    fn suggestions_include_standard_and_local_types() {
        let errors = validate_sdl(None, "type Query { a: Strng }\ntype Strong { x: Int }");
        assert_eq!(messages(&errors), vec![
            "Unknown type \"Strng\". Did you mean \"String\" or \"Strong\"?",
        ]);
    }

    #[test]
    fn schema_types_are_known_but_not_suggested() {
        let schema = star_wars_schema();
        let errors = validate_sdl(
            Some(&schema),
            "extend type Query { best: Droid }\nextend type User { ship: Droyd }",
        );
        assert_eq!(messages(&errors), vec!["Unknown type \"Droyd\"."]);
    }

    #[test]
    fn arguments_input_fields_and_directive_arguments_are_checked() {
        let errors = validate_sdl(None, concat!(
            "type Query { search(filter: Bogus): String }\n",
            "input Filter { nested: Missing }\n",
            "directive @limit(max: Absent) on FIELD_DEFINITION\n",
        ));
        assert_eq!(messages(&errors), vec![
            "Unknown type \"Bogus\".",
            "Unknown type \"Missing\".",
            "Unknown type \"Absent\".",
        ]);
    }

    #[test]
    fn union_members_and_interfaces_are_located_at_the_definition() {
        let errors = validate_sdl(None, concat!(
            "union Result = User | Robot\n",
            "type User implements Entity { id: ID }\n",
        ));
        assert_eq!(errors, vec![
            ValidationError {
                message: "Unknown type \"Robot\".".to_string(),
                locations: vec![GraphQLLocation { line: 1, column: 1 }],
            },
            ValidationError {
                message: "Unknown type \"Entity\".".to_string(),
                locations: vec![GraphQLLocation { line: 2, column: 1 }],
            },
        ]);
    }

    #[test]
    fn root_operation_types_and_extensions_are_checked() {
        let errors = validate_sdl(None, concat!(
            "schema { query: Root }\n",
            "extend type Query { extra: Extra }\n",
            "extend union Result = Orphan\n",
        ));
        assert_eq!(messages(&errors), vec![
            "Unknown type \"Root\".",
            "Unknown type \"Extra\".",
            "Unknown type \"Orphan\".",
        ]);
    }
}

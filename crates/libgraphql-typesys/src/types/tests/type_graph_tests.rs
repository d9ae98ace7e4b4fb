use crate::SchemaBuildError;
use crate::types::FieldConfig;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectTypeConfig;
use crate::types::TypeAnnotation;
use crate::types::TypeGraph;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn object_type(name: &str) -> GraphQLType {
    GraphQLType::from_config(ObjectTypeConfig::new(name, || IndexMap::from([(
        "id".to_string(),
        FieldConfig::new("id", TypeAnnotation::named("ID", false)),
    )])).into())
}

#[test]
fn new_graph_holds_builtin_scalars() {
    let graph = TypeGraph::new();
    assert_eq!(graph.len(), 5);
    assert_eq!(
        graph.all_type_names().into_iter().collect::<Vec<_>>(),
        vec!["Boolean", "Float", "ID", "Int", "String"],
    );
    assert_eq!(graph.lookup("Boolean").map(GraphQLType::kind), Some(GraphQLTypeKind::Bool));
}

#[test]
fn register_and_lookup() -> Result<()> {
    let mut graph = TypeGraph::new();
    graph.register_type(object_type("User"))?;
    graph.register_type(object_type("Account"))?;

    assert!(graph.contains("User"));
    assert_eq!(graph.lookup("User").map(GraphQLType::name), Some("User"));
    assert!(graph.lookup("Missing").is_none());

    // Iteration keeps registration order; `all_type_names` is sorted.
    let iter_names: Vec<&str> = graph.iter().map(GraphQLType::name).skip(5).collect();
    assert_eq!(iter_names, vec!["User", "Account"]);
    let sorted_names: Vec<&str> = graph.all_type_names().into_iter().collect();
    assert_eq!(sorted_names[0], "Account");

    Ok(())
}

#[test]
fn register_rejects_duplicates() -> Result<()> {
    let mut graph = TypeGraph::new();
    graph.register_type(object_type("User"))?;

    assert!(matches!(
        graph.register_type(object_type("User")),
        Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. }) if type_name == "User",
    ));
    assert!(matches!(
        graph.register_type(object_type("String")),
        Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. }) if type_name == "String",
    ));

    Ok(())
}

#[test]
fn register_rejects_malformed_names() {
    let mut graph = TypeGraph::new();

    assert!(matches!(
        graph.register_type(object_type("1User")),
        Err(SchemaBuildError::InvalidTypeName { type_name, .. }) if type_name == "1User",
    ));
    assert!(matches!(
        graph.register_type(object_type("User-Account")),
        Err(SchemaBuildError::InvalidTypeName { .. }),
    ));
    assert!(matches!(
        graph.register_type(object_type("__User")),
        Err(SchemaBuildError::InvalidDunderPrefixedTypeName { type_name, .. }) if type_name == "__User",
    ));
    assert_eq!(graph.len(), 5);
}

use crate::SchemaBuilder;
use crate::execution::Executor;
use crate::execution::GraphQLError;
use crate::execution::GraphQLLocation;
use crate::execution::PathSegment;
use crate::execution::Response;
use serde_json::json;

#[test]
fn serializes_field_errors_with_data() -> Result<(), Box<dyn std::error::Error>> {
    let schema = SchemaBuilder::new()
        .load_str(None, "type User { id: ID! }\ntype Query { users: [User] }")?
        .build()?;
    let response = Executor::new(&schema)
        .root_value(json!({"users": [{"id": "1"}, {}]}))
        .execute_str("{ users { id } }");

    assert_eq!(serde_json::to_value(&response)?, json!({
        "errors": [{
            "message": "Cannot return null for non-nullable field User.id.",
            "locations": [{"line": 1, "column": 11}],
            "path": ["users", 1, "id"],
        }],
        "data": {"users": [{"id": "1"}, null]},
    }));
    Ok(())
}

#[test]
fn omits_empty_errors_and_absent_data() -> Result<(), serde_json::Error> {
    let ok = Response {
        errors: vec![],
        data: Some(json!({"name": "Ann"})),
    };
    assert_eq!(serde_json::to_value(&ok)?, json!({"data": {"name": "Ann"}}));

    let failed = Response {
        errors: vec![GraphQLError::new("Must provide an operation.", None)],
        data: None,
    };
    assert_eq!(serde_json::to_value(&failed)?, json!({
        "errors": [{"message": "Must provide an operation."}],
    }));
    Ok(())
}

#[test]
fn deserializes_a_response_body() -> Result<(), serde_json::Error> {
    let response: Response = serde_json::from_value(json!({
        "errors": [{
            "message": "boom",
            "locations": [{"line": 3, "column": 5}],
            "path": ["hero", "friends", 0],
        }],
        "data": {"hero": null},
    }))?;

    assert_eq!(response, Response {
        errors: vec![GraphQLError {
            message: "boom".to_string(),
            locations: vec![GraphQLLocation { line: 3, column: 5 }],
            path: vec![
                PathSegment::Field("hero".to_string()),
                PathSegment::Field("friends".to_string()),
                PathSegment::ListIndex(0),
            ],
        }],
        data: Some(json!({"hero": null})),
    });

    let empty: Response = serde_json::from_value(json!({}))?;
    assert_eq!(empty, Response { errors: vec![], data: None });
    Ok(())
}

#[test]
fn path_segments_display_as_keys_and_indices() {
    let rendered = [PathSegment::Field("friends".to_string()), PathSegment::ListIndex(2)]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".");
    assert_eq!(rendered, "friends.2");
}

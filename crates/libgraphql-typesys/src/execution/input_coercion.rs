use crate::ast;
use crate::execution::GraphQLError;
use crate::loc;
use crate::schema::Schema;
use crate::types::CoercionError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use crate::value;
use crate::value::JsonMap;
use crate::value::JsonValue;

/// Coerces the runtime variable values of a request against the operation's
/// variable definitions, applying defaults.
///
/// <https://spec.graphql.org/October2021/#CoerceVariableValues()>
pub(crate) fn coerce_variable_values(
    schema: &Schema,
    variable_defs: &[ast::query::VariableDefinition],
    inputs: &JsonMap,
) -> Result<JsonMap, Vec<GraphQLError>> {
    let mut coerced_values = JsonMap::new();
    let mut errors = vec![];
    for var_def in variable_defs {
        let name = var_def.name.as_str();
        let var_srcloc = loc::SourceLocation::ExecutableDocument(
            loc::FilePosition::from_pos(None, var_def.position),
        );
        let annotation = TypeAnnotation::from_ast_type(&var_srcloc, &var_def.var_type);
        let is_input_type = schema.lookup_type(annotation.inner_named_type_ref().name())
            .is_some_and(GraphQLType::is_input_type);
        if !is_input_type {
            errors.push(GraphQLError::new(
                format!(
                    "Variable \"${name}\" expected value of type \"{annotation}\" \
                    which cannot be used as an input type.",
                ),
                Some(var_def.position),
            ));
            continue;
        }

        let Some(input) = inputs.get(name) else {
            if let Some(default) = &var_def.default_value {
                match coerce_literal(schema, &annotation, default, &JsonMap::new()) {
                    Ok(coerced) => {
                        coerced_values.insert(name.to_string(), coerced);
                    },
                    Err(err) => errors.push(GraphQLError::new(
                        format!("Variable \"${name}\" has invalid default value: {err}"),
                        Some(var_def.position),
                    )),
                }
            } else if !annotation.nullable() {
                errors.push(GraphQLError::new(
                    format!(
                        "Variable \"${name}\" of required type \"{annotation}\" \
                        was not provided.",
                    ),
                    Some(var_def.position),
                ));
            }
            continue;
        };

        if input.is_null() && !annotation.nullable() {
            errors.push(GraphQLError::new(
                format!(
                    "Variable \"${name}\" of non-null type \"{annotation}\" \
                    must not be null.",
                ),
                Some(var_def.position),
            ));
            continue;
        }
        match coerce_input_value(schema, &annotation, input) {
            Ok(coerced) => {
                coerced_values.insert(name.to_string(), coerced);
            },
            Err(err) => errors.push(GraphQLError::new(
                format!(
                    "Variable \"${name}\" got invalid value {}; {err}",
                    value::print_json(input),
                ),
                Some(var_def.position),
            )),
        }
    }

    if errors.is_empty() {
        Ok(coerced_values)
    } else {
        Err(errors)
    }
}

/// Coerces the arguments passed to `field` against the parameters declared
/// by `field_def`.
///
/// <https://spec.graphql.org/October2021/#CoerceArgumentValues()>
pub(crate) fn coerce_argument_values(
    schema: &Schema,
    field_def: &Field,
    field: &ast::query::Field,
    variables: &JsonMap,
) -> Result<JsonMap, String> {
    let mut coerced_values = JsonMap::new();
    for (param_name, param) in field_def.parameters() {
        let annotation = param.type_annotation();
        let argument = field.arguments.iter()
            .find(|(arg_name, _)| arg_name == param_name)
            .map(|(_, arg_value)| arg_value);

        let provided = match argument {
            Some(ast::Value::Variable(var_name)) => match variables.get(var_name.as_str()) {
                Some(var_value) => Some(Ok(var_value.clone())),
                None if param.default_value().is_none() && !annotation.nullable() =>
                    return Err(format!(
                        "Argument \"{param_name}\" of required type \"{annotation}\" \
                        was provided the variable \"${var_name}\" which was not \
                        provided a runtime value.",
                    )),
                None => None,
            },
            Some(literal) => Some(
                coerce_literal(schema, annotation, literal, variables).map_err(|err| {
                    format!(
                        "Argument \"{param_name}\" has invalid value {}. {err}",
                        value::print_ast_value(literal),
                    )
                }),
            ),
            None => None,
        };

        match provided {
            Some(coerced) => {
                let coerced = coerced?;
                if coerced.is_null() && !annotation.nullable() {
                    return Err(format!(
                        "Argument \"{param_name}\" of non-null type \"{annotation}\" \
                        must not be null.",
                    ));
                }
                coerced_values.insert(param_name.to_string(), coerced);
            },

            None => if let Some(default) = param.default_value() {
                let coerced = coerce_literal(schema, annotation, default, variables)
                    .map_err(|err| format!(
                        "Argument \"{param_name}\" has invalid default value. {err}",
                    ))?;
                coerced_values.insert(param_name.to_string(), coerced);
            } else if !annotation.nullable() {
                return Err(format!(
                    "Argument \"{param_name}\" of required type \"{annotation}\" \
                    was not provided.",
                ));
            },
        }
    }
    Ok(coerced_values)
}

/// Coerces a literal (an argument, a default value or a nested list/object
/// item) into the internal representation of `annotation`.
pub(crate) fn coerce_literal(
    schema: &Schema,
    annotation: &TypeAnnotation,
    literal: &ast::Value,
    variables: &JsonMap,
) -> Result<JsonValue, CoercionError> {
    if let ast::Value::Variable(var_name) = literal {
        return match variables.get(var_name.as_str()) {
            Some(var_value) => Ok(var_value.clone()),
            None if annotation.nullable() => Ok(JsonValue::Null),
            None => Err(CoercionError::new(format!(
                "Variable \"${var_name}\" of required type \"{annotation}\" \
                was not provided.",
            ))),
        };
    }

    if let ast::Value::Null = literal {
        return if annotation.nullable() {
            Ok(JsonValue::Null)
        } else {
            Err(CoercionError::new(format!(
                "Expected value of non-null type \"{annotation}\" not to be null.",
            )))
        };
    }

    match annotation {
        TypeAnnotation::List(list_annot) => {
            let inner = list_annot.inner_type_annotation();
            match literal {
                ast::Value::List(items) => items.iter()
                    .map(|item| coerce_literal(schema, inner, item, variables))
                    .collect::<Result<Vec<_>, _>>()
                    .map(JsonValue::Array),
                _ => Ok(JsonValue::Array(vec![
                    coerce_literal(schema, inner, literal, variables)?,
                ])),
            }
        },

        TypeAnnotation::Named(named_annot) => {
            let graphql_type = lookup_input_type(schema, named_annot.graphql_type_name())?;
            let GraphQLType::InputObject(inputobj_type) = graphql_type else {
                return graphql_type.parse_literal(literal, variables);
            };
            let ast::Value::Object(entries) = literal else {
                return Err(CoercionError::new(format!(
                    "Expected type \"{}\" to be an object.",
                    inputobj_type.name(),
                )));
            };
            let mut provided = JsonMap::new();
            for (key, entry) in entries {
                let field = inputobj_type.fields().get(key.as_str()).ok_or_else(|| {
                    unknown_input_field(inputobj_type, key)
                })?;
                let coerced = coerce_literal(
                    schema,
                    field.type_annotation(),
                    entry,
                    variables,
                )?;
                provided.insert(key.to_string(), coerced);
            }
            complete_input_object(schema, inputobj_type, provided, variables)
        },
    }
}

/// Coerces a runtime (JSON) value, such as a variable, into the internal
/// representation of `annotation`.
pub(crate) fn coerce_input_value(
    schema: &Schema,
    annotation: &TypeAnnotation,
    input: &JsonValue,
) -> Result<JsonValue, CoercionError> {
    if input.is_null() {
        return if annotation.nullable() {
            Ok(JsonValue::Null)
        } else {
            Err(CoercionError::new(format!(
                "Expected non-nullable type \"{annotation}\" not to be null.",
            )))
        };
    }

    match annotation {
        TypeAnnotation::List(list_annot) => {
            let inner = list_annot.inner_type_annotation();
            match input {
                JsonValue::Array(items) => items.iter()
                    .map(|item| coerce_input_value(schema, inner, item))
                    .collect::<Result<Vec<_>, _>>()
                    .map(JsonValue::Array),
                _ => Ok(JsonValue::Array(vec![
                    coerce_input_value(schema, inner, input)?,
                ])),
            }
        },

        TypeAnnotation::Named(named_annot) => {
            let graphql_type = lookup_input_type(schema, named_annot.graphql_type_name())?;
            let GraphQLType::InputObject(inputobj_type) = graphql_type else {
                return graphql_type.parse_value(input);
            };
            let JsonValue::Object(entries) = input else {
                return Err(CoercionError::new(format!(
                    "Expected type \"{}\" to be an object.",
                    inputobj_type.name(),
                )));
            };
            let mut provided = JsonMap::new();
            for (key, entry) in entries {
                let field = inputobj_type.fields().get(key).ok_or_else(|| {
                    unknown_input_field(inputobj_type, key)
                })?;
                let coerced = coerce_input_value(schema, field.type_annotation(), entry)?;
                provided.insert(key.to_string(), coerced);
            }
            complete_input_object(schema, inputobj_type, provided, &JsonMap::new())
        },
    }
}

/// Fills in defaults for the input fields absent from `provided` and checks
/// that every required field is present.
fn complete_input_object(
    schema: &Schema,
    inputobj_type: &InputObjectType,
    mut provided: JsonMap,
    variables: &JsonMap,
) -> Result<JsonValue, CoercionError> {
    let mut coerced = JsonMap::new();
    for (field_name, field) in inputobj_type.fields() {
        let annotation = field.type_annotation();
        if let Some(field_value) = provided.remove(field_name) {
            if field_value.is_null() && !annotation.nullable() {
                return Err(CoercionError::new(format!(
                    "Field \"{}.{field_name}\" of non-null type \"{annotation}\" \
                    must not be null.",
                    inputobj_type.name(),
                )));
            }
            coerced.insert(field_name.to_string(), field_value);
        } else if let Some(default) = field.default_value() {
            let default = coerce_literal(schema, annotation, default, variables)?;
            coerced.insert(field_name.to_string(), default);
        } else if !annotation.nullable() {
            return Err(CoercionError::new(format!(
                "Field \"{}.{field_name}\" of required type \"{annotation}\" was \
                not provided.",
                inputobj_type.name(),
            )));
        }
    }
    Ok(JsonValue::Object(coerced))
}

fn lookup_input_type<'schema>(
    schema: &'schema Schema,
    type_name: &str,
) -> Result<&'schema GraphQLType, CoercionError> {
    match schema.lookup_type(type_name) {
        Some(graphql_type) if graphql_type.is_input_type() => Ok(graphql_type),
        Some(graphql_type) => Err(CoercionError::new(format!(
            "{} type \"{type_name}\" can not be used as an input type.",
            graphql_type.kind().name(),
        ))),
        None => Err(CoercionError::new(format!("Unknown type \"{type_name}\"."))),
    }
}

fn unknown_input_field(inputobj_type: &InputObjectType, key: &str) -> CoercionError {
    CoercionError::new(format!(
        "Field \"{key}\" is not defined by type \"{}\".",
        inputobj_type.name(),
    ))
}

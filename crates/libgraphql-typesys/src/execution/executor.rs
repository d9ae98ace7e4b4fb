use crate::ast;
use crate::diagnostics::DiagnosticSink;
use crate::execution::GraphQLError;
use crate::execution::PathSegment;
use crate::execution::ResolveInfo;
use crate::execution::Response;
use crate::execution::abstract_type_resolver::resolve_abstract_type;
use crate::execution::input_coercion::coerce_argument_values;
use crate::execution::input_coercion::coerce_variable_values;
use crate::schema::GraphQLOperationType;
use crate::schema::Schema;
use crate::types::ContextValue;
use crate::types::Field;
use crate::types::FieldResolver;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::value;
use crate::value::JsonMap;
use crate::value::JsonValue;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Return in `Err` when a field error occurred at some non-nullable place.
///
/// <https://spec.graphql.org/October2021/#sec-Handling-Field-Errors>
pub(crate) struct PropagateNull;

/// Linked-list version of `Vec<PathSegment>`, taking advantage of the call
/// stack.
pub(crate) type LinkedPath<'a> = Option<&'a LinkedPathElement<'a>>;

pub(crate) struct LinkedPathElement<'a> {
    pub(crate) element: PathSegment,
    pub(crate) next: LinkedPath<'a>,
}

/// Executes operations against a [`Schema`].
///
/// ```ignore
/// let response = Executor::new(&schema)
///     .root_value(json!({"hero": {"name": "R2-D2"}}))
///     .execute_str("{ hero { name } }");
/// ```
///
/// Field values are produced, in order of precedence, by the field's own
/// `resolve` hook, its parent type's `resolve_field` hook, the
/// [`field_resolver`](Executor::field_resolver) given here, and finally a
/// lookup of the field name on the parent value.
pub struct Executor<'a> {
    context: Arc<ContextValue>,
    default_diagnostics: DiagnosticSink,
    diagnostics: Option<&'a DiagnosticSink>,
    field_resolver: Option<FieldResolver>,
    operation_name: Option<String>,
    root_value: JsonValue,
    schema: &'a Schema,
    variables: JsonMap,
}
impl<'a> Executor<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            context: Arc::new(()),
            default_diagnostics: DiagnosticSink::new(),
            diagnostics: None,
            field_resolver: None,
            operation_name: None,
            root_value: JsonValue::Null,
            schema,
            variables: JsonMap::new(),
        }
    }

    /// The value handed to every hook as `context`.
    pub fn context(mut self, context: Arc<ContextValue>) -> Self {
        self.context = context;
        self
    }

    /// Routes diagnostics raised during execution to `diagnostics`. Without
    /// one, each `Executor` owns a fresh [`DiagnosticSink`].
    pub fn diagnostics(mut self, diagnostics: &'a DiagnosticSink) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Replaces the default property lookup for fields with neither a
    /// `resolve` nor a type-level `resolve_field` hook.
    pub fn field_resolver(mut self, field_resolver: FieldResolver) -> Self {
        self.field_resolver = Some(field_resolver);
        self
    }

    pub fn operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn root_value(mut self, root_value: JsonValue) -> Self {
        self.root_value = root_value;
        self
    }

    pub fn variables(mut self, variables: JsonMap) -> Self {
        self.variables = variables;
        self
    }

    /// Parses `source` as an executable document and executes it. Parse
    /// failures are reported as a request error.
    pub fn execute_str(&self, source: &str) -> Response {
        match ast::query::parse(source) {
            Ok(document) => self.execute(&document),
            Err(err) => Response::from_request_error(GraphQLError::new(
                format!("Syntax Error: {err}"),
                None,
            )),
        }
    }

    pub fn execute(&self, document: &ast::query::Document) -> Response {
        let mut fragments = HashMap::new();
        let mut operations = vec![];
        for def in &document.definitions {
            match def {
                ast::query::Definition::Fragment(fragment) => {
                    fragments.insert(fragment.name.as_str(), fragment);
                },
                ast::query::Definition::Operation(operation) =>
                    operations.push(Operation::from_ast(operation)),
            }
        }

        let operation = match self.select_operation(&operations) {
            Ok(operation) => operation,
            Err(err) => return Response::from_request_error(err),
        };
        let variables = match coerce_variable_values(
            self.schema,
            operation.variable_defs,
            &self.variables,
        ) {
            Ok(variables) => variables,
            Err(errors) => return Response::from_request_errors(errors),
        };
        let root_type = match operation.kind {
            GraphQLOperationType::Query => self.schema.query_type(),
            GraphQLOperationType::Mutation => match self.schema.mutation_type() {
                Some(mutation_type) => mutation_type,
                None => return Response::from_request_error(GraphQLError::new(
                    "Schema is not configured for mutations.",
                    Some(operation.position),
                )),
            },
            GraphQLOperationType::Subscription =>
                return Response::from_request_error(GraphQLError::new(
                    "Subscription operations are not supported.",
                    Some(operation.position),
                )),
        };

        let mut ctx = ExecutionContext {
            context: &*self.context,
            diagnostics: self.diagnostics.unwrap_or(&self.default_diagnostics),
            errors: vec![],
            field_resolver: self.field_resolver.as_ref(),
            fragments,
            operation_name: operation.name,
            root_value: &self.root_value,
            schema: self.schema,
            variables: &variables,
        };
        let data = execute_selection_set(
            &mut ctx,
            None,
            root_type,
            &self.root_value,
            &operation.selection_set.items,
        );
        tracing::debug!(
            operation_name = operation.name,
            num_errors = ctx.errors.len(),
            "executed operation",
        );

        Response {
            errors: ctx.errors,
            data: Some(match data {
                Ok(data) => JsonValue::Object(data),
                Err(PropagateNull) => JsonValue::Null,
            }),
        }
    }

    fn select_operation<'doc>(
        &self,
        operations: &[Operation<'doc>],
    ) -> Result<Operation<'doc>, GraphQLError> {
        match &self.operation_name {
            Some(name) => operations.iter()
                .find(|operation| operation.name == Some(name.as_str()))
                .copied()
                .ok_or_else(|| GraphQLError::new(
                    format!("Unknown operation named \"{name}\"."),
                    None,
                )),
            None => match operations {
                [operation] => Ok(*operation),
                [] => Err(GraphQLError::new("Must provide an operation.", None)),
                _ => Err(GraphQLError::new(
                    "Must provide operation name if query contains multiple operations.",
                    None,
                )),
            },
        }
    }
}
impl std::fmt::Debug for Executor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("field_resolver", &self.field_resolver)
            .field("operation_name", &self.operation_name)
            .field("root_value", &self.root_value)
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy)]
struct Operation<'doc> {
    kind: GraphQLOperationType,
    name: Option<&'doc str>,
    position: ast::Pos,
    selection_set: &'doc ast::query::SelectionSet,
    variable_defs: &'doc [ast::query::VariableDefinition],
}
impl<'doc> Operation<'doc> {
    fn from_ast(operation: &'doc ast::query::OperationDefinition) -> Self {
        use ast::query::OperationDefinition as OpDef;
        match operation {
            OpDef::SelectionSet(selection_set) => Self {
                kind: GraphQLOperationType::Query,
                name: None,
                position: selection_set.span.0,
                selection_set,
                variable_defs: &[],
            },
            OpDef::Query(query) => Self {
                kind: GraphQLOperationType::Query,
                name: query.name.as_deref(),
                position: query.position,
                selection_set: &query.selection_set,
                variable_defs: &query.variable_definitions,
            },
            OpDef::Mutation(mutation) => Self {
                kind: GraphQLOperationType::Mutation,
                name: mutation.name.as_deref(),
                position: mutation.position,
                selection_set: &mutation.selection_set,
                variable_defs: &mutation.variable_definitions,
            },
            OpDef::Subscription(subscription) => Self {
                kind: GraphQLOperationType::Subscription,
                name: subscription.name.as_deref(),
                position: subscription.position,
                selection_set: &subscription.selection_set,
                variable_defs: &subscription.variable_definitions,
            },
        }
    }
}

struct ExecutionContext<'a> {
    context: &'a ContextValue,
    diagnostics: &'a DiagnosticSink,
    errors: Vec<GraphQLError>,
    field_resolver: Option<&'a FieldResolver>,
    fragments: HashMap<&'a str, &'a ast::query::FragmentDefinition>,
    operation_name: Option<&'a str>,
    root_value: &'a JsonValue,
    schema: &'a Schema,
    variables: &'a JsonMap,
}

/// <https://spec.graphql.org/October2021/#ExecuteSelectionSet()>
fn execute_selection_set<'a>(
    ctx: &mut ExecutionContext<'a>,
    path: LinkedPath<'_>,
    object_type: &'a ObjectType,
    object_value: &JsonValue,
    selections: impl IntoIterator<Item = &'a ast::query::Selection>,
) -> Result<JsonMap, PropagateNull> {
    let mut grouped_field_set = IndexMap::new();
    collect_fields(
        ctx,
        object_type,
        selections,
        &mut HashSet::new(),
        &mut grouped_field_set,
    );

    let mut response_map = JsonMap::new();
    for (response_key, fields) in &grouped_field_set {
        let field_name = fields[0].name.as_str();
        if field_name == "__typename" {
            response_map.insert(
                response_key.to_string(),
                JsonValue::String(object_type.name().to_string()),
            );
            continue;
        }
        let Some(field_def) = object_type.field(field_name) else {
            continue;
        };
        let field_path = LinkedPathElement {
            element: PathSegment::Field(response_key.to_string()),
            next: path,
        };
        let value = execute_field(
            ctx,
            Some(&field_path),
            object_type,
            object_value,
            field_def,
            fields,
        )?;
        response_map.insert(response_key.to_string(), value);
    }
    Ok(response_map)
}

/// <https://spec.graphql.org/October2021/#CollectFields()>
fn collect_fields<'a>(
    ctx: &ExecutionContext<'a>,
    object_type: &ObjectType,
    selections: impl IntoIterator<Item = &'a ast::query::Selection>,
    visited_fragments: &mut HashSet<&'a str>,
    grouped_fields: &mut IndexMap<&'a str, Vec<&'a ast::query::Field>>,
) {
    use ast::query::Selection;
    for selection in selections {
        let directives = match selection {
            Selection::Field(field) => &field.directives,
            Selection::FragmentSpread(spread) => &spread.directives,
            Selection::InlineFragment(inline) => &inline.directives,
        };
        if eval_if_arg(directives, "skip", ctx.variables).unwrap_or(false)
            || !eval_if_arg(directives, "include", ctx.variables).unwrap_or(true) {
            continue;
        }
        match selection {
            Selection::Field(field) => grouped_fields
                .entry(field.alias.as_deref().unwrap_or(field.name.as_str()))
                .or_default()
                .push(field),

            Selection::FragmentSpread(spread) => {
                if !visited_fragments.insert(spread.fragment_name.as_str()) {
                    continue;
                }
                let Some(&fragment) = ctx.fragments.get(spread.fragment_name.as_str()) else {
                    continue;
                };
                let ast::query::TypeCondition::On(type_condition) = &fragment.type_condition;
                if !does_fragment_type_apply(ctx.schema, object_type, type_condition) {
                    continue;
                }
                collect_fields(
                    ctx,
                    object_type,
                    &fragment.selection_set.items,
                    visited_fragments,
                    grouped_fields,
                )
            },

            Selection::InlineFragment(inline) => {
                if let Some(ast::query::TypeCondition::On(type_condition)) = &inline.type_condition {
                    if !does_fragment_type_apply(ctx.schema, object_type, type_condition) {
                        continue;
                    }
                }
                collect_fields(
                    ctx,
                    object_type,
                    &inline.selection_set.items,
                    visited_fragments,
                    grouped_fields,
                )
            },
        }
    }
}

/// <https://spec.graphql.org/October2021/#DoesFragmentTypeApply()>
fn does_fragment_type_apply(
    schema: &Schema,
    object_type: &ObjectType,
    fragment_type: &str,
) -> bool {
    match schema.lookup_type(fragment_type) {
        Some(GraphQLType::Object(_)) => fragment_type == object_type.name(),
        Some(abstract_type @ (GraphQLType::Interface(_) | GraphQLType::Union(_))) =>
            schema.is_possible_type(abstract_type, object_type),
        _ => false,
    }
}

fn eval_if_arg(
    directives: &[ast::Directive],
    directive_name: &str,
    variables: &JsonMap,
) -> Option<bool> {
    let directive = directives.iter().find(|directive| directive.name == directive_name)?;
    let (_, if_arg) = directive.arguments.iter().find(|(arg_name, _)| arg_name == "if")?;
    match if_arg {
        ast::Value::Boolean(value) => Some(*value),
        ast::Value::Variable(var_name) => variables.get(var_name.as_str())?.as_bool(),
        _ => None,
    }
}

/// <https://spec.graphql.org/October2021/#ExecuteField()>
fn execute_field<'a>(
    ctx: &mut ExecutionContext<'a>,
    path: LinkedPath<'_>,
    object_type: &'a ObjectType,
    object_value: &JsonValue,
    field_def: &'a Field,
    fields: &[&'a ast::query::Field],
) -> Result<JsonValue, PropagateNull> {
    let field = fields[0];
    let annotation = field_def.type_annotation();
    let argument_values = match coerce_argument_values(
        ctx.schema,
        field_def,
        field,
        ctx.variables,
    ) {
        Ok(argument_values) => argument_values,
        Err(message) => {
            ctx.errors.push(GraphQLError::field_error(message, path, field.position));
            return try_nullify(annotation, Err(PropagateNull));
        },
    };

    let info = ResolveInfo {
        field_definition: field_def,
        field_nodes: fields,
        operation_name: ctx.operation_name,
        parent_type: object_type,
        path,
        root_value: ctx.root_value,
        schema: ctx.schema,
        variables: ctx.variables,
    };
    let resolver = field_def.resolver()
        .or_else(|| object_type.resolve_field())
        .or(ctx.field_resolver);
    let resolved = match resolver {
        Some(resolver) => resolver.call(object_value, &argument_values, ctx.context, &info),
        None => Ok(default_field_resolver(object_value, field_def.name())),
    };

    let completed = match resolved {
        Ok(resolved) => complete_value(ctx, path, annotation, &info, fields, resolved),
        Err(err) => {
            ctx.errors.push(GraphQLError::field_error(err.message, path, field.position));
            Err(PropagateNull)
        },
    };
    try_nullify(annotation, completed)
}

/// Reads the property named like the field off of an object source value.
fn default_field_resolver(source: &JsonValue, field_name: &str) -> JsonValue {
    source.get(field_name)
        .cloned()
        .unwrap_or(JsonValue::Null)
}

/// <https://spec.graphql.org/October2021/#CompleteValue()>
///
/// Returns `Err` for a field error being propagated upwards to find a
/// nullable place.
fn complete_value<'a>(
    ctx: &mut ExecutionContext<'a>,
    path: LinkedPath<'_>,
    annotation: &TypeAnnotation,
    info: &ResolveInfo<'_>,
    fields: &[&'a ast::query::Field],
    resolved: JsonValue,
) -> Result<JsonValue, PropagateNull> {
    let position = fields[0].position;
    macro_rules! field_error {
        ($($arg: tt)+) => {
            {
                ctx.errors.push(GraphQLError::field_error(
                    format!($($arg)+),
                    path,
                    position,
                ));
                return Err(PropagateNull);
            }
        };
    }

    if resolved.is_null() {
        if annotation.nullable() {
            return Ok(JsonValue::Null);
        }
        field_error!(
            "Cannot return null for non-nullable field {}.{}.",
            info.parent_type.name(),
            info.field_name(),
        )
    }

    let named_annot = match annotation {
        TypeAnnotation::List(list_annot) => {
            let JsonValue::Array(items) = resolved else {
                field_error!(
                    "Expected Iterable, but did not find one for field \"{}.{}\".",
                    info.parent_type.name(),
                    info.field_name(),
                )
            };
            let inner_annot = list_annot.inner_type_annotation();
            let mut completed_list = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                let inner_path = LinkedPathElement {
                    element: PathSegment::ListIndex(index),
                    next: path,
                };
                let inner_result = complete_value(
                    ctx,
                    Some(&inner_path),
                    inner_annot,
                    info,
                    fields,
                    item,
                );
                // On field error, try to nullify that item
                match try_nullify(inner_annot, inner_result) {
                    Ok(inner_value) => completed_list.push(inner_value),
                    // If the item is non-null, try to nullify the list
                    Err(PropagateNull) => return try_nullify(annotation, Err(PropagateNull)),
                }
            }
            return Ok(JsonValue::Array(completed_list));
        },
        TypeAnnotation::Named(named_annot) => named_annot,
    };

    let Some(graphql_type) = named_annot.graphql_type(ctx.schema) else {
        field_error!("Undefined type {}", named_annot.graphql_type_name())
    };
    let object_type = match graphql_type {
        GraphQLType::InputObject(_) =>
            field_error!("Field with input object type {}", graphql_type.name()),

        GraphQLType::Object(object_type) => {
            if let Some(is_type_of) = object_type.is_type_of() {
                if !is_type_of.call(&resolved, ctx.context, info) {
                    field_error!(
                        "Expected value of type \"{}\" but got: {}.",
                        object_type.name(),
                        value::print_json(&resolved),
                    )
                }
            }
            object_type.as_ref()
        },

        // The runtime type picked here is final: `is_type_of` is not
        // consulted again.
        GraphQLType::Interface(_) | GraphQLType::Union(_) => match resolve_abstract_type(
            ctx.schema,
            graphql_type,
            &resolved,
            ctx.context,
            info,
            ctx.diagnostics,
        ) {
            Ok(object_type) => object_type,
            Err(err) => field_error!("{err}"),
        },

        _ => return match graphql_type.serialize(&resolved) {
            Ok(serialized) => Ok(serialized),
            Err(err) => field_error!("{err}"),
        },
    };

    execute_selection_set(
        ctx,
        path,
        object_type,
        &resolved,
        fields
            .iter()
            .flat_map(|field| &field.selection_set.items),
    )
    .map(JsonValue::Object)
}

/// Try to insert a propagated null if possible, or keep propagating it.
///
/// <https://spec.graphql.org/October2021/#sec-Handling-Field-Errors>
fn try_nullify(
    annotation: &TypeAnnotation,
    result: Result<JsonValue, PropagateNull>,
) -> Result<JsonValue, PropagateNull> {
    match result {
        Ok(json) => Ok(json),
        Err(PropagateNull) => {
            if annotation.nullable() {
                Ok(JsonValue::Null)
            } else {
                Err(PropagateNull)
            }
        },
    }
}

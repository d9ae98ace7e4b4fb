use crate::diagnostics::DiagnosticIds;
use crate::diagnostics::DiagnosticSink;
use crate::diagnostics::Severity;
use crate::execution::ResolveInfo;
use crate::schema::Schema;
use crate::types::ContextValue;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeResolver;
use crate::value;
use crate::value::JsonValue;

const FULL_SCHEMA_SCAN_SUFFIX: &str =
    "Switching to slow resolution method using isTypeOf of all possible \
    implementations. It requires full schema scan and degrades query \
    performance significantly. Make sure your resolveType always returns \
    valid implementation or throws.";

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum AbstractTypeResolutionError {
    #[error(
        "Abstract type {abstract_type_name} must resolve to an Object type at \
        runtime for field {parent_type_name}.{field_name} with value \
        \"{printed_value}\", received \"null\". Either the \
        {abstract_type_name} type should provide a \"resolveType\" function \
        or each possible type should provide an \"isTypeOf\" function."
    )]
    NoMatch {
        abstract_type_name: String,
        field_name: String,
        parent_type_name: String,
        printed_value: String,
    },

    #[error("`{type_name}` is not an interface or union type")]
    NotAnAbstractType {
        type_name: String,
    },

    #[error(
        "Runtime Object type \"{resolved_type_name}\" is not a possible type \
        for \"{abstract_type_name}\"."
    )]
    NotAPossibleType {
        abstract_type_name: String,
        resolved_type_name: String,
    },
}

/// Determines the concrete [`ObjectType`] of `value`, a runtime value of the
/// interface or union `abstract_type`.
///
/// A `resolve_type` hook on the abstract type is consulted first. When there
/// is none (or it returns `None`) a `__typename` entry on the value is
/// honored, and failing that every possible type's `is_type_of` hook is tried
/// in declaration order. Falling back to that scan raises a
/// [`DiagnosticIds::FULL_SCHEMA_SCAN`] diagnostic: on every occurrence when a
/// hook returned `None`, once per `diagnostics` sink when there is no hook.
pub fn resolve_abstract_type<'schema>(
    schema: &'schema Schema,
    abstract_type: &GraphQLType,
    value: &JsonValue,
    context: &ContextValue,
    info: &ResolveInfo<'_>,
    diagnostics: &DiagnosticSink,
) -> Result<&'schema ObjectType, AbstractTypeResolutionError> {
    let (kind_name, resolve_type): (&str, Option<&TypeResolver>) = match abstract_type {
        GraphQLType::Interface(iface) => ("Interface", iface.resolve_type()),
        GraphQLType::Union(union_type) => ("Union", union_type.resolve_type()),
        _ => return Err(AbstractTypeResolutionError::NotAnAbstractType {
            type_name: abstract_type.name().to_string(),
        }),
    };
    let abstract_type_name = abstract_type.name();
    let possible_types = schema.possible_types(abstract_type);
    let find_possible_type = |type_name: &str| {
        possible_types.iter()
            .copied()
            .find(|obj_type| obj_type.name() == type_name)
    };

    match resolve_type {
        Some(resolve_type) => match resolve_type.call(value, context, info) {
            Some(type_name) => {
                return find_possible_type(&type_name).ok_or_else(|| {
                    AbstractTypeResolutionError::NotAPossibleType {
                        abstract_type_name: abstract_type_name.to_string(),
                        resolved_type_name: type_name,
                    }
                });
            },

            None => diagnostics.warn(
                &format!(
                    "{kind_name} type {abstract_type_name} returned null from \
                    its resolveType function for value: {}. \
                    {FULL_SCHEMA_SCAN_SUFFIX}",
                    value::print_json(value),
                ),
                DiagnosticIds::FULL_SCHEMA_SCAN,
                Severity::Warning,
            ),
        },

        None => {
            let typename = value.get("__typename").and_then(JsonValue::as_str);
            if let Some(obj_type) = typename.and_then(find_possible_type) {
                return Ok(obj_type);
            }
            diagnostics.warn_once(
                &format!(
                    "{kind_name} type {abstract_type_name} does not provide a \
                    resolveType function. {FULL_SCHEMA_SCAN_SUFFIX}",
                ),
                DiagnosticIds::FULL_SCHEMA_SCAN,
                Severity::Warning,
            );
        },
    }

    let resolved = possible_types.into_iter().find(|obj_type| {
        obj_type.is_type_of()
            .is_some_and(|is_type_of| is_type_of.call(value, context, info))
    });
    tracing::debug!(
        abstract_type = abstract_type_name,
        resolved_type = resolved.map(|obj_type| obj_type.name()),
        "resolved abstract type by is_type_of scan",
    );

    resolved.ok_or_else(|| AbstractTypeResolutionError::NoMatch {
        abstract_type_name: abstract_type_name.to_string(),
        field_name: info.field_name().to_string(),
        parent_type_name: info.parent_type().name().to_string(),
        printed_value: value::print_json(value),
    })
}

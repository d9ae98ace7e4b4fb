use crate::ast;
use crate::schema::Schema;
use crate::suggestion;
use crate::types::BuiltinScalar;
use crate::validation::ValidationError;
use std::collections::HashSet;

const INTROSPECTION_TYPE_NAMES: [&str; 8] = [
    "__Directive",
    "__DirectiveLocation",
    "__EnumValue",
    "__Field",
    "__InputValue",
    "__Schema",
    "__Type",
    "__TypeKind",
];

/// A GraphQL document is only valid if referenced types (specifically
/// variable definitions and fragment conditions) are defined by the type
/// schema.
///
/// <https://spec.graphql.org/October2021/#sec-Fragment-Spread-Type-Existence>
#[derive(Clone, Copy, Debug, Default)]
pub struct KnownTypeNames;
impl KnownTypeNames {
    /// Checks the variable types and fragment type conditions of an
    /// executable document against `schema`.
    pub fn validate_executable(
        schema: &Schema,
        document: &ast::query::Document,
    ) -> Vec<ValidationError> {
        let mut ctx = KnownTypeNamesContext {
            defined_type_names: HashSet::new(),
            errors: vec![],
            is_type_system: false,
            schema: Some(schema),
        };
        for def in &document.definitions {
            match def {
                ast::query::Definition::Fragment(fragment) => {
                    let ast::query::TypeCondition::On(type_name) = &fragment.type_condition;
                    ctx.check_name(type_name, fragment.position);
                    ctx.visit_selection_set(&fragment.selection_set);
                },
                ast::query::Definition::Operation(operation) =>
                    ctx.visit_operation(operation),
            }
        }
        ctx.errors
    }

    /// Checks every type reference of a schema-language document. References
    /// may name types defined in the document itself, types of `schema` (when
    /// extending one), and the built-in scalar and introspection types.
    pub fn validate_type_system(
        schema: Option<&Schema>,
        document: &ast::schema::Document,
    ) -> Vec<ValidationError> {
        let defined_type_names = document.definitions.iter()
            .filter_map(|def| match def {
                ast::schema::Definition::TypeDefinition(type_def) =>
                    Some(type_definition_name(type_def)),
                _ => None,
            })
            .collect();
        let mut ctx = KnownTypeNamesContext {
            defined_type_names,
            errors: vec![],
            is_type_system: true,
            schema,
        };
        for def in &document.definitions {
            ctx.visit_type_system_definition(def);
        }
        ctx.errors
    }
}

fn type_definition_name(type_def: &ast::schema::TypeDefinition) -> &str {
    use ast::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Enum(def) => def.name.as_str(),
        TypeDefinition::InputObject(def) => def.name.as_str(),
        TypeDefinition::Interface(def) => def.name.as_str(),
        TypeDefinition::Object(def) => def.name.as_str(),
        TypeDefinition::Scalar(def) => def.name.as_str(),
        TypeDefinition::Union(def) => def.name.as_str(),
    }
}

fn is_standard_type_name(type_name: &str) -> bool {
    BuiltinScalar::from_name(type_name).is_some()
        || INTROSPECTION_TYPE_NAMES.contains(&type_name)
}

struct KnownTypeNamesContext<'a> {
    defined_type_names: HashSet<&'a str>,
    errors: Vec<ValidationError>,
    is_type_system: bool,
    schema: Option<&'a Schema>,
}
impl KnownTypeNamesContext<'_> {
    fn check_name(&mut self, type_name: &str, position: ast::Pos) {
        let is_known =
            self.defined_type_names.contains(type_name)
                || self.schema.is_some_and(|schema| schema.types().contains(type_name))
                || (self.is_type_system && is_standard_type_name(type_name));
        if is_known {
            return;
        }

        let suggestions = if self.is_type_system {
            let options = BuiltinScalar::ALL.iter()
                .map(|scalar| scalar.name())
                .chain(INTROSPECTION_TYPE_NAMES)
                .chain(self.defined_type_names.iter().copied());
            suggestion::suggestion_list(type_name, options)
        } else {
            let schema_type_names = self.schema
                .map(|schema| schema.types().all_type_names())
                .unwrap_or_default();
            let options = schema_type_names.into_iter()
                .chain(self.defined_type_names.iter().copied());
            suggestion::suggestion_list(type_name, options)
        };
        self.errors.push(ValidationError::new(
            format!(
                "Unknown type \"{type_name}\".{}",
                suggestion::did_you_mean(None, &suggestions),
            ),
            position,
        ));
    }

    fn check_type(&mut self, ast_type: &ast::Type, position: ast::Pos) {
        match ast_type {
            ast::Type::ListType(inner) | ast::Type::NonNullType(inner) =>
                self.check_type(inner, position),
            ast::Type::NamedType(type_name) => self.check_name(type_name, position),
        }
    }

    fn visit_operation(&mut self, operation: &ast::query::OperationDefinition) {
        use ast::query::OperationDefinition as OpDef;
        let (variable_defs, selection_set) = match operation {
            OpDef::SelectionSet(selection_set) => (&[][..], selection_set),
            OpDef::Query(query) => (&query.variable_definitions[..], &query.selection_set),
            OpDef::Mutation(mutation) =>
                (&mutation.variable_definitions[..], &mutation.selection_set),
            OpDef::Subscription(subscription) =>
                (&subscription.variable_definitions[..], &subscription.selection_set),
        };
        for var_def in variable_defs {
            self.check_type(&var_def.var_type, var_def.position);
        }
        self.visit_selection_set(selection_set);
    }

    fn visit_selection_set(&mut self, selection_set: &ast::query::SelectionSet) {
        use ast::query::Selection;
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => self.visit_selection_set(&field.selection_set),
                Selection::FragmentSpread(_) => (),
                Selection::InlineFragment(inline) => {
                    if let Some(ast::query::TypeCondition::On(type_name)) = &inline.type_condition {
                        self.check_name(type_name, inline.position);
                    }
                    self.visit_selection_set(&inline.selection_set);
                },
            }
        }
    }

    fn visit_fields(&mut self, fields: &[ast::schema::Field]) {
        for field in fields {
            self.check_type(&field.field_type, field.position);
            self.visit_input_values(&field.arguments);
        }
    }

    fn visit_input_values(&mut self, input_values: &[ast::schema::InputValue]) {
        for input_value in input_values {
            self.check_type(&input_value.value_type, input_value.position);
        }
    }

    fn visit_names(&mut self, type_names: &[String], position: ast::Pos) {
        for type_name in type_names {
            self.check_name(type_name, position);
        }
    }

    fn visit_type_system_definition(&mut self, def: &ast::schema::Definition) {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;
        match def {
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_input_values(&directive_def.arguments),

            Definition::SchemaDefinition(schema_def) => {
                let root_type_names = [
                    &schema_def.query,
                    &schema_def.mutation,
                    &schema_def.subscription,
                ];
                for type_name in root_type_names.into_iter().flatten() {
                    self.check_name(type_name, schema_def.position);
                }
            },

            Definition::TypeDefinition(type_def) => match type_def {
                TypeDefinition::Enum(_) | TypeDefinition::Scalar(_) => (),
                TypeDefinition::InputObject(def) => self.visit_input_values(&def.fields),
                TypeDefinition::Interface(def) => {
                    self.visit_names(&def.implements_interfaces, def.position);
                    self.visit_fields(&def.fields);
                },
                TypeDefinition::Object(def) => {
                    self.visit_names(&def.implements_interfaces, def.position);
                    self.visit_fields(&def.fields);
                },
                TypeDefinition::Union(def) => self.visit_names(&def.types, def.position),
            },

            Definition::TypeExtension(type_ext) => match type_ext {
                TypeExtension::Enum(_) | TypeExtension::Scalar(_) => (),
                TypeExtension::InputObject(ext) => self.visit_input_values(&ext.fields),
                TypeExtension::Interface(ext) => {
                    self.visit_names(&ext.implements_interfaces, ext.position);
                    self.visit_fields(&ext.fields);
                },
                TypeExtension::Object(ext) => {
                    self.visit_names(&ext.implements_interfaces, ext.position);
                    self.visit_fields(&ext.fields);
                },
                TypeExtension::Union(ext) => self.visit_names(&ext.types, ext.position),
            },
        }
    }
}

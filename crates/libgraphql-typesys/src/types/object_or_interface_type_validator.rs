use crate::schema::TypeValidationError;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeGraph;
use std::collections::HashSet;

/// Checks an object or interface type against the interfaces it implements
/// and checks that its fields and parameters reference defined types of the
/// right kind.
pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    implemented_iface_names: HashSet<&'a str>,
    inheritance_path: Vec<&'a str>,
    type_: &'a ObjectOrInterfaceTypeData,
    type_graph: &'a TypeGraph,
    type_name: &'a str,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_name: &'a str,
        type_: &'a ObjectOrInterfaceTypeData,
        type_graph: &'a TypeGraph,
    ) -> Self {
        Self {
            errors: vec![],
            implemented_iface_names: type_.interface_names().into_iter().collect(),
            inheritance_path: vec![],
            type_,
            type_graph,
            type_name,
        }
    }

    pub fn validate(
        mut self,
        verified_interface_impls: &mut HashSet<&'a str>,
    ) -> Vec<TypeValidationError> {
        let mut iface_names: Vec<&'a str> =
            self.implemented_iface_names.iter().copied().collect();
        iface_names.sort_unstable();

        for iface_name in iface_names {
            // Interfaces may implement other interfaces, so the same interface
            // can be reached more than once while walking up the hierarchy.
            if !verified_interface_impls.insert(iface_name) {
                continue;
            }
            if let Some(iface) = self.lookup_interface(iface_name) {
                self.validate_interface_impl(iface_name, iface, verified_interface_impls);
            }
        }

        if self.inheritance_path.is_empty() {
            for (field_name, field) in self.type_.fields() {
                self.validate_field_types(field_name, field);
            }
        }

        self.errors
    }

    fn lookup_interface(&mut self, iface_name: &str) -> Option<&'a InterfaceType> {
        let Some(iface_type) = self.type_graph.lookup(iface_name) else {
            self.errors.push(TypeValidationError::ImplementsUndefinedInterface {
                type_name: self.type_name.to_string(),
                undefined_interface_name: iface_name.to_string(),
                loc: self.type_.def_location().to_owned(),
            });
            return None;
        };

        let iface = iface_type.as_interface();
        if iface.is_none() {
            self.errors.push(TypeValidationError::ImplementsNonInterfaceType {
                type_name: self.type_name.to_string(),
                non_interface_type_name: iface_type.name().to_string(),
                loc: self.type_.def_location().to_owned(),
            });
        }
        iface
    }

    /// https://spec.graphql.org/October2021/#IsValidImplementation()
    fn validate_interface_impl(
        &mut self,
        iface_name: &'a str,
        iface: &'a InterfaceType,
        verified_interface_impls: &mut HashSet<&'a str>,
    ) {
        // Every interface implemented by `iface` must also be declared
        // explicitly by the implementing type.
        let iface_iface_names: HashSet<&'a str> =
            iface.interface_names().into_iter().collect();
        let mut missing: Vec<&&str> =
            iface_iface_names.difference(&self.implemented_iface_names).collect();
        missing.sort_unstable();
        for missing_iface_name in missing {
            self.errors.push(TypeValidationError::MissingRecursiveInterfaceImplementation {
                def_location: self.type_.def_location().to_owned(),
                inheritance_path: self.inheritance_path.iter()
                    .chain(std::iter::once(&iface_name))
                    .map(|name| name.to_string())
                    .collect(),
                missing_recursive_interface_name: missing_iface_name.to_string(),
                type_name: self.type_name.to_string(),
            });
        }

        let mut inheritance_path = self.inheritance_path.clone();
        inheritance_path.push(iface_name);
        let parent_validator = ObjectOrInterfaceTypeValidator {
            errors: vec![],
            implemented_iface_names: iface_iface_names,
            inheritance_path,
            type_: self.type_,
            type_graph: self.type_graph,
            type_name: self.type_name,
        };
        self.errors.append(&mut parent_validator.validate(verified_interface_impls));

        for (field_name, iface_field) in iface.fields() {
            match self.type_.fields().get(field_name) {
                Some(type_field) =>
                    self.validate_implemented_field(iface_name, iface_field, type_field),
                None => self.errors.push(TypeValidationError::MissingInterfaceSpecifiedField {
                    def_location: self.type_.def_location().to_owned(),
                    field_name: field_name.to_string(),
                    interface_name: iface_name.to_string(),
                    type_name: self.type_name.to_string(),
                }),
            }
        }
    }

    fn validate_implemented_field(
        &mut self,
        iface_name: &str,
        iface_field: &Field,
        type_field: &Field,
    ) {
        let field_name = type_field.name();
        let iface_params = iface_field.parameters();
        let type_params = type_field.parameters();

        // Every interface-specified parameter must be present with exactly
        // the same type.
        for (param_name, iface_param) in iface_params {
            let Some(type_param) = type_params.get(param_name) else {
                self.errors.push(TypeValidationError::MissingInterfaceSpecifiedFieldParameter {
                    def_location: type_field.def_location().to_owned(),
                    field_name: field_name.to_string(),
                    interface_name: iface_name.to_string(),
                    missing_parameter_name: param_name.to_string(),
                    type_name: self.type_name.to_string(),
                });
                continue;
            };

            if !type_param.type_annotation().is_equivalent_to(iface_param.type_annotation()) {
                self.errors.push(TypeValidationError::InvalidInterfaceSpecifiedFieldParameterType {
                    def_location: type_param.def_location().to_owned(),
                    expected_parameter_type: iface_param.type_annotation().to_owned(),
                    field_name: field_name.to_string(),
                    interface_name: iface_name.to_string(),
                    invalid_parameter_type: type_param.type_annotation().to_owned(),
                    parameter_name: param_name.to_string(),
                    type_name: self.type_name.to_string(),
                });
            }
        }

        // Parameters the interface doesn't know about must be optional.
        for (param_name, type_param) in type_params {
            let is_additional = !iface_params.contains_key(param_name);
            let is_required = !type_param.type_annotation().nullable()
                && type_param.default_value().is_none();
            if is_additional && is_required {
                self.errors.push(
                    TypeValidationError::InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
                        location: type_param.type_annotation().ref_location().to_owned(),
                        field_name: field_name.to_string(),
                        interface_name: iface_name.to_string(),
                        parameter_name: param_name.to_string(),
                        type_name: self.type_name.to_string(),
                    },
                );
            }
        }

        let type_field_annot = type_field.type_annotation();
        let iface_field_annot = iface_field.type_annotation();
        if !type_field_annot.is_subtype_of_impl(self.type_graph, iface_field_annot) {
            self.errors.push(TypeValidationError::InvalidInterfaceSpecifiedFieldType {
                location: type_field_annot.ref_location().to_owned(),
                expected_field_type: iface_field_annot.to_owned(),
                field_name: field_name.to_string(),
                interface_name: iface_name.to_string(),
                invalid_field_type: type_field_annot.to_owned(),
                type_name: self.type_name.to_string(),
            });
        }
    }

    /// Fields must have output types and parameters must have input types.
    fn validate_field_types(&mut self, field_name: &str, field: &Field) {
        let field_annot = field.type_annotation();
        let field_type_name = field_annot.innermost_named_type_annotation().graphql_type_name();
        match self.type_graph.lookup(field_type_name) {
            Some(field_type) if !field_type.is_output_type() =>
                self.errors.push(TypeValidationError::InvalidOutputFieldWithInputType {
                    def_location: field_annot.ref_location().to_owned(),
                    field_name: field_name.to_string(),
                    input_type_name: field_type_name.to_string(),
                    parent_type_name: self.type_name.to_string(),
                }),
            Some(_) => (),
            None => self.errors.push(TypeValidationError::UndefinedTypeName {
                ref_location: field_annot.ref_location().to_owned(),
                undefined_type_name: field_type_name.to_string(),
            }),
        }

        for (param_name, param) in field.parameters() {
            let param_annot = param.type_annotation();
            let param_type_name = param_annot.innermost_named_type_annotation().graphql_type_name();
            match self.type_graph.lookup(param_type_name) {
                Some(param_type) if !param_type.is_input_type() =>
                    self.errors.push(TypeValidationError::InvalidParameterWithOutputOnlyType {
                        def_location: param_annot.ref_location().to_owned(),
                        outputonly_type_name: param_type_name.to_string(),
                        parameter_name: param_name.to_string(),
                    }),
                Some(_) => (),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: param_annot.ref_location().to_owned(),
                    undefined_type_name: param_type_name.to_string(),
                }),
            }
        }
    }
}

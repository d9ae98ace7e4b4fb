use crate::schema::SchemaBuildError;
use crate::types::EnumValueConfig;
use crate::types::FieldConfig;
use crate::types::InputValueConfig;
use crate::types::TypeConfig;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Checks the config a [`TypeConfigDecorator`](crate::schema::TypeConfigDecorator)
/// returned against the one it was given.
///
/// A decorator may add behavior (resolvers, type resolution, scalar coercion,
/// enum internal values, metadata) but never alters what schema text
/// declared. Attributes of a type or field whose `def_location` points into
/// schema text are compared even when they are absent (a missing description
/// may not be filled in either).
pub(crate) struct DecoratedConfigValidator<'a> {
    configured_field_names: &'a [&'a str],
    decorated: &'a TypeConfig,
    original: &'a TypeConfig,
}
impl<'a> DecoratedConfigValidator<'a> {
    pub fn new(
        original: &'a TypeConfig,
        decorated: &'a TypeConfig,
        configured_field_names: &'a [&'a str],
    ) -> Self {
        Self {
            configured_field_names,
            decorated,
            original,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let type_name = self.original.name();

        if self.original.kind() != self.decorated.kind() {
            return Err(self.object_config_error("kind"));
        }
        if type_name != self.decorated.name() {
            return Err(self.object_config_error("name"));
        }

        let is_sdl = self.original.def_location().is_sdl();
        if is_sdl && self.original.description() != self.decorated.description() {
            return Err(self.object_config_error("description"));
        }

        match (self.original, self.decorated) {
            (TypeConfig::Object(original), TypeConfig::Object(decorated)) => {
                if is_sdl && original.interfaces != decorated.interfaces {
                    return Err(self.object_config_error("interfaces"));
                }
                self.validate_fields(original.fields.get(), decorated.fields.get())
            },

            (TypeConfig::Interface(original), TypeConfig::Interface(decorated)) => {
                if is_sdl && original.interfaces != decorated.interfaces {
                    return Err(self.object_config_error("interfaces"));
                }
                self.validate_fields(original.fields.get(), decorated.fields.get())
            },

            (TypeConfig::Union(original), TypeConfig::Union(decorated)) => {
                if is_sdl && original.types != decorated.types {
                    return Err(self.object_config_error("types"));
                }
                Ok(())
            },

            (TypeConfig::Enum(original), TypeConfig::Enum(decorated)) =>
                self.validate_enum_values(original.values.get(), decorated.values.get()),

            (TypeConfig::InputObject(original), TypeConfig::InputObject(decorated)) =>
                self.validate_input_fields(original.fields.get(), decorated.fields.get()),

            (TypeConfig::Scalar(_), TypeConfig::Scalar(_)) => Ok(()),

            // Kinds were compared above.
            _ => Err(self.object_config_error("kind")),
        }
    }

    fn field_config_error(&self, field_name: &str, config_field: &str) -> SchemaBuildError {
        SchemaBuildError::CannotOverwriteFieldConfigField {
            type_name: self.original.name().to_string(),
            field_name: field_name.to_string(),
            config_field: config_field.to_string(),
        }
    }

    fn field_does_not_exist_error(&self, field_name: &str) -> SchemaBuildError {
        SchemaBuildError::FieldDoesNotExistInSchema {
            type_name: self.original.name().to_string(),
            field_name: field_name.to_string(),
        }
    }

    fn object_config_error(&self, config_field: &str) -> SchemaBuildError {
        SchemaBuildError::CannotOverwriteObjectConfigField {
            type_name: self.original.name().to_string(),
            config_field: config_field.to_string(),
        }
    }

    fn validate_enum_values(
        &self,
        original: &[EnumValueConfig],
        decorated: &[EnumValueConfig],
    ) -> Result<()> {
        for decorated_value in decorated {
            if !original.iter().any(|v| v.name == decorated_value.name) {
                return Err(self.field_does_not_exist_error(&decorated_value.name));
            }
        }

        for original_value in original {
            let Some(decorated_value) =
                decorated.iter().find(|v| v.name == original_value.name) else {
                return Err(self.object_config_error("values"));
            };

            if !original_value.def_location.is_sdl() {
                continue;
            }
            if original_value.description != decorated_value.description {
                return Err(self.field_config_error(&original_value.name, "description"));
            }
            if original_value.deprecation_reason != decorated_value.deprecation_reason {
                return Err(self.field_config_error(&original_value.name, "deprecation_reason"));
            }
        }

        Ok(())
    }

    fn validate_fields(
        &self,
        original: &IndexMap<String, FieldConfig>,
        decorated: &IndexMap<String, FieldConfig>,
    ) -> Result<()> {
        for field_name in self.configured_field_names {
            if !original.contains_key(*field_name) {
                return Err(self.field_does_not_exist_error(field_name));
            }
        }

        for field_name in decorated.keys() {
            if !original.contains_key(field_name) {
                return Err(self.field_does_not_exist_error(field_name));
            }
        }

        for (field_name, original_field) in original {
            let Some(decorated_field) = decorated.get(field_name) else {
                return Err(self.field_config_error(field_name, "name"));
            };

            if original_field.def_location.is_sdl() {
                if original_field.name != decorated_field.name {
                    return Err(self.field_config_error(field_name, "name"));
                }
                if !original_field.type_annotation.is_equivalent_to(&decorated_field.type_annotation) {
                    return Err(self.field_config_error(field_name, "type"));
                }
                if !Self::args_are_equivalent(&original_field.args, &decorated_field.args) {
                    return Err(self.field_config_error(field_name, "args"));
                }
                if original_field.description != decorated_field.description {
                    return Err(self.field_config_error(field_name, "description"));
                }
                if original_field.deprecation_reason != decorated_field.deprecation_reason {
                    return Err(self.field_config_error(field_name, "deprecation_reason"));
                }
            }

            // A resolver from an earlier pass may only be passed through.
            if let Some(existing_resolver) = &original_field.resolve {
                let kept = decorated_field.resolve.as_ref()
                    .is_some_and(|resolver| resolver.ptr_eq(existing_resolver));
                if !kept {
                    return Err(SchemaBuildError::FieldResolverAlreadyExists {
                        type_name: self.original.name().to_string(),
                        field_name: field_name.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    fn validate_input_fields(
        &self,
        original: &IndexMap<String, InputValueConfig>,
        decorated: &IndexMap<String, InputValueConfig>,
    ) -> Result<()> {
        for field_name in decorated.keys() {
            if !original.contains_key(field_name) {
                return Err(self.field_does_not_exist_error(field_name));
            }
        }

        for (field_name, original_field) in original {
            let Some(decorated_field) = decorated.get(field_name) else {
                return Err(self.object_config_error("fields"));
            };
            if original_field.def_location.is_sdl()
                && !original_field.is_equivalent_to(decorated_field) {
                return Err(self.field_config_error(field_name, "type"));
            }
        }

        Ok(())
    }

    fn args_are_equivalent(
        original: &IndexMap<String, InputValueConfig>,
        decorated: &IndexMap<String, InputValueConfig>,
    ) -> bool {
        original.len() == decorated.len()
            && original.iter().zip(decorated.iter()).all(|((name_a, a), (name_b, b))| {
                name_a == name_b && a.is_equivalent_to(b)
            })
    }
}

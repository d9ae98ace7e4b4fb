use crate::Schema;
use crate::SchemaBuildError;
use crate::SchemaBuilder;
use crate::execution::Executor;
use crate::schema::ResolverMap;
use crate::types::EnumValueConfig;
use crate::types::FieldConfig;
use crate::types::FieldResolver;
use crate::types::GraphQLType;
use crate::types::InputValueConfig;
use crate::types::InterfaceTypeConfig;
use crate::types::IsTypeOf;
use crate::types::ObjectTypeConfig;
use crate::types::TypeAnnotation;
use crate::types::TypeConfig;
use crate::types::TypeResolver;
use indexmap::IndexMap;
use serde_json::json;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const SDL: &str = concat!(
    "interface Character { name: String }\n",
    "type Human implements Character { name: String homePlanet: String }\n",
    "type Droid implements Character { name: String primaryFunction: String }\n",
    "union SearchResult = Human | Droid\n",
    "enum Episode { NEWHOPE EMPIRE JEDI }\n",
    "type Query {\n",
    "  hero(episode: Episode): Character\n",
    "  search(text: String): [SearchResult]\n",
    "  legacy: String @deprecated(reason: \"Use hero\")\n",
    "}\n",
);

/// Touches `Character` in an extension pass without changing its shape.
const TAG_CHARACTER: &str = "directive @tag on INTERFACE\nextend interface Character @tag";

fn build_with(decorator: impl Fn(TypeConfig) -> TypeConfig + Send + Sync + 'static) -> Result<Schema> {
    SchemaBuilder::new()
        .load_str(None, SDL)?
        .decorator(decorator)
        .build()
}

/// Applies `edit` to the fields of the named object type, leaving every other
/// config alone.
fn edit_object_fields(
    config: TypeConfig,
    type_name: &str,
    edit: impl FnOnce(&mut IndexMap<String, FieldConfig>) + Send + 'static,
) -> TypeConfig {
    match config {
        TypeConfig::Object(mut obj_config) if obj_config.name == type_name => {
            obj_config.fields = obj_config.fields.map(move |fields| {
                let mut fields = fields.clone();
                edit(&mut fields);
                fields
            });
            TypeConfig::Object(obj_config)
        },
        other => other,
    }
}

fn object_config_error(type_name: &str, config_field: &str) -> SchemaBuildError {
    SchemaBuildError::CannotOverwriteObjectConfigField {
        type_name: type_name.to_string(),
        config_field: config_field.to_string(),
    }
}

fn field_config_error(type_name: &str, field_name: &str, config_field: &str) -> SchemaBuildError {
    SchemaBuildError::CannotOverwriteFieldConfigField {
        type_name: type_name.to_string(),
        field_name: field_name.to_string(),
        config_field: config_field.to_string(),
    }
}

mod type_invariants {
    use super::*;

    #[test]
    fn identity_decorator_is_accepted() -> Result<()> {
        let schema = build_with(|config| config)?;
        assert_eq!(schema.query_type().name(), "Query");
        Ok(())
    }

    #[test]
    fn sdl_type_description_can_not_be_set() {
        let result = build_with(|config| match config {
            TypeConfig::Object(mut obj_config) if obj_config.name == "Human" => {
                obj_config.description = Some("A person".to_string());
                TypeConfig::Object(obj_config)
            },
            other => other,
        });
        assert_eq!(result.unwrap_err(), object_config_error("Human", "description"));
    }

    #[test]
    fn programmatic_type_description_can_be_set() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { ping: String }")?
            .add_type(ObjectTypeConfig::new("Stats", || IndexMap::from([(
                "uptime".to_string(),
                FieldConfig::new("uptime", TypeAnnotation::named("Int", true)),
            )])))?
            .decorator(|config: TypeConfig| match config {
                TypeConfig::Object(mut obj_config) if obj_config.name == "Stats" => {
                    obj_config.description = Some("Server stats".to_string());
                    TypeConfig::Object(obj_config)
                },
                other => other,
            })
            .build()?;

        assert_eq!(
            schema.lookup_type("Stats").and_then(|stats| stats.description()),
            Some("Server stats"),
        );
        Ok(())
    }

    #[test]
    fn kind_can_not_change() {
        let result = build_with(|config| match config {
            TypeConfig::Object(obj_config) if obj_config.name == "Droid" =>
                TypeConfig::Interface(InterfaceTypeConfig::new("Droid", || IndexMap::from([(
                    "name".to_string(),
                    FieldConfig::new("name", TypeAnnotation::named("String", true)),
                )]))),
            other => other,
        });
        assert_eq!(result.unwrap_err(), object_config_error("Droid", "kind"));
    }

    #[test]
    fn name_can_not_change() {
        let result = build_with(|config| match config {
            TypeConfig::Enum(mut enum_config) => {
                enum_config.name = "Saga".to_string();
                TypeConfig::Enum(enum_config)
            },
            other => other,
        });
        assert_eq!(result.unwrap_err(), object_config_error("Episode", "name"));
    }

    #[test]
    fn interfaces_can_not_change() {
        let result = build_with(|config| match config {
            TypeConfig::Object(mut obj_config) if obj_config.name == "Droid" => {
                obj_config.interfaces.clear();
                TypeConfig::Object(obj_config)
            },
            other => other,
        });
        assert_eq!(result.unwrap_err(), object_config_error("Droid", "interfaces"));
    }

    #[test]
    fn union_members_can_not_change() {
        let result = build_with(|config| match config {
            TypeConfig::Union(mut union_config) => {
                union_config.types.reverse();
                TypeConfig::Union(union_config)
            },
            other => other,
        });
        assert_eq!(result.unwrap_err(), object_config_error("SearchResult", "types"));
    }

    #[test]
    fn behavior_and_metadata_may_be_attached() -> Result<()> {
        let schema = build_with(|config| match config {
            TypeConfig::Object(mut obj_config) if obj_config.name == "Human" => {
                obj_config.metadata.insert("table".to_string(), json!("humans"));
                obj_config.is_type_of = Some(IsTypeOf::new(|value, _, _| {
                    value.get("homePlanet").is_some()
                }));
                TypeConfig::Object(obj_config)
            },
            TypeConfig::Enum(mut enum_config) => {
                enum_config.values = enum_config.values.map(|values| {
                    values.iter()
                        .enumerate()
                        .map(|(idx, value)| value.clone().with_value(json!(idx + 4)))
                        .collect::<Vec<EnumValueConfig>>()
                });
                TypeConfig::Enum(enum_config)
            },
            other => other,
        })?;

        let human = schema.lookup_type("Human").and_then(GraphQLType::as_object)
            .expect("Human is an object type");
        assert_eq!(human.metadata().get("table"), Some(&json!("humans")));
        assert!(human.is_type_of().is_some());

        let episode = schema.lookup_type("Episode").and_then(GraphQLType::as_enum)
            .expect("Episode is an enum type");
        assert_eq!(episode.serialize(&json!(4)), Ok(json!("NEWHOPE")));
        assert_eq!(episode.parse_value(&json!("JEDI")), Ok(json!(6)));

        Ok(())
    }
}

mod field_invariants {
    use super::*;

    #[test]
    fn sdl_field_description_can_not_be_set() {
        let result = build_with(|config| edit_object_fields(config, "Query", |fields| {
            if let Some(hero) = fields.get_mut("hero") {
                hero.description = Some("The hero".to_string());
            }
        }));
        assert_eq!(result.unwrap_err(), field_config_error("Query", "hero", "description"));
    }

    #[test]
    fn sdl_field_type_can_not_change() {
        let result = build_with(|config| edit_object_fields(config, "Human", |fields| {
            if let Some(home_planet) = fields.get_mut("homePlanet") {
                home_planet.type_annotation = TypeAnnotation::named("String", false);
            }
        }));
        assert_eq!(result.unwrap_err(), field_config_error("Human", "homePlanet", "type"));
    }

    #[test]
    fn sdl_field_args_can_not_change() {
        let result = build_with(|config| edit_object_fields(config, "Query", |fields| {
            if let Some(search) = fields.get_mut("search") {
                search.args.insert(
                    "limit".to_string(),
                    InputValueConfig::new("limit", TypeAnnotation::named("Int", true)),
                );
            }
        }));
        assert_eq!(result.unwrap_err(), field_config_error("Query", "search", "args"));
    }

    #[test]
    fn sdl_field_deprecation_can_not_change() {
        let result = build_with(|config| edit_object_fields(config, "Query", |fields| {
            if let Some(legacy) = fields.get_mut("legacy") {
                legacy.deprecation_reason = None;
            }
        }));
        assert_eq!(result.unwrap_err(), field_config_error("Query", "legacy", "deprecation_reason"));
    }

    #[test]
    fn fields_can_not_be_added() {
        let result = build_with(|config| edit_object_fields(config, "Droid", |fields| {
            fields.insert(
                "model".to_string(),
                FieldConfig::new("model", TypeAnnotation::named("String", true)),
            );
        }));
        assert_eq!(result.unwrap_err(), SchemaBuildError::FieldDoesNotExistInSchema {
            type_name: "Droid".to_string(),
            field_name: "model".to_string(),
        });
    }

    #[test]
    fn fields_can_not_be_removed() {
        let result = build_with(|config| edit_object_fields(config, "Droid", |fields| {
            fields.shift_remove("primaryFunction");
        }));
        assert_eq!(result.unwrap_err(), field_config_error("Droid", "primaryFunction", "name"));
    }

    #[test]
    fn enum_value_description_can_not_be_set() {
        let result = build_with(|config| match config {
            TypeConfig::Enum(mut enum_config) => {
                enum_config.values = enum_config.values.map(|values| {
                    let mut values = values.clone();
                    values[0].description = Some("Episode IV".to_string());
                    values
                });
                TypeConfig::Enum(enum_config)
            },
            other => other,
        });
        assert_eq!(result.unwrap_err(), field_config_error("Episode", "NEWHOPE", "description"));
    }

    #[test]
    fn enum_values_can_not_be_added() {
        let result = build_with(|config| match config {
            TypeConfig::Enum(mut enum_config) => {
                enum_config.values = enum_config.values.map(|values| {
                    let mut values = values.clone();
                    values.push(EnumValueConfig::new("PHANTOM"));
                    values
                });
                TypeConfig::Enum(enum_config)
            },
            other => other,
        });
        assert_eq!(result.unwrap_err(), SchemaBuildError::FieldDoesNotExistInSchema {
            type_name: "Episode".to_string(),
            field_name: "PHANTOM".to_string(),
        });
    }
}

mod resolvers {
    use super::*;

    fn hero_resolver() -> FieldResolver {
        FieldResolver::new(|_, _, _, _| Ok(json!({"name": "R2-D2", "primaryFunction": "Astromech"})))
    }

    #[test]
    fn field_resolver_is_installed_in_the_same_pass() -> Result<()> {
        let resolver = hero_resolver();
        let schema = SchemaBuilder::new()
            .load_str(None, SDL)?
            .decorator(ResolverMap::new().field("Query", "hero", resolver.clone()))
            .build()?;

        let hero = schema.query_type().field("hero").expect("hero is defined");
        assert!(hero.resolver().is_some_and(|installed| installed.ptr_eq(&resolver)));
        Ok(())
    }

    #[test]
    fn field_resolver_can_not_be_replaced_in_a_later_pass() -> Result<()> {
        let base = SchemaBuilder::new()
            .load_str(None, SDL)?
            .decorator(ResolverMap::new().field("Query", "hero", hero_resolver()))
            .build()?;

        let result = base.extender()
            .load_str(None, "extend type Query { droid: Droid }")?
            .decorator(ResolverMap::new().field("Query", "hero", hero_resolver()))
            .extend();
        assert_eq!(result.unwrap_err(), SchemaBuildError::FieldResolverAlreadyExists {
            type_name: "Query".to_string(),
            field_name: "hero".to_string(),
        });
        Ok(())
    }

    #[test]
    fn field_resolver_can_not_be_removed_in_a_later_pass() -> Result<()> {
        let base = SchemaBuilder::new()
            .load_str(None, SDL)?
            .decorator(ResolverMap::new().field("Query", "hero", hero_resolver()))
            .build()?;

        let result = base.extender()
            .load_str(None, "extend type Query { droid: Droid }")?
            .decorator(|config: TypeConfig| edit_object_fields(config, "Query", |fields| {
                if let Some(hero) = fields.get_mut("hero") {
                    hero.resolve = None;
                }
            }))
            .extend();
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::FieldResolverAlreadyExists { field_name, .. } if field_name == "hero",
        ));
        Ok(())
    }

    #[test]
    fn terminal_pass_may_redeclare_existing_resolvers() -> Result<()> {
        let hero = hero_resolver();
        let droid = FieldResolver::new(|_, _, _, _| Ok(json!({"name": "C-3PO"})));
        let base = SchemaBuilder::new()
            .load_str(None, SDL)?
            .decorator(ResolverMap::new().field("Query", "hero", hero.clone()))
            .build()?;

        let extended = base.extender()
            .load_str(None, "extend type Query { droid: Droid }")?
            .decorator(
                ResolverMap::new()
                    .field("Query", "hero", hero.clone())
                    .field("Query", "droid", droid.clone())
            )
            .extend()?;

        let query_type = extended.query_type();
        assert!(query_type.field("hero").and_then(|f| f.resolver()).is_some_and(|r| r.ptr_eq(&hero)));
        assert!(query_type.field("droid").and_then(|f| f.resolver()).is_some_and(|r| r.ptr_eq(&droid)));
        Ok(())
    }

    #[test]
    fn resolver_map_naming_an_unknown_type() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, SDL)?
            .decorator(ResolverMap::new().field("Starship", "name", hero_resolver()))
            .build();
        assert_eq!(result.unwrap_err(), SchemaBuildError::ObjectTypeDoesNotExist {
            type_name: "Starship".to_string(),
        });
        Ok(())
    }

    #[test]
    fn resolver_map_naming_an_untouched_type() -> Result<()> {
        let base = SchemaBuilder::new().load_str(None, SDL)?.build()?;
        let result = base.extender()
            .load_str(None, "extend type Query { droid: Droid }")?
            .decorator(ResolverMap::new().is_type_of("Human", IsTypeOf::new(|_, _, _| true)))
            .extend();
        assert_eq!(result.unwrap_err(), SchemaBuildError::ObjectTypeDoesNotExist {
            type_name: "Human".to_string(),
        });
        Ok(())
    }

    #[test]
    fn resolver_map_naming_an_unknown_field() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, SDL)?
            .decorator(ResolverMap::new().field("Query", "villain", hero_resolver()))
            .build();
        assert_eq!(result.unwrap_err(), SchemaBuildError::FieldDoesNotExistInSchema {
            type_name: "Query".to_string(),
            field_name: "villain".to_string(),
        });
        Ok(())
    }

    #[test]
    fn is_type_of_may_be_overwritten() -> Result<()> {
        let first = IsTypeOf::new(|_, _, _| false);
        let second = IsTypeOf::new(|value, _, _| value.get("homePlanet").is_some());
        let base = SchemaBuilder::new()
            .load_str(None, SDL)?
            .decorator(ResolverMap::new().is_type_of("Human", first))
            .build()?;

        let extended = base.extender()
            .load_str(None, "extend type Human { height: Float }")?
            .decorator(ResolverMap::new().is_type_of("Human", second.clone()))
            .extend()?;

        let human = extended.lookup_type("Human").and_then(GraphQLType::as_object)
            .expect("Human is an object type");
        assert!(human.is_type_of().is_some_and(|installed| installed.ptr_eq(&second)));
        Ok(())
    }

    #[test]
    fn resolve_type_is_replaced_not_merged() -> Result<()> {
        let first = TypeResolver::new(|_, _, _| Some("Human".to_string()));
        let second = TypeResolver::new(|_, _, _| Some("Droid".to_string()));
        let base = SchemaBuilder::new()
            .load_str(None, SDL)?
            .decorator(ResolverMap::new().resolve_type("Character", first.clone()))
            .build()?;

        let extended = base.extender()
            .load_str(None, TAG_CHARACTER)?
            .decorator(ResolverMap::new().resolve_type("Character", second.clone()))
            .extend()?;
        let character = extended.lookup_type("Character").and_then(GraphQLType::as_interface)
            .expect("Character is an interface type");
        assert!(character.resolve_type().is_some_and(|installed| installed.ptr_eq(&second)));
        assert!(!character.resolve_type().is_some_and(|installed| installed.ptr_eq(&first)));

        let base_character = base.lookup_type("Character").and_then(GraphQLType::as_interface)
            .expect("Character is an interface type");
        assert!(base_character.resolve_type().is_some_and(|installed| installed.ptr_eq(&first)));

        let response = Executor::new(&extended)
            .root_value(json!({"hero": {"name": "Leia Organa", "homePlanet": "Alderaan"}}))
            .execute_str("{ hero { __typename } }");
        assert_eq!(response.data, Some(json!({"hero": {"__typename": "Droid"}})));
        Ok(())
    }

    #[test]
    fn resolve_type_may_chain_to_the_previous_hook() -> Result<()> {
        let humans = TypeResolver::new(|value, _, _| {
            value.get("homePlanet").map(|_| "Human".to_string())
        });
        let base = SchemaBuilder::new()
            .load_str(None, SDL)?
            .decorator(ResolverMap::new().resolve_type("Character", humans))
            .build()?;

        let extended = base.extender()
            .load_str(None, TAG_CHARACTER)?
            .decorator(|config: TypeConfig| match config {
                TypeConfig::Interface(mut iface_config) => {
                    let previous = iface_config.resolve_type.take();
                    iface_config.resolve_type = Some(TypeResolver::new(move |value, context, info| {
                        match value.get("primaryFunction") {
                            Some(_) => Some("Droid".to_string()),
                            None => previous.as_ref()
                                .and_then(|previous| previous.call(value, context, info)),
                        }
                    }));
                    TypeConfig::Interface(iface_config)
                },
                other => other,
            })
            .extend()?;

        let response = Executor::new(&extended)
            .root_value(json!({
                "hero": {"name": "Leia Organa", "homePlanet": "Alderaan"},
            }))
            .execute_str("{ hero { __typename } }");
        assert_eq!(response.data, Some(json!({"hero": {"__typename": "Human"}})));

        let response = Executor::new(&extended)
            .root_value(json!({"hero": {"name": "R2-D2", "primaryFunction": "Astromech"}}))
            .execute_str("{ hero { __typename } }");
        assert_eq!(response.data, Some(json!({"hero": {"__typename": "Droid"}})));
        Ok(())
    }
}

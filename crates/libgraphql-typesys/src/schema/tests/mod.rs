mod schema_builder_tests;
mod schema_extender_tests;
mod type_config_decorator_tests;

mod abstract_type_resolver_tests;
mod response_tests;

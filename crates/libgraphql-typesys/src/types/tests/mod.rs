mod builtin_scalar_tests;
mod type_graph_tests;

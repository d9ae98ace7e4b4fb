mod known_type_names_tests;

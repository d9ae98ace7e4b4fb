mod diagnostic_sink_tests;

mod format_tests;

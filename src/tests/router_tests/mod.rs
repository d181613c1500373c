mod api_tests;
mod browse_tests;
mod load_tests;
mod selection_tests;

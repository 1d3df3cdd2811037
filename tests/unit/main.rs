mod config_tests;
mod inference_tests;
mod selector_tests;

mod determinism_tests;
mod inference_tests;
mod selector_tests;

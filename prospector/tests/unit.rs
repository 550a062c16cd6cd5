#[path = "unit/config_tests.rs"]
mod config_tests;
#[path = "unit/output_tests.rs"]
mod output_tests;
#[path = "unit/prompt_tests.rs"]
mod prompt_tests;
#[path = "unit/tools_tests.rs"]
mod tools_tests;

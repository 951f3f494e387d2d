//! Integration tests for the termfolio binary

mod cli_test;
mod config_test;
mod helpers;
mod run_test;

// ABOUTME: Library exports for the gqlbind driver modules
// ABOUTME: Makes config, rendering and generation available to integration tests

pub mod cli;
pub mod cli_output;
pub mod config;
pub mod constants;
pub mod fetch;
pub mod generate;
pub mod output;
pub mod render;

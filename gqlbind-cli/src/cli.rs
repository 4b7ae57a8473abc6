// ABOUTME: CLI argument definitions for the gqlbind binding generator
// ABOUTME: Defines the command-line interface structure using clap derive macros

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gqlbind")]
#[command(about = "Generate GraphQL bindings and CLI commands from an introspected schema", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, short, global = true)]
    pub loglevel: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate bindings for the configured packages
    Generate {
        /// Only generate this package
        #[arg(long, short)]
        package: Option<String>,

        /// Read the schema from this file instead of the configured cache
        #[arg(long)]
        schema: Option<PathBuf>,
    },
    /// Download the schema from the configured endpoint
    Fetch,
}

// ABOUTME: Centralized constants for the gqlbind command-line driver
// ABOUTME: Contains config locations, environment variables, generator names and output defaults

/// Configuration file discovery
pub mod config_files {
    /// Candidates searched in the working directory, in order
    pub const CANDIDATES: &[&str] = &["gqlbind.yml", "gqlbind.yaml", ".gqlbind.yml"];
}

/// Environment variables read by the driver
pub mod env {
    /// Path of the configuration file
    pub const CONFIG: &str = "GQLBIND_CONFIG";

    /// Log level used when `--loglevel` is absent
    pub const LOG_LEVEL: &str = "GQLBIND_LOG_LEVEL";

    /// Default variable holding the API key used by `fetch`
    pub const API_KEY: &str = "GQLBIND_API_KEY";
}

/// Values used when the configuration leaves a setting out
pub mod defaults {
    use std::time::Duration;

    pub const LOG_LEVEL: &str = "info";

    /// Header carrying the API key on introspection requests
    pub const AUTH_HEADER: &str = "Api-Key";

    /// Where `fetch` writes the schema and `generate` reads it
    pub const SCHEMA_FILE: &str = "schema.json";

    /// Output file of the type generator
    pub const TYPES_FILE: &str = "types.go";

    /// Prefix of every generated command file
    pub const COMMAND_FILE_PREFIX: &str = "command_";

    pub const GENERATED_EXTENSION: &str = "go";

    /// Timeout for introspection and remote template requests
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Built-in generators
pub mod generators {
    pub const TYPEGEN: &str = "typegen";
    pub const COMMAND: &str = "command";

    pub const ALL: &[&str] = &[TYPEGEN, COMMAND];
}

/// Embedded template names
pub mod templates {
    pub const TYPES: &str = "types.go.liquid";
    pub const COMMAND: &str = "command.go.liquid";
}

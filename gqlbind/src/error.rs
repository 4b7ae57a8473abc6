// ABOUTME: Error types for schema resolution and binding generation
// ABOUTME: Separates run-aborting resolution failures from locally recoverable problems

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerateError {
    #[error("Query path not found: {path} (no field '{segment}')")]
    UnresolvedPath { path: String, segment: String },

    #[error("Mutation {0} not found")]
    MutationNotFound(String),

    #[error("Endpoint {endpoint} not found on {type_name}")]
    EndpointNotFound { endpoint: String, type_name: String },

    #[error("Type {0} not found in schema")]
    TypeNotFound(String),

    #[error("Subcommand {subcommand} of command {command} could not be resolved: {reason}")]
    UnresolvedSubcommand {
        command: String,
        subcommand: String,
        reason: String,
    },

    #[error("Duplicate definition: {0}")]
    DuplicateDefinition(String),

    #[error("Invalid schema document: {0}")]
    SchemaParse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GenerateError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            GenerateError::UnresolvedPath { .. } => Some(
                "Check that every segment of the configured `path` is a field on the previous type, starting from the query root",
            ),
            GenerateError::MutationNotFound(_) => {
                Some("Mutation names are matched exactly against the schema's mutation root")
            }
            GenerateError::EndpointNotFound { .. } => {
                Some("Endpoint names must be fields on the last type of the query path")
            }
            GenerateError::UnresolvedSubcommand { .. } => Some(
                "A subcommand must name a mutation or carry a `path` that ends at a query field",
            ),
            GenerateError::SchemaParse(_) => {
                Some("Refresh the schema file with `gqlbind fetch` and try again")
            }
            _ => None,
        }
    }

    /// Whether this error aborts generation of the whole run.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            GenerateError::TypeNotFound(_) | GenerateError::DuplicateDefinition(_)
        )
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        GenerateError::SchemaParse(err.to_string())
    }
}

// ABOUTME: Package configuration model driving what gets generated for each package
// ABOUTME: Declares types to expand, queries, mutations, type overrides and CLI commands

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::constants::defaults;

/// Everything needed to generate one package
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PackageConfig {
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub import_path: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub generators: Vec<String>,
    /// Program name used when synthesizing command examples
    #[serde(default)]
    pub cli_name: Option<String>,
    #[serde(default)]
    pub types: Vec<TypeConfig>,
    #[serde(default)]
    pub queries: Vec<QueryConfig>,
    #[serde(default)]
    pub mutations: Vec<MutationConfig>,
    #[serde(default)]
    pub commands: Vec<CommandConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeConfig {
    pub name: String,
    /// Emitted name used wherever a field or argument references this type
    #[serde(default)]
    pub field_type_override: Option<String>,
    /// Underlying type of a generated scalar alias
    #[serde(default)]
    pub create_as: Option<String>,
    #[serde(default)]
    pub skip_type_create: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Field names leading from the query root to the type holding the endpoints
    pub path: Vec<String>,
    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub name: String,
    #[serde(default = "default_max_query_field_depth")]
    pub max_query_field_depth: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationConfig {
    pub name: String,
    #[serde(default = "default_max_query_field_depth")]
    pub max_query_field_depth: usize,
}

/// A CLI command; subcommands use the same shape
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommandConfig {
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub example: String,
    /// Field path of a query endpoint, used when the name isn't a mutation
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub client_package_name: String,
    #[serde(default)]
    pub client_method: Option<String>,
    #[serde(default)]
    pub subcommands: Vec<CommandConfig>,
}

fn default_max_query_field_depth() -> usize {
    defaults::MAX_QUERY_FIELD_DEPTH
}

impl EndpointConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_query_field_depth: defaults::MAX_QUERY_FIELD_DEPTH,
        }
    }
}

impl MutationConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_query_field_depth: defaults::MAX_QUERY_FIELD_DEPTH,
        }
    }
}

impl PackageConfig {
    pub fn cli_name(&self) -> &str {
        self.cli_name.as_deref().unwrap_or(defaults::CLI_NAME)
    }

    /// Type overrides keyed by name; a repeated name is warned about and
    /// only its first entry takes effect.
    pub fn type_configs(&self) -> Vec<&TypeConfig> {
        let mut seen = HashSet::new();
        self.types
            .iter()
            .filter(|t| {
                let first = seen.insert(t.name.as_str());
                if !first {
                    warn!("duplicate package config name detected: {}", t.name);
                }
                first
            })
            .collect()
    }

    /// First configuration entry for a type name
    pub fn type_config(&self, name: &str) -> Option<&TypeConfig> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn field_type_override(&self, name: &str) -> Option<&str> {
        self.type_config(name)
            .and_then(|t| t.field_type_override.as_deref())
    }

    pub fn skips_type(&self, name: &str) -> bool {
        self.type_config(name).is_some_and(|t| t.skip_type_create)
    }
}

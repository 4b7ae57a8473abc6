// ABOUTME: Test helper utilities providing a fixture schema and package configurations
// ABOUTME: The fixture mirrors a cloud-integrations API with objects, interfaces and inputs

#[cfg(test)]
use crate::config::{
    CommandConfig, EndpointConfig, MutationConfig, PackageConfig, QueryConfig, TypeConfig,
};
#[cfg(test)]
use crate::schema::Schema;

#[cfg(test)]
pub const FIXTURE_SCHEMA: &str = include_str!("../tests/fixtures/schema.json");

#[cfg(test)]
pub fn fixture_schema() -> Schema {
    Schema::from_json_str(FIXTURE_SCHEMA).expect("fixture schema should parse")
}

#[cfg(test)]
pub fn path(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
pub fn type_config(name: &str) -> TypeConfig {
    TypeConfig {
        name: name.to_string(),
        ..Default::default()
    }
}

/// A package exercising types, one query path, one mutation and one command
#[cfg(test)]
pub fn cloud_package() -> PackageConfig {
    PackageConfig {
        name: "cloud".to_string(),
        path: Some("pkg/cloud".to_string()),
        cli_name: Some("acme".to_string()),
        types: vec![
            type_config("CloudLinkedAccount"),
            TypeConfig {
                name: "EpochSeconds".to_string(),
                create_as: Some("int".to_string()),
                ..Default::default()
            },
        ],
        queries: vec![QueryConfig {
            path: path(&["actor", "cloud"]),
            endpoints: vec![EndpointConfig::new("linkedAccounts")],
        }],
        mutations: vec![MutationConfig::new("cloudLinkAccount")],
        commands: vec![CommandConfig {
            name: "cloud".to_string(),
            short_description: "Manage cloud integrations".to_string(),
            client_package_name: "cloud".to_string(),
            subcommands: vec![
                CommandConfig {
                    name: "cloudLinkAccount".to_string(),
                    ..Default::default()
                },
                CommandConfig {
                    name: "linkedAccount".to_string(),
                    path: path(&["actor", "cloud", "linkedAccount"]),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }],
        ..Default::default()
    }
}

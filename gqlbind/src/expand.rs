// ABOUTME: Expands a package's requested types into every schema type they reach
// ABOUTME: Seeds from configured types, mutations and query endpoints, then walks the graph

use log::{debug, warn};
use std::collections::BTreeMap;

use crate::config::PackageConfig;
use crate::error::GenerateError;
use crate::schema::{Field, Schema, Type};

/// Names whose types seed the expansion: configured types plus the argument
/// and return types of configured mutations and query endpoints.
fn seed_names(schema: &Schema, package: &PackageConfig) -> Vec<String> {
    let mut seeds: Vec<String> = package
        .type_configs()
        .into_iter()
        .map(|t| t.name.clone())
        .collect();

    let mut add_field = |field: &Field| {
        seeds.push(field.type_ref.type_name().to_string());
        seeds.extend(field.args.iter().map(|a| a.type_ref.type_name().to_string()));
    };

    for mutation in &package.mutations {
        match schema.lookup_mutation_by_name(&mutation.name) {
            Ok(field) => add_field(field),
            Err(err) => debug!("not expanding mutation types: {}", err),
        }
    }

    for query in &package.queries {
        let chain = match schema.lookup_query_types_by_field_path(&query.path) {
            Ok(chain) => chain,
            Err(err) => {
                debug!("not expanding query types: {}", err);
                continue;
            }
        };

        if let Some(last) = chain.last() {
            for endpoint in &query.endpoints {
                if let Some(field) = last.field(&endpoint.name) {
                    add_field(field);
                }
            }
        }
    }

    seeds
}

/// Transitively expand the package's requested types, sorted by name.
///
/// Unknown names are logged and skipped; the root operation types are never
/// part of the result.
pub fn resolve_schema_types<'s>(schema: &'s Schema, package: &PackageConfig) -> Vec<&'s Type> {
    let mut expanded: BTreeMap<&str, &Type> = BTreeMap::new();
    let mut pending = seed_names(schema, package);

    while let Some(name) = pending.pop() {
        if name.is_empty() || schema.is_root_type(&name) || expanded.contains_key(name.as_str()) {
            continue;
        }

        let Some(t) = schema.type_by_name(&name) else {
            warn!("{}", GenerateError::TypeNotFound(name));
            continue;
        };
        expanded.insert(t.name.as_str(), t);

        pending.extend(
            t.fields
                .iter()
                .chain(t.input_fields.iter())
                .map(|f| f.type_ref.type_name().to_string()),
        );
        pending.extend(
            t.interfaces
                .iter()
                .chain(t.possible_types.iter())
                .map(|r| r.type_name().to_string()),
        );
    }

    expanded.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{cloud_package, fixture_schema, type_config};

    fn names(types: &[&Type]) -> Vec<String> {
        types.iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn test_expands_transitively_and_sorted() {
        let schema = fixture_schema();
        let expanded = resolve_schema_types(&schema, &cloud_package());

        assert_eq!(
            names(&expanded),
            vec![
                "CloudAwsLinkAccountInput",
                "CloudIntegrationMutationError",
                "CloudLinkAccountPayload",
                "CloudLinkCloudAccountsInput",
                "CloudLinkedAccount",
                "CloudMutationErrorType",
                "CloudProvider",
                "EpochSeconds",
                "Int",
                "String",
            ]
        );
    }

    #[test]
    fn test_interfaces_pull_in_possible_types() {
        let schema = fixture_schema();
        let package = PackageConfig {
            name: "entities".to_string(),
            types: vec![type_config("EntityOutline")],
            ..Default::default()
        };
        let expanded = names(&resolve_schema_types(&schema, &package));

        for expected in [
            "ApmApplicationEntityOutline",
            "BrowserApplicationEntityOutline",
            "DashboardEntityOutline",
            "EntityGuid",
            "User",
        ] {
            assert!(expanded.contains(&expected.to_string()), "{expected}");
        }
    }

    #[test]
    fn test_unknown_types_are_skipped() {
        let schema = fixture_schema();
        let package = PackageConfig {
            name: "partial".to_string(),
            types: vec![type_config("DoesNotExist"), type_config("CloudProvider")],
            ..Default::default()
        };
        let expanded = names(&resolve_schema_types(&schema, &package));

        assert_eq!(expanded, vec!["CloudProvider", "Int", "String"]);
    }

    #[test]
    fn test_root_types_never_expanded() {
        let schema = fixture_schema();
        let package = PackageConfig {
            name: "roots".to_string(),
            types: vec![type_config("Query"), type_config("Mutation")],
            ..Default::default()
        };

        assert!(resolve_schema_types(&schema, &package).is_empty());
    }
}

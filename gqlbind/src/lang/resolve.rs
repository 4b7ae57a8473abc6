// ABOUTME: Resolves a configured subcommand to the schema field it wraps
// ABOUTME: Tries the mutation root by exact name before following the query path

use log::warn;

use crate::config::CommandConfig;
use crate::error::GenerateError;
use crate::schema::{Field, Schema};

/// Outcome of resolving one subcommand
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'s> {
    Mutation(&'s Field),
    Query(&'s Field),
    Unresolved(String),
}

impl<'s> Resolution<'s> {
    pub fn field(&self) -> Option<&'s Field> {
        match self {
            Resolution::Mutation(field) | Resolution::Query(field) => Some(*field),
            Resolution::Unresolved(_) => None,
        }
    }
}

/// Resolve a subcommand, mutation first.
///
/// A name that is not a mutation must carry a query path; the field named
/// by the path's last segment is looked up on the type holding it.
pub fn resolve_subcommand<'s>(schema: &'s Schema, config: &CommandConfig) -> Resolution<'s> {
    if let Ok(field) = schema.lookup_mutation_by_name(&config.name) {
        return Resolution::Mutation(field);
    }

    let Some(endpoint) = config.path.last() else {
        return Resolution::Unresolved(
            GenerateError::MutationNotFound(config.name.clone()).to_string(),
        );
    };

    let chain = match schema.lookup_query_types_by_field_path(&config.path) {
        Ok(chain) => chain,
        Err(err) => return Resolution::Unresolved(err.to_string()),
    };

    let containing = if chain.len() > 1 {
        Some(chain[chain.len() - 2])
    } else {
        schema.query_type()
    };
    let Some(containing) = containing else {
        return Resolution::Unresolved(format!("no type holds field {}", endpoint));
    };

    let mut matches = containing.fields.iter().filter(|f| &f.name == endpoint);
    let Some(field) = matches.next() else {
        return Resolution::Unresolved(
            GenerateError::EndpointNotFound {
                endpoint: endpoint.clone(),
                type_name: containing.name.clone(),
            }
            .to_string(),
        );
    };
    if matches.next().is_some() {
        warn!(
            "{}",
            GenerateError::DuplicateDefinition(format!("{}.{}", containing.name, endpoint))
        );
    }

    Resolution::Query(field)
}

// ABOUTME: Derives callable method descriptions from query endpoints and mutations
// ABOUTME: Shares signature derivation and attaches the matching query document

use log::debug;

use crate::config::PackageConfig;
use crate::constants::markers;
use crate::error::GenerateError;
use crate::lang::unwrap::unwrap_type;
use crate::lang::{Method, MethodInput, MethodSignature, QueryVar};
use crate::naming;
use crate::query;
use crate::schema::{Field, Schema};

/// Method for a schema field without its query document.
///
/// Callers attach the document, response object type and return path.
pub fn method_for_field(field: &Field, package: &PackageConfig) -> Method {
    let returned = unwrap_type(&field.type_ref, package);

    let mut input = Vec::with_capacity(field.args.len());
    let mut query_vars = Vec::with_capacity(field.args.len());
    for arg in &field.args {
        let param = MethodInput {
            name: arg.exported_name(),
            type_expr: unwrap_type(&arg.type_ref, package).expression,
        };
        query_vars.push(QueryVar {
            key: arg.name.clone(),
            value: param.name.clone(),
            type_name: arg.type_ref.type_name().to_string(),
        });
        input.push(param);
    }

    Method {
        name: field.exported_name(),
        description: field.description().to_string(),
        query_vars,
        signature: MethodSignature {
            input,
            returns: vec![returned.expression, markers::ERROR_RETURN.to_string()],
            return_slice: returned.is_list,
            return_path: Vec::new(),
        },
        ..Default::default()
    }
}

fn sort_methods(methods: &mut [Method]) {
    methods.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Methods for every configured query endpoint, sorted by name
pub fn query_methods(schema: &Schema, package: &PackageConfig) -> Result<Vec<Method>, GenerateError> {
    let mut methods = Vec::new();

    for query in &package.queries {
        let chain = schema.lookup_query_types_by_field_path(&query.path)?;
        let Some(last) = chain.last() else {
            continue;
        };
        let return_path: Vec<String> = query.path.iter().map(|s| naming::export_name(s)).collect();

        for endpoint in &query.endpoints {
            let field = last
                .field(&endpoint.name)
                .ok_or_else(|| GenerateError::EndpointNotFound {
                    endpoint: endpoint.name.clone(),
                    type_name: last.name.clone(),
                })?;
            debug!("query method {} on {}", endpoint.name, last.name);

            let mut method = method_for_field(field, package);
            method.query_string = query::endpoint_document(
                schema,
                &chain,
                &query.path,
                &endpoint.name,
                endpoint.max_query_field_depth,
            )?;
            method.response_object_type = format!("{}{}", endpoint.name, markers::RESPONSE_SUFFIX);
            method.signature.return_path = return_path.clone();
            methods.push(method);
        }
    }

    sort_methods(&mut methods);
    Ok(methods)
}

/// Methods for every configured mutation, sorted by name
pub fn mutation_methods(
    schema: &Schema,
    package: &PackageConfig,
) -> Result<Vec<Method>, GenerateError> {
    let mut methods = package
        .mutations
        .iter()
        .map(|mutation| {
            let field = schema.lookup_mutation_by_name(&mutation.name)?;
            let mut method = method_for_field(field, package);
            method.query_string =
                query::mutation_document(schema, field, mutation.max_query_field_depth);
            Ok(method)
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;

    sort_methods(&mut methods);
    Ok(methods)
}

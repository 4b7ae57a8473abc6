// ABOUTME: Schema-driven GraphQL binding generator library
// ABOUTME: Turns an introspected schema and package configuration into renderable declarations

pub mod config;
pub mod constants;
pub mod error;
pub mod expand;
pub mod lang;
pub mod naming;
pub mod query;
pub mod schema;

#[cfg(test)]
mod test_helpers;

pub use config::PackageConfig;
pub use error::GenerateError;
pub use lang::PackageArtifacts;
pub use schema::Schema;

use log::debug;

use lang::{Declaration, TypeDeclarations};

/// Generate every artifact for one package.
///
/// Type projection, response records, methods and commands all read the same
/// schema and configuration; any resolution failure aborts the package.
pub fn generate_package(
    schema: &Schema,
    package: &PackageConfig,
) -> Result<PackageArtifacts, GenerateError> {
    let expanded = expand::resolve_schema_types(schema, package);
    debug!(
        "package {}: {} types after expansion",
        package.name,
        expanded.len()
    );

    let mut declarations = lang::types::project_types(package, &expanded);
    declarations.extend(
        lang::response::constrained_response_records(schema, package, &expanded)?
            .into_iter()
            .map(Declaration::Record),
    );

    Ok(PackageArtifacts {
        package_name: package.name.clone(),
        import_path: package.import_path.clone().unwrap_or_default(),
        imports: package.imports.clone(),
        types: TypeDeclarations::from_declarations(declarations),
        queries: lang::methods::query_methods(schema, package)?,
        mutations: lang::methods::mutation_methods(schema, package)?,
        commands: lang::command::hydrate_commands(schema, package)?,
    })
}

// ABOUTME: Drives generation for every configured package and writes the rendered files
// ABOUTME: Any resolution, render or write failure aborts the run

use anyhow::{bail, Context, Result};
use gqlbind::lang::PackageArtifacts;
use gqlbind::naming::snake_case;
use gqlbind::{GenerateError, PackageConfig, Schema};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::{Config, GeneratorConfig};
use crate::constants::{defaults, generators, templates};
use crate::render::{command_context, package_context, Renderer};

/// One file written by a generator
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub package: String,
    pub generator: String,
    pub path: PathBuf,
}

pub fn load_schema(path: &Path) -> Result<Schema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file: {}", path.display()))?;
    Schema::from_json_str(&content)
        .with_context(|| format!("Failed to load schema: {}", path.display()))
}

/// Generate every configured package, or only `only` when given.
///
/// Package paths are resolved against `root`.
pub fn run(
    config: &Config,
    schema: &Schema,
    root: &Path,
    only: Option<&str>,
) -> Result<Vec<GeneratedFile>> {
    let renderer = Renderer::new()?;
    let mut written = Vec::new();
    let mut seen = HashSet::new();

    for package in &config.packages {
        if only.is_some_and(|name| name != package.name) {
            continue;
        }
        if !seen.insert(package.name.as_str()) {
            let duplicate = GenerateError::DuplicateDefinition(format!("package {}", package.name));
            warn!("{}; keeping the first configuration", duplicate);
            continue;
        }

        info!("generating package {}", package.name);
        let artifacts = gqlbind::generate_package(schema, package)
            .with_context(|| format!("Failed to generate package {}", package.name))?;

        for generator in config.package_generators(package) {
            let files = match generator.name.as_str() {
                generators::COMMAND => {
                    write_commands(&renderer, &generator, package, &artifacts, root)?
                }
                _ => vec![write_types(&renderer, &generator, package, &artifacts, root)?],
            };
            written.extend(files);
        }
    }

    if let Some(name) = only {
        if seen.is_empty() {
            bail!("Package '{}' is not configured", name);
        }
    }

    Ok(written)
}

fn destination_dir(root: &Path, package: &PackageConfig) -> PathBuf {
    match &package.path {
        Some(path) => root.join(path),
        None => root.to_path_buf(),
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

fn write_types(
    renderer: &Renderer,
    generator: &GeneratorConfig,
    package: &PackageConfig,
    artifacts: &PackageArtifacts,
    root: &Path,
) -> Result<GeneratedFile> {
    let context = package_context(artifacts)?;
    let source = renderer.template_source(generator, templates::TYPES, &context)?;
    let template = renderer.load_template(&source)?;

    let file_name = generator
        .file_name
        .as_deref()
        .or(package.file_name.as_deref())
        .unwrap_or(defaults::TYPES_FILE);
    let path = destination_dir(root, package).join(file_name);

    let output = renderer
        .render(&template, &context)
        .with_context(|| format!("Failed to render types for package {}", package.name))?;
    write_file(&path, &output)?;
    debug!("wrote {}", path.display());

    Ok(GeneratedFile {
        package: package.name.clone(),
        generator: generator.name.clone(),
        path,
    })
}

fn write_commands(
    renderer: &Renderer,
    generator: &GeneratorConfig,
    package: &PackageConfig,
    artifacts: &PackageArtifacts,
    root: &Path,
) -> Result<Vec<GeneratedFile>> {
    let source = renderer.template_source(
        generator,
        templates::COMMAND,
        &package_context(artifacts)?,
    )?;
    let template = renderer.load_template(&source)?;
    let dir = destination_dir(root, package);

    artifacts
        .commands
        .iter()
        .map(|command| {
            let context = command_context(artifacts, command)?;
            let file_name = format!(
                "{}{}.{}",
                defaults::COMMAND_FILE_PREFIX,
                snake_case(&command.name),
                defaults::GENERATED_EXTENSION
            );
            let path = dir.join(file_name);

            let output = renderer
                .render(&template, &context)
                .with_context(|| format!("Failed to render command {}", command.name))?;
            write_file(&path, &output)?;
            debug!("wrote {}", path.display());

            Ok(GeneratedFile {
                package: package.name.clone(),
                generator: generator.name.clone(),
                path,
            })
        })
        .collect()
}

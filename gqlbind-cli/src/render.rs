// ABOUTME: Liquid template loading and rendering for generated files
// ABOUTME: Resolves embedded, directory or remote templates and renders package artifacts

use anyhow::{anyhow, bail, Context, Result};
use gqlbind::lang::{Command, PackageArtifacts};
use liquid::model::Value;
use log::debug;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::constants::{defaults, templates};

const TYPES_TEMPLATE: &str = include_str!("../templates/types.go.liquid");
const COMMAND_TEMPLATE: &str = include_str!("../templates/command.go.liquid");

/// Source of a generator's template, decided by its configuration
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSource {
    Embedded(&'static str),
    Directory(PathBuf),
    Url(String),
}

/// Built-in template by name
pub fn embedded_template(name: &str) -> Option<&'static str> {
    match name {
        templates::TYPES => Some(TYPES_TEMPLATE),
        templates::COMMAND => Some(COMMAND_TEMPLATE),
        _ => None,
    }
}

/// Template context for a package: every artifact at the top level
pub fn package_context(artifacts: &PackageArtifacts) -> Result<liquid::Object> {
    let value = liquid::model::to_value(artifacts)
        .map_err(|e| anyhow!("Failed to build template context: {}", e))?;

    match value {
        Value::Object(object) => Ok(object),
        _ => bail!("Package artifacts did not serialize to an object"),
    }
}

/// Package context with `command` bound to one command
pub fn command_context(artifacts: &PackageArtifacts, command: &Command) -> Result<liquid::Object> {
    let mut context = package_context(artifacts)?;
    let command = liquid::model::to_value(command)
        .map_err(|e| anyhow!("Failed to build context for command {}: {}", command.name, e))?;
    context.insert("command".into(), command);
    Ok(context)
}

pub struct Renderer {
    parser: liquid::Parser,
    http: reqwest::blocking::Client,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| anyhow!("Failed to build template parser: {}", e))?;
        let http = reqwest::blocking::Client::builder()
            .timeout(defaults::REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { parser, http })
    }

    pub fn render(&self, source: &str, context: &liquid::Object) -> Result<String> {
        let template = self
            .parser
            .parse(source)
            .map_err(|e| anyhow!("Failed to parse template: {}", e))?;

        template
            .render(context)
            .map_err(|e| anyhow!("Failed to render template: {}", e))
    }

    /// Where a generator's template comes from.
    ///
    /// A template directory may reference package values and is rendered
    /// against `context` before use.
    pub fn template_source(
        &self,
        generator: &GeneratorConfig,
        default_name: &'static str,
        context: &liquid::Object,
    ) -> Result<TemplateSource> {
        let name = generator.template_name.as_deref().unwrap_or(default_name);

        if let Some(url) = &generator.template_url {
            return Ok(TemplateSource::Url(url.clone()));
        }

        if let Some(dir) = &generator.template_dir {
            let dir = self
                .render(dir, context)
                .with_context(|| format!("Invalid template_dir for generator {}", generator.name))?;
            return Ok(TemplateSource::Directory(PathBuf::from(dir).join(name)));
        }

        embedded_template(name)
            .map(TemplateSource::Embedded)
            .with_context(|| {
                format!(
                    "No built-in template named {} for generator {}",
                    name, generator.name
                )
            })
    }

    pub fn load_template(&self, source: &TemplateSource) -> Result<String> {
        match source {
            TemplateSource::Embedded(template) => Ok(template.to_string()),
            TemplateSource::Directory(path) => {
                debug!("reading template {}", path.display());
                std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read template: {}", path.display()))
            }
            TemplateSource::Url(url) => self.fetch_remote_template(url),
        }
    }

    fn fetch_remote_template(&self, url: &str) -> Result<String> {
        debug!("fetching template {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch template: {}", url))?;

        if !response.status().is_success() {
            bail!("Failed to fetch template {}: {}", url, response.status());
        }

        response
            .text()
            .with_context(|| format!("Failed to read template body: {}", url))
    }
}

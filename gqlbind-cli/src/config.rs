// ABOUTME: Configuration file discovery, loading and validation for the gqlbind driver
// ABOUTME: Reads YAML describing the schema source, packages to generate and generator templates

use anyhow::{bail, Context, Result};
use gqlbind::PackageConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{config_files, defaults, env, generators};

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub log_level: Option<String>,
    /// GraphQL endpoint queried by `fetch`
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub packages: Vec<PackageConfig>,
    #[serde(default)]
    pub generators: Vec<GeneratorConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub api_key_env_var: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct CacheConfig {
    #[serde(default)]
    pub schema_file: Option<String>,
}

/// Template settings for one of the built-in generators
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct GeneratorConfig {
    pub name: String,
    /// Directory holding the template; rendered against the package first
    #[serde(default)]
    pub template_dir: Option<String>,
    #[serde(default)]
    pub template_url: Option<String>,
    #[serde(default)]
    pub template_name: Option<String>,
    /// Output file name, only used by the type generator
    #[serde(default)]
    pub file_name: Option<String>,
}

impl GeneratorConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl AuthConfig {
    pub fn header(&self) -> &str {
        self.header.as_deref().unwrap_or(defaults::AUTH_HEADER)
    }

    pub fn api_key_env_var(&self) -> &str {
        self.api_key_env_var.as_deref().unwrap_or(env::API_KEY)
    }
}

impl CacheConfig {
    pub fn schema_file(&self) -> &str {
        self.schema_file.as_deref().unwrap_or(defaults::SCHEMA_FILE)
    }
}

impl Config {
    /// Load the configuration from `--config`, `GQLBIND_CONFIG` or the
    /// working directory, in that order
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let path = Self::locate(&cwd, explicit)?;
        Self::load_from_file(&path)
    }

    /// Find the configuration file relative to `dir`
    pub fn locate(dir: &Path, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }

        if let Some(path) = std::env::var_os(env::CONFIG) {
            return Ok(PathBuf::from(path));
        }

        config_files::CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
            .with_context(|| {
                format!(
                    "No configuration file found in {} (looked for {})",
                    dir.display(),
                    config_files::CANDIDATES.join(", ")
                )
            })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = serde_yaml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse YAML config file: {}",
                path.as_ref().display()
            )
        })?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.packages.is_empty() {
            bail!("At least one package must be configured");
        }

        for generator in &self.generators {
            if !generators::ALL.contains(&generator.name.as_str()) {
                bail!(
                    "Unknown generator '{}'. Must be one of: {}",
                    generator.name,
                    generators::ALL.join(", ")
                );
            }
            if generator.template_dir.is_some() && generator.template_url.is_some() {
                bail!(
                    "Generator '{}' sets both template_dir and template_url",
                    generator.name
                );
            }
        }

        for package in &self.packages {
            for name in &package.generators {
                if !generators::ALL.contains(&name.as_str()) {
                    bail!(
                        "Package '{}' uses unknown generator '{}'",
                        package.name,
                        name
                    );
                }
            }
        }

        Ok(())
    }

    /// Settings for a built-in generator, or its defaults when unconfigured
    pub fn generator(&self, name: &str) -> GeneratorConfig {
        self.generators
            .iter()
            .find(|g| g.name == name)
            .cloned()
            .unwrap_or_else(|| GeneratorConfig::new(name))
    }

    /// Generators run for a package.
    ///
    /// Without an explicit list, types are always generated and commands
    /// only when the package configures some.
    pub fn package_generators(&self, package: &PackageConfig) -> Vec<GeneratorConfig> {
        if !package.generators.is_empty() {
            return package.generators.iter().map(|n| self.generator(n)).collect();
        }

        let mut selected = vec![self.generator(generators::TYPEGEN)];
        if !package.commands.is_empty() {
            selected.push(self.generator(generators::COMMAND));
        }
        selected
    }
}

/// Log level from the command line, then `GQLBIND_LOG_LEVEL`, then the
/// config file
pub fn resolve_log_level(cli: Option<&str>, config: Option<&str>) -> String {
    cli.map(str::to_string)
        .or_else(|| std::env::var(env::LOG_LEVEL).ok())
        .or_else(|| config.map(str::to_string))
        .unwrap_or_else(|| defaults::LOG_LEVEL.to_string())
}

// ABOUTME: Downloads the schema from a GraphQL endpoint using the introspection query
// ABOUTME: Writes the response's data portion to the configured schema file

use anyhow::{bail, Context, Result};
use log::{debug, info};
use secrecy::{ExposeSecret, SecretString};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::constants::defaults;

pub const INTROSPECTION_QUERY: &str = r#"
query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      ...FullType
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
  }
  inputFields {
    ...InputValue
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
}

fragment InputValue on __InputValue {
  name
  description
  type { ...TypeRef }
  defaultValue
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}
"#;

/// Post the introspection query and return the response's `data` object
pub fn introspect(endpoint: &str, header: &str, api_key: &SecretString) -> Result<serde_json::Value> {
    let client = reqwest::blocking::Client::builder()
        .timeout(defaults::REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    debug!("posting introspection query to {}", endpoint);
    let response = client
        .post(endpoint)
        .header(header, api_key.expose_secret())
        .json(&serde_json::json!({ "query": INTROSPECTION_QUERY }))
        .send()
        .context("Failed to send introspection query")?;

    if !response.status().is_success() {
        bail!("Failed to download schema: {}", response.status());
    }

    let mut body: serde_json::Value = response
        .json()
        .context("Failed to parse schema response")?;

    if let Some(errors) = body.get("errors").filter(|e| !e.is_null()) {
        bail!("GraphQL errors: {}", errors);
    }

    body.get_mut("data")
        .map(serde_json::Value::take)
        .context("No data field in response")
}

/// Fetch the schema described by `config` and write it under `root`
pub fn fetch_schema(config: &Config, root: &Path) -> Result<PathBuf> {
    let endpoint = config
        .endpoint
        .as_deref()
        .context("No endpoint configured; set `endpoint` in the config file")?;

    let env_var = config.auth.api_key_env_var();
    let api_key = std::env::var(env_var)
        .map(SecretString::from)
        .with_context(|| format!("No API key found; set the {} environment variable", env_var))?;

    let schema = introspect(endpoint, config.auth.header(), &api_key)?;

    let path = root.join(config.cache.schema_file());
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let formatted = serde_json::to_string_pretty(&schema).context("Failed to format schema")?;
    std::fs::write(&path, formatted)
        .with_context(|| format!("Failed to write schema file: {}", path.display()))?;

    info!("schema written to {}", path.display());
    Ok(path)
}

// ABOUTME: In-memory GraphQL schema graph built from an introspection result
// ABOUTME: Provides type references, name lookups, and query path and mutation resolution

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use typed_builder::TypedBuilder;

use crate::constants::native;
use crate::error::GenerateError;
use crate::naming;

/// Category of a schema type or of one link in a wrapper chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

/// Reference to a type, possibly wrapped in `List` and `NonNull` links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: Kind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// Reference a named (unwrapped) type
    pub fn named(kind: Kind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    /// Wrap a reference in `NonNull`
    pub fn non_null(inner: TypeRef) -> Self {
        Self {
            kind: Kind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// Wrap a reference in `List`
    pub fn list(inner: TypeRef) -> Self {
        Self {
            kind: Kind::List,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// Kinds of the whole chain, outermost first and terminal last
    pub fn kinds(&self) -> Vec<Kind> {
        let mut kinds = vec![self.kind];
        let mut current = self;
        while let Some(inner) = current.of_type.as_deref() {
            kinds.push(inner.kind);
            current = inner;
        }
        kinds
    }

    /// The innermost reference of the chain
    pub fn terminal(&self) -> &TypeRef {
        let mut current = self;
        while let Some(inner) = current.of_type.as_deref() {
            current = inner;
        }
        current
    }

    pub fn terminal_kind(&self) -> Kind {
        self.terminal().kind
    }

    /// Name of the terminal type
    pub fn type_name(&self) -> &str {
        self.terminal().name.as_deref().unwrap_or_default()
    }

    pub fn is_list(&self) -> bool {
        self.kinds().contains(&Kind::List)
    }

    /// Only the reference's own top-level wrapper decides required-ness
    pub fn is_required(&self) -> bool {
        self.kind == Kind::NonNull
    }

    pub fn is_input_object(&self) -> bool {
        self.terminal_kind() == Kind::InputObject
    }

    /// `ID` reached through a wrapper whose wrapped type is a scalar
    pub fn is_scalar_id(&self) -> bool {
        self.type_name() == native::ID_SCALAR
            && self
                .of_type
                .as_deref()
                .is_some_and(|inner| inner.kind == Kind::Scalar)
    }

    /// Render the reference in GraphQL type notation, e.g. `[String!]!`
    pub fn to_graphql(&self) -> String {
        match (self.kind, self.of_type.as_deref()) {
            (Kind::NonNull, Some(inner)) => format!("{}!", inner.to_graphql()),
            (Kind::List, Some(inner)) => format!("[{}]", inner.to_graphql()),
            _ => self.name.clone().unwrap_or_default(),
        }
    }
}

/// A field, argument or input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[builder(setter(into))]
    pub name: String,
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[builder(default)]
    pub args: Vec<Field>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub default_value: Option<String>,
}

impl Field {
    pub fn exported_name(&self) -> String {
        naming::export_name(&self.name)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Serialization tags for a record field carrying this field
    pub fn tags(&self) -> String {
        format!("`json:\"{},omitempty\"`", self.name)
    }

    /// Whether the terminal type is a built-in scalar with a native mapping
    pub fn is_native(&self) -> bool {
        native::scalar(self.type_ref.type_name()).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A named schema type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    pub kind: Kind,
    #[builder(setter(into))]
    pub name: String,
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[builder(default)]
    pub fields: Vec<Field>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[builder(default)]
    pub input_fields: Vec<Field>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[builder(default)]
    pub interfaces: Vec<TypeRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[builder(default)]
    pub possible_types: Vec<TypeRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[builder(default)]
    pub enum_values: Vec<EnumValue>,
}

impl Type {
    pub fn exported_name(&self) -> String {
        naming::export_name(&self.name)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Built-in scalars already represented by a target language primitive
    pub fn is_native(&self) -> bool {
        self.kind == Kind::Scalar && native::scalar(&self.name).is_some()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// Introspection results use `null` rather than `[]` for absent collections
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
struct RootTypeName {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
    #[serde(default)]
    query_type: Option<RootTypeName>,
    #[serde(default)]
    mutation_type: Option<RootTypeName>,
    #[serde(default)]
    types: Vec<Type>,
}

impl From<RawSchema> for Schema {
    fn from(raw: RawSchema) -> Self {
        Schema::new(
            raw.query_type.map(|t| t.name),
            raw.mutation_type.map(|t| t.name),
            raw.types,
        )
    }
}

/// The schema graph; immutable once built
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawSchema")]
pub struct Schema {
    query_type: Option<String>,
    mutation_type: Option<String>,
    types: Vec<Type>,
    index: HashMap<String, usize>,
}

impl Schema {
    pub fn new(query_type: Option<String>, mutation_type: Option<String>, types: Vec<Type>) -> Self {
        let index = types
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name.clone(), i))
            .collect();

        Self {
            query_type,
            mutation_type,
            types,
            index,
        }
    }

    /// Parse an introspection document.
    ///
    /// Accepts a raw `{"data": {"__schema": ...}}` response, the
    /// `{"__schema": ...}` document written by `fetch`, or a bare schema object.
    pub fn from_json_str(content: &str) -> Result<Self, GenerateError> {
        let mut value: serde_json::Value = serde_json::from_str(content)?;

        if let Some(data) = value.get_mut("data") {
            value = data.take();
        }
        if let Some(schema) = value.get_mut("__schema") {
            value = schema.take();
        }

        Ok(serde_json::from_value(value)?)
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn type_by_name(&self, name: &str) -> Option<&Type> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    pub fn query_type(&self) -> Option<&Type> {
        self.query_type
            .as_deref()
            .and_then(|name| self.type_by_name(name))
    }

    pub fn mutation_type(&self) -> Option<&Type> {
        self.mutation_type
            .as_deref()
            .and_then(|name| self.type_by_name(name))
    }

    /// Whether `name` is one of the root operation types
    pub fn is_root_type(&self, name: &str) -> bool {
        self.query_type.as_deref() == Some(name) || self.mutation_type.as_deref() == Some(name)
    }

    /// Resolve a field path from the query root into the chain of types it names.
    ///
    /// `["actor", "cloud"]` yields the types of `Query.actor` and `Actor.cloud`.
    pub fn lookup_query_types_by_field_path(
        &self,
        path: &[String],
    ) -> Result<Vec<&Type>, GenerateError> {
        let joined = path.join(".");
        let first = path.first().ok_or_else(|| {
            GenerateError::Configuration("query path must contain at least one field".to_string())
        })?;

        let mut current = self
            .query_type()
            .ok_or_else(|| GenerateError::UnresolvedPath {
                path: joined.clone(),
                segment: first.clone(),
            })?;

        let mut chain = Vec::with_capacity(path.len());
        for segment in path {
            let field = current
                .field(segment)
                .ok_or_else(|| GenerateError::UnresolvedPath {
                    path: joined.clone(),
                    segment: segment.clone(),
                })?;

            let type_name = field.type_ref.type_name();
            current = self
                .type_by_name(type_name)
                .ok_or_else(|| GenerateError::TypeNotFound(type_name.to_string()))?;
            chain.push(current);
        }

        Ok(chain)
    }

    /// Exact-name match against the mutation root's fields
    pub fn lookup_mutation_by_name(&self, name: &str) -> Result<&Field, GenerateError> {
        self.mutation_type()
            .and_then(|mutation| mutation.field(name))
            .ok_or_else(|| GenerateError::MutationNotFound(name.to_string()))
    }
}

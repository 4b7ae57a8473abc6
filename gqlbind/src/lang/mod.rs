// ABOUTME: Generated artifact descriptions handed to the template renderer
// ABOUTME: Declarations, method signatures, and CLI command and flag descriptors

pub mod command;
pub mod methods;
pub mod resolve;
pub mod response;
pub mod types;
pub mod unwrap;

use serde::Serialize;

/// One emitted declaration produced for a schema type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "declaration", rename_all = "snake_case")]
pub enum Declaration {
    Record(Record),
    Enum(Enumeration),
    Scalar(ScalarAlias),
    Interface(Interface),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Record(r) => &r.name,
            Declaration::Enum(e) => &e.name,
            Declaration::Scalar(s) => &s.name,
            Declaration::Interface(i) => &i.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Record {
    pub name: String,
    pub description: String,
    pub fields: Vec<RecordField>,
    pub implements: Vec<String>,
    /// Set when a field holds an interface and needs custom deserialization
    pub special_unmarshal: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RecordField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_expr: String,
    pub type_name: String,
    pub tags: String,
    pub tag_key: String,
    pub description: String,
    pub is_interface: bool,
    pub is_list: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Enumeration {
    pub name: String,
    pub description: String,
    pub values: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EnumMember {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScalarAlias {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub type_expr: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Interface {
    pub name: String,
    pub description: String,
    pub possible_types: Vec<PossibleType>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PossibleType {
    pub graphql_name: String,
    pub emitted_name: String,
}

/// Type declarations of one package, each list sorted by name
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TypeDeclarations {
    pub records: Vec<Record>,
    pub enums: Vec<Enumeration>,
    pub scalars: Vec<ScalarAlias>,
    pub interfaces: Vec<Interface>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Method {
    pub name: String,
    pub description: String,
    pub query_vars: Vec<QueryVar>,
    pub signature: MethodSignature,
    pub query_string: String,
    /// Type the raw API response is decoded into, not the method's return type
    pub response_object_type: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MethodSignature {
    pub input: Vec<MethodInput>,
    #[serde(rename = "return")]
    pub returns: Vec<String>,
    pub return_slice: bool,
    /// Fields of the response object nesting the returned value
    pub return_path: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MethodInput {
    pub name: String,
    #[serde(rename = "type")]
    pub type_expr: String,
}

/// Binding of a GraphQL variable to a method parameter
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct QueryVar {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Command {
    pub name: String,
    pub cmd_variable_name: String,
    pub short_description: String,
    pub long_description: String,
    pub example: String,
    pub graphql_path: Vec<String>,
    pub client_method: String,
    pub client_method_args: Vec<String>,
    pub input_objects: Vec<InputObject>,
    pub flags: Vec<CommandFlag>,
    pub subcommands: Vec<Command>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InputObject {
    pub name: String,
    #[serde(rename = "type")]
    pub type_expr: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CommandFlag {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub flag_method_name: String,
    pub default_value: String,
    pub description: String,
    pub variable_name: String,
    pub variable_type: String,
    pub client_type: String,
    pub required: bool,
    pub is_input_type: bool,
}

/// Everything generated for one package
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PackageArtifacts {
    pub package_name: String,
    pub import_path: String,
    pub imports: Vec<String>,
    pub types: TypeDeclarations,
    pub queries: Vec<Method>,
    pub mutations: Vec<Method>,
    pub commands: Vec<Command>,
}

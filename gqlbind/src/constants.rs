// ABOUTME: Centralized constants for the binding generator
// ABOUTME: Contains native type mappings, emitted type markers and configuration defaults

/// Markers applied to emitted type expressions
pub mod markers {
    /// Prefix applied once when a list appears anywhere in a wrapper chain
    pub const LIST_PREFIX: &str = "[]";

    /// Suffix applied to types whose terminal kind is an interface
    pub const INTERFACE_SUFFIX: &str = "Interface";

    /// Suffix of the per-endpoint top-level response record
    pub const RESPONSE_SUFFIX: &str = "Response";

    /// Second element of every generated method's return tuple
    pub const ERROR_RETURN: &str = "error";
}

/// GraphQL built-in scalars and their native target types
pub mod native {
    /// Built-in scalars that map directly onto target language primitives
    pub const SCALARS: &[(&str, &str)] = &[
        ("Boolean", "bool"),
        ("Float", "float64"),
        ("Int", "int"),
        ("String", "string"),
    ];

    /// Name of the GraphQL identifier scalar
    pub const ID_SCALAR: &str = "ID";

    /// Primitive used for identifiers and anything without a native flag type
    pub const STRING: &str = "string";

    /// Primitives with a dedicated flag method; everything else is passed as a string
    pub const FLAG_METHODS: &[(&str, &str)] = &[
        ("bool", "BoolVar"),
        ("float64", "Float64Var"),
        ("int", "IntVar"),
        ("string", "StringVar"),
    ];

    /// Flag method used when a type has no dedicated entry
    pub const DEFAULT_FLAG_METHOD: &str = "StringVar";

    /// Look up the native type for a GraphQL scalar name
    pub fn scalar(name: &str) -> Option<&'static str> {
        SCALARS
            .iter()
            .find(|(graphql, _)| *graphql == name)
            .map(|(_, native)| *native)
    }

    /// Look up the flag method for a native type
    pub fn flag_method(type_name: &str) -> Option<&'static str> {
        FLAG_METHODS
            .iter()
            .find(|(native, _)| *native == type_name)
            .map(|(_, method)| *method)
    }
}

/// Configuration defaults
pub mod defaults {
    /// Query depth used when an endpoint or mutation doesn't set one
    pub const MAX_QUERY_FIELD_DEPTH: usize = 2;

    /// Program name used in synthesized command examples
    pub const CLI_NAME: &str = "cli";

    /// Variable name of a top-level generated command
    pub const COMMAND_VARIABLE: &str = "Command";

    /// Prefix of a generated subcommand's variable name
    pub const SUBCOMMAND_VARIABLE_PREFIX: &str = "cmd";

    /// Template used to synthesize a subcommand example invocation
    pub const COMMAND_EXAMPLE_TEMPLATE: &str = "{cli} {package} {command} {subcommand}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_scalar_lookup() {
        assert_eq!(native::scalar("Int"), Some("int"));
        assert_eq!(native::scalar("Boolean"), Some("bool"));
        assert_eq!(native::scalar("ID"), None);
        assert_eq!(native::scalar("EpochSeconds"), None);
    }

    #[test]
    fn test_flag_method_lookup() {
        assert_eq!(native::flag_method("int"), Some("IntVar"));
        assert_eq!(native::flag_method("string"), Some("StringVar"));
        assert_eq!(native::flag_method("CloudLinkAccountsInput"), None);
    }
}

// ABOUTME: Maps a GraphQL wrapper chain onto an emitted type expression
// ABOUTME: Detects list, interface and required wrappers independent of nesting depth

use crate::config::PackageConfig;
use crate::constants::{markers, native};
use crate::naming;
use crate::schema::{Kind, TypeRef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrappedType {
    /// Emitted name of the terminal type, without list or interface markers
    pub type_name: String,
    /// Full emitted type expression
    pub expression: String,
    pub is_list: bool,
    pub is_interface: bool,
    pub is_required: bool,
}

/// Emitted name of a reference's terminal type.
///
/// Precedence: configured override, then the `ID` special case, then the
/// native primitive for built-in scalars, then the exported schema name.
pub fn base_type_name(type_ref: &TypeRef, package: &PackageConfig) -> String {
    let graphql_name = type_ref.type_name();

    if let Some(override_name) = package.field_type_override(graphql_name) {
        return override_name.to_string();
    }

    if type_ref.is_scalar_id() {
        return native::STRING.to_string();
    }

    match native::scalar(graphql_name) {
        Some(primitive) if type_ref.terminal_kind() == Kind::Scalar => primitive.to_string(),
        _ => naming::export_name(graphql_name),
    }
}

/// Unwrap a reference's chain, outermost link first
pub fn unwrap_type(type_ref: &TypeRef, package: &PackageConfig) -> UnwrappedType {
    let kinds = type_ref.kinds();
    let is_list = kinds.contains(&Kind::List);
    let is_interface = kinds.last() == Some(&Kind::Interface);
    let type_name = base_type_name(type_ref, package);

    let mut expression = String::new();
    if is_list {
        expression.push_str(markers::LIST_PREFIX);
    }
    expression.push_str(&type_name);
    if is_interface {
        expression.push_str(markers::INTERFACE_SUFFIX);
    }

    UnwrappedType {
        type_name,
        expression,
        is_list,
        is_interface,
        is_required: type_ref.is_required(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TypeConfig;

    fn object(name: &str) -> TypeRef {
        TypeRef::named(Kind::Object, name)
    }

    #[test]
    fn test_nested_list_of_objects() {
        let type_ref = TypeRef::non_null(TypeRef::list(TypeRef::non_null(object("User"))));
        let unwrapped = unwrap_type(&type_ref, &PackageConfig::default());

        assert_eq!(unwrapped.expression, "[]User");
        assert_eq!(unwrapped.type_name, "User");
        assert!(unwrapped.is_list);
        assert!(unwrapped.is_required);
        assert!(!unwrapped.is_interface);
    }

    #[test]
    fn test_list_prefix_applied_once() {
        let type_ref = TypeRef::list(TypeRef::list(object("Matrix")));
        let unwrapped = unwrap_type(&type_ref, &PackageConfig::default());

        assert_eq!(unwrapped.expression, "[]Matrix");
        assert!(!unwrapped.is_required);
    }

    #[test]
    fn test_interface_suffix() {
        let type_ref = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named(
            Kind::Interface,
            "EntityOutline",
        ))));
        let unwrapped = unwrap_type(&type_ref, &PackageConfig::default());

        assert_eq!(unwrapped.expression, "[]EntityOutlineInterface");
        assert_eq!(unwrapped.type_name, "EntityOutline");
        assert!(unwrapped.is_interface);
    }

    #[test]
    fn test_required_only_from_outermost_wrapper() {
        let type_ref = TypeRef::list(TypeRef::non_null(object("User")));
        assert!(!unwrap_type(&type_ref, &PackageConfig::default()).is_required);
    }

    #[test]
    fn test_native_scalars() {
        let package = PackageConfig::default();
        let int = TypeRef::non_null(TypeRef::named(Kind::Scalar, "Int"));
        assert_eq!(unwrap_type(&int, &package).expression, "int");

        let float = TypeRef::named(Kind::Scalar, "Float");
        assert_eq!(unwrap_type(&float, &package).expression, "float64");

        let custom = TypeRef::named(Kind::Scalar, "EpochSeconds");
        assert_eq!(unwrap_type(&custom, &package).expression, "EpochSeconds");
    }

    #[test]
    fn test_scalar_id_special_case() {
        let package = PackageConfig::default();
        let wrapped = TypeRef::non_null(TypeRef::named(Kind::Scalar, "ID"));
        assert_eq!(unwrap_type(&wrapped, &package).expression, "string");

        let bare = TypeRef::named(Kind::Scalar, "ID");
        assert_eq!(unwrap_type(&bare, &package).expression, "ID");
    }

    #[test]
    fn test_field_type_override() {
        let package = PackageConfig {
            types: vec![TypeConfig {
                name: "EntityGuid".to_string(),
                field_type_override: Some("common.EntityGUID".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let type_ref = TypeRef::list(TypeRef::named(Kind::Scalar, "EntityGuid"));
        let unwrapped = unwrap_type(&type_ref, &package);

        assert_eq!(unwrapped.expression, "[]common.EntityGUID");
        assert_eq!(unwrapped.type_name, "common.EntityGUID");
    }
}

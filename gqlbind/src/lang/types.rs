// ABOUTME: Projects expanded schema types into record, enum, scalar and interface declarations
// ABOUTME: Applies configured overrides and produces a deterministic, name-sorted declaration set

use log::{debug, warn};
use std::collections::HashSet;

use crate::config::PackageConfig;
use crate::constants::native;
use crate::error::GenerateError;
use crate::lang::unwrap::unwrap_type;
use crate::lang::{
    Declaration, EnumMember, Enumeration, Interface, PossibleType, Record, RecordField,
    ScalarAlias, TypeDeclarations,
};
use crate::naming;
use crate::schema::{Field, Kind, Type};

/// Record field for a schema field, typed through the unwrapper
pub fn record_field(field: &Field, package: &PackageConfig) -> RecordField {
    let unwrapped = unwrap_type(&field.type_ref, package);

    RecordField {
        name: field.exported_name(),
        type_expr: unwrapped.expression,
        type_name: unwrapped.type_name,
        tags: field.tags(),
        tag_key: field.name.clone(),
        description: field.description().to_string(),
        is_interface: unwrapped.is_interface,
        is_list: unwrapped.is_list,
    }
}

pub(crate) fn sort_fields(fields: &mut [RecordField]) {
    fields.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Interfaces a type implements: its own declared memberships plus any
/// expanded interface that advertises it as a possible type.
pub(crate) fn implemented_interfaces(t: &Type, expanded: &[&Type]) -> Vec<String> {
    let declared = t.interfaces.iter().map(|i| i.type_name().to_string());
    let advertised = expanded
        .iter()
        .filter(|other| {
            other.kind == Kind::Interface
                && other.possible_types.iter().any(|p| p.type_name() == t.name)
        })
        .map(|other| other.name.clone());

    let mut seen = HashSet::new();
    declared
        .chain(advertised)
        .filter(|name| seen.insert(name.clone()))
        .map(|name| naming::export_name(&name))
        .collect()
}

fn project_record(t: &Type, package: &PackageConfig, expanded: &[&Type]) -> Vec<Declaration> {
    let all_fields: Vec<&Field> = t.fields.iter().chain(t.input_fields.iter()).collect();

    let mut fields: Vec<RecordField> = all_fields
        .iter()
        .map(|f| record_field(f, package))
        .collect();
    sort_fields(&mut fields);

    let mut record = Record {
        name: t.exported_name(),
        description: t.description().to_string(),
        fields,
        implements: implemented_interfaces(t, expanded),
        special_unmarshal: all_fields
            .iter()
            .any(|f| f.type_ref.kinds().contains(&Kind::Interface)),
    };

    if t.kind != Kind::Interface {
        return vec![Declaration::Record(record)];
    }

    // The record shares the interface's name and satisfies it
    if !record.implements.contains(&record.name) {
        record.implements.push(record.name.clone());
    }

    let mut possible_types: Vec<PossibleType> = t
        .possible_types
        .iter()
        .map(|p| PossibleType {
            graphql_name: p.type_name().to_string(),
            emitted_name: naming::export_name(p.type_name()),
        })
        .collect();
    possible_types.sort_by(|a, b| a.graphql_name.cmp(&b.graphql_name));

    let interface = Interface {
        name: t.exported_name(),
        description: t.description().to_string(),
        possible_types,
    };

    vec![Declaration::Record(record), Declaration::Interface(interface)]
}

fn project_enum(t: &Type) -> Declaration {
    let mut values: Vec<EnumMember> = t
        .enum_values
        .iter()
        .map(|v| EnumMember {
            name: v.name.clone(),
            description: v.description.clone().unwrap_or_default(),
        })
        .collect();
    values.sort_by(|a, b| a.name.cmp(&b.name));

    Declaration::Enum(Enumeration {
        name: t.exported_name(),
        description: t.description().to_string(),
        values,
    })
}

fn project_scalar(t: &Type, package: &PackageConfig) -> Option<Declaration> {
    if t.is_native() {
        return None;
    }

    let create_as = package
        .type_config(&t.name)
        .and_then(|c| c.create_as.clone())
        .unwrap_or_else(|| native::STRING.to_string());

    Some(Declaration::Scalar(ScalarAlias {
        name: t.exported_name(),
        description: t.description().to_string(),
        type_expr: create_as,
    }))
}

/// Declarations for a single schema type.
///
/// Kinds that have no declaration form are logged and produce nothing.
pub fn project_type(t: &Type, package: &PackageConfig, expanded: &[&Type]) -> Vec<Declaration> {
    if package.skips_type(&t.name) {
        debug!("skipping type creation for {}", t.name);
        return Vec::new();
    }

    match t.kind {
        Kind::Object | Kind::InputObject | Kind::Interface => {
            project_record(t, package, expanded)
        }
        Kind::Enum => vec![project_enum(t)],
        Kind::Scalar => project_scalar(t, package).into_iter().collect(),
        Kind::Union | Kind::List | Kind::NonNull => {
            warn!("kind not implemented: {} ({:?})", t.name, t.kind);
            Vec::new()
        }
    }
}

/// Declarations for every expanded type, in expansion order
pub fn project_types(package: &PackageConfig, expanded: &[&Type]) -> Vec<Declaration> {
    // Surfaces duplicate configuration entries once per package
    package.type_configs();

    expanded
        .iter()
        .flat_map(|t| project_type(t, package, expanded))
        .collect()
}

fn keep_first<T>(items: Vec<T>, name: impl Fn(&T) -> &str) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(name(&item).to_string()) {
            kept.push(item);
        } else {
            warn!(
                "{}",
                GenerateError::DuplicateDefinition(name(&item).to_string())
            );
        }
    }
    kept
}

impl TypeDeclarations {
    /// Partition declarations by form, drop repeated names (first wins) and
    /// sort each list by name.
    pub fn from_declarations(declarations: Vec<Declaration>) -> Self {
        let mut records = Vec::new();
        let mut enums = Vec::new();
        let mut scalars = Vec::new();
        let mut interfaces = Vec::new();

        for declaration in declarations {
            match declaration {
                Declaration::Record(r) => records.push(r),
                Declaration::Enum(e) => enums.push(e),
                Declaration::Scalar(s) => scalars.push(s),
                Declaration::Interface(i) => interfaces.push(i),
            }
        }

        let mut records = keep_first(records, |r: &Record| &r.name);
        let mut enums = keep_first(enums, |e: &Enumeration| &e.name);
        let mut scalars = keep_first(scalars, |s: &ScalarAlias| &s.name);
        let mut interfaces = keep_first(interfaces, |i: &Interface| &i.name);

        records.sort_by(|a, b| a.name.cmp(&b.name));
        enums.sort_by(|a, b| a.name.cmp(&b.name));
        scalars.sort_by(|a, b| a.name.cmp(&b.name));
        interfaces.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            records,
            enums,
            scalars,
            interfaces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TypeConfig;
    use crate::expand::resolve_schema_types;
    use crate::schema::{Schema, TypeRef};
    use crate::test_helpers::{fixture_schema, type_config};

    fn package_with(types: Vec<TypeConfig>) -> PackageConfig {
        PackageConfig {
            name: "test".to_string(),
            types,
            ..Default::default()
        }
    }

    fn declarations(schema: &Schema, package: &PackageConfig) -> TypeDeclarations {
        let expanded = resolve_schema_types(schema, package);
        TypeDeclarations::from_declarations(project_types(package, &expanded))
    }

    #[test]
    fn test_object_record() {
        let schema = fixture_schema();
        let package = package_with(vec![type_config("CloudLinkedAccount")]);
        let decls = declarations(&schema, &package);

        let account = decls
            .records
            .iter()
            .find(|r| r.name == "CloudLinkedAccount")
            .unwrap();
        let field_names: Vec<_> = account.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            field_names,
            vec!["AuthLabel", "CreatedAt", "ID", "Name", "NrAccountID", "Provider"]
        );

        let created_at = &account.fields[1];
        assert_eq!(created_at.type_expr, "EpochSeconds");
        assert_eq!(created_at.tag_key, "createdAt");
        assert_eq!(created_at.tags, "`json:\"createdAt,omitempty\"`");
        assert!(!account.special_unmarshal);
        assert!(account.implements.is_empty());
    }

    #[test]
    fn test_interface_completeness() {
        let schema = fixture_schema();
        let package = package_with(vec![type_config("EntityOutline")]);
        let decls = declarations(&schema, &package);

        assert_eq!(decls.interfaces.len(), 1);
        let interface = &decls.interfaces[0];
        assert_eq!(interface.name, "EntityOutline");
        assert_eq!(interface.possible_types.len(), 3);
        assert_eq!(
            interface.possible_types[0],
            PossibleType {
                graphql_name: "ApmApplicationEntityOutline".to_string(),
                emitted_name: "ApmApplicationEntityOutline".to_string(),
            }
        );

        for implementer in [
            "ApmApplicationEntityOutline",
            "BrowserApplicationEntityOutline",
            "DashboardEntityOutline",
        ] {
            let record = decls.records.iter().find(|r| r.name == implementer).unwrap();
            assert!(
                record.implements.contains(&"EntityOutline".to_string()),
                "{implementer} should implement EntityOutline"
            );
        }

        // The interface also gets a concrete record implementing itself
        let own = decls
            .records
            .iter()
            .find(|r| r.name == "EntityOutline")
            .unwrap();
        assert_eq!(own.implements, vec!["EntityOutline"]);
    }

    #[test]
    fn test_special_unmarshal_for_interface_fields() {
        let t = Type::builder()
            .kind(Kind::Object)
            .name("Holder")
            .fields(vec![Field::builder()
                .name("entities")
                .type_ref(TypeRef::non_null(TypeRef::list(TypeRef::named(
                    Kind::Interface,
                    "EntityOutline",
                ))))
                .build()])
            .build();

        let decls = project_type(&t, &PackageConfig::default(), &[]);
        let Declaration::Record(record) = &decls[0] else {
            panic!("expected a record");
        };

        assert!(record.special_unmarshal);
        assert_eq!(record.fields[0].type_expr, "[]EntityOutlineInterface");
        assert!(record.fields[0].is_interface);
        assert!(record.fields[0].is_list);
    }

    #[test]
    fn test_input_object_uses_input_fields() {
        let schema = fixture_schema();
        let package = package_with(vec![type_config("CloudLinkCloudAccountsInput")]);
        let decls = declarations(&schema, &package);

        let input = decls
            .records
            .iter()
            .find(|r| r.name == "CloudLinkCloudAccountsInput")
            .unwrap();
        assert_eq!(input.fields.len(), 2);
        assert_eq!(input.fields[0].name, "Aws");
        assert_eq!(input.fields[0].type_expr, "[]CloudAwsLinkAccountInput");
    }

    #[test]
    fn test_enum_values_sorted() {
        let schema = fixture_schema();
        let package = package_with(vec![type_config("CloudMutationErrorType")]);
        let decls = declarations(&schema, &package);

        assert_eq!(decls.enums.len(), 1);
        let values: Vec<_> = decls.enums[0].values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(values, vec!["INVALID_INPUT", "NOT_FOUND", "UNAUTHORIZED"]);
    }

    #[test]
    fn test_scalars() {
        let schema = fixture_schema();
        let package = package_with(vec![
            TypeConfig {
                name: "EpochSeconds".to_string(),
                create_as: Some("int".to_string()),
                ..Default::default()
            },
            type_config("EntityGuid"),
            type_config("Int"),
            type_config("String"),
        ]);
        let decls = declarations(&schema, &package);

        // Native scalars never become aliases
        assert_eq!(
            decls.scalars,
            vec![
                ScalarAlias {
                    name: "EntityGuid".to_string(),
                    description: "An encoded Entity GUID.".to_string(),
                    type_expr: "string".to_string(),
                },
                ScalarAlias {
                    name: "EpochSeconds".to_string(),
                    description: "The `EpochSeconds` scalar represents the number of seconds since the Unix epoch.".to_string(),
                    type_expr: "int".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_scalar_config_first_wins() {
        let schema = fixture_schema();
        let package = package_with(vec![
            TypeConfig {
                name: "EpochSeconds".to_string(),
                create_as: Some("int".to_string()),
                ..Default::default()
            },
            TypeConfig {
                name: "EpochSeconds".to_string(),
                create_as: Some("float64".to_string()),
                skip_type_create: true,
                ..Default::default()
            },
        ]);
        let decls = declarations(&schema, &package);

        assert_eq!(decls.scalars.len(), 1);
        assert_eq!(decls.scalars[0].type_expr, "int");
    }

    #[test]
    fn test_skip_type_create() {
        let schema = fixture_schema();
        let package = package_with(vec![TypeConfig {
            name: "EntityGuid".to_string(),
            skip_type_create: true,
            ..Default::default()
        }]);
        let decls = declarations(&schema, &package);

        assert!(decls.scalars.is_empty());
    }

    #[test]
    fn test_union_is_a_projection_gap() {
        let schema = fixture_schema();
        let package = package_with(vec![type_config("SearchResult")]);
        let decls = declarations(&schema, &package);

        // The union itself is skipped; its members still project
        assert!(decls.records.iter().all(|r| r.name != "SearchResult"));
        assert!(decls.records.iter().any(|r| r.name == "User"));
        assert!(decls.records.iter().any(|r| r.name == "CloudProvider"));
    }

    #[test]
    fn test_declarations_deterministic() {
        let schema = fixture_schema();
        let package = package_with(vec![
            type_config("EntityOutline"),
            type_config("CloudLinkAccountPayload"),
        ]);

        let expanded = resolve_schema_types(&schema, &package);
        let mut reversed = expanded.clone();
        reversed.reverse();

        let forward = TypeDeclarations::from_declarations(project_types(&package, &expanded));
        let backward = TypeDeclarations::from_declarations(project_types(&package, &reversed));
        assert_eq!(forward, backward);

        let names: Vec<_> = forward.records.iter().map(|r| r.name.clone()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_duplicate_declarations_keep_first() {
        let first = Record {
            name: "Actor".to_string(),
            description: "first".to_string(),
            ..Default::default()
        };
        let second = Record {
            name: "Actor".to_string(),
            description: "second".to_string(),
            ..Default::default()
        };

        let decls = TypeDeclarations::from_declarations(vec![
            Declaration::Record(first),
            Declaration::Record(second),
        ]);
        assert_eq!(decls.records.len(), 1);
        assert_eq!(decls.records[0].description, "first");
    }
}

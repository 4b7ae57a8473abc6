// ABOUTME: Builds minimal response records for configured query paths
// ABOUTME: Keeps only fields reachable from the query plus one top-level wrapper per endpoint

use crate::config::{PackageConfig, QueryConfig};
use crate::constants::markers;
use crate::error::GenerateError;
use crate::lang::types::{implemented_interfaces, record_field, sort_fields};
use crate::lang::{Record, RecordField};
use crate::schema::{Field, Kind, Schema, Type};

fn contains_type(types: &[&Type], name: &str) -> bool {
    types.iter().any(|t| t.name == name)
}

/// Record for a path type holding only fields typed by an expanded type or
/// by another type on the same path.
fn constrained_record(
    t: &Type,
    chain: &[&Type],
    package: &PackageConfig,
    expanded: &[&Type],
) -> Record {
    let kept: Vec<&Field> = t
        .fields
        .iter()
        .filter(|f| {
            let type_name = f.type_ref.type_name();
            contains_type(expanded, type_name) || contains_type(chain, type_name)
        })
        .collect();

    let mut fields: Vec<RecordField> = kept.iter().map(|f| record_field(f, package)).collect();
    sort_fields(&mut fields);

    Record {
        name: t.exported_name(),
        description: t.description().to_string(),
        fields,
        implements: implemented_interfaces(t, expanded),
        special_unmarshal: kept
            .iter()
            .any(|f| f.type_ref.kinds().contains(&Kind::Interface)),
    }
}

/// Top-level decoding target for one endpoint's raw response
fn endpoint_wrapper(query: &QueryConfig, endpoint: &str, first: &Type) -> Record {
    let first_segment = query.path.first().cloned().unwrap_or_default();
    let first_name = first.exported_name();

    Record {
        name: format!("{}{}", endpoint, markers::RESPONSE_SUFFIX),
        fields: vec![RecordField {
            name: first_name.clone(),
            type_expr: first_name.clone(),
            type_name: first_name,
            tags: format!("`json:\"{}\"`", first_segment),
            tag_key: first_segment,
            ..Default::default()
        }],
        ..Default::default()
    }
}

// Path types shared by several queries become one record carrying the union
// of their fields.
fn merge_record(records: &mut Vec<Record>, record: Record) {
    match records.iter_mut().find(|r| r.name == record.name) {
        Some(existing) => {
            for field in record.fields {
                if !existing.fields.iter().any(|f| f.name == field.name) {
                    existing.fields.push(field);
                }
            }
            sort_fields(&mut existing.fields);
            for interface in record.implements {
                if !existing.implements.contains(&interface) {
                    existing.implements.push(interface);
                }
            }
            existing.special_unmarshal |= record.special_unmarshal;
        }
        None => records.push(record),
    }
}

/// Response records for every configured query.
///
/// A path that does not resolve against the schema aborts generation.
pub fn constrained_response_records(
    schema: &Schema,
    package: &PackageConfig,
    expanded: &[&Type],
) -> Result<Vec<Record>, GenerateError> {
    let mut records = Vec::new();

    for query in &package.queries {
        let chain = schema.lookup_query_types_by_field_path(&query.path)?;

        for t in &chain {
            if contains_type(expanded, &t.name) {
                continue;
            }
            merge_record(&mut records, constrained_record(t, &chain, package, expanded));
        }

        if let Some(first) = chain.first() {
            for endpoint in &query.endpoints {
                records.push(endpoint_wrapper(query, &endpoint.name, first));
            }
        }
    }

    Ok(records)
}

// ABOUTME: Builds depth-bounded GraphQL query and mutation documents
// ABOUTME: Declares variables for path and endpoint arguments and selects reachable fields

use crate::error::GenerateError;
use crate::schema::{Field, Kind, Schema, Type};

fn indent(level: usize) -> String {
    "\t".repeat(level)
}

/// Variable declarations for a list of arguments, e.g. `($id: Int!, )`
fn variable_declarations(args: &[&Field]) -> String {
    if args.is_empty() {
        return String::new();
    }

    let mut out = String::from("(\n");
    for arg in args {
        out.push_str(&format!(
            "\t${}: {},\n",
            arg.name,
            arg.type_ref.to_graphql()
        ));
    }
    out.push(')');
    out
}

/// Argument list passing each argument its same-named variable
fn argument_list(field: &Field, level: usize) -> String {
    if field.args.is_empty() {
        return String::new();
    }

    let mut out = String::from("(\n");
    for arg in &field.args {
        out.push_str(&format!("{}{}: ${},\n", indent(level + 1), arg.name, arg.name));
    }
    out.push_str(&indent(level));
    out.push(')');
    out
}

fn is_selectable(field: &Field) -> bool {
    !field.args.iter().any(|a| a.type_ref.is_required())
}

/// Selection lines for a type, descending at most `depth` levels.
///
/// Fields requiring arguments are skipped and object fields whose own
/// selection would be empty are dropped.
fn selection_lines(schema: &Schema, t: &Type, depth: usize, level: usize) -> Vec<String> {
    if depth == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let is_abstract = matches!(t.kind, Kind::Interface | Kind::Union);
    if is_abstract {
        lines.push(format!("{}__typename", indent(level)));
    }

    for field in t.fields.iter().filter(|f| is_selectable(f)) {
        match field.type_ref.terminal_kind() {
            Kind::Scalar | Kind::Enum => {
                lines.push(format!("{}{}", indent(level), field.name));
            }
            Kind::Object | Kind::Interface | Kind::Union if depth > 1 => {
                let Some(child) = schema.type_by_name(field.type_ref.type_name()) else {
                    continue;
                };
                let nested = selection_lines(schema, child, depth - 1, level + 1);
                if nested.is_empty() {
                    continue;
                }
                lines.push(format!("{}{} {{", indent(level), field.name));
                lines.extend(nested);
                lines.push(format!("{}}}", indent(level)));
            }
            _ => {}
        }
    }

    if is_abstract {
        for possible in &t.possible_types {
            let Some(concrete) = schema.type_by_name(possible.type_name()) else {
                continue;
            };
            let nested = selection_lines(schema, concrete, depth, level + 1);
            if nested.is_empty() {
                continue;
            }
            lines.push(format!("{}... on {} {{", indent(level), concrete.name));
            lines.extend(nested);
            lines.push(format!("{}}}", indent(level)));
        }
    }

    lines
}

/// Selection set for a field's return type, or nothing for leaf types
fn selection_set(schema: &Schema, field: &Field, depth: usize, level: usize) -> String {
    if matches!(field.type_ref.terminal_kind(), Kind::Scalar | Kind::Enum) {
        return String::new();
    }

    let mut lines = schema
        .type_by_name(field.type_ref.type_name())
        .map(|t| selection_lines(schema, t, depth, level + 1))
        .unwrap_or_default();
    if lines.is_empty() {
        lines.push(format!("{}__typename", indent(level + 1)));
    }

    format!(" {{\n{}\n{}}}", lines.join("\n"), indent(level))
}

/// Query document selecting `endpoint` on the last type of a resolved path.
///
/// Arguments of every field along the path and of the endpoint become
/// variables of the operation.
pub fn endpoint_document(
    schema: &Schema,
    chain: &[&Type],
    path: &[String],
    endpoint: &str,
    max_depth: usize,
) -> Result<String, GenerateError> {
    let mut containing = schema
        .query_type()
        .ok_or_else(|| GenerateError::TypeNotFound("query root".to_string()))?;

    let mut path_fields = Vec::with_capacity(path.len());
    for (segment, next) in path.iter().zip(chain.iter()) {
        let field = containing
            .field(segment)
            .ok_or_else(|| GenerateError::UnresolvedPath {
                path: path.join("."),
                segment: segment.clone(),
            })?;
        path_fields.push(field);
        containing = *next;
    }

    let endpoint_field =
        containing
            .field(endpoint)
            .ok_or_else(|| GenerateError::EndpointNotFound {
                endpoint: endpoint.to_string(),
                type_name: containing.name.clone(),
            })?;

    let variables: Vec<&Field> = path_fields
        .iter()
        .chain(std::iter::once(&endpoint_field))
        .flat_map(|f| f.args.iter())
        .collect();

    let mut parts: Vec<String> = path_fields
        .iter()
        .map(|f| format!("{}{} {{", f.name, argument_list(f, 0)))
        .collect();
    parts.push(format!(
        "{}{}{}",
        endpoint_field.name,
        argument_list(endpoint_field, 0),
        selection_set(schema, endpoint_field, max_depth, 0)
    ));

    Ok(format!(
        "query{} {{ {}{} }}",
        variable_declarations(&variables),
        parts.join(" "),
        " }".repeat(path_fields.len())
    ))
}

/// Mutation document calling `field` and selecting its result
pub fn mutation_document(schema: &Schema, field: &Field, max_depth: usize) -> String {
    let variables: Vec<&Field> = field.args.iter().collect();

    format!(
        "mutation{} {{\n\t{}{}{}\n}}",
        variable_declarations(&variables),
        field.name,
        argument_list(field, 1),
        selection_set(schema, field, max_depth, 1)
    )
}

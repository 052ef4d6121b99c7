/// JSON-schema body resolver
///
/// YApi stores request/response bodies as JSON-schema-ish documents
/// (`type` / `properties` / `items` / `required`). This resolver walks that
/// document and renders one `export interface` per object-like node.

use serde_json::Value;

use crate::models::InterfaceDetail;

use super::naming::{interface_base_name, ts_interface_name};
use super::Side;

const NO_DESCRIPTION: &str = "no description";

/// One resolved schema field
#[derive(Debug, Clone)]
enum Field {
    Atom {
        key: String,
        ty: String,
        required: bool,
        description: String,
    },
    Object {
        key: String,
        required: bool,
        description: String,
        is_array: bool,
        fields: Vec<Field>,
    },
}

/// Render the TS declarations for one side of an interface
pub fn render(side: Side, detail: &InterfaceDetail, schema: &Value) -> String {
    let base = interface_base_name(&detail.path);
    let root_name = ts_interface_name(&base, side.key());

    let fields = if schema_type(schema) == Some("object") {
        collect_fields(schema)
    } else {
        Vec::new()
    };

    let mut out = format!("// {}\n", detail.title);
    render_interface(&mut out, &base, &root_name, &fields);
    out
}

fn render_interface(out: &mut String, base: &str, name: &str, fields: &[Field]) {
    let mut nested: Vec<(String, &Vec<Field>)> = Vec::new();

    out.push_str(&format!("export interface {name} {{\n"));
    for field in fields {
        match field {
            Field::Atom {
                key,
                ty,
                required,
                description,
            } => {
                let optional = if *required { "" } else { "?" };
                out.push_str(&format!("    // {description}\n    {key}{optional}: {ty}\n"));
            }
            Field::Object {
                key,
                required,
                description,
                is_array,
                fields,
            } => {
                let optional = if *required { "" } else { "?" };
                let array_suffix = if *is_array { "[]" } else { "" };
                let nested_name = ts_interface_name(base, key);
                out.push_str(&format!(
                    "    // {description}\n    {key}{optional}: {nested_name}{array_suffix}\n"
                ));
                nested.push((nested_name, fields));
            }
        }
    }
    out.push_str("}\n");

    for (nested_name, nested_fields) in nested {
        render_interface(out, base, &nested_name, nested_fields);
    }
}

/// Walk `properties`, resolving each entry into a field
fn collect_fields(schema: &Value) -> Vec<Field> {
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Vec::new();
    };
    let required_list = schema.get("required");

    properties
        .iter()
        .filter_map(|(key, value)| {
            let required = is_required(key, required_list);
            let description = field_description(value);
            let key = field_key(key);

            match schema_type(value) {
                Some("object") => Some(Field::Object {
                    key,
                    required,
                    description,
                    is_array: false,
                    fields: collect_fields(value),
                }),
                Some("array") => {
                    let items = value.get("items").unwrap_or(&Value::Null);
                    Some(Field::Object {
                        key,
                        required,
                        description,
                        is_array: true,
                        fields: collect_fields(items),
                    })
                }
                Some(atom) => Some(Field::Atom {
                    key,
                    ty: ts_atom_type(atom),
                    required,
                    description,
                }),
                // Untyped nodes carry nothing renderable
                None => None,
            }
        })
        .collect()
}

fn schema_type(value: &Value) -> Option<&str> {
    value.get("type").and_then(Value::as_str)
}

/// JSON-schema scalar type -> TS type
fn ts_atom_type(raw: &str) -> String {
    match raw {
        "integer" => "number".to_string(),
        "string" | "number" | "boolean" => raw.to_string(),
        _ => "any".to_string(),
    }
}

fn is_required(key: &str, required_list: Option<&Value>) -> bool {
    required_list
        .and_then(Value::as_array)
        .map(|list| list.iter().any(|entry| entry.as_str() == Some(key)))
        .unwrap_or(false)
}

fn field_description(value: &Value) -> String {
    value
        .get("description")
        .and_then(Value::as_str)
        .map(|desc| desc.replace('\n', ""))
        .filter(|desc| !desc.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

fn field_key(raw: &str) -> String {
    if raw.is_empty() {
        "unknownName".to_string()
    } else {
        raw.to_string()
    }
}

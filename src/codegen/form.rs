/// Form/query field resolver
///
/// GET queries and form-encoded POST bodies arrive as flat field lists
/// (`name` / `type` / `required` / `desc`), not as a JSON schema.

use serde_json::Value;

use crate::models::InterfaceDetail;

use super::naming::{interface_base_name, sanitize_ident, ts_interface_name};
use super::Side;

const NO_DESCRIPTION: &str = "no description";

/// Render the TS declaration for a flat field list
pub fn render(side: Side, detail: &InterfaceDetail, fields: &Value) -> String {
    let base = interface_base_name(&detail.path);
    let name = ts_interface_name(&base, side.key());

    let mut out = format!("// {}\nexport interface {} {{\n", detail.title, name);

    if let Some(entries) = fields.as_array() {
        for entry in entries {
            let key = field_name(entry);
            let ty = field_type(entry);
            let description = field_description(entry);
            let optional = if field_required(entry) { "" } else { "?" };

            out.push_str(&format!("    // {description}\n    {key}{optional}: {ty}\n"));
        }
    }

    out.push_str("}\n");
    out
}

fn field_name(entry: &Value) -> String {
    match entry.get("name").and_then(Value::as_str) {
        Some(name) if !sanitize_ident(name).is_empty() => sanitize_ident(name),
        _ => "unknownName".to_string(),
    }
}

/// Form field type -> TS type; upstream only distinguishes text from file
fn field_type(entry: &Value) -> String {
    match entry.get("type").and_then(Value::as_str) {
        Some("text") => "string".to_string(),
        Some(_) => "any".to_string(),
        None => "string".to_string(),
    }
}

/// Upstream encodes the required flag as the string "1"
fn field_required(entry: &Value) -> bool {
    entry.get("required").and_then(Value::as_str) == Some("1")
}

fn field_description(entry: &Value) -> String {
    entry
        .get("desc")
        .and_then(Value::as_str)
        .map(|desc| desc.replace('\n', ""))
        .filter(|desc| !desc.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail(path: &str, title: &str) -> InterfaceDetail {
        InterfaceDetail {
            _id: 1,
            path: path.to_string(),
            project_id: 77,
            title: title.to_string(),
            catid: 5,
            method: "GET".to_string(),
            req_body_other: None,
            req_query: None,
            req_params: None,
            req_body_form: None,
            req_body_type: None,
            res_body: None,
        }
    }

    #[test]
    fn test_render_query_fields() {
        let fields = json!([
            { "name": "user_id", "type": "text", "required": "1", "desc": "user id" },
            { "name": "avatar", "type": "file" }
        ]);

        let ts = render(Side::Request, &detail("/api/user/info", "user info"), &fields);

        assert!(ts.contains("export interface infoRequest {"));
        assert!(ts.contains("    userid: string\n"), "{ts}");
        assert!(ts.contains("    avatar?: any\n"), "{ts}");
        assert!(ts.contains("// user id"));
        assert!(ts.contains("// no description"));
    }

    #[test]
    fn test_render_empty_field_list() {
        let ts = render(Side::Request, &detail("/api/ping", "ping"), &json!([]));
        assert!(ts.contains("export interface pingRequest {\n}\n"));
    }
}

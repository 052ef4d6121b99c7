/// TypeScript type generation
///
/// Turns a fetched `InterfaceDetail` into `export interface` declarations:
/// a request type derived from the query/form/body definition and a
/// response type derived from the response JSON schema.

pub mod form;
pub mod json;
pub mod naming;

use serde_json::Value;

use crate::error::{ForgeError, Result};
use crate::models::InterfaceDetail;
use crate::util::is_empty;

/// Which side of the interface a declaration describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Request,
    Response,
}

impl Side {
    pub fn key(self) -> &'static str {
        match self {
            Side::Request => "request",
            Side::Response => "response",
        }
    }
}

/// How the request body is encoded upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Form,
    Json,
}

/// Generate the full TS declaration block for one interface
///
/// The request declaration comes first, then the response declaration,
/// separated by a blank line. An interface without a response body is
/// rejected - there is nothing meaningful to generate.
pub fn generate_interface_types(detail: &InterfaceDetail) -> Result<String> {
    let res_body = detail
        .res_body
        .as_deref()
        .filter(|body| !body.is_empty())
        .ok_or_else(|| ForgeError::EmptyResponseBody {
            title: detail.title.clone(),
        })?;

    let response_ts = json::render(Side::Response, detail, &parse_schema(res_body));

    let request_ts = if detail.method == "POST" {
        match request_body_kind(detail) {
            BodyKind::Json => {
                let body = detail.req_body_other.as_deref().unwrap_or("");
                let schema = parse_schema(body);
                if is_empty(&schema) {
                    // Declared json but carrying no schema: fall back to
                    // whatever flat fields the interface defines
                    form::render(Side::Request, detail, &form_fields(detail))
                } else {
                    json::render(Side::Request, detail, &schema)
                }
            }
            BodyKind::Form => form::render(Side::Request, detail, &form_fields(detail)),
        }
    } else {
        // Non-POST requests carry their parameters as a flat field list
        form::render(Side::Request, detail, &form_fields(detail))
    };

    Ok(format!("{request_ts}\n{response_ts}"))
}

/// Schema strings that fail to parse resolve to an empty declaration
fn parse_schema(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or(Value::Null)
}

fn request_body_kind(detail: &InterfaceDetail) -> BodyKind {
    match detail.req_body_type.as_deref() {
        Some("form") | None => BodyKind::Form,
        Some(_) => BodyKind::Json,
    }
}

/// First populated field source wins: body form, then query, then params
fn form_fields(detail: &InterfaceDetail) -> Value {
    for source in [
        &detail.req_body_form,
        &detail.req_query,
        &detail.req_params,
    ] {
        if let Some(fields) = source {
            if !fields.is_empty() {
                return Value::Array(fields.clone());
            }
        }
    }
    Value::Array(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_detail() -> InterfaceDetail {
        InterfaceDetail {
            _id: 901,
            path: "/api/user/login".to_string(),
            project_id: 77,
            title: "login".to_string(),
            catid: 5,
            method: "GET".to_string(),
            req_body_other: None,
            req_query: None,
            req_params: None,
            req_body_form: None,
            req_body_type: None,
            res_body: Some(
                json!({
                    "type": "object",
                    "properties": { "token": { "type": "string" } }
                })
                .to_string(),
            ),
        }
    }

    #[test]
    fn test_get_interface_uses_query_fields() {
        let mut detail = base_detail();
        detail.req_query = Some(vec![json!({
            "name": "code",
            "type": "text",
            "required": "1"
        })]);

        let ts = generate_interface_types(&detail).unwrap();

        assert!(ts.contains("export interface loginRequest {"));
        assert!(ts.contains("    code: string\n"), "{ts}");
        assert!(ts.contains("export interface loginResponse {"));
        assert!(ts.contains("    token?: string\n"), "{ts}");
        let req_pos = ts.find("loginRequest").unwrap();
        let res_pos = ts.find("loginResponse").unwrap();
        assert!(req_pos < res_pos, "request block comes first");
    }

    #[test]
    fn test_post_json_interface_resolves_body_schema() {
        let mut detail = base_detail();
        detail.method = "POST".to_string();
        detail.req_body_type = Some("json".to_string());
        detail.req_body_other = Some(
            json!({
                "type": "object",
                "required": ["password"],
                "properties": { "password": { "type": "string" } }
            })
            .to_string(),
        );

        let ts = generate_interface_types(&detail).unwrap();
        assert!(ts.contains("    password: string\n"), "{ts}");
    }

    #[test]
    fn test_post_json_without_schema_falls_back_to_fields() {
        let mut detail = base_detail();
        detail.method = "POST".to_string();
        detail.req_body_type = Some("json".to_string());
        detail.req_body_other = Some("{}".to_string());
        detail.req_query = Some(vec![json!({
            "name": "code",
            "type": "text",
            "required": "1"
        })]);

        let ts = generate_interface_types(&detail).unwrap();
        assert!(ts.contains("    code: string\n"), "{ts}");
    }

    #[test]
    fn test_post_form_interface_resolves_field_list() {
        let mut detail = base_detail();
        detail.method = "POST".to_string();
        detail.req_body_type = Some("form".to_string());
        detail.req_body_form = Some(vec![json!({
            "name": "file",
            "type": "file"
        })]);

        let ts = generate_interface_types(&detail).unwrap();
        assert!(ts.contains("    file?: any\n"), "{ts}");
    }

    #[test]
    fn test_missing_response_body_is_rejected() {
        let mut detail = base_detail();
        detail.res_body = None;

        let err = generate_interface_types(&detail).unwrap_err();
        assert!(matches!(err, ForgeError::EmptyResponseBody { .. }));
    }

    #[test]
    fn test_unparseable_response_schema_degrades_to_empty_interface() {
        let mut detail = base_detail();
        detail.res_body = Some("not json".to_string());

        let ts = generate_interface_types(&detail).unwrap();
        assert!(ts.contains("export interface loginResponse {\n}\n"), "{ts}");
    }
}

/// Wire shapes of the YApi server API
///
/// Field names match the upstream JSON exactly (`_id`, `catid`, ...), so
/// these types deserialize straight off the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope wrapping every upstream response
#[derive(Debug, Deserialize, Serialize)]
pub struct Upstream<T> {
    pub errcode: i64,
    pub errmsg: String,
    pub data: Option<T>,
}

/// Basic project information (`api/project/get`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectBaseInfo {
    pub _id: u32,
    #[serde(default)]
    pub desc: String,
    pub name: String,
}

/// Category menu entry (`api/interface/getCatMenu`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryMenuItem {
    pub _id: u32,
    pub name: String,
    /// Filled lazily once the category is expanded in the UI
    pub interfaces: Option<CategoryInterfaceList>,
}

/// Interfaces of one category (`api/interface/list_cat`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryInterfaceList {
    pub count: u32,
    pub total: u32,
    pub list: Vec<InterfaceSummary>,
}

/// Interface list row
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InterfaceSummary {
    pub _id: u32,
    pub catid: u32,
    pub title: String,
    pub path: String,
}

/// Full interface definition (`api/interface/get`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InterfaceDetail {
    pub _id: u32,
    pub path: String,
    pub project_id: u32,
    pub title: String,
    pub catid: u32,
    pub method: String,
    /// JSON-schema string of the request body, when body type is json
    pub req_body_other: Option<String>,
    pub req_query: Option<Vec<Value>>,
    pub req_params: Option<Vec<Value>>,
    pub req_body_form: Option<Vec<Value>>,
    /// "form" or "json"
    pub req_body_type: Option<String>,
    /// JSON-schema string of the response body
    pub res_body: Option<String>,
}

/// A fetched interface together with its generated TypeScript
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolvedInterface {
    pub interface: InterfaceDetail,
    pub ts_string: String,
}

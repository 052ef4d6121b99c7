/// Per-workspace project configuration (`yapi.json`)
///
/// Holds the connection settings, output paths, codegen templates and the
/// project -> category -> interface selection tree the user has browsed.

use serde::{Deserialize, Serialize};

/// Workspace configuration, persisted at the workspace root
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Base URL of the YApi server, e.g. "https://yapi.example.com/"
    #[serde(default)]
    pub base_url: String,

    /// Output directory for generated type declarations
    #[serde(default)]
    pub types_path: String,

    /// Directory holding generated request helpers (preview only)
    #[serde(default)]
    pub request_path: String,

    /// Template for request helper bodies
    #[serde(default)]
    pub request_template: String,

    /// Template prepended once to every generated file
    #[serde(default)]
    pub header_template: String,

    /// Template for generated file names
    #[serde(default)]
    pub file_name_template: String,

    /// Template for type import lines
    #[serde(default)]
    pub type_import_template: String,

    /// Registered YApi projects, in registration order
    #[serde(default)]
    pub project_list: Vec<Project>,
}

/// One registered YApi project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project access token
    pub token: String,

    /// Remote project identifier (kept as string, matching the wire form)
    pub project_id: String,

    pub project_name: Option<String>,

    pub categories: Vec<Category>,
}

/// One interface category inside a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub interfaces: Vec<Interface>,
}

/// One selectable API endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interface {
    pub id: String,
    pub name: Option<String>,
    pub path: Option<String>,
    /// Selection state in the UI tree
    pub lock: Option<bool>,
}

/// Partial update sent by the frontend settings form
///
/// Only present fields overwrite the stored config.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProjectConfigPatch {
    pub base_url: Option<String>,
    pub types_path: Option<String>,
    pub request_path: Option<String>,
    pub request_template: Option<String>,
    pub header_template: Option<String>,
    pub file_name_template: Option<String>,
    pub type_import_template: Option<String>,
}

impl ProjectConfig {
    /// Apply a partial update from the frontend
    pub fn merge_patch(&mut self, patch: ProjectConfigPatch) {
        if let Some(base_url) = patch.base_url {
            self.base_url = base_url;
        }
        if let Some(types_path) = patch.types_path {
            self.types_path = types_path;
        }
        if let Some(request_path) = patch.request_path {
            self.request_path = request_path;
        }
        if let Some(request_template) = patch.request_template {
            self.request_template = request_template;
        }
        if let Some(header_template) = patch.header_template {
            self.header_template = header_template;
        }
        if let Some(file_name_template) = patch.file_name_template {
            self.file_name_template = file_name_template;
        }
        if let Some(type_import_template) = patch.type_import_template {
            self.type_import_template = type_import_template;
        }
    }
}

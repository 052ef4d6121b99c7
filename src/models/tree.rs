/// Preview projections of generated artifacts

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One node of the generated-types directory tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTree {
    pub full_path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub children: Vec<FileTree>,
}

impl FileTree {
    /// A file node; empty directories are not leaves
    pub fn is_leaf(&self) -> bool {
        !self.is_dir
    }
}

/// One request helper file offered for preview and selective write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestFile {
    pub full_path: PathBuf,
    pub name: String,
    pub content: String,
    /// Selection flag toggled by the user before writing
    pub checked: bool,
}

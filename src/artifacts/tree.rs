/// Directory tree projection of generated artifacts

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::FileTree;

/// Scan a directory recursively into a `FileTree`
///
/// Hidden entries (dot files) are skipped; children are sorted by name so
/// the tree renders stably.
pub fn scan_tree(root: &Path) -> Result<FileTree> {
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());

    let mut node = FileTree {
        full_path: root.to_path_buf(),
        name,
        is_dir: root.is_dir(),
        children: Vec::new(),
    };

    if root.is_dir() {
        let mut entries: Vec<_> = fs::read_dir(root)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .map(|n| !n.to_string_lossy().starts_with('.'))
                    .unwrap_or(false)
            })
            .collect();
        entries.sort();

        for path in entries {
            node.children.push(scan_tree(&path)?);
        }
    }

    Ok(node)
}

/// Retain only subtrees containing a leaf whose name matches `key`
///
/// Returns whether this node survives the filter.
pub fn filter_tree(node: &mut FileTree, key: &str) -> bool {
    if node.is_leaf() {
        return node.name.contains(key);
    }

    node.children.retain_mut(|child| filter_tree(child, key));
    !node.children.is_empty()
}

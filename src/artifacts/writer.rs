/// Writes generated TypeScript declarations into the workspace

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{ProjectConfig, ResolvedInterface};
use crate::util::join_slash_path;

/// Target file for one interface: `<types_path>/<path segments>.ts`
pub fn types_file_path(source_path: &str, config: &ProjectConfig, interface_path: &str) -> PathBuf {
    let types_root = join_slash_path(Path::new(source_path), &config.types_path);
    let mut file = join_slash_path(&types_root, interface_path.trim_matches('/'));
    file.set_extension("ts");
    file
}

/// Write each resolved interface's declarations to disk
///
/// The config header template is prepended once per new file. A file that
/// already declares the block (matched on its first `export interface`
/// line) is left untouched, so re-running a batch never duplicates types.
/// Returns the number of files written.
pub fn write_types(
    source_path: &str,
    config: &ProjectConfig,
    resolved: &[ResolvedInterface],
) -> Result<usize> {
    let mut written = 0;

    for item in resolved {
        let target = types_file_path(source_path, config, &item.interface.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        if target.exists() {
            let existing = fs::read_to_string(&target)?;
            if let Some(marker) = declaration_marker(&item.ts_string) {
                if existing.contains(marker) {
                    warn!(
                        "Skipping {}: declaration already present",
                        target.display()
                    );
                    continue;
                }
            }
            fs::write(&target, format!("{existing}\n{}", item.ts_string))?;
        } else {
            let mut contents = String::new();
            if !config.header_template.is_empty() {
                contents.push_str(&config.header_template);
                contents.push('\n');
            }
            contents.push_str(&item.ts_string);
            fs::write(&target, contents)?;
        }

        debug!("Wrote {}", target.display());
        written += 1;
    }

    Ok(written)
}

/// First `export interface` line of a generated block
fn declaration_marker(ts_string: &str) -> Option<&str> {
    ts_string
        .lines()
        .find(|line| line.starts_with("export interface "))
}

/// Request helper file preview and selective write
///
/// Request helper code itself comes from the workspace tooling; this module
/// only surfaces the files for preview and writes back the user's checked
/// selection.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::RequestFile;

/// Collect every `.ts` file under `dir` as an unchecked preview entry
pub fn list_request_files(dir: &Path) -> Result<Vec<RequestFile>> {
    let mut files = Vec::new();
    collect(dir, &mut files)?;
    files.sort_by(|a, b| a.full_path.cmp(&b.full_path));
    Ok(files)
}

fn collect(dir: &Path, files: &mut Vec<RequestFile>) -> Result<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "ts") {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            files.push(RequestFile {
                content: fs::read_to_string(&path)?,
                full_path: path,
                name,
                checked: false,
            });
        }
    }

    Ok(())
}

/// Write the checked entries back to disk, returning how many were written
pub fn write_checked(files: &[RequestFile]) -> Result<usize> {
    let mut written = 0;

    for file in files.iter().filter(|file| file.checked) {
        if let Some(parent) = file.full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file.full_path, &file.content)?;
        debug!("Wrote {}", file.full_path.display());
        written += 1;
    }

    Ok(written)
}

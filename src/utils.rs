use std::fs;
use std::path::Path;

use jiff::Timestamp;

use crate::error::Result;

/// Current instant as an ISO-8601 timestamp string.
pub fn iso_now() -> String {
    Timestamp::now().to_string()
}

/// Ensure the parent directory of a path exists, creating it if necessary.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Write file atomically using temp file and rename.
///
/// The write is atomic: either the new content is fully written, or the
/// original file remains unchanged.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

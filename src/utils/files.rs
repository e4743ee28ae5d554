use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Refuse messages files over this size (10MB); the agenda is an interactive
/// view and an export this large almost certainly points at the wrong file.
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Check the size of an open file before reading it.
///
/// The check runs on the handle that will be read, so the file cannot be
/// swapped out between the check and the read.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let size = file
        .metadata()
        .with_context(|| format!("Cannot stat messages file: {}", path.display()))?
        .len();

    if size > MAX_FILE_SIZE_BYTES {
        bail!(
            "Refusing to read {}: {} bytes exceeds the {} byte limit",
            path.display(),
            size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

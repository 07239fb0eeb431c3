use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Maximum catalog file size (10MB)
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Reject files larger than [`MAX_FILE_SIZE_BYTES`]
///
/// Takes an open handle so the size checked is the size of the file actually read.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

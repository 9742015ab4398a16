use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{BookmarkError, Result};

// Maximum size accepted for a bookmarks backup: 50MB
const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

fn io_error(path: &Path, source: std::io::Error) -> BookmarkError {
    BookmarkError::Io { path: path.to_path_buf(), source }
}

/// Reads a whole text file
///
/// The size check runs on the open handle so the file cannot be swapped between
/// the check and the read.
///
/// # Errors
///
/// Returns [`BookmarkError::Io`] if the file cannot be opened or read, is not UTF-8,
/// or is larger than 50MB.
pub fn read_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| io_error(path, e))?;
    validate_file_size(&file, path)?;

    let mut text = String::new();
    file.read_to_string(&mut text).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "read input file");
    Ok(text)
}

/// Writes `content` to `path`, creating or truncating it
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote output file");
    Ok(())
}

/// Rejects files above the 50MB limit, using an already-open handle
fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file.metadata().map_err(|e| io_error(path, e))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        return Err(io_error(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("file too large ({} bytes, max {} bytes)", file_size, MAX_FILE_SIZE_BYTES),
            ),
        ));
    }

    Ok(())
}

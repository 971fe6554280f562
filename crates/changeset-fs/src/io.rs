//! Whole-file text I/O
//!
//! Output files are read once and overwritten wholesale. Writes go through a
//! temp file in the same directory followed by a rename.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a crash never leaves a half-written
/// manifest behind. Missing parent directories are created.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file lives next to the target so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;
    drop(temp_file);

    if let Err(e) = fs::rename(&temp_path, &native_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&native_path, e));
    }

    tracing::debug!(path = %path, bytes = content.len(), "Wrote file");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content, treating a missing file as empty text.
///
/// Any other failure (permissions, invalid UTF-8, a directory in the way)
/// is still an error.
pub fn read_text_or_empty(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    match fs::read_to_string(&native_path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path, "File absent, starting from empty text");
            Ok(String::new())
        }
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Overwrite a file with text content atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

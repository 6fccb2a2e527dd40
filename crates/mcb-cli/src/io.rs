/// Input reading with size enforcement and UTF-8 validation.
///
/// All filesystem and stdin access of the `mcb` binary goes through
/// [`read_input`]; `mcb-core` never performs I/O.
use std::io::{ErrorKind, Read as _};
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

/// Reads the entire contents of `source` into a `String`.
///
/// Disk files are checked against `max_size` via their metadata before any
/// byte is read. Stdin is read through a reader capped one byte past
/// `max_size`, so an oversized stream is detected without buffering it all.
///
/// # Errors
///
/// Returns a [`CliError`] with exit code 2 if the source is missing,
/// unreadable, larger than `max_size`, or not valid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }
}

/// A short label for `source` used in messages: the path, or `"-"`.
pub fn label(source: &PathOrStdin) -> String {
    match source {
        PathOrStdin::Path(path) => path.display().to_string(),
        PathOrStdin::Stdin => "-".to_owned(),
    }
}

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();
    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    bytes_to_string(bytes, &path.display().to_string())
}

fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let mut buf: Vec<u8> = Vec::new();
    std::io::stdin()
        .lock()
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 > max_size {
        return Err(CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: max_size,
            actual: None,
        });
    }
    tracing::debug!(bytes = buf.len(), "read stdin");
    bytes_to_string(buf, "-")
}

fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

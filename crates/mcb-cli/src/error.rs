/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `mcb` binary. Every
/// variant maps to a stable exit code via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The input could not be read, parsed or
///   turned into a graph, so no basis computation was attempted.
/// - Exit code **1**: logical failure. The graph was valid but the basis
///   could not be completed.
use std::fmt;
use std::path::PathBuf;

use mcb_core::{BasisError, GraphBuildError};

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `mcb` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, otherwise the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, known for disk files only.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, otherwise the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Any other I/O error.
    IoError {
        /// `"-"` for stdin, `"stdout"`, or the filesystem path.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a well-formed graph document.
    ParseFailed {
        /// Parser message including line and column.
        detail: String,
    },

    /// The document parsed but does not describe a valid graph.
    InvalidGraph(GraphBuildError),

    // --- Exit code 1: logical failures ---
    /// The minimum cycle basis could not be built.
    BasisFailed(BasisError),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::InvalidGraph(_) => 2,

            Self::BasisFailed(_) => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ParseFailed { detail } => {
                format!("error: invalid graph document: {detail}")
            }
            Self::InvalidGraph(e) => format!("error: invalid graph: {e}"),
            Self::BasisFailed(e) => format!("error: {e}"),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGraph(e) => Some(e),
            Self::BasisFailed(e) => Some(e),
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. } => None,
        }
    }
}

impl From<GraphBuildError> for CliError {
    fn from(e: GraphBuildError) -> Self {
        Self::InvalidGraph(e)
    }
}

impl From<BasisError> for CliError {
    fn from(e: BasisError) -> Self {
        Self::BasisFailed(e)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

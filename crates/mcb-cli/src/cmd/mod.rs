/// Command module for the `mcb` CLI.
///
/// Each submodule implements one subcommand. Its `run` function takes the
/// already-read input text and writes its report to stdout.
use std::io::Write;

use crate::error::CliError;

pub mod basis;
pub mod candidates;
pub mod inspect;

/// Writes `value` as pretty-printed JSON followed by a newline.
pub(crate) fn write_json<W: Write, T: serde::Serialize>(
    w: &mut W,
    value: &T,
) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value).map_err(std::io::Error::other)?;
    writeln!(w)
}

/// Maps a failed write to stdout to a [`CliError`].
pub(crate) fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}

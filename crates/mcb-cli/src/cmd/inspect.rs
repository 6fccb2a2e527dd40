//! Implementation of `mcb inspect <file>`.
//!
//! Prints vertex, edge, self-loop and component counts together with the
//! cyclomatic number, i.e. the number of cycles any basis will contain.
use std::io::Write;

use crate::OutputFormat;
use crate::cmd::{stdout_error, write_json};
use crate::document::{GraphDocument, GraphSummary};
use crate::error::CliError;

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if the document is not a valid graph.
pub fn run(content: &str, source: &str, format: OutputFormat) -> Result<(), CliError> {
    let graph = GraphDocument::parse(content, source)?.into_graph()?;
    let summary = GraphSummary::new(&graph);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &summary),
        OutputFormat::Json => write_json(&mut out, &summary),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: Write>(w: &mut W, summary: &GraphSummary) -> std::io::Result<()> {
    writeln!(w, "vertices:          {}", summary.vertices)?;
    writeln!(w, "edges:             {}", summary.edges)?;
    writeln!(w, "self_loops:        {}", summary.self_loops)?;
    writeln!(w, "components:        {}", summary.components)?;
    writeln!(w, "cyclomatic_number: {}", summary.cyclomatic_number)
}

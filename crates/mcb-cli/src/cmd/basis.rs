//! Implementation of `mcb basis <file>`.
//!
//! Builds the graph, computes its minimum cycle basis and prints it:
//! one closed vertex path per line (`0-1-2-0`) in human mode, a single
//! [`BasisReport`] object in JSON mode.
//!
//! Exit codes: 0 = success, 1 = basis incomplete, 2 = bad input.
use std::io::Write;

use mcb_core::{Graph, MinimumCycleBasis};

use crate::OutputFormat;
use crate::cmd::{stdout_error, write_json};
use crate::document::{BasisReport, GraphDocument};
use crate::error::CliError;

/// Runs the `basis` command on the document text `content`.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if the document is not a valid
/// graph, and exit code 1 if the basis cannot be completed.
pub fn run(content: &str, source: &str, format: OutputFormat) -> Result<(), CliError> {
    let graph = GraphDocument::parse(content, source)?.into_graph()?;
    let basis = MinimumCycleBasis::new(&graph)?;
    tracing::info!(
        size = basis.size(),
        weight = basis.weight(),
        "computed minimum cycle basis"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_basis(&mut out, &graph, &basis, format).map_err(|e| stdout_error(&e))
}

fn write_basis<W: Write>(
    w: &mut W,
    graph: &Graph,
    basis: &MinimumCycleBasis,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => {
            for cycle in basis.cycles() {
                writeln!(w, "{cycle}")?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(w, &BasisReport::new(graph, basis)),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn render(json: &str, format: OutputFormat) -> String {
        let graph = GraphDocument::parse(json, "t")
            .expect("parse")
            .into_graph()
            .expect("graph");
        let basis = MinimumCycleBasis::new(&graph).expect("basis");
        let mut buf = Vec::new();
        write_basis(&mut buf, &graph, &basis, format).expect("write");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn human_output_is_one_path_per_line() {
        let out = render(
            r#"{"edges": [[0, 1], [1, 2], [2, 0], [2, 3], [3, 4], [4, 2]]}"#,
            OutputFormat::Human,
        );
        assert_eq!(out, "0-1-2-0\n2-3-4-2\n");
    }

    #[test]
    fn acyclic_graph_prints_nothing() {
        let out = render(r#"{"edges": [[0, 1], [1, 2]]}"#, OutputFormat::Human);
        assert!(out.is_empty());
    }

    #[test]
    fn json_output_reports_size_and_weight() {
        let out = render(
            r#"{"edges": [[0, 1], [1, 2], [2, 3], [3, 0], [0, 2]]}"#,
            OutputFormat::Json,
        );
        let v: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(v["size"], 2);
        assert_eq!(v["weight"], 6);
        assert_eq!(v["cyclomatic_number"], 2);
        assert_eq!(v["cycles"].as_array().map(Vec::len), Some(2));
    }
}

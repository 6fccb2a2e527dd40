//! Implementation of `mcb candidates <file> [--limit N]`.
//!
//! Prints the Horton candidate cycles in the exact order the basis
//! construction examines them. Human mode prints `length<TAB>path` per line;
//! JSON mode prints an array of `{length, path, edges}` objects.
use std::io::Write;

use mcb_core::HortonCandidates;

use crate::OutputFormat;
use crate::cmd::{stdout_error, write_json};
use crate::document::{CandidateEntry, GraphDocument};
use crate::error::CliError;

/// Runs the `candidates` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if the document is not a valid graph.
pub fn run(
    content: &str,
    source: &str,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let graph = GraphDocument::parse(content, source)?.into_graph()?;
    let candidates = HortonCandidates::new(&graph);
    let shown = limit.unwrap_or(usize::MAX).min(candidates.len());
    if shown < candidates.len() {
        tracing::info!(shown, total = candidates.len(), "candidate listing truncated");
    }

    let entries: Vec<CandidateEntry<'_>> = candidates.cycles()[..shown]
        .iter()
        .map(CandidateEntry::from)
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_entries(&mut out, &entries, format).map_err(|e| stdout_error(&e))
}

fn write_entries<W: Write>(
    w: &mut W,
    entries: &[CandidateEntry<'_>],
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => {
            for entry in entries {
                let path: Vec<String> = entry.path.iter().map(usize::to_string).collect();
                writeln!(w, "{}\t{}", entry.length, path.join("-"))?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(w, &entries),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use mcb_core::{Cycle, Graph};

    use super::*;

    #[test]
    fn human_lines_carry_length_and_path() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).expect("triangle");
        let c = Cycle::new(&g, vec![0, 1, 2, 0]).expect("cycle");
        let mut buf = Vec::new();
        write_entries(&mut buf, &[CandidateEntry::from(&c)], OutputFormat::Human)
            .expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "3\t0-1-2-0\n");
    }

    #[test]
    fn json_entries_list_edges() {
        let g = Graph::from_edges(2, &[(0, 1), (0, 1)]).expect("double bond");
        let c = Cycle::new(&g, vec![0, 1, 0]).expect("digon");
        let mut buf = Vec::new();
        write_entries(&mut buf, &[CandidateEntry::from(&c)], OutputFormat::Json)
            .expect("write");
        let v: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(v[0]["length"], 2);
        assert_eq!(v[0]["edges"], serde_json::json!([0, 1]));
    }
}

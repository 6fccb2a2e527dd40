//! JSON graph documents accepted on input and reports written on output.
//!
//! A graph is given either as an edge list
//!
//! ```json
//! {"vertices": 4, "edges": [[0, 1], [1, 2], [2, 3], [3, 0]]}
//! ```
//!
//! where `vertices` may be omitted (it then defaults to one more than the
//! largest endpoint), or as a symmetric adjacency list
//!
//! ```json
//! {"adjacency": [[1, 3], [0, 2], [1, 3], [2, 0]]}
//! ```
use mcb_core::{Cycle, Graph, MinimumCycleBasis};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// The raw input document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default)]
    vertices: Option<usize>,
    #[serde(default)]
    edges: Option<Vec<[usize; 2]>>,
    #[serde(default)]
    adjacency: Option<Vec<Vec<usize>>>,
}

impl GraphDocument {
    /// Parses a document from JSON text. `source` labels parse errors.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ParseFailed`] for malformed JSON, unknown keys, or
    /// a document that mixes or omits both graph forms.
    pub fn parse(content: &str, source: &str) -> Result<Self, CliError> {
        let doc: Self = serde_json::from_str(content).map_err(|e| CliError::ParseFailed {
            detail: format!("{source}: line {}, column {}: {e}", e.line(), e.column()),
        })?;

        let form_error = |detail: &str| CliError::ParseFailed {
            detail: format!("{source}: {detail}"),
        };
        match (doc.edges.is_some(), doc.adjacency.is_some()) {
            (true, true) => Err(form_error(
                "give either \"edges\" or \"adjacency\", not both",
            )),
            (false, false) => Err(form_error("missing \"edges\" or \"adjacency\"")),
            (false, true) if doc.vertices.is_some() => Err(form_error(
                "\"vertices\" is implied by the adjacency list length",
            )),
            (true, false) | (false, true) => Ok(doc),
        }
    }

    /// Builds the core graph.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidGraph`] for out-of-range endpoints or an
    /// asymmetric adjacency list, and [`CliError::ParseFailed`] when the
    /// vertex count is omitted and an endpoint leaves no room for it.
    pub fn into_graph(self) -> Result<Graph, CliError> {
        if let Some(adjacency) = self.adjacency {
            return Ok(Graph::from_adjacency(&adjacency)?);
        }
        let edges: Vec<(usize, usize)> = self
            .edges
            .unwrap_or_default()
            .into_iter()
            .map(|[u, v]| (u, v))
            .collect();
        let vertices = match self.vertices {
            Some(n) => n,
            None => edges
                .iter()
                .map(|&(u, v)| u.max(v).checked_add(1))
                .try_fold(0, |n, bound| bound.map(|b| n.max(b)))
                .ok_or_else(|| CliError::ParseFailed {
                    detail: "endpoint too large to derive \"vertices\"".to_owned(),
                })?,
        };
        Ok(Graph::from_edges(vertices, &edges)?)
    }
}

/// JSON report of a computed basis.
#[derive(Debug, Serialize)]
pub struct BasisReport {
    /// Number of cycles.
    pub size: usize,
    /// Total number of edges over all cycles.
    pub weight: usize,
    /// `m - n + c` of the input graph.
    pub cyclomatic_number: usize,
    /// Closed vertex paths, shortest first.
    pub cycles: Vec<Vec<usize>>,
}

impl BasisReport {
    /// Summarises `basis` computed for `graph`.
    pub fn new(graph: &Graph, basis: &MinimumCycleBasis) -> Self {
        Self {
            size: basis.size(),
            weight: basis.weight(),
            cyclomatic_number: graph.cyclomatic_number(),
            cycles: basis.paths(),
        }
    }
}

/// One entry of the candidate listing.
#[derive(Debug, Serialize)]
pub struct CandidateEntry<'a> {
    /// Number of edges.
    pub length: usize,
    /// Closed vertex path.
    pub path: &'a [usize],
    /// Edge ids in path order.
    pub edges: &'a [usize],
}

impl<'a> From<&'a Cycle> for CandidateEntry<'a> {
    fn from(cycle: &'a Cycle) -> Self {
        Self {
            length: cycle.length(),
            path: cycle.path(),
            edges: cycle.edges(),
        }
    }
}

/// JSON report of `mcb inspect`.
#[derive(Debug, Serialize)]
pub struct GraphSummary {
    /// Vertex count `n`.
    pub vertices: usize,
    /// Edge count `m`, parallel edges and self-loops included.
    pub edges: usize,
    /// Connected components `c`, isolated vertices included.
    pub components: usize,
    /// Self-loop count.
    pub self_loops: usize,
    /// `m - n + c`, the size of every cycle basis.
    pub cyclomatic_number: usize,
}

impl GraphSummary {
    /// Counts the structure of `graph`.
    pub fn new(graph: &Graph) -> Self {
        let self_loops = (0..graph.edge_count())
            .filter_map(|e| graph.endpoints(e))
            .filter(|&(u, v)| u == v)
            .count();
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            components: graph.component_count(),
            self_loops,
            cyclomatic_number: graph.cyclomatic_number(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn graph(json: &str) -> Result<Graph, CliError> {
        GraphDocument::parse(json, "test.json")?.into_graph()
    }

    #[test]
    fn edge_list_with_explicit_vertex_count() {
        let g = graph(r#"{"vertices": 5, "edges": [[0, 1], [1, 2], [2, 0]]}"#).expect("graph");
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn vertex_count_defaults_to_largest_endpoint() {
        let g = graph(r#"{"edges": [[0, 1], [1, 6]]}"#).expect("graph");
        assert_eq!(g.vertex_count(), 7);
    }

    #[test]
    fn maximal_endpoint_without_vertex_count_is_rejected() {
        let err = graph(r#"{"edges": [[0, 18446744073709551615]]}"#).expect_err("overflow");
        assert!(matches!(err, CliError::ParseFailed { .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("\"vertices\""), "{}", err.message());
    }

    #[test]
    fn empty_edge_list_is_the_empty_graph() {
        let g = graph(r#"{"edges": []}"#).expect("graph");
        assert_eq!(g.vertex_count(), 0);
    }

    #[test]
    fn adjacency_form() {
        let g = graph(r#"{"adjacency": [[1, 2], [0, 2], [0, 1]]}"#).expect("graph");
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.cyclomatic_number(), 1);
    }

    #[test]
    fn both_forms_are_rejected() {
        let err = graph(r#"{"edges": [], "adjacency": []}"#).expect_err("ambiguous");
        assert!(matches!(err, CliError::ParseFailed { .. }));
        assert!(err.message().contains("not both"), "{}", err.message());
    }

    #[test]
    fn missing_form_is_rejected() {
        let err = graph(r#"{"vertices": 3}"#).expect_err("no edges");
        assert!(err.message().contains("missing"), "{}", err.message());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = graph(r#"{"edges": [], "bonds": []}"#).expect_err("unknown key");
        assert!(err.message().contains("test.json: line 1"), "{}", err.message());
    }

    #[test]
    fn out_of_range_endpoint_is_an_invalid_graph() {
        let err = graph(r#"{"vertices": 2, "edges": [[0, 2]]}"#).expect_err("range");
        assert!(matches!(err, CliError::InvalidGraph(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn asymmetric_adjacency_is_an_invalid_graph() {
        let err = graph(r#"{"adjacency": [[1], []]}"#).expect_err("asymmetric");
        assert!(matches!(err, CliError::InvalidGraph(_)));
    }

    #[test]
    fn summary_counts_self_loops() {
        let g = graph(r#"{"edges": [[0, 0], [0, 1], [1, 2]]}"#).expect("graph");
        let s = GraphSummary::new(&g);
        assert_eq!(s.self_loops, 1);
        assert_eq!(s.components, 1);
        assert_eq!(s.cyclomatic_number, 1);
    }
}

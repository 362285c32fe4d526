// Graph bisection by minimizing an Ising energy with an external annealer
// (Isakov's simulated annealing solver, driven through lattice files).

mod bisection;
mod error;
mod ising;
mod lattice;
mod selection;
mod solver;
mod weighting;

pub use bisection::*;
pub use error::*;
pub use ising::*;
pub use lattice::*;
pub use selection::*;
pub use solver::*;
pub use weighting::*;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct GraphEdge {
    pub a: u32,
    pub b: u32,
}

/// An undirected, unweighted graph given by its edges.
///
/// Vertices are kept sorted ascending; their position in `vertices` is the spin index
/// used when the graph is encoded as an Ising problem.
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<u32>,
    edges: Vec<GraphEdge>,
    lookup: HashSet<(u32, u32)>,
}

impl Graph {
    /// Builds a graph from undirected edges. Edges may be given in any orientation but must
    /// not repeat, and self loops are rejected.
    pub fn from_edges(edges: &[(u32, u32)]) -> Result<Self> {
        let mut graph = Graph {
            vertices: vec![],
            edges: Vec::with_capacity(edges.len()),
            lookup: HashSet::with_capacity(edges.len()),
        };

        let mut seen = HashSet::new();
        for &(a, b) in edges {
            if a == b {
                return Err(BisectionError::InvalidEdge {
                    a,
                    b,
                    reason: "self loop",
                });
            }
            if graph.has_edge(a, b) {
                return Err(BisectionError::InvalidEdge {
                    a,
                    b,
                    reason: "edge is repeated",
                });
            }
            graph.edges.push(GraphEdge { a, b });
            graph.lookup.insert((a, b));
            for v in [a, b] {
                if seen.insert(v) {
                    graph.vertices.push(v);
                }
            }
        }
        graph.vertices.sort_unstable();

        Ok(graph)
    }

    /// Reads a plain edge list: one edge per line as two vertex numbers. Blank lines and
    /// lines starting with `%` or `#` are skipped.
    pub fn deserialize_edge_list<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);

        let mut edges = vec![];
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('%') || trimmed.starts_with('#') {
                continue;
            }
            let parts: Vec<&str> = trimmed.split_ascii_whitespace().collect();
            if parts.len() != 2 {
                return Err(BisectionError::InvalidGraphFile {
                    line: idx + 1,
                    reason: format!("expected 2 vertices, found {}", parts.len()),
                });
            }
            let mut ends = [0u32; 2];
            for (end, part) in ends.iter_mut().zip(parts) {
                *end = part
                    .parse::<u32>()
                    .map_err(|e| BisectionError::InvalidGraphFile {
                        line: idx + 1,
                        reason: format!("could not parse vertex {part:?}: {e}"),
                    })?;
            }
            edges.push((ends[0], ends[1]));
        }
        log::trace!("read {} edges", edges.len());

        Self::from_edges(&edges)
    }

    /// Vertices in ascending order. The position of a vertex is its spin index.
    pub fn vertices(&self) -> &[u32] {
        &self.vertices
    }

    /// Edges in the orientation they were given.
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Checks whether `a` and `b` are connected, regardless of the stored orientation.
    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        self.lookup.contains(&(a, b)) || self.lookup.contains(&(b, a))
    }

    /// Returns the number of edges incident to the given vertex.
    pub fn get_degree(&self, vx: u32) -> u32 {
        self.edges
            .iter()
            .filter(|e| e.a == vx || e.b == vx)
            .count() as u32
    }

    /// Counts the edges running between the two groups.
    pub fn calculate_edge_cut(&self, first: &[u32], second: &[u32]) -> u32 {
        let mut edge_cut = 0;
        for &a in first {
            for &b in second {
                if self.has_edge(a, b) {
                    edge_cut += 1;
                }
            }
        }
        edge_cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn vertices_are_sorted_endpoints() {
        let graph = Graph::from_edges(&[(0, 1), (1, 3), (2, 0)]).unwrap();
        assert_eq!(graph.vertices(), &[0, 1, 2, 3]);
        assert_eq!(graph.edges().len(), 3);
    }

    #[test]
    fn vertices_need_not_be_contiguous() {
        let graph = Graph::from_edges(&[(10, 4), (7, 10)]).unwrap();
        assert_eq!(graph.vertices(), &[4, 7, 10]);
        assert_eq!(graph.get_degree(10), 2);
        assert_eq!(graph.get_degree(4), 1);
        assert_eq!(graph.get_degree(5), 0);
    }

    #[test]
    fn edge_lookup_ignores_orientation() {
        let graph = Graph::from_edges(&[(0, 1), (1, 3), (2, 0)]).unwrap();
        assert!(graph.has_edge(0, 2));
        assert!(graph.has_edge(2, 0));
        assert!(graph.has_edge(3, 1));
        assert!(!graph.has_edge(0, 3));
    }

    #[test]
    fn degree_and_lookup_see_the_same_edges() {
        let graph = Graph::from_edges(&[(0, 1), (2, 3), (3, 0)]).unwrap();
        for e in graph.edges() {
            assert!(graph.has_edge(e.a, e.b));
            assert!(graph.has_edge(e.b, e.a));
        }
        let degree_sum: u32 = graph.vertices().iter().map(|&v| graph.get_degree(v)).sum();
        assert_eq!(degree_sum as usize, 2 * graph.edges().len());
        assert_eq!(graph.get_degree(0), 2);
        assert!(graph.has_edge(0, 3));
        assert_eq!(graph.calculate_edge_cut(&[0, 1], &[2, 3]), 1);
    }

    #[test]
    fn repeated_edges_are_rejected() {
        let err = Graph::from_edges(&[(0, 1), (1, 0)]).unwrap_err();
        assert!(matches!(err, BisectionError::InvalidEdge { a: 1, b: 0, .. }));

        let err = Graph::from_edges(&[(2, 2)]).unwrap_err();
        assert!(matches!(err, BisectionError::InvalidEdge { reason: "self loop", .. }));
    }

    #[test]
    fn edge_cut_counts_crossing_edges() {
        let graph = Graph::from_edges(&[(0, 1), (1, 3), (2, 0)]).unwrap();
        assert_eq!(graph.calculate_edge_cut(&[0, 2], &[1, 3]), 1);
        assert_eq!(graph.calculate_edge_cut(&[0, 3], &[1, 2]), 3);
        assert_eq!(graph.calculate_edge_cut(&[1, 2], &[0, 3]), 3);
    }

    #[test]
    fn reads_edge_list_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# example problem").unwrap();
        writeln!(file, "0 1").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "1 3").unwrap();
        writeln!(file, "% trailing comment").unwrap();
        writeln!(file, "2   0").unwrap();

        let graph = Graph::deserialize_edge_list(file.path()).unwrap();
        assert_eq!(graph.vertices(), &[0, 1, 2, 3]);
        assert!(graph.has_edge(0, 2));
    }

    #[test]
    fn edge_list_errors_name_the_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0 1").unwrap();
        writeln!(file, "1 x").unwrap();

        let err = Graph::deserialize_edge_list(file.path()).unwrap_err();
        assert!(matches!(err, BisectionError::InvalidGraphFile { line: 2, .. }));
    }
}

use crate::Graph;

/// How a scalar weight is assigned to every vertex before it is encoded as a spin.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum VertexWeighting {
    /// The vertex number itself is used as its weight.
    Identity,
    /// The number of edges incident to the vertex is used as its weight.
    Degree,
}

impl VertexWeighting {
    /// Both heuristics in the order they are tried. Earlier entries win ties.
    pub const ALL: [VertexWeighting; 2] = [VertexWeighting::Identity, VertexWeighting::Degree];

    /// Returns one weight per vertex, indexed like `graph.vertices()`.
    pub fn weights(self, graph: &Graph) -> Vec<f64> {
        match self {
            VertexWeighting::Identity => graph.vertices().iter().map(|&v| v as f64).collect(),
            VertexWeighting::Degree => graph
                .vertices()
                .iter()
                .map(|&v| graph.get_degree(v) as f64)
                .collect(),
        }
    }
}

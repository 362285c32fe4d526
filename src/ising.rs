use crate::{BisectionError, Graph, Result, VertexWeighting};
use std::collections::BTreeMap;

/// Largest number of spins the annealer can address.
pub const MAX_SPINS: usize = 2048;

/// Ising couplings (`i < j`) and biases (`i == j`) over spins `0..n`.
///
/// Only the upper triangle is ever stored. Pairs without an entry have a coefficient of zero.
#[derive(Clone, Debug, PartialEq)]
pub struct IsingProblem {
    n: usize,
    entries: BTreeMap<(usize, usize), f64>,
}

impl IsingProblem {
    /// Creates an empty problem over `n` spins.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 || n > MAX_SPINS {
            return Err(BisectionError::SizeLimitExceeded {
                vertices: n,
                max_vertex: n.saturating_sub(1) as u32,
                limit: MAX_SPINS,
            });
        }
        Ok(Self {
            n,
            entries: BTreeMap::new(),
        })
    }

    /// Encodes `graph` under the given vertex weighting.
    pub fn encode(graph: &Graph, weighting: VertexWeighting) -> Result<Self> {
        let max_vertex = graph.vertices().last().copied().unwrap_or(0);
        if graph.vertex_count() == 0
            || graph.vertex_count() > MAX_SPINS
            || max_vertex as usize >= MAX_SPINS
        {
            return Err(BisectionError::SizeLimitExceeded {
                vertices: graph.vertex_count(),
                max_vertex,
                limit: MAX_SPINS,
            });
        }
        Self::from_weights(&weighting.weights(graph))
    }

    /// Builds the problem with zero biases and couplings `w[i] * w[j] / n`.
    pub fn from_weights(weights: &[f64]) -> Result<Self> {
        let n = weights.len();
        let mut problem = Self::new(n)?;
        for i in 0..n {
            for j in i..n {
                let value = if i == j {
                    0.0
                } else {
                    weights[i] * weights[j] / n as f64
                };
                problem.set(i, j, value)?;
            }
        }
        log::trace!("encoded {} spins into {} entries", n, problem.entries.len());
        Ok(problem)
    }

    /// Stores the coefficient for `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<()> {
        if i > j {
            return Err(BisectionError::NotUpperTriangular { i, j });
        }
        if j >= self.n {
            return Err(BisectionError::SpinOutOfRange {
                i,
                j,
                spins: self.n,
            });
        }
        self.entries.insert((i, j), value);
        Ok(())
    }

    pub fn coefficient(&self, i: usize, j: usize) -> f64 {
        self.entries.get(&(i, j)).copied().unwrap_or(0.0)
    }

    pub fn spin_count(&self) -> usize {
        self.n
    }

    /// Iterates the stored entries in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.entries.iter().map(|(&k, &v)| (k, v))
    }
}

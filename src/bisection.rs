use crate::{
    parse_solver_output, write_lattice, Bisection, Graph, IsingProblem, Result, SelectionPolicy,
    Solver, VertexWeighting,
};
use std::path::PathBuf;

pub struct BisectionConfig {
    /// Where the lattice file handed to the solver is written. Reused by every run.
    pub lattice_path: PathBuf,
    /// Number of annealing sweeps per read.
    pub sweeps: u32,
    /// Number of independent annealing runs; bounds how many candidates come back.
    pub reads: u32,
    /// How a run picks its result among the equal-size candidates.
    pub selection: SelectionPolicy,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            lattice_path: PathBuf::from("IsakovSolver.lattice"),
            sweeps: 100,
            reads: 1000,
            selection: SelectionPolicy::FirstValid,
        }
    }
}

impl Graph {
    /// Splits the graph into two groups of equal size while trying to keep the edge cut low.
    /// Both vertex weightings are tried and the bisection with the smaller edge cut is returned,
    /// the identity weighting winning ties.
    pub fn partition_bisection<S: Solver + ?Sized>(
        &self,
        solver: &S,
        config: &BisectionConfig,
    ) -> Result<Bisection> {
        let identity = self.bisection_run(VertexWeighting::Identity, solver, config);
        let degree = self.bisection_run(VertexWeighting::Degree, solver, config);
        let best = choose_winner(identity, degree)?;
        log::info!(
            "bisection {:?} / {:?} with edge cut {}",
            best.first,
            best.second,
            best.edge_cut
        );
        Ok(best)
    }

    /// Encodes the graph under one weighting, solves it and selects a bisection from the
    /// returned candidates.
    pub fn bisection_run<S: Solver + ?Sized>(
        &self,
        weighting: VertexWeighting,
        solver: &S,
        config: &BisectionConfig,
    ) -> Result<Bisection> {
        log::debug!("{weighting:?} run on {} vertices", self.vertex_count());

        let problem = IsingProblem::encode(self, weighting)?;
        write_lattice(&problem, &config.lattice_path)?;

        let output = solver.solve(&config.lattice_path, config.sweeps, config.reads)?;
        let candidates = parse_solver_output(&output, self.vertex_count())?;
        log::debug!("{} returned {} candidates", solver.name(), candidates.len());

        let bisection = self.select_bisection(&candidates, config.selection)?;
        log::debug!("{weighting:?} run: edge cut {}", bisection.edge_cut);
        Ok(bisection)
    }
}

/// Picks the run with the strictly smaller edge cut, preferring `identity` on ties. A failed
/// run loses to a successful one; if both failed the identity run's error is returned.
pub fn choose_winner(identity: Result<Bisection>, degree: Result<Bisection>) -> Result<Bisection> {
    match (identity, degree) {
        (Ok(identity), Ok(degree)) => {
            if degree.edge_cut < identity.edge_cut {
                Ok(degree)
            } else {
                Ok(identity)
            }
        }
        (Ok(identity), Err(e)) => {
            log::warn!("degree weighting failed: {e}");
            Ok(identity)
        }
        (Err(e), Ok(degree)) => {
            log::warn!("identity weighting failed: {e}");
            Ok(degree)
        }
        (Err(identity), Err(degree)) => {
            log::warn!("degree weighting failed: {degree}");
            Err(identity)
        }
    }
}

/// Bisects the graph given by `edges`.
pub fn bisect<S: Solver + ?Sized>(
    edges: &[(u32, u32)],
    solver: &S,
    config: &BisectionConfig,
) -> Result<Bisection> {
    Graph::from_edges(edges)?.partition_bisection(solver, config)
}

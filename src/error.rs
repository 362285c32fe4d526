use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BisectionError>;

/// Errors that abort a bisection run.
#[derive(Debug, Error)]
pub enum BisectionError {
    /// The graph does not fit into the solver's spin addressing, or has no vertices at all.
    #[error("{}", size_limit_message(.vertices, .max_vertex, .limit))]
    SizeLimitExceeded {
        vertices: usize,
        max_vertex: u32,
        limit: usize,
    },

    /// A coefficient was addressed outside the spins of the problem.
    #[error("entry ({i}, {j}) is outside a problem of {spins} spins")]
    SpinOutOfRange { i: usize, j: usize, spins: usize },

    /// A coupling was requested below the diagonal.
    #[error("coupling ({i}, {j}) is not upper triangular")]
    NotUpperTriangular { i: usize, j: usize },

    #[error("malformed solver output on line {line}: {reason}: {text:?}")]
    MalformedOutputLine {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("unrecognized spin character {character:?} at position {position} on solver output line {line}")]
    UnrecognizedSpinCharacter {
        line: usize,
        position: usize,
        character: char,
    },

    /// A candidate does not carry one spin per vertex. `line` is the output line when
    /// parsing, and the 1-based candidate position when selecting.
    #[error("solver candidate at line {line} has {found} spins, expected {expected}")]
    SpinCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// None of the returned candidates splits the vertices into equal halves.
    #[error("none of the {candidates} solver candidates yields two groups of equal size")]
    NoValidPartition { candidates: usize },

    #[error("no solver binary available for platform {platform:?}")]
    SolverUnavailable { platform: String },

    #[error("solver {binary:?} failed ({status}): {stderr}")]
    SolverProcessFailure {
        binary: PathBuf,
        status: String,
        stderr: String,
    },

    #[error("invalid edge ({a}, {b}): {reason}")]
    InvalidEdge { a: u32, b: u32, reason: &'static str },

    #[error("invalid graph file on line {line}: {reason}")]
    InvalidGraphFile { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn size_limit_message(vertices: &usize, max_vertex: &u32, limit: &usize) -> String {
    if *vertices == 0 {
        format!("cannot encode a graph without vertices, between 1 and {limit} spins are supported")
    } else {
        format!("graph with {vertices} vertices (largest vertex {max_vertex}) exceeds the limit of {limit} spins")
    }
}

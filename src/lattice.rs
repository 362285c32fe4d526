use crate::{BisectionError, IsingProblem, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// First line of every lattice file. The solver skips it.
pub const LATTICE_HEADER: &str = "Isakov Solver Function File";

/// One distinct spin assignment returned by the solver.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateSolution {
    /// One entry per spin, either `1` or `-1`.
    pub spins: Vec<i8>,
    /// How many reads ended in exactly this assignment.
    pub occurrences: u32,
    pub energy: f64,
}

/// Writes the header followed by one `i j coefficient` line for every `i <= j`.
pub fn serialize_lattice<W: Write>(problem: &IsingProblem, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{LATTICE_HEADER}")?;
    let n = problem.spin_count();
    for i in 0..n {
        for j in i..n {
            writeln!(writer, "{} {} {}", i, j, problem.coefficient(i, j))?;
        }
    }
    Ok(())
}

/// Replaces whatever is at `path` with the serialized problem. The file is flushed and closed
/// when this returns, also on error.
pub fn write_lattice<P: AsRef<Path>>(problem: &IsingProblem, path: P) -> Result<()> {
    let path = path.as_ref();
    if path.is_file() {
        fs::remove_file(path)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serialize_lattice(problem, &mut writer)?;
    writer.flush()?;
    log::debug!(
        "wrote lattice for {} spins to {}",
        problem.spin_count(),
        path.display()
    );
    Ok(())
}

/// Parses the solver's stdout, one `energy occurrences spins` line per candidate, keeping the
/// solver's order. Every spin string must have `spin_count` characters.
pub fn parse_solver_output(output: &str, spin_count: usize) -> Result<Vec<CandidateSolution>> {
    let mut candidates = vec![];
    for (idx, text) in output.lines().enumerate() {
        let line = idx + 1;
        if text.trim().is_empty() {
            continue;
        }

        let malformed = |reason: String| BisectionError::MalformedOutputLine {
            line,
            text: text.to_string(),
            reason,
        };

        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() != 3 {
            return Err(malformed(format!("expected 3 fields, found {}", words.len())));
        }

        let energy = words[0]
            .parse::<f64>()
            .map_err(|e| malformed(format!("bad energy {:?}: {e}", words[0])))?;
        let occurrences = words[1]
            .parse::<u32>()
            .map_err(|e| malformed(format!("bad occurrence count {:?}: {e}", words[1])))?;
        let spins = decode_spins(words[2], line)?;

        if spins.len() != spin_count {
            return Err(BisectionError::SpinCountMismatch {
                line,
                expected: spin_count,
                found: spins.len(),
            });
        }

        candidates.push(CandidateSolution {
            spins,
            occurrences,
            energy,
        });
    }
    log::trace!("parsed {} candidates", candidates.len());
    Ok(candidates)
}

/// Maps `+` to `1` and `-` to `-1`.
pub fn decode_spins(spin_string: &str, line: usize) -> Result<Vec<i8>> {
    spin_string
        .chars()
        .enumerate()
        .map(|(position, character)| match character {
            '+' => Ok(1),
            '-' => Ok(-1),
            _ => Err(BisectionError::UnrecognizedSpinCharacter {
                line,
                position,
                character,
            }),
        })
        .collect()
}

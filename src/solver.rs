use crate::{BisectionError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Something that minimizes the Ising problem stored in a lattice file and reports the
/// distinct assignments it found, one `energy occurrences spins` line each.
pub trait Solver {
    fn solve(&self, lattice: &Path, sweeps: u32, reads: u32) -> Result<String>;

    /// Name used in log messages.
    fn name(&self) -> &str;
}

/// Runs Isakov's simulated annealing executable as a subprocess.
#[derive(Clone, Debug)]
pub struct IsakovSolver {
    pub binary: PathBuf,
}

impl IsakovSolver {
    pub fn new<P: Into<PathBuf>>(binary: P) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Picks the executable shipped for the host operating system.
    pub fn for_host() -> Result<Self> {
        Self::for_platform(std::env::consts::OS)
    }

    pub fn for_platform(os: &str) -> Result<Self> {
        let binary = match os {
            "linux" => "isakov_linux",
            "macos" => "isakov_mac",
            "windows" => "isakov_win.exe",
            _ => {
                return Err(BisectionError::SolverUnavailable {
                    platform: os.to_string(),
                })
            }
        };
        Ok(Self::new(binary))
    }
}

impl Solver for IsakovSolver {
    fn solve(&self, lattice: &Path, sweeps: u32, reads: u32) -> Result<String> {
        log::debug!(
            "running {} on {} ({} sweeps, {} reads)",
            self.binary.display(),
            lattice.display(),
            sweeps,
            reads
        );

        let output = Command::new(&self.binary)
            .arg("-l")
            .arg(lattice)
            .arg("-s")
            .arg(sweeps.to_string())
            .arg("-r")
            .arg(reads.to_string())
            .output()
            .map_err(|e| BisectionError::SolverProcessFailure {
                binary: self.binary.clone(),
                status: "could not start".to_string(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(BisectionError::SolverProcessFailure {
                binary: self.binary.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn name(&self) -> &str {
        "isakov"
    }
}

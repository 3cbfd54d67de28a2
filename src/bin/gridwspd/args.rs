//! Command-line surface. Parsed once at process start into a plain struct
//! and threaded explicitly through the rest of the binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gridwspd::NeighbourMode;

#[derive(Parser, Debug)]
#[command(name = "gridwspd", about = "Build a WSPD distance oracle over a grid graph")]
pub struct CliArgs {
    /// Path to the map file to load.
    #[arg(short, long, value_name = "PATH")]
    pub graph: PathBuf,

    /// What to compute: the raw well-separated pair decomposition, or the
    /// node-selection clustering built on top of it.
    #[arg(short, long, value_enum)]
    pub mode: Mode,

    /// Adjacency rule: 4-connected or 8-connected.
    #[arg(short, long, value_enum, default_value = "manhattan")]
    pub neighbour_mode: NeighbourModeArg,

    /// Output file path. Defaults to `<mode>.txt` in the current directory.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Worker count for the parallel query facility (see the library's
    /// worker pool). Defaults to the number of logical CPUs.
    #[arg(short, long, value_name = "COUNT")]
    pub workers: Option<usize>,

    /// Raise logging verbosity; repeatable (`-v`, `-vv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers
            .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
            .max(1)
    }

    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(format!("{}.txt", self.mode)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Separation,
    Selection,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Separation => write!(f, "separation"),
            Mode::Selection => write!(f, "selection"),
        }
    }
}

/// Mirrors [`NeighbourMode`] for `clap`'s derive, which needs its own enum to
/// drive `--help` text and value parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NeighbourModeArg {
    Manhattan,
    AllSurrounding,
}

impl From<NeighbourModeArg> for NeighbourMode {
    fn from(value: NeighbourModeArg) -> Self {
        match value {
            NeighbourModeArg::Manhattan => NeighbourMode::Manhattan,
            NeighbourModeArg::AllSurrounding => NeighbourMode::AllSurrounding,
        }
    }
}

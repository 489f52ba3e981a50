//! # CLI Module - Command Line Interface for the Simulator
//!
//! The argument surface follows the historic tool flag for flag: the
//! multi-character options keep their spellings as long options
//! (`--tt`, `--smt`, `--af`, `--bw`, `--bh`, `--df`, `--ew`, `--sf`,
//! `--ef`, `--edf`, `--pck`, `--kap`) while the single-character ones
//! stay short flags (`-i`, `-p`, `-l`, `-r`). The interaction-matrix
//! source is the only required argument.
//!
//! **Usage**:
//! ```bash
//! territorysim-rs --af aij.tsv --df delta.tsv -i 4 -p 2 --tt 100000 > trace.tsv
//! ```
//!
//! Every run needs exactly one boundary policy; `--bc` selects it and
//! defaults to reflective walls.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::world::{Boundary, WorldParams};

/// Boundary policy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoundaryArg {
    /// Walls mask off outward moves
    Reflective,
    /// Coordinates wrap modulo the box size
    Periodic,
}

impl From<BoundaryArg> for Boundary {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Reflective => Boundary::Reflective,
            BoundaryArg::Periodic => Boundary::Periodic,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "territorysim-rs",
    version,
    about = "Biased random-walk simulator for interacting populations on a lattice"
)]
pub struct Cli {
    /// Number of individuals per population
    #[arg(short = 'i', long = "indivs", default_value_t = 4)]
    pub no_indivs: usize,

    /// Number of populations
    #[arg(short = 'p', long = "pops", default_value_t = 2)]
    pub no_pops: usize,

    /// Total number of time steps
    #[arg(long = "tt", value_name = "TIME", default_value_t = 100000.0)]
    pub total_time: f64,

    /// Step index at which measurement output starts
    #[arg(long = "smt", value_name = "TIME", default_value_t = 0.0)]
    pub start_measure_time: f64,

    /// Interaction-strength matrix source: row i holds the response of
    /// population i to every other population
    #[arg(long = "af", value_name = "PATH")]
    pub aij_file: PathBuf,

    /// Box width in lattice cells
    #[arg(long = "bw", default_value_t = 50)]
    pub box_width: usize,

    /// Box height in lattice cells; 1 selects the one-dimensional kernel
    #[arg(long = "bh", default_value_t = 50)]
    pub box_height: usize,

    /// Averaging-radius matrix source; all radii zero when absent,
    /// which disables pairwise interactions
    #[arg(long = "df", value_name = "PATH")]
    pub delta_file: Option<PathBuf>,

    /// Lattice spacing: physical distance per cell
    #[arg(short = 'l', long = "lattice", default_value_t = 0.1)]
    pub l_val: f64,

    /// Random seed; 0 seeds from the clock
    #[arg(short = 'r', long = "seed", default_value_t = 0)]
    pub seed: u64,

    /// Weighting given to the environmental layer
    #[arg(long = "ew", default_value_t = 0.0)]
    pub env_weight: f64,

    /// Start-positions source; uniform random placement when absent
    #[arg(long = "sf", value_name = "PATH")]
    pub start_file: Option<PathBuf>,

    /// End-positions sink, written on the final step
    #[arg(long = "ef", value_name = "PATH")]
    pub end_file: Option<PathBuf>,

    /// Environment-field source; zero field when absent
    #[arg(long = "edf", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Packing term enabled (0 or 1)
    #[arg(long = "pck", default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub packing_term: u8,

    /// Packing strength kappa
    #[arg(long = "kap", default_value_t = 1.0)]
    pub kappa: f64,

    /// Boundary policy
    #[arg(long = "bc", value_enum, default_value = "reflective")]
    pub boundary: BoundaryArg,
}

impl Cli {
    /// Collapses the argument surface into the run parameter set.
    pub fn world_params(&self) -> WorldParams {
        WorldParams {
            no_pops: self.no_pops,
            no_indivs: self.no_indivs,
            box_width: self.box_width,
            box_height: self.box_height,
            l_val: self.l_val,
            total_time: self.total_time,
            start_measure_time: self.start_measure_time,
            env_weight: self.env_weight,
            packing_term: self.packing_term == 1,
            kappa: self.kappa,
            boundary: self.boundary.into(),
        }
    }
}

//! # World Module - Simulation State and Parameters
//!
//! This module defines the root state of a run: the parameter set, the
//! per-population-pair interaction and averaging-radius matrices, the
//! environmental scalar field, and the ordered collections of populations
//! and individuals that the movement kernels read and the driver mutates.
//!
//! ## Key Concepts
//!
//! ### Stable Ordering
//! Populations are stored in creation order and individuals likewise
//! within each population. The order never changes after construction:
//! it determines how the start-position file is consumed, the order in
//! which the driver visits walkers, and the order of every output line.
//!
//! ### Pair Indexing
//! Both matrices use a single indexing convention,
//! `values[other_pop + my_pop * no_pops]`: row `my_pop` holds the
//! response of that population to the presence of every other population.
//!
//! ## Submodules
//!
//! - [`tests`]: Unit tests for indexing conventions and construction

use serde::{Deserialize, Serialize};


/// Boundary policy applied to every coordinate computation.
///
/// Under `Reflective` boundaries a walker at an edge simply has the
/// outward direction masked off; under `Periodic` boundaries all
/// coordinate arithmetic wraps modulo the box size and offsets follow
/// the minimum-image convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    Reflective,
    Periodic,
}

/// Complete parameter set for one run.
///
/// Everything here is fixed at initialisation and read-only afterwards.
/// The full record is serialised to JSON and logged once at startup so
/// any output stream can be traced back to its exact configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorldParams {
    /// Number of populations.
    pub no_pops: usize,
    /// Individuals per population, equal across populations.
    pub no_indivs: usize,
    /// Lattice width in cells.
    pub box_width: usize,
    /// Lattice height in cells. A height of 1 selects the 1D kernel.
    pub box_height: usize,
    /// Lattice spacing: physical distance represented by one cell.
    pub l_val: f64,
    /// Last timestep index. Stored as a real and compared as an integer
    /// boundary by the driver.
    pub total_time: f64,
    /// Step index at or after which positions are emitted.
    pub start_measure_time: f64,
    /// Weighting of the environmental field. The field is loaded and
    /// stored but the movement kernels do not read it.
    pub env_weight: f64,
    /// Whether the local-density packing correction is applied.
    pub packing_term: bool,
    /// Strength of the packing correction.
    pub kappa: f64,
    /// Boundary policy for the whole run.
    pub boundary: Boundary,
}

/// Square matrix of per-population-pair coefficients, row-major.
///
/// Used for both the signed interaction strengths and the positive
/// spatial averaging radii. Row `i` is the response of population `i`.
///
/// # Examples
///
/// ```
/// # use territory_lib::world::PairMatrix;
/// let m = PairMatrix::from_values(2, vec![0.0, 1.0, 2.0, 3.0]);
/// assert_eq!(m.get(0, 1), 1.0);
/// assert_eq!(m.get(1, 0), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PairMatrix {
    n: usize,
    values: Vec<f64>,
}

impl PairMatrix {
    /// Creates an `n` by `n` matrix of zeros.
    pub fn zeros(n: usize) -> Self {
        PairMatrix {
            n,
            values: vec![0.0; n * n],
        }
    }

    /// Creates a matrix from row-major values.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != n * n`.
    pub fn from_values(n: usize, values: Vec<f64>) -> Self {
        assert_eq!(values.len(), n * n, "pair matrix must be square");
        PairMatrix { n, values }
    }

    /// Side length of the matrix.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Coefficient describing the response of `my_pop` to `other_pop`.
    #[inline]
    pub fn get(&self, my_pop: usize, other_pop: usize) -> f64 {
        debug_assert!(my_pop < self.n && other_pop < self.n);
        self.values[other_pop + my_pop * self.n]
    }

    /// Mutable access to the row-major backing storage, used by the
    /// table loader.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

/// Scalar environmental field over the lattice, row-major by row `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvField {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl EnvField {
    /// Creates a zero-filled field covering the whole box.
    pub fn zeros(width: usize, height: usize) -> Self {
        EnvField {
            width,
            height,
            values: vec![0.0; width * height],
        }
    }

    /// Field value at cell `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        debug_assert!(x < self.width && y < self.height);
        self.values[y * self.width + x]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Mutable access to the row-major backing storage, used by the
    /// field loader.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

/// A single lattice walker.
///
/// Coordinates are kept as unsigned cell indices. Before placement both
/// coordinates sit at the sentinel value equal to the box dimension,
/// one past the last valid cell, so an unplaced individual is
/// distinguishable from any legal position.
#[derive(Debug, Clone, Copy)]
pub struct Individual {
    /// Stable index within the owning population.
    pub index: usize,
    /// Current column, in `[0, box_width)` once placed.
    pub x: usize,
    /// Current row, in `[0, box_height)` once placed.
    pub y: usize,
}

impl Individual {
    /// Creates an individual at the unplaced sentinel position.
    pub fn unplaced(index: usize, box_width: usize, box_height: usize) -> Self {
        Individual {
            index,
            x: box_width,
            y: box_height,
        }
    }
}

/// A group of individuals sharing one row of the pair matrices.
#[derive(Debug, Clone)]
pub struct Population {
    /// Stable index in `[0, no_pops)`, the row index into the matrices.
    pub index: usize,
    /// Individuals in creation order.
    pub individuals: Vec<Individual>,
}

impl Population {
    fn new(index: usize, no_indivs: usize, box_width: usize, box_height: usize) -> Self {
        let individuals = (0..no_indivs)
            .map(|i| Individual::unplaced(i, box_width, box_height))
            .collect();
        Population { index, individuals }
    }
}

/// Root state of a run.
///
/// Owned by the driver for the run's lifetime. The matrices and the
/// environment are read-only after initialisation; individual positions
/// are the only state mutated during a step.
#[derive(Debug, Clone)]
pub struct World {
    pub params: WorldParams,
    /// Signed interaction strengths, positive for attraction.
    pub aijs: PairMatrix,
    /// Positive spatial averaging radii, paired with `aijs`.
    pub deltas: PairMatrix,
    /// Environmental scalar field over the box.
    pub env: EnvField,
    /// Populations in creation order.
    pub populations: Vec<Population>,
    /// Integer step counter, advanced by the driver in unit steps.
    pub current_time: u64,
}

impl World {
    /// Builds the root state with every individual at its sentinel
    /// position. Placement assigns real coordinates afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the run has no populations or no individuals, or if the
    /// matrices and field do not match the declared dimensions.
    pub fn new(params: WorldParams, aijs: PairMatrix, deltas: PairMatrix, env: EnvField) -> Self {
        if params.no_pops < 1 || params.no_indivs < 1 {
            panic!("Simulation requires at least one individual in one population")
        }
        if params.box_width < 1 || params.box_height < 1 {
            panic!("Simulation requires a box of at least one cell")
        }
        assert_eq!(aijs.n(), params.no_pops, "interaction matrix shape");
        assert_eq!(deltas.n(), params.no_pops, "delta matrix shape");
        assert_eq!(env.width(), params.box_width, "environment field width");
        assert_eq!(env.height(), params.box_height, "environment field height");

        let populations = (0..params.no_pops)
            .map(|p| Population::new(p, params.no_indivs, params.box_width, params.box_height))
            .collect();

        World {
            params,
            aijs,
            deltas,
            env,
            populations,
            current_time: 0,
        }
    }

    /// True when the box degenerates to a single row and the 1D kernel
    /// applies.
    pub fn is_one_dimensional(&self) -> bool {
        self.params.box_height == 1
    }

    /// Total number of walkers across all populations.
    pub fn total_individuals(&self) -> usize {
        self.params.no_pops * self.params.no_indivs
    }
}

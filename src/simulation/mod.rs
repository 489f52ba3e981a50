//! # Simulation Module - Driver Loop
//!
//! The driver advances the integer step counter from 0 to the total
//! time, visiting populations and individuals in their stable creation
//! order and handing each walker to the movement kernel matching the
//! box shape. Once the measurement window opens, every walker's
//! position is written to the observation stream immediately after its
//! move, followed by one newline per completed step; on the final step
//! the same values also go to the optional end-position sink.
//!
//! ## Sequencing
//!
//! The run is strictly single threaded. A move applied early in a step
//! is visible to every later individual in the same step, so the sweep
//! order is part of the model, not an implementation detail. All
//! randomness is drawn sequentially from one seeded generator, which
//! together with the fixed sweep order makes runs byte-identical for a
//! given seed and input set.
//!
//! ## Submodules
//!
//! - [`tests`]: Unit tests for emission shape, determinism and invariants

use std::io::{BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::SimError;
use crate::kernel::{linear, planar};
use crate::placement;
use crate::world::World;


/// Creates the run's random number generator.
///
/// A seed of zero selects clock seeding from the Unix time, matching
/// the CLI convention; any other value gives a reproducible stream.
pub fn seed_rng(seed: u64) -> StdRng {
    let seed = if seed == 0 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(1)
    } else {
        seed
    };
    StdRng::seed_from_u64(seed)
}

/// Simulation driver owning the world state and the RNG stream.
pub struct Simulation {
    world: World,
    rng: StdRng,
}

impl Simulation {
    /// Wraps a freshly initialised world and its generator. Placement
    /// has not happened yet; call [`Simulation::set_init_conds`] before
    /// [`Simulation::run`].
    pub fn new(world: World, rng: StdRng) -> Self {
        Simulation { world, rng }
    }

    /// Returns an immutable reference to the world state.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Current step counter.
    pub fn step_count(&self) -> u64 {
        self.world.current_time
    }

    /// Assigns start positions, randomly when no source is given, and
    /// rejects placements that leave any individual outside the box.
    pub fn set_init_conds<R: BufRead>(&mut self, start: Option<R>) -> Result<(), SimError> {
        match start {
            Some(reader) => placement::place_from_reader(&mut self.world, reader)?,
            None => placement::place_random(&mut self.world, &mut self.rng),
        }
        placement::validate_placement(&self.world)
    }

    /// Runs the simulation to completion.
    ///
    /// Observations go to `out` as `x⟨TAB⟩y⟨TAB⟩` per individual in
    /// sweep order with a newline closing each measured step. On the
    /// final step the same line is duplicated into `end_sink` when one
    /// is configured.
    pub fn run(
        &mut self,
        out: &mut dyn Write,
        mut end_sink: Option<&mut dyn Write>,
    ) -> Result<(), SimError> {
        debug_assert_eq!(self.world.current_time, 0, "run requires a placed world");

        let total_time = self.world.params.total_time;
        let start_measure_time = self.world.params.start_measure_time;
        let width = self.world.params.box_width;
        let height = self.world.params.box_height;
        let one_dimensional = self.world.is_one_dimensional();

        debug!(
            "running {} walkers to t = {}",
            self.world.total_individuals(),
            total_time
        );

        while (self.world.current_time as f64) < total_time {
            self.world.current_time += 1;
            let now = self.world.current_time as f64;
            let measuring = now >= start_measure_time;
            let final_step = now == total_time;

            for pop_idx in 0..self.world.params.no_pops {
                for indiv_idx in 0..self.world.params.no_indivs {
                    let (x, y) = {
                        let individual = &self.world.populations[pop_idx].individuals[indiv_idx];
                        (individual.x, individual.y)
                    };

                    let (nx, ny) = if one_dimensional {
                        (linear::step(&self.world, pop_idx, x, &mut self.rng), 0)
                    } else {
                        planar::step(&self.world, pop_idx, x, y, &mut self.rng)
                    };

                    let individual =
                        &mut self.world.populations[pop_idx].individuals[indiv_idx];
                    individual.x = nx;
                    individual.y = ny;

                    if measuring {
                        write!(out, "{}\t{}\t", nx, ny)?;
                        if final_step {
                            if let Some(sink) = end_sink.as_mut() {
                                write!(sink, "{}\t{}\t", nx, ny)?;
                            }
                        }
                    }

                    // A move can never leave the box
                    debug_assert!(nx < width && ny < height);
                }
            }

            if measuring {
                writeln!(out)?;
                if final_step {
                    if let Some(sink) = end_sink.as_mut() {
                        writeln!(sink)?;
                    }
                }
            }
        }

        Ok(())
    }
}

//! # Placement Module - Initial Conditions
//!
//! Assigns a starting cell to every individual before the first step,
//! either by uniform sampling over the box or from a start-positions
//! file. Both paths walk the populations and individuals in their
//! stable creation order, which is the order the file format assumes,
//! and both reset the step counter to zero.
//!
//! ## Submodules
//!
//! - [`tests`]: Unit tests for ordering, file consumption and validation

use std::io::BufRead;

use rand::rngs::StdRng;
use rand_distr::{Distribution, Uniform};

use crate::error::SimError;
use crate::io::positions;
use crate::world::World;


/// Places every individual uniformly at random within the box.
///
/// Coordinates are drawn from the run's single RNG stream, x before y,
/// walking populations and individuals in creation order, so a fixed
/// seed reproduces the exact same placement.
pub fn place_random(world: &mut World, rng: &mut StdRng) {
    let x_dist = Uniform::new(0, world.params.box_width).unwrap();
    let y_dist = Uniform::new(0, world.params.box_height).unwrap();
    for population in &mut world.populations {
        for individual in &mut population.individuals {
            individual.x = x_dist.sample(rng);
            individual.y = y_dist.sample(rng);
        }
    }
    world.current_time = 0;
}

/// Places individuals from a start-positions source.
///
/// Consumes at most `2 · no_pops · no_indivs` numbers from the source
/// as alternating `x y` coordinates. When the source runs out early the
/// remaining individuals keep their sentinel positions, which
/// [`validate_placement`] rejects before the run starts.
pub fn place_from_reader<R: BufRead>(world: &mut World, reader: R) -> Result<(), SimError> {
    let max_values = 2 * world.total_individuals();
    let values = positions::read_values(reader, max_values)?;
    let mut next = values.into_iter();

    'outer: for population in &mut world.populations {
        for individual in &mut population.individuals {
            match next.next() {
                Some(x) => individual.x = x,
                None => break 'outer,
            }
            match next.next() {
                Some(y) => individual.y = y,
                None => break 'outer,
            }
        }
    }

    world.current_time = 0;
    Ok(())
}

/// Checks that every individual holds a legal cell before the run.
///
/// An individual still at its sentinel position (the start file ran out
/// early) or outside the box (the file held oversized coordinates) is a
/// configuration error, reported before any step executes.
pub fn validate_placement(world: &World) -> Result<(), SimError> {
    for population in &world.populations {
        for individual in &population.individuals {
            if individual.x >= world.params.box_width || individual.y >= world.params.box_height {
                return Err(SimError::Config(format!(
                    "individual {} of population {} has no valid start position ({}, {})",
                    individual.index, population.index, individual.x, individual.y
                )));
            }
        }
    }
    Ok(())
}

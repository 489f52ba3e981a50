//! One-dimensional movement kernel, used when the box height is 1.
//!
//! The 1D bias replaces the inverse-distance kernel with a step
//! function of the offset sign: every individual within the averaging
//! radius pulls with the fixed magnitude `l·a / (4·δ)`, toward itself
//! when the interaction is attractive.

use rand::Rng;
use rand::rngs::StdRng;

use super::{dec, inc, offset};
use crate::world::{Boundary, World};

/// Interaction-driven bias for the walker of population `pop_idx` at
/// column `x`, clamped to `[-1, 1]`.
pub fn directional_bias(world: &World, pop_idx: usize, x: usize) -> f64 {
    let p = &world.params;
    let l = p.l_val;

    let mut sx = 0.0;
    for other_pop in &world.populations {
        let a = world.aijs.get(pop_idx, other_pop.index);
        let delta = world.deltas.get(pop_idx, other_pop.index);
        for other in &other_pop.individuals {
            let dx = offset(other.x, x, p.box_width, p.boundary) as f64 * l;
            if dx > 0.0 && dx <= delta {
                // Individual within range to the right
                sx += l * a / (4.0 * delta);
            } else if dx < 0.0 && dx >= -delta {
                // Individual within range to the left
                sx -= l * a / (4.0 * delta);
            }
        }
    }

    sx.clamp(-1.0, 1.0)
}

/// Moves the walker of population `pop_idx` at column `x` by one cell
/// and returns its next column. The caller forces the row back to zero.
///
/// Weights are `available · (1 ± s)/2`; a single uniform draw scaled to
/// their total picks left below the left weight and right otherwise,
/// with the same right-edge rule as the 2D kernel under reflective
/// boundaries.
pub fn step(world: &World, pop_idx: usize, x: usize, rng: &mut StdRng) -> usize {
    let p = &world.params;

    let (left_ok, right_ok) = match p.boundary {
        Boundary::Periodic => (1.0, 1.0),
        Boundary::Reflective => (
            if x > 0 { 1.0 } else { 0.0 },
            if x < p.box_width - 1 { 1.0 } else { 0.0 },
        ),
    };

    let sx = directional_bias(world, pop_idx, x);

    let left = left_ok * (1.0 - sx) / 2.0;
    let right = right_ok * (1.0 + sx) / 2.0;
    debug_assert!((0.0..=1.0).contains(&left));
    debug_assert!((0.0..=1.0).contains(&right));

    let draw = rng.random::<f64>() * (left + right);

    if draw < left {
        dec(x, p.box_width, p.boundary)
    } else {
        match p.boundary {
            Boundary::Periodic => inc(x, p.box_width, p.boundary),
            Boundary::Reflective if x != p.box_width - 1 => x + 1,
            Boundary::Reflective => x,
        }
    }
}

//! Two-dimensional movement kernel.
//!
//! Each step computes four directional transition weights from the
//! pairwise interaction sum, masks them by direction availability, and
//! samples the next cell from the resulting distribution.

use std::f64::consts::PI;

use rand::Rng;
use rand::rngs::StdRng;

use super::{dec, inc, offset};
use crate::world::{Boundary, World};

/// Interaction-driven bias for the walker of population `pop_idx` at
/// `(x, y)`, clamped to `[-1, 1]` per component.
///
/// For every individual within the pair's averaging radius the bias
/// accumulates an inverse-distance contribution along the unit vector
/// toward (or away from) that individual:
///
/// ```text
/// s += l · a · 1/(2π·δ²) · (dx, dy) / √(dx² + dy²)
/// ```
///
/// Individuals sharing the subject's cell, the subject itself included,
/// contribute `1/l²` to the local density instead. When the packing
/// term is enabled the accumulated bias is divided by
/// `1 + κ · density`, damping directed motion in crowded cells.
pub fn directional_bias(world: &World, pop_idx: usize, x: usize, y: usize) -> (f64, f64) {
    let p = &world.params;
    let l = p.l_val;

    let mut sx = 0.0;
    let mut sy = 0.0;
    let mut popsum = 0.0;

    for other_pop in &world.populations {
        let a = world.aijs.get(pop_idx, other_pop.index);
        let delta = world.deltas.get(pop_idx, other_pop.index);
        for other in &other_pop.individuals {
            let dx = offset(other.x, x, p.box_width, p.boundary) as f64;
            let dy = offset(other.y, y, p.box_height, p.boundary) as f64;
            let r2 = (dx * l).powi(2) + (dy * l).powi(2);
            if r2 > 0.0 && r2 <= delta * delta {
                let unit = (dx * dx + dy * dy).sqrt();
                let strength = l * a / (2.0 * PI * delta * delta);
                sx += strength * dx / unit;
                sy += strength * dy / unit;
            }
            if other.x == x && other.y == y {
                popsum += 1.0 / (l * l);
            }
        }
    }

    if p.packing_term {
        sx /= 1.0 + p.kappa * popsum;
        sy /= 1.0 + p.kappa * popsum;
    }

    (sx.clamp(-1.0, 1.0), sy.clamp(-1.0, 1.0))
}

/// Moves the walker of population `pop_idx` at `(x, y)` by one cell and
/// returns its next position.
///
/// Directional weights are `available · (1 ± s)/4`, each in `[0, 1/2]`
/// after the bias clamp. The next direction is sampled by cumulative
/// comparison in the fixed order down, up, left, right against a single
/// uniform draw scaled to the weight total. Under reflective boundaries
/// the fall-through branch is "right"; at the right edge it leaves the
/// walker in place.
pub fn step(world: &World, pop_idx: usize, x: usize, y: usize, rng: &mut StdRng) -> (usize, usize) {
    let p = &world.params;

    let (down_ok, up_ok, left_ok, right_ok) = match p.boundary {
        Boundary::Periodic => (1.0, 1.0, 1.0, 1.0),
        Boundary::Reflective => (
            if y > 0 { 1.0 } else { 0.0 },
            if y < p.box_height - 1 { 1.0 } else { 0.0 },
            if x > 0 { 1.0 } else { 0.0 },
            if x < p.box_width - 1 { 1.0 } else { 0.0 },
        ),
    };

    let (sx, sy) = directional_bias(world, pop_idx, x, y);

    let down = down_ok * (1.0 - sy) / 4.0;
    let up = up_ok * (1.0 + sy) / 4.0;
    let left = left_ok * (1.0 - sx) / 4.0;
    let right = right_ok * (1.0 + sx) / 4.0;
    debug_assert!((0.0..=1.0).contains(&down));
    debug_assert!((0.0..=1.0).contains(&up));
    debug_assert!((0.0..=1.0).contains(&left));
    debug_assert!((0.0..=1.0).contains(&right));

    let draw = rng.random::<f64>() * (down + up + left + right);

    if draw < down {
        (x, dec(y, p.box_height, p.boundary))
    } else if draw < down + up {
        (x, inc(y, p.box_height, p.boundary))
    } else if draw < down + up + left {
        (dec(x, p.box_width, p.boundary), y)
    } else {
        match p.boundary {
            Boundary::Periodic => (inc(x, p.box_width, p.boundary), y),
            // Inherited edge rule: at the right edge the fall-through
            // branch does not move.
            Boundary::Reflective if x != p.box_width - 1 => (x + 1, y),
            Boundary::Reflective => (x, y),
        }
    }
}

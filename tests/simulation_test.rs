//! Integration tests for the lattice walker simulator
//!
//! These tests run complete simulations through the public driver and
//! check the statistical and structural properties of the emitted
//! position traces.

use territory_lib::simulation::{Simulation, seed_rng};
use territory_lib::world::{Boundary, EnvField, PairMatrix, World, WorldParams};

fn make_world(
    no_pops: usize,
    no_indivs: usize,
    width: usize,
    height: usize,
    total_time: f64,
    start_measure_time: f64,
    aijs: Vec<f64>,
    deltas: Vec<f64>,
    packing: Option<f64>,
) -> World {
    let params = WorldParams {
        no_pops,
        no_indivs,
        box_width: width,
        box_height: height,
        l_val: 0.1,
        total_time,
        start_measure_time,
        env_weight: 0.0,
        packing_term: packing.is_some(),
        kappa: packing.unwrap_or(1.0),
        boundary: Boundary::Reflective,
    };
    World::new(
        params,
        PairMatrix::from_values(no_pops, aijs),
        PairMatrix::from_values(no_pops, deltas),
        EnvField::zeros(width, height),
    )
}

/// Runs a world to completion and parses the trace into per-step
/// position vectors, one `(x, y)` pair per individual in sweep order.
fn run_trace(world: World, seed: u64) -> Vec<Vec<(usize, usize)>> {
    let mut sim = Simulation::new(world, seed_rng(seed));
    sim.set_init_conds(None::<&[u8]>).unwrap();
    let mut out = Vec::new();
    sim.run(&mut out, None).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| {
            let fields: Vec<usize> = line
                .split('\t')
                .filter(|f| !f.is_empty())
                .map(|f| f.parse().unwrap())
                .collect();
            fields.chunks(2).map(|pair| (pair[0], pair[1])).collect()
        })
        .collect()
}

fn manhattan(a: (usize, usize), b: (usize, usize)) -> f64 {
    (a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as f64
}

fn mean_pair_distance(trace: &[Vec<(usize, usize)>], i: usize, j: usize) -> f64 {
    let total: f64 = trace.iter().map(|step| manhattan(step[i], step[j])).sum();
    total / trace.len() as f64
}

#[test]
fn lone_walker_moves_one_cell_per_step() {
    let world = make_world(1, 1, 5, 5, 500.0, 0.0, vec![1.0], vec![0.5], None);
    let trace = run_trace(world, 1);
    assert_eq!(trace.len(), 500);
    for window in trace.windows(2) {
        let step = manhattan(window[0][0], window[1][0]);
        assert!(step <= 1.0, "walker jumped more than one cell");
    }
}

#[test]
fn attraction_holds_a_pair_closer_than_repulsion() {
    let attract = make_world(1, 2, 10, 10, 10000.0, 5000.0, vec![1.0], vec![0.5], None);
    let repel = make_world(1, 2, 10, 10, 10000.0, 5000.0, vec![-1.0], vec![0.5], None);
    let mean_attract = mean_pair_distance(&run_trace(attract, 42), 0, 1);
    let mean_repel = mean_pair_distance(&run_trace(repel, 42), 0, 1);
    assert!(
        mean_attract < mean_repel,
        "attraction gave {mean_attract}, repulsion {mean_repel}"
    );
}

#[test]
fn cross_population_attraction_draws_walkers_together() {
    let aijs = vec![0.0, 2.0, 2.0, 0.0];
    let deltas = vec![0.3; 4];
    let coupled = make_world(2, 1, 8, 8, 2000.0, 1000.0, aijs, deltas.clone(), None);
    let control = make_world(2, 1, 8, 8, 2000.0, 1000.0, vec![0.0; 4], deltas, None);
    let mean_coupled = mean_pair_distance(&run_trace(coupled, 7), 0, 1);
    let mean_control = mean_pair_distance(&run_trace(control, 7), 0, 1);
    assert!(
        mean_coupled < mean_control,
        "coupled gave {mean_coupled}, control {mean_control}"
    );
}

#[test]
fn one_dimensional_populations_segregate() {
    // Own-population attraction with cross-population repulsion.
    let aijs = vec![1.0, -1.0, -1.0, 1.0];
    let deltas = vec![0.2; 4];
    let world = make_world(2, 4, 50, 1, 5000.0, 2500.0, aijs, deltas, None);
    let trace = run_trace(world, 3);

    for step in &trace {
        for &(_, y) in step {
            assert_eq!(y, 0);
        }
    }

    // Individuals 0..4 belong to population 0, 4..8 to population 1.
    let mut same = 0.0;
    let mut cross = 0.0;
    let mut same_n = 0.0;
    let mut cross_n = 0.0;
    for i in 0..8 {
        for j in (i + 1)..8 {
            let d = mean_pair_distance(&trace, i, j);
            if (i < 4) == (j < 4) {
                same += d;
                same_n += 1.0;
            } else {
                cross += d;
                cross_n += 1.0;
            }
        }
    }
    assert!(
        same / same_n < cross / cross_n,
        "same-population mean {same}, cross-population mean {cross}"
    );
}

#[test]
fn packing_reduces_time_spent_sharing_a_cell() {
    let shared_fraction = |packing: Option<f64>| {
        let world = make_world(1, 3, 4, 4, 4000.0, 0.0, vec![5.0], vec![0.2], packing);
        let trace = run_trace(world, 11);
        let shared = trace
            .iter()
            .filter(|step| {
                step[0] == step[1] || step[0] == step[2] || step[1] == step[2]
            })
            .count();
        shared as f64 / trace.len() as f64
    };

    let packed = shared_fraction(Some(10.0));
    let unpacked = shared_fraction(None);
    assert!(
        packed < unpacked,
        "packed fraction {packed}, unpacked fraction {unpacked}"
    );
}

//! Integration tests for the file-backed input and output paths
//!
//! These tests exercise the loaders against real files and run the
//! full source-to-sink pipeline the binary wires together.

use std::fs::{self, File};
use std::io::{BufReader, Write};

use territory_lib::io::matrix;
use territory_lib::simulation::{Simulation, seed_rng};
use territory_lib::world::{Boundary, EnvField, PairMatrix, World, WorldParams};

fn params(no_pops: usize, no_indivs: usize) -> WorldParams {
    WorldParams {
        no_pops,
        no_indivs,
        box_width: 6,
        box_height: 6,
        l_val: 0.1,
        total_time: 20.0,
        start_measure_time: 0.0,
        env_weight: 0.0,
        packing_term: false,
        kappa: 1.0,
        boundary: Boundary::Reflective,
    }
}

#[test]
fn matrix_survives_a_write_read_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aij.tsv");

    let original = PairMatrix::from_values(2, vec![1.5, -0.25, 0.125, 3.0]);
    let mut file = File::create(&path).unwrap();
    for row in 0..2 {
        for col in 0..2 {
            write!(file, "{}\t", original.get(row, col)).unwrap();
        }
        writeln!(file).unwrap();
    }
    drop(file);

    let loaded = matrix::load(BufReader::new(File::open(&path).unwrap()), 2).unwrap();
    for row in 0..2 {
        for col in 0..2 {
            assert!(
                (loaded.get(row, col) - original.get(row, col)).abs() < 1e-9,
                "cell ({row}, {col}) drifted"
            );
        }
    }
}

#[test]
fn start_file_to_end_file_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let aij_path = dir.path().join("aij.tsv");
    let start_path = dir.path().join("start.tsv");
    let end_path = dir.path().join("end.tsv");

    fs::write(&aij_path, "1\t0\n0\t1\n").unwrap();
    // Two populations of two individuals, population-major order.
    fs::write(&start_path, "1\t1\t2\t2\n3\t3\t4\t4\n").unwrap();

    let aijs = matrix::load(BufReader::new(File::open(&aij_path).unwrap()), 2).unwrap();
    let world = World::new(params(2, 2), aijs, PairMatrix::zeros(2), EnvField::zeros(6, 6));

    let mut sim = Simulation::new(world, seed_rng(9));
    sim.set_init_conds(Some(BufReader::new(File::open(&start_path).unwrap())))
        .unwrap();

    let starts: Vec<(usize, usize)> = sim
        .world()
        .populations
        .iter()
        .flat_map(|p| p.individuals.iter().map(|i| (i.x, i.y)))
        .collect();
    assert_eq!(starts, vec![(1, 1), (2, 2), (3, 3), (4, 4)]);

    let mut out = Vec::new();
    {
        let mut end_file = File::create(&end_path).unwrap();
        sim.run(&mut out, Some(&mut end_file)).unwrap();
    }

    let trace = String::from_utf8(out).unwrap();
    assert_eq!(trace.lines().count(), 20);
    let end_contents = fs::read_to_string(&end_path).unwrap();
    assert_eq!(end_contents, format!("{}\n", trace.lines().last().unwrap()));
}

#[test]
fn runs_from_identical_files_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let aij_path = dir.path().join("aij.tsv");
    fs::write(&aij_path, "1\t-1\n-1\t1\n").unwrap();

    let run_once = || {
        let aijs = matrix::load(BufReader::new(File::open(&aij_path).unwrap()), 2).unwrap();
        let deltas = PairMatrix::from_values(2, vec![0.5; 4]);
        let world = World::new(params(2, 2), aijs, deltas, EnvField::zeros(6, 6));
        let mut sim = Simulation::new(world, seed_rng(1234));
        sim.set_init_conds(None::<&[u8]>).unwrap();
        let mut out = Vec::new();
        sim.run(&mut out, None).unwrap();
        out
    };

    assert_eq!(run_once(), run_once());
}

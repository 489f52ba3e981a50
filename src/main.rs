use std::env;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use log::info;

use territory_lib::cli::Cli;
use territory_lib::error::SimError;
use territory_lib::io::{env_field, matrix};
use territory_lib::simulation::{self, Simulation};
use territory_lib::world::{EnvField, PairMatrix, World};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Bare invocation prints the usage summary and succeeds.
    if env::args().len() == 1 {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    }

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn open_source(path: &Path) -> Result<BufReader<File>, SimError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| SimError::Resource {
            path: path.to_path_buf(),
            source,
        })
}

fn run(cli: Cli) -> Result<(), SimError> {
    let params = cli.world_params();
    info!(
        "parameters: {}",
        serde_json::to_string(&params).unwrap_or_default()
    );

    let aijs = matrix::load(open_source(&cli.aij_file)?, params.no_pops)?;
    let deltas = match &cli.delta_file {
        Some(path) => matrix::load(open_source(path)?, params.no_pops)?,
        None => PairMatrix::zeros(params.no_pops),
    };
    let env = match &cli.env_file {
        Some(path) => env_field::load(open_source(path)?, params.box_width, params.box_height)?,
        None => EnvField::zeros(params.box_width, params.box_height),
    };

    let world = World::new(params, aijs, deltas, env);
    let mut sim = Simulation::new(world, simulation::seed_rng(cli.seed));

    let placement_start = Instant::now();
    match &cli.start_file {
        Some(path) => sim.set_init_conds(Some(open_source(path)?))?,
        None => sim.set_init_conds(None::<BufReader<File>>)?,
    }
    info!(
        "initial conditions set up in {:.3} s",
        placement_start.elapsed().as_secs_f64()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut end_file = match &cli.end_file {
        Some(path) => Some(File::create(path).map(BufWriter::new).map_err(|source| {
            SimError::Resource {
                path: path.clone(),
                source,
            }
        })?),
        None => None,
    };

    let run_start = Instant::now();
    sim.run(
        &mut out,
        end_file.as_mut().map(|sink| sink as &mut dyn Write),
    )?;
    out.flush()?;
    if let Some(sink) = end_file.as_mut() {
        sink.flush()?;
    }
    info!(
        "simulation finished in {:.3} s",
        run_start.elapsed().as_secs_f64()
    );

    Ok(())
}

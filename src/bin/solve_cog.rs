//! Run the center-of-gravity method on a point set and report every step
//!
//! Reads an `(n, 3)` f64 `.npy` array of `[x, y, weight]` rows, iterates to
//! convergence and writes the history as an `(steps, 4)` array of
//! `[index, x, y, cost]` rows. Without arguments the built-in four-market
//! sample is solved and nothing is written.
//!
//! Usage: `solve-cog [<points.npy> <history.npy> [threshold] [max_iters]]`

use center_of_gravity_rs::{
    history_to_array, points_from_array, sample, SimulationRun, SolverConfig,
};
use ndarray::Array2;
use ndarray_npy::{ReadNpyExt, WriteNpyExt};
use std::env;
use std::fs::File;
use std::io::BufReader;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Build the run configuration from the optional threshold and max_iters arguments
fn parse_config(args: &[String]) -> Result<SolverConfig, Box<dyn std::error::Error>> {
    let mut config = SolverConfig::default().with_verbose(true);
    if let Some(threshold) = args.get(3) {
        config.threshold = threshold.parse()?;
    }
    if let Some(max_iters) = args.get(4) {
        config.max_iters = max_iters.parse()?;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() == 2 || args.len() > 5 {
        eprintln!(
            "Usage: {} [<points.npy> <history.npy> [threshold] [max_iters]]",
            args[0]
        );
        std::process::exit(1);
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = parse_config(&args)?;

    let points = if args.len() >= 3 {
        let reader = BufReader::new(File::open(&args[1])?);
        let data: Array2<f64> = Array2::read_npy(reader)?;
        eprintln!("Loaded {} demand points from {}", data.nrows(), args[1]);
        points_from_array(&data.view())?
    } else {
        eprintln!("No input given, solving the built-in four-market sample");
        sample::four_markets()
    };

    let mut run = SimulationRun::new(points, config)?;
    let summary = run.run_to_convergence()?;

    println!("{:>4}  {:>10}  {:>10}  {:>12}", "step", "x", "y", "cost");
    for s in run.history() {
        println!(
            "{:>4}  {:>10.4}  {:>10.4}  {:>12.2}",
            s.index(),
            s.centroid().x,
            s.centroid().y,
            s.total_cost()
        );
    }

    println!();
    println!("Iterations:       {}", summary.iterations);
    println!("Converged:        {}", summary.converged);
    println!(
        "Optimal location: ({:.2}, {:.2})",
        summary.location.x, summary.location.y
    );
    println!("Final cost:       {:.0}", summary.total_cost);

    if args.len() >= 3 {
        let writer = File::create(&args[2])?;
        history_to_array(run.history()).write_npy(writer)?;
        eprintln!("Saved history to {}", args[2]);
    }

    Ok(())
}

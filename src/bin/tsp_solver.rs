use std::{io::stdout, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{Context, anyhow, bail};
use log::{LevelFilter, info, warn};
use structopt::StructOpt;
use tsp::{
    log::build_logger_for_verbosity,
    prelude::*,
    utils::signal_handling,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Algorithm {
    BranchAndBound,
    Greedy,
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bnb" => Ok(Algorithm::BranchAndBound),
            "greedy" => Ok(Algorithm::Greedy),
            _ => Err(format!("Unknown algorithm {s}")),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(about = "Computes a closed tour through all cities of a distance matrix")]
struct Opts {
    /// File containing the number of cities followed by the distance matrix
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Graphviz file the tour is written to
    #[structopt(parse(from_os_str))]
    output: PathBuf,

    /// Exact branch and bound or nearest-neighbor heuristic
    #[structopt(short, long, default_value = "bnb", possible_values = &["bnb", "greedy"])]
    algorithm: Algorithm,

    /// Prune every branch not beating the nearest-neighbor tour
    #[structopt(short, long)]
    warm_start: bool,

    /// Stop the exact search after this many seconds and report the best tour found
    #[structopt(short = "T", long)]
    timeout: Option<f64>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn run_branch_and_bound(matrix: &DistanceMatrix, opts: &Opts) -> anyhow::Result<Option<Tour>> {
    let heuristic = if opts.warm_start {
        nearest_neighbor(matrix)
    } else {
        None
    };

    if let Some(tour) = heuristic.as_ref() {
        info!("Nearest-neighbor tour has cost {}", tour.cost());
        if tour.cost() == 0 {
            // a tour of cost 0 cannot be improved
            return Ok(heuristic);
        }
    }

    let mut algo = BranchAndBound::new(matrix);
    if let Some(tour) = heuristic.as_ref() {
        algo.set_upper_bound(tour.cost() - 1);
    }

    let solution = if let Some(seconds) = opts.timeout {
        if !seconds.is_finite() || seconds < 0.0 {
            bail!("Timeout must be a non-negative number of seconds; got {seconds}");
        }
        algo.run_until_timeout(Duration::from_secs_f64(seconds));
        algo.best_known_solution()
    } else {
        algo.run_to_completion()
    };

    if !algo.is_completed() {
        warn!("Search stopped early; the tour is not guaranteed to be optimal");
    }

    Ok(solution.or(heuristic))
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);
    signal_handling::initialize();

    let matrix = DistanceMatrix::try_read_matrix_file(&opts.input).with_context(|| {
        format!(
            "Cannot load distance matrix from {}",
            opts.input.display()
        )
    })?;
    info!(
        "Loaded {} cities (symmetric: {})",
        matrix.number_of_nodes(),
        matrix.is_symmetric()
    );

    let tour = match opts.algorithm {
        Algorithm::Greedy => nearest_neighbor(&matrix),
        Algorithm::BranchAndBound => run_branch_and_bound(&matrix, &opts)?,
    }
    .ok_or_else(|| anyhow!("No tour found; the distance matrix has no cities"))?;

    tour.try_write_report(stdout().lock())?;

    tour.try_write_dot_file(&matrix, &opts.output)
        .with_context(|| format!("Cannot write tour to {}", opts.output.display()))?;
    println!("Route saved to {}", opts.output.display());

    Ok(())
}

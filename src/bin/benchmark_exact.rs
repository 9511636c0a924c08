use std::time::{Duration, Instant};

use glob::glob;
use itertools::Itertools;
use log::{LevelFilter, error, warn};
use serde::Serialize;
use structopt::StructOpt;
use tsp::{log::build_logger_for_verbosity, prelude::*, utils::signal_handling};

#[derive(Debug, StructOpt)]
#[structopt(about = "Runs the solvers on a set of instances and emits one JSON line per instance")]
struct Opt {
    #[structopt(short, long, default_value = "instances/**/*.txt")]
    pattern: String,

    /// Cross-check against exhaustive enumeration up to this many cities
    #[structopt(short, long, default_value = "9")]
    naive_limit: NumNodes,

    /// Time budget per instance for branch and bound in seconds
    #[structopt(short = "T", long, default_value = "60")]
    timeout: f64,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

#[derive(Debug, Serialize)]
struct Record {
    file: String,
    cities: NumNodes,
    symmetric: bool,
    bnb_cost: Option<Cost>,
    bnb_ms: u128,
    bnb_completed: bool,
    statistics: SearchStatistics,
    greedy_cost: Option<Cost>,
    greedy_ms: u128,
    naive_cost: Option<Cost>,
    naive_ms: Option<u128>,
    violation: bool,
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, u128) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_millis())
}

fn process(opt: &Opt, file: String, matrix: DistanceMatrix) -> Record {
    let ((bnb_tour, bnb_completed, statistics), bnb_ms) = timed(|| {
        let mut algo = BranchAndBound::new(&matrix);
        algo.run_until_timeout(Duration::from_secs_f64(opt.timeout));
        (
            algo.best_known_solution(),
            algo.is_completed(),
            algo.statistics(),
        )
    });

    let (greedy_tour, greedy_ms) = timed(|| nearest_neighbor(&matrix));

    let (naive_cost, naive_ms) = if matrix.number_of_nodes() <= opt.naive_limit {
        let (tour, ms) = timed(|| naive_solver(&matrix));
        (tour.map(|t| t.cost()), Some(ms))
    } else {
        (None, None)
    };

    let bnb_cost = bnb_tour.as_ref().map(|t| t.cost());
    let greedy_cost = greedy_tour.as_ref().map(|t| t.cost());

    let mut violation = false;
    if let Some(tour) = bnb_tour.as_ref() {
        if let Err(e) = tour.is_consistent_with(&matrix) {
            error!("{file}: inconsistent tour {e}");
            violation = true;
        }
    }
    if bnb_completed && naive_cost.is_some() && bnb_cost != naive_cost {
        error!("{file}: branch and bound {bnb_cost:?} vs enumeration {naive_cost:?}");
        violation = true;
    }
    if bnb_completed && bnb_cost > greedy_cost {
        error!("{file}: branch and bound {bnb_cost:?} worse than greedy {greedy_cost:?}");
        violation = true;
    }

    Record {
        file,
        cities: matrix.number_of_nodes(),
        symmetric: matrix.is_symmetric(),
        bnb_cost,
        bnb_ms,
        bnb_completed,
        statistics,
        greedy_cost,
        greedy_ms,
        naive_cost,
        naive_ms,
        violation,
    }
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opt.verbose);
    signal_handling::initialize();

    anyhow::ensure!(
        opt.timeout.is_finite() && opt.timeout >= 0.0,
        "timeout must be a non-negative number of seconds"
    );

    let files = glob(&opt.pattern)?.collect::<Result<Vec<_>, _>>()?;
    if files.is_empty() {
        warn!("No instances match {}", opt.pattern);
    }

    let mut violations = 0;
    for file in files.into_iter().sorted() {
        if signal_handling::received_ctrl_c() {
            break;
        }

        let filename = file.display().to_string();
        let matrix = match DistanceMatrix::try_read_matrix_file(&file) {
            Ok(matrix) => matrix,
            Err(e) => {
                warn!("Skip {filename}: {e}");
                continue;
            }
        };

        let record = process(&opt, filename, matrix);
        violations += record.violation as usize;
        println!("{}", serde_json::to_string(&record)?);
    }

    anyhow::ensure!(violations == 0, "{violations} instances with violations");
    Ok(())
}

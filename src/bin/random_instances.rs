use std::{fs, path::PathBuf, str::FromStr};

use anyhow::Context;
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use structopt::StructOpt;
use tsp::{exact::solve, io::MatrixWriter, log::build_logger_for_verbosity, matrix::*};

#[derive(Debug, Clone, Copy)]
enum Kind {
    Uniform,
    Symmetric,
    Euclidean,
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Kind::Uniform),
            "symmetric" => Ok(Kind::Symmetric),
            "euclidean" => Ok(Kind::Euclidean),
            _ => Err(format!("Unknown kind {s}")),
        }
    }
}

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::Uniform => "uniform",
            Kind::Symmetric => "symmetric",
            Kind::Euclidean => "euclidean",
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(about = "Writes random distance matrices in the solver's input format")]
struct Opt {
    #[structopt(short, long, parse(from_os_str), default_value = "instances/random")]
    output_dir: PathBuf,

    #[structopt(short, long, default_value = "8")]
    nodes: NumNodes,

    #[structopt(short, long, default_value = "10")]
    count: usize,

    #[structopt(short, long, default_value = "uniform", possible_values = &["uniform", "symmetric", "euclidean"])]
    kind: Kind,

    /// Largest edge cost (or side length of the square for euclidean instances)
    #[structopt(short, long, default_value = "100")]
    max_cost: Cost,

    #[structopt(short, long, default_value = "1234")]
    seed: u64,

    /// Solve each instance and encode the optimal cost into the filename
    #[structopt(short = "O", long)]
    with_optimum: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opt.verbose);

    anyhow::ensure!(opt.max_cost >= 1, "max-cost must be at least 1");

    fs::create_dir_all(&opt.output_dir)
        .with_context(|| format!("Cannot create {}", opt.output_dir.display()))?;

    let mut rng = Pcg64Mcg::seed_from_u64(opt.seed);
    let n = opt.nodes;

    for i in 0..opt.count {
        let matrix = match opt.kind {
            Kind::Uniform => DistanceMatrix::random_uniform(&mut rng, n, opt.max_cost),
            Kind::Symmetric => DistanceMatrix::random_symmetric(&mut rng, n, opt.max_cost),
            Kind::Euclidean => DistanceMatrix::random_euclidean(&mut rng, n, opt.max_cost as f64),
        };
        matrix.check_cost_range()?;

        let filename = if opt.with_optimum {
            let cost = solve(&matrix).map_or(0, |t| t.cost());
            format!("n{n:03}_opt{cost:06}_{}_{i:03}.txt", opt.kind.name())
        } else {
            format!("n{n:03}_{}_{i:03}.txt", opt.kind.name())
        };

        let path = opt.output_dir.join(filename);
        matrix
            .try_write_matrix_file(&path)
            .with_context(|| format!("Cannot write {}", path.display()))?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}

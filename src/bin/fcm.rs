//! Fuzzy C-Means Binary
//!
//! Clusters skill records read from a JSON array, selecting the cluster
//! count by elbow search unless `--clusters` fixes it.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use fuzzyc::clustering::*;
use fuzzyc::records::*;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fcm", version, about = "Fuzzy C-Means clustering of skill records")]
struct Args {
    /// JSON array of skill records
    input: PathBuf,
    /// Feature group whose fields become point dimensions
    #[arg(short, long, value_enum, default_value_t = FeatureGroup::Hard)]
    group: FeatureGroup,
    /// Fuzzy exponent m (> 1)
    #[arg(short = 'm', long, default_value_t = fuzzyc::FUZZINESS)]
    fuzziness: f64,
    /// Minkowski distance power p (> 0)
    #[arg(short, long, default_value_t = fuzzyc::DISTANCE_POWER)]
    power: f64,
    /// Largest membership change treated as converged
    #[arg(short, long, default_value_t = fuzzyc::TERMINATION_CRITERIA)]
    tolerance: f64,
    /// Trials per candidate count, and final restarts
    #[arg(short, long, default_value_t = fuzzyc::RESTARTS)]
    restarts: usize,
    /// Smallest candidate cluster count
    #[arg(long, default_value_t = fuzzyc::MIN_CLUSTERS)]
    min_clusters: usize,
    /// Largest candidate cluster count
    #[arg(long, default_value_t = fuzzyc::MAX_CLUSTERS)]
    max_clusters: usize,
    /// Iteration cap per trial
    #[arg(short, long, default_value_t = fuzzyc::MAX_ITERATIONS)]
    iterations: usize,
    /// Base seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,
    /// Skip the elbow search and cluster into exactly this many groups
    #[arg(short, long)]
    clusters: Option<usize>,
    /// Write the solution as JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn parameters(&self) -> Parameters {
        let params = Parameters::default()
            .with_fuzziness(self.fuzziness)
            .with_power(self.power)
            .with_tolerance(self.tolerance)
            .with_restarts(self.restarts)
            .with_range(self.min_clusters..=self.max_clusters)
            .with_iterations(self.iterations);
        match self.seed {
            Some(seed) => params.with_seed(seed),
            None => params,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    fuzzyc::log();
    let file = std::fs::File::open(&args.input)
        .with_context(|| format!("open {}", args.input.display()))?;
    let records = serde_json::from_reader::<_, Vec<Skill>>(std::io::BufReader::new(file))
        .with_context(|| format!("parse {}", args.input.display()))?;
    log::info!("{:<32}{:<32}", "records loaded", records.len());
    let builder = VectorBuilder::<Skill>::new(args.group)?;
    let points = builder.build(&records);
    log::info!("{:<32}{:<32}", "features selected", builder.names().join(","));
    let optimizer = Optimizer::new(&points, args.parameters())?;
    let solution = match args.clusters {
        Some(c) => optimizer.fixed(c)?,
        None => optimizer.solve()?,
    };
    report(&solution, &builder.names());
    let json = serde_json::to_string_pretty(&solution)?;
    match args.output {
        Some(ref path) => std::fs::write(path, json)
            .with_context(|| format!("write {}", path.display()))?,
        None => println!("{}", json),
    }
    Ok(())
}

/// Human-readable summary on stderr, keeping stdout for the JSON solution.
fn report(solution: &Solution, names: &[&str]) {
    eprintln!();
    if let Some(ref elbow) = solution.elbow {
        eprintln!("{}", "elbow curve".bold());
        for &(c, error) in elbow.curve() {
            let line = format!("  c = {:<4} mean error {:>16.6}", c, error);
            match c == elbow.selected() {
                true => eprintln!("{}", line.green().bold()),
                false => eprintln!("{}", line.dimmed()),
            }
        }
    }
    let run = &solution.run;
    let status = match run.status.converged() {
        true => run.status.to_string().green(),
        false => run.status.to_string().yellow(),
    };
    eprintln!(
        "{} {} clusters, error {:.6}, {}",
        "solution".bold(),
        solution.clusters,
        run.error,
        status
    );
    eprintln!("  seed {}", solution.seed);
    eprintln!("  features {}", names.join(", "));
    let assignments = run.assignments();
    for (k, centroid) in run.centroids.iter().enumerate() {
        let size = assignments.iter().filter(|&&j| j == k).count();
        eprintln!("  {:>3}. {:>5} points  {}", k, size, centroid.to_string().cyan());
    }
}

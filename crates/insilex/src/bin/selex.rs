use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use log::info;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use insilex::ConfigOverrides;
use insilex::SelexReport;
use insilex::plot_progress;
use insilex::read_config;
use sx_sequence::NucleotideVec;
use sx_selex::SelexConfig;
use sx_selex::SelexEngine;

/// In-silico SELEX: iterative selection and amplification of aptamers.
#[derive(Parser, Debug)]
#[command(name = "selex", version, about, long_about = None)]
struct Cli {
    /// Target sequence (A, C, G, T) scored by position-wise matches
    #[arg(short, long)]
    target: Option<String>,

    /// JSON file with run parameters; command line values take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of selection rounds
    #[arg(short = 'r', long)]
    num_rounds: Option<usize>,

    /// Size of the initial library
    #[arg(short = 'n', long)]
    library_size: Option<usize>,

    /// Fraction of each round's pool that is kept
    #[arg(short = 'p', long)]
    selection_pressure: Option<f64>,

    /// Per-position mutation probability during amplification
    #[arg(short = 'm', long)]
    mutation_rate: Option<f64>,

    /// Lower bound of the GC content range
    #[arg(long)]
    gc_min: Option<f64>,

    /// Upper bound of the GC content range
    #[arg(long)]
    gc_max: Option<f64>,

    /// Oligonucleotide length
    #[arg(short = 'l', long)]
    seq_length: Option<usize>,

    /// Rejection-sampling attempts per generated sequence
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Random seed (drawn at random and logged if not given)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of top aptamers to report
    #[arg(short = 'k', long, default_value_t = 5)]
    top: usize,

    /// Write the JSON report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write an SVG progress plot to this file
    #[arg(long)]
    plot: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            num_rounds: self.num_rounds,
            library_size: self.library_size,
            selection_pressure: self.selection_pressure,
            mutation_rate: self.mutation_rate,
            gc_min: self.gc_min,
            gc_max: self.gc_max,
            seq_length: self.seq_length,
            max_attempts: self.max_attempts,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => read_config(path)?,
        None => SelexConfig::default(),
    };
    let config = cli.overrides().apply(base)?;
    let target = cli.target.as_deref()
        .map(NucleotideVec::try_from)
        .transpose()?;

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    info!("Using seed {seed}.");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut engine = SelexEngine::new(target);
    let library = engine.run(&config, &mut rng)?;

    for record in engine.round_history() {
        println!("\n{}", format!("Round {} Results:", record.round).bold());
        println!("  Average Score: {:.3}", record.avg_score);
        println!("  Sequence Diversity: {} unique sequences", record.diversity);
        println!("  Top Sequence: {}", record.top_sequence.to_string().green());
    }

    let report = SelexReport::new(&engine, &library, cli.top);
    println!("\n{}", "Final Top Aptamers:".bold());
    for (idx, apt) in report.top_aptamers.iter().enumerate() {
        println!("{}. {} | Score: {:.3}", idx + 1, apt.sequence.to_string().cyan(), apt.score);
        println!("   GC: {:.2}% | Folding: {:.2}", apt.gc * 100.0, apt.folding);
    }

    if let Some(path) = &cli.output {
        report.write_json(path)?;
        info!("Results saved to {}.", path.display());
    }
    if let Some(path) = &cli.plot {
        plot_progress(engine.round_history(), path)?;
        info!("Progress plot saved to {}.", path.display());
    }
    Ok(())
}

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use log::info;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sx_sequence::GcRange;
use sx_sequence::NucleotideVec;
use sx_selex::design::AptamerRequest;
use sx_selex::design::TargetProperties;
use sx_selex::design::evaluate_aptamer;
use sx_selex::design::generate_aptamers;

/// Generate candidate aptamers and evaluate them against target properties.
#[derive(Parser, Debug)]
#[command(name = "aptagen", version, about, long_about = None)]
struct Cli {
    /// Length of generated sequences
    #[arg(short, long, default_value_t = 30)]
    length: usize,

    /// Number of candidates
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// Lower bound of the GC content range
    #[arg(long, default_value_t = 0.4)]
    gc_min: f64,

    /// Upper bound of the GC content range
    #[arg(long, default_value_t = 0.6)]
    gc_max: f64,

    /// Generate variations of this sequence instead of random sequences
    #[arg(long)]
    seed_sequence: Option<String>,

    /// Per-position substitution probability for seed variations
    #[arg(long, default_value_t = 0.2)]
    variation_rate: f64,

    /// Desired length for the evaluation score
    #[arg(long)]
    target_length: Option<usize>,

    /// Desired GC content for the evaluation score
    #[arg(long)]
    target_gc: Option<f64>,

    /// Random seed (drawn at random and logged if not given)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the generated candidates as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let request = AptamerRequest {
        length: cli.length,
        count: cli.count,
        gc_range: GcRange::new(cli.gc_min, cli.gc_max)?,
        seed_sequence: cli.seed_sequence.as_deref().map(NucleotideVec::try_from).transpose()?,
        variation_rate: cli.variation_rate,
        ..AptamerRequest::default()
    };
    let target = TargetProperties {
        target_length: cli.target_length,
        target_gc_content: cli.target_gc,
    };

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    info!("Using seed {seed}.");
    let mut rng = StdRng::seed_from_u64(seed);

    let aptamers = generate_aptamers(&request, &mut rng)?;

    println!("{}", "Generated Aptamers:".bold());
    for (i, aptamer) in aptamers.iter().enumerate() {
        println!("Aptamer {}:", i + 1);
        println!("  Sequence: {}", aptamer.sequence.to_string().green());
        println!("  Length: {}", aptamer.length);
        println!("  GC Content: {:.2}", aptamer.gc_content);
        println!("  Folding Score: {:.4}", aptamer.folding_score);
        println!("  Evaluation: {:.4}", evaluate_aptamer(&aptamer.sequence, &target));
    }

    if let Some(path) = &cli.output {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &aptamers)?;
        info!("Candidates saved to {}.", path.display());
    }
    Ok(())
}

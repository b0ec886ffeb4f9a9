use clap::Parser;
use log::error;
use shingle_dice::{score_csv, BatchScoringConfig, Error, DEFAULT_SHINGLE_LENGTH};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

/// Scores `left,right` string pairs from CSV with the Sørensen-Dice coefficient.
#[derive(Parser, Debug)]
#[command(name = "shingle-dice-cli", version, about)]
struct Args {
    /// Shingle length, in chars
    #[arg(short = 'k', long, default_value_t = DEFAULT_SHINGLE_LENGTH)]
    shingle_length: usize,

    /// Input is gzip-compressed
    #[arg(long)]
    gzip: bool,

    /// Print `1 - similarity` instead of similarity
    #[arg(long)]
    distance: bool,

    /// CSV file with `left` and `right` columns; stdin if omitted
    input: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), Error> {
    let config = BatchScoringConfig {
        shingle_length: args.shingle_length,
        gzip: args.gzip,
        distance: args.distance,
    };

    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    score_csv(&config, reader, io::stdout().lock())?;

    Ok(())
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("Error scoring string pairs: {}", e);
        std::process::exit(1);
    }
}

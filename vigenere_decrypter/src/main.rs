use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use vigenere_analysis::config::{DEFAULT_MAX_KEY_LENGTH, DEFAULT_REFERENCE_IC};
use vigenere_analysis::{AnalysisConfig, Symbol};

/// Command-line arguments for the Vigenère decryptor program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: PathBuf,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<PathBuf>,

    /// Path to a file where the recovered key will be saved
    #[arg(short, long, help = "Path to the output file for the recovered key")]
    key_output: Option<PathBuf>,

    /// Longest key length to try
    #[arg(long, default_value_t = DEFAULT_MAX_KEY_LENGTH)]
    max_key_length: usize,

    /// Expected Index of Coincidence of the plaintext language
    #[arg(long, default_value_t = DEFAULT_REFERENCE_IC)]
    reference_ic: f64,

    /// Most frequent letter of the plaintext language
    #[arg(long, default_value = "E", value_parser = parse_letter)]
    reference_letter: Symbol,
}

impl Cli {
    fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            max_key_length: self.max_key_length,
            reference_ic: self.reference_ic,
            reference_symbol: self.reference_letter,
        }
    }
}

/// Below this many letters the column statistics are unreliable
const MIN_RELIABLE_LETTERS: usize = 50;

fn main() -> Result<()> {
    init_tracing();

    let cli: Cli = Cli::parse();
    let input: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file.display()))?;

    debug!(version = vigenere_analysis::VERSION, "vigenere_decrypter");

    // Step 1 and 2: key length by Index of Coincidence, then key by frequency analysis
    let analysis = cli.analysis_config().analyze(&input);

    if analysis.letter_count < MIN_RELIABLE_LETTERS {
        warn!(letters = analysis.letter_count, "Text may be too short for reliable analysis");
    }

    for candidate in &analysis.candidates {
        info!("Key length {}: IC = {:.4}", candidate.length, candidate.average_ic);
    }
    info!("Found key length: {}", analysis.key_length);

    // Output key to stdout
    println!("{}", analysis.key);

    if let Some(path) = &cli.key_output {
        std::fs::write(path, analysis.key.to_string())
            .with_context(|| format!("Failed to write key file {}", path.display()))?;
        info!("Key saved to {}", path.display());
    }

    // Step 3: decrypt the original text, punctuation and layout included
    if let Some(path) = &cli.output {
        let decrypted_text: String = analysis.decrypt(&input)?;
        std::fs::write(path, &decrypted_text)
            .with_context(|| format!("Failed to write output file {}", path.display()))?;
        info!("Decrypted text saved to {}", path.display());
    }

    Ok(())
}

/// Parses a single letter of either case.
fn parse_letter(value: &str) -> std::result::Result<Symbol, String> {
    let mut chars = value.chars();
    match (chars.next().and_then(Symbol::from_char), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(format!("expected a single letter A-Z, got {value:?}")),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vigenere_analysis::{Direction, Key, transform};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: PathBuf,

    /// Key string for the Vigenère cipher
    #[arg(
        short,
        long,
        help = "Key string for the cipher",
        required_unless_present = "key_file",
        conflicts_with = "key_file"
    )]
    key: Option<String>,

    /// File holding the key; surrounding whitespace is ignored
    #[arg(long, help = "Path to a file containing the key")]
    key_file: Option<PathBuf>,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: PathBuf,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

impl From<OperationMode> for Direction {
    fn from(mode: OperationMode) -> Self {
        match mode {
            OperationMode::Encrypt => Direction::Encrypt,
            OperationMode::Decrypt => Direction::Decrypt,
        }
    }
}

/// Main entry point for the Vigenère cipher program.
fn main() -> Result<()> {
    init_tracing();

    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file.display()))?;

    let key: Key = load_key(cli.key.as_deref(), cli.key_file.as_deref())?;
    info!(mode = ?cli.mode, key = %key, "processing {}", cli.file.display());

    let result: String = transform(&content, &key, cli.mode.into())?;

    std::fs::write(&cli.output, result)
        .with_context(|| format!("Failed to write output file {}", cli.output.display()))?;

    println!("Operation completed successfully! Output saved to: {}", cli.output.display());
    Ok(())
}

/// Resolves the key from the command line or from a key file.
fn load_key(inline: Option<&str>, key_file: Option<&Path>) -> Result<Key> {
    match (inline, key_file) {
        (Some(text), _) => Key::parse(text).context("Invalid key"),
        (None, Some(path)) => {
            let text: String = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read key file {}", path.display()))?;
            Key::parse(&text).with_context(|| format!("Invalid key in {}", path.display()))
        }
        (None, None) => anyhow::bail!("No key given (use --key or --key-file)"),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

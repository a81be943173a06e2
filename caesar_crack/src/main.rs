use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use caesar_breaker::{Breaker, CaesarBreakerOneKey, CaesarBreakerTwoKey, Dictionary, Strategy};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the Caesar breaker program.
#[derive(Parser, Debug)]
struct Cli {
    /// Secret to break: a file path, or the encrypted text itself
    #[arg(help = "Path to the encrypted file, or the encrypted text")]
    secret: String,

    /// Word list used to recognise English, one word per line
    #[arg(short, long, help = "Path to the dictionary file")]
    dictionary: String,

    /// Break the alternating two-key variant
    #[arg(short, long, help = "Secret was encrypted with two alternating keys")]
    two_keys: bool,

    /// Key recovery strategy
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Auto, help = "Key recovery strategy")]
    strategy: StrategyArg,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<String>,

    /// Log search progress
    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

/// Strategy selection on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    /// Brute force short secrets, frequency analysis for long ones
    Auto,
    /// Try every key
    BruteForce,
    /// Derive keys from letter frequencies
    Frequency,
}

impl StrategyArg {
    /// `None` lets the breaker choose from the secret's size.
    fn strategy(self) -> Option<Strategy> {
        match self {
            StrategyArg::Auto => None,
            StrategyArg::BruteForce => Some(Strategy::BruteForce),
            StrategyArg::Frequency => Some(Strategy::FrequencyAnalysis),
        }
    }
}

/// Main entry point for the Caesar breaker.
fn main() -> anyhow::Result<ExitCode> {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();
    init_tracing(cli.verbose);

    let dictionary = Dictionary::from_path(&cli.dictionary)
        .with_context(|| format!("Failed to load the dictionary {}", cli.dictionary))?;
    let dictionary = Arc::new(dictionary);
    let strategy = cli.strategy.strategy();

    // Recover the key(s) and the plaintext
    let recovered = if cli.two_keys {
        let mut breaker = CaesarBreakerTwoKey::with_dictionary(dictionary);
        breaker.decrypt_with(&cli.secret, strategy)?;
        breaker.key().map(|key| (key.to_string(), breaker.decrypted().to_string()))
    } else {
        let mut breaker = CaesarBreakerOneKey::with_dictionary(dictionary);
        breaker.decrypt_with(&cli.secret, strategy)?;
        breaker.key().map(|key| (key.to_string(), breaker.decrypted().to_string()))
    };

    let Some((key, plaintext)) = recovered else {
        eprintln!("Could not decrypt the secret");
        return Ok(ExitCode::FAILURE);
    };

    println!("Detected cipher key: {}", key);

    // Write the decrypted text to the output file, or print it
    match &cli.output {
        Some(path) => {
            std::fs::write(path, &plaintext)
                .with_context(|| format!("Failed to write the output file {}", path))?;
            info!(path = %path, "plaintext written");
        }
        None => println!("{}", plaintext),
    }
    Ok(ExitCode::SUCCESS)
}

/// Installs the log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

use anyhow::Context;
use caesar_cipher::CaesarCipher;
use clap::{Parser, ValueEnum};


// Defining the command-line arguments.
#[derive(Parser, Debug)]
struct Cli {
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    #[arg(short, long, help = "Key for the cipher (0-26)")]
    key: u8,

    #[arg(short, long, help = "Second key for odd positions (enables the two-key cipher)")]
    second_key: Option<u8>,

    #[arg(short, long, help = "Path to the output file")]
    output: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OperationMode::Encrypt, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    Encrypt,
    Decrypt,
}

fn main() -> anyhow::Result<()> {
    let cli: Cli = Cli::parse();

    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read the input file {}", cli.file))?;

    let cipher = match cli.second_key {
        Some(second_key) => CaesarCipher::with_two_keys(cli.key, second_key)?,
        None => CaesarCipher::new(cli.key)?,
    };

    let result = match cli.mode {
        OperationMode::Encrypt => cipher.encrypt(&content),
        OperationMode::Decrypt => cipher.decrypt(&content),
    };

    match &cli.output {
        Some(path) => std::fs::write(path, result)
            .with_context(|| format!("Failed to write the output file {}", path))?,
        None => println!("{}", result),
    }
    Ok(())
}

//! `glex` - lex a source file and print its tokens.
//!
//! Prints one lexeme per line by default. On a lex error the diagnostic
//! goes to stderr and the process exits with status 1.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use generic_lexer::{lexer::lexer::Lexer, render_error, Token};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const STDIN_NAME: &str = "<stdin>";

/// Tokenize a source file and print the tokens
#[derive(Parser, Debug)]
#[command(name = "glex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a source file and print the tokens", long_about = None)]
struct Cli {
    /// Source file to lex (reads stdin when omitted or `-`)
    file: Option<PathBuf>,

    /// File name used in diagnostics and token locations
    #[arg(long)]
    name: Option<String>,

    /// How to print the tokens
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Lexemes, env = "GLEX_FORMAT")]
    format: OutputFormat,

    /// Show the offending source line under a lex error
    #[arg(long)]
    snippet: bool,

    /// Enable debug logging
    #[arg(short, long, env = "GLEX_VERBOSE")]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// One lexeme per line
    Lexemes,
    /// Kind, lexeme and location per line
    Debug,
    /// The token stream as a JSON array
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = init_logging(cli.verbose) {
        eprintln!("ERROR: {:#}", error);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("ERROR: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with the token listing. `RUST_LOG`
/// wins over `--verbose` when set.
fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let (file_name, source) = read_source(cli)?;
    debug!(file = %file_name, bytes = source.len(), "read source");

    let tokens = match Lexer::new(file_name, source.as_slice()).lex() {
        Ok(tokens) => tokens,
        Err(error) => {
            if cli.snippet {
                eprintln!("{}", render_error(&error, &String::from_utf8_lossy(&source)));
            } else {
                eprintln!("{}", error);
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    print!("{}", format_tokens(&tokens, cli.format)?);
    Ok(ExitCode::SUCCESS)
}

/// Reads the raw bytes of the input; the lexer classifies bytes itself, so
/// the text does not have to be UTF-8.
fn read_source(cli: &Cli) -> Result<(String, Vec<u8>)> {
    match cli.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let source =
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            let name = cli.name.clone().unwrap_or_else(|| {
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string())
            });
            Ok((name, source))
        }
        _ => {
            let mut source = Vec::new();
            io::stdin()
                .read_to_end(&mut source)
                .context("failed to read stdin")?;
            let name = cli.name.clone().unwrap_or_else(|| STDIN_NAME.to_string());
            Ok((name, source))
        }
    }
}

fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String> {
    let mut out = String::new();

    match format {
        OutputFormat::Lexemes => {
            for token in tokens {
                out.push_str(&token.value);
                out.push('\n');
            }
        }
        OutputFormat::Debug => {
            for token in tokens {
                out.push_str(&token.describe());
                out.push('\n');
            }
        }
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(tokens).context("failed to serialize tokens")?;
            out.push('\n');
        }
    }

    Ok(out)
}

use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use monkey::{lexer::lexer::tokenize, parser::parser::parse, render_error};
use tracing_subscriber::EnvFilter;

/// Scans and parses a Monkey source file, printing the reconstructed
/// program or the syntax errors found.
#[derive(Parser, Debug)]
#[command(name = "monkey", version, about)]
struct Cli {
    /// Source file to parse
    file: PathBuf,
    /// Print the token stream instead of the parsed program
    #[arg(long)]
    tokens: bool,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            tracing::error!(path = %cli.file.display(), "failed to read file: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.display().to_string());

    let start = Instant::now();

    if cli.tokens {
        for token in tokenize(&source) {
            println!("{}", token.debug());
        }
        tracing::info!("Tokenized in {:?}", start.elapsed());
        return ExitCode::SUCCESS;
    }

    let (program, errors) = parse(&source);
    tracing::info!("Parsed in {:?}", start.elapsed());

    if !errors.is_empty() {
        for error in &errors {
            eprint!("{}", render_error(error, &source, &file_name));
        }
        tracing::info!("{} syntax error(s)", errors.len());
        return ExitCode::FAILURE;
    }

    println!("{}", program);

    ExitCode::SUCCESS
}

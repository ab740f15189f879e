//! `pwd-checker` - interactive password strength check.
//!
//! Prompts for one password, prints its score, category and feedback.
//! Logs go to stderr; set `RUST_LOG=pwd_checker=debug` to see them.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use pwd_checker::cli::{self, InputMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pwd-checker")]
#[command(about = "Check how strong a password is", long_about = None)]
#[command(version)]
struct Cli {
    /// Hide the password while typing
    #[arg(short, long)]
    mask: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Cli::parse();
    let mode = if args.mask {
        InputMode::Masked
    } else {
        InputMode::Echo
    };

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    match cli::run(&mut input, &mut output, mode) {
        Ok(Some(_)) => ExitCode::SUCCESS,
        Ok(None) => {
            eprintln!();
            eprintln!("No password entered.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

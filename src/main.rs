//! Fibonacci strategies CLI - compares four ways of computing the Nth Fibonacci number

mod cli;
mod config;
mod error;
mod output;

use std::io::{self, Write};

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use fibonacci_strategies::strategy::evaluate_all;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);
    if config.verbose {
        eprintln!(
            "timeout per strategy: {:?}, worker stack: {} bytes",
            config.worker.timeout, config.worker.stack_size
        );
    }

    println!("\n{}\n", output::HEADER);

    let position = match config.position {
        Some(position) => position,
        None => {
            let position = config::prompt_position(io::stdin().lock(), io::stdout())?;
            println!();
            position
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let evaluations = runtime.block_on(evaluate_all(position, config.worker));

    let mut stdout = io::stdout().lock();
    for evaluation in &evaluations {
        writeln!(stdout, "{}", output::format_evaluation(evaluation))?;
        if config.verbose {
            eprintln!(
                "{}: {:?}",
                evaluation.strategy.label(),
                evaluation.elapsed
            );
        }
    }

    // Workers abandoned after a timeout are detached and end with the process.
    Ok(())
}

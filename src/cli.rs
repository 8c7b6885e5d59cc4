//! CLI argument parsing using clap

use clap::Parser;
use fibonacci_strategies::fibonacci::Position;

/// Compute the Nth Fibonacci number with four different strategies
#[derive(Parser, Debug)]
#[command(name = "fibonacci-strategies", about, version)]
pub struct Args {
    /// Position in the sequence (read from standard input if omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    pub position: Option<Position>,

    /// Wall-clock budget for each strategy, in seconds
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Stack reserved for each worker thread, in MiB
    #[arg(long, default_value_t = 64, value_parser = clap::value_parser!(u64).range(1..=1024))]
    pub stack_size_mib: u64,

    /// Print configuration and per-strategy timings on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

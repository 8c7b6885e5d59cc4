//! Configuration resolution from CLI args

use std::io::{BufRead, Write};
use std::time::Duration;

use fibonacci_strategies::bounded::WorkerOptions;
use fibonacci_strategies::fibonacci::Position;

use crate::cli::Args;
use crate::error::CliError;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Position given on the command line (prompted for if None)
    pub position: Option<Position>,
    /// Per-strategy timeout and worker stack size
    pub worker: WorkerOptions,
    /// Print diagnostics on stderr
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Config {
            position: args.position,
            worker: WorkerOptions {
                timeout: Duration::from_secs(args.timeout_secs),
                // At most 1024 MiB, so this fits a 32-bit usize.
                stack_size: (args.stack_size_mib as usize) << 20,
            },
            verbose: args.verbose,
        }
    }
}

/// Prompt on `writer` and read one integer position from `reader`
pub fn prompt_position<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<Position, CliError> {
    write!(writer, "Enter the position of the fibonacci number: ")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(CliError::MissingInput);
    }

    let input = line.trim();
    input
        .parse::<Position>()
        .map_err(|source| CliError::InvalidInput {
            input: input.to_string(),
            source,
        })
}

//! Error types for the CLI

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input closed before a position was entered
    #[error("No position was entered")]
    MissingInput,

    /// Input was not an integer in range
    #[error("Invalid position {input:?}: {source}")]
    InvalidInput {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// Tokio runtime could not be built
    #[error("Runtime creation failed: {0}")]
    Runtime(#[source] std::io::Error),
}

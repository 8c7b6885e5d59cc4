use std::fmt;
use std::time::{Duration, Instant};

use crate::bounded::{run_bounded, BoundedError, WorkerOptions};
use crate::fibonacci::{
    fibo_iterative, fibo_memo, fibo_naive, fibo_tabulated, FibonacciError, FibonacciValue,
    Position, RECURSION_STACK_SIZE,
};

/// One of the four ways of computing a Fibonacci number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Recursive,
    Memoization,
    Tabulation,
    SpaceOptimized,
}

impl Strategy {
    /// Every strategy, in the order results are reported.
    pub const ALL: [Strategy; 4] = [
        Strategy::Recursive,
        Strategy::Memoization,
        Strategy::Tabulation,
        Strategy::SpaceOptimized,
    ];

    /// Name used when reporting the strategy's result.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Recursive => "Recursive",
            Strategy::Memoization => "Memoization",
            Strategy::Tabulation => "Tabulation",
            Strategy::SpaceOptimized => "Space-Optimized",
        }
    }

    /// Whether the strategy recurses once per position.
    pub fn is_recursive(self) -> bool {
        matches!(self, Strategy::Recursive | Strategy::Memoization)
    }

    /// Worker settings for this strategy. Recursive strategies never get less than
    /// [`RECURSION_STACK_SIZE`], whatever the caller asked for.
    pub fn worker_options(self, options: WorkerOptions) -> WorkerOptions {
        if !self.is_recursive() {
            return options;
        }
        WorkerOptions {
            stack_size: options.stack_size.max(RECURSION_STACK_SIZE),
            ..options
        }
    }

    /// Runs the strategy on the current thread, without any time bound.
    pub fn compute(self, position: Position) -> Result<FibonacciValue, FibonacciError> {
        match self {
            Strategy::Recursive => fibo_naive(position),
            Strategy::Memoization => fibo_memo(position),
            Strategy::Tabulation => fibo_tabulated(position),
            Strategy::SpaceOptimized => fibo_iterative(position),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("{0}")]
    Fibonacci(#[from] FibonacciError),
    #[error("{0}")]
    Bounded(#[from] BoundedError),
}

/// Outcome of one strategy run by [`evaluate_all`].
#[derive(Debug)]
pub struct Evaluation {
    pub strategy: Strategy,
    pub outcome: Result<FibonacciValue, StrategyError>,
    pub elapsed: Duration,
}

/// Runs a single strategy on its own worker, bounded by `options.timeout`.
pub async fn evaluate(
    strategy: Strategy,
    position: Position,
    options: WorkerOptions,
) -> Result<FibonacciValue, StrategyError> {
    let options = strategy.worker_options(options);
    let value = run_bounded(options, move || strategy.compute(position)).await??;
    Ok(value)
}

/// Runs every strategy in [`Strategy::ALL`] order, each with its own time budget.
///
/// A failing or timed-out strategy does not stop the ones after it.
pub async fn evaluate_all(position: Position, options: WorkerOptions) -> Vec<Evaluation> {
    let mut evaluations = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let started = Instant::now();
        let outcome = evaluate(strategy, position, options).await;
        evaluations.push(Evaluation {
            strategy,
            outcome,
            elapsed: started.elapsed(),
        });
    }
    evaluations
}

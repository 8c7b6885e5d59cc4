//! Result line formatting

use fibonacci_strategies::strategy::Evaluation;

pub const HEADER: &str = "--- Finding the 'Nth' Fibonacci Number ---";

/// One line per strategy: the value, or the error message in its place
pub fn format_evaluation(evaluation: &Evaluation) -> String {
    let body = match &evaluation.outcome {
        Ok(value) => value.to_string(),
        Err(e) => e.to_string(),
    };
    format!("OUTPUT ({} Algorithm) -> {}", evaluation.strategy.label(), body)
}

//! # Fibonacci Strategies Library
//!
//! This library computes the Nth Fibonacci number four different ways, so their time and space
//! trade-offs can be compared side by side. Every strategy works on `i64` values; additions wrap
//! on overflow, so results past F(92) are not meaningful.
//!
//! ## Key Features
//! - **Naive Recursion**: The textbook definition, O(2^n) time.
//! - **Memoized Recursion**: The same recursion with a cache that lives for a single call.
//! - **Tabulation**: Bottom-up fill of a table of every value up to n. No recursion.
//! - **Space-Optimized Iteration**: Bottom-up keeping only the last two values, O(1) space.
//! - **Bounded Execution**: Runs any computation on a detached worker thread and gives up
//!   after a wall-clock budget.
//!
//! ## Overview of Modules
//!
//! ### `fibonacci`
//! The four algorithms (`fibo_naive`, `fibo_memo`, `fibo_tabulated`, `fibo_iterative`) and the
//! shared `validate_position` check. `FibonacciError` covers negative positions and positions
//! too deep for the recursive strategies.
//!
//! ### `bounded`
//! `run_bounded` hands a closure to a worker thread and awaits its result under
//! `tokio::time::timeout`. The worker is never cancelled; on timeout it is simply abandoned.
//!
//! ### `strategy`
//! `Strategy` names the four algorithms in their reporting order. `evaluate` runs one of them
//! through `run_bounded`, and `evaluate_all` runs all four, each with its own budget, collecting
//! every outcome.
//!
//! ## Usage Example
//! ```rust
//! use fibonacci_strategies::bounded::WorkerOptions;
//! use fibonacci_strategies::strategy::{evaluate_all, Strategy};
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let evaluations = evaluate_all(30, WorkerOptions::default()).await;
//! assert_eq!(evaluations.len(), Strategy::ALL.len());
//! for evaluation in evaluations {
//!     assert_eq!(evaluation.outcome.unwrap(), 832040);
//! }
//! # });
//! ```

pub mod bounded;
pub mod fibonacci;
pub mod strategy;

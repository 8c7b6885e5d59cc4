/// Zero-based index into the Fibonacci sequence. Signed so that negative input reaches the validator.
pub type Position = i32;

/// Result of a computation. Additions wrap on overflow, so values past F(92) are not meaningful.
pub type FibonacciValue = i64;

/// Deepest position the recursive strategies accept.
///
/// Running out of stack aborts the whole process rather than unwinding. This limit is only
/// safe on a stack of at least [`RECURSION_STACK_SIZE`], which is what
/// [`crate::strategy::evaluate`] gives the recursive strategies. Ordinary threads (8 MiB for
/// `main`, 2 MiB for spawned threads) overflow well before it.
pub const MAX_RECURSION_DEPTH: Position = 100_000;

/// Stack needed to recurse [`MAX_RECURSION_DEPTH`] frames, debug builds included.
pub const RECURSION_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Why a strategy could not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FibonacciError {
    #[error("Position of a number in the Fibonacci series cannot be negative! (got {0})")]
    NegativePosition(Position),
    #[error("Position {position} is too deep for a recursive strategy (limit {limit})")]
    RecursionTooDeep { position: Position, limit: Position },
    #[error("Not enough memory for a table of {len} entries (position {position})")]
    OutOfMemory { position: Position, len: usize },
}

/// Rejects negative positions.
///
/// # Example
/// ```
/// use fibonacci_strategies::fibonacci::{validate_position, FibonacciError};
/// assert!(validate_position(0).is_ok());
/// assert_eq!(validate_position(-1), Err(FibonacciError::NegativePosition(-1)));
/// ```
pub fn validate_position(position: Position) -> Result<(), FibonacciError> {
    if position < 0 {
        return Err(FibonacciError::NegativePosition(position));
    }
    Ok(())
}

fn validate_recursion_depth(position: Position) -> Result<(), FibonacciError> {
    if position > MAX_RECURSION_DEPTH {
        return Err(FibonacciError::RecursionTooDeep {
            position,
            limit: MAX_RECURSION_DEPTH,
        });
    }
    Ok(())
}

/// Allocates a table of `len` copies of `fill`, reporting allocation failure instead of aborting.
fn allocate_table<T: Clone>(
    position: Position,
    len: usize,
    fill: T,
) -> Result<Vec<T>, FibonacciError> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .map_err(|_| FibonacciError::OutOfMemory { position, len })?;
    table.resize(len, fill);
    Ok(table)
}

/// Computes F(`position`) straight from the recursive definition.
///
/// Runs in O(2^n) time and O(n) stack, since the same sub-problems are solved over and over.
/// Anything past roughly 40 takes long enough that callers should bound it with a timeout.
/// Positions up to [`MAX_RECURSION_DEPTH`] assume a stack of [`RECURSION_STACK_SIZE`].
///
/// # Example
/// ```
/// use fibonacci_strategies::fibonacci;
/// assert_eq!(fibonacci::fibo_naive(10), Ok(55));
/// ```
pub fn fibo_naive(position: Position) -> Result<FibonacciValue, FibonacciError> {
    validate_position(position)?;
    validate_recursion_depth(position)?;
    Ok(naive(position as usize))
}

fn naive(n: usize) -> FibonacciValue {
    if n < 2 {
        return n as FibonacciValue;
    }
    naive(n - 1).wrapping_add(naive(n - 2))
}

/// Computes F(`position`) recursively, caching every sub-result.
///
/// The memo lives only for this call: it is allocated here, borrowed by the recursion and
/// dropped on return. Runs in O(n) time and O(n) space (memo plus recursion stack).
/// Positions up to [`MAX_RECURSION_DEPTH`] assume a stack of [`RECURSION_STACK_SIZE`]; deep
/// positions on a smaller stack overflow and abort the process.
///
/// # Example
/// ```
/// use fibonacci_strategies::fibonacci;
/// assert_eq!(fibonacci::fibo_memo(20), Ok(6765));
/// ```
pub fn fibo_memo(position: Position) -> Result<FibonacciValue, FibonacciError> {
    validate_position(position)?;
    validate_recursion_depth(position)?;
    if position < 2 {
        return Ok(position as FibonacciValue);
    }

    let n = position as usize;
    let mut memo: Vec<Option<FibonacciValue>> = allocate_table(position, n + 1, None)?;
    memo[0] = Some(0);
    memo[1] = Some(1);

    Ok(memoized(n, &mut memo))
}

fn memoized(n: usize, memo: &mut [Option<FibonacciValue>]) -> FibonacciValue {
    if let Some(value) = memo[n] {
        return value;
    }
    let value = memoized(n - 1, memo).wrapping_add(memoized(n - 2, memo));
    memo[n] = Some(value);
    value
}

/// Computes F(`position`) bottom-up into a table of every value up to `position`.
///
/// Same O(n) time and space as [`fibo_memo`], without any recursion, so there is no depth limit.
///
/// # Example
/// ```
/// use fibonacci_strategies::fibonacci;
/// assert_eq!(fibonacci::fibo_tabulated(30), Ok(832040));
/// ```
pub fn fibo_tabulated(position: Position) -> Result<FibonacciValue, FibonacciError> {
    validate_position(position)?;
    if position < 2 {
        return Ok(position as FibonacciValue);
    }

    let n = position as usize;
    let mut dp: Vec<FibonacciValue> = allocate_table(position, n + 1, 0)?;
    dp[1] = 1;
    for i in 2..=n {
        dp[i] = dp[i - 1].wrapping_add(dp[i - 2]);
    }

    Ok(dp[n])
}

/// Computes F(`position`) bottom-up keeping only the last two values.
///
/// O(n) time, O(1) space.
///
/// # Example
/// ```
/// use fibonacci_strategies::fibonacci;
/// assert_eq!(fibonacci::fibo_iterative(1), Ok(1));
/// assert_eq!(fibonacci::fibo_iterative(50), Ok(12586269025));
/// ```
pub fn fibo_iterative(position: Position) -> Result<FibonacciValue, FibonacciError> {
    validate_position(position)?;
    if position < 2 {
        return Ok(position as FibonacciValue);
    }

    let mut previous_to_previous: FibonacciValue = 0;
    let mut previous: FibonacciValue = 1;
    let mut current: FibonacciValue = 1;

    for _ in 2..=position {
        current = previous.wrapping_add(previous_to_previous);
        previous_to_previous = previous;
        previous = current;
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    type Algorithm = fn(Position) -> Result<FibonacciValue, FibonacciError>;

    const ALGORITHMS: [(&str, Algorithm); 4] = [
        ("naive", fibo_naive),
        ("memo", fibo_memo),
        ("tabulated", fibo_tabulated),
        ("iterative", fibo_iterative),
    ];

    #[test]
    fn known_values() {
        for (name, algorithm) in ALGORITHMS {
            assert_eq!(algorithm(0), Ok(0), "{name}");
            assert_eq!(algorithm(1), Ok(1), "{name}");
            assert_eq!(algorithm(2), Ok(1), "{name}");
            assert_eq!(algorithm(10), Ok(55), "{name}");
            assert_eq!(algorithm(20), Ok(6765), "{name}");
        }
    }

    #[test]
    fn position_thirty_agrees_everywhere() {
        for (name, algorithm) in ALGORITHMS {
            assert_eq!(algorithm(30), Ok(832040), "{name}");
        }
    }

    #[test]
    fn negative_positions_are_rejected() {
        for (name, algorithm) in ALGORITHMS {
            assert_eq!(
                algorithm(-1),
                Err(FibonacciError::NegativePosition(-1)),
                "{name}"
            );
            assert_eq!(
                algorithm(Position::MIN),
                Err(FibonacciError::NegativePosition(Position::MIN)),
                "{name}"
            );
        }
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        for (name, algorithm) in ALGORITHMS {
            assert_eq!(algorithm(25), algorithm(25), "{name}");
        }
    }

    #[test]
    fn memo_does_not_leak_between_calls() {
        assert_eq!(fibo_memo(40), Ok(102334155));
        assert_eq!(fibo_memo(5), Ok(5));
        assert_eq!(fibo_memo(40), Ok(102334155));
    }

    #[test]
    fn recursive_strategies_refuse_excessive_depth() {
        let too_deep = MAX_RECURSION_DEPTH + 1;
        let expected = Err(FibonacciError::RecursionTooDeep {
            position: too_deep,
            limit: MAX_RECURSION_DEPTH,
        });
        assert_eq!(fibo_naive(too_deep), expected);
        assert_eq!(fibo_memo(too_deep), expected);
        assert!(fibo_tabulated(too_deep).is_ok());
        assert!(fibo_iterative(too_deep).is_ok());
    }

    #[test]
    fn oversized_table_is_reported() {
        assert_eq!(
            allocate_table::<FibonacciValue>(7, usize::MAX, 0),
            Err(FibonacciError::OutOfMemory {
                position: 7,
                len: usize::MAX
            })
        );
        assert_eq!(allocate_table(3, 4, 0_i64), Ok(vec![0; 4]));
    }

    #[test]
    fn last_representable_value() {
        assert_eq!(fibo_iterative(92), Ok(7540113804746346429));
        assert_eq!(fibo_tabulated(92), Ok(7540113804746346429));
        assert_eq!(fibo_memo(92), Ok(7540113804746346429));
    }

    #[test]
    fn overflow_wraps_silently() {
        let wrapped = 7540113804746346429_i64.wrapping_add(4660046610375530309);
        assert!(wrapped < 0);
        assert_eq!(fibo_iterative(93), Ok(wrapped));
        assert_eq!(fibo_tabulated(93), Ok(wrapped));
        assert_eq!(fibo_memo(93), Ok(wrapped));
    }
}

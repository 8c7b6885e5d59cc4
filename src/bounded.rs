use std::thread;
use std::time::Duration;

use tokio::sync::oneshot;

/// Default wall-clock budget for a single job.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default stack reserved for each worker thread.
pub const DEFAULT_STACK_SIZE: usize = 64 * 1024 * 1024;

/// How long to wait for a worker and how much stack to give it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerOptions {
    /// Wall-clock budget before the worker is abandoned.
    pub timeout: Duration,
    /// Stack size of the worker thread, in bytes.
    pub stack_size: usize,
}

impl Default for WorkerOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BoundedError {
    #[error("Computation did not finish within {0:?}")]
    Timeout(Duration),
    #[error("Worker thread panicked before producing a result")]
    WorkerPanicked,
    #[error("Worker thread could not be spawned: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Runs `job` on a dedicated worker thread and waits at most `options.timeout` for its result.
///
/// The worker is detached. A pure computation has no checkpoint at which it could be told to
/// stop, so on timeout the thread is abandoned and keeps running until it returns or the
/// process exits.
///
/// # Example
/// ```
/// use fibonacci_strategies::bounded::{run_bounded, WorkerOptions};
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let sum = run_bounded(WorkerOptions::default(), || 2 + 2).await.unwrap();
/// assert_eq!(sum, 4);
/// # });
/// ```
pub async fn run_bounded<T, F>(options: WorkerOptions, job: F) -> Result<T, BoundedError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (sender, receiver) = oneshot::channel();

    // The handle is dropped on purpose, which detaches the thread.
    thread::Builder::new()
        .name("bounded-worker".into())
        .stack_size(options.stack_size)
        .spawn(move || {
            // The receiver is gone once the caller timed out; nobody is left to tell.
            let _ = sender.send(job());
        })?;

    match tokio::time::timeout(options.timeout, receiver).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => Err(BoundedError::WorkerPanicked),
        Err(_) => Err(BoundedError::Timeout(options.timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(timeout: Duration) -> WorkerOptions {
        WorkerOptions {
            timeout,
            ..WorkerOptions::default()
        }
    }

    #[tokio::test]
    async fn returns_value_within_budget() {
        let value = run_bounded(options(Duration::from_secs(5)), || 21 * 2)
            .await
            .unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn reports_timeout_for_slow_job() {
        let limit = Duration::from_millis(50);
        let result = run_bounded(options(limit), || {
            thread::sleep(Duration::from_millis(500));
            1
        })
        .await;
        assert!(matches!(result, Err(BoundedError::Timeout(d)) if d == limit));
    }

    #[tokio::test]
    async fn reports_panicking_worker() {
        let result = run_bounded(options(Duration::from_secs(5)), || -> u8 {
            panic!("boom");
        })
        .await;
        assert!(matches!(result, Err(BoundedError::WorkerPanicked)));
    }
}

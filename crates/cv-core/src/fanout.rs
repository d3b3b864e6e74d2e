//! Concurrent fetch-and-join with an all-or-nothing policy.
//!
//! Every future is driven to completion. Results come back in input order,
//! never completion order. A single failure discards all successful values.

use std::future::Future;

use futures::future::join_all;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{failed} of {total} joined operations failed: {first}")]
pub struct FanOutError<E: std::error::Error + 'static> {
    pub failed: usize,
    pub total: usize,
    /// Error of the lowest-indexed failing operation.
    #[source]
    pub first: E,
}

/// Run `operations` concurrently and wait for all of them to settle.
///
/// Returns every value in input order, or the first failure (by position)
/// together with the failure count.
pub async fn join_all_or_nothing<I, F, T, E>(operations: I) -> Result<Vec<T>, FanOutError<E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
    E: std::error::Error + 'static,
{
    let settled = join_all(operations).await;
    let total = settled.len();

    let mut values = Vec::with_capacity(total);
    let mut first = None;
    let mut failed = 0;
    for outcome in settled {
        match outcome {
            Ok(value) => values.push(value),
            Err(err) => {
                failed += 1;
                first.get_or_insert(err);
            }
        }
    }

    match first {
        Some(first) => Err(FanOutError {
            failed,
            total,
            first,
        }),
        None => Ok(values),
    }
}

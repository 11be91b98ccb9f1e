//! Concurrent executor for asyncro combinators
//!
//! Drives every step future inside the caller's task with a `FuturesUnordered`
//! and writes each result back into the slot of the index it came from.

use futures_util::stream::{FuturesUnordered, StreamExt};
use futures_util::{FutureExt, TryFuture, TryFutureExt};
use tracing::{debug, trace};

/// Await a batch of already-invoked step futures jointly.
///
/// # Returns
/// * `Ok(Vec<T>)` - Results in the order the futures were supplied, regardless
///   of the order in which they completed
/// * `Err(E)` - The first failure in completion order
///
/// # Failure policy
/// The first observed failure decides the outcome. Futures still in flight at
/// that point keep being polled until they finish and their outcomes are
/// discarded; none of them is dropped unfinished.
pub(crate) async fn join_indexed<Fut>(pending: Vec<Fut>) -> Result<Vec<Fut::Ok>, Fut::Error>
where
    Fut: TryFuture,
{
    // Empty batch fast path
    if pending.is_empty() {
        return Ok(Vec::new());
    }

    let len = pending.len();
    let mut in_flight: FuturesUnordered<_> = pending
        .into_iter()
        .enumerate()
        .map(|(index, step)| step.into_future().map(move |outcome| (index, outcome)))
        .collect();

    let mut slots: Vec<Option<Fut::Ok>> = (0..len).map(|_| None).collect();
    let mut failure: Option<Fut::Error> = None;

    while let Some((index, outcome)) = in_flight.next().await {
        match outcome {
            Ok(value) if failure.is_none() => {
                trace!(index, "step resolved");
                slots[index] = Some(value);
            }
            Ok(_) => trace!(index, "discarding result after earlier failure"),
            Err(err) if failure.is_none() => {
                debug!(
                    index,
                    remaining = in_flight.len(),
                    "step failed; draining in-flight steps"
                );
                failure = Some(err);
            }
            Err(_) => trace!(index, "discarding failure after earlier failure"),
        }
    }

    if let Some(err) = failure {
        return Err(err);
    }

    // Every slot is filled once all futures resolved without failure
    let values: Vec<Fut::Ok> = slots.into_iter().flatten().collect();
    debug_assert_eq!(values.len(), len);
    Ok(values)
}

/// Invoke an async transform on every element **concurrently**, returning the
/// transformed values in input order.
///
/// `mapper` is called once per index, in index order, in a single pass before
/// any of the returned futures is awaited. The combinator then suspends until
/// all of them resolved.
///
/// # Example
/// ```
/// use asyncro::map;
/// use std::convert::Infallible;
///
/// # tokio_test::block_on(async {
/// let doubled = map(&[1, 2, 3], |v, _, _| async move { Ok::<_, Infallible>(v * 2) })
///     .await
///     .unwrap();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// # });
/// ```
pub async fn map<'a, T, F, Fut>(items: &'a [T], mut mapper: F) -> Result<Vec<Fut::Ok>, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture,
{
    debug!(len = items.len(), "map: invoking steps concurrently");

    let pending: Vec<Fut> = items
        .iter()
        .enumerate()
        .map(|(index, value)| mapper(value, index, items))
        .collect();

    join_indexed(pending).await
}

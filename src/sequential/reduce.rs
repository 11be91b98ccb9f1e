//! Ordered accumulation over a sequence
//!
//! Every entry point here is a thin shape over `fold`: one step at a time,
//! each awaited before the next is invoked.

use futures_util::future::LocalBoxFuture;
use futures_util::{TryFuture, TryFutureExt};
use tracing::{debug, trace};

/// Drive `step` over `items` strictly in order, threading the accumulator.
///
/// Step N+1 is not invoked until step N resolved. On the first failure the
/// fold returns it and never touches the remaining items.
pub(crate) async fn fold<I, A, F, Fut>(items: I, initial: A, mut step: F) -> Result<A, Fut::Error>
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> Fut,
    Fut: TryFuture<Ok = A>,
{
    let mut acc = initial;
    for (index, item) in items.into_iter().enumerate() {
        match step(acc, item).into_future().await {
            Ok(next) => {
                trace!(index, "sequential step resolved");
                acc = next;
            }
            Err(err) => {
                debug!(index, "sequential step failed; skipping remaining steps");
                return Err(err);
            }
        }
    }
    Ok(acc)
}

/// Invoke an async reducer on each element **in order**, where the reducer
/// transforms an accumulator based on each element.
///
/// The reducer gets `(accumulator, value, index, items)` and resolves to the
/// next accumulator. Because later steps may depend on earlier ones, each step
/// is awaited before the next begins. Unlike [`Iterator::reduce`], the first
/// element is never used as the seed: the reducer runs once per element.
///
/// Returns `initial` unchanged for an empty sequence.
///
/// # Example
/// ```
/// use asyncro::reduce;
/// use std::convert::Infallible;
///
/// # tokio_test::block_on(async {
/// let sum = reduce(&[1, 2], |acc: i32, v, _, _| async move { Ok::<_, Infallible>(acc + v) }, 0)
///     .await
///     .unwrap();
/// assert_eq!(sum, 3);
/// # });
/// ```
pub async fn reduce<'a, T, A, F, Fut>(
    items: &'a [T],
    mut reducer: F,
    initial: A,
) -> Result<A, Fut::Error>
where
    F: FnMut(A, &'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = A>,
{
    debug!(len = items.len(), "reduce: running steps sequentially");
    fold(items.iter().enumerate(), initial, |acc, (index, value)| {
        reducer(acc, value, index, items)
    })
    .await
}

/// [`reduce`] without a seed.
///
/// The first reducer call receives `None`; every later call receives the
/// previous step's output wrapped in `Some`. Resolves to `None` for an empty
/// sequence.
pub async fn reduce_unseeded<'a, T, A, F, Fut>(
    items: &'a [T],
    mut reducer: F,
) -> Result<Option<A>, Fut::Error>
where
    F: FnMut(Option<A>, &'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = A>,
{
    debug!(len = items.len(), "reduce_unseeded: running steps sequentially");
    fold(items.iter().enumerate(), None, |acc, (index, value)| {
        reducer(acc, value, index, items).map_ok(Some)
    })
    .await
}

/// [`reduce`] for reducers that update the accumulator in place.
///
/// The reducer borrows the accumulator mutably for the duration of its step
/// and resolves to `()`; the accumulator itself is returned at the end.
///
/// # Example
/// ```
/// use asyncro::reduce_mut;
/// use futures_util::FutureExt;
/// use std::collections::HashMap;
/// use std::convert::Infallible;
///
/// # tokio_test::block_on(async {
/// let lengths = reduce_mut(
///     &["foo", "quux"],
///     |acc: &mut HashMap<String, usize>, v, _, _| {
///         async move {
///             acc.insert(v.to_string(), v.len());
///             Ok::<_, Infallible>(())
///         }
///         .boxed_local()
///     },
///     HashMap::new(),
/// )
/// .await
/// .unwrap();
/// assert_eq!(lengths["quux"], 4);
/// # });
/// ```
pub async fn reduce_mut<T, A, F, E>(items: &[T], mut reducer: F, mut acc: A) -> Result<A, E>
where
    F: for<'b> FnMut(&'b mut A, &'b T, usize, &'b [T]) -> LocalBoxFuture<'b, Result<(), E>>,
{
    debug!(len = items.len(), "reduce_mut: running steps sequentially");
    for (index, value) in items.iter().enumerate() {
        if let Err(err) = reducer(&mut acc, value, index, items).await {
            debug!(index, "sequential step failed; skipping remaining steps");
            return Err(err);
        }
        trace!(index, "sequential step resolved");
    }
    Ok(acc)
}

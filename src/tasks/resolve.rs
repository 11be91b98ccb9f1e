//! Resolution of task collections

use super::TaskMap;
use crate::concurrent::join_indexed;
use crate::sequential::fold;
use futures_util::{TryFuture, TryFutureExt};
use std::future::Future;
use tracing::debug;

/// Invoke every thunk in iteration order, keeping keys and pending futures
/// aligned.
fn invoke_all<M, Fut>(tasks: M) -> (Vec<M::Key>, Vec<Fut>)
where
    M: TaskMap,
    M::Thunk: FnOnce() -> Fut,
{
    tasks
        .into_entries()
        .into_iter()
        .map(|(key, thunk)| (key, thunk()))
        .unzip()
}

/// Append the value `pending` resolves to onto `acc`.
fn push_resolved<Fut>(
    mut acc: Vec<Fut::Ok>,
    pending: Fut,
) -> impl Future<Output = Result<Vec<Fut::Ok>, Fut::Error>>
where
    Fut: TryFuture,
{
    pending.map_ok(move |value| {
        acc.push(value);
        acc
    })
}

/// Invoke all thunks and await their results **concurrently**.
///
/// Every thunk is called once, in iteration order, before anything is
/// awaited. The result has the shape of the input: a `Vec` for a `Vec`, a map
/// with the same keys for a map. The first failure in completion order is
/// returned; the other tasks still run to completion and their outcomes are
/// discarded.
///
/// # Example
/// ```
/// use asyncro::parallel;
/// use futures_util::future::{self, Ready};
/// use std::collections::BTreeMap;
/// use std::convert::Infallible;
///
/// fn constant(value: i32) -> impl FnOnce() -> Ready<Result<i32, Infallible>> {
///     move || future::ok(value)
/// }
///
/// # tokio_test::block_on(async {
/// let tasks = BTreeMap::from([("a", constant(1)), ("b", constant(2))]);
/// let resolved = parallel(tasks).await.unwrap();
/// assert_eq!(resolved, BTreeMap::from([("a", 1), ("b", 2)]));
/// # });
/// ```
pub async fn parallel<M, Fut>(tasks: M) -> Result<M::Resolved<Fut::Ok>, Fut::Error>
where
    M: TaskMap,
    M::Thunk: FnOnce() -> Fut,
    Fut: TryFuture,
{
    let (keys, pending) = invoke_all(tasks);
    debug!(len = pending.len(), "parallel: awaiting tasks concurrently");

    let values = join_indexed(pending).await?;
    Ok(M::from_resolved(keys.into_iter().zip(values).collect()))
}

/// Invoke all thunks, then await their results **one at a time**, in
/// iteration order.
///
/// Thunks are all called up front, exactly like [`parallel`](crate::parallel()).
/// Their futures are then polled strictly in order, each to completion before
/// the next is touched. A plain `async` thunk does no work until polled, so it
/// effectively runs in series; a thunk that starts work eagerly before
/// returning (for instance by spawning it) still overlaps with the others, and
/// only its result is collected in order. To start each step only after the
/// previous one finished, use [`reduce`](crate::reduce) with the work done
/// inside the reducer.
///
/// On failure, the futures after the failing one are dropped without being
/// polled.
pub async fn series<M, Fut>(tasks: M) -> Result<M::Resolved<Fut::Ok>, Fut::Error>
where
    M: TaskMap,
    M::Thunk: FnOnce() -> Fut,
    Fut: TryFuture,
{
    let (keys, pending) = invoke_all(tasks);
    debug!(len = pending.len(), "series: awaiting tasks in order");

    let values = fold(pending, Vec::with_capacity(keys.len()), push_resolved).await?;
    Ok(M::from_resolved(keys.into_iter().zip(values).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::{self, Ready};
    use std::cell::RefCell;
    use std::collections::HashMap;

    fn constant(value: i32) -> impl FnOnce() -> Ready<Result<i32, String>> {
        move || future::ok(value)
    }

    #[tokio::test]
    async fn test_parallel_and_series_keep_list_shape() {
        assert_eq!(
            parallel(vec![constant(1), constant(2)]).await,
            Ok(vec![1, 2])
        );
        assert_eq!(series(vec![constant(1), constant(2)]).await, Ok(vec![1, 2]));
    }

    #[tokio::test]
    async fn test_parallel_and_series_keep_map_shape() {
        let expected = HashMap::from([("a", 1), ("b", 2)]);

        let tasks = HashMap::from([("a", constant(1)), ("b", constant(2))]);
        assert_eq!(parallel(tasks).await, Ok(expected.clone()));

        let tasks = HashMap::from([("a", constant(1)), ("b", constant(2))]);
        assert_eq!(series(tasks).await, Ok(expected));
    }

    #[tokio::test]
    async fn test_empty_task_lists() {
        let tasks: Vec<fn() -> Ready<Result<i32, String>>> = Vec::new();
        assert_eq!(parallel(tasks.clone()).await, Ok(vec![]));
        assert_eq!(series(tasks).await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_thunks_invoked_before_first_await() {
        let log = &RefCell::new(Vec::new());
        let task = |id: usize| {
            move || {
                log.borrow_mut().push(format!("invoke {}", id));
                async move {
                    log.borrow_mut().push(format!("run {}", id));
                    Ok::<_, String>(id)
                }
            }
        };

        let resolved = series(vec![task(0), task(1)]).await.unwrap();

        assert_eq!(resolved, vec![0, 1]);
        assert_eq!(
            *log.borrow(),
            vec!["invoke 0", "invoke 1", "run 0", "run 1"]
        );
    }

    #[tokio::test]
    async fn test_series_failure_leaves_later_tasks_unpolled() {
        let ran = &RefCell::new(Vec::new());
        let task = |id: usize| {
            move || async move {
                ran.borrow_mut().push(id);
                if id == 1 {
                    Err(format!("task {} failed", id))
                } else {
                    Ok(id)
                }
            }
        };

        let result = series(vec![task(0), task(1), task(2)]).await;

        assert_eq!(result, Err("task 1 failed".to_string()));
        assert_eq!(*ran.borrow(), vec![0, 1]);
    }
}

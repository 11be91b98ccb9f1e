//! Selection combinators built on the concurrent map
//!
//! Each one evaluates the predicate for every element concurrently, then picks
//! from the resulting booleans in a synchronous second pass so the outcome only
//! depends on index order, never on completion order.

use crate::concurrent::map;
use futures_util::TryFuture;

/// Keep the elements whose predicate resolved to `true`, in input order.
///
/// # Example
/// ```
/// use asyncro::filter;
/// use std::convert::Infallible;
///
/// # tokio_test::block_on(async {
/// let kept = filter(&[1, 2, 3], |v, _, _| async move { Ok::<_, Infallible>(*v > 1) })
///     .await
///     .unwrap();
/// assert_eq!(kept, vec![&2, &3]);
/// # });
/// ```
pub async fn filter<'a, T, F, Fut>(items: &'a [T], predicate: F) -> Result<Vec<&'a T>, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    let keep = map(items, predicate).await?;
    Ok(items
        .iter()
        .zip(keep)
        .filter_map(|(value, keep)| keep.then_some(value))
        .collect())
}

/// First element, by index, whose predicate resolved to `true`.
///
/// All predicates are evaluated before the answer is picked, so the result is
/// the same as taking the head of [`filter`].
pub async fn find<'a, T, F, Fut>(items: &'a [T], predicate: F) -> Result<Option<&'a T>, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    let matched = map(items, predicate).await?;
    Ok(items
        .iter()
        .zip(matched)
        .find_map(|(value, matched)| matched.then_some(value)))
}

/// `true` if the predicate resolved to `true` for every element.
/// Vacuously `true` for an empty sequence.
pub async fn every<'a, T, F, Fut>(items: &'a [T], predicate: F) -> Result<bool, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    Ok(map(items, predicate).await?.into_iter().all(|passed| passed))
}

/// `true` if the predicate resolved to `true` for at least one element.
/// `false` for an empty sequence.
pub async fn some<'a, T, F, Fut>(items: &'a [T], predicate: F) -> Result<bool, Fut::Error>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: TryFuture<Ok = bool>,
{
    Ok(map(items, predicate).await?.into_iter().any(|passed| passed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future;

    fn greater_than_one(v: &i32, _: usize, _: &[i32]) -> future::Ready<Result<bool, ()>> {
        future::ok(*v > 1)
    }

    #[tokio::test]
    async fn test_predicates_agree() {
        let items = [1, 2, 3];

        assert_eq!(filter(&items, greater_than_one).await, Ok(vec![&2, &3]));
        assert_eq!(find(&items, greater_than_one).await, Ok(Some(&2)));
        assert_eq!(every(&items, greater_than_one).await, Ok(false));
        assert_eq!(some(&items, greater_than_one).await, Ok(true));
    }

    #[tokio::test]
    async fn test_predicates_on_empty() {
        let items: [i32; 0] = [];

        assert_eq!(filter(&items, greater_than_one).await, Ok(vec![]));
        assert_eq!(find(&items, greater_than_one).await, Ok(None));
        assert_eq!(every(&items, greater_than_one).await, Ok(true));
        assert_eq!(some(&items, greater_than_one).await, Ok(false));
    }

    #[tokio::test]
    async fn test_find_none_matching() {
        let items = [0, 1, -4];
        assert_eq!(find(&items, greater_than_one).await, Ok(None));
    }

    #[tokio::test]
    async fn test_predicate_failure_propagates() {
        let items = [1, 2, 3];
        let failing = |v: &i32, _, _: &[i32]| {
            if *v == 3 {
                future::err("bad element")
            } else {
                future::ok(true)
            }
        };

        assert_eq!(filter(&items, failing).await, Err("bad element"));
        assert_eq!(find(&items, failing).await, Err("bad element"));
        assert_eq!(every(&items, failing).await, Err("bad element"));
        assert_eq!(some(&items, failing).await, Err("bad element"));
    }
}

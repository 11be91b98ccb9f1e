//! # Asyncro - Async Iteration Combinators
//!
//! [![Crates.io](https://img.shields.io/crates/v/asyncro.svg)](https://crates.io/crates/asyncro)
//! [![Documentation](https://docs.rs/asyncro/badge.svg)](https://docs.rs/asyncro)
//! [![License: MIT](https://img.shields.io/badge/License-MIT-yellow.svg)](https://opensource.org/licenses/MIT)
//!
//! Async counterparts of the familiar sequence operations (`reduce`, `map`,
//! `filter`, `find`, `every`, `some`) plus two task helpers (`parallel`,
//! `series`), all driven by caller-supplied async step functions.
//!
//! ## Quick Start
//!
//! ```rust
//! use asyncro::{filter, map, reduce};
//! use std::convert::Infallible;
//!
//! # tokio_test::block_on(async {
//! let urls = ["/foo", "/bar", "/baz"];
//!
//! // Concurrent: every step is started before any is awaited
//! let lengths = map(&urls, |url, _, _| async move { Ok::<_, Infallible>(url.len()) })
//!     .await
//!     .unwrap();
//! assert_eq!(lengths, vec![4, 4, 4]);
//!
//! // Concurrent evaluation, ordered selection
//! let kept = filter(&urls, |url, _, _| async move { Ok::<_, Infallible>(url.contains('b')) })
//!     .await
//!     .unwrap();
//! assert_eq!(kept, vec![&"/bar", &"/baz"]);
//!
//! // Sequential: each step sees the accumulator left by the previous one
//! let joined = reduce(
//!     &urls,
//!     |acc: String, url, _, _| async move { Ok::<_, Infallible>(acc + *url) },
//!     String::new(),
//! )
//! .await
//! .unwrap();
//! assert_eq!(joined, "/foo/bar/baz");
//! # });
//! ```
//!
//! ## Ordering and Concurrency
//!
//! | Combinator | Steps run | Output order |
//! |------------|-----------|--------------|
//! | [`reduce`], [`reduce_unseeded`], [`reduce_mut`] | one at a time, index order | n/a |
//! | [`map`], [`filter`], [`find`], [`every`], [`some`] | all at once | input index order |
//! | [`parallel()`] | all at once | input shape |
//! | [`series`] | invoked up front, awaited one at a time | input shape |
//!
//! ## Scheduling Model
//!
//! Nothing is spawned. Every combinator polls the step futures inside the task
//! that awaits it, so concurrency here is interleaving on a single task, never
//! parallel threads, and no `Send` bound is required. The library suspends
//! only where it awaits a future returned by a step or thunk.
//!
//! Rust futures are lazy: the pass in which [`map`] calls every step, or
//! [`parallel()`] and [`series`] call every thunk, happens on the first poll of
//! the combinator's future.
//!
//! ## Error Handling
//!
//! Steps resolve to `Result<T, E>` for any error type `E`, and a failing
//! combinator returns exactly that `E`:
//!
//! - Sequential combinators stop at the first failure; later steps are never
//!   invoked.
//! - Concurrent combinators return the first failure in completion order. The
//!   remaining steps are still driven to completion (nothing is cancelled) and
//!   their outcomes are discarded.
//!
//! Failures are reported through `tracing` at `debug` level.
//!
//! ## License
//!
//! Licensed under the [MIT License](https://opensource.org/licenses/MIT).

/// Version of the asyncro crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod concurrent;
mod predicate;
mod sequential;
mod tasks;

// Re-export main entry points
pub use concurrent::map;
pub use predicate::{every, filter, find, some};
pub use sequential::{reduce, reduce_mut, reduce_unseeded};
pub use tasks::{parallel, series, TaskMap};

/// Glob-importable set of every combinator and the [`TaskMap`] trait.
pub mod prelude {
    pub use crate::{
        every, filter, find, map, parallel, reduce, reduce_mut, reduce_unseeded, series, some,
        TaskMap,
    };
}

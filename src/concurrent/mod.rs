//! Concurrent execution support for asyncro
//!
//! Provides the concurrent map every non-sequential combinator is built on.

mod executor;

pub(crate) use executor::join_indexed;
pub use executor::map;

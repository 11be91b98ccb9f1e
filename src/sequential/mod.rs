//! Sequential execution support for asyncro
//!
//! The only place where steps run strictly one after another. Every ordering
//! guarantee in the crate composes from `fold`.

mod reduce;

pub(crate) use reduce::fold;
pub use reduce::{reduce, reduce_mut, reduce_unseeded};

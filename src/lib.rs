//! Concurrent join over independent fallible operations.
//!
//! Issue a set of asynchronous operations at once, wait for them to settle,
//! and get back either every value in input order or the first observed
//! failure. See [`concurrent_join`].

mod block_on;
mod error;
mod join;
mod settlement;

pub mod utils;

pub use block_on::block_on;
pub use error::{JoinError, JoinResult};
pub use join::{concurrent_join, join_producers, ConcurrentJoin};

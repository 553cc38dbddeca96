//! Integration test common infrastructure.

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::{BrokenSink, CollectingSink, DATASET, feed_of, test_bot};

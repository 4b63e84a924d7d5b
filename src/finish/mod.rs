//! Finish tracking and final standings.

pub mod aggregator;

pub use aggregator::{FinishAggregator, FinishNotifier};

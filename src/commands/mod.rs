//! Command implementations

pub mod catalog;
pub mod simple;

pub use catalog::{pool_counts, run_catalog};
pub use simple::run_simple;

pub mod change_tracker;
pub mod comparators;
pub(crate) mod snapshot;

#[cfg(test)]
pub mod test_fixtures;

// Re-exports
pub use change_tracker::*;
pub use comparators::*;

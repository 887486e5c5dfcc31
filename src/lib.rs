pub mod accumulator;
pub mod stats;
pub mod tasks;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

mod data_accumulator;
mod error;

pub use data_accumulator::DataAccumulator;
pub use error::AppendError;

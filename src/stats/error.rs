use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("Cannot calculate average of empty list")]
    EmptyInput,
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppendError {
    #[error("appended value must be an array of numbers, got {0}")]
    WrongType(&'static str),
}

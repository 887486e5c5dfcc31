mod average;
mod error;
mod estimators;

pub use average::average;
pub use error::StatsError;
pub use estimators::{Estimator, MeanEstimator};

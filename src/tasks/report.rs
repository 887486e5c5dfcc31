use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Outcome of one demonstration run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub average: f64,
    pub processed: Vec<f64>,
}

impl Display for DemoReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Average is: {:.2}", self.average)?;
        write!(f, "Processed data: {:?}", self.processed)
    }
}

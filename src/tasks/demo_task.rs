use crate::accumulator::DataAccumulator;
use crate::stats::average;
use crate::tasks::report::DemoReport;
use anyhow::Result;

/// Demonstration driver: averages a sequence, then feeds the same sequence
/// through a fresh accumulator and collects the processed view.
pub struct DemoTask {
    values: Vec<f64>,
}

impl DemoTask {
    /// Task over the fixed sample sequence `[1.0, 2.0, 3.0, 4.0, 5.0]`.
    pub fn new() -> Self {
        Self::with_values(vec![1.0, 2.0, 3.0, 4.0, 5.0])
    }

    pub fn with_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn run(&self) -> Result<DemoReport> {
        let average = average(&self.values)?;

        let mut accumulator = DataAccumulator::new();
        accumulator.append(&self.values);
        let processed = accumulator.process();

        Ok(DemoReport { average, processed })
    }

    /// Renders the outcome for printing.
    ///
    /// Any error collapses into a single `An error occurred: ...` line
    /// instead of propagating.
    pub fn run_rendered(&self) -> String {
        match self.run() {
            Ok(report) => report.to_string(),
            Err(e) => format!("An error occurred: {e}"),
        }
    }
}

impl Default for DemoTask {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[test]
    fn demo_produces_the_expected_report() {
        let report = DemoTask::new().run().unwrap();
        assert!((report.average - 3.0).abs() < 1e-12);
        assert_eq!(report.processed, vec![2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn demo_renders_the_two_expected_lines() {
        assert_eq!(
            DemoTask::new().run_rendered(),
            "Average is: 3.00\nProcessed data: [2.0, 4.0, 6.0, 8.0, 10.0]"
        );
    }

    #[test]
    fn empty_values_fail_with_the_empty_input_message() {
        let err = DemoTask::with_values(vec![]).run().unwrap_err();
        assert_eq!(err.to_string(), "Cannot calculate average of empty list");
    }

    #[test]
    fn empty_values_render_as_an_error_line() {
        assert_eq!(
            DemoTask::with_values(vec![]).run_rendered(),
            "An error occurred: Cannot calculate average of empty list"
        );
    }

    #[test]
    fn non_positive_values_process_to_an_empty_view() {
        let report = DemoTask::with_values(vec![-1.0, 0.0, -2.5]).run().unwrap();
        assert!(report.processed.is_empty());
        assert_eq!(
            DemoTask::with_values(vec![-1.0, 0.0, -2.5]).run_rendered(),
            "Average is: -1.17\nProcessed data: []"
        );
    }

    #[test]
    fn mixed_sign_values_keep_only_doubled_positives() {
        let report = DemoTask::with_values(fixtures::mixed_sign_values())
            .run()
            .unwrap();
        assert_eq!(report.processed, vec![3.0, 6.0]);
    }
}

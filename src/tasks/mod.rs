mod demo_task;
mod report;

pub use demo_task::DemoTask;
pub use report::DemoReport;

//! The aggregation / reshape pipeline.

pub mod aggregate;
pub mod pipeline;
pub mod pivot;

pub use pipeline::{Report, ReportOptions, build_report};

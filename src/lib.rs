//! pipeline-demo - a build report binary for smoke testing CI pipelines
//!
//! The library exposes the greeter operations and the report writer so they
//! can be exercised directly by tests.

pub mod build_info;
pub mod config;
pub mod error;
pub mod greeter;
pub mod logging;
pub mod report;

pub use error::AppError;
pub use greeter::{add, current_timestamp, environment_info, greeting, is_even};
pub use report::BuildReport;

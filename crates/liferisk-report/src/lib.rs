//! # liferisk-report
//!
//! Renders an assessment as the downloadable plain-text report and writes
//! it to a dated file.

pub mod render;
pub mod writer;

pub use render::{format_rupees, render_report, ReportContext, DISCLAIMER};
pub use writer::{report_file_name, resolve_output_path, write_report};

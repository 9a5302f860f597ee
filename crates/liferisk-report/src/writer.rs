use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use liferisk_core::errors::ReportError;
use liferisk_core::tracing::events;

/// `health_risk_report_YYYYMMDD.txt`.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("health_risk_report_{}.txt", date.format("%Y%m%d"))
}

/// Where the report goes.
///
/// An explicit path that is an existing directory gets the dated file name
/// appended; any other explicit path is used as-is. Without one, the dated
/// file lands in `default_dir`.
pub fn resolve_output_path(output: Option<&Path>, default_dir: &Path, date: NaiveDate) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(report_file_name(date)),
        Some(path) => path.to_path_buf(),
        None => default_dir.join(report_file_name(date)),
    }
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_report(path: &Path, contents: &str) -> Result<(), ReportError> {
    let write_failed = |e: std::io::Error| ReportError::WriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }
    std::fs::write(path, contents).map_err(write_failed)?;

    events::report_written(&path.display().to_string(), contents.len());
    Ok(())
}

//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.
//! Profile contents (conditions, family history) are never logged.

/// Log a reference dataset load.
pub fn baseline_loaded(path: &str, rows_read: usize, countries: usize) {
    ::tracing::info!(
        event = "baseline_loaded",
        path = %path,
        rows_read = rows_read,
        countries = countries,
        "baseline table loaded"
    );
}

/// Log a lookup that fell back to the constant baseline.
pub fn baseline_fallback(country: &str, fallback: f64) {
    ::tracing::debug!(
        event = "baseline_fallback",
        country = %country,
        fallback = fallback,
        "country absent from baseline table, using fallback"
    );
}

/// Log a completed assessment.
pub fn assessment_completed(diseases: usize, life_expectancy: f64, high_risk: usize) {
    ::tracing::info!(
        event = "assessment_completed",
        diseases = diseases,
        life_expectancy = life_expectancy,
        high_risk = high_risk,
        "assessment completed"
    );
}

/// Log a summarization request.
pub fn summary_requested(provider: &str, prompt_chars: usize) {
    ::tracing::info!(
        event = "summary_requested",
        provider = %provider,
        prompt_chars = prompt_chars,
        "summary requested"
    );
}

/// Log a degradation: a collaborator failed and a fallback is used.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    ::tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a report written to disk.
pub fn report_written(path: &str, bytes: usize) {
    ::tracing::info!(
        event = "report_written",
        path = %path,
        bytes = bytes,
        "report written"
    );
}

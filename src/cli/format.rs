//! Output formatting for CLI display.

use crate::feed::Failure;
use crate::model::{Labels, Summary};

use super::OutputFormat;

/// Format a summary as one line of output.
pub(super) fn format_summary(
    summary: &Summary,
    format: OutputFormat,
    labels: Labels,
) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(summary.render(labels)),
        OutputFormat::Json => serde_json::to_string(summary)
            .map_err(|e| format!("failed to serialize summary: {e}")),
    }
}

/// Describe a failed package, numbered from 1.
pub(super) fn format_failure(failure: &Failure) -> String {
    format!(
        "package {} ({}): {}",
        failure.index + 1,
        failure.code,
        failure.error
    )
}

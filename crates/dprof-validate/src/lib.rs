//! Shape validation for profiling inputs.
//!
//! Three independent, composable checks, each returning a list of
//! structured issues:
//!
//! - **Options**: `sampleSize` must be positive; `encoding` must be one of
//!   the supported labels.
//! - **Headers**: non-empty, no case-folded duplicates, no blank entries.
//! - **Records**: non-empty, every row as wide as the first.
//!
//! Callers concatenate the three lists; a non-empty result becomes a
//! single aggregated [`ProfileError::Validation`].

mod checks;

pub use checks::{validate_headers, validate_options, validate_records};

use dprof_model::{CellValue, ProfileError, ProfileOptions, ValidationIssue};

/// Run all three checks and aggregate any issues into one error.
pub fn validate_all(
    options: &ProfileOptions,
    headers: &[String],
    records: &[Vec<CellValue>],
) -> Result<(), ProfileError> {
    let mut issues: Vec<ValidationIssue> = Vec::new();
    issues.extend(validate_options(options));
    issues.extend(validate_headers(headers));
    issues.extend(validate_records(records));
    if issues.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = issues.len(), "input validation failed");
        Err(ProfileError::Validation(issues))
    }
}

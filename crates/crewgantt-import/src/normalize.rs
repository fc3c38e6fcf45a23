//! Interval normalization: raw rows in, canonical assignments out.
//!
//! This is the single validation boundary for the pipeline. Downstream
//! components never probe cells again: every [`Assignment`] leaving here has
//! a resolved badge, parsed timestamps and `start <= end`.

use chrono::{NaiveDate, NaiveDateTime};
use crewgantt_core::{Assignment, Category, Diagnostic};
use tracing::debug;

use crate::source::RawRow;

/// Canonical assignments plus aggregate drop counts.
///
/// Per-row failures are counted rather than reported individually; the
/// summary diagnostics keep a thousand bad cells from flooding the report.
#[derive(Clone, Debug, Default)]
pub struct NormalizeOutcome {
    pub assignments: Vec<Assignment>,
    pub diagnostics: Vec<Diagnostic>,
    pub dropped_missing_id: usize,
    pub dropped_bad_date: usize,
    pub dropped_inverted_range: usize,
}

/// Accepted cell formats, tried in order. Date-only cells parse to
/// midnight.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Permissively parse a source date cell.
pub fn parse_timestamp(cell: &str) -> Option<NaiveDateTime> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(cell, format) {
            return Some(ts);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cell, format) {
            return Some(date.into());
        }
    }
    None
}

/// Normalize raw rows from any origin into canonical assignments.
///
/// Rows are dropped (and counted) when the badge is missing, a date cell
/// does not parse, or the range is inverted. Input order is preserved for
/// the surviving rows; the detector's tie-break depends on it.
pub fn normalize(rows: Vec<RawRow>) -> NormalizeOutcome {
    let mut outcome = NormalizeOutcome::default();

    for row in rows {
        let Some(employee_id) = row.employee_id else {
            debug!(?row.category_label, "dropping row without a resolvable badge");
            outcome.dropped_missing_id += 1;
            continue;
        };
        let (Some(start), Some(end)) = (
            parse_timestamp(&row.start_cell),
            parse_timestamp(&row.end_cell),
        ) else {
            debug!(%employee_id, start = %row.start_cell, end = %row.end_cell,
                   "dropping row with unparsable date cell");
            outcome.dropped_bad_date += 1;
            continue;
        };

        match Assignment::try_new(employee_id, start, end, Category::from_label(&row.category_label))
        {
            Ok(assignment) => {
                let assignment = match row.detail {
                    Some(detail) => assignment.with_detail(detail),
                    None => assignment,
                };
                outcome.assignments.push(assignment);
            }
            Err(err) => {
                debug!(%err, "dropping row with inverted range");
                outcome.dropped_inverted_range += 1;
            }
        }
    }

    if outcome.dropped_missing_id > 0 {
        outcome.diagnostics.push(Diagnostic::warning(format!(
            "{} row(s) dropped: no resolvable employee id",
            outcome.dropped_missing_id
        )));
    }
    if outcome.dropped_bad_date > 0 {
        outcome.diagnostics.push(Diagnostic::warning(format!(
            "{} row(s) dropped: unparsable date cell",
            outcome.dropped_bad_date
        )));
    }
    if outcome.dropped_inverted_range > 0 {
        outcome.diagnostics.push(Diagnostic::warning(format!(
            "{} row(s) dropped: start date after end date",
            outcome.dropped_inverted_range
        )));
    }

    outcome
}

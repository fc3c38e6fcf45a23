//! Schedule source loaders.
//!
//! Each loader reads one CSV export and produces loosely-typed [`RawRow`]s
//! for the normalizer. Date cells stay as strings here; parsing and the
//! `start <= end` check happen in one place, at the normalizer boundary.
//!
//! Three origins are supported:
//! - shipyard schedule: `name,start,end` — the workbook keys this sheet by
//!   name, so the badge is resolved through the roster;
//! - vacation schedule: one row per employee carrying up to three
//!   sub-periods, expanded to one raw row per sub-period present;
//! - general schedule: `badge,name,start,end,category,detail`.

use std::collections::HashMap;
use std::path::Path;

use crewgantt_core::{Diagnostic, Employee, EmployeeId};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::LoadOutcome;

/// One loosely-typed source row, as handed to the normalizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRow {
    /// Resolved badge; `None` when the source row had no resolvable id.
    pub employee_id: Option<EmployeeId>,
    pub start_cell: String,
    pub end_cell: String,
    pub category_label: String,
    pub detail: Option<String>,
}

fn open(path: &Path, what: &str) -> Result<csv::Reader<std::fs::File>, Diagnostic> {
    csv::Reader::from_path(path).map_err(|err| {
        warn!(path = %path.display(), %err, "{what} source unavailable");
        Diagnostic::warning(format!(
            "{what} source unavailable: {}: {}",
            path.display(),
            err
        ))
    })
}

// ============================================================================
// Shipyard schedule
// ============================================================================

#[derive(Debug, Deserialize)]
struct ShipyardRecord {
    name: String,
    start: String,
    end: String,
}

/// Load the shipyard assignment schedule.
///
/// Rows are keyed by employee name in the source; the roster resolves the
/// badge. Unresolvable names flow through with `employee_id: None` so the
/// normalizer can count and drop them.
pub fn load_shipyard(path: &Path, roster: &[Employee]) -> LoadOutcome<RawRow> {
    let mut reader = match open(path, "shipyard schedule") {
        Ok(reader) => reader,
        Err(diagnostic) => return LoadOutcome::unavailable(diagnostic),
    };

    let by_name: HashMap<&str, EmployeeId> = roster
        .iter()
        .map(|e| (e.name.as_str(), e.id))
        .collect();

    let mut rows = Vec::new();
    let mut diagnostics = Vec::new();
    let mut malformed = 0usize;

    for result in reader.deserialize::<ShipyardRecord>() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                debug!(%err, "dropping malformed shipyard row");
                malformed += 1;
                continue;
            }
        };
        rows.push(RawRow {
            employee_id: by_name.get(record.name.trim()).copied(),
            start_cell: record.start,
            end_cell: record.end,
            category_label: "Shipyard Duty".to_string(),
            detail: None,
        });
    }

    if malformed > 0 {
        diagnostics.push(Diagnostic::warning(format!(
            "{malformed} shipyard schedule row(s) dropped: malformed record"
        )));
    }
    LoadOutcome { rows, diagnostics }
}

// ============================================================================
// Vacation schedule
// ============================================================================

#[derive(Debug, Deserialize)]
struct VacationRecord {
    badge: String,
    p1_start: String,
    p1_end: String,
    p2_start: String,
    p2_end: String,
    p3_start: String,
    p3_end: String,
}

/// Load the vacation schedule.
///
/// Each source row carries up to three independent sub-periods; each
/// sub-period with a start cell becomes one raw row. Absent sub-periods are
/// skipped, not defaulted to empty ranges.
pub fn load_vacations(path: &Path) -> LoadOutcome<RawRow> {
    let mut reader = match open(path, "vacation schedule") {
        Ok(reader) => reader,
        Err(diagnostic) => return LoadOutcome::unavailable(diagnostic),
    };

    let mut rows = Vec::new();
    let mut diagnostics = Vec::new();
    let mut malformed = 0usize;

    for result in reader.deserialize::<VacationRecord>() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                debug!(%err, "dropping malformed vacation row");
                malformed += 1;
                continue;
            }
        };
        let employee_id = record.badge.trim().parse::<u32>().ok().map(EmployeeId);

        let periods = [
            (&record.p1_start, &record.p1_end),
            (&record.p2_start, &record.p2_end),
            (&record.p3_start, &record.p3_end),
        ];
        for (start, end) in periods {
            if start.trim().is_empty() {
                continue;
            }
            rows.push(RawRow {
                employee_id,
                start_cell: start.clone(),
                end_cell: end.clone(),
                category_label: "Vacation".to_string(),
                detail: None,
            });
        }
    }

    if malformed > 0 {
        diagnostics.push(Diagnostic::warning(format!(
            "{malformed} vacation schedule row(s) dropped: malformed record"
        )));
    }
    LoadOutcome { rows, diagnostics }
}

// ============================================================================
// General schedule
// ============================================================================

#[derive(Debug, Deserialize)]
struct GeneralRecord {
    badge: String,
    #[allow(dead_code)]
    name: String,
    start: String,
    end: String,
    category: String,
    #[serde(default)]
    detail: String,
}

/// Load the general activity schedule (training, boarding, workshops, …).
pub fn load_general(path: &Path) -> LoadOutcome<RawRow> {
    let mut reader = match open(path, "general schedule") {
        Ok(reader) => reader,
        Err(diagnostic) => return LoadOutcome::unavailable(diagnostic),
    };

    let mut rows = Vec::new();
    let mut diagnostics = Vec::new();
    let mut malformed = 0usize;

    for result in reader.deserialize::<GeneralRecord>() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                debug!(%err, "dropping malformed general schedule row");
                malformed += 1;
                continue;
            }
        };
        let detail = record.detail.trim();
        rows.push(RawRow {
            employee_id: record.badge.trim().parse::<u32>().ok().map(EmployeeId),
            start_cell: record.start,
            end_cell: record.end,
            category_label: record.category.trim().to_string(),
            detail: if detail.is_empty() {
                None
            } else {
                Some(detail.to_string())
            },
        });
    }

    if malformed > 0 {
        diagnostics.push(Diagnostic::warning(format!(
            "{malformed} general schedule row(s) dropped: malformed record"
        )));
    }
    LoadOutcome { rows, diagnostics }
}

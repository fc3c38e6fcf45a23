//! Roster loading and the active-staff filter.
//!
//! The roster CSV mirrors the team sheet of the planning workbook:
//! `discipline,badge,role,project,experience,name`. Rows whose experience
//! marker is empty are excluded from the active roster — only experienced
//! staff are scheduled — and duplicate badges keep the first occurrence,
//! surfaced as a configuration warning.

use std::collections::HashSet;
use std::path::Path;

use crewgantt_core::{Diagnostic, Discipline, Employee, EmployeeId};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::LoadOutcome;

#[derive(Debug, Deserialize)]
struct RosterRecord {
    discipline: String,
    badge: String,
    role: String,
    project: String,
    experience: String,
    name: String,
}

/// Load the active roster from a CSV file.
///
/// Missing or unreadable files yield an empty roster plus a warning, per
/// the pipeline's non-fatal contract.
pub fn load_roster(path: &Path) -> LoadOutcome<Employee> {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(err) => {
            warn!(path = %path.display(), %err, "roster source unavailable");
            return LoadOutcome::unavailable(Diagnostic::warning(format!(
                "roster source unavailable: {}: {}",
                path.display(),
                err
            )));
        }
    };

    let mut employees = Vec::new();
    let mut diagnostics = Vec::new();
    let mut seen: HashSet<EmployeeId> = HashSet::new();
    let mut skipped_inactive = 0usize;
    let mut dropped_bad_badge = 0usize;

    for result in reader.deserialize::<RosterRecord>() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                debug!(%err, "dropping malformed roster row");
                dropped_bad_badge += 1;
                continue;
            }
        };

        // Business rule: staff without the experience marker are not
        // scheduled and must never appear in any output list.
        if record.experience.trim().is_empty() {
            skipped_inactive += 1;
            continue;
        }

        let Ok(badge) = record.badge.trim().parse::<u32>() else {
            debug!(badge = %record.badge, "dropping roster row with unparsable badge");
            dropped_bad_badge += 1;
            continue;
        };
        let id = EmployeeId(badge);

        if !seen.insert(id) {
            diagnostics.push(Diagnostic::warning(format!(
                "duplicate badge {id} in roster; keeping the first occurrence"
            )));
            continue;
        }

        let mut employee = Employee::new(id, record.name.trim());
        if let Some(discipline) = Discipline::from_label(&record.discipline) {
            employee = employee.discipline(discipline);
        } else if !record.discipline.trim().is_empty() {
            diagnostics.push(Diagnostic::warning(format!(
                "unknown discipline label {:?} for badge {id}",
                record.discipline.trim()
            )));
        }
        let role = record.role.trim();
        if !role.is_empty() {
            employee = employee.role(role);
        }
        let project = record.project.trim();
        if !project.is_empty() {
            employee = employee.project(project);
        }
        employees.push(employee);
    }

    if skipped_inactive > 0 {
        diagnostics.push(Diagnostic::info(format!(
            "{skipped_inactive} roster row(s) without an experience marker excluded"
        )));
    }
    if dropped_bad_badge > 0 {
        diagnostics.push(Diagnostic::warning(format!(
            "{dropped_bad_badge} roster row(s) dropped: malformed record or badge"
        )));
    }

    debug!(count = employees.len(), "roster loaded");
    LoadOutcome {
        rows: employees,
        diagnostics,
    }
}

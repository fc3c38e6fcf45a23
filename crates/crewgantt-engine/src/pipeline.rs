//! Report assembly: one immutable snapshot in, one report out.
//!
//! The snapshot is the single consistent in-memory view of all sources for
//! a run. `analyze` never mutates it and reads no ambient state ("today" is
//! a rendering concern, passed explicitly by the caller that needs it), so
//! rerunning on equal input yields an identical report.

use std::collections::{BTreeSet, HashMap};

use crewgantt_core::{order, AnalysisWindow, ConflictPair, Employee, EmployeeId, EnrichedAssignment};
use serde::Serialize;
use tracing::debug;

use crate::availability::occupied_ids;
use crate::conflict::detect_conflicts;

/// One consistent view of roster and joined assignments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    /// Active roster (already filtered to experienced staff).
    pub roster: Vec<Employee>,
    /// Joined assignments from all sources, in load order.
    pub assignments: Vec<EnrichedAssignment>,
}

/// Everything the report/UI collaborator needs, fully ordered.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    /// Active roster in grouping-policy order.
    pub employees: Vec<Employee>,
    /// Rostered assignments grouped by employee, in the same order; within
    /// an employee sorted by `(start, end)` with ties in input order.
    pub assignments: Vec<EnrichedAssignment>,
    /// Adjacent-pair conflicts, including those of badges missing from the
    /// roster — unknown ids must not hide overlaps.
    pub conflicts: Vec<ConflictPair>,
    /// Badges occupied inside the analysis window.
    pub occupied: BTreeSet<EmployeeId>,
    /// The window the occupancy set was computed against.
    pub window: AnalysisWindow,
}

impl Report {
    /// No employees matched the active filters; a normal terminal state the
    /// caller reports gracefully rather than treating as an error.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Is this employee free inside the report's window?
    pub fn is_available(&self, id: EmployeeId) -> bool {
        !self.occupied.contains(&id)
    }
}

/// Run detection, availability and ordering over one snapshot.
pub fn analyze(snapshot: &Snapshot, window: AnalysisWindow) -> Report {
    let employees = order::ordered(&snapshot.roster);

    // Conflicts run over every assignment, rostered or not.
    let conflicts = detect_conflicts(&snapshot.assignments);
    let occupied = occupied_ids(&snapshot.assignments, window);

    // Chart rows exist only for rostered employees: group their assignments
    // in policy order, each group sorted the same way the detector sorts.
    let mut by_employee: HashMap<EmployeeId, Vec<EnrichedAssignment>> = HashMap::new();
    for enriched in &snapshot.assignments {
        by_employee
            .entry(enriched.assignment.employee_id)
            .or_default()
            .push(enriched.clone());
    }

    let mut assignments = Vec::with_capacity(snapshot.assignments.len());
    for employee in &employees {
        if let Some(mut group) = by_employee.remove(&employee.id) {
            group.sort_by_key(|e| (e.assignment.start, e.assignment.end));
            assignments.extend(group);
        }
    }

    debug!(
        employees = employees.len(),
        assignments = assignments.len(),
        conflicts = conflicts.len(),
        "analysis finished"
    );

    Report {
        employees,
        assignments,
        conflicts,
        occupied,
        window,
    }
}

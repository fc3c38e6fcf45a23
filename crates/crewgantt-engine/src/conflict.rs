//! Schedule overlap detection.
//!
//! For each employee the assignments are stable-sorted by `(start, end)`
//! and scanned once; only immediately adjacent pairs in sorted order are
//! compared. Two assignments A (earlier start) and B conflict iff
//!
//! ```text
//! A.end >= B.start  &&  A.end.date() > B.start.date()
//! ```
//!
//! so a same-calendar-day handoff (A ends the day B starts) is not a
//! conflict; the overlap has to spill past the boundary day.
//!
//! The adjacent-pairs restriction is deliberate and matches the reporting
//! semantics this tool inherited: when A and C overlap but B, sorted
//! between them, overlaps neither, the A–C overlap is not reported. Cost is
//! O(n log n) per employee for the sort plus a linear scan; never the
//! all-pairs quadratic comparison.

use std::collections::HashMap;

use crewgantt_core::{ConflictPair, EmployeeId, EnrichedAssignment};
use tracing::debug;

/// Detect overlapping adjacent assignment pairs per employee.
///
/// Employees are visited in first-appearance order of the input, and ties
/// in `(start, end)` keep input order, so the output is reproducible for a
/// given input sequence.
pub fn detect_conflicts(assignments: &[EnrichedAssignment]) -> Vec<ConflictPair> {
    let mut appearance: Vec<EmployeeId> = Vec::new();
    let mut by_employee: HashMap<EmployeeId, Vec<&EnrichedAssignment>> = HashMap::new();

    for enriched in assignments {
        let id = enriched.assignment.employee_id;
        by_employee
            .entry(id)
            .or_insert_with(|| {
                appearance.push(id);
                Vec::new()
            })
            .push(enriched);
    }

    let mut conflicts = Vec::new();

    for id in appearance {
        let Some(group) = by_employee.get_mut(&id) else {
            continue;
        };
        if group.len() <= 1 {
            continue;
        }

        // Stable: equal (start, end) keys keep their input order.
        group.sort_by_key(|e| (e.assignment.start, e.assignment.end));

        let name = group.iter().find_map(|e| e.name.clone());

        for pair in group.windows(2) {
            let (first, second) = (&pair[0].assignment, &pair[1].assignment);
            if first.end >= second.start && first.end.date() > second.start.date() {
                conflicts.push(ConflictPair {
                    employee_id: id,
                    employee_name: name.clone(),
                    first: first.clone(),
                    second: second.clone(),
                });
            }
        }
    }

    debug!(count = conflicts.len(), "conflict scan finished");
    conflicts
}

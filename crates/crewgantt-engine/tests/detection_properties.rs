//! Property-style tests for the detection and report pipeline.
//!
//! These pin the behaviors the report consumers rely on:
//! 1. Sort stability for identical ranges
//! 2. The same-day boundary exclusion rule
//! 3. Adjacent-pairs-only detection (non-transitive by design)
//! 4. Inclusive window intersection
//! 5. Idempotence of a full analysis run

use chrono::{NaiveDate, NaiveDateTime};
use crewgantt_core::{
    AnalysisWindow, Assignment, Category, Discipline, Employee, EmployeeId, EnrichedAssignment,
};
use crewgantt_engine::{analyze, detect_conflicts, Snapshot};
use pretty_assertions::assert_eq;

fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().into()
}

fn entry(id: u32, start: NaiveDateTime, end: NaiveDateTime, cat: Category) -> EnrichedAssignment {
    EnrichedAssignment::unmatched(Assignment::try_new(EmployeeId(id), start, end, cat).unwrap())
}

// ============================================================================
// P1: sort stability
// ============================================================================

#[test]
fn identical_ranges_keep_input_order_in_reports() {
    let roster = vec![Employee::new(EmployeeId(1), "Ana")];
    let snapshot = Snapshot {
        roster,
        assignments: vec![
            entry(1, dt(2024, 1, 1), dt(2024, 1, 10), Category::Workshop),
            entry(1, dt(2024, 1, 1), dt(2024, 1, 10), Category::Training),
        ],
    };
    let window = AnalysisWindow::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    );
    let report = analyze(&snapshot, window);

    assert_eq!(report.assignments[0].assignment.category, Category::Workshop);
    assert_eq!(report.assignments[1].assignment.category, Category::Training);

    // The conflict pair mirrors the same order.
    assert_eq!(report.conflicts.len(), 1);
    assert_eq!(report.conflicts[0].first.category, Category::Workshop);
    assert_eq!(report.conflicts[0].second.category, Category::Training);
}

// ============================================================================
// P2: boundary exclusion rule
// ============================================================================

#[test]
fn boundary_touch_is_a_handoff_not_a_conflict() {
    let conflicts = detect_conflicts(&[
        entry(1, dt(2024, 1, 1), dt(2024, 1, 10), Category::Shipyard),
        entry(1, dt(2024, 1, 10), dt(2024, 1, 20), Category::Vacation),
    ]);
    assert!(conflicts.is_empty());
}

#[test]
fn one_day_past_the_boundary_is_a_conflict() {
    let conflicts = detect_conflicts(&[
        entry(1, dt(2024, 1, 1), dt(2024, 1, 11), Category::Shipyard),
        entry(1, dt(2024, 1, 10), dt(2024, 1, 20), Category::Vacation),
    ]);
    assert_eq!(conflicts.len(), 1);
}

// ============================================================================
// P3: adjacent-pairs-only, non-transitive by design
// ============================================================================

#[test]
fn non_adjacent_overlap_is_not_reported() {
    // Sorted by start: A=[1..20], B=[2..3], C=[18..25].
    // A–B conflict (adjacent), B–C no conflict (adjacent), and the real
    // A–C overlap is skipped because the scan only looks at neighbors.
    let conflicts = detect_conflicts(&[
        entry(1, dt(2024, 1, 1), dt(2024, 1, 20), Category::Shipyard),
        entry(1, dt(2024, 1, 2), dt(2024, 1, 3), Category::Workshop),
        entry(1, dt(2024, 1, 18), dt(2024, 1, 25), Category::Vacation),
    ]);

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].first.category, Category::Shipyard);
    assert_eq!(conflicts[0].second.category, Category::Workshop);
    assert!(!conflicts
        .iter()
        .any(|c| c.first.category == Category::Shipyard
            && c.second.category == Category::Vacation));
}

// ============================================================================
// P4: inclusive window intersection
// ============================================================================

#[test]
fn window_touch_counts_as_occupied() {
    let roster = vec![Employee::new(EmployeeId(7), "Edge")];
    let snapshot = Snapshot {
        roster,
        assignments: vec![entry(
            7,
            dt(2024, 2, 28),
            dt(2024, 3, 1),
            Category::Boarding,
        )],
    };
    let window = AnalysisWindow::new(
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    );
    let report = analyze(&snapshot, window);
    assert!(!report.is_available(EmployeeId(7)));
}

// ============================================================================
// P5: idempotence
// ============================================================================

#[test]
fn analysis_is_idempotent_over_immutable_input() {
    let snapshot = Snapshot {
        roster: vec![
            Employee::new(EmployeeId(1), "Ana")
                .discipline(Discipline::Elet)
                .role("Technician")
                .project("P-80"),
            Employee::new(EmployeeId(2), "Bruno").discipline(Discipline::Mec),
        ],
        assignments: vec![
            entry(1, dt(2024, 1, 1), dt(2024, 1, 15), Category::Shipyard),
            entry(1, dt(2024, 1, 10), dt(2024, 1, 20), Category::Vacation),
            entry(2, dt(2024, 2, 1), dt(2024, 2, 5), Category::Training),
        ],
    };
    let window = AnalysisWindow::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    );

    let first = analyze(&snapshot, window);
    let second = analyze(&snapshot, window);
    assert_eq!(first, second);

    // Byte-identical when serialized, too.
    let a = serde_json::to_string(&first).unwrap();
    let b = serde_json::to_string(&second).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn end_to_end_two_employee_scenario() {
    // Roster: two employees; id 1 has an overlapping shipyard/vacation pair,
    // id 2 has nothing scheduled at all.
    let snapshot = Snapshot {
        roster: vec![
            Employee::new(EmployeeId(1), "A").discipline(Discipline::Elet),
            Employee::new(EmployeeId(2), "B").discipline(Discipline::Mec),
        ],
        assignments: vec![
            EnrichedAssignment::matched(
                Assignment::try_new(
                    EmployeeId(1),
                    dt(2024, 1, 1),
                    dt(2024, 1, 15),
                    Category::Shipyard,
                )
                .unwrap(),
                &Employee::new(EmployeeId(1), "A").discipline(Discipline::Elet),
            ),
            EnrichedAssignment::matched(
                Assignment::try_new(
                    EmployeeId(1),
                    dt(2024, 1, 10),
                    dt(2024, 1, 20),
                    Category::Vacation,
                )
                .unwrap(),
                &Employee::new(EmployeeId(1), "A").discipline(Discipline::Elet),
            ),
        ],
    };
    let window = AnalysisWindow::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    );
    let report = analyze(&snapshot, window);

    // Exactly one conflict, for employee 1: the overlap 10..15 spans more
    // than the boundary day.
    assert_eq!(report.conflicts.len(), 1);
    assert_eq!(report.conflicts[0].employee_id, EmployeeId(1));
    assert_eq!(
        report.conflicts[0].describe(),
        "A - Shipyard Duty (01/01/2024 to 15/01/2024) / Vacation (10/01/2024 to 20/01/2024)"
    );

    // Employee 2 has zero assignments and is available for any window.
    assert!(report.is_available(EmployeeId(2)));
    assert!(!report.is_available(EmployeeId(1)));
}

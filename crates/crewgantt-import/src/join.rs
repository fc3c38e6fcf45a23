//! Roster joining: annotate assignments with employee master data.
//!
//! A left lookup from badge to roster entry. Assignments without a roster
//! match are kept with `None` enrichment fields — dropping them would hide
//! real conflicts. Enrichment is independent of map iteration order: the
//! index is built from the roster slice front to back, first occurrence
//! winning.

use std::collections::HashMap;

use crewgantt_core::{Assignment, Diagnostic, Employee, EmployeeId, EnrichedAssignment};

/// Enriched assignments plus join diagnostics.
#[derive(Clone, Debug, Default)]
pub struct JoinOutcome {
    pub enriched: Vec<EnrichedAssignment>,
    pub diagnostics: Vec<Diagnostic>,
    /// Count of assignments that had no roster match.
    pub unmatched: usize,
}

/// Join assignments with the roster by badge.
pub fn enrich(assignments: &[Assignment], roster: &[Employee]) -> JoinOutcome {
    let mut outcome = JoinOutcome::default();

    let mut index: HashMap<EmployeeId, &Employee> = HashMap::with_capacity(roster.len());
    for employee in roster {
        if index.contains_key(&employee.id) {
            // The roster loader already deduplicates; a duplicate here means
            // the caller assembled the roster some other way. First wins.
            outcome.diagnostics.push(Diagnostic::warning(format!(
                "duplicate badge {} in roster passed to join; keeping the first occurrence",
                employee.id
            )));
            continue;
        }
        index.insert(employee.id, employee);
    }

    for assignment in assignments {
        match index.get(&assignment.employee_id) {
            Some(employee) => outcome
                .enriched
                .push(EnrichedAssignment::matched(assignment.clone(), employee)),
            None => {
                outcome.unmatched += 1;
                outcome
                    .enriched
                    .push(EnrichedAssignment::unmatched(assignment.clone()));
            }
        }
    }

    if outcome.unmatched > 0 {
        outcome.diagnostics.push(Diagnostic::info(format!(
            "{} assignment(s) reference badges outside the roster",
            outcome.unmatched
        )));
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crewgantt_core::{Category, Discipline};
    use pretty_assertions::assert_eq;

    fn assignment(id: u32, category: Category) -> Assignment {
        Assignment::try_new(
            EmployeeId(id),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().into(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap().into(),
            category,
        )
        .unwrap()
    }

    #[test]
    fn matched_assignments_copy_roster_fields() {
        let roster = vec![Employee::new(EmployeeId(1), "Ana")
            .discipline(Discipline::Elet)
            .role("Technician")
            .project("P-80")];
        let outcome = enrich(&[assignment(1, Category::Shipyard)], &roster);

        assert_eq!(outcome.enriched.len(), 1);
        let e = &outcome.enriched[0];
        assert_eq!(e.name.as_deref(), Some("Ana"));
        assert_eq!(e.discipline, Some(Discipline::Elet));
        assert_eq!(e.project.as_deref(), Some("P-80"));
        assert_eq!(outcome.unmatched, 0);
    }

    #[test]
    fn unmatched_assignments_are_kept_with_null_fields() {
        let roster = vec![Employee::new(EmployeeId(1), "Ana")];
        let outcome = enrich(&[assignment(99, Category::Vacation)], &roster);

        assert_eq!(outcome.enriched.len(), 1);
        assert_eq!(outcome.enriched[0].name, None);
        assert_eq!(outcome.unmatched, 1);
        assert!(outcome
            .diagnostics
            .iter()
            .any(|d| d.message.contains("outside the roster")));
    }

    #[test]
    fn duplicate_roster_id_uses_first_occurrence() {
        let roster = vec![
            Employee::new(EmployeeId(1), "First"),
            Employee::new(EmployeeId(1), "Second"),
        ];
        let outcome = enrich(&[assignment(1, Category::Leave)], &roster);

        assert_eq!(outcome.enriched[0].name.as_deref(), Some("First"));
        assert!(outcome
            .diagnostics
            .iter()
            .any(|d| d.message.contains("duplicate badge")));
    }

    #[test]
    fn join_does_not_mutate_assignments() {
        let roster = vec![Employee::new(EmployeeId(1), "Ana")];
        let input = vec![assignment(1, Category::Shipyard)];
        let before = input.clone();
        let _ = enrich(&input, &roster);
        assert_eq!(input, before);
    }
}

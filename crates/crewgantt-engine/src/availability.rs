//! Availability filtering over an analysis window.
//!
//! The occupied-badge set is built in one pass over the assignments; the
//! roster is then partitioned in one pass. Employees with zero assignments
//! are trivially available.

use std::collections::BTreeSet;

use crewgantt_core::{AnalysisWindow, Employee, EmployeeId, EnrichedAssignment};

/// Badges with at least one assignment intersecting the window.
///
/// Intersection is inclusive at both ends (see [`AnalysisWindow::intersects`]).
/// The result is a `BTreeSet` so serialized reports list badges in a
/// deterministic order.
pub fn occupied_ids(
    assignments: &[EnrichedAssignment],
    window: AnalysisWindow,
) -> BTreeSet<EmployeeId> {
    assignments
        .iter()
        .filter(|e| window.intersects(&e.assignment))
        .map(|e| e.assignment.employee_id)
        .collect()
}

/// Roster split into occupied and available employees, both in roster order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    pub occupied: Vec<Employee>,
    pub available: Vec<Employee>,
}

/// Partition the roster against the occupied-badge set.
pub fn partition(roster: &[Employee], occupied: &BTreeSet<EmployeeId>) -> Partition {
    let mut result = Partition::default();
    for employee in roster {
        if occupied.contains(&employee.id) {
            result.occupied.push(employee.clone());
        } else {
            result.available.push(employee.clone());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crewgantt_core::{Assignment, Category};
    use pretty_assertions::assert_eq;

    fn window(from: (i32, u32, u32), to: (i32, u32, u32)) -> AnalysisWindow {
        AnalysisWindow::new(
            NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap(),
            NaiveDate::from_ymd_opt(to.0, to.1, to.2).unwrap(),
        )
    }

    fn entry(id: u32, from: (i32, u32, u32), to: (i32, u32, u32)) -> EnrichedAssignment {
        EnrichedAssignment::unmatched(
            Assignment::try_new(
                EmployeeId(id),
                NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap().into(),
                NaiveDate::from_ymd_opt(to.0, to.1, to.2).unwrap().into(),
                Category::Shipyard,
            )
            .unwrap(),
        )
    }

    #[test]
    fn touch_at_window_start_counts_as_occupied() {
        let occupied = occupied_ids(
            &[entry(1, (2024, 2, 28), (2024, 3, 1))],
            window((2024, 3, 1), (2024, 3, 31)),
        );
        assert!(occupied.contains(&EmployeeId(1)));
    }

    #[test]
    fn assignment_outside_window_leaves_employee_available() {
        let occupied = occupied_ids(
            &[entry(1, (2024, 1, 1), (2024, 1, 31))],
            window((2024, 3, 1), (2024, 3, 31)),
        );
        assert!(occupied.is_empty());
    }

    #[test]
    fn partition_keeps_roster_order() {
        let roster = vec![
            Employee::new(EmployeeId(1), "Ana"),
            Employee::new(EmployeeId(2), "Bruno"),
            Employee::new(EmployeeId(3), "Carla"),
        ];
        let occupied: BTreeSet<EmployeeId> = [EmployeeId(2)].into_iter().collect();
        let split = partition(&roster, &occupied);
        assert_eq!(split.occupied.len(), 1);
        assert_eq!(split.occupied[0].name, "Bruno");
        assert_eq!(
            split.available.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["Ana", "Carla"]
        );
    }

    #[test]
    fn zero_assignments_means_available() {
        let roster = vec![Employee::new(EmployeeId(9), "Idle")];
        let occupied = occupied_ids(&[], window((2024, 1, 1), (2024, 12, 31)));
        let split = partition(&roster, &occupied);
        assert!(split.occupied.is_empty());
        assert_eq!(split.available[0].name, "Idle");
    }
}

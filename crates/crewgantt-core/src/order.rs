//! Deterministic employee ordering policy.
//!
//! Report rows and the chart's y-axis share one total order: discipline in
//! fixed enumeration order (ELET, INST, MEC), then role, then project, then
//! name. Missing values sort after present ones within each key. The sort
//! is stable, so equal keys keep their input order and repeated runs with
//! unchanged input produce identical row ordering downstream.

use crate::{Discipline, Employee};
use std::cmp::Ordering;

/// Per-employee sort key. `None` components order after `Some`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortKey<'a> {
    discipline: Option<Discipline>,
    role: Option<&'a str>,
    project: Option<&'a str>,
    name: &'a str,
}

impl<'a> SortKey<'a> {
    pub fn of(employee: &'a Employee) -> Self {
        Self {
            discipline: employee.discipline,
            role: employee.role.as_deref(),
            project: employee.project.as_deref(),
            name: &employee.name,
        }
    }
}

impl Ord for SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_missing_last(&self.discipline, &other.discipline)
            .then_with(|| cmp_missing_last(&self.role, &other.role))
            .then_with(|| cmp_missing_last(&self.project, &other.project))
            .then_with(|| self.name.cmp(other.name))
    }
}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare options so that `None` sorts after any `Some`.
fn cmp_missing_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort employees in place by the grouping policy. Stable.
pub fn sort_employees(employees: &mut [Employee]) {
    employees.sort_by(|a, b| SortKey::of(a).cmp(&SortKey::of(b)));
}

/// Policy-ordered copy of a roster.
pub fn ordered(employees: &[Employee]) -> Vec<Employee> {
    let mut out = employees.to_vec();
    sort_employees(&mut out);
    out
}

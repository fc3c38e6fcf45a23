//! # crewgantt-core
//!
//! Core domain model for the crewgantt occupancy reporting engine.
//!
//! This crate provides:
//! - Domain types: `Employee`, `Assignment`, `ConflictPair`, `AnalysisWindow`
//! - The deterministic employee ordering policy (`order` module)
//! - Diagnostic and error types shared across the pipeline
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use crewgantt_core::{Assignment, Category, Discipline, Employee, EmployeeId};
//!
//! let employee = Employee::new(EmployeeId(4211), "A. Moreira")
//!     .discipline(Discipline::Elet)
//!     .role("Technician")
//!     .project("P-80");
//!
//! let duty = Assignment::try_new(
//!     EmployeeId(4211),
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().into(),
//!     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().into(),
//!     Category::Shipyard,
//! )
//! .unwrap();
//! assert_eq!(duty.employee_id, employee.id);
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod order;

// ============================================================================
// Identifiers
// ============================================================================

/// Badge number identifying an employee within a roster snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Discipline
// ============================================================================

/// Top-level grouping for employees.
///
/// Ordering follows declaration order (ELET, INST, MEC), not alphabetic
/// order. The report and chart rely on this being the group order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Discipline {
    Elet,
    Inst,
    Mec,
}

impl Discipline {
    /// All disciplines in report order.
    pub const ALL: [Discipline; 3] = [Discipline::Elet, Discipline::Inst, Discipline::Mec];

    /// Parse a source label such as `ELET` or `mec`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "ELET" => Some(Discipline::Elet),
            "INST" => Some(Discipline::Inst),
            "MEC" => Some(Discipline::Mec),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Discipline::Elet => "ELET",
            Discipline::Inst => "INST",
            Discipline::Mec => "MEC",
        }
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Category
// ============================================================================

/// Activity category attached to an assignment.
///
/// Categories are opaque to conflict detection; they exist for report text
/// and for the color table owned by the rendering crate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Shipyard,
    Vacation,
    Leave,
    Training,
    Boarding,
    Workshop,
    SiteVisit,
    /// Any label outside the fixed set, kept verbatim.
    Other(String),
}

impl Category {
    /// Parse a source label, case-insensitively.
    ///
    /// Unknown labels are preserved as [`Category::Other`] rather than
    /// rejected; the general schedule is allowed to carry free-form
    /// activity names.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "shipyard" | "shipyard duty" => Category::Shipyard,
            "vacation" => Category::Vacation,
            "leave" => Category::Leave,
            "training" => Category::Training,
            "boarding" => Category::Boarding,
            "workshop" => Category::Workshop,
            "site visit" => Category::SiteVisit,
            _ => Category::Other(label.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Shipyard => "Shipyard Duty",
            Category::Vacation => "Vacation",
            Category::Leave => "Leave",
            Category::Training => "Training",
            Category::Boarding => "Boarding",
            Category::Workshop => "Workshop",
            Category::SiteVisit => "Site Visit",
            Category::Other(label) => label,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Employee
// ============================================================================

/// One active roster member.
///
/// Employees are immutable: a roster snapshot is rebuilt from source on
/// every load cycle and never patched in place. Grouping fields are
/// optional because source rows may lack them; missing values sort last
/// (see [`order`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub discipline: Option<Discipline>,
    pub role: Option<String>,
    pub project: Option<String>,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            discipline: None,
            role: None,
            project: None,
        }
    }

    pub fn discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = Some(discipline);
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }
}

// ============================================================================
// Assignment
// ============================================================================

/// One time-bounded activity for one employee.
///
/// `start <= end` holds for every constructed value; the normalizer rejects
/// violating rows at the boundary instead of letting them corrupt the
/// detector's sorted scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub employee_id: EmployeeId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub category: Category,
    pub detail: Option<String>,
}

impl Assignment {
    /// Build an assignment, rejecting inverted ranges.
    pub fn try_new(
        employee_id: EmployeeId,
        start: NaiveDateTime,
        end: NaiveDateTime,
        category: Category,
    ) -> Result<Self, ModelError> {
        if start > end {
            return Err(ModelError::InvalidRange {
                employee_id,
                start,
                end,
            });
        }
        Ok(Self {
            employee_id,
            start,
            end,
            category,
            detail: None,
        })
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Human-readable `dd/mm/yyyy to dd/mm/yyyy` range.
    pub fn range_label(&self) -> String {
        format!("{} to {}", format_date(self.start), format_date(self.end))
    }
}

/// Format a timestamp as the report's `dd/mm/yyyy` date string.
pub fn format_date(ts: NaiveDateTime) -> String {
    ts.format("%d/%m/%Y").to_string()
}

/// An assignment annotated with roster fields for reporting.
///
/// Enrichment is copy-on-write: the underlying assignment list handed to
/// other stages is never mutated. Assignments whose id has no roster match
/// keep `None` fields so their conflicts are never hidden.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedAssignment {
    pub assignment: Assignment,
    pub name: Option<String>,
    pub discipline: Option<Discipline>,
    pub role: Option<String>,
    pub project: Option<String>,
}

impl EnrichedAssignment {
    /// Wrap an assignment with no roster match.
    pub fn unmatched(assignment: Assignment) -> Self {
        Self {
            assignment,
            name: None,
            discipline: None,
            role: None,
            project: None,
        }
    }

    /// Wrap an assignment with fields copied from its roster entry.
    pub fn matched(assignment: Assignment, employee: &Employee) -> Self {
        Self {
            assignment,
            name: Some(employee.name.clone()),
            discipline: employee.discipline,
            role: employee.role.clone(),
            project: employee.project.clone(),
        }
    }
}

// ============================================================================
// Analysis window
// ============================================================================

/// Caller-supplied date range used to test employee availability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AnalysisWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Standard inclusive interval-intersection test.
    ///
    /// An assignment touching the window at either boundary counts as
    /// occupying it.
    pub fn intersects(&self, assignment: &Assignment) -> bool {
        assignment.start.date() <= self.end && assignment.end.date() >= self.start
    }
}

// ============================================================================
// Conflict pair
// ============================================================================

/// Two assignments for the same employee whose ranges overlap beyond a
/// same-day boundary touch.
///
/// A derived view: recomputed on every detection run, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictPair {
    pub employee_id: EmployeeId,
    /// Roster name when known; reports fall back to the badge number.
    pub employee_name: Option<String>,
    pub first: Assignment,
    pub second: Assignment,
}

impl ConflictPair {
    /// One human-readable report line for this conflict.
    pub fn describe(&self) -> String {
        let who = self
            .employee_name
            .clone()
            .unwrap_or_else(|| format!("badge {}", self.employee_id));
        format!(
            "{} - {} ({}) / {} ({})",
            who,
            self.first.category,
            self.first.range_label(),
            self.second.category,
            self.second.range_label(),
        )
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Diagnostic severity, lowest to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A user-facing message produced while loading or joining sources.
///
/// Nothing in the pipeline is fatal: a missing source file or a batch of
/// unparsable rows degrades to diagnostics plus a smaller result set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Domain-model violation.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid range for employee {employee_id}: start {start} is after end {end}")]
    InvalidRange {
        employee_id: EmployeeId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Rendering error.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().into()
    }

    #[test]
    fn discipline_order_is_not_alphabetic() {
        assert!(Discipline::Elet < Discipline::Inst);
        assert!(Discipline::Inst < Discipline::Mec);
        assert_eq!(
            Discipline::ALL.to_vec(),
            vec![Discipline::Elet, Discipline::Inst, Discipline::Mec]
        );
    }

    #[test]
    fn discipline_label_roundtrip() {
        assert_eq!(Discipline::from_label(" elet "), Some(Discipline::Elet));
        assert_eq!(Discipline::from_label("MEC"), Some(Discipline::Mec));
        assert_eq!(Discipline::from_label("CIV"), None);
    }

    #[test]
    fn category_known_labels() {
        assert_eq!(Category::from_label("Shipyard Duty"), Category::Shipyard);
        assert_eq!(Category::from_label("vacation"), Category::Vacation);
        assert_eq!(Category::from_label("Site Visit"), Category::SiteVisit);
    }

    #[test]
    fn category_unknown_label_preserved() {
        let cat = Category::from_label("  Offshore Survey ");
        assert_eq!(cat, Category::Other("Offshore Survey".into()));
        assert_eq!(cat.as_str(), "Offshore Survey");
    }

    #[test]
    fn assignment_rejects_inverted_range() {
        let err = Assignment::try_new(
            EmployeeId(1),
            dt(2024, 2, 1),
            dt(2024, 1, 1),
            Category::Vacation,
        );
        assert!(matches!(err, Err(ModelError::InvalidRange { .. })));
    }

    #[test]
    fn assignment_range_label_is_dd_mm_yyyy() {
        let a = Assignment::try_new(
            EmployeeId(1),
            dt(2024, 1, 5),
            dt(2024, 2, 10),
            Category::Shipyard,
        )
        .unwrap();
        assert_eq!(a.range_label(), "05/01/2024 to 10/02/2024");
    }

    #[test]
    fn window_intersection_is_inclusive_both_ends() {
        let window = AnalysisWindow::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        );
        // Touch at window start counts as occupied.
        let touching = Assignment::try_new(
            EmployeeId(7),
            dt(2024, 2, 28),
            dt(2024, 3, 1),
            Category::Training,
        )
        .unwrap();
        assert!(window.intersects(&touching));

        let before = Assignment::try_new(
            EmployeeId(7),
            dt(2024, 2, 1),
            dt(2024, 2, 28),
            Category::Training,
        )
        .unwrap();
        assert!(!window.intersects(&before));
    }

    #[test]
    fn conflict_describe_uses_name_or_badge() {
        let first = Assignment::try_new(
            EmployeeId(42),
            dt(2024, 1, 1),
            dt(2024, 1, 15),
            Category::Shipyard,
        )
        .unwrap();
        let second = Assignment::try_new(
            EmployeeId(42),
            dt(2024, 1, 10),
            dt(2024, 1, 20),
            Category::Vacation,
        )
        .unwrap();

        let named = ConflictPair {
            employee_id: EmployeeId(42),
            employee_name: Some("B. Costa".into()),
            first: first.clone(),
            second: second.clone(),
        };
        assert_eq!(
            named.describe(),
            "B. Costa - Shipyard Duty (01/01/2024 to 15/01/2024) / Vacation (10/01/2024 to 20/01/2024)"
        );

        let anonymous = ConflictPair {
            employee_id: EmployeeId(42),
            employee_name: None,
            first,
            second,
        };
        assert!(anonymous.describe().starts_with("badge 42 -"));
    }

    #[test]
    fn employee_builder() {
        let e = Employee::new(EmployeeId(9), "C. Lima")
            .discipline(Discipline::Inst)
            .role("Supervisor")
            .project("P-82");
        assert_eq!(e.id, EmployeeId(9));
        assert_eq!(e.discipline, Some(Discipline::Inst));
        assert_eq!(e.role.as_deref(), Some("Supervisor"));
        assert_eq!(e.project.as_deref(), Some("P-82"));
    }
}

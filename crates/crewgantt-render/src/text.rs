//! Plain-text report rendering.

use crewgantt_core::RenderError;
use crewgantt_engine::Report;

use crate::{RenderContext, Renderer};

/// Plain-text report: conflict listing followed by the availability split.
///
/// Output is line-oriented and stable for equal reports, so it doubles as a
/// diffable artifact in scripted runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextReportRenderer {
    /// Include the per-employee availability listing.
    pub with_availability: bool,
}

impl TextReportRenderer {
    pub fn new() -> Self {
        Self {
            with_availability: true,
        }
    }

    /// Conflicts only, no availability section.
    pub fn conflicts_only() -> Self {
        Self {
            with_availability: false,
        }
    }
}

impl Renderer for TextReportRenderer {
    type Output = String;

    fn render(&self, report: &Report, _ctx: &RenderContext) -> Result<String, RenderError> {
        let mut out = String::new();

        if report.conflicts.is_empty() {
            out.push_str("No conflicts detected.\n");
        } else {
            out.push_str("CONFLICTS DETECTED:\n");
            for conflict in &report.conflicts {
                out.push_str("  ");
                out.push_str(&conflict.describe());
                out.push('\n');
            }
        }

        if self.with_availability {
            out.push('\n');
            out.push_str(&format!(
                "Availability from {} to {}:\n",
                report.window.start.format("%d/%m/%Y"),
                report.window.end.format("%d/%m/%Y"),
            ));
            for employee in &report.employees {
                let status = if report.is_available(employee.id) {
                    "available"
                } else {
                    "occupied"
                };
                let discipline = employee
                    .discipline
                    .map_or("-", |d| d.as_str());
                out.push_str(&format!(
                    "  [{discipline}] {} ({}): {status}\n",
                    employee.name, employee.id,
                ));
            }
            if report.employees.is_empty() {
                out.push_str("  (no active employees)\n");
            }
        }

        Ok(out)
    }
}

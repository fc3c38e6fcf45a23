//! # crewgantt-render
//!
//! Rendering backends for crewgantt occupancy reports.
//!
//! This crate provides:
//! - SVG Gantt chart rendering (one row per employee)
//! - Plain-text report rendering (conflicts and availability)
//! - The category → color style table
//!
//! The core pipeline knows nothing about colors or chart geometry; all of
//! that lives here, on the consumer side of the report.
//!
//! ## Example
//!
//! ```rust,ignore
//! use crewgantt_render::{RenderContext, Renderer, SvgGanttRenderer, TextReportRenderer};
//!
//! let svg = SvgGanttRenderer::default().render(&report, &ctx)?;
//! let text = TextReportRenderer::new().render(&report, &ctx)?;
//! ```

pub mod gantt;
pub mod text;

pub use gantt::SvgGanttRenderer;
pub use text::TextReportRenderer;

use chrono::NaiveDate;
use crewgantt_core::{Category, RenderError};
use crewgantt_engine::Report;

/// Caller-supplied rendering context.
///
/// "Today" is computed once by the caller and passed down; renderers never
/// read the system clock themselves.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext {
    pub today: NaiveDate,
}

/// Output rendering abstraction.
pub trait Renderer {
    type Output;

    fn render(&self, report: &Report, ctx: &RenderContext) -> Result<Self::Output, RenderError>;
}

/// Bar color for an activity category.
///
/// Shipyard duty is blue, absence categories are red and every other known
/// activity is orange; free-form labels fall back to gray. This table is
/// the single place category colors exist.
pub fn category_color(category: &Category) -> &'static str {
    match category {
        Category::Shipyard => "#3498db",
        Category::Vacation | Category::Leave => "#e74c3c",
        Category::Training | Category::Boarding | Category::Workshop | Category::SiteVisit => {
            "#e67e22"
        }
        Category::Other(_) => "#95a5a6",
    }
}

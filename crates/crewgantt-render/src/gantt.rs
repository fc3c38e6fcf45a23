//! SVG Gantt chart rendering.
//!
//! One row per employee in policy order, one bar per assignment colored by
//! the category table. The chart also carries the decorations the report's
//! readers expect: a dashed "today" line, a shaded analysis-window band,
//! dashed separators with labels at each discipline boundary, and row
//! labels colored by availability (green free, dark occupied).

use chrono::{Duration, NaiveDate};
use crewgantt_core::{Discipline, EnrichedAssignment, RenderError};
use crewgantt_engine::Report;
use svg::node::element::{Group, Line, Rectangle, Text};
use svg::Document;

use crate::{category_color, RenderContext, Renderer};

const COLOR_TODAY_LINE: &str = "#c0392b";
const COLOR_WINDOW_BAND: &str = "#7f8c8d";
const COLOR_AVAILABLE: &str = "#27ae60";
const COLOR_OCCUPIED: &str = "#2c3e50";
const COLOR_SECTION_LINE: &str = "#2c3e50";

/// SVG Gantt chart renderer configuration.
#[derive(Clone, Debug)]
pub struct SvgGanttRenderer {
    /// Width of the chart area (excluding labels) in pixels
    pub chart_width: u32,
    /// Height per employee row in pixels
    pub row_height: u32,
    /// Width of the label column in pixels
    pub label_width: u32,
    /// Header height in pixels
    pub header_height: u32,
    /// Padding around the chart
    pub padding: u32,
    /// Background color
    pub background_color: String,
    /// Grid line color
    pub grid_color: String,
    /// Text color
    pub text_color: String,
    /// Font family
    pub font_family: String,
    /// Font size in pixels
    pub font_size: u32,
}

impl Default for SvgGanttRenderer {
    fn default() -> Self {
        Self {
            chart_width: 900,
            row_height: 26,
            label_width: 200,
            header_height: 50,
            padding: 20,
            background_color: "#ffffff".into(),
            grid_color: "#ecf0f1".into(),
            text_color: "#2c3e50".into(),
            font_family: "system-ui, -apple-system, sans-serif".into(),
            font_size: 12,
        }
    }
}

impl SvgGanttRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure chart width
    pub fn chart_width(mut self, width: u32) -> Self {
        self.chart_width = width;
        self
    }

    /// Configure row height
    pub fn row_height(mut self, height: u32) -> Self {
        self.row_height = height;
        self
    }

    fn total_width(&self) -> u32 {
        self.padding * 2 + self.label_width + self.chart_width
    }

    fn total_height(&self, row_count: usize) -> u32 {
        self.padding * 2 + self.header_height + (row_count as u32 * self.row_height)
    }

    fn pixels_per_day(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        let days = (end - start).num_days().max(1) as f64;
        self.chart_width as f64 / days
    }

    fn date_to_x(&self, date: NaiveDate, axis_start: NaiveDate, px_per_day: f64) -> f64 {
        let days = (date - axis_start).num_days() as f64;
        self.padding as f64 + self.label_width as f64 + (days * px_per_day)
    }

    /// Date span of the x axis: everything visible, with a few days of air.
    fn axis_range(&self, report: &Report, ctx: &RenderContext) -> (NaiveDate, NaiveDate) {
        let mut start = report.window.start.min(ctx.today);
        let mut end = report.window.end.max(ctx.today);
        for enriched in &report.assignments {
            start = start.min(enriched.assignment.start.date());
            end = end.max(enriched.assignment.end.date());
        }
        (start - Duration::days(3), end + Duration::days(3))
    }

    /// Header with date tick labels.
    fn render_header(&self, axis_start: NaiveDate, axis_end: NaiveDate, px_per_day: f64) -> Group {
        let mut group = Group::new().set("class", "header");

        let header_bg = Rectangle::new()
            .set("x", self.padding)
            .set("y", self.padding)
            .set("width", self.label_width + self.chart_width)
            .set("height", self.header_height)
            .set("fill", "#f8f9fa");
        group = group.add(header_bg);

        let total_days = (axis_end - axis_start).num_days();
        let interval_days = if total_days <= 14 {
            1
        } else if total_days <= 60 {
            7
        } else if total_days <= 180 {
            14
        } else {
            30
        };

        let mut current = axis_start;
        while current <= axis_end {
            let x = self.date_to_x(current, axis_start, px_per_day);

            let tick = Line::new()
                .set("x1", x)
                .set("y1", self.padding + self.header_height - 10)
                .set("x2", x)
                .set("y2", self.padding + self.header_height)
                .set("stroke", self.text_color.as_str())
                .set("stroke-width", 1);
            group = group.add(tick);

            let label = if interval_days == 1 {
                current.format("%d").to_string()
            } else {
                current.format("%d/%m").to_string()
            };
            let text = Text::new(label)
                .set("x", x)
                .set("y", self.padding + self.header_height - 15)
                .set("font-family", self.font_family.as_str())
                .set("font-size", self.font_size - 1)
                .set("fill", self.text_color.as_str())
                .set("text-anchor", "middle");
            group = group.add(text);

            current += Duration::days(interval_days);
        }

        let title = axis_start.format("%B %Y").to_string();
        let title_text = Text::new(title)
            .set("x", self.padding + self.label_width + self.chart_width / 2)
            .set("y", self.padding + 18)
            .set("font-family", self.font_family.as_str())
            .set("font-size", self.font_size + 2)
            .set("font-weight", "bold")
            .set("fill", self.text_color.as_str())
            .set("text-anchor", "middle");
        group = group.add(title_text);

        group
    }

    fn render_grid(
        &self,
        row_count: usize,
        axis_start: NaiveDate,
        axis_end: NaiveDate,
        px_per_day: f64,
    ) -> Group {
        let mut group = Group::new().set("class", "grid");

        let chart_top = self.padding + self.header_height;
        let chart_bottom = chart_top + (row_count as u32 * self.row_height);

        for i in 0..=row_count {
            let y = chart_top + (i as u32 * self.row_height);
            let line = Line::new()
                .set("x1", self.padding)
                .set("y1", y)
                .set("x2", self.padding + self.label_width + self.chart_width)
                .set("y2", y)
                .set("stroke", self.grid_color.as_str())
                .set("stroke-width", 1);
            group = group.add(line);
        }

        let total_days = (axis_end - axis_start).num_days();
        let interval = if total_days <= 30 { 1 } else { 7 };

        let mut current = axis_start;
        while current <= axis_end {
            let x = self.date_to_x(current, axis_start, px_per_day);
            let line = Line::new()
                .set("x1", x)
                .set("y1", chart_top)
                .set("x2", x)
                .set("y2", chart_bottom)
                .set("stroke", self.grid_color.as_str())
                .set("stroke-width", 1);
            group = group.add(line);
            current += Duration::days(interval);
        }

        group
    }

    /// One employee row: availability-colored label plus category bars.
    fn render_row(
        &self,
        name: &str,
        available: bool,
        bars: &[&EnrichedAssignment],
        row: usize,
        axis_start: NaiveDate,
        px_per_day: f64,
    ) -> Group {
        let mut group = Group::new().set("class", "employee");

        let y = self.padding + self.header_height + (row as u32 * self.row_height);
        let bar_height = (self.row_height as f64 * 0.55) as u32;
        let bar_y = y + (self.row_height - bar_height) / 2;

        let label_color = if available {
            COLOR_AVAILABLE
        } else {
            COLOR_OCCUPIED
        };
        let label = Text::new(truncate(name, 26))
            .set("x", self.padding + 8)
            .set("y", y + self.row_height / 2 + 4)
            .set("font-family", self.font_family.as_str())
            .set("font-size", self.font_size)
            .set("fill", label_color);
        group = group.add(label);

        for enriched in bars {
            let a = &enriched.assignment;
            let x_start = self.date_to_x(a.start.date(), axis_start, px_per_day);
            let x_end = self.date_to_x(a.end.date(), axis_start, px_per_day);
            let bar_width = (x_end - x_start).max(3.0);

            let bar = Rectangle::new()
                .set("x", x_start)
                .set("y", bar_y)
                .set("width", bar_width)
                .set("height", bar_height)
                .set("rx", 2)
                .set("ry", 2)
                .set("fill", category_color(&a.category))
                .set("stroke", "#000000")
                .set("stroke-width", 1);
            group = group.add(bar);
        }

        group
    }

    /// Dashed vertical marker at today's date.
    fn render_today_line(
        &self,
        today: NaiveDate,
        row_count: usize,
        axis_start: NaiveDate,
        px_per_day: f64,
    ) -> Group {
        let mut group = Group::new().set("class", "today");
        let x = self.date_to_x(today, axis_start, px_per_day);
        let chart_top = self.padding + self.header_height;
        let chart_bottom = chart_top + (row_count as u32 * self.row_height);

        let line = Line::new()
            .set("x1", x)
            .set("y1", chart_top)
            .set("x2", x)
            .set("y2", chart_bottom)
            .set("stroke", COLOR_TODAY_LINE)
            .set("stroke-width", 2)
            .set("stroke-dasharray", "6,4");
        group = group.add(line);

        let label = Text::new("Today")
            .set("x", x + 4.0)
            .set("y", chart_top + 12)
            .set("font-family", self.font_family.as_str())
            .set("font-size", self.font_size - 1)
            .set("fill", COLOR_TODAY_LINE);
        group = group.add(label);

        group
    }

    /// Shaded band over the analysis window.
    fn render_window_band(
        &self,
        report: &Report,
        row_count: usize,
        axis_start: NaiveDate,
        px_per_day: f64,
    ) -> Group {
        let x0 = self.date_to_x(report.window.start, axis_start, px_per_day);
        let x1 = self.date_to_x(report.window.end, axis_start, px_per_day);
        let chart_top = self.padding + self.header_height;

        let band = Rectangle::new()
            .set("x", x0)
            .set("y", chart_top)
            .set("width", (x1 - x0).max(0.0))
            .set("height", row_count as u32 * self.row_height)
            .set("fill", COLOR_WINDOW_BAND)
            .set("opacity", 0.15);

        Group::new().set("class", "analysis-window").add(band)
    }

    /// Dashed separators and labels at discipline boundaries.
    ///
    /// Employees arrive already grouped by discipline (policy order), so a
    /// boundary is simply a row where the discipline changes.
    fn render_section_lines(&self, report: &Report) -> Group {
        let mut group = Group::new().set("class", "sections");
        let chart_top = self.padding + self.header_height;
        let x_end = self.padding + self.label_width + self.chart_width;

        let mut previous: Option<Option<Discipline>> = None;
        let mut section_start = 0usize;

        let mut sections: Vec<(Option<Discipline>, usize, usize)> = Vec::new();
        for (row, employee) in report.employees.iter().enumerate() {
            if let Some(prev) = previous {
                if prev != employee.discipline {
                    sections.push((prev, section_start, row));
                    section_start = row;
                }
            }
            previous = Some(employee.discipline);
        }
        if let Some(last) = previous {
            sections.push((last, section_start, report.employees.len()));
        }

        for (discipline, start_row, end_row) in sections {
            let y = chart_top + (end_row as u32 * self.row_height);
            let line = Line::new()
                .set("x1", self.padding)
                .set("y1", y)
                .set("x2", x_end)
                .set("y2", y)
                .set("stroke", COLOR_SECTION_LINE)
                .set("stroke-width", 2)
                .set("stroke-dasharray", "8,4");
            group = group.add(line);

            if let Some(discipline) = discipline {
                let mid = chart_top as f64
                    + ((start_row + end_row) as f64 / 2.0) * self.row_height as f64
                    + 4.0;
                let label = Text::new(discipline.as_str())
                    .set("x", x_end - 6)
                    .set("y", mid)
                    .set("font-family", self.font_family.as_str())
                    .set("font-size", self.font_size + 1)
                    .set("font-weight", "bold")
                    .set("fill", COLOR_SECTION_LINE)
                    .set("text-anchor", "end");
                group = group.add(label);
            }
        }

        group
    }
}

impl Renderer for SvgGanttRenderer {
    type Output = String;

    fn render(&self, report: &Report, ctx: &RenderContext) -> Result<String, RenderError> {
        if report.employees.is_empty() {
            return Err(RenderError::InvalidData("no employees to render".into()));
        }

        let row_count = report.employees.len();
        let (axis_start, axis_end) = self.axis_range(report, ctx);
        let px_per_day = self.pixels_per_day(axis_start, axis_end);

        let width = self.total_width();
        let height = self.total_height(row_count);

        let mut document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height))
            .set("xmlns", "http://www.w3.org/2000/svg");

        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", self.background_color.as_str());
        document = document.add(background);

        document = document.add(self.render_header(axis_start, axis_end, px_per_day));
        document = document.add(self.render_grid(row_count, axis_start, axis_end, px_per_day));
        document = document.add(self.render_window_band(report, row_count, axis_start, px_per_day));

        for (row, employee) in report.employees.iter().enumerate() {
            let bars: Vec<&EnrichedAssignment> = report
                .assignments
                .iter()
                .filter(|e| e.assignment.employee_id == employee.id)
                .collect();
            document = document.add(self.render_row(
                &employee.name,
                report.is_available(employee.id),
                &bars,
                row,
                axis_start,
                px_per_day,
            ));
        }

        document = document.add(self.render_section_lines(report));
        document = document.add(self.render_today_line(
            ctx.today,
            row_count,
            axis_start,
            px_per_day,
        ));

        Ok(document.to_string())
    }
}

/// Truncate a label with an ellipsis.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

//! crewgantt CLI - team occupancy and schedule conflict reporting.
//!
//! Reads the roster plus up to three schedule sources, runs conflict
//! detection and availability analysis over a date window, and renders the
//! result as text, JSON or an SVG Gantt chart.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crewgantt_core::AnalysisWindow;
use crewgantt_engine::{analyze, partition, Report};
use crewgantt_render::{RenderContext, Renderer, SvgGanttRenderer, TextReportRenderer};

mod load;

use load::{load_snapshot, SourcePaths};

#[derive(Parser)]
#[command(name = "crewgantt")]
#[command(author, version, about = "Team occupancy and schedule conflict reporting", long_about = None)]
struct Cli {
    #[command(flatten)]
    sources: SourceArgs,

    /// Analysis window start (defaults to 30 days before today)
    #[arg(long, value_name = "YYYY-MM-DD", global = true)]
    from: Option<NaiveDate>,

    /// Analysis window end (defaults to 90 days after today)
    #[arg(long, value_name = "YYYY-MM-DD", global = true)]
    to: Option<NaiveDate>,

    /// Reference date for the chart's "today" marker (defaults to the
    /// system date)
    #[arg(long, value_name = "YYYY-MM-DD", global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Roster CSV (required)
    #[arg(long, value_name = "FILE", global = true, default_value = "roster.csv")]
    roster: PathBuf,

    /// Shipyard assignment schedule CSV
    #[arg(long, value_name = "FILE", global = true)]
    shipyard: Option<PathBuf>,

    /// Vacation schedule CSV
    #[arg(long, value_name = "FILE", global = true)]
    vacations: Option<PathBuf>,

    /// General activity schedule CSV
    #[arg(long, value_name = "FILE", global = true)]
    general: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Full report: conflicts plus availability
    Report {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Conflict listing only
    Conflicts,

    /// Who is free inside the analysis window
    Availability,

    /// Render the occupancy Gantt chart as SVG
    Gantt {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let window = AnalysisWindow::new(
        cli.from.unwrap_or(today - Duration::days(30)),
        cli.to.unwrap_or(today + Duration::days(90)),
    );

    let sources = SourcePaths {
        roster: cli.sources.roster,
        shipyard: cli.sources.shipyard,
        vacations: cli.sources.vacations,
        general: cli.sources.general,
    };
    let loaded = load_snapshot(&sources);
    for diagnostic in &loaded.diagnostics {
        eprintln!("{diagnostic}");
    }

    let report = analyze(&loaded.snapshot, window);
    let ctx = RenderContext { today };

    match cli.command {
        Commands::Report { format, output } => {
            let rendered = match format {
                ReportFormat::Text => TextReportRenderer::new().render(&report, &ctx)?,
                ReportFormat::Json => serde_json::to_string_pretty(&report)
                    .context("serializing report to JSON")?,
            };
            emit(output.as_deref(), &rendered)?;
        }
        Commands::Conflicts => {
            let rendered = TextReportRenderer::conflicts_only().render(&report, &ctx)?;
            print!("{rendered}");
        }
        Commands::Availability => {
            print_availability(&report);
        }
        Commands::Gantt { output } => {
            if report.is_empty() {
                eprintln!("No active employees; nothing to chart.");
                return Ok(());
            }
            let svg = SvgGanttRenderer::new().render(&report, &ctx)?;
            std::fs::write(&output, svg)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("Wrote {}", output.display());
        }
    }

    Ok(())
}

fn emit(output: Option<&std::path::Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
        }
    }
    Ok(())
}

fn print_availability(report: &Report) {
    if report.is_empty() {
        println!("No active employees.");
        return;
    }
    let split = partition(&report.employees, &report.occupied);
    println!(
        "Window {} to {}",
        report.window.start.format("%d/%m/%Y"),
        report.window.end.format("%d/%m/%Y"),
    );
    println!("Available ({}):", split.available.len());
    for employee in &split.available {
        println!("  {} ({})", employee.name, employee.id);
    }
    println!("Occupied ({}):", split.occupied.len());
    for employee in &split.occupied {
        println!("  {} ({})", employee.name, employee.id);
    }
}

//! # crewgantt-engine
//!
//! Overlap detection, availability filtering and report assembly.
//!
//! This crate provides:
//! - [`conflict::detect_conflicts`] — the adjacent-pair overlap scan
//! - [`availability`] — window intersection and roster partitioning
//! - [`pipeline::analyze`] — one immutable snapshot in, one report out
//!
//! Every function here is a pure transformation of immutable inputs; there
//! is no shared state across runs and no ambient clock. Re-running the
//! pipeline on a refreshed snapshot simply discards the previous result.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use crewgantt_core::AnalysisWindow;
//! use crewgantt_engine::{analyze, Snapshot};
//!
//! let snapshot = Snapshot::default();
//! let window = AnalysisWindow::new(
//!     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
//! );
//! let report = analyze(&snapshot, window);
//! assert!(report.is_empty());
//! ```

pub mod availability;
pub mod conflict;
pub mod pipeline;

pub use availability::{occupied_ids, partition, Partition};
pub use conflict::detect_conflicts;
pub use pipeline::{analyze, Report, Snapshot};

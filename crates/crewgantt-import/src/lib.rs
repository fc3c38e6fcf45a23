//! # crewgantt-import
//!
//! Source loaders, interval normalizer and roster joiner for crewgantt.
//!
//! This crate turns three loosely-typed tabular sources (shipyard
//! assignment schedule, vacation schedule, general activity schedule) plus
//! the roster into the canonical domain values consumed by the analysis
//! engine. Nothing here is fatal: a missing file or an unparsable row
//! degrades to diagnostics plus a smaller result set, never a crash.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use crewgantt_import::{load_roster, load_general, normalize, enrich};
//!
//! let roster = load_roster(Path::new("roster.csv"));
//! let general = load_general(Path::new("general.csv"));
//! let normalized = normalize(general.rows);
//! let joined = enrich(&normalized.assignments, &roster.rows);
//! ```

pub mod join;
pub mod normalize;
pub mod roster;
pub mod source;

pub use join::{enrich, JoinOutcome};
pub use normalize::{normalize, parse_timestamp, NormalizeOutcome};
pub use roster::load_roster;
pub use source::{load_general, load_shipyard, load_vacations, RawRow};

use crewgantt_core::Diagnostic;

/// Rows read from one source plus everything worth telling the user.
#[derive(Clone, Debug, Default)]
pub struct LoadOutcome<T> {
    pub rows: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> LoadOutcome<T> {
    /// An empty outcome carrying a single diagnostic; used when a source
    /// file is missing or unreadable.
    pub fn unavailable(diagnostic: Diagnostic) -> Self {
        Self {
            rows: Vec::new(),
            diagnostics: vec![diagnostic],
        }
    }
}

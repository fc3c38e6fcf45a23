//! Snapshot assembly from source files.
//!
//! One load cycle reads every configured source, normalizes and joins, and
//! hands back a fresh [`Snapshot`] plus every diagnostic raised along the
//! way. The previous snapshot (if the caller kept one) is simply replaced.

use std::path::PathBuf;

use crewgantt_core::Diagnostic;
use crewgantt_engine::Snapshot;
use crewgantt_import::{
    enrich, load_general, load_roster, load_shipyard, load_vacations, normalize, RawRow,
};
use tracing::info;

/// Paths to the tabular sources. Only the roster is required; absent
/// schedules contribute no assignments.
#[derive(Clone, Debug)]
pub struct SourcePaths {
    pub roster: PathBuf,
    pub shipyard: Option<PathBuf>,
    pub vacations: Option<PathBuf>,
    pub general: Option<PathBuf>,
}

/// A loaded snapshot plus everything worth telling the user.
#[derive(Clone, Debug, Default)]
pub struct SnapshotLoad {
    pub snapshot: Snapshot,
    pub diagnostics: Vec<Diagnostic>,
}

/// Read all sources and assemble one consistent snapshot.
pub fn load_snapshot(paths: &SourcePaths) -> SnapshotLoad {
    let mut diagnostics = Vec::new();

    let roster = load_roster(&paths.roster);
    diagnostics.extend(roster.diagnostics);

    let mut rows: Vec<RawRow> = Vec::new();
    if let Some(path) = &paths.shipyard {
        let outcome = load_shipyard(path, &roster.rows);
        diagnostics.extend(outcome.diagnostics);
        rows.extend(outcome.rows);
    }
    if let Some(path) = &paths.vacations {
        let outcome = load_vacations(path);
        diagnostics.extend(outcome.diagnostics);
        rows.extend(outcome.rows);
    }
    if let Some(path) = &paths.general {
        let outcome = load_general(path);
        diagnostics.extend(outcome.diagnostics);
        rows.extend(outcome.rows);
    }

    let normalized = normalize(rows);
    diagnostics.extend(normalized.diagnostics);

    let joined = enrich(&normalized.assignments, &roster.rows);
    diagnostics.extend(joined.diagnostics);

    info!(
        employees = roster.rows.len(),
        assignments = joined.enriched.len(),
        unmatched = joined.unmatched,
        "snapshot loaded"
    );

    SnapshotLoad {
        snapshot: Snapshot {
            roster: roster.rows,
            assignments: joined.enriched,
        },
        diagnostics,
    }
}

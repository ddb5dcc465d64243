// Rankings file reading and preference store setup.
//
// The file is tab-delimited with no header: `captain<TAB>contestant` per row,
// each captain's rows contiguous and ordered best first.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use snakedraft_core::PreferenceStore;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum RankingsError {
    #[error("failed to open rankings file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed rankings: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected `captain<TAB>contestant`, found {found} column(s)")]
    MissingColumn { line: u64, found: usize },

    #[error("line {line}: empty {field} name")]
    EmptyField { line: u64, field: &'static str },

    #[error("captain `{captain}` ranks a different set of contestants than the first captain")]
    NonUniform { captain: String },
}

/// One parsed row of the rankings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRow {
    pub captain: String,
    pub contestant: String,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Strip trailing periods from a contestant. Nothing else is touched.
pub fn clean_contestant(raw: &str) -> &str {
    raw.trim_end_matches('.')
}

/// Parse rankings rows from any reader. Columns past the second are ignored.
pub fn parse_rankings<R: Read>(rdr: R) -> Result<Vec<RankingRow>, RankingsError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let line = record.position().map_or(i as u64 + 1, |p| p.line());

        let (Some(captain), Some(contestant)) = (record.get(0), record.get(1)) else {
            return Err(RankingsError::MissingColumn {
                line,
                found: record.len(),
            });
        };

        if captain.is_empty() {
            return Err(RankingsError::EmptyField {
                line,
                field: "captain",
            });
        }
        let contestant = clean_contestant(contestant);
        if contestant.is_empty() {
            return Err(RankingsError::EmptyField {
                line,
                field: "contestant",
            });
        }

        rows.push(RankingRow {
            captain: captain.to_string(),
            contestant: contestant.to_string(),
        });
    }
    Ok(rows)
}

/// Read and parse a rankings file from disk.
pub fn load_rankings(path: &Path) -> Result<Vec<RankingRow>, RankingsError> {
    let file = File::open(path).map_err(|e| RankingsError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rows = parse_rankings(file)?;
    info!(rows = rows.len(), path = %path.display(), "rankings loaded");
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Store setup
// ---------------------------------------------------------------------------

/// Build the preference store and give every named contestant the configured
/// supply.
///
/// Captains ranking different contestant sets are an error when
/// `rankings.require_uniform` is set; otherwise supply covers the union of
/// all named contestants.
pub fn build_store(
    rows: Vec<RankingRow>,
    config: &Config,
) -> Result<PreferenceStore, RankingsError> {
    let mut store = PreferenceStore::load(rows.into_iter().map(|r| (r.captain, r.contestant)));

    if let Some(captain) = store.divergent_captain() {
        if config.rankings.require_uniform {
            return Err(RankingsError::NonUniform {
                captain: captain.to_string(),
            });
        }
        warn!(
            captain = %captain,
            "captains rank differing contestant sets; drafting over the union"
        );
    }

    let supply = config.draft.supply_per_contestant();
    let contestants: Vec<String> = store.contestants().into_iter().map(String::from).collect();
    info!(
        captains = store.captain_count(),
        contestants = contestants.len(),
        supply,
        "preference store ready"
    );
    store.initialize_supply(contestants, supply);
    Ok(store)
}

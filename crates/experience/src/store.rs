//! Fingerprint -> outcome records, persisted as one JSON object.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chess_core::{Fingerprint, MoveKey};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::error::ExperienceError;
use crate::json_file;
use crate::record::{ExperienceRecord, Outcome};

type Entries = BTreeMap<Fingerprint, Vec<ExperienceRecord>>;

/// In-memory experience cache, optionally backed by a file.
///
/// Records for a fingerprint keep insertion order; fingerprints are kept
/// sorted so saved files are stable across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceStore {
    path: Option<PathBuf>,
    entries: Entries,
}

/// Summary counts for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub fingerprints: usize,
    pub records: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl ExperienceStore {
    /// A store that is never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads `path`, falling back to an empty store bound to the same path.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::load_or_empty(path)
    }

    /// Loads `path`. A missing file yields an empty store.
    pub fn try_load(path: impl Into<PathBuf>) -> Result<Self, ExperienceError> {
        let path = path.into();
        let entries: Option<Entries> = json_file::read(&path)?;
        match &entries {
            Some(map) => {
                info!(path = %path.display(), fingerprints = map.len(), "experience loaded")
            }
            None => info!(path = %path.display(), "no experience file, starting empty"),
        }
        Ok(Self {
            entries: entries.unwrap_or_default(),
            path: Some(path),
        })
    }

    /// Like [`try_load`](Self::try_load), but an unreadable or corrupted
    /// file is logged and replaced by an empty store.
    pub fn load_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::try_load(path.clone()) {
            Ok(store) => store,
            Err(e) => {
                warn!(error = %e, "experience store unusable, starting empty");
                Self {
                    path: Some(path),
                    entries: BTreeMap::new(),
                }
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Appends a record stamped with the current time.
    pub fn record_outcome(&mut self, fp: &Fingerprint, mv: MoveKey, outcome: Outcome) {
        self.record_outcome_at(fp, mv, outcome, Utc::now());
    }

    pub fn record_outcome_at(
        &mut self,
        fp: &Fingerprint,
        mv: MoveKey,
        outcome: Outcome,
        timestamp: DateTime<Utc>,
    ) {
        self.entries
            .entry(fp.clone())
            .or_default()
            .push(ExperienceRecord {
                mv,
                outcome,
                timestamp,
            });
    }

    pub fn records(&self, fp: &Fingerprint) -> &[ExperienceRecord] {
        self.entries.get(fp).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Move with the highest mean outcome for `fp`. Equal means go to the
    /// move that was recorded first.
    pub fn choose_best_move(&self, fp: &Fingerprint) -> Option<MoveKey> {
        let records = self.entries.get(fp)?;

        // (move, outcome sum, count) in first-seen order
        let mut tally: Vec<(MoveKey, i64, u32)> = Vec::new();
        for rec in records {
            let sign = i64::from(rec.outcome.sign());
            match tally.iter_mut().find(|(mv, _, _)| *mv == rec.mv) {
                Some((_, sum, count)) => {
                    *sum += sign;
                    *count += 1;
                }
                None => tally.push((rec.mv, sign, 1)),
            }
        }

        let mut best: Option<(MoveKey, f64)> = None;
        for (mv, sum, count) in tally {
            let mean = sum as f64 / f64::from(count);
            if best.is_none_or(|(_, b)| mean > b) {
                best = Some((mv, mean));
            }
        }
        best.map(|(mv, _)| mv)
    }

    /// Drops records older than `window` and returns how many were removed.
    pub fn prune_older_than(&mut self, window: Duration) -> usize {
        self.prune_older_than_at(window, Utc::now())
    }

    pub fn prune_older_than_at(&mut self, window: Duration, now: DateTime<Utc>) -> usize {
        // A window reaching past the representable range keeps everything.
        let Some(cutoff) = now.checked_sub_signed(window) else {
            return 0;
        };
        let mut removed = 0;
        self.entries.retain(|_, records| {
            let before = records.len();
            records.retain(|r| r.timestamp > cutoff);
            removed += before - records.len();
            !records.is_empty()
        });
        if removed > 0 {
            info!(removed, cutoff = %cutoff, "pruned old experience");
        }
        removed
    }

    /// Writes the store to its file. In-memory stores do nothing.
    pub fn persist(&self) -> Result<(), ExperienceError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        json_file::write(path, &self.entries)?;
        debug!(path = %path.display(), fingerprints = self.entries.len(), "experience saved");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        let mut stats = StoreStats {
            fingerprints: self.entries.len(),
            ..StoreStats::default()
        };
        for rec in self.entries.values().flatten() {
            stats.records += 1;
            match rec.outcome {
                Outcome::Win => stats.wins += 1,
                Outcome::Draw => stats.draws += 1,
                Outcome::Loss => stats.losses += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;

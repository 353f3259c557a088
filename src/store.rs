//! # Candidate Store
//!
//! Owns the source file path, the freshness window, and the in-memory cache
//! slot. One store instance lives in the shared [`State`](crate::state::State)
//! rather than in a module-level global, so tests can build stores against
//! their own fixture files and windows.
//!
//! ## Cache contract
//!
//! The slot holds the full parsed set plus its load instant. Writes are
//! full-value replacements, so readers never observe a partially built set.
//! Concurrent requests hitting an expired slot may each re-parse the file;
//! that race is accepted since the parse is idempotent and the last writer
//! wins.

use std::{
    path::PathBuf,
    sync::{Arc, RwLock},
    time::{Duration, Instant},
};

use tokio::fs::read_to_string;
use tracing::info;

use crate::{
    candidates::{CandidateRecord, parse_records},
    error::AppError,
};

struct CacheEntry {
    records: Arc<Vec<CandidateRecord>>,
    loaded_at: Instant,
}

pub struct CandidateStore {
    path: PathBuf,
    freshness_window: Duration,
    cache: RwLock<Option<CacheEntry>>,
}

impl CandidateStore {
    pub fn new(path: PathBuf, freshness_window: Duration) -> Self {
        Self {
            path,
            freshness_window,
            cache: RwLock::new(None),
        }
    }

    /// Returns the current candidate set and whether it came from the cache.
    ///
    /// A cache miss reads and re-parses the source file; an unreadable file
    /// surfaces as [`AppError::DataUnavailable`] without touching the slot.
    pub async fn get_candidates(&self) -> Result<(Arc<Vec<CandidateRecord>>, bool), AppError> {
        if let Some(records) = self.cached() {
            return Ok((records, true));
        }

        let content = read_to_string(&self.path).await?;
        let records = Arc::new(parse_records(&content));
        info!(
            "Parsed {} candidates from {}",
            records.len(),
            self.path.display()
        );

        *self.cache.write().expect("cache lock poisoned") = Some(CacheEntry {
            records: records.clone(),
            loaded_at: Instant::now(),
        });

        Ok((records, false))
    }

    fn cached(&self) -> Option<Arc<Vec<CandidateRecord>>> {
        let cache = self.cache.read().expect("cache lock poisoned");

        cache
            .as_ref()
            .filter(|entry| entry.loaded_at.elapsed() < self.freshness_window)
            .map(|entry| entry.records.clone())
    }
}

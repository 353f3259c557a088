//! # Candidate Lookup
//!
//! Stateless query layer over the [`CandidateStore`]: the full set, or a
//! text-filtered subset. Primary-language fields match case-insensitively;
//! the Hindi fields match by exact substring since lowercasing is a no-op
//! for Devanagari and queries arrive verbatim from the search box.

use serde::Serialize;

use crate::{candidates::CandidateRecord, error::AppError, store::CandidateStore};

#[derive(Serialize)]
pub struct LookupResponse {
    pub success: bool,
    pub data: Vec<CandidateRecord>,
    pub total: usize,
    pub cached: bool,
}

/// Answers a candidate query, optionally filtered by `search`.
///
/// An empty or absent query returns the full set. Propagates
/// [`AppError::DataUnavailable`] from the store; no partial results.
pub async fn list(
    store: &CandidateStore,
    search: Option<&str>,
) -> Result<LookupResponse, AppError> {
    let (records, cached) = store.get_candidates().await?;

    let data: Vec<CandidateRecord> = match search.filter(|query| !query.is_empty()) {
        Some(query) => records
            .iter()
            .filter(|record| matches_query(record, query))
            .cloned()
            .collect(),
        None => records.as_ref().clone(),
    };

    Ok(LookupResponse {
        success: true,
        total: data.len(),
        cached,
        data,
    })
}

fn matches_query(record: &CandidateRecord, query: &str) -> bool {
    let query_lower = query.to_lowercase();

    record.constituency_name.to_lowercase().contains(&query_lower)
        || record.candidate_name.to_lowercase().contains(&query_lower)
        || record.district.to_lowercase().contains(&query_lower)
        || record.constituency_name_localized.contains(query)
        || record.candidate_name_localized.contains(query)
        || record.district_localized.contains(query)
}

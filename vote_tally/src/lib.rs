pub mod builder;
mod config;
pub mod jurisdictions;
pub mod manual;

use log::{debug, info, warn};

use std::collections::HashMap;

pub use crate::config::*;
use crate::jurisdictions::{jurisdiction_index, JURISDICTIONS};

/// The loaded election returns.
///
/// The store is read-only: all the queries borrow it and none of them
/// changes it, so it can be shared freely once built.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RecordStore {
    pub(crate) records: Vec<VoteRecord>,
    pub(crate) rules: QueryRules,
}

impl RecordStore {
    /// The records, in the order they were loaded.
    pub fn records(&self) -> &[VoteRecord] {
        &self.records
    }

    pub fn rules(&self) -> &QueryRules {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The number of records and the number of votes they contain.
    pub fn overview(&self) -> Overview {
        let total_votes = self
            .records
            .iter()
            .map(|r| u64::from(r.vote_count))
            .sum();
        Overview {
            record_count: self.records.len(),
            total_votes,
        }
    }

    /// The candidates ranked by their number of votes over the whole country.
    pub fn national_results(&self) -> Vec<CandidateTotal> {
        aggregate(&self.records, None)
    }

    /// The candidates ranked by their number of votes in one state.
    ///
    /// The state name is not case-sensitive. An unknown or empty name returns
    /// no result.
    pub fn state_results(&self, jurisdiction: &str) -> Vec<StateResult> {
        if jurisdiction.is_empty() {
            return Vec::new();
        }
        let res: Vec<StateResult> = aggregate(&self.records, Some(jurisdiction))
            .into_iter()
            .map(|total| {
                let bars = bar_count(total.total_votes, self.rules.bar_scale);
                StateResult { total, bars }
            })
            .collect();
        debug!(
            "state_results: {:?}: {} candidates",
            jurisdiction,
            res.len()
        );
        res
    }

    /// The state-by-state performance of the first candidate whose name
    /// contains the search term.
    pub fn candidate_results(&self, term: &str) -> CandidateReport {
        let resolved_name = resolve_candidate(&self.records, term);
        info!(
            "candidate_results: term {:?} resolved to {:?}",
            term, resolved_name
        );
        let table = build_state_table(&self.records, resolved_name.as_deref());
        let best = best_jurisdiction(&table.tallies);
        CandidateReport {
            resolved_name,
            tallies: table.tallies,
            best,
            unrecognized: table.unrecognized,
        }
    }

    /// All the records of the counties whose name contains the search term.
    ///
    /// The records are not aggregated and come in the order of the input.
    pub fn county_search(&self, term: &str) -> Vec<&VoteRecord> {
        if term.is_empty() {
            return Vec::new();
        }
        let needle = term.to_ascii_uppercase();
        let res: Vec<&VoteRecord> = self
            .records
            .iter()
            .filter(|r| r.sub_jurisdiction.to_ascii_uppercase().contains(&needle))
            .collect();
        debug!("county_search: {:?}: {} records", term, res.len());
        res
    }
}

/// Sums the votes of each candidate, optionally restricted to one
/// jurisdiction (compared without case).
///
/// Candidates are grouped by their exact name. The first party label found
/// for a name is kept. The result is sorted by decreasing number of votes,
/// and candidates with the same number of votes keep the order in which they
/// first appear in the records.
pub fn aggregate(records: &[VoteRecord], filter: Option<&str>) -> Vec<CandidateTotal> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CandidateTotal> = Vec::new();

    let selected = records.iter().filter(|r| match filter {
        Some(j) => r.jurisdiction.eq_ignore_ascii_case(j),
        None => true,
    });
    for r in selected {
        match positions.get(r.candidate_name.as_str()) {
            Some(idx) => {
                totals[*idx].total_votes += u64::from(r.vote_count);
            }
            None => {
                positions.insert(r.candidate_name.as_str(), totals.len());
                totals.push(CandidateTotal {
                    candidate_name: r.candidate_name.clone(),
                    party_label: r.party_label.clone(),
                    total_votes: u64::from(r.vote_count),
                });
            }
        }
    }

    // Stable sort: the ties stay in the order of first appearance.
    totals.sort_by(|a, b| b.total_votes.cmp(&a.total_votes));
    debug!(
        "aggregate: filter {:?}: {} candidates",
        filter,
        totals.len()
    );
    totals
}

/// Finds the full name of the first candidate whose name contains the
/// search term, without regard to case.
///
/// Like the state filter, only ASCII letters are folded.
pub fn resolve_candidate(records: &[VoteRecord], term: &str) -> Option<String> {
    if term.is_empty() {
        return None;
    }
    let needle = term.to_ascii_uppercase();
    records
        .iter()
        .find(|r| r.candidate_name.to_ascii_uppercase().contains(&needle))
        .map(|r| r.candidate_name.clone())
}

/// Builds the table of the known jurisdictions for a candidate.
///
/// Every record counts towards the total of its jurisdiction, and also
/// towards the candidate votes if it is for exactly this candidate. Without
/// a candidate, all the candidate votes stay at zero.
///
/// The records whose jurisdiction is not in the canonical list are left out
/// of the table; their jurisdictions are returned separately.
pub fn build_state_table(records: &[VoteRecord], candidate: Option<&str>) -> StateTable {
    let mut tallies: Vec<JurisdictionTally> = JURISDICTIONS
        .iter()
        .map(|j| JurisdictionTally::empty(*j))
        .collect();
    let mut unrecognized: Vec<String> = Vec::new();

    for r in records.iter() {
        match jurisdiction_index(&r.jurisdiction) {
            Some(idx) => {
                let t = &mut tallies[idx];
                let votes = u64::from(r.vote_count);
                if candidate == Some(r.candidate_name.as_str()) {
                    t.candidate_votes += votes;
                }
                t.total_votes += votes;
            }
            None => {
                if !unrecognized.contains(&r.jurisdiction) {
                    warn!(
                        "build_state_table: unrecognized jurisdiction {:?} (county {:?}) is not counted",
                        r.jurisdiction, r.sub_jurisdiction
                    );
                    unrecognized.push(r.jurisdiction.clone());
                }
            }
        }
    }

    StateTable {
        tallies,
        unrecognized,
    }
}

// The first jurisdiction with the strictly highest share wins.
fn best_jurisdiction(tallies: &[JurisdictionTally]) -> Option<BestJurisdiction> {
    let mut best: Option<BestJurisdiction> = None;
    let mut best_percentage = 0.0;
    for t in tallies.iter() {
        let percentage = t.percentage();
        if percentage > best_percentage {
            best_percentage = percentage;
            best = Some(BestJurisdiction {
                jurisdiction: t.jurisdiction,
                percentage,
            });
        }
    }
    best
}

/// The number of bars drawn for a number of votes.
///
/// Halves are rounded away from zero.
pub fn bar_count(votes: u64, bar_scale: u64) -> u64 {
    (votes as f64 / bar_scale as f64).round() as u64
}

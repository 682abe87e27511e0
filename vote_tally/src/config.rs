// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// One line of the returns: the votes of a candidate in a single county.
///
/// Records are created once when the data is loaded and never modified.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct VoteRecord {
    /// The state, as written in the source (expected in upper case).
    pub jurisdiction: String,
    /// The county or county-equivalent.
    pub sub_jurisdiction: String,
    pub candidate_name: String,
    pub party_label: String,
    /// Totals are computed over `u64`, so they cannot overflow.
    pub vote_count: u32,
}

// ******** Output data structures *********

/// The total number of votes of a candidate over a set of records.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CandidateTotal {
    pub candidate_name: String,
    /// The first party label seen for this candidate.
    pub party_label: String,
    pub total_votes: u64,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Overview {
    pub record_count: usize,
    pub total_votes: u64,
}

/// A candidate total in a state, with the length of its bar in the chart.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct StateResult {
    pub total: CandidateTotal,
    pub bars: u64,
}

/// Statistics of one jurisdiction for a given candidate.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct JurisdictionTally {
    pub jurisdiction: &'static str,
    pub candidate_votes: u64,
    pub total_votes: u64,
}

impl JurisdictionTally {
    pub(crate) fn empty(jurisdiction: &'static str) -> JurisdictionTally {
        JurisdictionTally {
            jurisdiction,
            candidate_votes: 0,
            total_votes: 0,
        }
    }

    /// The share of the votes that went to the candidate, between 0 and 100.
    ///
    /// Jurisdictions without any vote have a share of 0.
    pub fn percentage(&self) -> f64 {
        if self.total_votes > 0 {
            (100.0 * self.candidate_votes as f64) / self.total_votes as f64
        } else {
            0.0
        }
    }
}

/// The per-jurisdiction table for one candidate.
#[derive(PartialEq, Debug, Clone)]
pub struct StateTable {
    /// One entry per known jurisdiction, in the canonical order.
    pub tallies: Vec<JurisdictionTally>,
    /// The jurisdictions found in the records that are not part of the
    /// canonical list, in the order they were first seen. The votes of these
    /// records are not counted in `tallies`.
    pub unrecognized: Vec<String>,
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct BestJurisdiction {
    pub jurisdiction: &'static str,
    pub percentage: f64,
}

#[derive(PartialEq, Debug, Clone)]
pub struct CandidateReport {
    /// The full name of the candidate matched by the search term, if any.
    pub resolved_name: Option<String>,
    pub tallies: Vec<JurisdictionTally>,
    /// The jurisdiction with the highest share of votes. Absent when the
    /// candidate received no vote in any known jurisdiction.
    pub best: Option<BestJurisdiction>,
    pub unrecognized: Vec<String>,
}

/// Errors that prevent the engine from being set up.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum TallyErrors {
    InvalidBarScale,
}

impl Error for TallyErrors {}

impl Display for TallyErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TallyErrors::InvalidBarScale => {
                write!(f, "TallyError: the bar scale must be a positive number of votes")
            }
        }
    }
}

// ********* Configuration **********

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct QueryRules {
    /// Number of votes represented by one bar in the state chart.
    pub bar_scale: u64,
}

impl QueryRules {
    pub const DEFAULT_RULES: QueryRules = QueryRules { bar_scale: 150_000 };
}

impl Default for QueryRules {
    fn default() -> Self {
        QueryRules::DEFAULT_RULES
    }
}

pub use crate::config::*;
use crate::RecordStore;

/// A builder for assembling the record store.
///
/// Records are kept in the order they are added.
///
/// ```
/// pub use vote_tally::builder::Builder;
/// pub use vote_tally::QueryRules;
/// # use vote_tally::TallyErrors;
///
/// let mut builder = Builder::new(&QueryRules::DEFAULT_RULES)?;
/// builder.add_vote("OHIO", "Cuyahoga", "Anna", "Party X", 100);
/// builder.add_vote("OHIO", "Franklin", "Bob", "Party Y", 50);
///
/// let store = builder.build();
/// assert_eq!(store.overview().total_votes, 150);
///
/// # Ok::<(), TallyErrors>(())
/// ```
pub struct Builder {
    pub(crate) _rules: QueryRules,
    pub(crate) _records: Vec<VoteRecord>,
}

impl Builder {
    pub fn new(rules: &QueryRules) -> Result<Builder, TallyErrors> {
        if rules.bar_scale == 0 {
            return Err(TallyErrors::InvalidBarScale);
        }
        Ok(Builder {
            _rules: rules.clone(),
            _records: Vec::new(),
        })
    }

    /// Adds the votes of a candidate in a county.
    ///
    /// It is the simplest use case for most cases.
    pub fn add_vote(
        &mut self,
        jurisdiction: &str,
        sub_jurisdiction: &str,
        candidate_name: &str,
        party_label: &str,
        vote_count: u32,
    ) {
        self.add_record(VoteRecord {
            jurisdiction: jurisdiction.to_string(),
            sub_jurisdiction: sub_jurisdiction.to_string(),
            candidate_name: candidate_name.to_string(),
            party_label: party_label.to_string(),
            vote_count,
        })
    }

    pub fn add_record(&mut self, record: VoteRecord) {
        self._records.push(record);
    }

    pub fn len(&self) -> usize {
        self._records.len()
    }

    pub fn is_empty(&self) -> bool {
        self._records.is_empty()
    }

    /// Freezes the records. The store cannot be modified afterwards.
    pub fn build(self) -> RecordStore {
        RecordStore {
            records: self._records,
            rules: self._rules,
        }
    }
}

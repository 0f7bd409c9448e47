// crates/domain/src/analytics/frequency.rs
use std::cmp::Ordering;

use hashbrown::HashMap;
use line_tools_shared_kernel::TokenCount;

use crate::model::FrequencyEntry;

/// Occurrence counts of whitespace-delimited tokens for a single run.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, TokenCount>,
    total: TokenCount,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token`.
    pub fn observe(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1usize,
            None => {
                self.counts.insert(token.to_owned(), TokenCount::new(1));
            }
        }
        self.total += 1usize;
    }

    pub fn observe_all<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.observe(token.as_ref());
        }
    }

    /// Count for `token`, zero if never seen.
    pub fn count(&self, token: &str) -> TokenCount {
        self.counts.get(token).copied().unwrap_or_default()
    }

    /// All tokens observed, duplicates included.
    pub fn grand_total(&self) -> TokenCount {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_zero()
    }

    /// Entries by descending count, ties broken by ascending token.
    pub fn ranking(&self) -> Vec<FrequencyEntry> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(token, &count)| FrequencyEntry::new(token.as_str(), count))
            .collect();
        entries.sort_by(rank_order);
        entries
    }
}

fn rank_order(a: &FrequencyEntry, b: &FrequencyEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token))
}

//! Rank lookup built from the `OAppStats` ordering.

use oapp_api::StatRecord;
use oapp_config::RankPolicy;
use std::collections::HashMap;
use tracing::warn;

/// Maps an application id to its zero-based position in the stats list.
/// Lower rank means more packets received.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RankIndex {
    ranks: HashMap<String, usize>,
}

impl RankIndex {
    /// Builds the index with a forward pass over `stats`. With
    /// [`RankPolicy::LastWins`] a repeated id takes its later position;
    /// with [`RankPolicy::FirstWins`] it keeps the earlier one.
    pub fn build(stats: &[StatRecord], policy: RankPolicy) -> Self {
        let mut ranks = HashMap::with_capacity(stats.len());
        for (rank, stat) in stats.iter().enumerate() {
            if let Some(previous) = ranks.get(&stat.id).copied() {
                warn!(
                    "OAppStats lists {} more than once (positions {previous} and {rank}), {policy} applies",
                    stat.id
                );
                if policy == RankPolicy::FirstWins {
                    continue;
                }
            }
            ranks.insert(stat.id.clone(), rank);
        }
        Self { ranks }
    }

    /// Rank of `id`, or `None` for an unknown identifier.
    pub fn get(&self, id: &str) -> Option<usize> {
        self.ranks.get(id).copied()
    }

    /// Sort key: unknown identifiers go after every known one.
    pub fn sort_key(&self, id: &str) -> usize {
        self.get(id).unwrap_or(usize::MAX)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ranks.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

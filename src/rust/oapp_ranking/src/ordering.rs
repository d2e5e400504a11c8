//! Orders security configs by stats rank and collapses duplicates.

use crate::rank_index::RankIndex;
use oapp_api::ConfigRecord;
use oapp_config::ReportView;
use std::collections::HashSet;

/// Both transformed views of the configuration list.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedConfigs {
    /// Every record, in rank order
    pub sorted: Vec<ConfigRecord>,
    /// First record per application id, in rank order
    pub unique: Vec<ConfigRecord>,
}

impl OrderedConfigs {
    pub fn new(configs: Vec<ConfigRecord>, index: &RankIndex) -> Self {
        let sorted = sort_by_rank(configs, index);
        let unique = dedupe_first(&sorted);
        Self { sorted, unique }
    }

    pub fn view(&self, view: ReportView) -> &[ConfigRecord] {
        match view {
            ReportView::Unique => &self.unique,
            ReportView::Sorted => &self.sorted,
        }
    }
}

/// Stable sort by rank. Equal ranks, and all unknown ids, keep their input
/// order.
pub fn sort_by_rank(mut configs: Vec<ConfigRecord>, index: &RankIndex) -> Vec<ConfigRecord> {
    configs.sort_by_key(|c| index.sort_key(&c.oapp_id));
    configs
}

/// Keeps the first record seen for each `oappId`.
pub fn dedupe_first(sorted: &[ConfigRecord]) -> Vec<ConfigRecord> {
    let mut seen = HashSet::new();
    sorted
        .iter()
        .filter(|c| seen.insert(c.oapp_id.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use oapp_api::StatRecord;
    use oapp_config::RankPolicy;
    use serde_json::json;

    fn index(ids: &[&str]) -> RankIndex {
        let stats: Vec<StatRecord> = ids
            .iter()
            .map(|id| StatRecord {
                id: id.to_string(),
                total_packets_received: 0,
            })
            .collect();
        RankIndex::build(&stats, RankPolicy::LastWins)
    }

    fn tagged(id: &str, tag: u32) -> ConfigRecord {
        let mut c = ConfigRecord::new(id);
        c.extra.insert("tag".to_string(), json!(tag));
        c
    }

    fn ids(configs: &[ConfigRecord]) -> Vec<&str> {
        configs.iter().map(|c| c.oapp_id.as_str()).collect()
    }

    fn tags(configs: &[ConfigRecord]) -> Vec<u64> {
        configs
            .iter()
            .map(|c| c.extra["tag"].as_u64().unwrap())
            .collect()
    }

    #[test]
    fn worked_example() {
        let index = index(&["a", "b", "c"]);
        let configs = vec![tagged("c", 0), tagged("a", 1), tagged("x", 2), tagged("a", 3)];
        let ordered = OrderedConfigs::new(configs, &index);

        assert_eq!(ids(&ordered.sorted), vec!["a", "a", "c", "x"]);
        assert_eq!(ids(&ordered.unique), vec!["a", "c", "x"]);
        // The first "a" in input order survives.
        assert_eq!(tags(&ordered.unique), vec![1, 0, 2]);
    }

    #[test]
    fn sort_is_stable_for_equal_ranks() {
        let index = index(&["a", "b"]);
        let configs = vec![tagged("b", 0), tagged("a", 1), tagged("b", 2), tagged("a", 3)];
        let sorted = sort_by_rank(configs, &index);
        assert_eq!(ids(&sorted), vec!["a", "a", "b", "b"]);
        assert_eq!(tags(&sorted), vec![1, 3, 0, 2]);
    }

    #[test]
    fn unknowns_go_last_in_input_order() {
        let index = index(&["a", "b"]);
        let configs = vec![
            tagged("y", 0),
            tagged("b", 1),
            tagged("x", 2),
            tagged("a", 3),
            tagged("y", 4),
        ];
        let sorted = sort_by_rank(configs, &index);
        assert_eq!(ids(&sorted), vec!["a", "b", "y", "x", "y"]);
        assert_eq!(tags(&sorted), vec![3, 1, 0, 2, 4]);

        let unique = dedupe_first(&sorted);
        assert_eq!(ids(&unique), vec!["a", "b", "y", "x"]);
        assert_eq!(tags(&unique), vec![3, 1, 0, 2]);
    }

    #[test]
    fn fully_known_output_follows_stats_order() {
        let index = index(&["d", "b", "a", "c"]);
        let configs = vec![
            tagged("a", 0),
            tagged("b", 1),
            tagged("c", 2),
            tagged("d", 3),
            tagged("c", 4),
        ];
        let ordered = OrderedConfigs::new(configs, &index);
        assert_eq!(ids(&ordered.unique), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn dedupe_keeps_one_per_id() {
        let configs = vec![tagged("a", 0), tagged("a", 1), tagged("b", 2), tagged("a", 3)];
        let unique = dedupe_first(&configs);
        assert_eq!(ids(&unique), vec!["a", "b"]);
        assert_eq!(tags(&unique), vec![0, 2]);
    }

    #[test]
    fn empty_inputs() {
        let ordered = OrderedConfigs::new(vec![], &RankIndex::default());
        assert!(ordered.sorted.is_empty());
        assert!(ordered.unique.is_empty());
    }

    #[test]
    fn no_stats_keeps_input_order() {
        let configs = vec![tagged("z", 0), tagged("m", 1), tagged("z", 2)];
        let ordered = OrderedConfigs::new(configs, &RankIndex::default());
        assert_eq!(ids(&ordered.sorted), vec!["z", "m", "z"]);
        assert_eq!(ids(&ordered.unique), vec!["z", "m"]);
    }

    #[test]
    fn view_selects_list() {
        let index = index(&["a"]);
        let ordered = OrderedConfigs::new(vec![tagged("a", 0), tagged("a", 1)], &index);
        assert_eq!(ordered.view(ReportView::Sorted).len(), 2);
        assert_eq!(ordered.view(ReportView::Unique).len(), 1);
    }
}

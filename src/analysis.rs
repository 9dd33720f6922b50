//! Summary statistics over the whole mistake store.
//!
//! Rows that cannot be resolved still appear in the row list, the top-N
//! table and the distinct key count, but carry no day and are left out of
//! the per-day totals.

use crate::models::{QuestionBank, review};
use crate::storage::Mistakes;
use std::collections::BTreeMap;

/// One stored mistake as shown in the analysis tables.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisRow {
    pub key: String,
    pub day: Option<u32>,
    /// 0-based index within the day.
    pub index: Option<u32>,
    pub count: u64,
    /// Question prompt, or the resolution error for unresolved rows.
    pub question: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MistakeAnalysis {
    pub rows: Vec<AnalysisRow>,
    /// Day number to summed mistake count.
    pub per_day: BTreeMap<u32, u64>,
    /// Rows with the highest counts, ties in store order.
    pub top: Vec<AnalysisRow>,
    pub distinct_keys: usize,
    pub busiest_day: Option<u32>,
    pub total_mistakes: u64,
}

impl MistakeAnalysis {
    /// Builds every table from one pass over the store.
    pub fn compute(mistakes: &Mistakes, bank: &QuestionBank, top_n: usize) -> Self {
        let rows: Vec<AnalysisRow> = review(mistakes, bank)
            .map(|entry| match entry.resolution {
                Ok(resolved) => AnalysisRow {
                    key: entry.key.to_string(),
                    day: Some(resolved.key.day),
                    index: Some(resolved.key.index),
                    count: entry.count,
                    question: resolved.question.prompt.clone(),
                },
                Err(e) => AnalysisRow {
                    key: entry.key.to_string(),
                    day: None,
                    index: None,
                    count: entry.count,
                    question: format!("Error: {}", e),
                },
            })
            .collect();

        let mut per_day: BTreeMap<u32, u64> = BTreeMap::new();
        for row in &rows {
            if let Some(day) = row.day {
                *per_day.entry(day).or_insert(0) += row.count;
            }
        }

        // Strict comparison keeps the earliest day on ties.
        let mut busiest: Option<(u32, u64)> = None;
        for (&day, &total) in &per_day {
            if busiest.is_none_or(|(_, best)| total > best) {
                busiest = Some((day, total));
            }
        }

        let mut top = rows.clone();
        top.sort_by(|a, b| b.count.cmp(&a.count));
        top.truncate(top_n);

        Self {
            distinct_keys: mistakes.len(),
            total_mistakes: rows.iter().map(|row| row.count).sum(),
            busiest_day: busiest.map(|(day, _)| day),
            per_day,
            top,
            rows,
        }
    }

    /// True when the store had no entries at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Largest per-day total, for scaling charts.
    pub fn max_day_total(&self) -> u64 {
        self.per_day.values().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::numbered_bank;

    fn mistakes(entries: &[(&str, u64)]) -> Mistakes {
        entries.iter().map(|(k, c)| (k.to_string(), *c)).collect()
    }

    #[test]
    fn test_per_day_totals_and_busiest_day() {
        let bank = numbered_bank(80);
        let analysis = MistakeAnalysis::compute(&mistakes(&[("day1_q0", 5), ("day2_q1", 1)]), &bank, 10);

        assert_eq!(analysis.per_day, BTreeMap::from([(1, 5), (2, 1)]));
        assert_eq!(analysis.busiest_day, Some(1));
        assert_eq!(analysis.distinct_keys, 2);
        assert_eq!(analysis.total_mistakes, 6);
    }

    #[test]
    fn test_per_day_groups_by_day() {
        let bank = numbered_bank(120);
        let store = mistakes(&[("day3_q0", 2), ("day1_q4", 1), ("day3_q9", 4), ("day1_q5", 1)]);
        let analysis = MistakeAnalysis::compute(&store, &bank, 10);

        assert_eq!(analysis.per_day, BTreeMap::from([(1, 2), (3, 6)]));
        assert_eq!(analysis.busiest_day, Some(3));
        assert_eq!(analysis.max_day_total(), 6);
    }

    #[test]
    fn test_busiest_day_tie_picks_earliest() {
        let bank = numbered_bank(120);
        let store = mistakes(&[("day3_q0", 4), ("day2_q0", 4)]);
        let analysis = MistakeAnalysis::compute(&store, &bank, 10);
        assert_eq!(analysis.busiest_day, Some(2));
    }

    #[test]
    fn test_top_is_stable_and_truncated() {
        let bank = numbered_bank(40);
        let store = mistakes(&[
            ("day1_q0", 1),
            ("day1_q1", 3),
            ("day1_q2", 2),
            ("day1_q3", 3),
            ("day1_q4", 5),
        ]);
        let analysis = MistakeAnalysis::compute(&store, &bank, 3);

        let keys: Vec<&str> = analysis.top.iter().map(|row| row.key.as_str()).collect();
        assert_eq!(keys, vec!["day1_q4", "day1_q1", "day1_q3"]);
    }

    #[test]
    fn test_unresolved_rows_kept_but_not_grouped() {
        let bank = numbered_bank(40);
        let store = mistakes(&[("garbage", 9), ("day1_q2", 1), ("day4_q0", 2)]);
        let analysis = MistakeAnalysis::compute(&store, &bank, 10);

        assert_eq!(analysis.rows.len(), 3);
        assert_eq!(analysis.distinct_keys, 3);
        assert_eq!(analysis.per_day, BTreeMap::from([(1, 1)]));
        assert_eq!(analysis.top[0].key, "garbage");
        assert_eq!(analysis.top[0].day, None);
        assert!(analysis.top[0].question.starts_with("Error: "));
        assert_eq!(analysis.rows[1].question, "2");
        assert_eq!(analysis.rows[1].index, Some(2));
    }

    #[test]
    fn test_empty_store() {
        let analysis = MistakeAnalysis::compute(&Mistakes::new(), &numbered_bank(40), 10);
        assert!(analysis.is_empty());
        assert_eq!(analysis.busiest_day, None);
        assert_eq!(analysis.max_day_total(), 0);
    }

    #[test]
    fn test_no_resolvable_rows_has_no_busiest_day() {
        let analysis = MistakeAnalysis::compute(&mistakes(&[("nope", 2)]), &QuestionBank::default(), 10);
        assert_eq!(analysis.busiest_day, None);
        assert!(analysis.per_day.is_empty());
        assert_eq!(analysis.total_mistakes, 2);
    }
}

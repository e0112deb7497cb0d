use super::super::evaluation::EnrichedSupplierRecord;

pub const TOP_PERFORMER_THRESHOLD: f64 = 85.0;
pub const TOP_PERFORMER_LIMIT: usize = 5;
pub const UNDERPERFORMER_THRESHOLD: f64 = 70.0;

/// Orders records by overall score, highest first. Ties keep their input order.
pub fn rank_by_score(records: &mut [EnrichedSupplierRecord]) {
    records.sort_by(|left, right| right.overall_score.total_cmp(&left.overall_score));
}

/// Up to [`TOP_PERFORMER_LIMIT`] records at or above the top threshold.
/// Expects `ranked` to already be sorted by [`rank_by_score`].
pub fn top_performers(ranked: &[EnrichedSupplierRecord]) -> Vec<EnrichedSupplierRecord> {
    ranked
        .iter()
        .filter(|record| record.overall_score >= TOP_PERFORMER_THRESHOLD)
        .take(TOP_PERFORMER_LIMIT)
        .cloned()
        .collect()
}

pub fn underperformers(ranked: &[EnrichedSupplierRecord]) -> Vec<EnrichedSupplierRecord> {
    ranked
        .iter()
        .filter(|record| record.overall_score < UNDERPERFORMER_THRESHOLD)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::scorecard::domain::{RawSupplierRecord, SupplierId};
    use crate::workflows::scorecard::evaluation::EvaluationEngine;

    fn scored(id: &str, score: f64) -> EnrichedSupplierRecord {
        let raw = RawSupplierRecord {
            supplier_id: SupplierId::from(id),
            name: format!("Supplier {id}"),
            category: None,
            total_orders: 10,
            total_value: 1_000.0,
            on_time_deliveries: 10,
            late_deliveries: 0,
            quality_issues: 0,
            avg_lead_time_days: Some(7.0),
        };
        let mut enriched = EvaluationEngine::default().evaluate(&raw);
        enriched.overall_score = score;
        enriched
    }

    fn ids(records: &[EnrichedSupplierRecord]) -> Vec<&str> {
        records
            .iter()
            .map(|record| record.supplier_id().as_str())
            .collect()
    }

    #[test]
    fn ranking_is_descending_and_stable_for_ties() {
        let mut records = vec![
            scored("a", 72.0),
            scored("b", 91.5),
            scored("c", 72.0),
            scored("d", 88.0),
            scored("e", 72.0),
        ];

        rank_by_score(&mut records);

        assert_eq!(ids(&records), vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn top_performers_are_capped_at_five() {
        let mut records: Vec<_> = (0..8)
            .map(|idx| scored(&format!("s{idx}"), 85.0 + f64::from(idx)))
            .collect();
        rank_by_score(&mut records);

        let top = top_performers(&records);

        assert_eq!(top.len(), TOP_PERFORMER_LIMIT);
        assert_eq!(ids(&top), vec!["s7", "s6", "s5", "s4", "s3"]);
    }

    #[test]
    fn middle_band_lands_in_neither_list() {
        let mut records = vec![
            scored("top", 85.0),
            scored("middle-high", 84.99),
            scored("middle-low", 70.0),
            scored("under", 69.99),
            scored("worst", 12.0),
        ];
        rank_by_score(&mut records);

        let top = top_performers(&records);
        let under = underperformers(&records);

        assert_eq!(ids(&top), vec!["top"]);
        assert_eq!(ids(&under), vec!["under", "worst"]);
        assert!(top
            .iter()
            .all(|record| !under.iter().any(|other| other.supplier_id() == record.supplier_id())));
    }
}

use super::domain::{RawSupplierRecord, SupplierId};
use super::evaluation::{EnrichedSupplierRecord, EvaluationEngine};
use super::report::rank_by_score;
use super::report::views::SupplierScoreView;
use serde::Serialize;
use std::collections::HashSet;

/// Best values across the compared suppliers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMetrics {
    pub best_on_time_rate: f64,
    pub best_quality_score: f64,
    /// Absent when none of the compared suppliers has a recorded lead time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest_lead_time_days: Option<f64>,
    pub highest_total_value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplierComparison {
    pub suppliers: Vec<EnrichedSupplierRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ComparisonMetrics>,
}

impl SupplierComparison {
    /// Restricts `candidates` to `requested` and ranks what remains.
    ///
    /// Identifiers without a candidate are dropped without error.
    pub fn build(
        requested: &[SupplierId],
        candidates: &[RawSupplierRecord],
        engine: &EvaluationEngine,
    ) -> Self {
        let wanted: HashSet<&SupplierId> = requested.iter().collect();
        let subset: Vec<RawSupplierRecord> = candidates
            .iter()
            .filter(|record| record.has_activity() && wanted.contains(&record.supplier_id))
            .cloned()
            .collect();

        let mut suppliers = engine.evaluate_all(&subset);
        rank_by_score(&mut suppliers);
        let metrics = comparison_metrics(&suppliers);

        Self { suppliers, metrics }
    }

    /// Highest-scoring supplier, if any matched.
    pub fn winner(&self) -> Option<&EnrichedSupplierRecord> {
        self.suppliers.first()
    }

    pub fn view(&self) -> SupplierComparisonView {
        SupplierComparisonView {
            winner: self.winner().map(|record| record.supplier_id().clone()),
            suppliers: self.suppliers.iter().map(SupplierScoreView::from).collect(),
            metrics: self.metrics.clone(),
        }
    }
}

fn comparison_metrics(suppliers: &[EnrichedSupplierRecord]) -> Option<ComparisonMetrics> {
    let first = suppliers.first()?;

    let mut metrics = ComparisonMetrics {
        best_on_time_rate: first.on_time_rate,
        best_quality_score: first.quality_score,
        shortest_lead_time_days: None,
        highest_total_value: first.record.total_value,
    };

    for supplier in suppliers {
        metrics.best_on_time_rate = metrics.best_on_time_rate.max(supplier.on_time_rate);
        metrics.best_quality_score = metrics.best_quality_score.max(supplier.quality_score);
        metrics.highest_total_value = metrics.highest_total_value.max(supplier.record.total_value);
        if let Some(days) = supplier.record.avg_lead_time_days {
            metrics.shortest_lead_time_days = Some(match metrics.shortest_lead_time_days {
                Some(current) => current.min(days),
                None => days,
            });
        }
    }

    Some(metrics)
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplierComparisonView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<SupplierId>,
    pub suppliers: Vec<SupplierScoreView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ComparisonMetrics>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(
        id: &str,
        on_time: u32,
        value: f64,
        lead_time: Option<f64>,
    ) -> RawSupplierRecord {
        RawSupplierRecord {
            supplier_id: SupplierId::from(id),
            name: format!("Supplier {id}"),
            category: Some("Logistics".to_string()),
            total_orders: 20,
            total_value: value,
            on_time_deliveries: on_time,
            late_deliveries: 20 - on_time,
            quality_issues: 1,
            avg_lead_time_days: lead_time,
        }
    }

    fn candidates() -> Vec<RawSupplierRecord> {
        vec![
            candidate("alpha", 12, 80_000.0, Some(21.0)),
            candidate("bravo", 19, 15_000.0, None),
            candidate("charlie", 16, 120_000.0, Some(9.5)),
            candidate("delta", 20, 5_000.0, Some(4.0)),
        ]
    }

    #[test]
    fn empty_request_has_no_winner_or_metrics() {
        let comparison =
            SupplierComparison::build(&[], &candidates(), &EvaluationEngine::default());

        assert!(comparison.suppliers.is_empty());
        assert!(comparison.winner().is_none());
        assert!(comparison.metrics.is_none());
    }

    #[test]
    fn unknown_identifiers_are_ignored() {
        let requested = vec![SupplierId::from("alpha"), SupplierId::from("zulu")];
        let comparison =
            SupplierComparison::build(&requested, &candidates(), &EvaluationEngine::default());

        assert_eq!(comparison.suppliers.len(), 1);
        assert_eq!(
            comparison.winner().map(|record| record.supplier_id().as_str()),
            Some("alpha")
        );
    }

    #[test]
    fn winner_and_extrema_cover_the_subset_only() {
        let requested = vec![
            SupplierId::from("alpha"),
            SupplierId::from("bravo"),
            SupplierId::from("charlie"),
        ];
        let comparison =
            SupplierComparison::build(&requested, &candidates(), &EvaluationEngine::default());

        let ranked: Vec<_> = comparison
            .suppliers
            .iter()
            .map(|record| record.supplier_id().as_str())
            .collect();
        assert_eq!(ranked, vec!["bravo", "charlie", "alpha"]);

        let metrics = comparison.metrics.expect("metrics for non-empty subset");
        assert_eq!(metrics.best_on_time_rate, 95.0);
        assert_eq!(metrics.best_quality_score, 95.0);
        assert_eq!(metrics.shortest_lead_time_days, Some(9.5));
        assert_eq!(metrics.highest_total_value, 120_000.0);

        let view = comparison_view(&requested);
        assert_eq!(view.winner, Some(SupplierId::from("bravo")));
    }

    #[test]
    fn shortest_lead_time_is_absent_without_any_lead_times() {
        let requested = vec![SupplierId::from("bravo")];
        let comparison =
            SupplierComparison::build(&requested, &candidates(), &EvaluationEngine::default());

        let metrics = comparison.metrics.expect("metrics for non-empty subset");
        assert_eq!(metrics.shortest_lead_time_days, None);
    }

    fn comparison_view(requested: &[SupplierId]) -> SupplierComparisonView {
        SupplierComparison::build(requested, &candidates(), &EvaluationEngine::default()).view()
    }
}

use super::super::evaluation::EnrichedSupplierRecord;
use super::summary::PortfolioSummary;
use serde::Serialize;
use std::collections::BTreeMap;

/// Portfolio figures restricted to one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAggregate {
    pub supplier_count: usize,
    pub total_orders: u64,
    pub total_value: f64,
    pub on_time_rate: f64,
    pub quality_score: f64,
    pub average_overall_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub aggregate: CategoryAggregate,
    pub suppliers: Vec<EnrichedSupplierRecord>,
}

/// Partitions records by their resolved category, ordered by category name.
/// Within a group records keep the order they were given in.
pub fn group_by_category(records: &[EnrichedSupplierRecord]) -> Vec<CategoryGroup> {
    let mut buckets: BTreeMap<&str, Vec<EnrichedSupplierRecord>> = BTreeMap::new();
    for record in records {
        buckets
            .entry(record.category.as_str())
            .or_default()
            .push(record.clone());
    }

    buckets
        .into_iter()
        .map(|(category, suppliers)| CategoryGroup {
            category: category.to_string(),
            aggregate: aggregate(&suppliers),
            suppliers,
        })
        .collect()
}

fn aggregate(suppliers: &[EnrichedSupplierRecord]) -> CategoryAggregate {
    let totals = PortfolioSummary::from_records(suppliers);
    let average_overall_score = if suppliers.is_empty() {
        0.0
    } else {
        suppliers.iter().map(|record| record.overall_score).sum::<f64>() / suppliers.len() as f64
    };

    CategoryAggregate {
        supplier_count: totals.total_suppliers,
        total_orders: totals.total_orders,
        total_value: totals.total_value,
        on_time_rate: totals.on_time_rate,
        quality_score: totals.quality_score,
        average_overall_score,
    }
}

use super::super::domain::{DeliveryRating, PerformanceGrade, RiskLevel, SupplierId};
use super::super::evaluation::EnrichedSupplierRecord;
use super::categories::{CategoryAggregate, CategoryGroup};
use super::summary::PortfolioSummary;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SupplierScoreView {
    pub supplier_id: SupplierId,
    pub name: String,
    pub category: String,
    pub total_orders: u32,
    pub total_value: f64,
    pub on_time_rate: f64,
    pub delivery_rating: DeliveryRating,
    pub delivery_rating_label: &'static str,
    pub quality_score: f64,
    pub avg_order_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_lead_time_days: Option<f64>,
    pub overall_score: f64,
    pub grade: PerformanceGrade,
    pub grade_label: &'static str,
    pub risk_level: RiskLevel,
    pub risk_level_label: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub risk_factors: Vec<&'static str>,
}

impl From<&EnrichedSupplierRecord> for SupplierScoreView {
    fn from(record: &EnrichedSupplierRecord) -> Self {
        Self {
            supplier_id: record.supplier_id().clone(),
            name: record.name().to_string(),
            category: record.category.clone(),
            total_orders: record.record.total_orders,
            total_value: record.record.total_value,
            on_time_rate: record.on_time_rate,
            delivery_rating: record.delivery_rating,
            delivery_rating_label: record.delivery_rating.label(),
            quality_score: record.quality_score,
            avg_order_value: record.avg_order_value,
            avg_lead_time_days: record.record.avg_lead_time_days,
            overall_score: record.overall_score,
            grade: record.grade,
            grade_label: record.grade.label(),
            risk_level: record.risk_level,
            risk_level_label: record.risk_level.label(),
            risk_factors: record.risk_factor_labels(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub category: String,
    #[serde(flatten)]
    pub aggregate: CategoryAggregate,
    pub supplier_ids: Vec<SupplierId>,
}

impl From<&CategoryGroup> for CategoryView {
    fn from(group: &CategoryGroup) -> Self {
        Self {
            category: group.category.clone(),
            aggregate: group.aggregate.clone(),
            supplier_ids: group
                .suppliers
                .iter()
                .map(|record| record.supplier_id().clone())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionEntry {
    pub label: &'static str,
    pub count: usize,
}

/// Serializable shape of a performance report for API and export consumers.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReportSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub summary: PortfolioSummary,
    pub suppliers: Vec<SupplierScoreView>,
    pub top_performers: Vec<SupplierScoreView>,
    pub underperformers: Vec<SupplierScoreView>,
    pub categories: Vec<CategoryView>,
    pub grade_distribution: Vec<DistributionEntry>,
    pub risk_distribution: Vec<DistributionEntry>,
}

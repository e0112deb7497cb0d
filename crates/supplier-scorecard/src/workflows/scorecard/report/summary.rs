use super::super::domain::{PerformanceGrade, RawSupplierRecord, ReportPeriod, RiskLevel};
use super::super::evaluation::{EnrichedSupplierRecord, EvaluationEngine};
use super::categories::{group_by_category, CategoryGroup};
use super::ranking::{rank_by_score, top_performers, underperformers};
use super::views::{
    CategoryView, DistributionEntry, PerformanceReportSummary, SupplierScoreView,
};
use serde::Serialize;
use std::collections::HashMap;

/// Portfolio-wide totals. Rates are computed from summed counters, never by
/// averaging per-supplier rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_suppliers: usize,
    pub total_orders: u64,
    pub total_value: f64,
    pub on_time_rate: f64,
    pub quality_score: f64,
    pub avg_order_value: f64,
}

impl PortfolioSummary {
    /// Result for a period without any supplier activity.
    pub fn empty() -> Self {
        Self {
            total_suppliers: 0,
            total_orders: 0,
            total_value: 0.0,
            on_time_rate: 0.0,
            quality_score: 100.0,
            avg_order_value: 0.0,
        }
    }

    pub fn from_records(records: &[EnrichedSupplierRecord]) -> Self {
        Self::from_raw(records.iter().map(|record| &record.record))
    }

    fn from_raw<'a>(records: impl Iterator<Item = &'a RawSupplierRecord>) -> Self {
        let mut summary = Self::empty();
        let mut on_time: u64 = 0;
        let mut issues: u64 = 0;

        for record in records {
            summary.total_suppliers += 1;
            summary.total_orders += u64::from(record.total_orders);
            summary.total_value += record.total_value;
            on_time += u64::from(record.on_time_deliveries);
            issues += u64::from(record.quality_issues);
        }

        if summary.total_orders > 0 {
            let orders = summary.total_orders as f64;
            summary.on_time_rate = on_time as f64 / orders * 100.0;
            summary.quality_score = (orders - issues as f64).max(0.0) / orders * 100.0;
            summary.avg_order_value = summary.total_value / orders;
        }

        summary
    }
}

/// Full result bundle handed to export and dashboard collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    pub period: ReportPeriod,
    pub suppliers: Vec<EnrichedSupplierRecord>,
    pub summary: PortfolioSummary,
    pub top_performers: Vec<EnrichedSupplierRecord>,
    pub underperformers: Vec<EnrichedSupplierRecord>,
    pub categories: Vec<CategoryGroup>,
}

impl PerformanceReport {
    /// Runs the evaluation pipeline over records that all have activity.
    pub fn build(
        period: ReportPeriod,
        records: &[RawSupplierRecord],
        engine: &EvaluationEngine,
    ) -> Self {
        if records.is_empty() {
            return Self::empty(period);
        }

        let mut suppliers = engine.evaluate_all(records);
        rank_by_score(&mut suppliers);

        let summary = PortfolioSummary::from_records(&suppliers);
        let top_performers = top_performers(&suppliers);
        let underperformers = underperformers(&suppliers);
        let categories = group_by_category(&suppliers);

        Self {
            period,
            suppliers,
            summary,
            top_performers,
            underperformers,
            categories,
        }
    }

    pub fn empty(period: ReportPeriod) -> Self {
        Self {
            period,
            suppliers: Vec::new(),
            summary: PortfolioSummary::empty(),
            top_performers: Vec::new(),
            underperformers: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn grade_distribution(&self) -> Vec<DistributionEntry> {
        let mut counts: HashMap<PerformanceGrade, usize> = HashMap::new();
        for supplier in &self.suppliers {
            *counts.entry(supplier.grade).or_default() += 1;
        }

        PerformanceGrade::ordered()
            .into_iter()
            .map(|grade| DistributionEntry {
                label: grade.label(),
                count: counts.get(&grade).copied().unwrap_or_default(),
            })
            .collect()
    }

    pub fn risk_distribution(&self) -> Vec<DistributionEntry> {
        let mut counts: HashMap<RiskLevel, usize> = HashMap::new();
        for supplier in &self.suppliers {
            *counts.entry(supplier.risk_level).or_default() += 1;
        }

        RiskLevel::ordered()
            .into_iter()
            .map(|level| DistributionEntry {
                label: level.label(),
                count: counts.get(&level).copied().unwrap_or_default(),
            })
            .collect()
    }

    pub fn summary_view(&self) -> PerformanceReportSummary {
        PerformanceReportSummary {
            start_date: self.period.start(),
            end_date: self.period.end(),
            summary: self.summary.clone(),
            suppliers: self.suppliers.iter().map(SupplierScoreView::from).collect(),
            top_performers: self
                .top_performers
                .iter()
                .map(SupplierScoreView::from)
                .collect(),
            underperformers: self
                .underperformers
                .iter()
                .map(SupplierScoreView::from)
                .collect(),
            categories: self.categories.iter().map(CategoryView::from).collect(),
            grade_distribution: self.grade_distribution(),
            risk_distribution: self.risk_distribution(),
        }
    }
}

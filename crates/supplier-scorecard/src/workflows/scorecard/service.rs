use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::comparison::SupplierComparison;
use super::domain::{InvalidPeriod, RawSupplierRecord, ReportPeriod, SupplierId};
use super::evaluation::{EvaluationConfig, EvaluationEngine};
use super::report::PerformanceReport;
use super::repository::{DataSourceError, SupplierDataSource};
use super::trend::{SupplierTrend, MIN_TREND_POINTS};

pub const DEFAULT_TREND_WINDOW_MONTHS: u32 = 12;

/// Service composing the data-retrieval collaborator with the evaluation rubric.
pub struct SupplierScorecardService<S> {
    source: Arc<S>,
    engine: Arc<EvaluationEngine>,
    trend_window_months: u32,
}

impl<S> SupplierScorecardService<S>
where
    S: SupplierDataSource + 'static,
{
    pub fn new(source: Arc<S>, config: EvaluationConfig) -> Self {
        Self {
            source,
            engine: Arc::new(EvaluationEngine::new(config)),
            trend_window_months: DEFAULT_TREND_WINDOW_MONTHS,
        }
    }

    /// Overrides the trailing window used for trend analysis.
    /// Windows shorter than the minimum number of trend points are raised to it.
    pub fn with_trend_window(mut self, months: u32) -> Self {
        self.trend_window_months = months.max(MIN_TREND_POINTS as u32);
        self
    }

    pub fn trend_window_months(&self) -> u32 {
        self.trend_window_months
    }

    pub fn engine(&self) -> &EvaluationEngine {
        &self.engine
    }

    /// Build the full performance report for an inclusive date range.
    pub fn performance_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PerformanceReport, ScorecardError> {
        let period = ReportPeriod::new(start, end)?;
        let records = self.active_records(&period)?;

        let report = PerformanceReport::build(period, &records, &self.engine);
        info!(
            %period,
            suppliers = report.summary.total_suppliers,
            top = report.top_performers.len(),
            under = report.underperformers.len(),
            "supplier performance report built"
        );
        Ok(report)
    }

    /// Compare an explicit set of suppliers over a date range.
    pub fn compare(
        &self,
        supplier_ids: &[SupplierId],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<SupplierComparison, ScorecardError> {
        let period = ReportPeriod::new(start, end)?;
        let candidates = self.active_records(&period)?;

        let comparison = SupplierComparison::build(supplier_ids, &candidates, &self.engine);
        info!(
            %period,
            requested = supplier_ids.len(),
            matched = comparison.suppliers.len(),
            "supplier comparison built"
        );
        Ok(comparison)
    }

    /// Classify a supplier's order-value trend over the trailing window ending at `as_of`.
    pub fn trend(
        &self,
        supplier_id: &SupplierId,
        as_of: NaiveDate,
    ) -> Result<SupplierTrend, ScorecardError> {
        let points = self
            .source
            .monthly_trend(supplier_id, self.trend_window_months, as_of)?;
        Ok(SupplierTrend::from_points(supplier_id.clone(), points))
    }

    fn active_records(
        &self,
        period: &ReportPeriod,
    ) -> Result<Vec<RawSupplierRecord>, ScorecardError> {
        let mut records = self.source.supplier_activity(period)?;
        records.retain(|record| {
            if record.has_activity() {
                true
            } else {
                warn!(
                    supplier_id = %record.supplier_id,
                    "dropping supplier without orders in period"
                );
                false
            }
        });
        Ok(records)
    }
}

/// Error raised by the scorecard service.
#[derive(Debug, thiserror::Error)]
pub enum ScorecardError {
    #[error(transparent)]
    InvalidPeriod(#[from] InvalidPeriod),
    #[error(transparent)]
    DataSource(#[from] DataSourceError),
}

//! Supplier performance scorecard.
//!
//! Raw per-supplier counters flow one way: rates and scores are derived per
//! record (in parallel), then ranked, summarised, and grouped as a whole.
//! Trend analysis and supplier comparison run on separately fetched inputs.

pub(crate) mod comparison;
pub mod domain;
pub mod evaluation;
pub mod ledger;
pub(crate) mod metrics;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;
pub(crate) mod trend;

#[cfg(test)]
mod tests;

pub use comparison::{ComparisonMetrics, SupplierComparison, SupplierComparisonView};
pub use domain::{
    DeliveryRating, InvalidPeriod, MonthlyTrendPoint, PerformanceGrade, RawSupplierRecord,
    ReportPeriod, RiskFactor, RiskLevel, SupplierId, TrendDirection, DEFAULT_CATEGORY,
};
pub use evaluation::{EnrichedSupplierRecord, EvaluationConfig, EvaluationEngine};
pub use ledger::LedgerSupplierSource;
pub use metrics::{delivery_rating, derive_rates, SupplierRates};
pub use report::{PerformanceReport, PortfolioSummary};
pub use repository::{DataSourceError, SupplierDataSource};
pub use router::scorecard_router;
pub use service::{ScorecardError, SupplierScorecardService, DEFAULT_TREND_WINDOW_MONTHS};
pub use trend::{classify as classify_trend, SupplierTrend};

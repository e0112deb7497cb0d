use chrono::NaiveDate;

use super::domain::{MonthlyTrendPoint, RawSupplierRecord, ReportPeriod, SupplierId};

/// Data-retrieval boundary so the scorecard service can be exercised in isolation.
pub trait SupplierDataSource: Send + Sync {
    /// One record per active supplier with at least one order in `period`.
    fn supplier_activity(
        &self,
        period: &ReportPeriod,
    ) -> Result<Vec<RawSupplierRecord>, DataSourceError>;

    /// Chronological monthly points for the `months` calendar months ending at `as_of`.
    fn monthly_trend(
        &self,
        supplier_id: &SupplierId,
        months: u32,
        as_of: NaiveDate,
    ) -> Result<Vec<MonthlyTrendPoint>, DataSourceError>;
}

/// Error enumeration for data-retrieval failures.
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("supplier data unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read supplier ledger: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid supplier ledger data: {0}")]
    Csv(#[from] csv::Error),
}

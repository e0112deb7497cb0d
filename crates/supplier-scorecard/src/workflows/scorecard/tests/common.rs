use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread::ThreadId;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::scorecard::domain::{
    MonthlyTrendPoint, RawSupplierRecord, ReportPeriod, SupplierId,
};
use crate::workflows::scorecard::repository::{DataSourceError, SupplierDataSource};
use crate::workflows::scorecard::{scorecard_router, EvaluationConfig, SupplierScorecardService};

pub(super) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub(super) fn reliable_supplier() -> RawSupplierRecord {
    RawSupplierRecord {
        supplier_id: SupplierId::from("SUP-100"),
        name: "Northwind Metals".to_string(),
        category: Some("Raw Materials".to_string()),
        total_orders: 100,
        total_value: 50_000.0,
        on_time_deliveries: 95,
        late_deliveries: 5,
        quality_issues: 2,
        avg_lead_time_days: Some(10.0),
    }
}

pub(super) fn struggling_supplier() -> RawSupplierRecord {
    RawSupplierRecord {
        supplier_id: SupplierId::from("SUP-200"),
        name: "Harbor Plastics".to_string(),
        category: None,
        total_orders: 40,
        total_value: 150_000.0,
        on_time_deliveries: 20,
        late_deliveries: 20,
        quality_issues: 3,
        avg_lead_time_days: Some(35.0),
    }
}

pub(super) fn idle_supplier() -> RawSupplierRecord {
    RawSupplierRecord {
        supplier_id: SupplierId::from("SUP-300"),
        name: "Quiet Fasteners".to_string(),
        category: Some("Hardware".to_string()),
        total_orders: 0,
        total_value: 0.0,
        on_time_deliveries: 0,
        late_deliveries: 0,
        quality_issues: 0,
        avg_lead_time_days: None,
    }
}

pub(super) fn trend_points(values: &[f64]) -> Vec<MonthlyTrendPoint> {
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| MonthlyTrendPoint {
            month: format!("2025-{:02}", idx + 1),
            order_count: 4,
            total_value: *value,
            avg_lead_time_days: Some(12.0),
        })
        .collect()
}

#[derive(Default)]
pub(super) struct MemorySource {
    records: Vec<RawSupplierRecord>,
    trends: HashMap<SupplierId, Vec<MonthlyTrendPoint>>,
    requested_periods: Mutex<Vec<ReportPeriod>>,
    requested_windows: Mutex<Vec<(u32, NaiveDate)>>,
}

impl MemorySource {
    pub(super) fn with_records(records: Vec<RawSupplierRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub(super) fn with_trend(mut self, supplier_id: &str, points: Vec<MonthlyTrendPoint>) -> Self {
        self.trends.insert(SupplierId::from(supplier_id), points);
        self
    }

    pub(super) fn requested_periods(&self) -> Vec<ReportPeriod> {
        self.requested_periods
            .lock()
            .expect("period mutex poisoned")
            .clone()
    }

    pub(super) fn requested_windows(&self) -> Vec<(u32, NaiveDate)> {
        self.requested_windows
            .lock()
            .expect("window mutex poisoned")
            .clone()
    }
}

impl SupplierDataSource for MemorySource {
    fn supplier_activity(
        &self,
        period: &ReportPeriod,
    ) -> Result<Vec<RawSupplierRecord>, DataSourceError> {
        self.requested_periods
            .lock()
            .expect("period mutex poisoned")
            .push(*period);
        Ok(self.records.clone())
    }

    fn monthly_trend(
        &self,
        supplier_id: &SupplierId,
        months: u32,
        as_of: NaiveDate,
    ) -> Result<Vec<MonthlyTrendPoint>, DataSourceError> {
        self.requested_windows
            .lock()
            .expect("window mutex poisoned")
            .push((months, as_of));
        Ok(self.trends.get(supplier_id).cloned().unwrap_or_default())
    }
}

pub(super) struct UnavailableSource;

impl SupplierDataSource for UnavailableSource {
    fn supplier_activity(
        &self,
        _period: &ReportPeriod,
    ) -> Result<Vec<RawSupplierRecord>, DataSourceError> {
        Err(DataSourceError::Unavailable("warehouse offline".to_string()))
    }

    fn monthly_trend(
        &self,
        _supplier_id: &SupplierId,
        _months: u32,
        _as_of: NaiveDate,
    ) -> Result<Vec<MonthlyTrendPoint>, DataSourceError> {
        Err(DataSourceError::Unavailable("warehouse offline".to_string()))
    }
}

pub(super) struct CorruptSource;

impl SupplierDataSource for CorruptSource {
    fn supplier_activity(
        &self,
        _period: &ReportPeriod,
    ) -> Result<Vec<RawSupplierRecord>, DataSourceError> {
        Err(DataSourceError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "truncated ledger",
        )))
    }

    fn monthly_trend(
        &self,
        _supplier_id: &SupplierId,
        _months: u32,
        _as_of: NaiveDate,
    ) -> Result<Vec<MonthlyTrendPoint>, DataSourceError> {
        Err(DataSourceError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "truncated ledger",
        )))
    }
}

pub(super) struct PanickingSource;

impl SupplierDataSource for PanickingSource {
    fn supplier_activity(
        &self,
        _period: &ReportPeriod,
    ) -> Result<Vec<RawSupplierRecord>, DataSourceError> {
        panic!("ledger index corrupted");
    }

    fn monthly_trend(
        &self,
        _supplier_id: &SupplierId,
        _months: u32,
        _as_of: NaiveDate,
    ) -> Result<Vec<MonthlyTrendPoint>, DataSourceError> {
        panic!("ledger index corrupted");
    }
}

/// Remembers which threads served each lookup.
#[derive(Default)]
pub(super) struct ThreadRecordingSource {
    threads: Mutex<Vec<ThreadId>>,
}

impl ThreadRecordingSource {
    pub(super) fn threads(&self) -> Vec<ThreadId> {
        self.threads.lock().expect("thread mutex poisoned").clone()
    }

    fn record_thread(&self) {
        self.threads
            .lock()
            .expect("thread mutex poisoned")
            .push(std::thread::current().id());
    }
}

impl SupplierDataSource for ThreadRecordingSource {
    fn supplier_activity(
        &self,
        _period: &ReportPeriod,
    ) -> Result<Vec<RawSupplierRecord>, DataSourceError> {
        self.record_thread();
        Ok(vec![reliable_supplier()])
    }

    fn monthly_trend(
        &self,
        _supplier_id: &SupplierId,
        _months: u32,
        _as_of: NaiveDate,
    ) -> Result<Vec<MonthlyTrendPoint>, DataSourceError> {
        self.record_thread();
        Ok(trend_points(&[100.0, 100.0, 100.0]))
    }
}

pub(super) fn portfolio_source() -> MemorySource {
    MemorySource::with_records(vec![
        struggling_supplier(),
        reliable_supplier(),
        idle_supplier(),
    ])
    .with_trend("SUP-100", trend_points(&[90.0, 100.0, 120.0, 150.0]))
}

pub(super) fn build_service() -> (SupplierScorecardService<MemorySource>, Arc<MemorySource>) {
    let source = Arc::new(portfolio_source());
    let service = SupplierScorecardService::new(source.clone(), EvaluationConfig::default());
    (service, source)
}

pub(super) fn router_with_service<S>(service: SupplierScorecardService<S>) -> axum::Router
where
    S: SupplierDataSource + 'static,
{
    scorecard_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

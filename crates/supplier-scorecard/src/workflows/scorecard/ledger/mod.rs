//! Order-ledger CSV collaborator.
//!
//! Aggregates purchase order lines into the per-supplier counters the
//! scorecard consumes, standing in for the transactional store.

mod parser;

use super::domain::{MonthlyTrendPoint, RawSupplierRecord, ReportPeriod, SupplierId};
use super::repository::{DataSourceError, SupplierDataSource};
use chrono::{Datelike, Months, NaiveDate};
use parser::LedgerEntry;
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct LedgerSupplierSource {
    entries: Vec<LedgerEntry>,
}

impl LedgerSupplierSource {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DataSourceError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let source = Self::from_reader(file)?;
        debug!(path = %path.display(), entries = source.len(), "loaded supplier ledger");
        Ok(source)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataSourceError> {
        let entries = parser::parse_entries(reader)?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inactive flag per supplier, taken from its most recent ledger line.
    fn inactive_suppliers(&self) -> HashMap<&SupplierId, bool> {
        let mut status = HashMap::new();
        for entry in &self.entries {
            status.insert(&entry.supplier_id, !entry.active);
        }
        status
    }
}

impl SupplierDataSource for LedgerSupplierSource {
    fn supplier_activity(
        &self,
        period: &ReportPeriod,
    ) -> Result<Vec<RawSupplierRecord>, DataSourceError> {
        let inactive = self.inactive_suppliers();
        let mut order: Vec<&SupplierId> = Vec::new();
        let mut totals: HashMap<&SupplierId, SupplierTotals> = HashMap::new();

        for entry in &self.entries {
            if !period.contains(entry.order_date) {
                continue;
            }
            if inactive.get(&entry.supplier_id).copied().unwrap_or(false) {
                continue;
            }

            totals
                .entry(&entry.supplier_id)
                .or_insert_with(|| {
                    order.push(&entry.supplier_id);
                    SupplierTotals::default()
                })
                .record(entry);
        }

        Ok(order
            .into_iter()
            .filter_map(|supplier_id| {
                totals
                    .remove(supplier_id)
                    .map(|totals| totals.into_record(supplier_id.clone()))
            })
            .collect())
    }

    fn monthly_trend(
        &self,
        supplier_id: &SupplierId,
        months: u32,
        as_of: NaiveDate,
    ) -> Result<Vec<MonthlyTrendPoint>, DataSourceError> {
        if months == 0 {
            return Ok(Vec::new());
        }

        let window_start = as_of
            .with_day(1)
            .and_then(|first| first.checked_sub_months(Months::new(months - 1)))
            .ok_or_else(|| {
                DataSourceError::Unavailable(format!(
                    "cannot compute a {months}-month window ending {as_of}"
                ))
            })?;

        let mut buckets: BTreeMap<String, MonthTotals> = BTreeMap::new();
        for entry in self
            .entries
            .iter()
            .filter(|entry| &entry.supplier_id == supplier_id)
            .filter(|entry| entry.order_date >= window_start && entry.order_date <= as_of)
        {
            buckets
                .entry(entry.order_date.format("%Y-%m").to_string())
                .or_default()
                .record(entry);
        }

        Ok(buckets
            .into_iter()
            .map(|(month, totals)| MonthlyTrendPoint {
                month,
                order_count: totals.orders,
                total_value: totals.value,
                avg_lead_time_days: totals.lead_time.average(),
            })
            .collect())
    }
}

#[derive(Debug, Default)]
struct LeadTimeAccumulator {
    total_days: i64,
    deliveries: u32,
}

impl LeadTimeAccumulator {
    fn record(&mut self, entry: &LedgerEntry) {
        if let Some(days) = entry.lead_time_days() {
            self.total_days += days;
            self.deliveries += 1;
        }
    }

    fn average(&self) -> Option<f64> {
        (self.deliveries > 0).then(|| self.total_days as f64 / f64::from(self.deliveries))
    }
}

#[derive(Debug, Default)]
struct SupplierTotals {
    name: String,
    category: Option<String>,
    orders: u32,
    value: f64,
    on_time: u32,
    late: u32,
    quality_issues: u32,
    lead_time: LeadTimeAccumulator,
}

impl SupplierTotals {
    fn record(&mut self, entry: &LedgerEntry) {
        self.name.clone_from(&entry.supplier_name);
        if entry.category.is_some() {
            self.category.clone_from(&entry.category);
        }

        self.orders += 1;
        self.value += entry.order_value;
        match entry.delivered_on_time() {
            Some(true) => self.on_time += 1,
            Some(false) => self.late += 1,
            None => {}
        }
        if entry.quality_issue {
            self.quality_issues += 1;
        }
        self.lead_time.record(entry);
    }

    fn into_record(self, supplier_id: SupplierId) -> RawSupplierRecord {
        RawSupplierRecord {
            supplier_id,
            name: self.name,
            category: self.category,
            total_orders: self.orders,
            total_value: self.value,
            on_time_deliveries: self.on_time,
            late_deliveries: self.late,
            quality_issues: self.quality_issues,
            avg_lead_time_days: self.lead_time.average(),
        }
    }
}

#[derive(Debug, Default)]
struct MonthTotals {
    orders: u32,
    value: f64,
    lead_time: LeadTimeAccumulator,
}

impl MonthTotals {
    fn record(&mut self, entry: &LedgerEntry) {
        self.orders += 1;
        self.value += entry.order_value;
        self.lead_time.record(entry);
    }
}

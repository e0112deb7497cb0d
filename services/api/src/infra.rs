use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fmt::Write as _;
use std::io::Cursor;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use supplier_scorecard::error::AppError;
use supplier_scorecard::workflows::scorecard::{DataSourceError, LedgerSupplierSource};

/// Months of synthetic history generated for the sample portfolio.
pub(crate) const SAMPLE_MONTHS: u32 = 6;

const LEDGER_HEADER: &str = "Supplier ID,Supplier Name,Category,Active,Order Date,Order Value,Promised On,Delivered On,Quality Issue\n";
const ORDER_DAYS: [u32; 2] = [4, 18];

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

struct SampleSupplier {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    active: bool,
    base_value: f64,
    monthly_growth: f64,
    promise_days: i64,
    lead_days: [i64; 4],
    issue_every: Option<usize>,
}

const SAMPLE_SUPPLIERS: [SampleSupplier; 5] = [
    SampleSupplier {
        id: "SUP-100",
        name: "Northwind Metals",
        category: "Raw Materials",
        active: true,
        base_value: 4_000.0,
        monthly_growth: 600.0,
        promise_days: 14,
        lead_days: [9, 8, 10, 9],
        issue_every: None,
    },
    SampleSupplier {
        id: "SUP-200",
        name: "Harbor Plastics",
        category: "",
        active: true,
        base_value: 12_000.0,
        monthly_growth: 0.0,
        promise_days: 21,
        lead_days: [35, 40, 20, 38],
        issue_every: Some(3),
    },
    SampleSupplier {
        id: "SUP-300",
        name: "Summit Logistics",
        category: "Logistics",
        active: true,
        base_value: 9_000.0,
        monthly_growth: -900.0,
        promise_days: 14,
        lead_days: [10, 12, 16, 11],
        issue_every: Some(8),
    },
    SampleSupplier {
        id: "SUP-400",
        name: "Keystone Packaging",
        category: "Packaging",
        active: true,
        base_value: 2_500.0,
        monthly_growth: 50.0,
        promise_days: 10,
        lead_days: [8, 9, 12, 7],
        issue_every: None,
    },
    SampleSupplier {
        id: "SUP-500",
        name: "Retired Tooling",
        category: "Tooling",
        active: false,
        base_value: 1_500.0,
        monthly_growth: 0.0,
        promise_days: 7,
        lead_days: [5, 6, 5, 6],
        issue_every: None,
    },
];

/// First day of the month `months_back` months before `anchor`'s month.
pub(crate) fn month_start(anchor: NaiveDate, months_back: u32) -> NaiveDate {
    anchor
        .with_day(1)
        .and_then(|first| first.checked_sub_months(Months::new(months_back)))
        .unwrap_or(anchor)
}

/// Default reporting window: the sample history through `today`.
pub(crate) fn default_period(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (month_start(today, SAMPLE_MONTHS), today)
}

/// Synthetic order ledger covering the `SAMPLE_MONTHS` full months before `anchor`.
pub(crate) fn sample_ledger_csv(anchor: NaiveDate) -> String {
    let mut csv = String::from(LEDGER_HEADER);

    for offset in 0..SAMPLE_MONTHS {
        let month = month_start(anchor, SAMPLE_MONTHS - offset);
        for supplier in &SAMPLE_SUPPLIERS {
            let value = supplier.base_value + supplier.monthly_growth * f64::from(offset);
            for (slot, day) in ORDER_DAYS.iter().enumerate() {
                let Some(ordered) = month.with_day(*day) else {
                    continue;
                };
                let index = offset as usize * ORDER_DAYS.len() + slot;
                let lead = supplier.lead_days[index % supplier.lead_days.len()];
                let issue = supplier
                    .issue_every
                    .is_some_and(|every| (index + 1) % every == 0);

                let _ = writeln!(
                    csv,
                    "{},{},{},{},{},{:.2},{},{},{}",
                    supplier.id,
                    supplier.name,
                    supplier.category,
                    if supplier.active { "yes" } else { "no" },
                    ordered,
                    value,
                    ordered + Duration::days(supplier.promise_days),
                    ordered + Duration::days(lead),
                    if issue { "yes" } else { "" },
                );
            }
        }
    }

    csv
}

pub(crate) fn sample_source(anchor: NaiveDate) -> Result<LedgerSupplierSource, DataSourceError> {
    LedgerSupplierSource::from_reader(Cursor::new(sample_ledger_csv(anchor)))
}

/// Ledger at `path` when given, otherwise the sample portfolio anchored at today.
pub(crate) fn load_source(path: Option<&Path>) -> Result<LedgerSupplierSource, AppError> {
    let source = match path {
        Some(path) => LedgerSupplierSource::from_path(path)?,
        None => sample_source(Local::now().date_naive())?,
    };
    Ok(source)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use supplier_scorecard::workflows::scorecard::{ReportPeriod, SupplierDataSource, SupplierId};

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid anchor")
    }

    #[test]
    fn sample_ledger_spans_six_full_months() {
        let source = sample_source(anchor()).expect("sample parses");
        assert_eq!(source.len(), 5 * 6 * 2);

        let (start, end) = default_period(anchor());
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid"));
        let period = ReportPeriod::new(start, end).expect("period");
        let records = source.supplier_activity(&period).expect("activity");

        let ids: Vec<_> = records.iter().map(|r| r.supplier_id.as_str()).collect();
        assert_eq!(ids, vec!["SUP-100", "SUP-200", "SUP-300", "SUP-400"]);
        assert!(records.iter().all(|record| record.total_orders == 12));
    }

    #[test]
    fn sample_trends_move_in_both_directions() {
        let source = sample_source(anchor()).expect("sample parses");
        let as_of = anchor();

        let growing = source
            .monthly_trend(&SupplierId::from("SUP-100"), 12, as_of)
            .expect("trend");
        assert_eq!(growing.len(), 6);
        assert_eq!(growing[0].month, "2025-01");
        assert_eq!(growing[5].total_value, 14_000.0);

        let shrinking = source
            .monthly_trend(&SupplierId::from("SUP-300"), 12, as_of)
            .expect("trend");
        assert_eq!(shrinking[5].total_value, 9_000.0);
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert_eq!(
            parse_date(" 2025-02-01 "),
            Ok(NaiveDate::from_ymd_opt(2025, 2, 1).expect("valid"))
        );
        assert!(parse_date("02/01/2025").is_err());
    }
}

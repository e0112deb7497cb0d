use super::super::domain::SupplierId;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One purchase order line from the ledger export.
#[derive(Debug, Clone)]
pub(crate) struct LedgerEntry {
    pub(crate) supplier_id: SupplierId,
    pub(crate) supplier_name: String,
    pub(crate) category: Option<String>,
    pub(crate) active: bool,
    pub(crate) order_date: NaiveDate,
    pub(crate) order_value: f64,
    pub(crate) promised_on: Option<NaiveDate>,
    pub(crate) delivered_on: Option<NaiveDate>,
    pub(crate) quality_issue: bool,
}

impl LedgerEntry {
    pub(crate) fn delivered_on_time(&self) -> Option<bool> {
        let delivered = self.delivered_on?;
        Some(match self.promised_on {
            Some(promised) => delivered <= promised,
            None => true,
        })
    }

    pub(crate) fn lead_time_days(&self) -> Option<i64> {
        self.delivered_on
            .map(|delivered| (delivered - self.order_date).num_days())
    }
}

pub(crate) fn parse_entries<R: Read>(reader: R) -> Result<Vec<LedgerEntry>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<ValidatedRow>()
        .map(|row| row.map(|ValidatedRow(entry)| entry))
        .collect()
}

/// Row that passed the ledger invariants, surfaced as a deserialize error otherwise.
#[derive(Debug, Deserialize)]
#[serde(try_from = "LedgerRow")]
struct ValidatedRow(LedgerEntry);

impl TryFrom<LedgerRow> for ValidatedRow {
    type Error = String;

    fn try_from(row: LedgerRow) -> Result<Self, Self::Error> {
        if !row.order_value.is_finite() || row.order_value < 0.0 {
            return Err(format!(
                "order value for supplier '{}' must be a finite non-negative amount, got {}",
                row.supplier_id, row.order_value
            ));
        }
        if let Some(delivered) = row.delivered_on.filter(|delivered| *delivered < row.order_date) {
            return Err(format!(
                "supplier '{}' delivery on {} precedes order date {}",
                row.supplier_id, delivered, row.order_date
            ));
        }

        Ok(Self(LedgerEntry {
            supplier_id: SupplierId::new(row.supplier_id),
            supplier_name: collapse_whitespace(&row.supplier_name),
            category: row.category.map(|category| collapse_whitespace(&category)),
            active: row.active.unwrap_or(true),
            order_date: row.order_date,
            order_value: row.order_value,
            promised_on: row.promised_on,
            delivered_on: row.delivered_on,
            quality_issue: row.quality_issue.unwrap_or(false),
        }))
    }
}

#[derive(Debug, Deserialize)]
struct LedgerRow {
    #[serde(rename = "Supplier ID")]
    supplier_id: String,
    #[serde(rename = "Supplier Name")]
    supplier_name: String,
    #[serde(
        rename = "Category",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    category: Option<String>,
    #[serde(rename = "Active", default, deserialize_with = "flag")]
    active: Option<bool>,
    #[serde(rename = "Order Date")]
    order_date: NaiveDate,
    #[serde(rename = "Order Value")]
    order_value: f64,
    #[serde(rename = "Promised On", default)]
    promised_on: Option<NaiveDate>,
    #[serde(rename = "Delivered On", default)]
    delivered_on: Option<NaiveDate>,
    #[serde(rename = "Quality Issue", default, deserialize_with = "flag")]
    quality_issue: Option<bool>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = empty_string_as_none(deserializer)?;
    opt.map(|value| match value.trim().to_ascii_lowercase().as_str() {
        "1" | "y" | "yes" | "true" => Ok(true),
        "0" | "n" | "no" | "false" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected yes/no flag, got '{other}'"
        ))),
    })
    .transpose()
}

fn collapse_whitespace(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for every record that arrives without a category.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Opaque supplier key as issued by the transactional store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(pub String);

impl SupplierId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SupplierId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Per-supplier activity counters for one reporting period.
///
/// Collaborators only hand over suppliers with at least one order in the
/// period; zero-order records are dropped before evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSupplierRecord {
    pub supplier_id: SupplierId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub total_orders: u32,
    pub total_value: f64,
    pub on_time_deliveries: u32,
    pub late_deliveries: u32,
    pub quality_issues: u32,
    #[serde(default)]
    pub avg_lead_time_days: Option<f64>,
}

impl RawSupplierRecord {
    pub fn has_activity(&self) -> bool {
        self.total_orders > 0
    }

    /// Category with blanks and absences folded into [`DEFAULT_CATEGORY`].
    pub fn category_label(&self) -> &str {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryRating {
    Excellent,
    Good,
    Acceptable,
    Poor,
}

impl DeliveryRating {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Acceptable => "Acceptable",
            Self::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceGrade {
    A,
    B,
    C,
    D,
    F,
}

impl PerformanceGrade {
    pub const fn ordered() -> [Self; 5] {
        [Self::A, Self::B, Self::C, Self::D, Self::F]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Named signal contributing points to a supplier's risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    PoorOnTimeDelivery,
    HighQualityIssues,
    ExcessiveLeadTimes,
    HighFinancialDependency,
}

impl RiskFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PoorOnTimeDelivery => "Poor on-time delivery",
            Self::HighQualityIssues => "High quality issues",
            Self::ExcessiveLeadTimes => "Excessive lead times",
            Self::HighFinancialDependency => "High financial dependency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl TrendDirection {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }
}

/// Activity for one supplier in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    /// Month key formatted as `YYYY-MM`.
    pub month: String,
    pub order_count: u32,
    pub total_value: f64,
    #[serde(default)]
    pub avg_lead_time_days: Option<f64>,
}

/// Raised when a report period starts after it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("start date {start} is after end date {end}")]
pub struct InvalidPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Inclusive date range a report covers. Construction rejects inverted ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidPeriod> {
        if start > end {
            return Err(InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn period_rejects_start_after_end() {
        let err = ReportPeriod::new(date(2025, 3, 1), date(2025, 2, 1)).unwrap_err();

        assert_eq!(err.start, date(2025, 3, 1));
        assert_eq!(
            err.to_string(),
            "start date 2025-03-01 is after end date 2025-02-01"
        );
    }

    #[test]
    fn single_day_period_is_inclusive() {
        let period = ReportPeriod::new(date(2025, 3, 1), date(2025, 3, 1)).expect("valid");

        assert!(period.contains(date(2025, 3, 1)));
        assert!(!period.contains(date(2025, 3, 2)));
    }

    #[test]
    fn category_label_defaults_blank_values() {
        let mut record = RawSupplierRecord {
            supplier_id: SupplierId::from("S-1"),
            name: "Acme".to_string(),
            category: Some("  Packaging ".to_string()),
            total_orders: 1,
            total_value: 10.0,
            on_time_deliveries: 1,
            late_deliveries: 0,
            quality_issues: 0,
            avg_lead_time_days: None,
        };
        assert_eq!(record.category_label(), "Packaging");

        record.category = Some(String::new());
        assert_eq!(record.category_label(), DEFAULT_CATEGORY);

        record.category = None;
        assert_eq!(record.category_label(), DEFAULT_CATEGORY);
    }
}

use super::domain::{DeliveryRating, RawSupplierRecord};

pub const EXCELLENT_DELIVERY_RATE: f64 = 95.0;
pub const GOOD_DELIVERY_RATE: f64 = 85.0;
pub const ACCEPTABLE_DELIVERY_RATE: f64 = 70.0;

/// Rates derived from a single supplier's raw counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupplierRates {
    pub on_time_rate: f64,
    pub quality_score: f64,
    pub avg_order_value: f64,
    pub late_rate: f64,
    pub quality_issue_rate: f64,
}

/// Derives percentages from a record with `total_orders > 0`.
pub fn derive_rates(record: &RawSupplierRecord) -> SupplierRates {
    let orders = f64::from(record.total_orders);
    let issues = f64::from(record.quality_issues);

    SupplierRates {
        on_time_rate: f64::from(record.on_time_deliveries) / orders * 100.0,
        quality_score: (orders - issues).max(0.0) / orders * 100.0,
        avg_order_value: record.total_value / orders,
        late_rate: f64::from(record.late_deliveries) / orders * 100.0,
        quality_issue_rate: issues / orders * 100.0,
    }
}

pub fn delivery_rating(on_time_rate: f64) -> DeliveryRating {
    if on_time_rate >= EXCELLENT_DELIVERY_RATE {
        DeliveryRating::Excellent
    } else if on_time_rate >= GOOD_DELIVERY_RATE {
        DeliveryRating::Good
    } else if on_time_rate >= ACCEPTABLE_DELIVERY_RATE {
        DeliveryRating::Acceptable
    } else {
        DeliveryRating::Poor
    }
}

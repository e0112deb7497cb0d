use super::domain::{MonthlyTrendPoint, SupplierId, TrendDirection};
use serde::Serialize;

pub const MIN_TREND_POINTS: usize = 3;
pub const IMPROVING_RATIO: f64 = 1.1;
pub const DECLINING_RATIO: f64 = 0.9;

/// Direction of a supplier's order value over its recent months.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierTrend {
    pub supplier_id: SupplierId,
    pub direction: TrendDirection,
    pub direction_label: &'static str,
    /// Percent change from the baseline month to the latest month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_change_pct: Option<f64>,
    pub points: Vec<MonthlyTrendPoint>,
}

impl SupplierTrend {
    pub fn from_points(supplier_id: SupplierId, points: Vec<MonthlyTrendPoint>) -> Self {
        let direction = classify(&points);
        let value_change_pct = window(&points).and_then(|(baseline, latest)| {
            (baseline != 0.0).then(|| (latest - baseline) / baseline * 100.0)
        });

        Self {
            supplier_id,
            direction,
            direction_label: direction.label(),
            value_change_pct,
            points,
        }
    }
}

/// Classifies chronologically ordered points.
///
/// Only the last three months matter: the latest total value is compared with
/// the value two months earlier. The month in between is not weighed.
pub fn classify(points: &[MonthlyTrendPoint]) -> TrendDirection {
    match window(points) {
        Some((baseline, latest)) if latest > baseline * IMPROVING_RATIO => {
            TrendDirection::Improving
        }
        Some((baseline, latest)) if latest < baseline * DECLINING_RATIO => {
            TrendDirection::Declining
        }
        _ => TrendDirection::Stable,
    }
}

fn window(points: &[MonthlyTrendPoint]) -> Option<(f64, f64)> {
    if points.len() < MIN_TREND_POINTS {
        return None;
    }

    let recent = &points[points.len() - MIN_TREND_POINTS..];
    Some((recent[0].total_value, recent[MIN_TREND_POINTS - 1].total_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<MonthlyTrendPoint> {
        values
            .iter()
            .enumerate()
            .map(|(idx, value)| MonthlyTrendPoint {
                month: format!("2025-{:02}", idx + 1),
                order_count: 4,
                total_value: *value,
                avg_lead_time_days: Some(9.0),
            })
            .collect()
    }

    #[test]
    fn fewer_than_three_points_is_stable() {
        assert_eq!(classify(&[]), TrendDirection::Stable);
        assert_eq!(classify(&series(&[100.0])), TrendDirection::Stable);
        assert_eq!(classify(&series(&[100.0, 900.0])), TrendDirection::Stable);
    }

    #[test]
    fn compares_latest_month_with_third_from_last() {
        assert_eq!(
            classify(&series(&[5.0, 100.0, 0.0, 105.0])),
            TrendDirection::Stable,
            "only the last three points are considered"
        );
        assert_eq!(
            classify(&series(&[100.0, 0.0, 111.0])),
            TrendDirection::Improving
        );
        assert_eq!(
            classify(&series(&[100.0, 500.0, 89.0])),
            TrendDirection::Declining
        );
    }

    #[test]
    fn ten_percent_band_is_stable() {
        assert_eq!(
            classify(&series(&[100.0, 1.0, 110.0])),
            TrendDirection::Stable
        );
        assert_eq!(
            classify(&series(&[100.0, 1.0, 90.0])),
            TrendDirection::Stable
        );
    }

    #[test]
    fn trend_reports_value_change() {
        let trend = SupplierTrend::from_points(
            SupplierId::from("SUP-7"),
            series(&[200.0, 180.0, 250.0]),
        );

        assert_eq!(trend.direction, TrendDirection::Improving);
        assert_eq!(trend.direction_label, "improving");
        assert_eq!(trend.value_change_pct, Some(25.0));
        assert_eq!(trend.points.len(), 3);
    }

    #[test]
    fn zero_baseline_has_no_change_percentage() {
        let trend =
            SupplierTrend::from_points(SupplierId::from("SUP-8"), series(&[0.0, 10.0, 40.0]));

        assert_eq!(trend.direction, TrendDirection::Improving);
        assert_eq!(trend.value_change_pct, None);
    }
}

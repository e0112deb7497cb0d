use serde::{Deserialize, Serialize};

pub const ON_TIME_WEIGHT: f64 = 0.5;
pub const QUALITY_WEIGHT: f64 = 0.3;
pub const LEAD_TIME_WEIGHT: f64 = 0.2;

/// Assumed lead time when a supplier has no recorded deliveries.
pub const DEFAULT_LEAD_TIME_DAYS: f64 = 14.0;
/// Lead time that still earns the full lead-time score.
pub const LEAD_TIME_BASELINE_DAYS: f64 = 7.0;
/// Days past the baseline over which the lead-time score falls to zero.
pub const LEAD_TIME_SPAN_DAYS: f64 = 23.0;

pub const LATE_RATE_RISK_THRESHOLD: f64 = 30.0;
pub const QUALITY_ISSUE_RISK_THRESHOLD: f64 = 5.0;
pub const LEAD_TIME_RISK_THRESHOLD_DAYS: f64 = 30.0;
pub const SPEND_RISK_THRESHOLD: f64 = 100_000.0;

pub const LATE_DELIVERY_RISK_POINTS: u8 = 3;
pub const QUALITY_RISK_POINTS: u8 = 3;
pub const LEAD_TIME_RISK_POINTS: u8 = 2;
pub const SPEND_RISK_POINTS: u8 = 1;

pub const HIGH_RISK_SCORE: u8 = 5;
pub const MEDIUM_RISK_SCORE: u8 = 3;

/// Lowest composite score earning each letter grade; anything below D is F.
pub const GRADE_A_MIN_SCORE: f64 = 90.0;
pub const GRADE_B_MIN_SCORE: f64 = 80.0;
pub const GRADE_C_MIN_SCORE: f64 = 70.0;
pub const GRADE_D_MIN_SCORE: f64 = 60.0;

/// Weights and anchors of the composite performance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub on_time_weight: f64,
    pub quality_weight: f64,
    pub lead_time_weight: f64,
    pub default_lead_time_days: f64,
    pub lead_time_baseline_days: f64,
    pub lead_time_span_days: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            on_time_weight: ON_TIME_WEIGHT,
            quality_weight: QUALITY_WEIGHT,
            lead_time_weight: LEAD_TIME_WEIGHT,
            default_lead_time_days: DEFAULT_LEAD_TIME_DAYS,
            lead_time_baseline_days: LEAD_TIME_BASELINE_DAYS,
            lead_time_span_days: LEAD_TIME_SPAN_DAYS,
        }
    }
}

/// Thresholds and points of the additive risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPolicy {
    pub late_rate_threshold: f64,
    pub quality_issue_rate_threshold: f64,
    pub lead_time_threshold_days: f64,
    pub spend_threshold: f64,
    pub late_delivery_points: u8,
    pub quality_points: u8,
    pub lead_time_points: u8,
    pub spend_points: u8,
    pub high_risk_score: u8,
    pub medium_risk_score: u8,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            late_rate_threshold: LATE_RATE_RISK_THRESHOLD,
            quality_issue_rate_threshold: QUALITY_ISSUE_RISK_THRESHOLD,
            lead_time_threshold_days: LEAD_TIME_RISK_THRESHOLD_DAYS,
            spend_threshold: SPEND_RISK_THRESHOLD,
            late_delivery_points: LATE_DELIVERY_RISK_POINTS,
            quality_points: QUALITY_RISK_POINTS,
            lead_time_points: LEAD_TIME_RISK_POINTS,
            spend_points: SPEND_RISK_POINTS,
            high_risk_score: HIGH_RISK_SCORE,
            medium_risk_score: MEDIUM_RISK_SCORE,
        }
    }
}

/// Complete rubric handed to the evaluation engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub scoring: ScoringPolicy,
    pub risk: RiskPolicy,
}

use super::super::domain::PerformanceGrade;
use super::config::{
    ScoringPolicy, GRADE_A_MIN_SCORE, GRADE_B_MIN_SCORE, GRADE_C_MIN_SCORE, GRADE_D_MIN_SCORE,
};

/// Lead-time component of the composite score.
///
/// Floors at zero but has no upper clamp: lead times shorter than the
/// baseline score above 100.
pub(crate) fn lead_time_score(avg_lead_time_days: f64, policy: &ScoringPolicy) -> f64 {
    let excess = avg_lead_time_days - policy.lead_time_baseline_days;
    (100.0 - excess / policy.lead_time_span_days * 100.0).max(0.0)
}

pub(crate) fn overall_score(
    on_time_rate: f64,
    quality_score: f64,
    lead_time_score: f64,
    policy: &ScoringPolicy,
) -> f64 {
    round_to_cents(
        on_time_rate * policy.on_time_weight
            + quality_score * policy.quality_weight
            + lead_time_score * policy.lead_time_weight,
    )
}

pub fn grade_for(score: f64) -> PerformanceGrade {
    if score >= GRADE_A_MIN_SCORE {
        PerformanceGrade::A
    } else if score >= GRADE_B_MIN_SCORE {
        PerformanceGrade::B
    } else if score >= GRADE_C_MIN_SCORE {
        PerformanceGrade::C
    } else if score >= GRADE_D_MIN_SCORE {
        PerformanceGrade::D
    } else {
        PerformanceGrade::F
    }
}

pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

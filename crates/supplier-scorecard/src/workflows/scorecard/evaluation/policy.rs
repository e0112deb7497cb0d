use super::super::domain::{RawSupplierRecord, RiskFactor, RiskLevel};
use super::super::metrics::SupplierRates;
use super::config::RiskPolicy;
use serde::{Deserialize, Serialize};

/// Outcome of the additive risk point system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub factors: Vec<RiskFactor>,
}

impl RiskAssessment {
    pub fn factor_labels(&self) -> Vec<&'static str> {
        self.factors.iter().map(|factor| factor.label()).collect()
    }
}

pub(crate) fn assess_risk(
    record: &RawSupplierRecord,
    rates: &SupplierRates,
    policy: &RiskPolicy,
) -> RiskAssessment {
    let mut score: u8 = 0;
    let mut factors = Vec::new();

    if rates.late_rate >= policy.late_rate_threshold {
        score = score.saturating_add(policy.late_delivery_points);
        factors.push(RiskFactor::PoorOnTimeDelivery);
    }

    if rates.quality_issue_rate >= policy.quality_issue_rate_threshold {
        score = score.saturating_add(policy.quality_points);
        factors.push(RiskFactor::HighQualityIssues);
    }

    // Missing lead time never counts against a supplier.
    if record
        .avg_lead_time_days
        .is_some_and(|days| days > policy.lead_time_threshold_days)
    {
        score = score.saturating_add(policy.lead_time_points);
        factors.push(RiskFactor::ExcessiveLeadTimes);
    }

    if record.total_value > policy.spend_threshold {
        score = score.saturating_add(policy.spend_points);
        factors.push(RiskFactor::HighFinancialDependency);
    }

    RiskAssessment {
        score,
        level: risk_level_for(score, policy),
        factors,
    }
}

pub(crate) fn risk_level_for(score: u8, policy: &RiskPolicy) -> RiskLevel {
    if score >= policy.high_risk_score {
        RiskLevel::High
    } else if score >= policy.medium_risk_score {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

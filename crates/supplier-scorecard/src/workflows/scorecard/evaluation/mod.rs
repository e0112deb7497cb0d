mod config;
mod policy;
mod rules;

pub use config::{
    EvaluationConfig, RiskPolicy, ScoringPolicy, DEFAULT_LEAD_TIME_DAYS, GRADE_A_MIN_SCORE,
    GRADE_B_MIN_SCORE, GRADE_C_MIN_SCORE, GRADE_D_MIN_SCORE, HIGH_RISK_SCORE,
    LATE_DELIVERY_RISK_POINTS, LATE_RATE_RISK_THRESHOLD, LEAD_TIME_BASELINE_DAYS,
    LEAD_TIME_RISK_POINTS, LEAD_TIME_RISK_THRESHOLD_DAYS, LEAD_TIME_SPAN_DAYS, LEAD_TIME_WEIGHT,
    MEDIUM_RISK_SCORE, ON_TIME_WEIGHT, QUALITY_ISSUE_RISK_THRESHOLD, QUALITY_RISK_POINTS,
    QUALITY_WEIGHT, SPEND_RISK_POINTS, SPEND_RISK_THRESHOLD,
};
pub use policy::RiskAssessment;
pub use rules::grade_for;

use super::domain::{
    DeliveryRating, PerformanceGrade, RawSupplierRecord, RiskFactor, RiskLevel, SupplierId,
};
use super::metrics::{delivery_rating, derive_rates};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Stateless evaluator that applies the scoring and risk rubric to raw records.
#[derive(Debug, Clone, Default)]
pub struct EvaluationEngine {
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Evaluates one record. Callers guarantee `total_orders > 0`.
    pub fn evaluate(&self, record: &RawSupplierRecord) -> EnrichedSupplierRecord {
        let scoring = &self.config.scoring;
        let rates = derive_rates(record);

        let lead_time = record
            .avg_lead_time_days
            .unwrap_or(scoring.default_lead_time_days);
        let lead_time_score = rules::lead_time_score(lead_time, scoring);
        let overall_score = rules::overall_score(
            rates.on_time_rate,
            rates.quality_score,
            lead_time_score,
            scoring,
        );

        let risk = policy::assess_risk(record, &rates, &self.config.risk);

        EnrichedSupplierRecord {
            category: record.category_label().to_string(),
            record: record.clone(),
            on_time_rate: rates.on_time_rate,
            delivery_rating: delivery_rating(rates.on_time_rate),
            quality_score: rates.quality_score,
            avg_order_value: rates.avg_order_value,
            lead_time_score,
            overall_score,
            grade: grade_for(overall_score),
            risk_score: risk.score,
            risk_level: risk.level,
            risk_factors: risk.factors,
        }
    }

    /// Evaluates every record on the rayon pool; output order matches input order.
    pub fn evaluate_all(&self, records: &[RawSupplierRecord]) -> Vec<EnrichedSupplierRecord> {
        records
            .par_iter()
            .map(|record| self.evaluate(record))
            .collect()
    }

    pub fn assess_risk(&self, record: &RawSupplierRecord) -> RiskAssessment {
        let rates = derive_rates(record);
        policy::assess_risk(record, &rates, &self.config.risk)
    }
}

/// Raw supplier counters plus every figure derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedSupplierRecord {
    pub record: RawSupplierRecord,
    pub category: String,
    pub on_time_rate: f64,
    pub delivery_rating: DeliveryRating,
    pub quality_score: f64,
    pub avg_order_value: f64,
    pub lead_time_score: f64,
    pub overall_score: f64,
    pub grade: PerformanceGrade,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<RiskFactor>,
}

impl EnrichedSupplierRecord {
    pub fn supplier_id(&self) -> &SupplierId {
        &self.record.supplier_id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn risk_factor_labels(&self) -> Vec<&'static str> {
        self.risk_factors.iter().map(|factor| factor.label()).collect()
    }
}

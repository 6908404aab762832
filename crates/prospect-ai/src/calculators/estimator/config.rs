use serde::{Deserialize, Serialize};

/// Tunable caps and shares behind the estimation formulas.
///
/// The shares are marketing heuristics, not a fitted model; defaults match the
/// published calculator behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Hard ceiling on the implied waste rate.
    pub waste_rate_cap: f64,
    /// Waste-rate increment per selected problem tag.
    pub problem_rate_increment: f64,
    /// Hard ceiling on the missed-opportunity rate.
    pub opportunity_rate_cap: f64,
    /// Applied to the opportunity rate when any urgent need is selected.
    pub urgency_multiplier: f64,
    pub conservative_factor: f64,
    pub optimistic_factor: f64,
    /// Share of monthly waste assumed recoverable as savings.
    pub savings_recovery_share: f64,
    /// Share of the missed opportunity assumed convertible in year one.
    pub new_business_share: f64,
    /// Assumed engagement investment as a share of annual revenue.
    pub investment_rate: f64,
    pub payback_floor_months: f64,
    pub payback_ceiling_months: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            waste_rate_cap: 0.08,
            problem_rate_increment: 0.01,
            opportunity_rate_cap: 0.05,
            urgency_multiplier: 1.1,
            conservative_factor: 0.8,
            optimistic_factor: 1.2,
            savings_recovery_share: 0.6,
            new_business_share: 0.4,
            investment_rate: 0.05,
            payback_floor_months: 3.0,
            payback_ceiling_months: 24.0,
        }
    }
}

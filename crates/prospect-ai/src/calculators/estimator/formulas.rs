use super::config::EstimatorConfig;
use super::super::coefficients;
use super::super::domain::BusinessProfile;

/// Intermediate figures shared by several formulas.
pub(crate) struct EstimateSignals {
    pub annual_revenue: f64,
    pub waste_rate: f64,
    pub urgency_multiplier: f64,
}

pub(crate) fn signals(profile: &BusinessProfile, config: &EstimatorConfig) -> EstimateSignals {
    let industry = coefficients::industry(&profile.industry);
    let annual_revenue = coefficients::annual_revenue_usd(profile.revenue_bracket);

    let waste_rate = (industry.waste_rate
        + config.problem_rate_increment * profile.main_problems.len() as f64)
        .min(config.waste_rate_cap);

    let urgency_multiplier = if profile.has_urgent_need() {
        config.urgency_multiplier
    } else {
        1.0
    };

    EstimateSignals {
        annual_revenue,
        waste_rate,
        urgency_multiplier,
    }
}

/// Monthly waste: pro-rated annual revenue times the capped waste rate.
pub(crate) fn monthly_waste(signals: &EstimateSignals) -> f64 {
    (signals.annual_revenue / 12.0) * signals.waste_rate
}

/// Opportunity left on the table, capped at the configured share of revenue.
pub(crate) fn missed_opportunity(
    profile: &BusinessProfile,
    signals: &EstimateSignals,
    config: &EstimatorConfig,
) -> f64 {
    let industry = coefficients::industry(&profile.industry);
    let rate =
        (industry.opportunity_rate * signals.urgency_multiplier).min(config.opportunity_rate_cap);
    signals.annual_revenue * rate
}

/// Conservative/optimistic revenue boost band for the declared growth goal.
pub(crate) fn revenue_boost(
    profile: &BusinessProfile,
    signals: &EstimateSignals,
    config: &EstimatorConfig,
) -> (f64, f64) {
    let gain = coefficients::efficiency_gain(profile.growth_goal);
    let midpoint = signals.annual_revenue * gain;
    (
        midpoint * config.conservative_factor,
        midpoint * config.optimistic_factor,
    )
}

/// Months until the assumed engagement investment is recovered, clamped.
pub(crate) fn payback_months(
    signals: &EstimateSignals,
    boost_min: f64,
    boost_max: f64,
    monthly_savings: f64,
    new_business_value: f64,
    config: &EstimatorConfig,
) -> f64 {
    let total_benefit = (boost_min + boost_max) / 2.0 + 12.0 * monthly_savings + new_business_value;
    let investment = signals.annual_revenue * config.investment_rate;

    if total_benefit <= 0.0 {
        return config.payback_ceiling_months;
    }

    (investment / (total_benefit / 12.0))
        .clamp(config.payback_floor_months, config.payback_ceiling_months)
}

/// Confidence in the projection, 0-100, from declared data posture.
pub(crate) fn confidence_score(profile: &BusinessProfile) -> u8 {
    use crate::calculators::domain::{DataMaturity, DecisionSpeed, RevenueBracket};

    let mut score: f64 = 50.0;

    score += match profile.data_maturity {
        DataMaturity::Spreadsheets => 5.0,
        DataMaturity::BasicDashboards => 10.0,
        DataMaturity::Integrated => 18.0,
        DataMaturity::Advanced => 25.0,
    };

    score += match profile.decision_speed {
        DecisionSpeed::Fast => 10.0,
        DecisionSpeed::Moderate => 6.0,
        DecisionSpeed::Deliberate => 3.0,
    };

    score += (profile.main_problems.len() as f64 * 4.0).min(12.0);

    score += match profile.revenue_bracket {
        RevenueBracket::Launching => 0.0,
        RevenueBracket::Steady => 3.0,
        RevenueBracket::Growing => 6.0,
        RevenueBracket::Scaling => 8.0,
        RevenueBracket::Established => 10.0,
    };

    score.clamp(0.0, 100.0).round() as u8
}

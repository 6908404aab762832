mod config;
mod formulas;

pub use config::EstimatorConfig;

use super::domain::{
    BusinessProfile, EstimateComponent, EstimateMetric, FinancialEstimate, PaybackEstimate,
};
use super::coefficients;

/// Stateless engine turning a profile into a `FinancialEstimate`.
///
/// Pure and total: identical profiles produce bit-identical estimates, and
/// unknown coefficient keys resolve to baseline rows instead of failing.
pub struct EstimationEngine {
    config: EstimatorConfig,
}

impl EstimationEngine {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn estimate(&self, profile: &BusinessProfile) -> FinancialEstimate {
        let config = &self.config;
        let signals = formulas::signals(profile, config);
        let industry = coefficients::industry(&profile.industry);

        let monthly_waste = formulas::monthly_waste(&signals);
        let yearly_waste = monthly_waste * 12.0;
        let missed_opportunity = formulas::missed_opportunity(profile, &signals, config);
        let total_yearly_loss = yearly_waste + missed_opportunity;
        let (revenue_boost_min, revenue_boost_max) =
            formulas::revenue_boost(profile, &signals, config);
        let monthly_savings = monthly_waste * config.savings_recovery_share;
        let new_business_value = missed_opportunity * config.new_business_share;
        let payback_months = formulas::payback_months(
            &signals,
            revenue_boost_min,
            revenue_boost_max,
            monthly_savings,
            new_business_value,
            config,
        );
        let confidence = formulas::confidence_score(profile);

        let breakdown = vec![
            EstimateComponent {
                metric: EstimateMetric::MonthlyWaste,
                amount: monthly_waste,
                notes: format!(
                    "{} waste rate {:.3} over {} problem(s), capped at {:.2}",
                    industry.label,
                    signals.waste_rate,
                    profile.main_problems.len(),
                    config.waste_rate_cap
                ),
            },
            EstimateComponent {
                metric: EstimateMetric::MissedOpportunity,
                amount: missed_opportunity,
                notes: format!(
                    "opportunity rate capped at {:.2}, urgency x{:.1}",
                    config.opportunity_rate_cap, signals.urgency_multiplier
                ),
            },
            EstimateComponent {
                metric: EstimateMetric::RevenueBoost,
                amount: (revenue_boost_min + revenue_boost_max) / 2.0,
                notes: format!(
                    "{} gain band {:.0}%-{:.0}% of the {:.0}% efficiency midpoint",
                    profile.growth_goal.label(),
                    config.conservative_factor * 100.0,
                    config.optimistic_factor * 100.0,
                    coefficients::efficiency_gain(profile.growth_goal) * 100.0
                ),
            },
            EstimateComponent {
                metric: EstimateMetric::MonthlySavings,
                amount: monthly_savings,
                notes: format!(
                    "{:.0}% of monthly waste assumed recoverable",
                    config.savings_recovery_share * 100.0
                ),
            },
            EstimateComponent {
                metric: EstimateMetric::NewBusiness,
                amount: new_business_value,
                notes: format!(
                    "{:.0}% of missed opportunity convertible in year one",
                    config.new_business_share * 100.0
                ),
            },
            EstimateComponent {
                metric: EstimateMetric::Payback,
                amount: payback_months,
                notes: format!(
                    "investment at {:.0}% of annual revenue, clamped {:.0}-{:.0} months",
                    config.investment_rate * 100.0,
                    config.payback_floor_months,
                    config.payback_ceiling_months
                ),
            },
            EstimateComponent {
                metric: EstimateMetric::Confidence,
                amount: confidence as f64,
                notes: format!(
                    "data maturity {} with {} decision making",
                    profile.data_maturity.label(),
                    profile.decision_speed.label()
                ),
            },
        ];

        FinancialEstimate {
            monthly_waste,
            yearly_waste,
            missed_opportunity,
            total_yearly_loss,
            revenue_boost_min,
            revenue_boost_max,
            monthly_savings,
            new_business_value,
            payback: PaybackEstimate {
                months: payback_months,
            },
            confidence,
            breakdown,
        }
    }
}

impl Default for EstimationEngine {
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::domain::{
        BusinessModel, DataMaturity, DecisionSpeed, GrowthGoal, GrowthStage, ProfileInput,
        RevenueBracket,
    };
    use std::collections::BTreeSet;

    fn profile() -> BusinessProfile {
        let mut main_problems = BTreeSet::new();
        main_problems.insert("manual-reporting".to_string());
        main_problems.insert("data-silos".to_string());
        main_problems.insert("no-forecasting".to_string());

        BusinessProfile {
            company_name: "Cedar Analytics".to_string(),
            industry: "technology".to_string(),
            location: "Des Moines".to_string(),
            revenue_bracket: RevenueBracket::Growing,
            business_model: BusinessModel::B2b,
            growth_stage: GrowthStage::Expanding,
            growth_goal: GrowthGoal::GrowFast,
            main_problems,
            urgent_needs: BTreeSet::new(),
            decision_speed: DecisionSpeed::Moderate,
            data_maturity: DataMaturity::BasicDashboards,
        }
    }

    #[test]
    fn growing_technology_scenario_respects_published_bounds() {
        let estimate = EstimationEngine::default().estimate(&profile());

        assert!(estimate.monthly_waste > 0.0);
        assert!(estimate.monthly_waste <= (1_500_000.0 / 12.0) * 0.08);
        assert!(estimate.revenue_boost_max <= 1_500_000.0 * 0.10 * 1.2);
    }

    #[test]
    fn waste_rate_is_capped_even_with_many_problems() {
        let mut raw = profile();
        for tag in ["churn", "pricing", "inventory", "ops", "hiring", "billing"] {
            raw.main_problems.insert(tag.to_string());
        }
        let estimate = EstimationEngine::default().estimate(&raw);
        let implied_rate = estimate.monthly_waste / (1_500_000.0 / 12.0);
        assert!(implied_rate <= 0.08 + 1e-12);
    }

    #[test]
    fn missed_opportunity_never_exceeds_capped_urgent_share() {
        let mut raw = profile();
        raw.urgent_needs.insert("losing-to-competitors".to_string());
        let estimate = EstimationEngine::default().estimate(&raw);
        assert!(estimate.missed_opportunity <= 1_500_000.0 * 0.05 * 1.1 + 1e-9);
    }

    #[test]
    fn empty_selections_still_produce_finite_non_negative_estimates() {
        let raw = ProfileInput::default().into_profile();
        let estimate = EstimationEngine::default().estimate(&raw);

        for value in [
            estimate.monthly_waste,
            estimate.yearly_waste,
            estimate.missed_opportunity,
            estimate.total_yearly_loss,
            estimate.revenue_boost_min,
            estimate.revenue_boost_max,
            estimate.monthly_savings,
            estimate.new_business_value,
            estimate.payback.months,
        ] {
            assert!(value.is_finite());
            assert!(value >= 0.0);
        }
        assert!(estimate.confidence <= 100);
    }

    #[test]
    fn estimates_are_bit_identical_across_calls() {
        let engine = EstimationEngine::default();
        let raw = profile();
        assert_eq!(engine.estimate(&raw), engine.estimate(&raw));
    }

    #[test]
    fn payback_stays_within_clamp() {
        let estimate = EstimationEngine::default().estimate(&profile());
        assert!(estimate.payback.months >= 3.0);
        assert!(estimate.payback.months <= 24.0);
    }

    #[test]
    fn payback_label_switches_to_years_at_twelve_months() {
        let short = PaybackEstimate { months: 7.0 };
        assert_eq!(short.label(), "7 months");
        let long = PaybackEstimate { months: 18.0 };
        assert_eq!(long.label(), "1.5 years");
    }
}

mod templates;

use super::coefficients;
use super::currency::format_amount;
use super::domain::{BusinessProfile, FinancialEstimate, NarrativeContent};

/// Pick a template variant deterministically from profile strings.
///
/// The index is the summed character length of the seed fields modulo the
/// template count, so identical profiles always read the same narrative,
/// across repeated calls and across process restarts.
pub fn select_variant<'a>(templates: &[&'a str], seed_fields: &[&str]) -> &'a str {
    if templates.is_empty() {
        return "";
    }
    let seed: usize = seed_fields.iter().map(|field| field.chars().count()).sum();
    templates[seed % templates.len()]
}

fn fill(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (key, value) in substitutions {
        rendered = rendered.replace(&format!("{{{key}}}"), value);
    }
    rendered
}

/// Build the synchronous narrative, amounts rendered in USD.
pub fn build_narrative(profile: &BusinessProfile, estimate: &FinancialEstimate) -> NarrativeContent {
    compose(profile, estimate, &|amount| format_amount(amount, "$"), None)
}

/// Build the enriched narrative with amounts rendered through `money`
/// (typically a rate-converted formatter) in the given display currency.
pub fn build_enriched(
    profile: &BusinessProfile,
    estimate: &FinancialEstimate,
    display_currency: &str,
    money: &dyn Fn(f64) -> String,
) -> NarrativeContent {
    compose(profile, estimate, money, Some(display_currency))
}

fn compose(
    profile: &BusinessProfile,
    estimate: &FinancialEstimate,
    money: &dyn Fn(f64) -> String,
    enriched_currency: Option<&str>,
) -> NarrativeContent {
    let industry = coefficients::industry(&profile.industry);
    let payback = estimate.payback.label();
    let confidence = estimate.confidence.to_string();

    let monthly_waste = money(estimate.monthly_waste);
    let monthly_savings = money(estimate.monthly_savings);
    let total_loss = money(estimate.total_yearly_loss);
    let quarterly_loss = money(estimate.total_yearly_loss / 4.0);
    let missed_opportunity = money(estimate.missed_opportunity);
    let boost_min = money(estimate.revenue_boost_min);
    let boost_max = money(estimate.revenue_boost_max);

    let focus_problem = profile
        .main_problems
        .iter()
        .next()
        .map(String::as_str)
        .unwrap_or("reporting")
        .to_string();

    let substitutions: Vec<(&str, &str)> = vec![
        ("company", profile.company_name.as_str()),
        ("industry", industry.label),
        ("location", profile.location.as_str()),
        ("stage", profile.growth_stage.label()),
        ("goal", profile.growth_goal.label()),
        ("maturity", profile.data_maturity.label()),
        ("monthly_waste", monthly_waste.as_str()),
        ("monthly_savings", monthly_savings.as_str()),
        ("total_loss", total_loss.as_str()),
        ("quarterly_loss", quarterly_loss.as_str()),
        ("missed_opportunity", missed_opportunity.as_str()),
        ("boost_min", boost_min.as_str()),
        ("boost_max", boost_max.as_str()),
        ("payback", payback.as_str()),
        ("confidence", confidence.as_str()),
        ("focus_problem", focus_problem.as_str()),
    ];

    let executive_summary = fill(
        select_variant(
            &templates::EXECUTIVE_SUMMARY,
            &[&profile.company_name, &profile.industry, &profile.location],
        ),
        &substitutions,
    );

    let mut opportunities: Vec<String> = profile
        .main_problems
        .iter()
        .map(|tag| {
            let mut line_subs = substitutions.clone();
            line_subs.push(("problem", tag.as_str()));
            fill(templates::opportunity_for_problem(tag), &line_subs)
        })
        .collect();
    opportunities.push(fill(
        "A focused engagement projects a {boost_min}-{boost_max} revenue boost on top of the recovered waste.",
        &substitutions,
    ));

    let action_plan = templates::ACTION_STEPS
        .iter()
        .map(|step| fill(step, &substitutions))
        .collect();

    let urgency_statement = fill(
        select_variant(
            &templates::URGENCY,
            &[&profile.company_name, &profile.location],
        ),
        &substitutions,
    );

    let mut competitive_insight = fill(
        select_variant(
            &templates::COMPETITIVE_INSIGHT,
            &[&profile.company_name, &profile.industry],
        ),
        &substitutions,
    );

    if let Some(code) = enriched_currency {
        let meta = coefficients::currency(code);
        let closer = fill(
            select_variant(&templates::ENRICHED_CLOSER, &[&profile.company_name, code]),
            &[("currency_name", meta.name)],
        );
        competitive_insight.push(' ');
        competitive_insight.push_str(&closer);
    }

    NarrativeContent {
        executive_summary,
        opportunities,
        action_plan,
        urgency_statement,
        competitive_insight,
    }
}

use std::sync::Arc;

use clap::Args;

use crate::infra::{InMemoryFormTransport, InMemoryWebhookRelay};
use prospect_ai::calculators::currency::{format_in_currency, RateProvider, StaticRateTable};
use prospect_ai::calculators::domain::{ContactDetails, EstimateMetric, LeadSubmission, ProfileInput};
use prospect_ai::calculators::estimator::{EstimationEngine, EstimatorConfig};
use prospect_ai::calculators::roi::{self, RoiRequest};
use prospect_ai::calculators::{narrative, CalculatorOutcome, CalculatorService, LeadCaptureError};
use prospect_ai::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Company name used in the narrative output
    #[arg(long, default_value = "Acme Analytics")]
    pub(crate) company: String,
    /// Industry key (unknown keys fall back to the technology baseline)
    #[arg(long, default_value = "technology")]
    pub(crate) industry: String,
    /// Free-text location
    #[arg(long, default_value = "")]
    pub(crate) location: String,
    /// Declared revenue bracket: launching|steady|growing|scaling|established
    #[arg(long, default_value = "growing")]
    pub(crate) revenue_bracket: String,
    /// Declared growth goal: maintain|steady-growth|grow-fast|transform
    #[arg(long, default_value = "steady-growth")]
    pub(crate) growth_goal: String,
    /// Comma-separated problem tags
    #[arg(long, value_delimiter = ',')]
    pub(crate) problems: Vec<String>,
    /// Comma-separated urgent-need tags
    #[arg(long, value_delimiter = ',')]
    pub(crate) urgent_needs: Vec<String>,
    /// Display currency for amounts
    #[arg(long, default_value = "USD")]
    pub(crate) currency: String,
    /// Also print an ROI projection for the same industry
    #[arg(long)]
    pub(crate) with_roi: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Display currency for amounts
    #[arg(long, default_value = "USD")]
    pub(crate) currency: String,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs {
        company,
        industry,
        location,
        revenue_bracket,
        growth_goal,
        problems,
        urgent_needs,
        currency,
        with_roi,
    } = args;

    let profile = ProfileInput {
        company_name: company,
        industry: industry.clone(),
        location,
        revenue_bracket,
        growth_goal,
        main_problems: problems.into_iter().collect(),
        urgent_needs: urgent_needs.into_iter().collect(),
        ..ProfileInput::default()
    }
    .into_profile();

    let engine = EstimationEngine::default();
    let estimate = engine.estimate(&profile);
    let narrative = narrative::build_narrative(&profile, &estimate);
    let outcome = CalculatorOutcome {
        estimate,
        narrative,
    };

    render_outcome(&outcome, &currency);

    if with_roi {
        let projection = roi::project_roi(&RoiRequest {
            industry,
            cost_reduction_pct: 15.0,
            efficiency_gain_pct: 10.0,
            complexity_seed: None,
        });
        println!();
        println!(
            "ROI projection ({}): {:.0}% (market variance {:.2}, seasonal impact {:.2})",
            projection.industry_label,
            projection.roi_pct,
            projection.market_variance,
            projection.seasonal_impact
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let transport = Arc::new(InMemoryFormTransport::default());
    let relay = Arc::new(InMemoryWebhookRelay::default());
    let service = CalculatorService::new(
        Arc::new(StaticRateTable::default()),
        transport.clone(),
        relay.clone(),
        EstimatorConfig::default(),
    );

    let submission = sample_submission();
    println!(
        "Capturing demo lead for {} <{}>",
        submission.profile.company_name, submission.contact.email
    );

    let receipt = service.capture_lead(submission).map_err(|err| match err {
        LeadCaptureError::Intake(violation) => AppError::from(violation),
    })?;

    println!("Lead {} delivery: {:?}", receipt.lead_id.0, receipt.delivery);
    println!();
    render_outcome(&receipt.outcome, &args.currency);

    println!();
    println!("Recorded form submissions: {}", transport.sent().len());
    for event in relay.events() {
        println!(
            "Webhook event '{}' for {} ({} field(s))",
            event.event_type,
            event.email,
            event.form_data.len()
        );
    }

    Ok(())
}

fn sample_submission() -> LeadSubmission {
    LeadSubmission {
        contact: ContactDetails {
            first_name: "Jordan".to_string(),
            email: "jordan@cedaranalytics.example".to_string(),
            phone: Some("+1 515 555 0117".to_string()),
            country: "united-states".to_string(),
            language: "en".to_string(),
        },
        profile: ProfileInput {
            company_name: "Cedar Analytics".to_string(),
            industry: "technology".to_string(),
            location: "Des Moines".to_string(),
            revenue_bracket: "growing".to_string(),
            business_model: "saas".to_string(),
            growth_stage: "expanding".to_string(),
            growth_goal: "grow-fast".to_string(),
            main_problems: ["manual-reporting", "data-silos", "no-forecasting"]
                .into_iter()
                .map(String::from)
                .collect(),
            urgent_needs: ["board-deadline"].into_iter().map(String::from).collect(),
            decision_speed: "fast".to_string(),
            data_maturity: "basic-dashboards".to_string(),
        },
    }
}

fn render_outcome(outcome: &CalculatorOutcome, currency: &str) {
    let rates = StaticRateTable::default();
    let money = |amount: f64| {
        let converted = rates.convert(amount, "USD", currency).unwrap_or(amount);
        format_in_currency(converted, currency)
    };

    let estimate = &outcome.estimate;
    println!("Business Value Projection");
    println!("-------------------------");
    println!("Monthly waste:       {}", money(estimate.monthly_waste));
    println!("Yearly waste:        {}", money(estimate.yearly_waste));
    println!("Missed opportunity:  {}", money(estimate.missed_opportunity));
    println!("Total yearly loss:   {}", money(estimate.total_yearly_loss));
    println!(
        "Revenue boost:       {} - {}",
        money(estimate.revenue_boost_min),
        money(estimate.revenue_boost_max)
    );
    println!("Monthly savings:     {}", money(estimate.monthly_savings));
    println!("New business value:  {}", money(estimate.new_business_value));
    println!("Payback:             {}", estimate.payback.label());
    println!("Confidence:          {}%", estimate.confidence);

    println!();
    println!("Breakdown");
    for component in &estimate.breakdown {
        let amount = match component.metric {
            EstimateMetric::Payback => format!("{:.1} mo", component.amount),
            EstimateMetric::Confidence => format!("{:.0}%", component.amount),
            _ => money(component.amount),
        };
        println!("  {:<20} {:>10}  {}", component.metric.label(), amount, component.notes);
    }

    let narrative = &outcome.narrative;
    println!();
    println!("{}", narrative.executive_summary);
    println!();
    println!("Opportunities:");
    for line in &narrative.opportunities {
        println!("  - {line}");
    }
    println!();
    println!("Action plan:");
    for (index, step) in narrative.action_plan.iter().enumerate() {
        println!("  {}. {step}", index + 1);
    }
    println!();
    println!("{}", narrative.urgency_statement);
    println!("{}", narrative.competitive_insight);
}

//! Pre-written sentence templates. Placeholders use `{name}` and interpolate
//! to empty strings when a profile field is blank, so every variant renders.

pub(crate) const EXECUTIVE_SUMMARY: [&str; 3] = [
    "{company} is leaving roughly {total_loss} on the table every year. As a {industry} business at the {stage}, the fastest wins come from closing the {monthly_waste} of monthly operational waste before funding new growth bets.",
    "Our read on {company}: about {total_loss} of combined waste and missed opportunity per year. For a {industry} business with a goal to {goal}, that gap is the difference between plan and actual by Q4.",
    "Based on the declared profile, {company} can recover {monthly_savings} per month and unlock a revenue boost of {boost_min}-{boost_max}. The {industry} benchmarks suggest starting with reporting automation rather than net-new tooling.",
];

pub(crate) const URGENCY: [&str; 3] = [
    "Every month of delay costs {company} about {monthly_waste} in waste alone; at the current pace that is {total_loss} over the next year.",
    "The payback window here is {payback} - short enough that waiting for next budget cycle costs more than starting now.",
    "Competitors in {industry} are already automating these workflows; each quarter of delay widens the gap by roughly {quarterly_loss}.",
];

pub(crate) const COMPETITIVE_INSIGHT: [&str; 3] = [
    "Mid-market {industry} teams that put decisions on live dashboards report faster cycle times than peers still reconciling spreadsheets - {company} fits that switch profile.",
    "In {industry}, the spread between data-led operators and the rest keeps widening; with {confidence}% estimate confidence, {company} has enough signal to act on the numbers above.",
    "{location} is not a constraint: {industry} leaders win on decision speed, and moving from {maturity} to integrated reporting is the cheapest speed upgrade available to {company}.",
];

/// Closing line appended by the async enrichment stage.
pub(crate) const ENRICHED_CLOSER: [&str; 2] = [
    "Figures above are shown in {currency_name}; the engagement model and payback window hold across currencies.",
    "Amounts converted to {currency_name} at last-known rates; the underlying projection is computed once and is currency-independent.",
];

/// Fixed action-plan steps; the first step is specialized per focus problem.
pub(crate) const ACTION_STEPS: [&str; 4] = [
    "Baseline the current numbers: one week to inventory reports, owners, and the real cost of {focus_problem}.",
    "Stand up a single source of truth for the two metrics leadership argues about most.",
    "Automate the highest-waste workflow first and bank the {monthly_savings} monthly savings as proof.",
    "Review against the {payback} payback target and expand only what earned its keep.",
];

/// One opportunity line per recognized problem tag.
pub(crate) fn opportunity_for_problem(tag: &str) -> &'static str {
    match tag {
        "manual-reporting" => {
            "Replace manual reporting: the hours spent assembling decks are part of the {monthly_waste} monthly waste figure."
        }
        "data-silos" => {
            "Connect siloed systems so {company} answers cross-team questions in minutes instead of meetings."
        }
        "no-forecasting" => {
            "Add lightweight forecasting: the {boost_min}-{boost_max} boost band assumes demand is predicted, not discovered."
        }
        "customer-churn" => {
            "Instrument churn signals; a share of the {missed_opportunity} missed opportunity is recoverable retention revenue."
        }
        "inventory-guesswork" => {
            "Move inventory decisions onto actuals; guesswork shows up directly in the waste line."
        }
        "pricing-blind-spots" => {
            "Price from data: blind spots here typically hide the easiest points of margin in {industry}."
        }
        _ => "Target '{problem}' with a two-week diagnostic before committing tooling budget to it.",
    }
}

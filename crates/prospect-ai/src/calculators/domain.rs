use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Contact block captured alongside every calculator submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub first_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Raw calculator form state as submitted by the browser.
///
/// Every descriptive field is a loose string key; unknown or misspelled keys
/// never fail intake; they fall back to the documented baseline entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub revenue_bracket: String,
    #[serde(default)]
    pub business_model: String,
    #[serde(default)]
    pub growth_stage: String,
    #[serde(default)]
    pub growth_goal: String,
    #[serde(default)]
    pub main_problems: BTreeSet<String>,
    #[serde(default)]
    pub urgent_needs: BTreeSet<String>,
    #[serde(default)]
    pub decision_speed: String,
    #[serde(default)]
    pub data_maturity: String,
}

impl ProfileInput {
    /// Resolve loose keys into the typed profile. Total: unknown keys default.
    pub fn into_profile(self) -> BusinessProfile {
        BusinessProfile {
            company_name: self.company_name.trim().to_string(),
            industry: self.industry.trim().to_ascii_lowercase(),
            location: self.location.trim().to_string(),
            revenue_bracket: RevenueBracket::from_key(&self.revenue_bracket),
            business_model: BusinessModel::from_key(&self.business_model),
            growth_stage: GrowthStage::from_key(&self.growth_stage),
            growth_goal: GrowthGoal::from_key(&self.growth_goal),
            main_problems: self.main_problems,
            urgent_needs: self.urgent_needs,
            decision_speed: DecisionSpeed::from_key(&self.decision_speed),
            data_maturity: DataMaturity::from_key(&self.data_maturity),
        }
    }
}

/// A lead submission: contact details plus the calculator profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub contact: ContactDetails,
    #[serde(flatten)]
    pub profile: ProfileInput,
}

/// Sanitized per-session profile driving all calculator outputs.
///
/// Built fresh from form state on every submission and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub company_name: String,
    /// Free-form industry key; coefficient lookups default unknown keys.
    pub industry: String,
    pub location: String,
    pub revenue_bracket: RevenueBracket,
    pub business_model: BusinessModel,
    pub growth_stage: GrowthStage,
    pub growth_goal: GrowthGoal,
    pub main_problems: BTreeSet<String>,
    pub urgent_needs: BTreeSet<String>,
    pub decision_speed: DecisionSpeed,
    pub data_maturity: DataMaturity,
}

impl BusinessProfile {
    pub fn has_urgent_need(&self) -> bool {
        !self.urgent_needs.is_empty()
    }
}

/// Declared revenue bracket; maps to a representative annual figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevenueBracket {
    Launching,
    Steady,
    Growing,
    Scaling,
    Established,
}

impl RevenueBracket {
    /// Unparseable brackets fall back to the baseline `growing` entry.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "launching" | "pre-revenue" => Self::Launching,
            "steady" => Self::Steady,
            "scaling" => Self::Scaling,
            "established" => Self::Established,
            _ => Self::Growing,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Launching => "launching",
            Self::Steady => "steady",
            Self::Growing => "growing",
            Self::Scaling => "scaling",
            Self::Established => "established",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessModel {
    B2b,
    B2c,
    Marketplace,
    Saas,
    Hybrid,
}

impl BusinessModel {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "b2c" => Self::B2c,
            "marketplace" => Self::Marketplace,
            "saas" => Self::Saas,
            "hybrid" => Self::Hybrid,
            _ => Self::B2b,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::B2b => "B2B",
            Self::B2c => "B2C",
            Self::Marketplace => "marketplace",
            Self::Saas => "SaaS",
            Self::Hybrid => "hybrid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthStage {
    Idea,
    Early,
    Expanding,
    Mature,
}

impl GrowthStage {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "idea" => Self::Idea,
            "expanding" => Self::Expanding,
            "mature" => Self::Mature,
            _ => Self::Early,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Idea => "idea stage",
            Self::Early => "early stage",
            Self::Expanding => "expanding",
            Self::Mature => "mature",
        }
    }
}

/// Declared growth ambition; drives the revenue-boost efficiency gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthGoal {
    Maintain,
    SteadyGrowth,
    GrowFast,
    Transform,
}

impl GrowthGoal {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "maintain" => Self::Maintain,
            "grow-fast" | "grow_fast" => Self::GrowFast,
            "transform" => Self::Transform,
            _ => Self::SteadyGrowth,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Maintain => "maintain current scale",
            Self::SteadyGrowth => "steady growth",
            Self::GrowFast => "grow fast",
            Self::Transform => "transform the business",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionSpeed {
    Fast,
    Moderate,
    Deliberate,
}

impl DecisionSpeed {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "fast" | "quick" => Self::Fast,
            "deliberate" | "slow" => Self::Deliberate,
            _ => Self::Moderate,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Moderate => "moderate",
            Self::Deliberate => "deliberate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataMaturity {
    Spreadsheets,
    BasicDashboards,
    Integrated,
    Advanced,
}

impl DataMaturity {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "basic-dashboards" | "dashboards" => Self::BasicDashboards,
            "integrated" => Self::Integrated,
            "advanced" => Self::Advanced,
            _ => Self::Spreadsheets,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Spreadsheets => "spreadsheets",
            Self::BasicDashboards => "basic dashboards",
            Self::Integrated => "integrated tooling",
            Self::Advanced => "advanced analytics",
        }
    }
}

/// Metrics an estimate line item can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateMetric {
    MonthlyWaste,
    MissedOpportunity,
    RevenueBoost,
    MonthlySavings,
    NewBusiness,
    Payback,
    Confidence,
}

impl EstimateMetric {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MonthlyWaste => "monthly waste",
            Self::MissedOpportunity => "missed opportunity",
            Self::RevenueBoost => "revenue boost",
            Self::MonthlySavings => "monthly savings",
            Self::NewBusiness => "new business value",
            Self::Payback => "payback",
            Self::Confidence => "confidence",
        }
    }
}

/// Discrete line of an estimate so responses and demos can show the math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateComponent {
    pub metric: EstimateMetric,
    pub amount: f64,
    pub notes: String,
}

/// Payback duration kept numeric so callers can format or compare.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaybackEstimate {
    pub months: f64,
}

impl PaybackEstimate {
    /// Whole months below a year, otherwise years with one decimal.
    pub fn label(&self) -> String {
        if self.months < 12.0 {
            format!("{:.0} months", self.months)
        } else {
            format!("{:.1} years", self.months / 12.0)
        }
    }
}

/// Derived monetary projections for one calculator run. All USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialEstimate {
    pub monthly_waste: f64,
    pub yearly_waste: f64,
    pub missed_opportunity: f64,
    pub total_yearly_loss: f64,
    pub revenue_boost_min: f64,
    pub revenue_boost_max: f64,
    pub monthly_savings: f64,
    pub new_business_value: f64,
    pub payback: PaybackEstimate,
    pub confidence: u8,
    pub breakdown: Vec<EstimateComponent>,
}

/// Derived narrative strings for the same run; selection is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeContent {
    pub executive_summary: String,
    pub opportunities: Vec<String>,
    pub action_plan: Vec<String>,
    pub urgency_statement: String,
    pub competitive_insight: String,
}

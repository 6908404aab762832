//! Static lookup data backing the estimation formulas.
//!
//! Every lookup is total: unknown keys resolve to a documented baseline entry
//! instead of failing, so the calculators always produce output.

use super::domain::{GrowthGoal, RevenueBracket};

/// Per-industry multipliers consumed by the waste, opportunity, and ROI math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndustryCoefficients {
    pub key: &'static str,
    pub label: &'static str,
    /// Share of revenue assumed lost to inefficiency. Capped downstream at 0.08.
    pub waste_rate: f64,
    /// Share of revenue assumed reachable as new opportunity. Capped at 0.05.
    pub opportunity_rate: f64,
    pub roi_multiplier: f64,
    pub volatility: f64,
    pub compliance_bonus: f64,
}

/// Baseline row; also the fallback for unknown industry keys.
pub const BASELINE_INDUSTRY: IndustryCoefficients = IndustryCoefficients {
    key: "technology",
    label: "technology",
    waste_rate: 0.045,
    opportunity_rate: 0.032,
    roi_multiplier: 1.25,
    volatility: 0.18,
    compliance_bonus: 0.04,
};

const INDUSTRIES: &[IndustryCoefficients] = &[
    BASELINE_INDUSTRY,
    IndustryCoefficients {
        key: "retail",
        label: "retail",
        waste_rate: 0.06,
        opportunity_rate: 0.04,
        roi_multiplier: 1.1,
        volatility: 0.22,
        compliance_bonus: 0.02,
    },
    IndustryCoefficients {
        key: "manufacturing",
        label: "manufacturing",
        waste_rate: 0.055,
        opportunity_rate: 0.03,
        roi_multiplier: 1.15,
        volatility: 0.15,
        compliance_bonus: 0.03,
    },
    IndustryCoefficients {
        key: "healthcare",
        label: "healthcare",
        waste_rate: 0.05,
        opportunity_rate: 0.028,
        roi_multiplier: 1.2,
        volatility: 0.12,
        compliance_bonus: 0.08,
    },
    IndustryCoefficients {
        key: "finance",
        label: "financial services",
        waste_rate: 0.04,
        opportunity_rate: 0.035,
        roi_multiplier: 1.3,
        volatility: 0.2,
        compliance_bonus: 0.1,
    },
    IndustryCoefficients {
        key: "hospitality",
        label: "hospitality",
        waste_rate: 0.065,
        opportunity_rate: 0.042,
        roi_multiplier: 1.05,
        volatility: 0.25,
        compliance_bonus: 0.01,
    },
    IndustryCoefficients {
        key: "logistics",
        label: "logistics",
        waste_rate: 0.058,
        opportunity_rate: 0.033,
        roi_multiplier: 1.12,
        volatility: 0.17,
        compliance_bonus: 0.02,
    },
    IndustryCoefficients {
        key: "construction",
        label: "construction",
        waste_rate: 0.062,
        opportunity_rate: 0.03,
        roi_multiplier: 1.08,
        volatility: 0.2,
        compliance_bonus: 0.02,
    },
    IndustryCoefficients {
        key: "education",
        label: "education",
        waste_rate: 0.048,
        opportunity_rate: 0.025,
        roi_multiplier: 1.1,
        volatility: 0.1,
        compliance_bonus: 0.05,
    },
    IndustryCoefficients {
        key: "services",
        label: "professional services",
        waste_rate: 0.05,
        opportunity_rate: 0.03,
        roi_multiplier: 1.18,
        volatility: 0.14,
        compliance_bonus: 0.03,
    },
];

/// Look up an industry row by key. Unknown keys return the baseline row.
pub fn industry(key: &str) -> &'static IndustryCoefficients {
    let normalized = key.trim().to_ascii_lowercase();
    INDUSTRIES
        .iter()
        .find(|entry| entry.key == normalized)
        .unwrap_or(&BASELINE_INDUSTRY)
}

/// Representative annual revenue (USD) for a declared bracket.
pub const fn annual_revenue_usd(bracket: RevenueBracket) -> f64 {
    match bracket {
        RevenueBracket::Launching => 150_000.0,
        RevenueBracket::Steady => 600_000.0,
        RevenueBracket::Growing => 1_500_000.0,
        RevenueBracket::Scaling => 4_000_000.0,
        RevenueBracket::Established => 12_000_000.0,
    }
}

/// Fixed efficiency gain assumed for each declared growth goal.
pub const fn efficiency_gain(goal: GrowthGoal) -> f64 {
    match goal {
        GrowthGoal::Maintain => 0.03,
        GrowthGoal::SteadyGrowth => 0.06,
        GrowthGoal::GrowFast => 0.10,
        GrowthGoal::Transform => 0.15,
    }
}

/// Display metadata for a currency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyMeta {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

pub const BASELINE_CURRENCY: CurrencyMeta = CurrencyMeta {
    code: "USD",
    symbol: "$",
    name: "US dollar",
};

const CURRENCIES: &[CurrencyMeta] = &[
    BASELINE_CURRENCY,
    CurrencyMeta {
        code: "EUR",
        symbol: "€",
        name: "euro",
    },
    CurrencyMeta {
        code: "GBP",
        symbol: "£",
        name: "pound sterling",
    },
    CurrencyMeta {
        code: "CAD",
        symbol: "C$",
        name: "Canadian dollar",
    },
    CurrencyMeta {
        code: "AUD",
        symbol: "A$",
        name: "Australian dollar",
    },
    CurrencyMeta {
        code: "INR",
        symbol: "₹",
        name: "Indian rupee",
    },
    CurrencyMeta {
        code: "JPY",
        symbol: "¥",
        name: "yen",
    },
];

/// Look up currency metadata. Unknown codes return the USD row.
pub fn currency(code: &str) -> &'static CurrencyMeta {
    let normalized = code.trim().to_ascii_uppercase();
    CURRENCIES
        .iter()
        .find(|entry| entry.code == normalized)
        .unwrap_or(&BASELINE_CURRENCY)
}

/// National phone number digit bounds per country, for intake validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialRule {
    pub country: &'static str,
    pub calling_code: &'static str,
    pub min_digits: u8,
    pub max_digits: u8,
}

/// ITU-style fallback for countries without an explicit rule.
pub const DEFAULT_DIAL_RULE: DialRule = DialRule {
    country: "default",
    calling_code: "",
    min_digits: 7,
    max_digits: 15,
};

const DIAL_RULES: &[DialRule] = &[
    DialRule {
        country: "united-states",
        calling_code: "1",
        min_digits: 10,
        max_digits: 10,
    },
    DialRule {
        country: "canada",
        calling_code: "1",
        min_digits: 10,
        max_digits: 10,
    },
    DialRule {
        country: "united-kingdom",
        calling_code: "44",
        min_digits: 10,
        max_digits: 11,
    },
    DialRule {
        country: "germany",
        calling_code: "49",
        min_digits: 10,
        max_digits: 11,
    },
    DialRule {
        country: "france",
        calling_code: "33",
        min_digits: 9,
        max_digits: 9,
    },
    DialRule {
        country: "india",
        calling_code: "91",
        min_digits: 10,
        max_digits: 10,
    },
    DialRule {
        country: "australia",
        calling_code: "61",
        min_digits: 9,
        max_digits: 9,
    },
];

/// Look up the dial rule for a country key. Unknown countries get the default.
pub fn dial_rule(country: &str) -> &'static DialRule {
    let normalized = country.trim().to_ascii_lowercase().replace(' ', "-");
    DIAL_RULES
        .iter()
        .find(|rule| rule.country == normalized)
        .unwrap_or(&DEFAULT_DIAL_RULE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_industry_falls_back_to_baseline() {
        let row = industry("underwater-basket-weaving");
        assert_eq!(row, &BASELINE_INDUSTRY);
    }

    #[test]
    fn industry_lookup_normalizes_case_and_whitespace() {
        assert_eq!(industry("  Retail ").key, "retail");
    }

    #[test]
    fn growing_bracket_matches_published_anchor() {
        assert_eq!(annual_revenue_usd(RevenueBracket::Growing), 1_500_000.0);
    }

    #[test]
    fn unknown_currency_falls_back_to_usd() {
        assert_eq!(currency("XTS"), &BASELINE_CURRENCY);
        assert_eq!(currency("eur").symbol, "€");
    }

    #[test]
    fn unknown_country_gets_default_dial_rule() {
        assert_eq!(dial_rule("atlantis"), &DEFAULT_DIAL_RULE);
        assert_eq!(dial_rule("United States").min_digits, 10);
    }
}

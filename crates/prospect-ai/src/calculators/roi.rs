//! Deterministic ROI projection for the marketing calculator widget.
//!
//! The trig terms fold a string-derived seed into repeatable "variance" so the
//! widget shows movement between scenarios without randomness. The constants
//! are illustrative marketing heuristics; the floor is the published contract.

use serde::{Deserialize, Serialize};

use super::coefficients;

/// Published lower bound on any displayed ROI percentage.
pub const ROI_FLOOR_PCT: f64 = 120.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiRequest {
    #[serde(default)]
    pub industry: String,
    /// Expected cost reduction, percent of operating cost (0-100).
    pub cost_reduction_pct: f64,
    /// Expected efficiency gain, percent (0-100).
    pub efficiency_gain_pct: f64,
    /// Optional explicit seed; defaults to a seed derived from the industry key.
    #[serde(default)]
    pub complexity_seed: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiProjection {
    pub roi_pct: f64,
    pub market_variance: f64,
    pub seasonal_impact: f64,
    pub industry_label: &'static str,
}

/// Fold text into a stable numeric seed (sum of scalar values).
pub fn seed_from_text(text: &str) -> u32 {
    text.chars().fold(0u32, |acc, c| acc.wrapping_add(c as u32))
}

pub fn project_roi(request: &RoiRequest) -> RoiProjection {
    let industry = coefficients::industry(&request.industry);
    let seed = request
        .complexity_seed
        .unwrap_or_else(|| seed_from_text(&request.industry)) as f64;

    let cost_reduction = request.cost_reduction_pct.clamp(0.0, 100.0);
    let efficiency_gain = request.efficiency_gain_pct.clamp(0.0, 100.0);

    let market_variance = ((seed * 0.1).sin() + 1.0) * 0.5;
    let seasonal_impact = ((seed * 0.05).cos() + 1.0) * 0.5;

    let base = 100.0 + (cost_reduction * 1.8 + efficiency_gain * 1.2) * industry.roi_multiplier;
    let adjusted = base
        * (1.0 + industry.volatility * (market_variance - 0.5))
        * (1.0 + 0.12 * seasonal_impact)
        + industry.compliance_bonus * 100.0;

    RoiProjection {
        roi_pct: adjusted.max(ROI_FLOOR_PCT),
        market_variance,
        seasonal_impact,
        industry_label: industry.label,
    }
}

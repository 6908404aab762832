use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use super::coefficients;

/// Format an amount with the magnitude abbreviation used everywhere money is
/// displayed: `$1.3M`, `$450K`, `$4K`, `$950`.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();

    if magnitude >= 1_000_000.0 {
        return format_millions(magnitude, sign, symbol);
    }

    if magnitude >= 1_000.0 {
        let thousands = (magnitude / 1_000.0).round();
        // 999,500 and up rounds to 1000K; promote to the M form.
        if thousands >= 1_000.0 {
            return format_millions(magnitude, sign, symbol);
        }
        return format!("{sign}{symbol}{thousands:.0}K");
    }

    format!("{sign}{symbol}{magnitude:.0}")
}

fn format_millions(magnitude: f64, sign: &str, symbol: &str) -> String {
    let millions = (magnitude / 1_000_000.0 * 10.0).round() / 10.0;
    if millions.fract() == 0.0 {
        format!("{sign}{symbol}{millions:.0}M")
    } else {
        format!("{sign}{symbol}{millions:.1}M")
    }
}

/// Convenience wrapper resolving the display symbol from currency metadata.
pub fn format_in_currency(amount: f64, code: &str) -> String {
    format_amount(amount, coefficients::currency(code).symbol)
}

#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error("no exchange rate on record for '{0}'")]
    UnknownCurrency(String),
    #[error("rate source unavailable: {0}")]
    Source(String),
}

/// Exchange-rate collaborator consumed by the presentation layer.
///
/// Staleness never blocks: `convert` always answers from last-known rates and
/// callers refresh in the background when `is_stale` reports true.
pub trait RateProvider: Send + Sync {
    fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, RateError>;
    fn is_stale(&self) -> bool;
    fn refresh(&self) -> Result<(), RateError>;
}

/// Seeded in-process rate table with a configurable staleness window.
pub struct StaticRateTable {
    rates: Mutex<HashMap<String, f64>>,
    refreshed_at: Mutex<DateTime<Utc>>,
    max_age: Duration,
}

impl StaticRateTable {
    pub fn new(max_age_hours: i64) -> Self {
        let mut rates = HashMap::new();
        for (code, per_usd) in [
            ("USD", 1.0),
            ("EUR", 0.92),
            ("GBP", 0.79),
            ("CAD", 1.36),
            ("AUD", 1.52),
            ("INR", 83.1),
            ("JPY", 149.5),
        ] {
            rates.insert(code.to_string(), per_usd);
        }

        Self {
            rates: Mutex::new(rates),
            refreshed_at: Mutex::new(Utc::now()),
            max_age: Duration::hours(max_age_hours.max(1)),
        }
    }

    #[cfg(test)]
    fn backdate(&self, hours: i64) {
        let mut guard = self.refreshed_at.lock().expect("rate clock mutex poisoned");
        *guard = Utc::now() - Duration::hours(hours);
    }
}

impl Default for StaticRateTable {
    fn default() -> Self {
        Self::new(24)
    }
}

impl RateProvider for StaticRateTable {
    fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, RateError> {
        let rates = self.rates.lock().expect("rate table mutex poisoned");
        let from_code = from.trim().to_ascii_uppercase();
        let to_code = to.trim().to_ascii_uppercase();

        let from_rate = rates
            .get(&from_code)
            .copied()
            .ok_or_else(|| RateError::UnknownCurrency(from_code.clone()))?;
        let to_rate = rates
            .get(&to_code)
            .copied()
            .ok_or(RateError::UnknownCurrency(to_code))?;

        Ok(amount / from_rate * to_rate)
    }

    fn is_stale(&self) -> bool {
        let refreshed_at = *self.refreshed_at.lock().expect("rate clock mutex poisoned");
        Utc::now() - refreshed_at > self.max_age
    }

    fn refresh(&self) -> Result<(), RateError> {
        let mut guard = self.refreshed_at.lock().expect("rate clock mutex poisoned");
        *guard = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviates_millions_to_one_decimal() {
        assert_eq!(format_amount(1_250_000.0, "$"), "$1.3M");
        assert_eq!(format_amount(2_000_000.0, "$"), "$2M");
        assert_eq!(format_amount(10_449_000.0, "$"), "$10.4M");
    }

    #[test]
    fn abbreviates_thousands_to_whole_units() {
        assert_eq!(format_amount(4_300.0, "$"), "$4K");
        assert_eq!(format_amount(450_000.0, "$"), "$450K");
        assert_eq!(format_amount(4_500.0, "$"), "$5K");
    }

    #[test]
    fn promotes_rounded_thousands_into_millions() {
        assert_eq!(format_amount(999_600.0, "$"), "$1M");
    }

    #[test]
    fn small_amounts_render_plain() {
        assert_eq!(format_amount(950.0, "$"), "$950");
        assert_eq!(format_amount(0.0, "$"), "$0");
    }

    #[test]
    fn resolves_symbol_from_metadata() {
        assert_eq!(format_in_currency(1_250_000.0, "eur"), "€1.3M");
        assert_eq!(format_in_currency(4_300.0, "nope"), "$4K");
    }

    #[test]
    fn converts_through_usd_rates() {
        let table = StaticRateTable::default();
        let eur = table.convert(100.0, "USD", "EUR").expect("known pair");
        assert!((eur - 92.0).abs() < 1e-9);
        let back = table.convert(eur, "EUR", "USD").expect("inverse pair");
        assert!((back - 100.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_code_is_a_typed_error() {
        let table = StaticRateTable::default();
        let err = table.convert(10.0, "USD", "XTS").expect_err("unknown code");
        assert!(matches!(err, RateError::UnknownCurrency(code) if code == "XTS"));
    }

    #[test]
    fn staleness_tracks_the_configured_window() {
        let table = StaticRateTable::new(12);
        assert!(!table.is_stale());
        table.backdate(13);
        assert!(table.is_stale());
        table.refresh().expect("refresh succeeds");
        assert!(!table.is_stale());
    }
}

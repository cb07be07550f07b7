//! Wage-level classification: a salary against four ascending hourly
//! thresholds, plus the hourly/annual conversions and display formatting the
//! result carries.

pub mod evaluator;
pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::models::wage::WageThresholds;

/// Standard full-time hours per year used for salary conversion.
pub const HOURS_PER_YEAR: f64 = 2080.0;

/// Ordinal prevailing-wage level. Lower bounds are closed: a salary exactly
/// at L1 is level I, not "Not Qualified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WageLevel {
    #[serde(rename = "Not Qualified")]
    NotQualified,
    I,
    II,
    III,
    IV,
}

/// Classifies an hourly rate against the four thresholds. Non-ascending
/// thresholds are not rejected here; the comparison chain yields whatever
/// the data implies (external-data-quality assumption).
pub fn wage_level(hourly: f64, thresholds: &WageThresholds) -> WageLevel {
    if hourly < thresholds.l1() {
        WageLevel::NotQualified
    } else if hourly < thresholds.l2() {
        WageLevel::I
    } else if hourly < thresholds.l3() {
        WageLevel::II
    } else if hourly < thresholds.l4() {
        WageLevel::III
    } else {
        WageLevel::IV
    }
}

/// Classifies an annual salary (converted at 2080 hours/year).
pub fn classify_salary(annual: f64, thresholds: &WageThresholds) -> WageLevel {
    wage_level(hourly_from_annual(annual), thresholds)
}

pub fn hourly_from_annual(annual: f64) -> f64 {
    annual / HOURS_PER_YEAR
}

/// Annualized equivalent of an hourly threshold, rounded to whole dollars.
/// Display only.
pub fn annual_from_hourly(hourly: f64) -> i64 {
    (hourly * HOURS_PER_YEAR).round() as i64
}

/// Whole-dollar USD with thousands separators, e.g. `$41,600`. Non-finite
/// input renders as an em dash, matching the result display convention.
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "—".to_string();
    }
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

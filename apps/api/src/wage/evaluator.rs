use serde::Serialize;

use crate::models::area::AreaInfo;
use crate::models::wage::WageThresholds;
use crate::wage::{annual_from_hourly, classify_salary, format_usd, hourly_from_annual, WageLevel};

/// One threshold rendered for display: hourly rate plus its annualized
/// whole-dollar equivalent.
#[derive(Debug, Clone, Serialize)]
pub struct LevelFigure {
    pub level: &'static str,
    pub hourly: f64,
    pub annual: i64,
    pub annual_display: String,
}

/// Result of a wage-level check. `NoBenchmark` is a distinct outcome for an
/// `(area, soccode)` pair absent from the wage index; it is not an input
/// error and never collapses into a default level.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum WageEvaluation {
    Evaluated {
        level: WageLevel,
        soc_code: String,
        role_title: Option<String>,
        location: String,
        annual_salary: f64,
        salary_display: String,
        hourly: f64,
        thresholds: Vec<LevelFigure>,
    },
    NoBenchmark {
        soc_code: String,
        area: String,
        message: String,
    },
}

/// Classifies `annual_salary` for `soc_code` in the area behind `area_info`,
/// or reports the missing benchmark.
pub fn evaluate(
    area_info: &AreaInfo,
    soc_code: &str,
    annual_salary: f64,
    thresholds: Option<&WageThresholds>,
    role_title: Option<&str>,
) -> WageEvaluation {
    let Some(thresholds) = thresholds else {
        return WageEvaluation::NoBenchmark {
            soc_code: soc_code.to_string(),
            area: area_info.area.clone(),
            message: format!(
                "No wage thresholds found for SOC {} in Area {}.",
                soc_code, area_info.area
            ),
        };
    };

    let level = classify_salary(annual_salary, thresholds);

    let labels = ["I", "II", "III", "IV"];
    let figures = thresholds
        .as_array()
        .iter()
        .zip(labels)
        .map(|(&hourly, level)| {
            let annual = annual_from_hourly(hourly);
            LevelFigure {
                level,
                hourly,
                annual,
                annual_display: format_usd(annual as f64),
            }
        })
        .collect();

    WageEvaluation::Evaluated {
        level,
        soc_code: soc_code.to_string(),
        role_title: role_title.map(str::to_string),
        location: area_info.location_line(),
        annual_salary,
        salary_display: format_usd(annual_salary),
        hourly: hourly_from_annual(annual_salary),
        thresholds: figures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> AreaInfo {
        AreaInfo {
            area: "35620".to_string(),
            area_name: "New York-Newark-Jersey City, NY-NJ-PA".to_string(),
            city: "New York".to_string(),
            state_ab: "NY".to_string(),
            county: None,
        }
    }

    #[test]
    fn test_evaluated_outcome() {
        let thresholds = WageThresholds::new([20.0, 25.0, 30.0, 35.0]);
        let result = evaluate(&area(), "15-2051", 41_600.0, Some(&thresholds), Some("Data Scientists"));

        match result {
            WageEvaluation::Evaluated {
                level,
                thresholds,
                location,
                hourly,
                salary_display,
                ..
            } => {
                assert_eq!(level, WageLevel::I);
                assert_eq!(hourly, 20.0);
                assert_eq!(salary_display, "$41,600");
                assert!(location.starts_with("New York, NY"));
                assert_eq!(thresholds.len(), 4);
                assert_eq!(thresholds[0].annual, 41_600);
                assert_eq!(thresholds[3].annual_display, "$72,800");
            }
            other => panic!("expected Evaluated, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_benchmark_is_distinct_outcome() {
        let result = evaluate(&area(), "15-2051", 100_000.0, None, None);
        match result {
            WageEvaluation::NoBenchmark { soc_code, area, message } => {
                assert_eq!(soc_code, "15-2051");
                assert_eq!(area, "35620");
                assert!(message.contains("15-2051"));
                assert!(message.contains("35620"));
            }
            other => panic!("expected NoBenchmark, got {other:?}"),
        }
    }

    #[test]
    fn test_outcome_tag_in_json() {
        let thresholds = WageThresholds::new([20.0, 25.0, 30.0, 35.0]);
        let json = serde_json::to_value(evaluate(&area(), "x", 50_000.0, Some(&thresholds), None)).unwrap();
        assert_eq!(json["outcome"], "evaluated");
        assert_eq!(json["level"], "I");

        let json = serde_json::to_value(evaluate(&area(), "x", 50_000.0, None, None)).unwrap();
        assert_eq!(json["outcome"], "no_benchmark");
    }
}

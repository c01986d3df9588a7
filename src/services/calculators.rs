//! Everyday calculators: BMI, percentages, loans and date arithmetic.

use crate::domain::errors::ToolError;
use crate::domain::models::{AgeReport, BmiReport, DateDiffReport, LoanReport, PercentReport};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PercentMode {
    /// X percent of Y
    Of,
    /// X is what percent of Y
    Ratio,
    /// Percent change from X to Y
    Change,
}

fn round_to(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}

fn require_positive(name: &str, v: f64) -> Result<f64, ToolError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ToolError::InvalidArgument(format!("{} must be greater than zero", name)));
    }
    Ok(v)
}

pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<BmiReport, ToolError> {
    let weight = require_positive("weight", weight_kg)?;
    let height_m = require_positive("height", height_cm)? / 100.0;
    let value = weight / (height_m * height_m);
    let category = if value < 18.5 {
        "Underweight"
    } else if value < 25.0 {
        "Normal weight"
    } else if value < 30.0 {
        "Overweight"
    } else {
        "Obese"
    };
    Ok(BmiReport {
        bmi: round_to(value, 1),
        category: category.to_string(),
    })
}

pub fn percent(mode: PercentMode, x: f64, y: f64) -> Result<PercentReport, ToolError> {
    let (result, description) = match mode {
        PercentMode::Of => {
            let r = x * y / 100.0;
            (r, format!("{}% of {} is {}", x, y, round_to(r, 6)))
        }
        PercentMode::Ratio => {
            if y == 0.0 {
                return Err(ToolError::InvalidArgument(
                    "cannot take a percentage of zero".to_string(),
                ));
            }
            let r = x / y * 100.0;
            (r, format!("{} is {}% of {}", x, round_to(r, 6), y))
        }
        PercentMode::Change => {
            if x == 0.0 {
                return Err(ToolError::InvalidArgument(
                    "percent change from zero is undefined".to_string(),
                ));
            }
            let r = (y - x) / x.abs() * 100.0;
            let direction = if r < 0.0 { "decrease" } else { "increase" };
            (
                r,
                format!("{} to {} is a {}% {}", x, y, round_to(r.abs(), 6), direction),
            )
        }
    };
    Ok(PercentReport {
        mode: format!("{:?}", mode).to_lowercase(),
        result: round_to(result, 6),
        description,
    })
}

pub fn loan(
    principal: f64,
    annual_rate_percent: f64,
    months: u32,
) -> Result<LoanReport, ToolError> {
    let principal = require_positive("principal", principal)?;
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(ToolError::InvalidArgument("rate must not be negative".to_string()));
    }
    if months == 0 {
        return Err(ToolError::InvalidArgument("term must be at least one month".to_string()));
    }

    let n = months as f64;
    let i = annual_rate_percent / 1200.0;
    let payment = if i == 0.0 {
        principal / n
    } else {
        principal * i / (1.0 - (1.0 + i).powf(-n))
    };
    let total = payment * n;
    Ok(LoanReport {
        principal,
        annual_rate_percent,
        months,
        monthly_payment: round_to(payment, 2),
        total_paid: round_to(total, 2),
        total_interest: round_to(total - principal, 2),
    })
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ToolError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| ToolError::InvalidDate(format!("{} ({}), expected YYYY-MM-DD", raw.trim(), e)))
}

fn days_in_previous_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

pub fn age(birth: NaiveDate, on: NaiveDate) -> Result<AgeReport, ToolError> {
    if birth > on {
        return Err(ToolError::InvalidDate(format!(
            "birth date {} is after {}",
            birth, on
        )));
    }
    let mut years = on.year() - birth.year();
    let mut months = on.month() as i32 - birth.month() as i32;
    let mut days = on.day() as i32 - birth.day() as i32;
    if days < 0 {
        months -= 1;
        days += days_in_previous_month(on) as i32;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }
    Ok(AgeReport {
        years,
        months: months as u32,
        days: days as u32,
        total_days: (on - birth).num_days(),
    })
}

pub fn date_diff(from: NaiveDate, to: NaiveDate) -> DateDiffReport {
    let days = (to - from).num_days();
    DateDiffReport {
        from: from.to_string(),
        to: to.to_string(),
        days,
        weeks: round_to(days as f64 / 7.0, 2),
    }
}

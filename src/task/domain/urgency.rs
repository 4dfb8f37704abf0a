//! Urgency scoring for open tasks.
//!
//! The score starts from the task's impact weight, is scaled by how close
//! the due date is and grows with the number of whole business weeks the
//! task has been open.

use super::{
    ParseImpactError,
    calendar::{business_days_between, whole_business_weeks},
};
use chrono::NaiveDate;
use std::fmt;

/// Impact rating of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Impact {
    /// Labelled `Very High`.
    VeryHigh,
    /// Labelled `High`.
    High,
    /// Labelled `Medium`.
    Medium,
    /// Labelled `Low`.
    Low,
}

impl Impact {
    /// Returns the label used by the tracker's enum options.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Returns the base urgency contributed by this impact.
    #[must_use]
    pub const fn base_weight(self) -> f64 {
        match self {
            Self::VeryHigh => 20.0,
            Self::High => 10.0,
            Self::Medium => 2.0,
            Self::Low => 1.0,
        }
    }
}

impl TryFrom<&str> for Impact {
    type Error = ParseImpactError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Very High" => Ok(Self::VeryHigh),
            "High" => Ok(Self::High),
            "Medium" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            _ => Err(ParseImpactError(value.to_owned())),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computes the urgency of a task.
///
/// Labels are matched exactly. A missing or unrecognised impact scores `0`
/// without looking at either date, so an unrated task is never urgent.
#[must_use]
pub fn compute_urgency(
    due_on: Option<NaiveDate>,
    opened_on: Option<NaiveDate>,
    impact: Option<&str>,
    today: NaiveDate,
) -> f64 {
    let Some(impact) = impact.and_then(|label| Impact::try_from(label).ok()) else {
        return 0.0;
    };

    let mut urgency = impact.base_weight();
    if let Some(due) = due_on {
        urgency = scale(urgency, due_date_multiplier(business_days_between(today, due)));
    }
    if let Some(opened) = opened_on {
        urgency = add(urgency, open_weeks_bonus(business_days_between(opened, today)));
    }
    urgency
}

/// Multiplier applied for a signed business-day distance to the due date.
///
/// Bands are evaluated in order and the first match wins.
#[must_use]
pub fn due_date_multiplier(remaining_days: i64) -> f64 {
    match remaining_days {
        d if d < 0 => 5.0,
        0 => 3.0,
        1 => 2.0,
        2 => 1.5,
        3 => 1.2,
        4 => 1.1,
        d if d >= 10 => 0.8,
        // Never reached: the `>= 10` band above already covers 20. Moving it
        // above that band would change scores.
        20 => 0.5,
        _ => 1.0,
    }
}

/// Bonus added for the number of business days a task has been open.
///
/// One to nine whole weeks earn half a point each; every other week count,
/// including zero and negative counts from a future open date, earns a
/// tenth of a point each.
#[must_use]
pub fn open_weeks_bonus(open_business_days: i64) -> f64 {
    let weeks = whole_business_weeks(open_business_days);
    let per_week = if (1..10).contains(&weeks) { 0.5 } else { 0.1 };
    scale(as_score(weeks), per_week)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "week counts are far below 2^52 for any real calendar date"
)]
const fn as_score(weeks: i64) -> f64 {
    weeks as f64
}

#[expect(clippy::float_arithmetic, reason = "urgency is a fractional score")]
fn scale(value: f64, factor: f64) -> f64 {
    value * factor
}

#[expect(clippy::float_arithmetic, reason = "urgency is a fractional score")]
fn add(value: f64, bonus: f64) -> f64 {
    value + bonus
}

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::InputError;

/// A single loosely-typed input value as collected from a profile file or flag.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Snapshot fields before coercion. Every field is optional here; the
/// conversion into [`InputRecord`] decides what is missing or malformed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_score: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilization_percent: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_time_payments_percent: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_oldest_account_years: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_inquiries_last_12mo: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_accounts_last_12mo: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derogatory_marks: Option<RawValue>,
}

impl RawInput {
    /// Field names in declaration order.
    pub const FIELDS: [&'static str; 7] = [
        "current_score",
        "utilization_percent",
        "on_time_payments_percent",
        "age_oldest_account_years",
        "hard_inquiries_last_12mo",
        "new_accounts_last_12mo",
        "derogatory_marks",
    ];

    /// Look a field up by name.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Option<RawValue>> {
        match name {
            "current_score" => Some(&mut self.current_score),
            "utilization_percent" => Some(&mut self.utilization_percent),
            "on_time_payments_percent" => Some(&mut self.on_time_payments_percent),
            "age_oldest_account_years" => Some(&mut self.age_oldest_account_years),
            "hard_inquiries_last_12mo" => Some(&mut self.hard_inquiries_last_12mo),
            "new_accounts_last_12mo" => Some(&mut self.new_accounts_last_12mo),
            "derogatory_marks" => Some(&mut self.derogatory_marks),
            _ => None,
        }
    }

    /// Overlay `overrides` on top of `self`. Fields present in `overrides` win.
    pub fn merge(self, overrides: RawInput) -> RawInput {
        RawInput {
            current_score: overrides.current_score.or(self.current_score),
            utilization_percent: overrides.utilization_percent.or(self.utilization_percent),
            on_time_payments_percent: overrides
                .on_time_payments_percent
                .or(self.on_time_payments_percent),
            age_oldest_account_years: overrides
                .age_oldest_account_years
                .or(self.age_oldest_account_years),
            hard_inquiries_last_12mo: overrides
                .hard_inquiries_last_12mo
                .or(self.hard_inquiries_last_12mo),
            new_accounts_last_12mo: overrides
                .new_accounts_last_12mo
                .or(self.new_accounts_last_12mo),
            derogatory_marks: overrides.derogatory_marks.or(self.derogatory_marks),
        }
    }
}

/// Validated-type snapshot of a consumer's credit-relevant attributes.
///
/// Range checks (score within 300-850, percentages within 0-100) belong to
/// [`validate_input`](super::validate_input); the estimator trusts whatever
/// it is given.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct InputRecord {
    pub current_score: f64,
    pub utilization_percent: f64,
    pub on_time_payments_percent: f64,
    pub age_oldest_account_years: f64,
    pub hard_inquiries_last_12mo: u32,
    pub new_accounts_last_12mo: u32,
    pub derogatory_marks: u32,
}

impl TryFrom<RawInput> for InputRecord {
    type Error = InputError;

    /// Fields are coerced in declaration order; the first failure is returned.
    fn try_from(raw: RawInput) -> Result<Self, Self::Error> {
        Ok(InputRecord {
            current_score: float_field("current_score", raw.current_score)?,
            utilization_percent: float_field("utilization_percent", raw.utilization_percent)?,
            on_time_payments_percent: float_field(
                "on_time_payments_percent",
                raw.on_time_payments_percent,
            )?,
            age_oldest_account_years: float_field(
                "age_oldest_account_years",
                raw.age_oldest_account_years,
            )?,
            hard_inquiries_last_12mo: count_field(
                "hard_inquiries_last_12mo",
                raw.hard_inquiries_last_12mo,
            )?,
            new_accounts_last_12mo: count_field(
                "new_accounts_last_12mo",
                raw.new_accounts_last_12mo,
            )?,
            derogatory_marks: count_field("derogatory_marks", raw.derogatory_marks)?,
        })
    }
}

fn float_field(field: &'static str, value: Option<RawValue>) -> Result<f64, InputError> {
    let value = value.ok_or(InputError::MissingField { field })?;
    let parsed = match &value {
        RawValue::Number(n) => Some(*n),
        RawValue::Text(s) => s.trim().parse::<f64>().ok(),
    };

    match parsed {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(InputError::InvalidType {
            field,
            expected: "a number",
            found: value.to_string(),
        }),
    }
}

/// Counts truncate fractional numbers toward zero, like a numeric cast.
/// Text must spell a whole number.
fn count_field(field: &'static str, value: Option<RawValue>) -> Result<u32, InputError> {
    let value = value.ok_or(InputError::MissingField { field })?;
    let parsed = match &value {
        RawValue::Number(n) if n.is_finite() => {
            let whole = n.trunc();
            if (0.0..=f64::from(u32::MAX)).contains(&whole) {
                Some(whole as u32)
            } else {
                None
            }
        }
        RawValue::Number(_) => None,
        RawValue::Text(s) => s.trim().parse::<u32>().ok(),
    };

    parsed.ok_or_else(|| InputError::InvalidType {
        field,
        expected: "a non-negative whole number",
        found: value.to_string(),
    })
}

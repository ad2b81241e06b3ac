use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::{build_factors, score_range, ScoreRange};
use super::factors::Factor;
use super::impact::{
    age_impact, derogatory_impact, inquiries_impact, new_accounts_impact, payment_impact,
    utilization_impact,
};
use super::tips::select_tips;
use crate::input::{InputError, InputRecord, RawInput};

pub const DISCLAIMER: &str = "This is an educational estimate only and not a credit bureau score.";

/// Everything one estimate produces. Field names on the wire follow the
/// `estimated_new_score_range` / `factor_breakdown` shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EstimateResult {
    #[serde(rename = "estimated_new_score_range")]
    pub range: ScoreRange,
    #[serde(rename = "factor_breakdown")]
    pub factors: [Factor; 6],
    pub tips: Vec<String>,
    pub note: String,
}

/// Project a score range, factor breakdown and tips for one snapshot.
///
/// Pure: the same input always yields the same result.
pub fn estimate(input: &InputRecord) -> EstimateResult {
    let factors = build_factors([
        utilization_impact(input.utilization_percent),
        payment_impact(input.on_time_payments_percent),
        age_impact(input.age_oldest_account_years),
        inquiries_impact(input.hard_inquiries_last_12mo),
        new_accounts_impact(input.new_accounts_last_12mo),
        derogatory_impact(input.derogatory_marks),
    ]);
    let range = score_range(input, &factors);
    let tips = select_tips(input, &factors);

    debug!(
        low = range.low,
        mid = range.mid,
        high = range.high,
        tips = tips.len(),
        "estimated score range"
    );

    EstimateResult {
        range,
        factors,
        tips,
        note: DISCLAIMER.to_string(),
    }
}

/// Coerce a raw snapshot and estimate it. Fails without a partial result when
/// a field is missing or cannot be read as its numeric type.
pub fn estimate_raw(raw: RawInput) -> Result<EstimateResult, InputError> {
    let input = InputRecord::try_from(raw)?;
    Ok(estimate(&input))
}

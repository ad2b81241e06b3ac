use serde::{Deserialize, Serialize};

use super::factors::{Factor, FactorKind};
use crate::input::InputRecord;

pub const SCORE_FLOOR: i32 = 300;
pub const SCORE_CEILING: i32 = 850;

const BASE_UNCERTAINTY: i32 = 18;
const MAX_ACTIVITY_UNCERTAINTY: i64 = 16;

/// Projected score band. Always `SCORE_FLOOR <= low <= mid <= high <= SCORE_CEILING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreRange {
    pub low: i32,
    pub mid: i32,
    pub high: i32,
}

/// Pair impacts (in `FactorKind::ALL` order) with their factor.
pub fn build_factors(impacts: [i32; 6]) -> [Factor; 6] {
    std::array::from_fn(|i| Factor::new(FactorKind::ALL[i], impacts[i]))
}

/// Round half-to-even, then bound into the score scale.
pub fn clamp_score(value: f64) -> i32 {
    value
        .round_ties_even()
        .clamp(f64::from(SCORE_FLOOR), f64::from(SCORE_CEILING)) as i32
}

/// Half-width of the band: 18 plus recent credit-seeking activity, capped at 34.
pub fn uncertainty(hard_inquiries: u32, new_accounts: u32) -> i32 {
    let activity = i64::from(hard_inquiries) * 2 + i64::from(new_accounts);
    BASE_UNCERTAINTY + activity.min(MAX_ACTIVITY_UNCERTAINTY) as i32
}

/// Current score plus every impact, clamped.
pub fn projected_mid(current_score: f64, factors: &[Factor]) -> i32 {
    let total: i64 = factors.iter().map(|f| i64::from(f.impact)).sum();
    clamp_score(current_score + total as f64)
}

pub fn score_range(input: &InputRecord, factors: &[Factor]) -> ScoreRange {
    let mid = projected_mid(input.current_score, factors);
    let spread = uncertainty(input.hard_inquiries_last_12mo, input.new_accounts_last_12mo);

    ScoreRange {
        low: clamp_score(f64::from(mid - spread)),
        mid,
        high: clamp_score(f64::from(mid + spread)),
    }
}

pub mod engine;
pub mod estimate;
pub mod factors;
pub mod impact;
pub mod tips;

pub use engine::{
    build_factors, clamp_score, projected_mid, score_range, uncertainty, ScoreRange,
    SCORE_CEILING, SCORE_FLOOR,
};
pub use estimate::{estimate, estimate_raw, EstimateResult, DISCLAIMER};
pub use factors::{Effect, Factor, FactorKind};
pub use impact::{
    age_impact, derogatory_impact, inquiries_impact, new_accounts_impact, payment_impact,
    utilization_impact,
};
pub use tips::{select_tips, MAX_TIPS};

use super::record::InputRecord;
use crate::scoring::{SCORE_CEILING, SCORE_FLOOR};

/// Range-check an input snapshot before it is handed to the estimator.
/// Returns all validation errors at once (not just the first).
pub fn validate_input(input: &InputRecord) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let score_range = f64::from(SCORE_FLOOR)..=f64::from(SCORE_CEILING);
    if !score_range.contains(&input.current_score) {
        errors.push(format!(
            "current_score: must be between {} and {}, got {}",
            SCORE_FLOOR, SCORE_CEILING, input.current_score
        ));
    }

    if !(0.0..=100.0).contains(&input.utilization_percent) {
        errors.push(format!(
            "utilization_percent: must be between 0 and 100, got {}",
            input.utilization_percent
        ));
    }

    if !(0.0..=100.0).contains(&input.on_time_payments_percent) {
        errors.push(format!(
            "on_time_payments_percent: must be between 0 and 100, got {}",
            input.on_time_payments_percent
        ));
    }

    if input.age_oldest_account_years < 0.0 {
        errors.push(format!(
            "age_oldest_account_years: cannot be negative, got {}",
            input.age_oldest_account_years
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

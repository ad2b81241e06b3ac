//! Piecewise mappings from a raw credit metric to a signed score impact.
//!
//! Bucket tables are scanned in order and the first match wins, the same way
//! a list of range buckets is applied. Inputs outside the documented domain
//! (negative percentages, NaN) are the caller's problem.

/// Utilization upper bounds (inclusive) and their impact.
const UTILIZATION_BUCKETS: [(f64, i32); 4] = [(10.0, 22), (30.0, 10), (50.0, -8), (75.0, -26)];
const UTILIZATION_OTHERWISE: i32 = -45;

/// On-time payment lower bounds (inclusive) and their impact.
const PAYMENT_BUCKETS: [(f64, i32); 5] = [(99.5, 24), (98.0, 12), (96.0, 2), (94.0, -16), (90.0, -34)];
const PAYMENT_OTHERWISE: i32 = -60;

/// Oldest-account age lower bounds in years (inclusive) and their impact.
const AGE_BUCKETS: [(f64, i32); 3] = [(15.0, 16), (8.0, 9), (3.0, 2)];
const AGE_OTHERWISE: i32 = -10;

const INQUIRY_PENALTY: i64 = -4;
const INQUIRY_FLOOR: i64 = -20;

const NEW_ACCOUNT_PENALTY: i64 = -5;
const NEW_ACCOUNT_FLOOR: i64 = -25;

const SINGLE_DEROGATORY: i32 = -42;
const MULTIPLE_DEROGATORY: i32 = -82;

pub fn utilization_impact(percent: f64) -> i32 {
    first_match(&UTILIZATION_BUCKETS, |bound| percent <= bound).unwrap_or(UTILIZATION_OTHERWISE)
}

pub fn payment_impact(on_time_percent: f64) -> i32 {
    first_match(&PAYMENT_BUCKETS, |bound| on_time_percent >= bound).unwrap_or(PAYMENT_OTHERWISE)
}

pub fn age_impact(years: f64) -> i32 {
    first_match(&AGE_BUCKETS, |bound| years >= bound).unwrap_or(AGE_OTHERWISE)
}

/// -4 per hard inquiry, never below -20.
pub fn inquiries_impact(count: u32) -> i32 {
    linear_penalty(count, INQUIRY_PENALTY, INQUIRY_FLOOR)
}

/// -5 per new account, never below -25.
pub fn new_accounts_impact(count: u32) -> i32 {
    linear_penalty(count, NEW_ACCOUNT_PENALTY, NEW_ACCOUNT_FLOOR)
}

/// Tiered rather than linear: one mark costs -42, two or more cost -82.
pub fn derogatory_impact(count: u32) -> i32 {
    match count {
        0 => 0,
        1 => SINGLE_DEROGATORY,
        _ => MULTIPLE_DEROGATORY,
    }
}

fn first_match<F>(buckets: &[(f64, i32)], matches: F) -> Option<i32>
where
    F: Fn(f64) -> bool,
{
    buckets
        .iter()
        .find(|(bound, _)| matches(*bound))
        .map(|(_, impact)| *impact)
}

fn linear_penalty(count: u32, per_unit: i64, floor: i64) -> i32 {
    // Widened so large counts cannot overflow before the floor applies
    (per_unit * i64::from(count)).max(floor) as i32
}

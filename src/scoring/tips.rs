//! Tip selection: direct-condition rules, then the worst negative factors,
//! then a fixed generic set when nothing else applies.

use super::factors::{Factor, FactorKind};
use crate::input::InputRecord;

pub const MAX_TIPS: usize = 3;

const UTILIZATION_TIP: &str = "Lower card utilization below 30% (below 10% is even better).";
const PAYMENT_TIP: &str = "Improve payment consistency with autopay and reminders.";
const PAUSE_CREDIT_TIP: &str = "Avoid opening new credit lines for the next 6-12 months.";
const DEROGATORY_TIP: &str = "Address derogatory items and dispute inaccurate marks quickly.";
const KEEP_OPEN_TIP: &str = "Keep older accounts open to strengthen average account age.";

const INQUIRIES_FALLBACK: &str = "Limit hard credit pulls until score stabilizes.";
const NEW_ACCOUNTS_FALLBACK: &str = "Pause new accounts so recent-account drag can fade.";
const DEROGATORY_FALLBACK: &str =
    "Build clean recent history to reduce derogatory mark impact over time.";

const STATIC_TIPS: [&str; MAX_TIPS] = [
    "Keep utilization low and payments on time to preserve momentum.",
    "Review your credit reports regularly for accuracy.",
    "Use only the credit you need; stability helps scores.",
];

/// Pick up to three tips for `input` given its factor breakdown.
///
/// Direct rules fire in a fixed order and win over relevance: when more than
/// three fire, the later ones are dropped. Only when the direct pass leaves
/// room do negative factors (most negative first) fill the remaining slots.
/// The static set is used only if both passes produce nothing.
pub fn select_tips(input: &InputRecord, factors: &[Factor]) -> Vec<String> {
    let mut tips = direct_tips(input);
    if tips.len() >= MAX_TIPS {
        tips.truncate(MAX_TIPS);
        return tips;
    }

    fill_from_factors(&mut tips, factors);

    if tips.is_empty() {
        return STATIC_TIPS.iter().map(|tip| tip.to_string()).collect();
    }

    tips.truncate(MAX_TIPS);
    tips
}

fn direct_tips(input: &InputRecord) -> Vec<String> {
    let rules = [
        (input.utilization_percent > 30.0, UTILIZATION_TIP),
        (input.on_time_payments_percent < 99.0, PAYMENT_TIP),
        (
            input.hard_inquiries_last_12mo > 2 || input.new_accounts_last_12mo > 1,
            PAUSE_CREDIT_TIP,
        ),
        (input.derogatory_marks >= 1, DEROGATORY_TIP),
        (input.age_oldest_account_years < 5.0, KEEP_OPEN_TIP),
    ];

    rules
        .iter()
        .filter(|(fires, _)| *fires)
        .map(|(_, tip)| tip.to_string())
        .collect()
}

fn fill_from_factors(tips: &mut Vec<String>, factors: &[Factor]) {
    let mut negatives: Vec<&Factor> = factors.iter().filter(|f| f.hurts()).collect();
    // Stable: ties keep breakdown order
    negatives.sort_by_key(|f| f.impact);

    for factor in negatives {
        if tips.len() >= MAX_TIPS {
            break;
        }
        let candidate = factor_tip(factor);
        if !tips.contains(&candidate) {
            tips.push(candidate);
        }
    }
}

fn factor_tip(factor: &Factor) -> String {
    match factor.kind {
        FactorKind::HardInquiries => INQUIRIES_FALLBACK.to_string(),
        FactorKind::NewAccounts => NEW_ACCOUNTS_FALLBACK.to_string(),
        FactorKind::DerogatoryMarks => DEROGATORY_FALLBACK.to_string(),
        other => format!(
            "Improve {} to support score growth.",
            other.label().to_lowercase()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::build_factors;
    use std::collections::HashSet;

    fn quiet_input() -> InputRecord {
        InputRecord {
            current_score: 700.0,
            utilization_percent: 5.0,
            on_time_payments_percent: 100.0,
            age_oldest_account_years: 20.0,
            hard_inquiries_last_12mo: 0,
            new_accounts_last_12mo: 0,
            derogatory_marks: 0,
        }
    }

    #[test]
    fn test_static_fallback_when_nothing_applies() {
        let factors = build_factors([22, 24, 16, 0, 0, 0]);
        let tips = select_tips(&quiet_input(), &factors);
        assert_eq!(tips, STATIC_TIPS.to_vec());
    }

    #[test]
    fn test_direct_pass_truncates_in_rule_order() {
        let input = InputRecord {
            utilization_percent: 95.0,
            on_time_payments_percent: 85.0,
            age_oldest_account_years: 1.0,
            hard_inquiries_last_12mo: 5,
            new_accounts_last_12mo: 3,
            derogatory_marks: 2,
            ..quiet_input()
        };
        let factors = build_factors([-45, -60, -10, -20, -25, -82]);
        let tips = select_tips(&input, &factors);
        assert_eq!(tips, vec![UTILIZATION_TIP, PAYMENT_TIP, PAUSE_CREDIT_TIP]);
    }

    #[test]
    fn test_exactly_three_direct_tips_skip_fallback() {
        let input = InputRecord {
            utilization_percent: 40.0,
            on_time_payments_percent: 97.0,
            derogatory_marks: 1,
            ..quiet_input()
        };
        let factors = build_factors([-8, 2, 16, 0, 0, -42]);
        let tips = select_tips(&input, &factors);
        assert_eq!(tips, vec![UTILIZATION_TIP, PAYMENT_TIP, DEROGATORY_TIP]);
    }

    #[test]
    fn test_fallback_ranks_most_negative_first() {
        // One direct tip (derogatory); fallback fills from the worst factors
        let input = InputRecord {
            utilization_percent: 30.0,
            on_time_payments_percent: 99.2,
            hard_inquiries_last_12mo: 2,
            new_accounts_last_12mo: 1,
            derogatory_marks: 1,
            ..quiet_input()
        };
        let factors = build_factors([10, 12, 16, -8, -5, -42]);
        let tips = select_tips(&input, &factors);
        assert_eq!(
            tips,
            vec![DEROGATORY_TIP, DEROGATORY_FALLBACK, INQUIRIES_FALLBACK]
        );
    }

    #[test]
    fn test_fallback_generic_wording_lowercases_name() {
        // No direct rule fires; only the age factor is negative
        let factors = build_factors([22, 24, -10, 0, 0, 0]);
        let tips = select_tips(&quiet_input(), &factors);
        assert_eq!(
            tips,
            vec!["Improve oldest account age to support score growth.".to_string()]
        );
    }

    #[test]
    fn test_fallback_ties_keep_breakdown_order() {
        let factors = build_factors([-20, 0, 0, -20, -20, 0]);
        let tips = select_tips(&quiet_input(), &factors);
        assert_eq!(
            tips,
            vec![
                "Improve utilization to support score growth.".to_string(),
                INQUIRIES_FALLBACK.to_string(),
                NEW_ACCOUNTS_FALLBACK.to_string(),
            ]
        );
    }

    #[test]
    fn test_fallback_skips_duplicate_text() {
        let mut tips = vec![INQUIRIES_FALLBACK.to_string()];
        let factors = build_factors([0, 0, 0, -12, 0, 0]);
        fill_from_factors(&mut tips, &factors);
        assert_eq!(tips, vec![INQUIRIES_FALLBACK.to_string()]);
    }

    #[test]
    fn test_partial_result_not_padded_with_static_tips() {
        let input = InputRecord {
            age_oldest_account_years: 4.0,
            ..quiet_input()
        };
        let factors = build_factors([22, 24, 2, 0, 0, 0]);
        let tips = select_tips(&input, &factors);
        assert_eq!(tips, vec![KEEP_OPEN_TIP.to_string()]);
    }

    #[test]
    fn test_pause_rule_triggers_on_either_count() {
        let inquiries = InputRecord {
            hard_inquiries_last_12mo: 3,
            ..quiet_input()
        };
        assert_eq!(direct_tips(&inquiries), vec![PAUSE_CREDIT_TIP]);

        let accounts = InputRecord {
            new_accounts_last_12mo: 2,
            ..quiet_input()
        };
        assert_eq!(direct_tips(&accounts), vec![PAUSE_CREDIT_TIP]);

        let neither = InputRecord {
            hard_inquiries_last_12mo: 2,
            new_accounts_last_12mo: 1,
            ..quiet_input()
        };
        assert!(direct_tips(&neither).is_empty());
    }

    #[test]
    fn test_tips_bounded_and_unique() {
        let utilizations = [5.0, 31.0, 80.0];
        let on_time = [100.0, 97.0, 80.0];
        let counts = [0u32, 1, 3, 6];

        for &util in &utilizations {
            for &paid in &on_time {
                for &count in &counts {
                    let input = InputRecord {
                        utilization_percent: util,
                        on_time_payments_percent: paid,
                        hard_inquiries_last_12mo: count,
                        new_accounts_last_12mo: count,
                        derogatory_marks: count,
                        age_oldest_account_years: f64::from(count),
                        ..quiet_input()
                    };
                    let factors = build_factors([
                        crate::scoring::utilization_impact(util),
                        crate::scoring::payment_impact(paid),
                        crate::scoring::age_impact(f64::from(count)),
                        crate::scoring::inquiries_impact(count),
                        crate::scoring::new_accounts_impact(count),
                        crate::scoring::derogatory_impact(count),
                    ]);
                    let tips = select_tips(&input, &factors);
                    assert!((1..=MAX_TIPS).contains(&tips.len()));
                    let unique: HashSet<&String> = tips.iter().collect();
                    assert_eq!(unique.len(), tips.len());
                }
            }
        }
    }
}

use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::scoring::{Effect, EstimateResult, Factor, ScoreRange};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format an impact with an explicit sign for non-negative values ("+10", "0" -> "+0", "-8")
pub fn format_impact(impact: i32) -> String {
    if impact >= 0 {
        format!("+{}", impact)
    } else {
        impact.to_string()
    }
}

/// "Estimated score range: 600 - 646 (mid: 623)"
pub fn format_range(range: &ScoreRange) -> String {
    format!(
        "Estimated score range: {} - {} (mid: {})",
        range.low, range.high, range.mid
    )
}

/// "Utilization: -8 (hurts)"
fn format_factor(factor: &Factor, use_colors: bool) -> String {
    let impact = format_impact(factor.impact);
    if use_colors {
        let impact = match factor.effect {
            Effect::Helps => impact.green().to_string(),
            Effect::Hurts => impact.red().to_string(),
        };
        format!("{}: {} ({})", factor.name(), impact, factor.effect.dimmed())
    } else {
        format!("{}: {} ({})", factor.name(), impact, factor.effect)
    }
}

/// Full human-readable report: range, factor breakdown, numbered tips, note.
pub fn format_result(result: &EstimateResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let range = format_range(&result.range);
    if use_colors {
        lines.push(range.bold().to_string());
    } else {
        lines.push(range);
    }

    lines.push(String::new());
    lines.push(heading("Factors", use_colors));
    for factor in &result.factors {
        lines.push(format!("  {}", format_factor(factor, use_colors)));
    }

    lines.push(String::new());
    lines.push(heading("Tips", use_colors));
    for (idx, tip) in result.tips.iter().enumerate() {
        lines.push(format!("  {}. {}", idx + 1, tip));
    }

    lines.push(String::new());
    if use_colors {
        lines.push(result.note.dimmed().to_string());
    } else {
        lines.push(result.note.clone());
    }

    lines.join("\n")
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}:", text.underline())
    } else {
        format!("{}:", text)
    }
}

/// Plain shareable text block (no colors), suitable for pasting elsewhere.
pub fn format_summary(result: &EstimateResult) -> String {
    let mut lines = vec![
        "Credit Score Simulator".to_string(),
        format!(
            "Range: {}-{} (mid {})",
            result.range.low, result.range.high, result.range.mid
        ),
        "Factors:".to_string(),
    ];
    lines.extend(
        result
            .factors
            .iter()
            .map(|f| format!("- {}: {}", f.name(), format_impact(f.impact))),
    );
    lines.push("Tips:".to_string());
    lines.extend(result.tips.iter().map(|t| format!("- {}", t)));
    lines.push("Estimates only. Not financial advice.".to_string());

    lines.join("\n")
}

/// Pretty-printed JSON of the whole result.
pub fn format_json(result: &EstimateResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputRecord;
    use crate::scoring::estimate;

    fn sample_result() -> EstimateResult {
        estimate(&InputRecord {
            current_score: 640.0,
            utilization_percent: 45.0,
            on_time_payments_percent: 97.0,
            age_oldest_account_years: 4.0,
            hard_inquiries_last_12mo: 2,
            new_accounts_last_12mo: 1,
            derogatory_marks: 0,
        })
    }

    #[test]
    fn test_format_impact_signs() {
        assert_eq!(format_impact(12), "+12");
        assert_eq!(format_impact(0), "+0");
        assert_eq!(format_impact(-42), "-42");
    }

    #[test]
    fn test_format_range() {
        let range = ScoreRange {
            low: 600,
            mid: 623,
            high: 646,
        };
        assert_eq!(
            format_range(&range),
            "Estimated score range: 600 - 646 (mid: 623)"
        );
    }

    #[test]
    fn test_format_result_plain() {
        let result = format_result(&sample_result(), false);
        assert!(result.starts_with("Estimated score range: 600 - 646 (mid: 623)"));
        assert!(result.contains("  Utilization: -8 (hurts)"));
        assert!(result.contains("  On-time payment history: +2 (helps)"));
        assert!(result.contains("  Derogatory marks: +0 (helps)"));
        assert!(result.contains("  1. Lower card utilization below 30%"));
        assert!(result.contains("  3. Keep older accounts open"));
        assert!(result.ends_with(crate::scoring::DISCLAIMER));
    }

    #[test]
    fn test_format_result_plain_has_no_escape_codes() {
        let result = format_result(&sample_result(), false);
        assert!(!result.contains('\u{1b}'));
    }

    #[test]
    fn test_format_result_colored_keeps_text() {
        let result = format_result(&sample_result(), true);
        assert!(result.contains('\u{1b}'));
        assert!(result.contains("Utilization"));
        assert!(result.contains("-8"));
    }

    #[test]
    fn test_format_summary() {
        let summary = format_summary(&sample_result());
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "Credit Score Simulator");
        assert_eq!(lines[1], "Range: 600-646 (mid 623)");
        assert_eq!(lines[2], "Factors:");
        assert_eq!(lines[3], "- Utilization: -8");
        assert_eq!(lines[8], "- Derogatory marks: +0");
        assert_eq!(lines[9], "Tips:");
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[13], "Estimates only. Not financial advice.");
    }

    #[test]
    fn test_format_json_parses_back() {
        let result = sample_result();
        let json = format_json(&result).unwrap();
        let parsed: EstimateResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}

use serde::{Deserialize, Serialize};

use crate::input::RawInput;

/// A saved snapshot, loaded from YAML.
///
/// Example YAML:
/// ```yaml
/// name: baseline
/// snapshot:
///   current_score: 690
///   utilization_percent: 42
///   on_time_payments_percent: 98.5
///   age_oldest_account_years: 6
///   hard_inquiries_last_12mo: 1
///   new_accounts_last_12mo: 0
///   derogatory_marks: 0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Any subset of the input fields; the rest can come from flags
    #[serde(default)]
    pub snapshot: RawInput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RawValue;

    #[test]
    fn test_full_profile_parse() {
        let yaml = r#"
name: baseline
snapshot:
  current_score: 690
  utilization_percent: 42
  on_time_payments_percent: 98.5
  age_oldest_account_years: 6
  hard_inquiries_last_12mo: 1
  new_accounts_last_12mo: 0
  derogatory_marks: 0
"#;
        let profile: Profile = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(profile.name.as_deref(), Some("baseline"));
        assert_eq!(profile.snapshot.current_score, Some(RawValue::Number(690.0)));
        assert_eq!(
            profile.snapshot.on_time_payments_percent,
            Some(RawValue::Number(98.5))
        );
    }

    #[test]
    fn test_partial_profile_parse() {
        let yaml = r#"
snapshot:
  utilization_percent: "35"
"#;
        let profile: Profile = serde_saphyr::from_str(yaml).unwrap();
        assert!(profile.name.is_none());
        assert_eq!(
            profile.snapshot.utilization_percent,
            Some(RawValue::Text("35".to_string()))
        );
        assert!(profile.snapshot.current_score.is_none());
    }

    #[test]
    fn test_empty_profile_parse() {
        let profile: Profile = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
snapshot:
  income: 50000
"#;
        assert!(serde_saphyr::from_str::<Profile>(yaml).is_err());
    }

    #[test]
    fn test_profile_serde_roundtrip() {
        let profile = Profile {
            name: Some("after payoff".to_string()),
            snapshot: RawInput {
                current_score: Some(RawValue::Number(702.0)),
                derogatory_marks: Some(RawValue::Number(1.0)),
                ..Default::default()
            },
        };
        let yaml = serde_saphyr::to_string(&profile).unwrap();
        let parsed: Profile = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(profile, parsed);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six scored factors, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum FactorKind {
    #[serde(rename = "Utilization")]
    Utilization,
    #[serde(rename = "On-time payment history")]
    PaymentHistory,
    #[serde(rename = "Oldest account age")]
    AccountAge,
    #[serde(rename = "Hard inquiries")]
    HardInquiries,
    #[serde(rename = "New accounts")]
    NewAccounts,
    #[serde(rename = "Derogatory marks")]
    DerogatoryMarks,
}

impl FactorKind {
    pub const ALL: [FactorKind; 6] = [
        FactorKind::Utilization,
        FactorKind::PaymentHistory,
        FactorKind::AccountAge,
        FactorKind::HardInquiries,
        FactorKind::NewAccounts,
        FactorKind::DerogatoryMarks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FactorKind::Utilization => "Utilization",
            FactorKind::PaymentHistory => "On-time payment history",
            FactorKind::AccountAge => "Oldest account age",
            FactorKind::HardInquiries => "Hard inquiries",
            FactorKind::NewAccounts => "New accounts",
            FactorKind::DerogatoryMarks => "Derogatory marks",
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a factor pushes the projection up or down. Zero counts as helping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Helps,
    Hurts,
}

impl Effect {
    pub fn from_impact(impact: i32) -> Self {
        if impact >= 0 {
            Effect::Helps
        } else {
            Effect::Hurts
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Helps => f.write_str("helps"),
            Effect::Hurts => f.write_str("hurts"),
        }
    }
}

/// One line of the factor breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Factor {
    #[serde(rename = "factor")]
    pub kind: FactorKind,
    pub impact: i32,
    pub effect: Effect,
}

impl Factor {
    /// Build a factor; the effect label is always derived from the impact sign.
    pub fn new(kind: FactorKind, impact: i32) -> Self {
        Self {
            kind,
            impact,
            effect: Effect::from_impact(impact),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.label()
    }

    pub fn hurts(&self) -> bool {
        self.impact < 0
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Three-tier level used by the Maslach sub-scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

/// Four-tier severity shared by the percentage and summed inventories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Low,
    Moderate,
    High,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Color marker shown next to the tier.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Low => "🟢",
            Severity::Moderate => "🟡",
            Severity::High => "🟠",
            Severity::Critical => "🔴",
        }
    }

    /// High and critical tiers trigger recommendation blocks.
    pub fn is_elevated(self) -> bool {
        matches!(self, Severity::High | Severity::Critical)
    }
}

/// Overall Maslach verdict derived from the EE and DP levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MaslachVerdict {
    Critical,
    Elevated,
    Normal,
}

impl MaslachVerdict {
    pub fn label(self) -> &'static str {
        match self {
            MaslachVerdict::Critical => "critical level of IT burnout",
            MaslachVerdict::Elevated => "elevated burnout risk",
            MaslachVerdict::Normal => "normal level, minimal risk",
        }
    }
}

/// Heck-Hess total score bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DepressionLevel {
    Normal,
    Subdepression,
    ModerateDepression,
    MarkedDepression,
    SevereDepression,
}

impl DepressionLevel {
    pub fn label(self) -> &'static str {
        match self {
            DepressionLevel::Normal => "normal",
            DepressionLevel::Subdepression => "subdepression",
            DepressionLevel::ModerateDepression => "moderate depression",
            DepressionLevel::MarkedDepression => "marked depression",
            DepressionLevel::SevereDepression => "severe depression",
        }
    }
}

/// Burnout risk derived from the Heck-Hess burnout scale alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BurnoutRisk {
    Low,
    Elevated,
    High,
    Critical,
}

impl BurnoutRisk {
    pub fn label(self) -> &'static str {
        match self {
            BurnoutRisk::Low => "low",
            BurnoutRisk::Elevated => "elevated",
            BurnoutRisk::High => "high",
            BurnoutRisk::Critical => "critical",
        }
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::levels::{BurnoutRisk, DepressionLevel, Level, MaslachVerdict, Severity};
use super::scales::{HeckHessScale, MaslachScale, Phase};
use super::test_type::TestType;

/// The output of one scoring pass.
///
/// Serialized as an envelope tagged with `test_type`, the engine output under
/// `scores`, and per-variant projections (`interpretation` for Maslach,
/// `phases`/`percentages` for Boyko). History entries persist this shape
/// verbatim, so renaming a field here is a breaking change for stored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "test_type", rename_all = "snake_case")]
#[ts(export)]
pub enum ResultRecord {
    Maslach {
        scores: MaslachScores,
        interpretation: MaslachInterpretation,
    },
    Boyko {
        scores: BoykoScores,
        phases: BTreeMap<Phase, u32>,
        percentages: BTreeMap<Phase, f64>,
    },
    HeckHess {
        scores: HeckHessScores,
    },
    Quick {
        scores: QuickScores,
    },
}

impl ResultRecord {
    pub fn test_type(&self) -> TestType {
        match self {
            ResultRecord::Maslach { .. } => TestType::Maslach,
            ResultRecord::Boyko { .. } => TestType::Boyko,
            ResultRecord::HeckHess { .. } => TestType::HeckHess,
            ResultRecord::Quick { .. } => TestType::Quick,
        }
    }

    /// The value trends are computed from. Lower is better for every variant.
    pub fn primary_value(&self) -> f64 {
        match self {
            ResultRecord::Maslach { scores, .. } => f64::from(scores.emotional_exhaustion),
            ResultRecord::Boyko { scores, .. } => scores.total_percentage,
            ResultRecord::HeckHess { scores } => f64::from(scores.total_score),
            ResultRecord::Quick { scores } => f64::from(scores.total),
        }
    }

    /// Recommendation blocks carried by the record. Empty for the variants
    /// whose recommendations are looked up by class instead.
    pub fn recommendations(&self) -> &[RecommendationBlock] {
        match self {
            ResultRecord::HeckHess { scores } => &scores.recommendations,
            ResultRecord::Quick { scores } => &scores.recommendations,
            ResultRecord::Maslach { .. } | ResultRecord::Boyko { .. } => &[],
        }
    }
}

/// Raw Maslach sub-scale totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MaslachScores {
    #[serde(rename = "EE")]
    pub emotional_exhaustion: u32,
    #[serde(rename = "DP")]
    pub depersonalization: u32,
    #[serde(rename = "PA")]
    pub personal_accomplishment: u32,
}

impl MaslachScores {
    pub fn get(&self, scale: MaslachScale) -> u32 {
        match scale {
            MaslachScale::EmotionalExhaustion => self.emotional_exhaustion,
            MaslachScale::Depersonalization => self.depersonalization,
            MaslachScale::PersonalAccomplishment => self.personal_accomplishment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleLevel {
    pub score: u32,
    pub level: Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MaslachInterpretation {
    #[serde(rename = "EE")]
    pub emotional_exhaustion: ScaleLevel,
    #[serde(rename = "DP")]
    pub depersonalization: ScaleLevel,
    #[serde(rename = "PA")]
    pub personal_accomplishment: ScaleLevel,
    pub overall: MaslachVerdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BoykoScores {
    /// Raw points per phase.
    pub phases: BTreeMap<Phase, u32>,
    pub phase_questions_count: BTreeMap<Phase, u32>,
    pub max_possible_scores: BTreeMap<Phase, u32>,
    /// Share of the achievable points, 0–100, unrounded.
    pub percentages: BTreeMap<Phase, f64>,
    pub phase_levels: BTreeMap<Phase, Severity>,
    /// Phase with the highest percentage; also the recommendation focus.
    pub indicator_phase: Phase,
    /// Mean of the nonzero phase percentages.
    pub total_percentage: f64,
    pub overall: String,
    pub color: String,
    pub risk_level: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleResult {
    pub score: u32,
    pub level: Severity,
    pub description: String,
    pub max_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HeckHessScores {
    pub total_score: u32,
    pub overall_level: DepressionLevel,
    pub interpretation: String,
    pub color: String,
    pub scales: BTreeMap<HeckHessScale, ScaleResult>,
    pub burnout_risk: BurnoutRisk,
    pub recommendations: Vec<RecommendationBlock>,
    pub max_total_score: u32,
    pub questions_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuickScores {
    pub total: u32,
    pub max: u32,
    pub level: Severity,
    pub risk: String,
    pub color: String,
    pub recommendations: Vec<RecommendationBlock>,
}

/// A fixed group of recommendation lines selected as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationBlock {
    pub id: String,
    pub lines: Vec<String>,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Maslach sub-scales. Serialized with the short codes the history format uses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum MaslachScale {
    #[serde(rename = "EE")]
    EmotionalExhaustion,
    #[serde(rename = "DP")]
    Depersonalization,
    #[serde(rename = "PA")]
    PersonalAccomplishment,
}

impl MaslachScale {
    pub const ALL: [MaslachScale; 3] = [
        MaslachScale::EmotionalExhaustion,
        MaslachScale::Depersonalization,
        MaslachScale::PersonalAccomplishment,
    ];

    pub fn code(self) -> &'static str {
        match self {
            MaslachScale::EmotionalExhaustion => "EE",
            MaslachScale::Depersonalization => "DP",
            MaslachScale::PersonalAccomplishment => "PA",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MaslachScale::EmotionalExhaustion => "Emotional exhaustion",
            MaslachScale::Depersonalization => "Depersonalization",
            MaslachScale::PersonalAccomplishment => "Personal accomplishment",
        }
    }
}

/// Boyko burnout phases, in the order they develop.
///
/// The derived `Ord` is the catalog order and is what breaks ties when
/// picking the indicator phase.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    Tension,
    Resistance,
    Exhaustion,
    Deformation,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Tension,
        Phase::Resistance,
        Phase::Exhaustion,
        Phase::Deformation,
    ];

    /// 1-based phase number.
    pub fn number(self) -> u8 {
        match self {
            Phase::Tension => 1,
            Phase::Resistance => 2,
            Phase::Exhaustion => 3,
            Phase::Deformation => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Tension => "Tension",
            Phase::Resistance => "Resistance",
            Phase::Exhaustion => "Exhaustion",
            Phase::Deformation => "Deformation",
        }
    }
}

/// Heck-Hess symptom scales.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HeckHessScale {
    Depression,
    Burnout,
    Anxiety,
}

impl HeckHessScale {
    pub const ALL: [HeckHessScale; 3] = [
        HeckHessScale::Depression,
        HeckHessScale::Burnout,
        HeckHessScale::Anxiety,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HeckHessScale::Depression => "Depression",
            HeckHessScale::Burnout => "Burnout",
            HeckHessScale::Anxiety => "Anxiety",
        }
    }
}

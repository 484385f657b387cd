use std::sync::LazyLock;

use burncheck_core::models::MaslachScale::{
    Depersonalization as DP, EmotionalExhaustion as EE, PersonalAccomplishment as PA,
};
use burncheck_core::models::{
    Level, MaslachInterpretation, MaslachScale, MaslachScores, MaslachVerdict, ResultRecord,
    ScaleLevel, TestType,
};

use super::sum_ratings;
use crate::answers::Ratings;
use crate::bands::BandTable;
use crate::catalog::{numbered, AnswerFormat, AnswerRange, Catalog, SubscaleInfo};
use crate::error::InstrumentError;

/// Maslach Burnout Inventory, shortened for IT specialists.
/// 12 items rated 0 (never) to 6 (every day); EE ×4, DP ×3, PA ×5.
pub fn catalog() -> &'static Catalog<MaslachScale> {
    static CATALOG: LazyLock<Catalog<MaslachScale>> = LazyLock::new(|| Catalog {
        test_type: TestType::Maslach,
        name: TestType::Maslach.display_name().to_string(),
        format: AnswerFormat::Rating {
            range: AnswerRange { min: 0, max: 6 },
        },
        subscales: vec![
            subscale(EE, "Feeling drained and depleted by work"),
            subscale(DP, "Cynical, detached attitude towards colleagues and users"),
            subscale(PA, "Sense of competence and achievement; higher is better"),
        ],
        questions: numbered(&[
            ("I feel emotionally drained by my work.", EE, false),
            (
                "I have become more indifferent to the problems of colleagues and users since I took this job.",
                DP,
                false,
            ),
            ("I deal effectively with the technical problems that land on my desk.", PA, false),
            (
                "I feel tired when I get up and have to face another day of tickets and deadlines.",
                EE,
                false,
            ),
            ("I treat some teammates or clients as tickets rather than people.", DP, false),
            ("I feel I have a positive influence on the product and the people around me.", PA, false),
            ("I finish the workday with energy left for my own life.", EE, true),
            ("I feel energized when I crack a hard problem.", PA, false),
            ("I don't really care what happens to some of the people I build software for.", DP, false),
            ("I feel my work changes nothing that matters.", PA, true),
            ("Working with people and code all day is a real strain for me.", EE, false),
            ("I have accomplished many worthwhile things in this job.", PA, false),
        ]),
    });
    &CATALOG
}

fn subscale(id: MaslachScale, description: &str) -> SubscaleInfo<MaslachScale> {
    SubscaleInfo {
        id,
        name: id.name().to_string(),
        description: Some(description.to_string()),
        characteristics: Vec::new(),
        tiers: None,
    }
}

/// Level thresholds per sub-scale.
#[derive(Debug, Clone)]
pub struct MaslachRubric {
    pub emotional_exhaustion: BandTable<Level>,
    pub depersonalization: BandTable<Level>,
    /// Inverted: a higher total is more favorable.
    pub personal_accomplishment: BandTable<Level>,
}

impl MaslachRubric {
    pub fn level(&self, scale: MaslachScale, score: u32) -> Level {
        let table = match scale {
            EE => &self.emotional_exhaustion,
            DP => &self.depersonalization,
            PA => &self.personal_accomplishment,
        };
        *table.classify(f64::from(score))
    }
}

pub fn rubric() -> &'static MaslachRubric {
    static RUBRIC: LazyLock<MaslachRubric> = LazyLock::new(|| MaslachRubric {
        emotional_exhaustion: BandTable::new(Level::Low)
            .band(12.0, Level::Medium)
            .band(19.0, Level::High),
        depersonalization: BandTable::new(Level::Low)
            .band(5.0, Level::Medium)
            .band(10.0, Level::High),
        personal_accomplishment: BandTable::new(Level::High)
            .band(19.0, Level::Medium)
            .band(26.0, Level::Low),
    });
    &RUBRIC
}

/// Overall verdict from the EE and DP levels.
pub fn verdict(emotional_exhaustion: Level, depersonalization: Level) -> MaslachVerdict {
    match (emotional_exhaustion, depersonalization) {
        (Level::High, Level::High) => MaslachVerdict::Critical,
        (Level::High, _) | (_, Level::High) => MaslachVerdict::Elevated,
        _ => MaslachVerdict::Normal,
    }
}

pub fn score(answers: &Ratings) -> Result<ResultRecord, InstrumentError> {
    score_with(catalog(), rubric(), answers)
}

pub fn score_with(
    catalog: &Catalog<MaslachScale>,
    rubric: &MaslachRubric,
    answers: &Ratings,
) -> Result<ResultRecord, InstrumentError> {
    let totals = sum_ratings(catalog, answers)?;
    let total = |scale: MaslachScale| totals.get(&scale).copied().unwrap_or(0);

    let scores = MaslachScores {
        emotional_exhaustion: total(EE),
        depersonalization: total(DP),
        personal_accomplishment: total(PA),
    };
    let scale_level = |scale: MaslachScale| ScaleLevel {
        score: scores.get(scale),
        level: rubric.level(scale, scores.get(scale)),
    };
    let ee = scale_level(EE);
    let dp = scale_level(DP);
    let interpretation = MaslachInterpretation {
        emotional_exhaustion: ee,
        depersonalization: dp,
        personal_accomplishment: scale_level(PA),
        overall: verdict(ee.level, dp.level),
    };

    tracing::debug!(
        ee = scores.emotional_exhaustion,
        dp = scores.depersonalization,
        pa = scores.personal_accomplishment,
        overall = ?interpretation.overall,
        "scored maslach"
    );

    Ok(ResultRecord::Maslach {
        scores,
        interpretation,
    })
}

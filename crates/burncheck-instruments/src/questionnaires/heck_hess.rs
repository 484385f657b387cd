use std::collections::BTreeMap;
use std::sync::LazyLock;

use burncheck_core::models::HeckHessScale::{Anxiety, Burnout, Depression};
use burncheck_core::models::{
    BurnoutRisk, DepressionLevel, HeckHessScale, HeckHessScores, RecommendationBlock,
    ResultRecord, ScaleResult, TestType,
};

use super::{block, sum_ratings};
use crate::answers::Ratings;
use crate::bands::{BandTable, TierRange, TierRanges};
use crate::catalog::{numbered, AnswerFormat, AnswerRange, Catalog, SubscaleId, SubscaleInfo};
use crate::error::InstrumentError;

/// Heck-Hess symptom inventory, adapted for IT specialists.
/// 21 items rated 0 (never) to 3 (constantly): depression ×5, burnout ×11,
/// anxiety ×5. Maximum total 63.
pub fn catalog() -> &'static Catalog<HeckHessScale> {
    static CATALOG: LazyLock<Catalog<HeckHessScale>> = LazyLock::new(|| Catalog {
        test_type: TestType::HeckHess,
        name: TestType::HeckHess.display_name().to_string(),
        format: AnswerFormat::Rating {
            range: AnswerRange { min: 0, max: 3 },
        },
        subscales: vec![
            scale(
                Depression,
                "Low mood, loss of interest and pleasure",
                TierRanges {
                    low: TierRange::new(0, 3, "No significant depressive symptoms"),
                    moderate: TierRange::new(4, 7, "Occasional low mood"),
                    high: TierRange::new(8, 11, "Persistent low mood affecting work"),
                    severe: TierRange::new(12, 15, "Pronounced depressive symptoms"),
                },
            ),
            scale(
                Burnout,
                "Work-related exhaustion, detachment and reduced efficacy",
                TierRanges {
                    low: TierRange::new(0, 8, "Workload is under control"),
                    moderate: TierRange::new(9, 16, "First signs of work-related exhaustion"),
                    high: TierRange::new(17, 24, "Burnout is affecting your work and life"),
                    severe: TierRange::new(25, 33, "Severe burnout, recovery needs a break"),
                },
            ),
            scale(
                Anxiety,
                "Tension, worry and restlessness",
                TierRanges {
                    low: TierRange::new(0, 3, "Anxiety within normal limits"),
                    moderate: TierRange::new(4, 7, "Situational anxiety"),
                    high: TierRange::new(8, 11, "Persistent anxiety"),
                    severe: TierRange::new(12, 15, "Anxiety dominates your day"),
                },
            ),
        ],
        questions: numbered(&[
            ("I feel sad or down for no obvious reason.", Depression, false),
            ("After work I have no energy left for anything else.", Burnout, false),
            ("I worry that something will break in production.", Anxiety, false),
            ("I have lost interest in things that used to please me.", Depression, false),
            ("Standups and sprint planning feel pointless to me.", Burnout, false),
            ("I feel tense even when nothing urgent is happening.", Anxiety, false),
            ("I feel worthless or guilty about my work.", Depression, false),
            ("I keep postponing tasks I would once have done right away.", Burnout, false),
            ("My heart races when I see a message from my manager.", Anxiety, false),
            ("Mornings are the hardest part of my day.", Depression, false),
            ("I check work chat in the evenings and on weekends.", Burnout, false),
            ("I find it hard to sit still or relax.", Anxiety, false),
            ("I see little point in planning for the future.", Depression, false),
            ("Code review comments irritate me more than they should.", Burnout, false),
            ("I expect the worst from upcoming releases.", Anxiety, false),
            ("I feel that my work does not matter to anyone.", Burnout, false),
            ("I am too tired to learn new technologies.", Burnout, false),
            ("I make careless mistakes I would not have made a year ago.", Burnout, false),
            ("I dread opening my task tracker.", Burnout, false),
            ("I feel detached from my team.", Burnout, false),
            ("I dream about quitting without having another job lined up.", Burnout, false),
        ]),
    });
    &CATALOG
}

fn scale(id: HeckHessScale, description: &str, tiers: TierRanges) -> SubscaleInfo<HeckHessScale> {
    SubscaleInfo {
        id,
        name: id.name().to_string(),
        description: Some(description.to_string()),
        characteristics: Vec::new(),
        tiers: Some(tiers),
    }
}

/// One band of the total score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalBand {
    pub level: DepressionLevel,
    pub interpretation: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct HeckHessRubric {
    pub total_bands: BandTable<TotalBand>,
    /// Scale that drives the burnout risk tier.
    pub risk_scale: HeckHessScale,
    /// Risk cut points; independent of that scale's own tier ranges.
    pub burnout_risk: BandTable<BurnoutRisk>,
    /// Blocks appended when a scale reaches high or critical, in this order.
    pub recommendations: Vec<(HeckHessScale, RecommendationBlock)>,
}

pub fn rubric() -> &'static HeckHessRubric {
    static RUBRIC: LazyLock<HeckHessRubric> = LazyLock::new(|| HeckHessRubric {
        total_bands: BandTable::new(TotalBand {
            level: DepressionLevel::Normal,
            interpretation: "No significant signs of depression",
            color: "🟢",
        })
        .band(
            8.0,
            TotalBand {
                level: DepressionLevel::Subdepression,
                interpretation: "Mild depressive symptoms",
                color: "🟡",
            },
        )
        .band(
            13.0,
            TotalBand {
                level: DepressionLevel::ModerateDepression,
                interpretation: "Moderately expressed symptoms",
                color: "🟠",
            },
        )
        .band(
            19.0,
            TotalBand {
                level: DepressionLevel::MarkedDepression,
                interpretation: "A specialist consultation is recommended",
                color: "🔴",
            },
        )
        .band(
            25.0,
            TotalBand {
                level: DepressionLevel::SevereDepression,
                interpretation: "Urgent professional help is needed",
                color: "🔴",
            },
        ),
        risk_scale: Burnout,
        burnout_risk: BandTable::new(BurnoutRisk::Low)
            .band(17.0, BurnoutRisk::Elevated)
            .band(25.0, BurnoutRisk::High)
            .band(33.0, BurnoutRisk::Critical),
        recommendations: vec![
            (
                Burnout,
                block(
                    "heck_hess.burnout",
                    &[
                        "Cut your working hours and take a break",
                        "Talk to a psychologist or a coach",
                        "Discuss your workload with your manager",
                    ],
                ),
            ),
            (
                Depression,
                block(
                    "heck_hess.depression",
                    &[
                        "A consultation with a psychotherapist is recommended",
                        "Consider a vacation or a sabbatical",
                    ],
                ),
            ),
            (
                Anxiety,
                block(
                    "heck_hess.anxiety",
                    &[
                        "Relaxation and mindfulness techniques can help",
                        "Practice meditation to reduce anxiety",
                    ],
                ),
            ),
        ],
    });
    &RUBRIC
}

pub fn score(answers: &Ratings) -> Result<ResultRecord, InstrumentError> {
    score_with(catalog(), rubric(), answers)
}

pub fn score_with(
    catalog: &Catalog<HeckHessScale>,
    rubric: &HeckHessRubric,
    answers: &Ratings,
) -> Result<ResultRecord, InstrumentError> {
    let totals = sum_ratings(catalog, answers)?;
    let total_score: u32 = totals.values().sum();
    let band = rubric.total_bands.classify(f64::from(total_score));

    let max_answer = catalog.max_answer();
    let counts = catalog.questions_per_subscale();

    let mut scales = BTreeMap::new();
    for info in &catalog.subscales {
        let tiers = info
            .tiers
            .as_ref()
            .ok_or_else(|| InstrumentError::BandsNotConfigured {
                test_type: catalog.test_type,
                subscale: info.id.id_str().to_string(),
            })?;
        let score = totals.get(&info.id).copied().unwrap_or(0);
        let (level, description) = tiers.classify(score);
        scales.insert(
            info.id,
            ScaleResult {
                score,
                level,
                description: description.to_string(),
                max_score: counts.get(&info.id).copied().unwrap_or(0) * max_answer,
            },
        );
    }

    let risk_score = scales.get(&rubric.risk_scale).map_or(0, |s| s.score);
    let burnout_risk = *rubric.burnout_risk.classify(f64::from(risk_score));

    let recommendations: Vec<RecommendationBlock> = rubric
        .recommendations
        .iter()
        .filter(|(scale, _)| scales.get(scale).is_some_and(|r| r.level.is_elevated()))
        .map(|(_, block)| block.clone())
        .collect();

    tracing::debug!(
        total_score,
        level = ?band.level,
        ?burnout_risk,
        blocks = recommendations.len(),
        "scored heck-hess"
    );

    Ok(ResultRecord::HeckHess {
        scores: HeckHessScores {
            total_score,
            overall_level: band.level,
            interpretation: band.interpretation.to_string(),
            color: band.color.to_string(),
            scales,
            burnout_risk,
            recommendations,
            max_total_score: catalog.count() * max_answer,
            questions_count: catalog.count(),
        },
    })
}

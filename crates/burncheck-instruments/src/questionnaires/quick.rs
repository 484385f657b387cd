use std::sync::LazyLock;

use burncheck_core::models::{QuickScores, RecommendationBlock, ResultRecord, Severity, TestType};

use super::block;
use crate::bands::BandTable;
use crate::catalog::{numbered, AnswerFormat, AnswerRange, Catalog, SubscaleInfo, Total};
use crate::error::InstrumentError;

/// Ten-item quick burnout check, rated 0 (never) to 4 (always).
pub fn catalog() -> &'static Catalog<Total> {
    static CATALOG: LazyLock<Catalog<Total>> = LazyLock::new(|| Catalog {
        test_type: TestType::Quick,
        name: TestType::Quick.display_name().to_string(),
        format: AnswerFormat::Rating {
            range: AnswerRange { min: 0, max: 4 },
        },
        subscales: vec![SubscaleInfo {
            id: Total,
            name: "Total".to_string(),
            description: None,
            characteristics: Vec::new(),
            tiers: None,
        }],
        questions: numbered(&[
            ("I feel exhausted at the end of the workday.", Total, false),
            ("I find it hard to concentrate on tasks.", Total, false),
            ("I get irritated by colleagues or users.", Total, false),
            ("I think about work outside working hours.", Total, false),
            ("I have lost interest in new technologies.", Total, false),
            ("I feel my work is pointless.", Total, false),
            ("I have problems with sleep.", Total, false),
            ("I procrastinate more than usual.", Total, false),
            ("I feel physically tired (eyes, back, head).", Total, false),
            ("I want to change jobs or profession.", Total, false),
        ]),
    });
    &CATALOG
}

#[derive(Debug, Clone)]
pub struct QuickRubric {
    pub bands: BandTable<Severity>,
    /// A block is appended once the total exceeds its threshold. Thresholds
    /// ascend, so blocks only ever accumulate.
    pub recommendations: Vec<(u32, RecommendationBlock)>,
}

pub fn rubric() -> &'static QuickRubric {
    static RUBRIC: LazyLock<QuickRubric> = LazyLock::new(|| QuickRubric {
        bands: BandTable::new(Severity::Low)
            .band(11.0, Severity::Moderate)
            .band(21.0, Severity::High)
            .band(31.0, Severity::Critical),
        recommendations: vec![
            (
                20,
                block(
                    "quick.boundaries",
                    &[
                        "Set boundaries for your working hours",
                        "Take regular breaks away from the screen",
                        "Practice relaxation techniques",
                    ],
                ),
            ),
            (
                30,
                block(
                    "quick.escalate",
                    &[
                        "Consider taking a vacation",
                        "Reach out to a specialist",
                        "Discuss your workload with management",
                    ],
                ),
            ),
        ],
    });
    &RUBRIC
}

/// Risk sentence for a tier.
pub fn risk_text(level: Severity) -> &'static str {
    match level {
        Severity::Low => "Low risk of burnout in IT",
        Severity::Moderate => "Medium risk, prevention is recommended",
        Severity::High => "High risk, changes are needed",
        Severity::Critical => "Critical risk, urgent measures needed",
    }
}

pub fn score(answers: &[u8]) -> Result<ResultRecord, InstrumentError> {
    score_with(catalog(), rubric(), answers)
}

/// Answers arrive in question order; the i-th answer belongs to position i+1.
pub fn score_with(
    catalog: &Catalog<Total>,
    rubric: &QuickRubric,
    answers: &[u8],
) -> Result<ResultRecord, InstrumentError> {
    let mut total: u32 = 0;
    for (index, &answer) in answers.iter().enumerate() {
        catalog.get_question(index as u32 + 1)?;
        total += u32::from(answer);
    }

    let max_answer = catalog.max_answer();
    let level = *rubric.bands.classify(f64::from(total));
    let recommendations: Vec<RecommendationBlock> = rubric
        .recommendations
        .iter()
        .filter(|(threshold, _)| total > *threshold)
        .map(|(_, block)| block.clone())
        .collect();

    tracing::debug!(total, ?level, blocks = recommendations.len(), "scored quick");

    Ok(ResultRecord::Quick {
        scores: QuickScores {
            total,
            max: catalog.count() * max_answer,
            level,
            risk: risk_text(level).to_string(),
            color: level.color().to_string(),
            recommendations,
        },
    })
}

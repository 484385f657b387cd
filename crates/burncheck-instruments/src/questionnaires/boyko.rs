use std::collections::BTreeMap;
use std::sync::LazyLock;

use burncheck_core::models::Phase::{Deformation, Exhaustion, Resistance, Tension};
use burncheck_core::models::{BoykoScores, Phase, ResultRecord, Severity, TestType};

use super::percentage;
use crate::answers::{CategoricalAnswers, MAX_CATEGORICAL_POINTS};
use crate::bands::{quartile_severity, BandTable};
use crate::catalog::{numbered, AnswerFormat, Catalog, SubscaleInfo};
use crate::error::InstrumentError;

/// Boyko burnout phase inventory, adapted for IT specialists.
/// 20 yes/sometimes/no items, five per phase, interleaved.
pub fn catalog() -> &'static Catalog<Phase> {
    static CATALOG: LazyLock<Catalog<Phase>> = LazyLock::new(|| Catalog {
        test_type: TestType::Boyko,
        name: TestType::Boyko.display_name().to_string(),
        format: AnswerFormat::Categorical,
        subscales: vec![
            phase(
                Tension,
                "Early stage: anxiety and dissatisfaction build up around work",
                &[
                    "Constant worry about deadlines and production incidents",
                    "Dissatisfaction with yourself and your progress",
                    "Feeling trapped in the project or the company",
                    "Trouble switching off after work",
                ],
            ),
            phase(
                Resistance,
                "Emotional withdrawal: you start saving your energy by caring less",
                &[
                    "Selective emotional response to colleagues and users",
                    "Cynicism about product decisions and management",
                    "Cutting corners on code review and documentation",
                    "Avoiding meetings and communication",
                ],
            ),
            phase(
                Exhaustion,
                "Emotional deficit and psychosomatic symptoms",
                &[
                    "Emotional emptiness at the end of the day",
                    "Headaches, eye strain, back pain, poor sleep",
                    "Loss of interest in technology you used to enjoy",
                    "Working on autopilot",
                ],
            ),
            phase(
                Deformation,
                "Professional deformation: detachment becomes the default",
                &[
                    "Indifference to the quality of your own work",
                    "Depersonalized view of teammates and users",
                    "Loss of professional identity",
                    "Thinking about leaving the profession",
                ],
            ),
        ],
        questions: numbered(&[
            ("Unrealistic deadlines keep me on edge even outside working hours.", Tension, false),
            ("I answer colleagues' questions curtly just to get rid of them.", Resistance, false),
            ("By the evening I feel completely empty, with no emotions left.", Exhaustion, false),
            ("I no longer care whether the code I ship is any good.", Deformation, false),
            ("I am dissatisfied with how my career in IT is going.", Tension, false),
            ("I try to do only what is strictly in the ticket, nothing more.", Resistance, false),
            ("I get headaches, eye strain or back pain after a day at the screen.", Exhaustion, false),
            ("Users and their problems have become abstractions to me.", Deformation, false),
            ("I feel stuck in this project and see no way out.", Tension, false),
            ("I catch myself being cynical about every product decision.", Resistance, false),
            ("Technologies I used to enjoy no longer interest me.", Exhaustion, false),
            ("I have stopped feeling like a professional in my field.", Deformation, false),
            ("Thoughts about work keep me from falling asleep.", Tension, false),
            ("I skip team rituals and meetings whenever I can.", Resistance, false),
            ("I do my work mechanically, on autopilot.", Exhaustion, false),
            ("I seriously think about leaving IT altogether.", Deformation, false),
            ("Every new task or incident makes me anxious.", Tension, false),
            ("I save my energy by caring less about the team's results.", Resistance, false),
            ("I have lost the ability to rest even on weekends.", Exhaustion, false),
            ("Teammates feel to me like interchangeable resources.", Deformation, false),
        ]),
    });
    &CATALOG
}

fn phase(id: Phase, description: &str, characteristics: &[&str]) -> SubscaleInfo<Phase> {
    SubscaleInfo {
        id,
        name: id.name().to_string(),
        description: Some(description.to_string()),
        characteristics: characteristics.iter().map(|c| c.to_string()).collect(),
        tiers: None,
    }
}

/// Percentage cut points for the per-phase and overall tiers.
#[derive(Debug, Clone)]
pub struct BoykoRubric {
    pub phase_bands: BandTable<Severity>,
    pub overall_bands: BandTable<Severity>,
}

pub fn rubric() -> &'static BoykoRubric {
    static RUBRIC: LazyLock<BoykoRubric> = LazyLock::new(|| BoykoRubric {
        phase_bands: quartile_severity(),
        overall_bands: quartile_severity(),
    });
    &RUBRIC
}

/// Overall verdict sentence for a risk tier.
pub fn overall_text(risk: Severity) -> &'static str {
    match risk {
        Severity::Low => "Low burnout level. You are coping well with your workload.",
        Severity::Moderate => "Moderate burnout level. Prevention is recommended.",
        Severity::High => {
            "High burnout level. Intervention and changes to your work process are needed."
        }
        Severity::Critical => {
            "Critical burnout level. Urgent measures are needed; consider a break from work."
        }
    }
}

/// The phase with the highest percentage.
///
/// Ties go to the earliest phase (tension, resistance, exhaustion,
/// deformation): only a strictly greater percentage displaces the current
/// pick.
pub fn indicator_phase(percentages: &BTreeMap<Phase, f64>) -> Phase {
    let mut best: Option<(Phase, f64)> = None;
    for (&phase, &value) in percentages {
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((phase, value));
        }
    }
    best.map(|(phase, _)| phase).unwrap_or(Tension)
}

/// Mean of the nonzero percentages; phases at exactly 0% are left out.
pub fn overall_percentage(percentages: &BTreeMap<Phase, f64>) -> f64 {
    let active: Vec<f64> = percentages.values().copied().filter(|p| *p > 0.0).collect();
    if active.is_empty() {
        return 0.0;
    }
    active.iter().sum::<f64>() / active.len() as f64
}

pub fn score(answers: &CategoricalAnswers) -> Result<ResultRecord, InstrumentError> {
    score_with(catalog(), rubric(), answers)
}

pub fn score_with(
    catalog: &Catalog<Phase>,
    rubric: &BoykoRubric,
    answers: &CategoricalAnswers,
) -> Result<ResultRecord, InstrumentError> {
    let mut phases: BTreeMap<Phase, u32> = Phase::ALL.into_iter().map(|p| (p, 0)).collect();
    for (&position, &answer) in answers {
        let question = catalog.get_question(position)?;
        *phases.entry(question.subscale).or_insert(0) += answer.points();
    }

    let counts = catalog.questions_per_subscale();
    let phase_questions_count: BTreeMap<Phase, u32> = Phase::ALL
        .into_iter()
        .map(|p| (p, counts.get(&p).copied().unwrap_or(0)))
        .collect();
    let max_possible_scores: BTreeMap<Phase, u32> = phase_questions_count
        .iter()
        .map(|(&p, &count)| (p, count * MAX_CATEGORICAL_POINTS))
        .collect();
    let percentages: BTreeMap<Phase, f64> = phases
        .iter()
        .map(|(&p, &raw)| {
            let max = max_possible_scores.get(&p).copied().unwrap_or(0);
            (p, percentage(raw, max))
        })
        .collect();
    let phase_levels: BTreeMap<Phase, Severity> = percentages
        .iter()
        .map(|(&p, &value)| (p, *rubric.phase_bands.classify(value)))
        .collect();

    let indicator_phase = indicator_phase(&percentages);
    let total_percentage = overall_percentage(&percentages);
    let risk_level = *rubric.overall_bands.classify(total_percentage);

    tracing::debug!(
        ?phases,
        total_percentage,
        ?indicator_phase,
        ?risk_level,
        "scored boyko"
    );

    Ok(ResultRecord::Boyko {
        phases: phases.clone(),
        percentages: percentages.clone(),
        scores: BoykoScores {
            phases,
            phase_questions_count,
            max_possible_scores,
            percentages,
            phase_levels,
            indicator_phase,
            total_percentage,
            overall: overall_text(risk_level).to_string(),
            color: risk_level.color().to_string(),
            risk_level,
        },
    })
}

//! Plain-text rendering of results, history and statistics.

use std::fmt::Write;

use burncheck_core::models::{
    BoykoScores, HeckHessScores, HistoryEntry, MaslachInterpretation, MaslachScale,
    QuickScores, RecommendationBlock, ResultRecord, Severity,
};
use burncheck_instruments::catalog::QuestionInfo;
use burncheck_instruments::questionnaires::boyko;
use burncheck_instruments::{recommendations, Questionnaire};
use burncheck_storage::stats::Statistics;

pub fn result(record: &ResultRecord) -> String {
    let mut out = String::new();
    let test_type = record.test_type();
    let _ = writeln!(out, "{}", test_type.display_name());
    match record {
        ResultRecord::Maslach { interpretation, .. } => maslach(&mut out, interpretation),
        ResultRecord::Boyko { scores, .. } => boyko(&mut out, scores),
        ResultRecord::HeckHess { scores } => heck_hess(&mut out, scores),
        ResultRecord::Quick { scores } => quick(&mut out, scores),
    }
    if let Some(lines) = recommendations::follow_up(record) {
        let _ = writeln!(out, "\nAlso consider:");
        bullets(&mut out, lines.iter().copied());
    }
    out
}

fn maslach(out: &mut String, interpretation: &MaslachInterpretation) {
    for scale in MaslachScale::ALL {
        let value = match scale {
            MaslachScale::EmotionalExhaustion => interpretation.emotional_exhaustion,
            MaslachScale::Depersonalization => interpretation.depersonalization,
            MaslachScale::PersonalAccomplishment => interpretation.personal_accomplishment,
        };
        let _ = writeln!(
            out,
            "  {} ({}): {} ({})",
            scale.name(),
            scale.code(),
            value.score,
            value.level.label()
        );
    }
    let _ = writeln!(out, "Overall: {}", interpretation.overall.label());
    let _ = writeln!(out, "\nRecommendations:");
    bullets(out, recommendations::maslach(interpretation.overall).iter().copied());
}

fn boyko(out: &mut String, scores: &BoykoScores) {
    for (phase, &percentage) in &scores.percentages {
        let raw = scores.phases.get(phase).copied().unwrap_or(0);
        let max = scores.max_possible_scores.get(phase).copied().unwrap_or(0);
        let level = scores.phase_levels.get(phase).copied().unwrap_or(Severity::Low);
        let _ = writeln!(
            out,
            "  {} {}. {}: {raw}/{max} ({percentage:.1}%) {}",
            level.color(),
            phase.number(),
            phase.name(),
            level.label()
        );
    }
    let _ = writeln!(
        out,
        "Overall: {} {:.1}%. {}",
        scores.color, scores.total_percentage, scores.overall
    );
    let _ = writeln!(out, "Leading phase: {}", scores.indicator_phase.name());

    let leading = scores.indicator_phase;
    if scores
        .phase_levels
        .get(&leading)
        .is_some_and(|level| level.is_elevated())
        && let Some(info) = boyko::catalog().subscale(leading)
    {
        if let Some(description) = &info.description {
            let _ = writeln!(out, "  {description}");
        }
        bullets(out, info.characteristics.iter().map(String::as_str));
    }

    let _ = writeln!(out, "\nRecommendations:");
    bullets(out, recommendations::boyko(leading).iter().copied());
}

fn heck_hess(out: &mut String, scores: &HeckHessScores) {
    let _ = writeln!(
        out,
        "  {} Total: {}/{} ({}). {}",
        scores.color,
        scores.total_score,
        scores.max_total_score,
        scores.overall_level.label(),
        scores.interpretation
    );
    for (scale, result) in &scores.scales {
        let _ = writeln!(
            out,
            "  {} {}: {}/{} ({}). {}",
            result.level.color(),
            scale.name(),
            result.score,
            result.max_score,
            result.level.label(),
            result.description
        );
    }
    let _ = writeln!(out, "Burnout risk: {}", scores.burnout_risk.label());
    blocks(out, &scores.recommendations);
}

fn quick(out: &mut String, scores: &QuickScores) {
    let _ = writeln!(
        out,
        "  {} {}/{} ({}). {}",
        scores.color,
        scores.total,
        scores.max,
        scores.level.label(),
        scores.risk
    );
    blocks(out, &scores.recommendations);
}

fn blocks(out: &mut String, blocks: &[RecommendationBlock]) {
    if blocks.is_empty() {
        return;
    }
    let _ = writeln!(out, "\nRecommendations:");
    bullets(out, blocks.iter().flat_map(|b| b.lines.iter().map(String::as_str)));
}

fn bullets<'a>(out: &mut String, lines: impl Iterator<Item = &'a str>) {
    for line in lines {
        let _ = writeln!(out, "  - {line}");
    }
}

/// One-line summary of a stored entry.
pub fn history_line(entry: &HistoryEntry) -> String {
    let summary = match &entry.record {
        ResultRecord::Maslach { interpretation, .. } => format!(
            "EE {} / DP {} / PA {}: {}",
            interpretation.emotional_exhaustion.score,
            interpretation.depersonalization.score,
            interpretation.personal_accomplishment.score,
            interpretation.overall.label()
        ),
        ResultRecord::Boyko { scores, .. } => format!(
            "{:.1}%, leading phase {}: {}",
            scores.total_percentage,
            scores.indicator_phase.name(),
            scores.risk_level.label()
        ),
        ResultRecord::HeckHess { scores } => format!(
            "{}/{}: {}, burnout risk {}",
            scores.total_score,
            scores.max_total_score,
            scores.overall_level.label(),
            scores.burnout_risk.label()
        ),
        ResultRecord::Quick { scores } => {
            format!("{}/{}: {}", scores.total, scores.max, scores.level.label())
        }
    };
    format!(
        "{}  {:<28} {summary}",
        entry.timestamp.strftime("%Y-%m-%d %H:%M"),
        entry.test_type().display_name()
    )
}

pub fn history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No saved results yet.\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{}", history_line(entry));
    }
    out
}

pub fn statistics(stats: Option<&Statistics>) -> String {
    let Some(stats) = stats else {
        return "No saved results yet.\n".to_string();
    };
    let mut out = String::new();
    let _ = writeln!(out, "Tests taken: {}", stats.total_tests);
    let _ = writeln!(
        out,
        "Last test: {}",
        stats.last_test_date.strftime("%Y-%m-%d %H:%M")
    );
    for (test_type, count) in &stats.test_types {
        let _ = writeln!(out, "  {}: {count}", test_type.display_name());
    }
    let _ = writeln!(out, "Emotional exhaustion trend: {}", stats.trend);
    let _ = writeln!(out, "\nStaying well:");
    bullets(&mut out, recommendations::general_prevention().iter().copied());
    out
}

pub fn questionnaire_list(questionnaires: &[&dyn Questionnaire]) -> String {
    let mut out = String::new();
    for q in questionnaires {
        let _ = writeln!(
            out,
            "{:<10} {:<28} {} questions",
            q.test_type().as_str(),
            q.name(),
            q.count()
        );
    }
    out
}

pub fn questions(questionnaire: &dyn Questionnaire) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", questionnaire.name());
    for QuestionInfo {
        position,
        text,
        subscale,
        reversed,
    } in questionnaire.questions()
    {
        let marker = if reversed { " (reversed)" } else { "" };
        let _ = writeln!(out, "{position:>3}. [{subscale}] {text}{marker}");
    }
    out
}

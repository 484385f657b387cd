use std::collections::BTreeMap;

use burncheck_core::models::MaslachScale::{
    Depersonalization as DP, EmotionalExhaustion as EE, PersonalAccomplishment as PA,
};
use burncheck_core::models::{Level, MaslachVerdict, ResultRecord, TestType};
use burncheck_instruments::error::InstrumentError;
use burncheck_instruments::questionnaires::maslach::{rubric, score, verdict};
use pretty_assertions::assert_eq;

fn ratings(pairs: &[(u32, u8)]) -> BTreeMap<u32, u8> {
    pairs.iter().copied().collect()
}

fn interpretation(record: ResultRecord) -> burncheck_core::models::MaslachInterpretation {
    match record {
        ResultRecord::Maslach { interpretation, .. } => interpretation,
        other => panic!("expected a maslach record, got {other:?}"),
    }
}

#[test]
fn reversed_item_is_inverted_against_the_top_of_the_scale() {
    // Item 7 is reversed: an answer of 6 contributes 0, an answer of 0
    // contributes 6.
    let record = score(&ratings(&[(7, 6)])).unwrap();
    assert_eq!(interpretation(record).emotional_exhaustion.score, 0);

    let record = score(&ratings(&[(7, 0)])).unwrap();
    assert_eq!(interpretation(record).emotional_exhaustion.score, 6);

    // Item 10 is the reversed accomplishment item.
    let record = score(&ratings(&[(10, 2), (12, 5)])).unwrap();
    assert_eq!(interpretation(record).personal_accomplishment.score, 9);
}

#[test]
fn subscale_sums() {
    let answers = ratings(&[
        (1, 5),
        (2, 1),
        (3, 6),
        (4, 4),
        (5, 2),
        (6, 5),
        (7, 1),
        (8, 6),
        (9, 0),
        (10, 1),
        (11, 3),
        (12, 4),
    ]);
    let record = score(&answers).unwrap();
    let ResultRecord::Maslach { scores, .. } = &record else {
        panic!("expected a maslach record");
    };
    // EE: 5 + 4 + (6 - 1) + 3
    assert_eq!(scores.emotional_exhaustion, 17);
    // DP: 1 + 2 + 0
    assert_eq!(scores.depersonalization, 3);
    // PA: 6 + 5 + 6 + (6 - 1) + 4
    assert_eq!(scores.personal_accomplishment, 26);
    assert_eq!(record.primary_value(), 17.0);

    let interpretation = interpretation(record);
    assert_eq!(interpretation.emotional_exhaustion.level, Level::Medium);
    assert_eq!(interpretation.depersonalization.level, Level::Low);
    assert_eq!(interpretation.personal_accomplishment.level, Level::Low);
    assert_eq!(interpretation.overall, MaslachVerdict::Normal);
}

#[test]
fn exhaustion_thresholds() {
    let r = rubric();
    assert_eq!(r.level(EE, 0), Level::Low);
    assert_eq!(r.level(EE, 11), Level::Low);
    assert_eq!(r.level(EE, 12), Level::Medium);
    assert_eq!(r.level(EE, 18), Level::Medium);
    assert_eq!(r.level(EE, 19), Level::High);
}

#[test]
fn depersonalization_thresholds() {
    let r = rubric();
    assert_eq!(r.level(DP, 4), Level::Low);
    assert_eq!(r.level(DP, 5), Level::Medium);
    assert_eq!(r.level(DP, 9), Level::Medium);
    assert_eq!(r.level(DP, 10), Level::High);
}

#[test]
fn accomplishment_is_inverted() {
    let r = rubric();
    assert_eq!(r.level(PA, 0), Level::High);
    assert_eq!(r.level(PA, 18), Level::High);
    assert_eq!(r.level(PA, 19), Level::Medium);
    assert_eq!(r.level(PA, 25), Level::Medium);
    assert_eq!(r.level(PA, 26), Level::Low);
}

#[test]
fn verdict_table() {
    assert_eq!(verdict(Level::High, Level::High), MaslachVerdict::Critical);
    assert_eq!(verdict(Level::High, Level::Low), MaslachVerdict::Elevated);
    assert_eq!(verdict(Level::Medium, Level::High), MaslachVerdict::Elevated);
    assert_eq!(verdict(Level::Medium, Level::Medium), MaslachVerdict::Normal);
    assert_eq!(verdict(Level::Low, Level::Low), MaslachVerdict::Normal);
}

#[test]
fn critical_profile() {
    let answers = ratings(&[(1, 6), (4, 6), (7, 0), (11, 6), (2, 4), (5, 4), (9, 4)]);
    let interpretation = interpretation(score(&answers).unwrap());
    assert_eq!(interpretation.emotional_exhaustion.score, 24);
    assert_eq!(interpretation.depersonalization.score, 12);
    assert_eq!(interpretation.overall, MaslachVerdict::Critical);
}

#[test]
fn unanswered_items_score_zero() {
    let interpretation = interpretation(score(&BTreeMap::new()).unwrap());
    assert_eq!(interpretation.emotional_exhaustion.score, 0);
    assert_eq!(interpretation.personal_accomplishment.level, Level::High);
    assert_eq!(interpretation.overall, MaslachVerdict::Normal);
}

#[test]
fn unknown_position_aborts() {
    let err = score(&ratings(&[(1, 3), (13, 3)])).unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::NotFound {
            test_type: TestType::Maslach,
            position: 13
        }
    ));
}

#[test]
fn scoring_is_deterministic() {
    let answers: BTreeMap<u32, u8> = (1..=12).map(|p| (p, (p % 7) as u8)).collect();
    assert_eq!(score(&answers).unwrap(), score(&answers).unwrap());
}

use std::collections::BTreeMap;

use burncheck_core::models::{HeckHessScale, MaslachScale, Phase, TestType};
use burncheck_instruments::answers::{decode_categorical, CategoricalAnswer};
use burncheck_instruments::catalog::{AnswerFormat, AnswerRange, QuestionInfo};
use burncheck_instruments::error::InstrumentError;
use burncheck_instruments::questionnaires::{boyko, heck_hess, maslach, quick};
use burncheck_instruments::{all_questionnaires, find_questionnaire, get_questionnaire};
use pretty_assertions::assert_eq;

#[test]
fn catalogs_are_well_formed() {
    maslach::catalog().check_integrity().unwrap();
    boyko::catalog().check_integrity().unwrap();
    heck_hess::catalog().check_integrity().unwrap();
    quick::catalog().check_integrity().unwrap();
}

#[test]
fn question_counts() {
    let counts: Vec<(TestType, u32)> = all_questionnaires()
        .iter()
        .map(|q| (q.test_type(), q.count()))
        .collect();
    assert_eq!(
        counts,
        vec![
            (TestType::Maslach, 12),
            (TestType::Boyko, 20),
            (TestType::HeckHess, 21),
            (TestType::Quick, 10),
        ]
    );
}

#[test]
fn subscale_sizes() {
    let maslach = maslach::catalog().questions_per_subscale();
    assert_eq!(maslach[&MaslachScale::EmotionalExhaustion], 4);
    assert_eq!(maslach[&MaslachScale::Depersonalization], 3);
    assert_eq!(maslach[&MaslachScale::PersonalAccomplishment], 5);

    let boyko = boyko::catalog().questions_per_subscale();
    assert!(Phase::ALL.iter().all(|p| boyko[p] == 5));

    let heck_hess = heck_hess::catalog().questions_per_subscale();
    assert_eq!(heck_hess[&HeckHessScale::Depression], 5);
    assert_eq!(heck_hess[&HeckHessScale::Burnout], 11);
    assert_eq!(heck_hess[&HeckHessScale::Anxiety], 5);
}

#[test]
fn boyko_phases_are_interleaved() {
    for question in boyko::catalog().get_all() {
        let expected = Phase::ALL[(question.position as usize - 1) % 4];
        assert_eq!(question.subscale, expected, "question {}", question.position);
    }
}

fn reversed(questions: Vec<QuestionInfo>) -> Vec<u32> {
    questions
        .into_iter()
        .filter(|q| q.reversed)
        .map(|q| q.position)
        .collect()
}

#[test]
fn reversed_items() {
    assert_eq!(reversed(get_questionnaire(TestType::Maslach).questions()), vec![7, 10]);
    assert!(reversed(get_questionnaire(TestType::Quick).questions()).is_empty());
}

#[test]
fn get_question_out_of_range() {
    let catalog = maslach::catalog();
    assert_eq!(catalog.get_question(1).unwrap().position, 1);
    assert!(matches!(
        catalog.get_question(0),
        Err(InstrumentError::NotFound { position: 0, .. })
    ));
    assert!(matches!(
        catalog.get_question(13),
        Err(InstrumentError::NotFound {
            test_type: TestType::Maslach,
            position: 13
        })
    ));
}

#[test]
fn registry_lookup() {
    let q = find_questionnaire("heck_hess").unwrap();
    assert_eq!(q.test_type(), TestType::HeckHess);
    assert_eq!(
        q.answer_format(),
        AnswerFormat::Rating {
            range: AnswerRange { min: 0, max: 3 }
        }
    );
    assert_eq!(
        get_questionnaire(TestType::Boyko).answer_format(),
        AnswerFormat::Categorical
    );
    assert!(matches!(
        find_questionnaire("mbi"),
        Err(InstrumentError::UnknownQuestionnaire(ref id)) if id == "mbi"
    ));
}

#[test]
fn rating_validation() {
    let q = get_questionnaire(TestType::Quick);
    let answers: BTreeMap<u32, u8> = [(1, 4), (2, 5), (11, 0)].into_iter().collect();
    let errors = q.validate_ratings(&answers);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].position, 2);
    assert_eq!(errors[0].value, Some(5));
    assert!(errors[1].message.contains("no question at position 11"));

    let err = q.ensure_valid(&answers).unwrap_err();
    assert!(matches!(err, InstrumentError::Validation(ref e) if e.position == 2));

    let fine: BTreeMap<u32, u8> = (1..=10).map(|p| (p, 4)).collect();
    q.ensure_valid(&fine).unwrap();
}

#[test]
fn categorical_validation_checks_positions_only() {
    let q = get_questionnaire(TestType::Boyko);
    let answers: BTreeMap<u32, u8> = [(1, 2), (20, 9), (21, 0)].into_iter().collect();
    let errors = q.validate_ratings(&answers);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].position, 21);
}

#[test]
fn categorical_tokens() {
    assert_eq!("Yes".parse::<CategoricalAnswer>().unwrap(), CategoricalAnswer::Yes);
    assert_eq!(
        " SOMETIMES ".parse::<CategoricalAnswer>().unwrap(),
        CategoricalAnswer::Sometimes
    );
    assert!(matches!(
        "perhaps".parse::<CategoricalAnswer>(),
        Err(InstrumentError::UnrecognizedAnswerToken(ref t)) if t == "perhaps"
    ));

    let points: Vec<u32> = [
        CategoricalAnswer::Yes,
        CategoricalAnswer::Sometimes,
        CategoricalAnswer::No,
    ]
    .iter()
    .map(|a| a.points())
    .collect();
    assert_eq!(points, vec![2, 1, 0]);
}

#[test]
fn decoding_drops_unknown_tokens() {
    let raw: BTreeMap<u32, String> = [(1, "yes"), (2, "dunno"), (3, "no")]
        .into_iter()
        .map(|(p, t)| (p, t.to_string()))
        .collect();
    let decoded = decode_categorical(&raw);
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[&1], CategoricalAnswer::Yes);
    assert_eq!(decoded[&3], CategoricalAnswer::No);
}

use std::collections::BTreeMap;

use burncheck_core::models::{MaslachVerdict, Phase};
use burncheck_instruments::answers::CategoricalAnswer;
use burncheck_instruments::questionnaires::{boyko, heck_hess, maslach};
use burncheck_instruments::recommendations::{self, follow_up, general_prevention};

#[test]
fn every_class_has_advice() {
    for verdict in [
        MaslachVerdict::Critical,
        MaslachVerdict::Elevated,
        MaslachVerdict::Normal,
    ] {
        assert!(!recommendations::maslach(verdict).is_empty());
    }
    for phase in Phase::ALL {
        assert!(!recommendations::boyko(phase).is_empty());
    }
    assert!(!general_prevention().is_empty());
}

#[test]
fn maslach_never_gets_follow_up() {
    let answers: BTreeMap<u32, u8> = (1..=12).map(|p| (p, 6)).collect();
    assert!(follow_up(&maslach::score(&answers).unwrap()).is_none());
}

#[test]
fn boyko_follow_up_above_half() {
    // Ten "yes" answers spread over all phases: 50% everywhere.
    let half: BTreeMap<u32, CategoricalAnswer> = (1..=10)
        .map(|p| (p, CategoricalAnswer::Yes))
        .collect();
    assert!(follow_up(&boyko::score(&half).unwrap()).is_none());

    let more: BTreeMap<u32, CategoricalAnswer> = (1..=11)
        .map(|p| (p, CategoricalAnswer::Yes))
        .collect();
    assert!(follow_up(&boyko::score(&more).unwrap()).is_some());
}

#[test]
fn heck_hess_follow_up_above_twelve() {
    let twelve: BTreeMap<u32, u8> = (1..=4).map(|p| (p, 3)).collect();
    assert!(follow_up(&heck_hess::score(&twelve).unwrap()).is_none());

    let thirteen: BTreeMap<u32, u8> = [(1, 3), (2, 3), (3, 3), (4, 3), (5, 1)]
        .into_iter()
        .collect();
    assert!(follow_up(&heck_hess::score(&thirteen).unwrap()).is_some());
}

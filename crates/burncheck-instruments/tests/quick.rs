use burncheck_core::models::{QuickScores, ResultRecord, Severity, TestType};
use burncheck_instruments::error::InstrumentError;
use burncheck_instruments::questionnaires::quick::{risk_text, score};
use burncheck_instruments::recommendations::follow_up;
use pretty_assertions::assert_eq;

/// Ten answers summing to `total`, front-loaded.
fn answers_for(total: u32) -> Vec<u8> {
    let mut remaining = total;
    (0..10)
        .map(|_| {
            let take = remaining.min(4);
            remaining -= take;
            take as u8
        })
        .collect()
}

fn scores(record: &ResultRecord) -> &QuickScores {
    match record {
        ResultRecord::Quick { scores } => scores,
        other => panic!("expected a quick record, got {other:?}"),
    }
}

#[test]
fn all_fours_is_critical_with_both_blocks() {
    let record = score(&[4; 10]).unwrap();
    let s = scores(&record);
    assert_eq!(s.total, 40);
    assert_eq!(s.max, 40);
    assert_eq!(s.level, Severity::Critical);
    assert_eq!(s.color, "🔴");
    assert_eq!(s.risk, risk_text(Severity::Critical));
    let ids: Vec<&str> = s.recommendations.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["quick.boundaries", "quick.escalate"]);
    assert!(s.recommendations.iter().all(|b| b.lines.len() == 3));
}

#[test]
fn tiers_and_block_counts() {
    let cases = [
        (0, Severity::Low, 0),
        (10, Severity::Low, 0),
        (11, Severity::Moderate, 0),
        (20, Severity::Moderate, 0),
        (21, Severity::High, 1),
        (30, Severity::High, 1),
        (31, Severity::Critical, 2),
    ];
    for (total, level, blocks) in cases {
        let record = score(&answers_for(total)).unwrap();
        let s = scores(&record);
        assert_eq!(s.total, total);
        assert_eq!(s.level, level, "total {total}");
        assert_eq!(s.recommendations.len(), blocks, "total {total}");
    }
}

#[test]
fn partial_answer_lists_are_scored() {
    let record = score(&[4, 4, 3]).unwrap();
    assert_eq!(scores(&record).total, 11);
    assert_eq!(record.test_type(), TestType::Quick);
}

#[test]
fn an_eleventh_answer_aborts() {
    let err = score(&[1; 11]).unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::NotFound {
            test_type: TestType::Quick,
            position: 11
        }
    ));
}

#[test]
fn follow_up_above_twenty() {
    assert!(follow_up(&score(&answers_for(20)).unwrap()).is_none());
    assert!(follow_up(&score(&answers_for(21)).unwrap()).is_some());
}

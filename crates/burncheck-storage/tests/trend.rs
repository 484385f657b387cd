use burncheck_core::models::{HistoryEntry, ResultRecord, TestType};
use burncheck_instruments::questionnaires::quick;
use burncheck_storage::stats::{statistics, trend_for, Trend};

fn entry(record: ResultRecord, second: i64) -> HistoryEntry {
    HistoryEntry::new(record, jiff::Timestamp::from_second(second).unwrap())
}

fn quick_entry(value: u8, second: i64) -> HistoryEntry {
    entry(quick::score(&[value; 10]).unwrap(), second)
}

#[test]
fn empty_history_has_no_statistics() {
    assert_eq!(statistics(&[]), None);
}

#[test]
fn single_entry_is_insufficient() {
    let history = [quick_entry(2, 10)];
    assert_eq!(trend_for(&history, TestType::Quick), Trend::InsufficientData);
}

#[test]
fn trend_only_compares_the_requested_type() {
    let history = [quick_entry(3, 10), quick_entry(1, 20)];
    assert_eq!(trend_for(&history, TestType::Quick), Trend::Improving);
    assert_eq!(trend_for(&history, TestType::Maslach), Trend::InsufficientData);
}

#[test]
fn only_the_last_two_entries_count() {
    let history = [quick_entry(0, 10), quick_entry(4, 20), quick_entry(2, 30)];
    assert_eq!(trend_for(&history, TestType::Quick), Trend::Improving);

    let history = [quick_entry(4, 10), quick_entry(1, 20), quick_entry(2, 30)];
    assert_eq!(trend_for(&history, TestType::Quick), Trend::Worsening);
}

#[test]
fn last_test_date_is_the_newest_entry() {
    let history = [quick_entry(1, 10), quick_entry(1, 99)];
    let stats = statistics(&history).unwrap();
    assert_eq!(stats.last_test_date.as_second(), 99);
    assert_eq!(stats.total_tests, 2);
}

#[test]
fn trend_labels() {
    assert_eq!(Trend::InsufficientData.to_string(), "insufficient data");
    assert_eq!(Trend::Improving.label(), "improving");
}

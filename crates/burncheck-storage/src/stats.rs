use std::collections::BTreeMap;
use std::fmt;

use burncheck_core::models::{HistoryEntry, TestType};
use serde::{Deserialize, Serialize};

/// Direction of the last two results of one questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Worsening,
    Stable,
    InsufficientData,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Worsening => "worsening",
            Trend::Stable => "stable",
            Trend::InsufficientData => "insufficient data",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_tests: usize,
    pub last_test_date: jiff::Timestamp,
    pub test_types: BTreeMap<TestType, usize>,
    /// Maslach emotional exhaustion trend.
    pub trend: Trend,
}

/// Summarize a history, oldest entry first. `None` for an empty history.
pub fn statistics(history: &[HistoryEntry]) -> Option<Statistics> {
    let last = history.last()?;
    let mut test_types = BTreeMap::new();
    for entry in history {
        *test_types.entry(entry.test_type()).or_insert(0) += 1;
    }
    Some(Statistics {
        total_tests: history.len(),
        last_test_date: last.timestamp,
        test_types,
        trend: trend_for(history, TestType::Maslach),
    })
}

/// Compare the primary values of the two most recent entries of
/// `test_type`. Lower is better.
pub fn trend_for(history: &[HistoryEntry], test_type: TestType) -> Trend {
    let mut values = history
        .iter()
        .rev()
        .filter(|entry| entry.test_type() == test_type)
        .map(|entry| entry.record.primary_value());
    let (Some(current), Some(previous)) = (values.next(), values.next()) else {
        return Trend::InsufficientData;
    };
    if current < previous {
        Trend::Improving
    } else if current > previous {
        Trend::Worsening
    } else {
        Trend::Stable
    }
}

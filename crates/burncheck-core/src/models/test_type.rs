use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Discriminator for the questionnaire variant that produced a result.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TestType {
    Maslach,
    Boyko,
    HeckHess,
    Quick,
}

impl TestType {
    pub const ALL: [TestType; 4] = [
        TestType::Maslach,
        TestType::Boyko,
        TestType::HeckHess,
        TestType::Quick,
    ];

    /// Wire identifier, identical to the serde tag.
    pub fn as_str(self) -> &'static str {
        match self {
            TestType::Maslach => "maslach",
            TestType::Boyko => "boyko",
            TestType::HeckHess => "heck_hess",
            TestType::Quick => "quick",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TestType::Maslach => "Maslach Burnout Inventory",
            TestType::Boyko => "Boyko Burnout Phases",
            TestType::HeckHess => "Heck-Hess Symptom Inventory",
            TestType::Quick => "Quick Burnout Check",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TestType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownTestType(s.to_string()))
    }
}

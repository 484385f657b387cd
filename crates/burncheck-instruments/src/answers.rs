use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;

/// Ordinal answers keyed by 1-based question position.
pub type Ratings = BTreeMap<u32, u8>;

/// Categorical answers keyed by 1-based question position.
pub type CategoricalAnswers = BTreeMap<u32, CategoricalAnswer>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CategoricalAnswer {
    Yes,
    Sometimes,
    No,
}

impl CategoricalAnswer {
    pub fn points(self) -> u32 {
        match self {
            CategoricalAnswer::Yes => 2,
            CategoricalAnswer::Sometimes => 1,
            CategoricalAnswer::No => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoricalAnswer::Yes => "yes",
            CategoricalAnswer::Sometimes => "sometimes",
            CategoricalAnswer::No => "no",
        }
    }
}

/// Points for the best possible answer.
pub const MAX_CATEGORICAL_POINTS: u32 = 2;

impl fmt::Display for CategoricalAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoricalAnswer {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(CategoricalAnswer::Yes),
            "sometimes" => Ok(CategoricalAnswer::Sometimes),
            "no" => Ok(CategoricalAnswer::No),
            _ => Err(InstrumentError::UnrecognizedAnswerToken(s.to_string())),
        }
    }
}

/// Decode raw answer tokens at the transport boundary.
///
/// Unrecognized tokens are logged and dropped, so they score as zero.
pub fn decode_categorical(raw: &BTreeMap<u32, String>) -> CategoricalAnswers {
    raw.iter()
        .filter_map(|(position, token)| match token.parse::<CategoricalAnswer>() {
            Ok(answer) => Some((*position, answer)),
            Err(e) => {
                tracing::warn!(position, error = %e, "skipping answer");
                None
            }
        })
        .collect()
}

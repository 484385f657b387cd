use burncheck_core::models::TestType;
use thiserror::Error;

use crate::catalog::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),

    #[error("{test_type}: no question at position {position}")]
    NotFound { test_type: TestType, position: u32 },

    #[error("unrecognized answer token: {0:?}")]
    UnrecognizedAnswerToken(String),

    #[error("{test_type}: no tier ranges configured for sub-scale '{subscale}'")]
    BandsNotConfigured {
        test_type: TestType,
        subscale: String,
    },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

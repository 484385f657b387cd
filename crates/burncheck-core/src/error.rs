use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown test type: {0}")]
    UnknownTestType(String),
}

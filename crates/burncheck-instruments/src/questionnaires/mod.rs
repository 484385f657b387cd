//! One module per questionnaire: its catalog, its rubric and its scorer.

pub mod boyko;
pub mod heck_hess;
pub mod maslach;
pub mod quick;

use std::collections::BTreeMap;

use burncheck_core::models::RecommendationBlock;

use crate::answers::Ratings;
use crate::catalog::{AnswerFormat, Catalog, SubscaleId};
use crate::error::InstrumentError;

/// Sum ordinal answers per sub-scale, inverting reversed items against the
/// top of the answer range.
///
/// Every declared sub-scale starts at zero. A position outside the catalog
/// aborts the whole pass.
pub(crate) fn sum_ratings<S: SubscaleId>(
    catalog: &Catalog<S>,
    answers: &Ratings,
) -> Result<BTreeMap<S, u32>, InstrumentError> {
    let mut totals: BTreeMap<S, u32> = catalog.subscales.iter().map(|s| (s.id, 0)).collect();
    for (&position, &answer) in answers {
        let question = catalog.get_question(position)?;
        let value = match (question.reversed, catalog.format) {
            (true, AnswerFormat::Rating { range }) => range.reverse(answer),
            _ => answer,
        };
        *totals.entry(question.subscale).or_insert(0) += u32::from(value);
    }
    Ok(totals)
}

/// `part / whole` as a percentage, or 0 when there is nothing to divide by.
pub(crate) fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(whole) * 100.0
}

pub(crate) fn block(id: &str, lines: &[&str]) -> RecommendationBlock {
    RecommendationBlock {
        id: id.to_string(),
        lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

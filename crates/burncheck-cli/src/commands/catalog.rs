use burncheck_cli::report;
use burncheck_core::models::TestType;
use burncheck_instruments::{all_questionnaires, get_questionnaire};
use serde::Serialize;

use super::Context;

#[derive(Serialize)]
struct Listing {
    test_type: TestType,
    name: String,
    questions: u32,
}

pub fn list(ctx: &Context) -> eyre::Result<()> {
    let questionnaires = all_questionnaires();
    let listing: Vec<Listing> = questionnaires
        .iter()
        .map(|q| Listing {
            test_type: q.test_type(),
            name: q.name().to_string(),
            questions: q.count(),
        })
        .collect();
    ctx.emit(&listing, || report::questionnaire_list(&questionnaires))
}

pub fn questions(ctx: &Context, test: TestType) -> eyre::Result<()> {
    let questionnaire = get_questionnaire(test);
    ctx.emit(&questionnaire.questions(), || report::questions(questionnaire))
}

use std::path::Path;

use burncheck_cli::answers::read_answers;
use burncheck_cli::report;
use burncheck_core::models::TestType;
use burncheck_instruments::get_questionnaire;
use burncheck_storage::HistoryStore;

use super::Context;

pub async fn run(
    ctx: &Context,
    test: TestType,
    answers_path: &Path,
    user: Option<i64>,
    strict: bool,
) -> eyre::Result<()> {
    let answers = read_answers(answers_path, test)?;

    let problems = answers.validate();
    for problem in &problems {
        tracing::warn!(position = problem.position, value = ?problem.value, "{problem}");
    }
    if strict && !problems.is_empty() {
        eyre::bail!("{} answer(s) failed validation", problems.len());
    }

    let expected = get_questionnaire(test).count() as usize;
    if answers.len() < expected {
        tracing::warn!(
            answered = answers.len(),
            expected,
            "incomplete answer set, unanswered questions score as zero"
        );
    }

    let record = answers.score()?;

    match user {
        Some(user_id) => {
            let entry = ctx.store()?.save_result(user_id, record).await?;
            ctx.emit(&entry, || {
                format!("{}\nSaved as {}\n", report::result(&entry.record), entry.id)
            })
        }
        None => ctx.emit(&record, || report::result(&record)),
    }
}

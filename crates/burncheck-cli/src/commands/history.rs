use burncheck_cli::report;
use burncheck_storage::HistoryStore;

use super::Context;

pub async fn history(ctx: &Context, user: i64, limit: Option<usize>) -> eyre::Result<()> {
    let limit = limit.unwrap_or(ctx.config.history_view_limit);
    let entries = ctx.store()?.history(user, limit).await?;
    ctx.emit(&entries, || report::history(&entries))
}

pub async fn stats(ctx: &Context, user: i64) -> eyre::Result<()> {
    let stats = ctx.store()?.statistics(user).await?;
    ctx.emit(&stats, || report::statistics(stats.as_ref()))
}

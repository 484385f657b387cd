use burncheck_cli::config::{save_config, BurncheckConfig};

use super::Context;
use crate::cli::ConfigAction;

pub fn run(ctx: &Context, action: ConfigAction) -> eyre::Result<()> {
    match action {
        ConfigAction::Show => {
            let history_path = ctx
                .config
                .resolve_history_path(ctx.history_override.as_deref())?;
            ctx.emit(&ctx.config, || {
                format!(
                    "config file:   {}\nhistory file:  {}\ncapacity:      {}\nview limit:    {}\n",
                    ctx.config_path.display(),
                    history_path.display(),
                    ctx.config.history_capacity,
                    ctx.config.history_view_limit,
                )
            })
        }
        ConfigAction::Init { force } => {
            if ctx.config_path.exists() && !force {
                eyre::bail!(
                    "{} already exists (use --force to overwrite)",
                    ctx.config_path.display()
                );
            }
            save_config(&ctx.config_path, &BurncheckConfig::default())?;
            println!("Wrote {}", ctx.config_path.display());
            Ok(())
        }
    }
}

use crate::cli::context::open_kiosk;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info};
use crate::ui::presenter::TerminalPresenter;

/// Handle the operator `reset` command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes
            && !confirm("This clears every open session and the whole attendance log. Continue?")?
        {
            info("Reset cancelled.");
            return Ok(());
        }

        let pool = DbPool::open(&cfg.database)?;
        let mut presenter = TerminalPresenter::new(Some(&pool));
        let mut kiosk = open_kiosk(cfg, &pool, &mut presenter)?;
        kiosk.reset(&mut presenter);
    }
    Ok(())
}

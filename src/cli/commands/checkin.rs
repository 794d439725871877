use crate::cli::context::open_kiosk;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::action::Action;
use crate::ui::presenter::TerminalPresenter;
use crate::utils::time::{now, parse_optional_timestamp};

/// Handle the one-shot `in` / `out` commands.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (id, at, action) = match cmd {
        Commands::In { id, at } => (id, at, Action::In),
        Commands::Out { id, at } => (id, at, Action::Out),
        _ => return Ok(()),
    };

    //
    // 1. Parse the optional timestamp (default = now)
    //
    let when = parse_optional_timestamp(at.as_ref())?.unwrap_or_else(now);

    //
    // 2. Open DB and kiosk
    //
    let pool = DbPool::open(&cfg.database)?;
    let mut presenter = TerminalPresenter::new(Some(&pool)).quiet_rejections();
    let mut kiosk = open_kiosk(cfg, &pool, &mut presenter)?;

    //
    // 3. Apply the action
    //
    kiosk.submit(id, action, when, &mut presenter)?;

    Ok(())
}

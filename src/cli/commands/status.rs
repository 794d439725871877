use crate::cli::context::open_kiosk;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::presenter::TerminalPresenter;
use crate::utils::colors::{RED, paint};
use crate::utils::formatting::{date_clock, format_worked};
use crate::utils::table::{Column, Table};
use crate::utils::time::now;

/// Handle the `status` command: who is working right now.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;
    let mut presenter = TerminalPresenter::new(None);
    let kiosk = open_kiosk(cfg, &pool, &mut presenter)?;

    let sessions = kiosk.engine().sessions();
    if sessions.is_empty() {
        info("Nobody is checked in.");
        return Ok(());
    }

    let policy = kiosk.engine().policy();
    let current = now();

    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("NAME", 24),
        Column::new("CHECK-IN", 19),
        Column::new("ELAPSED", 9),
    ]);

    for (id, since) in sessions.iter() {
        let name = kiosk
            .directory()
            .lookup(id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| "?".to_string());

        let check_in = if policy.is_late(*since) {
            paint(RED, &date_clock(since))
        } else {
            date_clock(since)
        };

        table.add_row(vec![
            id.to_string(),
            name,
            check_in,
            format_worked(current - *since),
        ]);
    }

    println!("🟢 Currently working ({}):\n", sessions.len());
    print!("{}", table.render());
    Ok(())
}

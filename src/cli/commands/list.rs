use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::AppResult;
use crate::export::parse_range;
use crate::models::log_entry::{EntryStatus, LogEntry};
use crate::ui::messages::info;
use crate::utils::colors::{
    BLUE, GREEN, color_for_check_in, color_for_duration, colorize_optional, paint,
};
use crate::utils::formatting::{date_clock, placeholder_time};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        let bounds = match period {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_range(p)?),
        };

        let entries = load_entries(&pool, bounds)?;

        if entries.is_empty() {
            info("No attendance recorded yet.");
            return Ok(());
        }

        print_entries(&entries);
    }
    Ok(())
}

fn print_entries(entries: &[LogEntry]) {
    let name_w = entries
        .iter()
        .map(|e| unicode_width::UnicodeWidthStr::width(e.display_name.as_str()) + e.staff_id.len() + 3)
        .max()
        .unwrap_or(10)
        .max(10);

    let mut table = Table::new(vec![
        Column::new("STAFF", name_w),
        Column::new("CHECK-IN", 21),
        Column::new("CHECK-OUT", 19),
        Column::new("DURATION", 10),
        Column::new("STATUS", 7),
    ]);

    // newest first, like the kiosk screen
    for e in entries.iter().rev() {
        let check_in = format!(
            "{}{}",
            date_clock(&e.check_in_at),
            if e.is_late { " !" } else { "" }
        );
        let check_out = e
            .check_out_at
            .as_ref()
            .map(date_clock)
            .unwrap_or_else(|| placeholder_time().to_string());
        let duration = format!(
            "{}{}",
            e.worked_display(),
            if e.is_short_shift == Some(true) { " !" } else { "" }
        );
        let status = match e.status {
            EntryStatus::Working => paint(BLUE, "WORKING"),
            EntryStatus::Done => paint(GREEN, "DONE"),
        };

        table.add_row(vec![
            format!("{} ({})", e.display_name, e.staff_id),
            paint(color_for_check_in(e.is_late), &check_in),
            colorize_optional(&check_out),
            paint(color_for_duration(e.is_short_shift), &duration),
            status,
        ]);
    }

    println!("📋 Attendance log ({} rows):\n", entries.len());
    print!("{}", table.render());
}

use crate::cli::context::load_directory;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::table::{Column, Table};

/// Handle the `staff` command: print the directory.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let directory = load_directory(cfg)?;

    if directory.is_empty() {
        warning(format!("No staff found in {}", cfg.directory));
        return Ok(());
    }

    let id_w = directory.iter().map(|e| e.id.len()).max().unwrap_or(2).max(2);
    let mut table = Table::new(vec![Column::new("ID", id_w), Column::new("NAME", 30)]);
    for emp in directory.iter() {
        table.add_row(vec![emp.id.clone(), emp.name.clone()]);
    }

    println!("👥 Staff directory ({} employees):\n", directory.len());
    print!("{}", table.render());
    Ok(())
}

use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

const MAX_OPERATION_WIDTH: usize = 60;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "check_in" => Colour::Green,
        "check_out" => Colour::Cyan,
        "rejected" => Colour::Yellow,
        "reset" => Colour::Red,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to the column width. Only the operation word
/// is coloured.
fn operation_cell(operation: &str, target: &str) -> (String, usize) {
    let mut plain = if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    };

    if plain.chars().count() > MAX_OPERATION_WIDTH {
        plain = plain.chars().take(MAX_OPERATION_WIDTH - 3).collect::<String>() + "...";
    }

    let width = plain.chars().count();
    let color = color_for_operation(operation);
    let cell = match plain.split_once(' ') {
        Some((word, rest)) => format!("{} {}", color.paint(word), rest),
        None => color.paint(plain.as_str()).to_string(),
    };

    (cell, width)
}

/// Stored RFC 3339 dates are shown without sub-second noise.
fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let rows = load_log(pool)?;

        if rows.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let cells: Vec<[String; 4]> = rows
            .iter()
            .map(|(id, date, operation, target, message)| {
                let (op, _) = operation_cell(operation, target);
                [id.to_string(), display_date(date), op, message.clone()]
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, operation, target, _)| operation_cell(operation, target).1)
            .max()
            .unwrap_or(10);
        let date_w = cells.iter().map(|c| c[1].len()).max().unwrap_or(10);
        let id_w = cells.iter().map(|c| c[0].len()).max().unwrap_or(1).max(2);

        let mut table = Table::new(vec![
            Column::new("ID", id_w),
            Column::new("DATE", date_w),
            Column::new("OPERATION", op_w),
            Column::new("MESSAGE", 0),
        ]);
        for row in cells {
            table.add_row(row.to_vec());
        }

        println!("📜 Internal log:\n");
        print!("{}", table.render());
        Ok(())
    }
}

use crate::cli::context::open_kiosk;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{AdminCommand, Kiosk, KioskInput, Presenter};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::action::Action;
use crate::ui::messages::{header, info, prompt};
use crate::ui::presenter::TerminalPresenter;
use crate::utils::time::now;
use chrono::NaiveDateTime;
use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

/// Handle the interactive `kiosk` command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Kiosk { scan_delay } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let mut presenter = TerminalPresenter::new(Some(&pool));
        let mut kiosk = open_kiosk(cfg, &pool, &mut presenter)?;

        let delay = Duration::from_millis(scan_delay.unwrap_or(cfg.scan_delay_ms));

        header("rAttendance kiosk");
        info("Enter a staff ID to scan, 'quit' to exit.");

        let stdin = io::stdin();
        let mut clock = now;
        run_loop(&mut kiosk, stdin.lock(), delay, &mut clock, &mut presenter)?;
    }
    Ok(())
}

/// Drive the kiosk from line-oriented input until EOF or `quit`.
pub fn run_loop<R: BufRead>(
    kiosk: &mut Kiosk,
    input: R,
    scan_delay: Duration,
    clock: &mut dyn FnMut() -> NaiveDateTime,
    presenter: &mut dyn Presenter,
) -> AppResult<()> {
    let mut lines = input.lines();

    loop {
        println!();
        prompt("Staff ID:");
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let raw = line.trim();
        if raw.eq_ignore_ascii_case("quit") || raw.eq_ignore_ascii_case("exit") {
            break;
        }

        match kiosk.resolve_input(raw) {
            Err(e) => presenter.on_rejected(&e),

            Ok(KioskInput::Admin(AdminCommand::Reset)) => {
                prompt("Admin reset requested. Type YES to clear all sessions and the log:");
                let answer = lines.next().transpose()?.unwrap_or_default();
                if answer.trim() == "YES" {
                    kiosk.reset(presenter);
                } else {
                    info("Reset cancelled.");
                }
            }

            Ok(KioskInput::Staff(employee)) => {
                info(format!("VERIFYING: {}...", employee.name.to_uppercase()));
                if !scan_delay.is_zero() {
                    thread::sleep(scan_delay);
                }
                info(format!("Identity confirmed: {} ({})", employee.name, employee.id));

                prompt("[I]n / [O]ut / [C]ancel:");
                let choice = lines.next().transpose()?.unwrap_or_default();

                // rejections were already shown by the presenter; keep scanning
                match Action::from_input(&choice) {
                    Some(Action::In) => {
                        kiosk.check_in(&employee, clock(), presenter).ok();
                    }
                    Some(Action::Out) => {
                        kiosk.check_out(&employee, clock(), presenter).ok();
                    }
                    None => info("Cancelled."),
                }

                info(format!(
                    "Currently working: {}",
                    kiosk.engine().sessions().len()
                ));
            }
        }
    }

    println!();
    info("Kiosk closed.");
    Ok(())
}

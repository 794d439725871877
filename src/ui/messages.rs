//! User-facing terminal messages: coloured level icons, prompts and badges.

use crate::errors::AppResult;
use std::fmt;
use std::io::{self, BufRead, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }
}

fn line<T: fmt::Display>(level: Level, msg: T) -> String {
    let (color, icon) = level.style();
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Warning, msg));
}

/// Errors go to stderr so scripted kiosks can separate them.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, msg));
}

pub fn header<T: fmt::Display>(msg: T) {
    let (color, _) = Level::Info.style();
    println!("{color}{BOLD}====================== {msg}\n{RESET}");
}

/// Indented, highlighted flag printed under an accepted action.
pub fn badge(color: &str, text: &str) {
    println!("   {color}{BOLD}{text}{RESET}");
}

/// Print a prompt without newline and flush stdout.
pub fn prompt<T: fmt::Display>(msg: T) {
    print!("{BOLD}{msg}{RESET} ");
    io::stdout().flush().ok();
}

/// Ask a yes/no question on stdin; anything but `y`/`yes` is a no.
pub fn confirm<T: fmt::Display>(question: T) -> AppResult<bool> {
    prompt(format!("{question} [y/N]:"));

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    Ok(ans == "y" || ans == "yes")
}

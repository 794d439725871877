#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rta() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    temp_path(&format!("{}_rattendance.sqlite", name))
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    temp_path(&format!("{}_out.{}", name, ext))
}

/// Path for a config file that does not exist yet (defaults apply).
pub fn temp_config(name: &str) -> String {
    temp_path(&format!("{}_rattendance.conf", name))
}

fn temp_path(file: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(file);
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the standard two-person directory used by most tests.
pub fn write_directory(name: &str) -> String {
    let p = temp_path(&format!("{}_staff.yml", name));
    fs::write(
        &p,
        "- id: E1\n  name: Asha\n- id: e2\n  name: Bruno\n",
    )
    .expect("write staff directory");
    p
}

/// Write a config file with the given YAML body, pointing at `db`.
pub fn write_config(name: &str, db: &str, extra: &str) -> String {
    let p = temp_config(name);
    fs::write(&p, format!("database: {db}\n{extra}")).expect("write config");
    p
}

/// Everything a CLI test needs: db, directory and config paths.
pub struct Env {
    pub db: String,
    pub directory: String,
    pub config: String,
}

impl Env {
    pub fn new(name: &str) -> Self {
        Self {
            db: setup_test_db(name),
            directory: write_directory(name),
            config: temp_config(name),
        }
    }

    pub fn with_config(name: &str, extra: &str) -> Self {
        let db = setup_test_db(name);
        let config = write_config(name, &db, extra);
        Self {
            db,
            directory: write_directory(name),
            config,
        }
    }

    /// Command preloaded with the global overrides.
    pub fn cmd(&self) -> Command {
        let mut c = rta();
        c.args([
            "--db",
            &self.db,
            "--directory",
            &self.directory,
            "--config",
            &self.config,
        ]);
        c
    }
}

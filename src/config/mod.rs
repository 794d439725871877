use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const DIRECTORY_TEMPLATE: &str = "\
# rAttendance staff directory
# One record per employee; ids are matched case-insensitively.
#
# - id: E1
#   name: Asha
[]
";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: String,
    pub directory: String,
    /// HH:MM; check-ins strictly after it are flagged late.
    pub late_threshold: String,
    /// e.g. "8h30m", "9h"; shorter shifts are flagged.
    pub min_work_duration: String,
    pub persist_sessions: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_reset_code: Option<String>,
    pub scan_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            directory: Self::directory_file().to_string_lossy().to_string(),
            late_threshold: "08:45".to_string(),
            min_work_duration: "8h30m".to_string(),
            persist_sessions: true,
            admin_reset_code: None,
            scan_delay_ms: 2000,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rattendance.sqlite")
    }

    /// Return the full path of the staff directory
    pub fn directory_file() -> PathBuf {
        Self::config_dir().join("staff.yml")
    }

    /// Load configuration from the standard file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    /// Missing keys take their default value.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write configuration as YAML.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration, database file and staff directory template.
    ///
    /// Relative `custom_db` names are placed inside the config directory.
    /// In test mode the config file is left untouched.
    pub fn init_all(
        custom_db: Option<String>,
        config_path: &Path,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Self::load_from(config_path)?;

        if let Some(name) = custom_db {
            let p = Path::new(&name);
            config.database = if p.is_absolute() {
                p.to_string_lossy().to_string()
            } else {
                dir.join(p).to_string_lossy().to_string()
            };
        }

        if !is_test {
            config.save_to(config_path)?;
            println!("✅ Config file: {:?}", config_path);
        }

        let db_path = Path::new(&config.database);
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(db_path)?;
        }

        let staff = crate::utils::path::expand_tilde(&config.directory);
        if !is_test && !staff.exists() {
            fs::write(&staff, DIRECTORY_TEMPLATE)?;
            println!("✅ Staff directory template: {:?}", staff);
        }

        Ok(config)
    }
}

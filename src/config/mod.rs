use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Operator settings for the check-in terminal.
///
/// Loaded once by `run()` and handed to the command handlers, which pass
/// the relevant values into the engine explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_barcode_column")]
    pub barcode_column: usize,
    #[serde(default = "default_nfc_column")]
    pub nfc_column: usize,
    /// Cutoff time of day, "HH:MM".
    #[serde(default = "default_deadline")]
    pub deadline: String,
    #[serde(default = "default_grace_minutes")]
    pub grace_minutes: i64,
    /// Columns echoed on the panel after a successful punch.
    #[serde(default = "default_display_columns")]
    pub display_columns: Vec<usize>,
    #[serde(default)]
    pub overwrite: bool,
}

fn default_barcode_column() -> usize {
    4
}
fn default_nfc_column() -> usize {
    5
}
fn default_deadline() -> String {
    "09:00".to_string()
}
fn default_grace_minutes() -> i64 {
    5
}
fn default_display_columns() -> Vec<usize> {
    vec![1, 2, 3]
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file().to_string_lossy().to_string())
    }
}

impl Config {
    fn with_database(database: String) -> Self {
        Self {
            database,
            barcode_column: default_barcode_column(),
            nfc_column: default_nfc_column(),
            deadline: default_deadline(),
            grace_minutes: default_grace_minutes(),
            display_columns: default_display_columns(),
            overwrite: false,
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcheckin")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rcheckin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcheckin.conf")
    }

    /// Return the full path of the journal database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rcheckin.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration and journal files.
    /// Returns the path of the configured database.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Self::with_database(db_path.to_string_lossy().to_string());

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub roster: String,
    #[serde(default = "default_position_code")]
    pub default_position: String,
    #[serde(default = "default_offset_label")]
    pub default_offset: String,
    #[serde(default = "default_export_format")]
    pub export_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_position_code() -> String {
    "U".to_string()
}
fn default_offset_label() -> String {
    "1h".to_string()
}
fn default_export_format() -> String {
    "xlsx".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: Self::roster_file().to_string_lossy().to_string(),
            default_position: default_position_code(),
            default_offset: default_offset_label(),
            export_format: default_export_format(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rmuster")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rmuster")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rmuster.conf")
    }

    /// Return the default path of the roster snapshot
    pub fn roster_file() -> PathBuf {
        Self::config_dir().join("roster.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration directory and file
    pub fn init_all(custom_roster: Option<String>) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Roster file: user provided or default
        let roster_path = if let Some(name) = custom_roster {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::roster_file()
        };

        let config = Config {
            roster: roster_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        let yaml = serde_yaml::to_string(&config).unwrap_or_default();
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        Ok(roster_path)
    }
}

//! Configuration management for tally.
//!
//! Loads configuration from ${TALLY_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for tally configuration and data directories.
    //!
    //! TALLY_HOME resolution order:
    //! 1. TALLY_HOME environment variable (if set)
    //! 2. ~/.config/tally (default)

    use std::path::PathBuf;

    /// Returns the tally home directory.
    ///
    /// Checks TALLY_HOME env var first, falls back to ~/.config/tally
    pub fn tally_home() -> PathBuf {
        if let Ok(home) = std::env::var("TALLY_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("tally"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        tally_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        tally_home().join("logs")
    }
}

/// Calculator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Thousands grouping separator for the display.
    ///
    /// The first character is used; "none" or empty disables grouping.
    pub grouping: String,
    /// Maximum number of tape entries kept in memory.
    pub tape_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grouping: Config::DEFAULT_GROUPING.to_string(),
            tape_limit: Config::DEFAULT_TAPE_LIMIT,
        }
    }
}

impl Config {
    const DEFAULT_GROUPING: &str = ",";
    const DEFAULT_TAPE_LIMIT: usize = 100;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::debug!("no config at {}; using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// The grouping separator for display formatting, if enabled.
    pub fn grouping_separator(&self) -> Option<char> {
        if self.grouping.is_empty() || self.grouping.eq_ignore_ascii_case("none") {
            return None;
        }
        self.grouping.chars().next()
    }

    /// Creates a config file with the default template.
    ///
    /// Errors if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Returns the default config template text.
    pub fn generate() -> &'static str {
        default_config_template()
    }
}

fn default_config_template() -> &'static str {
    r#"# tally configuration

# Thousands grouping separator for the display.
# The first character is used; "none" disables grouping.
grouping = ","

# Maximum number of tape entries kept in memory.
tape_limit = 100
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.grouping, ",");
        assert_eq!(config.tape_limit, 100);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "grouping = \" \"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.grouping_separator(), Some(' '));
        assert_eq!(config.tape_limit, 100);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tape_limit = \"lots\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_grouping_separator_can_be_disabled() {
        let mut config = Config::default();
        assert_eq!(config.grouping_separator(), Some(','));

        config.grouping = "none".to_string();
        assert_eq!(config.grouping_separator(), None);

        config.grouping = String::new();
        assert_eq!(config.grouping_separator(), None);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::init(&path).unwrap();
        assert!(path.exists());
        assert!(Config::init(&path).is_err());
    }

    #[test]
    fn test_template_round_trips_through_serde() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config.grouping, Config::default().grouping);
        assert_eq!(config.tape_limit, Config::default().tape_limit);
    }
}

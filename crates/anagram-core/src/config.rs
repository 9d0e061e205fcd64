//! Configuration — YAML config + env var overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "check-anagrams.yaml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

const LOG_LEVEL_VAR: &str = "CHECK_ANAGRAMS_LOG_LEVEL";
const LOG_FILE_VAR: &str = "CHECK_ANAGRAMS_LOG";

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn check_log_level(level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        anyhow::bail!(
            "Unknown log_level '{}', expected one of: {}",
            level,
            LOG_LEVELS.join(", ")
        );
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prompt written before the first line is read
    #[serde(default = "default_first_prompt")]
    pub first_prompt: String,

    /// Prompt written before the second line is read
    #[serde(default = "default_second_prompt")]
    pub second_prompt: String,

    /// Print the version line and welcome message at startup
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,

    /// Default log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Append logs to this file instead of stderr
    #[serde(default)]
    pub log_file: Option<String>,

    /// Rejected env var overrides, for the caller to log once logging is up
    #[serde(skip)]
    pub env_warnings: Vec<String>,

    /// Directory holding the config file (set at load time, not serialized from YAML)
    #[serde(skip)]
    pub project_root: PathBuf,
}

fn default_first_prompt() -> String {
    "String 1: ".into()
}
fn default_second_prompt() -> String {
    "String 2: ".into()
}
fn default_show_banner() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".into()
}

impl Config {
    /// Load config from a YAML file with env var overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        Self::load_with_env(config_path, env_var)
    }

    /// Load config from the default location (project_root/check-anagrams.yaml)
    pub fn load_from_dir(project_root: &Path) -> Result<Self> {
        Self::load(&project_root.join(CONFIG_FILENAME))
    }

    /// Defaults plus env var overrides, for when no config file is usable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(env_var);
        config
    }

    /// File values are validated before overrides apply, so a bad override
    /// never rejects a good file.
    fn load_with_env<F>(config_path: &Path, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let mut config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        check_log_level(&config.log_level)
            .with_context(|| format!("Invalid {}", config_path.display()))?;

        config.project_root = config_path
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf();

        config.apply_overrides(var);
        Ok(config)
    }

    /// Invalid overrides leave the field alone and are recorded in `env_warnings`.
    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = var(LOG_LEVEL_VAR) {
            match check_log_level(&level) {
                Ok(()) => self.log_level = level,
                Err(e) => self
                    .env_warnings
                    .push(format!("Ignoring {LOG_LEVEL_VAR}: {e}")),
            }
        }
        if let Some(file) = var(LOG_FILE_VAR) {
            self.log_file = Some(file);
        }
    }

    /// Resolve `log_file` against the config directory
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.as_ref().map(|file| {
            let p = Path::new(file);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                self.project_root.join(p)
            }
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_prompt: default_first_prompt(),
            second_prompt: default_second_prompt(),
            show_banner: default_show_banner(),
            log_level: default_log_level(),
            log_file: None,
            env_warnings: Vec::new(),
            project_root: PathBuf::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::collections::HashMap;
    use tempfile::{NamedTempFile, TempDir};

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn fake_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_load_config_defaults() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "show_banner: true").unwrap();

        let config = Config::load_with_env(tmp.path(), no_env).unwrap();
        assert_eq!(config.first_prompt, "String 1: ");
        assert_eq!(config.second_prompt, "String 2: ");
        assert!(config.show_banner);
    }

    #[test]
    fn test_load_config_custom_values() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            "first_prompt: \"First: \"\nsecond_prompt: \"Second: \"\nshow_banner: false\nlog_level: ERROR"
        )
        .unwrap();

        let config = Config::load_with_env(tmp.path(), no_env).unwrap();
        assert_eq!(config.first_prompt, "First: ");
        assert_eq!(config.second_prompt, "Second: ");
        assert!(!config.show_banner);
        assert_eq!(config.log_level, "ERROR");
    }

    #[test]
    fn test_unknown_log_level_fails() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "log_level: chatty").unwrap();

        assert!(Config::load_with_env(tmp.path(), no_env).is_err());
        // a valid override does not rescue an invalid file
        let env = fake_env(&[("CHECK_ANAGRAMS_LOG_LEVEL", "debug")]);
        assert!(Config::load_with_env(tmp.path(), env).is_err());
    }

    #[test]
    fn test_env_overrides_applied() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "log_level: info
log_file: file.log").unwrap();

        let env = fake_env(&[
            ("CHECK_ANAGRAMS_LOG_LEVEL", "debug"),
            ("CHECK_ANAGRAMS_LOG", "/tmp/env.log"),
        ]);
        let config = Config::load_with_env(tmp.path(), env).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/env.log")));
        assert!(config.env_warnings.is_empty());
    }

    #[test]
    fn test_bad_env_log_level_keeps_file_values() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "first_prompt: \"A> \"\nlog_level: info").unwrap();

        let env = fake_env(&[("CHECK_ANAGRAMS_LOG_LEVEL", "chatty")]);
        let config = Config::load_with_env(tmp.path(), env).unwrap();
        assert_eq!(config.first_prompt, "A> ");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.env_warnings.len(), 1);
        assert!(config.env_warnings[0].contains("CHECK_ANAGRAMS_LOG_LEVEL"));
        assert!(config.env_warnings[0].contains("chatty"));
    }

    #[test]
    fn test_bad_env_log_level_on_defaults() {
        let mut config = Config::default();
        config.apply_overrides(fake_env(&[("CHECK_ANAGRAMS_LOG_LEVEL", "loud")]));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.env_warnings.len(), 1);
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_from_dir(dir.path()).is_err());
    }

    #[test]
    fn test_load_from_dir_resolves_log_path() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "log_file: anagrams.log\n").unwrap();

        let config = Config::load_with_env(&dir.path().join(CONFIG_FILENAME), no_env).unwrap();
        assert_eq!(config.log_path(), Some(dir.path().join("anagrams.log")));
    }

    #[test]
    fn test_absolute_log_path_kept() {
        let config = Config {
            log_file: Some("/var/log/anagrams.log".into()),
            project_root: PathBuf::from("/srv"),
            ..Config::default()
        };
        assert_eq!(
            config.log_path(),
            Some(PathBuf::from("/var/log/anagrams.log"))
        );
    }
}

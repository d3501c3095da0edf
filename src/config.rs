use crate::constants::DEFAULT_LOG_LEVEL;
use std::env::VarError;
use std::path::PathBuf;

/// Runtime configuration, resolved defaults-first: built-in defaults, then
/// environment overrides, then an explicit root from the CLI when given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn defaults() -> Self {
        Self {
            root: PathBuf::from("."),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, String> {
        let mut cfg = Self::defaults();
        cfg.apply_env_overrides()?;
        Ok(cfg)
    }

    pub fn from_env_with_root(root: PathBuf) -> Result<Self, String> {
        let mut cfg = Self::from_env()?;
        cfg.root = root;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) -> Result<(), String> {
        if let Some(root) = load_env_value("EXEMPLATE_ROOT")? {
            self.root = PathBuf::from(root);
        }
        if let Some(level) = load_env_value("EXEMPLATE_LOG_LEVEL")? {
            self.log_level = level;
        }
        Ok(())
    }
}

fn load_env_value(key: &str) -> Result<Option<String>, String> {
    match std::env::var(key) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(format!("{key} is not valid UTF-8")),
    }
}

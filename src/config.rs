use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::scaffold::Language;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root of the contest project to scaffold into. "~" expands to $HOME.
    pub project_dir: String,
    /// Explicit target language. Unset means probe the project root.
    pub language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_dir: ".".to_string(),
            language: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".atcgen")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn load() -> Result<Config> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config =
            toml::from_str(&contents).with_context(|| "Failed to parse config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config dir {}", dir.display()))?;
        let path = Self::config_path();
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn expanded_project_dir(&self) -> PathBuf {
        if self.project_dir.starts_with('~') {
            let home = dirs::home_dir().expect("Could not find home directory");
            home.join(self.project_dir.strip_prefix("~/").unwrap_or(""))
        } else {
            PathBuf::from(&self.project_dir)
        }
    }

    /// Target language for the run: an explicit config entry wins (and must
    /// name a supported language); otherwise the project root is probed.
    pub fn resolve_language(&self, project_dir: &Path) -> Result<Language> {
        match &self.language {
            Some(name) => Language::from_name(name),
            None => Ok(detect_language(project_dir)),
        }
    }
}

/// Probes the project root for a build manifest: Cargo.toml means Rust,
/// build.sbt means Scala. Rust when neither is present.
pub fn detect_language(project_dir: &Path) -> Language {
    if project_dir.join("Cargo.toml").exists() {
        Language::Rust
    } else if project_dir.join("build.sbt").exists() {
        Language::Scala
    } else {
        Language::Rust
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn probe_prefers_cargo_manifest() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Cargo.toml"), "[package]\n").unwrap();
        std::fs::write(dir.path().join("build.sbt"), "").unwrap();
        assert_eq!(detect_language(dir.path()), Language::Rust);
    }

    #[test]
    fn probe_finds_sbt_projects() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("build.sbt"), "").unwrap();
        assert_eq!(detect_language(dir.path()), Language::Scala);
    }

    #[test]
    fn probe_defaults_to_rust() {
        let dir = TempDir::new().unwrap();
        assert_eq!(detect_language(dir.path()), Language::Rust);
    }

    #[test]
    fn explicit_language_overrides_probe() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Cargo.toml"), "[package]\n").unwrap();
        let config = Config {
            project_dir: ".".to_string(),
            language: Some("scala".to_string()),
        };
        assert_eq!(config.resolve_language(dir.path()).unwrap(), Language::Scala);

        let bad = Config {
            project_dir: ".".to_string(),
            language: Some("haskell".to_string()),
        };
        assert!(bad.resolve_language(dir.path()).is_err());
    }
}

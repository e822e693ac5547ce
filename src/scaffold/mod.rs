pub mod naming;
pub mod rust;
pub mod scala;
pub mod template;

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::atcoder::types::ContestData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Rust,
    Scala,
}

impl Language {
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rust" => Ok(Language::Rust),
            "scala" => Ok(Language::Scala),
            other => bail!("Unsupported language for scaffolding: {other}"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Rust => write!(f, "rust"),
            Language::Scala => write!(f, "scala"),
        }
    }
}

/// One scaffold run's output, for the outcome report.
#[derive(Debug, Clone)]
pub struct ScaffoldSummary {
    pub language: Language,
    pub project_dir: PathBuf,
    pub sources_written: usize,
    pub tests_written: usize,
    /// Build targets appended to the manifest; always 0 for languages
    /// without a manifest patch step.
    pub targets_declared: usize,
}

impl fmt::Display for ScaffoldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} source stubs, {} test files in {}",
            self.language,
            self.sources_written,
            self.tests_written,
            self.project_dir.display()
        )?;
        if self.targets_declared > 0 {
            write!(f, " ({} bin targets declared)", self.targets_declared)?;
        }
        Ok(())
    }
}

/// A language backend: computes the layout for a contest and materializes
/// source stubs, rendered test files and (where the language has one) the
/// build-manifest patch.
///
/// Implementations are stateless; directory creation is idempotent and test
/// files are re-rendered from the current sample data on every run, so
/// re-running a scaffold refreshes tests without manual deletion.
pub trait ProjectUpdater {
    fn language(&self) -> Language;

    fn execute(&self, project_root: &Path, contest: &ContestData) -> Result<ScaffoldSummary>;
}

pub fn updater_for(language: Language) -> Box<dyn ProjectUpdater + Send> {
    match language {
        Language::Rust => Box::new(rust::RustProjectUpdater),
        Language::Scala => Box::new(scala::ScalaProjectUpdater),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_names_round_trip() {
        assert_eq!(Language::from_name("rust").unwrap(), Language::Rust);
        assert_eq!(Language::from_name("Scala").unwrap(), Language::Scala);
        assert!(Language::from_name("python3").is_err());
    }

    #[test]
    fn factory_matches_language() {
        assert_eq!(updater_for(Language::Rust).language(), Language::Rust);
        assert_eq!(updater_for(Language::Scala).language(), Language::Scala);
    }
}

//! Run configuration read from `nestspec.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use serde::Deserialize;

/// Which [`PrintFormat`](crate::format::PrintFormat) renders the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    #[default]
    Verbose,
    Simple,
}

/// Run configuration (TOML).
///
/// Every field is optional in the file; command-line flags override it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunnerConfig {
    pub format: FormatKind,

    /// Only run root specs whose name contains this substring.
    pub filter: Option<String>,

    /// Also write the results as JSON to this path.
    pub json_report: Option<PathBuf>,
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(filter) = &self.filter {
            if filter.trim().is_empty() {
                return Err(anyhow!("filter must not be blank"));
            }
        }
        if let Some(path) = &self.json_report {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("json_report must be a non-empty path"));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RunnerConfig::default()`.
pub fn load_config(path: &Path) -> Result<RunnerConfig> {
    if !path.exists() {
        return Ok(RunnerConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RunnerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, RunnerConfig::default());
    }

    #[test]
    fn full_file_sets_every_field() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nestspec.toml");
        fs::write(
            &path,
            "format = \"simple\"\nfilter = \"Stack\"\njson_report = \"report.json\"\n",
        )
        .expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(
            cfg,
            RunnerConfig {
                format: FormatKind::Simple,
                filter: Some("Stack".to_string()),
                json_report: Some(PathBuf::from("report.json")),
            }
        );
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nestspec.toml");
        fs::write(&path, "format = \"simple\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.format, FormatKind::Simple);
        assert_eq!(cfg.filter, None);
    }

    #[test]
    fn blank_filter_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nestspec.toml");
        fs::write(&path, "filter = \"  \"\n").expect("write");
        let err = load_config(&path).expect_err("blank filter");
        assert!(err.to_string().contains("filter"));
    }
}

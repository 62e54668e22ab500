//! Repository configuration.
//!
//! The footer links every page back to its source on GitHub, so the run needs
//! two values: the repository identifier (`owner/repo`) and the branch name.
//! Both are resolved exactly once at startup and handed to the rest of the
//! pipeline as a read-only [`Config`]; no other module reads the environment.
//!
//! ## Resolution order
//!
//! Later sources override earlier ones:
//!
//! 1. Built-in defaults (`owner/repo`, `main`)
//! 2. Optional `toolshelf.toml` in the source directory
//! 3. Environment variables `GITHUB_REPOSITORY` and `GITHUB_REF_NAME`
//!
//! The environment variables are the ones GitHub Actions sets, so a CI build
//! picks up the right repository without any config file at all.
//!
//! ## Config file
//!
//! ```toml
//! # toolshelf.toml (both keys optional)
//! repo = "ccollis/tools"
//! branch = "main"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

pub const DEFAULT_REPO: &str = "owner/repo";
pub const DEFAULT_BRANCH: &str = "main";

/// Resolved run configuration. Constructed once, then passed by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Repository identifier in `owner/repo` form.
    pub repo: String,
    /// Branch used in per-page source links.
    pub branch: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: DEFAULT_REPO.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl Config {
    /// Repository root URL, also used as the index page's source link.
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}", self.repo)
    }

    /// Source URL for a specific page on the configured branch.
    pub fn blob_url(&self, filename: &str) -> String {
        format!("https://github.com/{}/blob/{}/{}", self.repo, self.branch, filename)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.repo.trim().is_empty() {
            return Err(ConfigError::Validation("repo must not be empty".into()));
        }
        if self.branch.trim().is_empty() {
            return Err(ConfigError::Validation("branch must not be empty".into()));
        }
        Ok(())
    }
}

/// Partial overrides from `toolshelf.toml`. Both keys optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    repo: Option<String>,
    branch: Option<String>,
}

/// Read `toolshelf.toml` from a directory, if present.
///
/// Returns `Ok(None)` when the file doesn't exist; a file that exists but
/// fails to parse is an error, not a silent fallback.
fn load_file_config(dir: &Path) -> Result<Option<FileConfig>, ConfigError> {
    let path = dir.join("toolshelf.toml");
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Layer overrides onto defaults. Pure core of [`load_config`], split out so
/// tests can exercise precedence without touching the process environment.
fn resolve(
    file: Option<FileConfig>,
    env_repo: Option<String>,
    env_branch: Option<String>,
) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    if let Some(file) = file {
        if let Some(repo) = file.repo {
            config.repo = repo;
        }
        if let Some(branch) = file.branch {
            config.branch = branch;
        }
    }
    if let Some(repo) = env_repo {
        config.repo = repo;
    }
    if let Some(branch) = env_branch {
        config.branch = branch;
    }
    config.validate()?;
    Ok(config)
}

/// Resolve the run configuration for a source directory.
///
/// Defaults, overridden by `toolshelf.toml` in `source_dir`, overridden by
/// `GITHUB_REPOSITORY` / `GITHUB_REF_NAME` from the environment.
pub fn load_config(source_dir: &Path) -> Result<Config, ConfigError> {
    let file = load_file_config(source_dir)?;
    let env_repo = std::env::var("GITHUB_REPOSITORY").ok();
    let env_branch = std::env::var("GITHUB_REF_NAME").ok();
    resolve(file, env_repo, env_branch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = resolve(None, None, None).unwrap();
        assert_eq!(config.repo, "owner/repo");
        assert_eq!(config.branch, "main");
    }

    #[test]
    fn file_overrides_defaults() {
        let file = FileConfig {
            repo: Some("ccollis/tools".into()),
            branch: None,
        };
        let config = resolve(Some(file), None, None).unwrap();
        assert_eq!(config.repo, "ccollis/tools");
        assert_eq!(config.branch, "main");
    }

    #[test]
    fn env_overrides_file() {
        let file = FileConfig {
            repo: Some("from/file".into()),
            branch: Some("file-branch".into()),
        };
        let config = resolve(
            Some(file),
            Some("from/env".into()),
            Some("env-branch".into()),
        )
        .unwrap();
        assert_eq!(config.repo, "from/env");
        assert_eq!(config.branch, "env-branch");
    }

    #[test]
    fn empty_repo_rejected() {
        let result = resolve(None, Some("".into()), None);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn empty_branch_rejected() {
        let result = resolve(None, None, Some("   ".into()));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn repo_url_and_blob_url() {
        let config = Config {
            repo: "ccollis/tools".into(),
            branch: "main".into(),
        };
        assert_eq!(config.repo_url(), "https://github.com/ccollis/tools");
        assert_eq!(
            config.blob_url("goddamn.html"),
            "https://github.com/ccollis/tools/blob/main/goddamn.html"
        );
    }

    #[test]
    fn load_file_config_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert!(load_file_config(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn load_file_config_reads_partial_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("toolshelf.toml"), r#"repo = "a/b""#).unwrap();
        let file = load_file_config(tmp.path()).unwrap().unwrap();
        assert_eq!(file.repo.as_deref(), Some("a/b"));
        assert_eq!(file.branch, None);
    }

    #[test]
    fn load_file_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("toolshelf.toml"), "not toml [[[").unwrap();
        assert!(matches!(
            load_file_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("toolshelf.toml"), r#"rpeo = "a/b""#).unwrap();
        let result = load_file_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}

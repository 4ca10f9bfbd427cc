//! Configuration for hamdir.
//!
//! Settings come from an optional TOML file with sensible defaults for
//! every field, so the tool runs with no configuration at all. The file
//! is looked up at an explicit `--config` path, then `./hamdir.toml`,
//! then the platform config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User password of the published directory document, as shared by the
/// operator alongside the download link.
const DEFAULT_PDF_PASSWORD: &str = "passw0rd";

/// Default HTTP request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Tool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Download page listing the current directory PDF.
    pub download_page: String,
    /// User password for the protected PDF.
    pub pdf_password: String,
    /// Directory the output files are written to.
    pub output_dir: PathBuf,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Override for the HTTP user agent.
    pub user_agent: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            download_page: crate::fetch::DEFAULT_DOWNLOAD_PAGE.to_string(),
            pdf_password: DEFAULT_PDF_PASSWORD.to_string(),
            output_dir: PathBuf::from("."),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl Settings {
    /// Load settings, preferring an explicit config path.
    ///
    /// Without an explicit path, `hamdir.toml` in the working directory
    /// is tried, then `hamdir/config.toml` under the platform config
    /// directory. A missing file is not an error; defaults apply.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::from_file(path);
        }

        for candidate in Self::candidate_paths() {
            if candidate.exists() {
                tracing::debug!("loading settings from {}", candidate.display());
                return Self::from_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    /// Standard config file locations, in lookup order.
    fn candidate_paths() -> Vec<PathBuf> {
        let mut candidates = vec![PathBuf::from("hamdir.toml")];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("hamdir").join("config.toml"));
        }
        candidates
    }

    /// Parse settings from a TOML file.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Request timeout as a [`std::time::Duration`].
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let settings = Settings::default();
        assert_eq!(settings.download_page, crate::fetch::DEFAULT_DOWNLOAD_PAGE);
        assert_eq!(settings.pdf_password, "passw0rd");
        assert_eq!(settings.output_dir, PathBuf::from("."));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let parsed: Settings = toml::from_str("request_timeout_secs = 5\n").unwrap();
        assert_eq!(parsed.request_timeout_secs, 5);
        assert_eq!(parsed.pdf_password, "passw0rd");
    }
}

//! Configuration for the explorer

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "nfhs-explorer.json";

/// Environment variable overriding the dataset path.
pub const DATASET_ENV_VAR: &str = "NFHS_EXPLORER_DATASET";

/// Explorer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Dataset opened at start-up (default: none, use File → Open…)
    pub dataset_path: Option<PathBuf>,

    /// Initial window size in logical points (default: 1280 x 860)
    pub window_size: [f32; 2],

    /// Rows shown in the dataset preview (default: 5)
    pub preview_rows: usize,

    /// Warn when a prediction input lies outside the fitted x range (default: true)
    pub warn_on_extrapolation: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            window_size: [1280.0, 860.0],
            preview_rows: 5,
            warn_on_extrapolation: true,
        }
    }
}

impl ExplorerConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Resolve the start-up configuration.
    ///
    /// Precedence for the dataset path, highest first: `cli_path`, the
    /// `NFHS_EXPLORER_DATASET` variable, `nfhs-explorer.json` in the working
    /// directory. An unreadable config file is logged and ignored.
    pub fn resolve(cli_path: Option<PathBuf>) -> Self {
        let file = Path::new(CONFIG_FILE_NAME);
        let mut config = if file.exists() {
            match Self::load(file) {
                Ok(c) => {
                    log::info!("Using config {}", file.display());
                    c
                }
                Err(e) => {
                    log::warn!("Ignoring config: {:#}", anyhow::Error::new(e));
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.apply_overrides(std::env::var_os(DATASET_ENV_VAR).map(PathBuf::from), cli_path);
        config
    }

    /// Apply the environment and command-line dataset paths.
    pub fn apply_overrides(&mut self, env_path: Option<PathBuf>, cli_path: Option<PathBuf>) {
        if let Some(p) = cli_path.or(env_path).filter(|p| !p.as_os_str().is_empty()) {
            self.dataset_path = Some(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = ExplorerConfig::from_json(r#"{ "preview_rows": 10 }"#).unwrap();
        assert_eq!(cfg.preview_rows, 10);
        assert_eq!(cfg.window_size, [1280.0, 860.0]);
        assert!(cfg.warn_on_extrapolation);
        assert_eq!(cfg.dataset_path, None);
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let mut cfg = ExplorerConfig {
            dataset_path: Some("file.csv".into()),
            ..Default::default()
        };
        cfg.apply_overrides(Some("env.csv".into()), None);
        assert_eq!(cfg.dataset_path, Some(PathBuf::from("env.csv")));
        cfg.apply_overrides(Some("env.csv".into()), Some("cli.csv".into()));
        assert_eq!(cfg.dataset_path, Some(PathBuf::from("cli.csv")));
        cfg.apply_overrides(Some(PathBuf::new()), None);
        assert_eq!(cfg.dataset_path, Some(PathBuf::from("cli.csv")));
    }

    #[test]
    fn unknown_file_is_a_read_error() {
        let err = ExplorerConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

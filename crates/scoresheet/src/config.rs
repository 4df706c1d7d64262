//! JSON configuration for the extraction pipeline.

use scoresheet_export::{ExportError, ExportParams};
use scoresheet_grid::{GridParams, LineDetectorParams};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid export settings: {0}")]
    Export(#[from] ExportError),
}

/// Parameters for every stage. Missing sections fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoresheetConfig {
    pub lines: LineDetectorParams,
    pub grid: GridParams,
    pub export: ExportParams,
}

impl ScoresheetConfig {
    /// Load a JSON config from disk and check it.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let cfg: Self = serde_json::from_str(&raw)?;
        cfg.export.validate()?;
        Ok(cfg)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_json_overrides_only_given_fields() {
        let cfg: ScoresheetConfig = serde_json::from_str(
            r#"{ "grid": { "min_columns": 3 }, "export": { "moves_per_block": 25 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.grid.min_columns, 3);
        assert_eq!(cfg.grid.min_row_height, 10);
        assert_eq!(cfg.export.moves_per_block, 25);
        assert_eq!(cfg.lines, LineDetectorParams::default());
    }

    #[test]
    fn written_config_loads_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cfg.json");
        let mut cfg = ScoresheetConfig::default();
        cfg.lines.kernel_length = 30;
        cfg.write_json(&path).unwrap();
        assert_eq!(ScoresheetConfig::load_json(&path).unwrap(), cfg);
    }

    #[test]
    fn malformed_json_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            ScoresheetConfig::load_json(&path),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn out_of_range_block_size_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("huge.json");
        fs::write(&path, r#"{ "export": { "moves_per_block": 4294967295 } }"#).unwrap();
        assert!(matches!(
            ScoresheetConfig::load_json(&path),
            Err(ConfigError::Export(ExportError::MovesPerBlock { got: u32::MAX, .. }))
        ));
    }
}

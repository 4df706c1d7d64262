use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::ExportError;

/// Which player's half of a numbered move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "w")]
    White,
    #[serde(rename = "b")]
    Black,
}

impl Side {
    pub fn suffix(self) -> &'static str {
        match self {
            Side::White => "w",
            Side::Black => "b",
        }
    }
}

/// One written half-move image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Move number, 1-based.
    pub n: u32,
    pub side: Side,
    /// Path relative to the output root, always `/`-separated.
    pub file: String,
    /// A blank stand-in was written instead of a real crop. Not persisted.
    #[serde(skip)]
    pub placeholder: bool,
}

/// Ordered list of records, persisted as a JSON array of `{n, side, file}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveIndex {
    pub records: Vec<MoveRecord>,
}

impl MoveIndex {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn placeholder_count(&self) -> usize {
        self.records.iter().filter(|r| r.placeholder).count()
    }

    /// Load an index from JSON on disk. Placeholder flags are not restored.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this index to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape_omits_placeholder_flag() {
        let index = MoveIndex {
            records: vec![MoveRecord {
                n: 3,
                side: Side::Black,
                file: "output/g/g_03_b.png".into(),
                placeholder: true,
            }],
        };
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(json, r#"[{"n":3,"side":"b","file":"output/g/g_03_b.png"}]"#);

        let back: MoveIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(back.records[0].n, 3);
        assert!(!back.records[0].placeholder);
    }
}

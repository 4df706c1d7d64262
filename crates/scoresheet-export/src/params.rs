use serde::{Deserialize, Serialize};

use crate::ExportError;

/// Largest block size whose move numbers still fit the two-digit file names.
pub const MAX_MOVES_PER_BLOCK: u32 = 99;

/// Exporter settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportParams {
    /// Move rows per block; the right block is numbered from `moves_per_block + 1`.
    pub moves_per_block: u32,
    /// A candidate start cell brighter than this on average is a header.
    pub header_mean_threshold: f64,
    /// A candidate start cell with less spread than this is a header.
    pub header_std_threshold: f64,
    /// Both sides of a start-row candidate cell must exceed this.
    pub min_data_cell_size: u32,
    /// Both sides of a left-block cell must exceed this to be written as is.
    pub min_valid_cell_size: u32,
    pub placeholder_width: u32,
    pub placeholder_height: u32,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            moves_per_block: 20,
            header_mean_threshold: 240.0,
            header_std_threshold: 10.0,
            min_data_cell_size: 10,
            min_valid_cell_size: 5,
            placeholder_width: 80,
            placeholder_height: 30,
        }
    }
}

impl ExportParams {
    /// Reject settings the exporter cannot number moves with.
    pub fn validate(&self) -> Result<(), ExportError> {
        if !(1..=MAX_MOVES_PER_BLOCK).contains(&self.moves_per_block) {
            return Err(ExportError::MovesPerBlock {
                got: self.moves_per_block,
                max: MAX_MOVES_PER_BLOCK,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size_bounds() {
        assert!(ExportParams::default().validate().is_ok());
        for bad in [0, MAX_MOVES_PER_BLOCK + 1, u32::MAX] {
            let params = ExportParams {
                moves_per_block: bad,
                ..ExportParams::default()
            };
            assert!(matches!(
                params.validate(),
                Err(ExportError::MovesPerBlock { got, max: 99 }) if got == bad
            ));
        }
    }
}

//! Table structure recovery for photographed chess scoresheets.
//!
//! The crate covers the image-side half of the extraction pipeline:
//! - [`detect_lines`]: ruled table lines via adaptive thresholding and
//!   morphological opening,
//! - [`build_grid`]: a row-major grid of cell crops between adjacent lines,
//! - [`ColumnClassifier`]: semantic roles (move number / white / black) for
//!   grid columns.
//!
//! Nothing here touches the filesystem; writing cells out lives in
//! `scoresheet-export`.

mod cells;
mod columns;
mod error;
mod filter;
mod lines;
mod morphology;
mod params;

pub use cells::{build_grid, Cell, CellGrid};
pub use columns::{ChessBlockClassifier, ColumnClassifier, ColumnRole, ColumnRoleMap};
pub use error::GridError;
pub use lines::{detect_lines, detect_lines_checked, LinePositions};
pub use params::{GridParams, LineDetectorParams};

//! Writing scoresheet cells to disk.
//!
//! - [`export_moves`] walks a [`CellGrid`](scoresheet_grid::CellGrid) and
//!   writes one PNG per half-move, substituting blank placeholders so the
//!   move numbering stays dense.
//! - [`MoveIndex`] is the JSON index of what was written.
//! - [`render_debug_overlay`] draws detected rule lines for inspection.

mod debug;
mod error;
mod exporter;
mod layout;
mod params;
mod record;

pub use debug::{render_debug_overlay, write_debug_overlay};
pub use error::ExportError;
pub use exporter::{export_moves, find_start_row, ExportOutcome};
pub use layout::OutputLayout;
pub use params::{ExportParams, MAX_MOVES_PER_BLOCK};
pub use record::{MoveIndex, MoveRecord, Side};

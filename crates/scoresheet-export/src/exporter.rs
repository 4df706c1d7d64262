//! Per-move cell export.

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use scoresheet_core::PixelStats;
use scoresheet_grid::{Cell, CellGrid, ColumnRole, ColumnRoleMap};

use crate::{ExportError, ExportParams, MoveIndex, MoveRecord, OutputLayout, Side};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// What an export run produced.
#[derive(Clone, Debug)]
pub struct ExportOutcome {
    /// Records in emission order, as persisted to `index_path`.
    pub index: MoveIndex,
    /// First grid row treated as move data.
    pub start_row: usize,
    pub index_path: PathBuf,
}

impl ExportOutcome {
    /// Number of records written.
    pub fn count(&self) -> usize {
        self.index.len()
    }
}

fn looks_like_header(cell: &Cell, params: &ExportParams) -> bool {
    match PixelStats::of_rgb(&cell.image) {
        Some(s) => s.mean > params.header_mean_threshold || s.std_dev < params.header_std_threshold,
        None => true,
    }
}

/// Index of the first row whose white-move cell looks handwritten.
///
/// Rows whose cell is too small, near-blank, or too uniform are skipped as
/// headers. Falls back to row 0 when no row qualifies.
pub fn find_start_row(grid: &CellGrid, roles: &ColumnRoleMap, params: &ExportParams) -> usize {
    let Some(white_col) = roles.get(ColumnRole::LeftWhite) else {
        return 0;
    };
    grid.rows
        .iter()
        .position(|row| {
            row.get(white_col).is_some_and(|cell| {
                cell.min_side() > params.min_data_cell_size && !looks_like_header(cell, params)
            })
        })
        .unwrap_or(0)
}

struct MoveWriter<'a> {
    layout: &'a OutputLayout,
    dir: PathBuf,
    params: &'a ExportParams,
    index: MoveIndex,
}

impl MoveWriter<'_> {
    fn placeholder_image(&self) -> RgbImage {
        RgbImage::from_pixel(
            self.params.placeholder_width,
            self.params.placeholder_height,
            Rgb([255, 255, 255]),
        )
    }

    /// Write `cell` if both sides exceed the validity threshold, otherwise a placeholder.
    fn emit_validated(&mut self, n: u32, side: Side, cell: &Cell) {
        let min = self.params.min_valid_cell_size;
        if cell.width() > min && cell.height() > min {
            self.emit(n, side, cell);
        } else {
            log::warn!(
                "invalid cell for move {n}{}: {}x{} px",
                side.suffix(),
                cell.width(),
                cell.height()
            );
            let name = self.layout.move_file_name(n, side);
            self.emit_placeholder(n, side, name);
        }
    }

    /// Write `cell`, falling back to a placeholder if encoding or I/O fails.
    fn emit(&mut self, n: u32, side: Side, cell: &Cell) {
        let name = self.layout.move_file_name(n, side);
        match save_png(&cell.image, &self.dir.join(&name)) {
            Ok(()) => self.push(n, side, &name, cell.is_placeholder()),
            Err(err) => {
                log::warn!(
                    "failed to write move {n}{} ({}x{} px): {err}",
                    side.suffix(),
                    cell.width(),
                    cell.height()
                );
                self.emit_placeholder(n, side, name);
            }
        }
    }

    fn emit_placeholder(&mut self, n: u32, side: Side, name: String) {
        let path = self.dir.join(&name);
        if let Err(err) = save_png(&self.placeholder_image(), &path) {
            log::error!("failed to write placeholder {}: {err}", path.display());
        } else {
            log::warn!("created placeholder for move {n}{}", side.suffix());
        }
        self.push(n, side, &name, true);
    }

    fn push(&mut self, n: u32, side: Side, name: &str, placeholder: bool) {
        self.index.records.push(MoveRecord {
            n,
            side,
            file: self.layout.relative_move_path(name),
            placeholder,
        });
    }
}

fn save_png(img: &RgbImage, path: &Path) -> Result<(), image::ImageError> {
    img.save_with_format(path, ImageFormat::Png)
}

/// Write one image per half-move and the JSON index.
///
/// Starting at [`find_start_row`], up to `moves_per_block` rows are visited.
/// Each row yields, when its columns exist, left white / left black (moves
/// `1..=N`) then right white / right black (moves `N+1..=2N`). Left cells are
/// size-checked before writing; right cells only fall back on a failed write.
/// Either way a record is appended, so numbering has no gaps.
///
/// Cells `build_grid` already replaced with a stand-in are written as is but
/// still recorded as placeholders.
///
/// Only invalid params, directory creation and the index write can fail the
/// export.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip_all, fields(rows = grid.len(), base = layout.base_name()))
)]
pub fn export_moves(
    grid: &CellGrid,
    roles: &ColumnRoleMap,
    layout: &OutputLayout,
    params: &ExportParams,
) -> Result<ExportOutcome, ExportError> {
    params.validate()?;
    layout.create_dirs()?;

    let start_row = find_start_row(grid, roles, params);
    log::debug!("move data starts at grid row {start_row}");

    let mut writer = MoveWriter {
        layout,
        dir: layout.moves_dir(),
        params,
        index: MoveIndex::default(),
    };

    let rows = grid
        .rows
        .iter()
        .skip(start_row)
        .take(params.moves_per_block as usize);
    for (offset, row) in rows.enumerate() {
        let n = offset as u32 + 1;

        if let Some(white) = roles.get(ColumnRole::LeftWhite).and_then(|c| row.get(c)) {
            writer.emit_validated(n, Side::White, white);
            if let Some(black) = roles.get(ColumnRole::LeftBlack).and_then(|c| row.get(c)) {
                writer.emit_validated(n, Side::Black, black);
            }
        }

        let right_n = n + params.moves_per_block;
        if let Some(white) = roles.get(ColumnRole::RightWhite).and_then(|c| row.get(c)) {
            writer.emit(right_n, Side::White, white);
            if let Some(black) = roles.get(ColumnRole::RightBlack).and_then(|c| row.get(c)) {
                writer.emit(right_n, Side::Black, black);
            }
        }
    }

    let index_path = layout.index_path();
    writer.index.write_json(&index_path)?;
    log::info!(
        "wrote {} move cells ({} placeholders), index {}",
        writer.index.len(),
        writer.index.placeholder_count(),
        index_path.display()
    );

    Ok(ExportOutcome {
        index: writer.index,
        start_row,
        index_path,
    })
}

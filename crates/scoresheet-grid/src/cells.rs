//! Cell grid reconstruction from detected line positions.

use crate::GridParams;
use image::{imageops, Rgb, RgbImage};
use scoresheet_core::PixelRect;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// One table cell: a crop of the source image, or a white stand-in when the
/// padded band clipped to nothing.
#[derive(Clone, Debug)]
pub struct Cell {
    /// Source rectangle of the crop; `None` for a placeholder.
    pub rect: Option<PixelRect>,
    pub image: RgbImage,
}

impl Cell {
    pub fn placeholder(width: u32, height: u32) -> Self {
        Self {
            rect: None,
            image: RgbImage::from_pixel(width, height, Rgb([255, 255, 255])),
        }
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.rect.is_none()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Smaller of the two pixel dimensions.
    #[inline]
    pub fn min_side(&self) -> u32 {
        self.width().min(self.height())
    }
}

/// Row-major cells, top to bottom and left to right.
#[derive(Clone, Debug, Default)]
pub struct CellGrid {
    pub rows: Vec<Vec<Cell>>,
}

impl CellGrid {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Column count of the first row, 0 for an empty grid.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}

fn band_padding(band_h: i64, band_w: i64, params: &GridParams) -> i64 {
    let div = params.padding_divisor.max(1) as i64;
    (params.max_padding as i64)
        .min(band_h / div)
        .min(band_w / div)
        .max(0)
}

/// Slice `image` into cells bounded by consecutive line pairs.
///
/// Row bands thinner than `min_row_height` are skipped; rows with fewer than
/// `min_columns` cells are dropped. Every retained position holds a cell with
/// positive width and height.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip_all, fields(rows = h_lines.len(), cols = v_lines.len()))
)]
pub fn build_grid(
    image: &RgbImage,
    h_lines: &[u32],
    v_lines: &[u32],
    params: &GridParams,
) -> CellGrid {
    let (img_w, img_h) = image.dimensions();
    let mut grid = CellGrid::default();

    for (band_idx, ys) in h_lines.windows(2).enumerate() {
        let (y1, y2) = (ys[0] as i64, ys[1] as i64);
        if y2 - y1 < params.min_row_height as i64 {
            log::debug!(
                "skip row band {band_idx}: {y1}..{y2} thinner than {}px",
                params.min_row_height
            );
            continue;
        }

        let row: Vec<Cell> = v_lines
            .windows(2)
            .map(|xs| {
                let (x1, x2) = (xs[0] as i64, xs[1] as i64);
                let pad = band_padding(y2 - y1, x2 - x1, params);
                match PixelRect::from_bounds_clipped(
                    x1 + pad,
                    y1 + pad,
                    x2 - pad,
                    y2 - pad,
                    img_w,
                    img_h,
                ) {
                    Some(r) => Cell {
                        rect: Some(r),
                        image: imageops::crop_imm(image, r.x, r.y, r.width, r.height).to_image(),
                    },
                    None => Cell::placeholder(params.placeholder_width, params.placeholder_height),
                }
            })
            .collect();

        if row.len() < params.min_columns {
            log::debug!(
                "drop row band {band_idx}: {} columns < {}",
                row.len(),
                params.min_columns
            );
            continue;
        }
        grid.rows.push(row);
    }

    log::debug!(
        "grid: {} rows x {} columns",
        grid.len(),
        grid.column_count()
    );
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven_columns() -> Vec<u32> {
        vec![10, 110, 210, 310, 410, 510, 610]
    }

    #[test]
    fn grid_shape_follows_line_counts() {
        let img = RgbImage::from_pixel(640, 400, Rgb([255, 255, 255]));
        let h: Vec<u32> = (0..6).map(|i| 20 + i * 40).collect();
        let grid = build_grid(&img, &h, &seven_columns(), &GridParams::default());
        assert_eq!(grid.len(), 5);
        assert!(grid.rows.iter().all(|r| r.len() == 6));
        let c = grid.cell(0, 0).unwrap();
        assert_eq!(
            c.rect,
            Some(PixelRect {
                x: 13,
                y: 23,
                width: 94,
                height: 34
            })
        );
        assert_eq!((c.width(), c.height()), (94, 34));
    }

    #[test]
    fn row_band_height_boundary() {
        let img = RgbImage::new(640, 200);
        // Bands of 9px (dropped) and 10px (kept).
        let grid = build_grid(&img, &[20, 29, 39], &seven_columns(), &GridParams::default());
        assert_eq!(grid.len(), 1);
        let c = grid.cell(0, 0).unwrap();
        let r = c.rect.unwrap();
        assert_eq!((r.y, r.height), (31, 6));
    }

    #[test]
    fn padding_shrinks_for_narrow_bands() {
        let img = RgbImage::new(200, 200);
        let v = [0, 8, 16, 24, 32, 40, 48];
        let grid = build_grid(&img, &[0, 100], &v, &GridParams::default());
        let r = grid.cell(0, 0).unwrap().rect.unwrap();
        // band width 8 -> padding 2
        assert_eq!((r.x, r.width), (2, 4));
        assert_eq!((r.y, r.height), (2, 96));
    }

    #[test]
    fn clipped_cell_becomes_placeholder() {
        let img = RgbImage::new(300, 100);
        // The last band starts past the right edge of the image.
        let v = [0, 50, 100, 150, 200, 250, 300, 360];
        let grid = build_grid(&img, &[0, 50], &v, &GridParams::default());
        let row = grid.row(0).unwrap();
        assert_eq!(row.len(), 7);
        let last = &row[6];
        assert!(last.is_placeholder());
        assert_eq!((last.width(), last.height()), (50, 20));
        assert!(last.image.pixels().all(|p| p.0 == [255, 255, 255]));
        assert!(row[..6].iter().all(|c| !c.is_placeholder()));
    }

    #[test]
    fn rows_with_too_few_columns_are_dropped() {
        let img = RgbImage::new(400, 200);
        let grid = build_grid(&img, &[0, 50, 100], &[0, 100, 200, 300], &GridParams::default());
        assert!(grid.is_empty());
        assert_eq!(grid.column_count(), 0);

        let relaxed = GridParams {
            min_columns: 3,
            ..GridParams::default()
        };
        let grid = build_grid(&img, &[0, 50, 100], &[0, 100, 200, 300], &relaxed);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.column_count(), 3);
    }
}

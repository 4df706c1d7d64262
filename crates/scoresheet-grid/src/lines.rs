//! Rule-line detection.
//!
//! Pipeline: luma -> Gaussian blur -> inverted adaptive threshold ->
//! per-axis opening with a long line element -> connected components ->
//! one coordinate per sufficiently long component.

use crate::filter::{adaptive_threshold_inv, gaussian_blur};
use crate::morphology::{open_with_line, Axis};
use crate::{GridError, LineDetectorParams};
use image::{Luma, RgbImage};
use imageproc::region_labelling::{connected_components, Connectivity};
use scoresheet_core::{gray_from_rgb, GrayImage};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Centers of the detected rule lines, sorted ascending without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePositions {
    /// Y coordinates of horizontal lines.
    pub rows: Vec<u32>,
    /// X coordinates of vertical lines.
    pub cols: Vec<u32>,
}

impl LinePositions {
    /// At least two lines per axis, enough to bound one cell.
    pub fn bounds_cells(&self) -> bool {
        self.rows.len() >= 2 && self.cols.len() >= 2
    }

    pub fn into_checked(self) -> Result<Self, GridError> {
        if self.bounds_cells() {
            Ok(self)
        } else {
            Err(GridError::InsufficientLines {
                horizontal: self.rows.len(),
                vertical: self.cols.len(),
            })
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct BoundingBox {
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
}

impl BoundingBox {
    fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

fn component_boxes(mask: GrayImage) -> Vec<BoundingBox> {
    let labels = connected_components(&mask.into_luma(), Connectivity::Eight, Luma([0u8]));
    let mut boxes: Vec<Option<BoundingBox>> = Vec::new();
    for (x, y, px) in labels.enumerate_pixels() {
        let label = px.0[0] as usize;
        if label == 0 {
            continue;
        }
        if boxes.len() < label {
            boxes.resize(label, None);
        }
        let slot = &mut boxes[label - 1];
        match slot {
            Some(b) => {
                b.min_x = b.min_x.min(x);
                b.min_y = b.min_y.min(y);
                b.max_x = b.max_x.max(x);
                b.max_y = b.max_y.max(y);
            }
            None => {
                *slot = Some(BoundingBox {
                    min_x: x,
                    min_y: y,
                    max_x: x,
                    max_y: y,
                })
            }
        }
    }
    boxes.into_iter().flatten().collect()
}

fn sorted_unique(mut v: Vec<u32>) -> Vec<u32> {
    v.sort_unstable();
    v.dedup();
    v
}

/// Locate horizontal and vertical rule lines in a scoresheet photo.
///
/// Handwriting is suppressed by the opening (strokes shorter than
/// `kernel_length` along the axis vanish); leftover blobs are dropped unless
/// they span at least `min_span_frac` of the image along the same axis.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(image, params), fields(width = image.width(), height = image.height()))
)]
pub fn detect_lines(image: &RgbImage, params: &LineDetectorParams) -> LinePositions {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return LinePositions::default();
    }

    let gray = gray_from_rgb(image);
    let blurred = gaussian_blur(&gray, params.blur_kernel, params.blur_sigma);
    let binary = adaptive_threshold_inv(&blurred, params.adaptive_block_size, params.adaptive_c);

    let horizontal = open_with_line(&binary.view(), Axis::Horizontal, params.kernel_length);
    let vertical = open_with_line(&binary.view(), Axis::Vertical, params.kernel_length);

    let min_w = params.min_span_frac * width as f32;
    let min_h = params.min_span_frac * height as f32;

    let rows = component_boxes(horizontal)
        .into_iter()
        .filter(|b| b.width() as f32 >= min_w)
        .map(|b| b.min_y + b.height() / 2)
        .collect();
    let cols = component_boxes(vertical)
        .into_iter()
        .filter(|b| b.height() as f32 >= min_h)
        .map(|b| b.min_x + b.width() / 2)
        .collect();

    let lines = LinePositions {
        rows: sorted_unique(rows),
        cols: sorted_unique(cols),
    };
    log::info!(
        "found {} horizontal and {} vertical lines",
        lines.rows.len(),
        lines.cols.len()
    );
    lines
}

/// [`detect_lines`], failing when either axis has fewer than two lines.
pub fn detect_lines_checked(
    image: &RgbImage,
    params: &LineDetectorParams,
) -> Result<LinePositions, GridError> {
    detect_lines(image, params).into_checked()
}

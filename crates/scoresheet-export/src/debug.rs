//! Line overlay for visually checking detection.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use scoresheet_grid::LinePositions;

use crate::ExportError;

const HORIZONTAL_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const VERTICAL_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
const THICKNESS: u32 = 2;

/// Copy of `image` with horizontal lines in red and vertical lines in blue.
pub fn render_debug_overlay(image: &RgbImage, lines: &LinePositions) -> RgbImage {
    let mut canvas = image.clone();
    let (w, h) = (image.width() as f32, image.height() as f32);
    for &y in &lines.rows {
        for dy in 0..THICKNESS {
            let y = (y + dy) as f32;
            draw_line_segment_mut(&mut canvas, (0.0, y), (w, y), HORIZONTAL_COLOR);
        }
    }
    for &x in &lines.cols {
        for dx in 0..THICKNESS {
            let x = (x + dx) as f32;
            draw_line_segment_mut(&mut canvas, (x, 0.0), (x, h), VERTICAL_COLOR);
        }
    }
    canvas
}

/// Render the overlay and save it as JPEG.
pub fn write_debug_overlay(
    image: &RgbImage,
    lines: &LinePositions,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    render_debug_overlay(image, lines).save_with_format(path, ImageFormat::Jpeg)?;
    log::info!("debug overlay saved: {}", path.display());
    Ok(())
}

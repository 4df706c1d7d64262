use ::image::{GrayImage as LumaImage, RgbImage};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h
}

#[derive(Clone, Debug)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    /// All-zero image of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    /// Convert into an `image::GrayImage` without copying the pixel buffer.
    pub fn into_luma(self) -> LumaImage {
        let (w, h) = (self.width as u32, self.height as u32);
        LumaImage::from_raw(w, h, self.data).unwrap_or_else(|| LumaImage::new(w, h))
    }
}

impl GrayImageView<'_> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}

/// BT.601 luma conversion with rounding.
pub fn gray_from_rgb(img: &RgbImage) -> LumaImage {
    let mut out = LumaImage::new(img.width(), img.height());
    for (dst, px) in out.pixels_mut().zip(img.pixels()) {
        let [r, g, b] = px.0;
        let y = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        dst.0[0] = y.round().clamp(0.0, 255.0) as u8;
    }
    out
}

/// Axis-aligned pixel rectangle, `x..x+width` by `y..y+height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Build from signed half-open bounds clipped to `[0, max_x) x [0, max_y)`.
    ///
    /// Returns `None` when the clipped rectangle has no area.
    pub fn from_bounds_clipped(
        x0: i64,
        y0: i64,
        x1: i64,
        y1: i64,
        max_x: u32,
        max_y: u32,
    ) -> Option<Self> {
        let x_start = x0.max(0);
        let y_start = y0.max(0);
        let x_end = x1.min(max_x as i64);
        let y_end = y1.min(max_y as i64);
        if x_end <= x_start || y_end <= y_start {
            return None;
        }
        Some(Self {
            x: x_start as u32,
            y: y_start as u32,
            width: (x_end - x_start) as u32,
            height: (y_end - y_start) as u32,
        })
    }
}

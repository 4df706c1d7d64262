//! Pixel intensity statistics.

use ::image::RgbImage;
use serde::{Deserialize, Serialize};

/// Mean and population standard deviation over every channel sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl PixelStats {
    pub fn from_samples(samples: &[u8]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let mut sum = 0f64;
        let mut sum_sq = 0f64;
        for &v in samples {
            let v = v as f64;
            sum += v;
            sum_sq += v * v;
        }
        let mean = sum / n;
        let var = (sum_sq / n - mean * mean).max(0.0);
        Some(Self {
            mean,
            std_dev: var.sqrt(),
        })
    }

    /// Statistics of an RGB image; `None` for an empty image.
    pub fn of_rgb(img: &RgbImage) -> Option<Self> {
        Self::from_samples(img.as_raw())
    }
}

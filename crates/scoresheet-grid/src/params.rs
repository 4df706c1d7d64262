use serde::{Deserialize, Serialize};

/// Tuning knobs for rule-line detection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineDetectorParams {
    /// Side of the square Gaussian pre-blur kernel (odd).
    pub blur_kernel: usize,
    /// Gaussian sigma of the pre-blur. Values `<= 0` derive sigma from the kernel size.
    pub blur_sigma: f32,
    /// Side of the Gaussian-weighted neighbourhood of the adaptive threshold (odd).
    pub adaptive_block_size: usize,
    /// Constant subtracted from the weighted local mean.
    pub adaptive_c: f32,
    /// Length of the line structuring element used for the opening, in pixels.
    pub kernel_length: usize,
    /// Minimum extent of a line component as a fraction of the image
    /// width (horizontal) or height (vertical).
    pub min_span_frac: f32,
}

impl Default for LineDetectorParams {
    fn default() -> Self {
        Self {
            blur_kernel: 5,
            blur_sigma: 0.0,
            adaptive_block_size: 11,
            adaptive_c: 2.0,
            kernel_length: 40,
            min_span_frac: 0.3,
        }
    }
}

/// Cell slicing parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParams {
    /// Row bands thinner than this are treated as duplicate line detections.
    pub min_row_height: u32,
    /// Upper bound on the inward padding that keeps rule lines out of crops.
    pub max_padding: u32,
    /// Padding never exceeds `band / padding_divisor` on either axis.
    pub padding_divisor: u32,
    /// Rows with fewer cells are discarded.
    pub min_columns: usize,
    /// Size of the white stand-in for cells that clip to nothing.
    pub placeholder_width: u32,
    pub placeholder_height: u32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            min_row_height: 10,
            max_padding: 3,
            padding_divisor: 4,
            min_columns: 6,
            placeholder_width: 50,
            placeholder_height: 20,
        }
    }
}

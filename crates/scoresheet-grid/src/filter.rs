//! Smoothing and binarisation ahead of line extraction.

use image::GrayImage as LumaImage;
use imageproc::filter::separable_filter_equal;
use scoresheet_core::GrayImage;

/// Sigma used for a Gaussian kernel of side `ksize` when none is given.
pub(crate) fn sigma_for_kernel(ksize: usize) -> f32 {
    0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalised 1D Gaussian taps. `ksize` is forced odd and at least 1.
pub(crate) fn gaussian_kernel(ksize: usize, sigma: f32) -> Vec<f32> {
    let ksize = (ksize.max(1) - 1) / 2 * 2 + 1;
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        sigma_for_kernel(ksize)
    };
    let half = (ksize / 2) as f32;
    let denom = 2.0 * sigma * sigma;
    let mut taps: Vec<f32> = (0..ksize)
        .map(|i| {
            let d = i as f32 - half;
            (-d * d / denom).exp()
        })
        .collect();
    let sum: f32 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    taps
}

pub(crate) fn gaussian_blur(img: &LumaImage, ksize: usize, sigma: f32) -> LumaImage {
    let kernel = gaussian_kernel(ksize, sigma);
    separable_filter_equal(img, kernel.as_slice())
}

/// Inverted adaptive threshold against a Gaussian-weighted local mean.
///
/// A pixel becomes foreground (255) when it is at least `c` darker than its
/// neighbourhood, so ink and rule lines light up on a dark background.
pub(crate) fn adaptive_threshold_inv(img: &LumaImage, block_size: usize, c: f32) -> GrayImage {
    let local_mean = gaussian_blur(img, block_size, 0.0);
    let mut out = GrayImage::new(img.width() as usize, img.height() as usize);
    for ((dst, &src), &mean) in out
        .data
        .iter_mut()
        .zip(img.as_raw())
        .zip(local_mean.as_raw())
    {
        if (src as f32) <= mean as f32 - c {
            *dst = 255;
        }
    }
    out
}

//! Binary opening with one-pixel-thick line structuring elements.
//!
//! For a binary mask, opening with a `length x 1` segment keeps exactly the
//! foreground runs that are at least `length` pixels long along that axis, so
//! both passes are implemented as run filters in a single sweep.

use scoresheet_core::{GrayImage, GrayImageView};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

/// Open `mask` with a line of `length` pixels oriented along `axis`.
pub(crate) fn open_with_line(mask: &GrayImageView<'_>, axis: Axis, length: usize) -> GrayImage {
    let mut out = GrayImage::new(mask.width, mask.height);
    let length = length.max(1);
    let (lanes, lane_len) = match axis {
        Axis::Horizontal => (mask.height, mask.width),
        Axis::Vertical => (mask.width, mask.height),
    };
    let index = |lane: usize, pos: usize| match axis {
        Axis::Horizontal => lane * mask.width + pos,
        Axis::Vertical => pos * mask.width + lane,
    };

    for lane in 0..lanes {
        let mut pos = 0;
        while pos < lane_len {
            if mask.data[index(lane, pos)] == 0 {
                pos += 1;
                continue;
            }
            let start = pos;
            while pos < lane_len && mask.data[index(lane, pos)] != 0 {
                pos += 1;
            }
            if pos - start >= length {
                for p in start..pos {
                    out.data[index(lane, p)] = 255;
                }
            }
        }
    }
    out
}

#![allow(dead_code)]

use image::{Rgb, RgbImage};

pub const PAPER: Rgb<u8> = Rgb([225, 222, 215]);
pub const INK: Rgb<u8> = Rgb([30, 30, 40]);
pub const PEN: Rgb<u8> = Rgb([20, 30, 90]);

/// Top of the first horizontal rule and the row pitch.
pub const FIRST_ROW_Y: u32 = 50;
pub const ROW_PITCH: u32 = 40;
pub const RULE_COUNT: u32 = 22;
pub const COLUMN_XS: [u32; 7] = [10, 110, 210, 310, 410, 510, 610];

pub fn rule_ys() -> Vec<u32> {
    (0..RULE_COUNT).map(|i| FIRST_ROW_Y + i * ROW_PITCH).collect()
}

fn fill(img: &mut RgbImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgb<u8>) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            img.put_pixel(x, y, color);
        }
    }
}

/// A short zig-zag "move" written inside the cell whose top-left corner is `(x, y)`.
fn scribble(img: &mut RgbImage, x: u32, y: u32) {
    for i in 0..14 {
        fill(img, x + 15 + i, y + 10 + i, 2, 2, PEN);
        fill(img, x + 29 + i, y + 24 - i, 2, 2, PEN);
        fill(img, x + 43 + i, y + 10 + i, 2, 2, PEN);
    }
    fill(img, x + 60, y + 8, 2, 18, PEN);
    fill(img, x + 66, y + 16, 14, 2, PEN);
}

/// A 640x960 two-block scoresheet: 22 horizontal rules 40 px apart, 7
/// vertical rules, a blank header row, and scribbles in every move cell
/// below it.
pub fn synthetic_scoresheet() -> RgbImage {
    let mut img = RgbImage::from_pixel(640, 960, PAPER);
    let ys = rule_ys();
    let (top, bottom) = (ys[0], ys[ys.len() - 1] + 2);
    let (left, right) = (COLUMN_XS[0], COLUMN_XS[6] + 2);

    for &y in &ys {
        fill(&mut img, left, y, right - left, 2, INK);
    }
    for &x in &COLUMN_XS {
        fill(&mut img, x, top, 2, bottom - top, INK);
    }

    for row in 1..ys.len() - 1 {
        for col in [1usize, 2, 4, 5] {
            scribble(&mut img, COLUMN_XS[col], ys[row]);
        }
    }
    img
}

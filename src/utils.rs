//! Conversions from a packed strip into forms renderers can draw.

use crate::{Matrix, StripEncoder};

/// Gray level of a dark cell in [`to_luma`] output.
pub const DARK_LUMA: u8 = 0x00;

/// Gray level of a blank cell in [`to_luma`] output.
pub const BLANK_LUMA: u8 = 0xFF;

/// Copy each packed row into its own `Vec<u8>`.
pub fn to_matrix(strip: &StripEncoder) -> Matrix {
    let mut rows: Matrix = Vec::with_capacity(strip.rows());
    for y in 0..strip.rows() {
        if let Some(row) = strip.row(y) {
            rows.push(row.to_vec());
        }
    }
    rows
}

/// Expand the strip into an 8-bit grayscale raster.
///
/// Every cell becomes a `scale_x` by `scale_y` block. The raster is
/// `pixel_width * scale_x` wide and `rows * scale_y` high, row major.
pub fn to_luma(strip: &StripEncoder, scale_x: usize, scale_y: usize) -> Vec<u8> {
    let width = strip.pixel_width() * scale_x;
    let mut raster = Vec::with_capacity(width * strip.rows() * scale_y);

    for y in 0..strip.rows() {
        let mut line = Vec::with_capacity(width);
        for x in 0..strip.pixel_width() {
            let value = if strip.is_dark(y, x) {
                DARK_LUMA
            } else {
                BLANK_LUMA
            };
            for _ in 0..scale_x {
                line.push(value);
            }
        }
        for _ in 0..scale_y {
            raster.extend_from_slice(&line);
        }
    }

    raster
}

/// Render the strip as text, one line per row.
pub fn to_text(strip: &StripEncoder, dark: char, blank: char) -> String {
    let mut text = String::new();
    for y in 0..strip.rows() {
        for x in 0..strip.pixel_width() {
            text.push(if strip.is_dark(y, x) { dark } else { blank });
        }
        text.push('\n');
    }
    text
}

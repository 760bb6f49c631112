//! Physical strip geometry.
//!
//! The encoder itself works in cells. These values let a renderer size the
//! cells for print.

/// Widest strip a reader accepts, in millimetres.
pub const MAX_STRIP_WIDTH_MM: f64 = 16.8;

/// Longest strip a reader accepts, in millimetres.
pub const MAX_STRIP_LENGTH_MM: f64 = 241.0;

/// Narrowest printable cell, in millimetres.
pub const MIN_BIT_WIDTH_MM: f64 = 0.15;

/// Shortest printable cell, in millimetres.
pub const MIN_BIT_HEIGHT_MM: f64 = 0.20;

/// Height of a row relative to the width of a cell.
pub fn row_height_ratio() -> f64 {
    MIN_BIT_HEIGHT_MM / MIN_BIT_WIDTH_MM
}

/// Row height in millimetres for a strip `pixel_width` cells wide.
///
/// Cells are spread over [`MAX_STRIP_LENGTH_MM`] and then stretched by
/// [`row_height_ratio`].
pub fn bit_height_mm(pixel_width: usize) -> f64 {
    (MAX_STRIP_LENGTH_MM / pixel_width as f64) * row_height_ratio()
}

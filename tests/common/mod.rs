// Shared helpers for the integration tests
#![allow(dead_code)]

use softstrip::StripEncoder;

pub const HELLO: &[u8] = b"Hello this is the softstrip.";

/// Unpack a row back into scratch polarity: 0 = ink, 1 = blank.
pub fn unpack_row(strip: &StripEncoder, row: usize) -> Vec<u8> {
    (0..strip.pixel_width())
        .map(|x| if strip.is_dark(row, x) { 0 } else { 1 })
        .collect()
}

/// Bytes `0..len` wrapping at 256.
pub fn counting_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 256) as u8).collect()
}

pub fn expected_rows(len: usize, density: usize, header: bool) -> usize {
    let header_rows = if header {
        softstrip::QUIET_ROWS + softstrip::CLOCK_ROWS
    } else {
        0
    };
    let slots = density * 4;
    header_rows + (8 * len + slots - 1) / slots
}

//! Softstrip Encoder
//!
//! This crate turns arbitrary bytes into the bitmap of a paper data strip:
//! a self-clocking, optically scannable barcode made of framed rows.
//!
//! Every data row starts and ends with a fixed marker, carries an
//! alternating row parity pair and two checksum pairs, and holds
//! `density * 4` data bits written as (bit, complement) cell pairs. An
//! optional header of quiet-zone and clock rows lets a reader lock onto
//! the row timing before data begins.
//!
//! # Example
//!
//! ```rust
//! use softstrip::{Config, StripEncoder};
//!
//! let strip = Config::new(2).header(false).encode(b"A").unwrap();
//! assert_eq!(strip.rows(), 1);
//! assert_eq!(strip.bitmap(), &[0xD4, 0xD5, 0x4D, 0x18]);
//!
//! let mut strip = StripEncoder::new(b"Hi".to_vec(), 4).unwrap();
//! strip.emit_header().unwrap();
//! strip.encode(b"Hi").unwrap();
//! assert_eq!(strip.rows(), 15);
//! ```

mod error;
pub mod geometry;
mod row;
pub mod store;
mod strip;
mod utils;

pub use crate::{
    error::Error,
    row::{byte_width, pixel_width},
    store::{RowStore, GROWTH_CHUNK_ROWS},
    strip::{Config, StripEncoder, CLOCK_ROWS, QUIET_ROWS},
    utils::{to_luma, to_matrix, to_text, BLANK_LUMA, DARK_LUMA},
};

/// Type alias for 1-bit bitmap data.
///
/// Each inner `Vec<u8>` represents a single row of cells, with 8 cells
/// packed into each byte, most significant bit first. A set bit is a dark
/// cell.
pub type Matrix = Vec<Vec<u8>>;

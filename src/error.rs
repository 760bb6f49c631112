//! Error types for strip encoding.
//!
//! This module defines all possible errors that can occur while building
//! a strip bitmap, from configuration problems to row buffer growth.

use std::collections::TryReserveError;
use thiserror::Error;

/// Main error type for strip encoding operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Density parameter is out of range.
    ///
    /// The density must be at least 1. The encoder is never built with an
    /// invalid density, so the caller has to construct a new one.
    #[error("Invalid density {0}, must be at least 1")]
    InvalidDensity(usize),

    /// A scratch cell holds something other than 0 or 1 at pack time.
    ///
    /// This points to a bug in row assembly and is not recoverable.
    #[error("Invalid pixel value {value} at column {column}")]
    InvalidPixelValue { column: usize, value: u8 },

    /// Growing the row buffer failed.
    ///
    /// The rows written before the failure are left untouched.
    #[error(transparent)]
    Allocation(#[from] TryReserveError),

    #[error("Row {row} is past the end of the store ({rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    /// The calibration header must come first and only once.
    #[error("Header must be emitted once, before any data")]
    HeaderAfterData,
}

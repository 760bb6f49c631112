//! Growable buffer of packed bitmap rows.

use log::debug;

use crate::error::Error;

/// Number of rows added each time the store runs out of room.
pub const GROWTH_CHUNK_ROWS: usize = 20;

/// Packed rows laid out back to back, `byte_width` bytes each.
///
/// The backing buffer only ever grows, in whole chunks of
/// [`GROWTH_CHUNK_ROWS`] rows. `rows` counts the rows actually written and
/// never exceeds the allocated capacity.
#[derive(Debug, Clone)]
pub struct RowStore {
    bytes: Vec<u8>,
    byte_width: usize,
    rows: usize,
}

impl RowStore {
    /// Create a store for rows of `byte_width` bytes with room for
    /// `capacity_rows` rows up front.
    pub fn with_capacity(byte_width: usize, capacity_rows: usize) -> Result<Self, Error> {
        let len = capacity_rows * byte_width;
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(len)?;
        bytes.resize(len, 0);

        Ok(RowStore {
            bytes,
            byte_width,
            rows: 0,
        })
    }

    pub fn byte_width(&self) -> usize {
        self.byte_width
    }

    /// Number of rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of rows the backing buffer can hold without growing.
    pub fn capacity(&self) -> usize {
        if self.byte_width == 0 {
            return 0;
        }
        self.bytes.len() / self.byte_width
    }

    /// Packed bytes of the written rows only.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.rows * self.byte_width]
    }

    pub fn row(&self, index: usize) -> Option<&[u8]> {
        if index >= self.rows {
            return None;
        }
        let offset = index * self.byte_width;
        Some(&self.bytes[offset..offset + self.byte_width])
    }

    /// Grow the buffer by whole chunks until it holds at least `rows` rows.
    ///
    /// On allocation failure the store is left exactly as it was.
    pub fn ensure_capacity(&mut self, rows: usize) -> Result<(), Error> {
        let capacity = self.capacity();
        if rows <= capacity {
            return Ok(());
        }

        let missing = rows - capacity;
        let chunks = (missing + GROWTH_CHUNK_ROWS - 1) / GROWTH_CHUNK_ROWS;
        let extra = chunks * GROWTH_CHUNK_ROWS * self.byte_width;

        self.bytes.try_reserve_exact(extra)?;
        self.bytes.resize(self.bytes.len() + extra, 0);
        debug!(
            "row store grown from {} to {} rows",
            capacity,
            self.capacity()
        );
        Ok(())
    }

    /// Insert a packed row at `index`, shifting the rows at
    /// `index..rows` down by one.
    pub fn insert_row_at(&mut self, index: usize, row: &[u8]) -> Result<(), Error> {
        if index > self.rows {
            return Err(Error::RowOutOfRange {
                row: index,
                rows: self.rows,
            });
        }
        debug_assert_eq!(row.len(), self.byte_width);

        self.ensure_capacity(self.rows + 1)?;

        let width = self.byte_width;
        let offset = index * width;
        let end = self.rows * width;
        if offset < end {
            self.bytes.copy_within(offset..end, offset + width);
        }
        self.bytes[offset..offset + width].copy_from_slice(row);
        self.rows += 1;
        Ok(())
    }

    pub fn push_row(&mut self, row: &[u8]) -> Result<(), Error> {
        self.insert_row_at(self.rows, row)
    }
}

use log::{debug, info};

use crate::{
    error::Error,
    geometry,
    row::RowAssembler,
    store::RowStore,
};

/// Number of blank quiet-zone rows at the top of the header.
pub const QUIET_ROWS: usize = 4;

/// Number of clock rows following the quiet zone.
pub const CLOCK_ROWS: usize = 10;

/// Strip encoder.
///
/// Turns a byte sequence into a packed bitmap of framed rows. Each row
/// carries `density * 4` data bits, so a byte spans one or more rows, or
/// shares a row with its neighbours for larger densities.
///
/// The encoder is built once per input and density. The optional header
/// comes first, then data bytes are appended in order. Once done, the
/// bitmap is read through [`StripEncoder::bitmap`] and friends.
#[derive(Debug, Clone)]
pub struct StripEncoder {
    input: Vec<u8>,
    density: usize,
    row: RowAssembler,
    store: RowStore,
    row_cursor: usize,
    column_cursor: usize,
    header_done: bool,
    data_started: bool,
}

impl StripEncoder {
    /// Create an encoder for `input` at the given density.
    ///
    /// Fails with [`Error::InvalidDensity`] when `density` is 0.
    pub fn new(input: Vec<u8>, density: usize) -> Result<Self, Error> {
        if density < 1 {
            return Err(Error::InvalidDensity(density));
        }

        let row = RowAssembler::new(density);
        let store = RowStore::with_capacity(row.byte_width(), (input.len() * 2) / density)?;
        debug!(
            "strip encoder: density {}, {} columns, {} bytes per row",
            density,
            row.pixel_width(),
            row.byte_width()
        );

        Ok(StripEncoder {
            input,
            density,
            row,
            store,
            row_cursor: 0,
            column_cursor: 0,
            header_done: false,
            data_started: false,
        })
    }

    /// Emit the calibration header: [`QUIET_ROWS`] quiet-zone rows, then
    /// [`CLOCK_ROWS`] framed clock rows.
    ///
    /// Only allowed once, and only before the first data byte.
    pub fn emit_header(&mut self) -> Result<(), Error> {
        if self.header_done || self.data_started {
            return Err(Error::HeaderAfterData);
        }

        self.row.fill_quiet();
        for _ in 0..QUIET_ROWS {
            self.append_row()?;
            self.row_cursor += 1;
        }

        self.row.fill_clock();
        for _ in 0..CLOCK_ROWS {
            self.finalize_data_row()?;
        }

        self.header_done = true;
        debug!("header emitted, {} rows", self.store.rows());
        Ok(())
    }

    /// Append one byte, least significant bit first.
    pub fn append_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.data_started = true;

        let mut byte = byte;
        for _ in 0..8 {
            self.row.set_bit(self.column_cursor, byte & 1 != 0);
            byte >>= 1;
            self.column_cursor += 1;
            if self.column_cursor == self.row.data_slots() {
                self.finalize_data_row()?;
            }
        }
        Ok(())
    }

    /// Append every byte of `bytes` in order.
    ///
    /// Bits that do not fill a whole row stay pending until more bytes
    /// arrive or [`StripEncoder::finish`] is called.
    pub fn encode(&mut self, bytes: &[u8]) -> Result<(), Error> {
        for &byte in bytes {
            self.append_byte(byte)?;
        }
        Ok(())
    }

    /// Flush a partially filled row, padding the free slots with zero bits.
    ///
    /// Does nothing when no bits are pending.
    pub fn finish(&mut self) -> Result<(), Error> {
        if self.column_cursor == 0 {
            return Ok(());
        }

        debug!(
            "padding final row: {} of {} slots used",
            self.column_cursor,
            self.row.data_slots()
        );
        for slot in self.column_cursor..self.row.data_slots() {
            self.row.set_bit(slot, false);
        }
        self.finalize_data_row()
    }

    fn finalize_data_row(&mut self) -> Result<(), Error> {
        self.row.frame_data_row(self.row_cursor);
        self.append_row()?;
        self.row_cursor += 1;
        self.column_cursor = 0;
        Ok(())
    }

    fn append_row(&mut self) -> Result<(), Error> {
        let packed = self.row.pack()?;
        self.store.insert_row_at(self.row_cursor, &packed)
    }

    /// Packed rows, `byte_width` bytes each, top to bottom.
    pub fn bitmap(&self) -> &[u8] {
        self.store.as_bytes()
    }

    /// Number of rows written so far.
    pub fn rows(&self) -> usize {
        self.store.rows()
    }

    pub fn row(&self, index: usize) -> Option<&[u8]> {
        self.store.row(index)
    }

    pub fn byte_width(&self) -> usize {
        self.store.byte_width()
    }

    pub fn pixel_width(&self) -> usize {
        self.row.pixel_width()
    }

    pub fn density(&self) -> usize {
        self.density
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }

    /// Number of data bits waiting for a row to fill up.
    pub fn pending_bits(&self) -> usize {
        self.column_cursor
    }

    /// Whether the cell at (`row`, `column`) is dark. Cells outside the
    /// bitmap read as blank.
    pub fn is_dark(&self, row: usize, column: usize) -> bool {
        if column >= self.pixel_width() {
            return false;
        }
        match self.store.row(row) {
            Some(bytes) => bytes[column / 8] & (0x80 >> (column % 8)) != 0,
            None => false,
        }
    }

    /// Printed row height in millimetres for this strip.
    pub fn bit_height_mm(&self) -> f64 {
        geometry::bit_height_mm(self.pixel_width())
    }
}

/// Encoding options.
///
/// # Example
///
/// ```
/// use softstrip::Config;
///
/// let strip = Config::new(4).header(false).encode(b"Hello").unwrap();
/// assert_eq!(strip.rows(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Config {
    density: usize,
    header: bool,
    pad_final_row: bool,
}

impl Config {
    /// Initialize with the given density, a header and final row padding.
    pub fn new(density: usize) -> Config {
        Config {
            density,
            header: true,
            pad_final_row: true,
        }
    }

    /// Density as picked on a 1..=4 slider, doubled.
    pub fn from_slider(level: usize) -> Config {
        Config::new(level * 2)
    }

    pub fn header(self, header: bool) -> Self {
        Config { header, ..self }
    }

    pub fn pad_final_row(self, flag: bool) -> Self {
        Config {
            pad_final_row: flag,
            ..self
        }
    }

    pub fn density(&self) -> usize {
        self.density
    }

    /// Build a complete strip for `data`.
    pub fn encode(&self, data: &[u8]) -> Result<StripEncoder, Error> {
        let mut strip = StripEncoder::new(data.to_vec(), self.density)?;
        if self.header {
            strip.emit_header()?;
        }
        strip.encode(data)?;
        if self.pad_final_row {
            strip.finish()?;
        }

        info!(
            "encoded {} bytes into {} rows of {} columns",
            data.len(),
            strip.rows(),
            strip.pixel_width()
        );
        Ok(strip)
    }
}

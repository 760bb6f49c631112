//! Row assembly.
//!
//! A row is built in an unpacked scratch buffer holding one value per pixel
//! column, where `0` means an inked (dark) cell and `1` a blank one. The
//! buffer is framed and then packed into `byte_width` bytes, MSB first, with
//! the polarity flipped so that a packed `1` bit is a dark cell.
//!
//! Data row layout, for `w = pixel_width`:
//!
//! | columns            | content                          |
//! |--------------------|----------------------------------|
//! | 0, 1, 2            | start marker `0 0 1`             |
//! | 3, 4               | row parity and its complement    |
//! | 5, 6               | head checksum pair               |
//! | 7 .. w-7           | data bit pairs (bit, complement) |
//! | w-7, w-6           | tail checksum pair               |
//! | w-5 .. w-1         | end marker `1 1 0 0` + column 4  |

use crate::error::Error;

const INK: u8 = 0;
const BLANK: u8 = 1;

/// First scratch column holding data bit pairs.
const DATA_START: usize = 7;

/// Byte written into every data slot group of a clock row.
const CLOCK_BYTE: u8 = 0x80;

/// Number of pixel columns in a row for the given density.
pub fn pixel_width(density: usize) -> usize {
    14 + density * 8
}

/// Number of packed bytes per row for the given density.
pub fn byte_width(density: usize) -> usize {
    (pixel_width(density) + 7) / 8
}

/// Scratch buffer for the row being built.
#[derive(Debug, Clone)]
pub struct RowAssembler {
    density: usize,
    scratch: Vec<u8>,
}

impl RowAssembler {
    pub fn new(density: usize) -> Self {
        RowAssembler {
            density,
            scratch: vec![INK; pixel_width(density)],
        }
    }

    pub fn pixel_width(&self) -> usize {
        self.scratch.len()
    }

    pub fn byte_width(&self) -> usize {
        byte_width(self.density)
    }

    /// Number of data bit pairs a single row carries.
    pub fn data_slots(&self) -> usize {
        self.density * 4
    }

    #[cfg(test)]
    pub(crate) fn scratch(&self) -> &[u8] {
        &self.scratch
    }

    #[cfg(test)]
    pub(crate) fn scratch_mut(&mut self) -> &mut [u8] {
        &mut self.scratch
    }

    /// Write a data bit and its complement into pair `slot`.
    pub fn set_bit(&mut self, slot: usize, bit: bool) {
        let column = DATA_START + slot * 2;
        let value = bit as u8;
        self.scratch[column] = value;
        self.scratch[column + 1] = 1 - value;
    }

    /// Pack the scratch buffer, one bit per column, MSB first.
    ///
    /// Scratch `0` becomes a packed `1`. Columns past `pixel_width` in the
    /// last byte stay clear.
    pub fn pack(&self) -> Result<Vec<u8>, Error> {
        let mut packed = vec![0u8; self.byte_width()];

        for (column, &value) in self.scratch.iter().enumerate() {
            if value > BLANK {
                return Err(Error::InvalidPixelValue { column, value });
            }
            if value == INK {
                packed[column / 8] |= 0x80 >> (column % 8);
            }
        }

        Ok(packed)
    }

    /// Apply start/end markers, row parity and the checksum pairs for row
    /// number `row`. The data pairs must already be in place.
    pub fn frame_data_row(&mut self, row: usize) {
        let w = self.pixel_width();
        let buf = &mut self.scratch;

        buf[0] = INK;
        buf[1] = INK;
        buf[2] = BLANK;
        buf[3] = (row & 1) as u8;
        buf[4] = 1 - buf[3];

        buf[w - 5] = BLANK;
        buf[w - 4] = BLANK;
        buf[w - 3] = INK;
        buf[w - 2] = INK;
        buf[w - 1] = buf[4];

        // One accumulator across both passes: the tail pair sees the first
        // pass only, the head pair sees both.
        let mut parity: usize = 0;
        for pos in 0..self.density * 2 {
            parity += buf[pos * 4 + 7] as usize;
        }
        buf[w - 7] = (parity & 1) as u8;
        buf[w - 6] = 1 - buf[w - 7];

        for pos in 0..self.density * 2 {
            parity += buf[pos * 4 + 9] as usize;
        }
        buf[5] = (parity & 1) as u8;
        buf[6] = 1 - buf[5];
    }

    /// Fill the scratch buffer with the quiet-zone pattern.
    pub fn fill_quiet(&mut self) {
        let w = self.pixel_width();
        let buf = &mut self.scratch;

        for cell in buf.iter_mut() {
            *cell = BLANK;
        }
        for i in 0..2 {
            buf[i] = INK;
            buf[w - 4 + i] = INK;
        }
        for i in 0..6 {
            buf[4 + i] = INK;
            buf[w - 12 + i] = INK;
        }
        for i in 0..self.density.saturating_sub(4) {
            buf[12 + i * 4] = buf[13 + i * 4];
            buf[w - 16 - i * 4] = INK;
            buf[w - 15 - i * 4] = INK;
        }
    }

    /// Write the clock byte into every group of 8 data slots, clipped to
    /// the slots the row actually has.
    pub fn fill_clock(&mut self) {
        let slots = self.data_slots();
        for group in (0..slots).step_by(8) {
            let mut byte = CLOCK_BYTE;
            for slot in group..(group + 8).min(slots) {
                self.set_bit(slot, byte & 1 != 0);
                byte >>= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        for density in 1..=16 {
            let w = pixel_width(density);
            assert_eq!(w, 14 + 8 * density);
            assert_eq!(w % 2, 0);
            assert_eq!(byte_width(density), (w + 7) / 8);
        }
        assert_eq!(byte_width(1), 3);
        assert_eq!(byte_width(2), 4);
        assert_eq!(byte_width(4), 6);
    }

    #[test]
    fn test_pack_inverts_and_is_msb_first() {
        let mut row = RowAssembler::new(1);
        for cell in row.scratch_mut().iter_mut() {
            *cell = BLANK;
        }
        row.scratch_mut()[0] = INK;
        row.scratch_mut()[9] = INK;
        row.scratch_mut()[21] = INK;

        assert_eq!(row.pack().unwrap(), vec![0x80, 0x40, 0x04]);
    }

    #[test]
    fn test_pack_leaves_padding_clear() {
        // 22 columns, all ink: the last two bits of byte 2 are padding.
        let row = RowAssembler::new(1);
        assert_eq!(row.pack().unwrap(), vec![0xFF, 0xFF, 0xFC]);
    }

    #[test]
    fn test_pack_is_repeatable() {
        let mut row = RowAssembler::new(3);
        for slot in 0..row.data_slots() {
            row.set_bit(slot, slot % 3 == 0);
        }
        row.frame_data_row(7);
        assert_eq!(row.pack().unwrap(), row.pack().unwrap());
    }

    #[test]
    fn test_pack_rejects_invalid_value() {
        let mut row = RowAssembler::new(2);
        row.scratch_mut()[11] = 2;
        match row.pack() {
            Err(Error::InvalidPixelValue {
                column: 11,
                value: 2,
            }) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_set_bit_writes_complement() {
        let mut row = RowAssembler::new(1);
        row.set_bit(0, true);
        row.set_bit(3, false);
        assert_eq!(&row.scratch()[7..9], &[1, 0]);
        assert_eq!(&row.scratch()[13..15], &[0, 1]);
    }

    #[test]
    fn test_frame_markers_and_row_parity() {
        let mut row = RowAssembler::new(2);
        let w = row.pixel_width();

        row.frame_data_row(0);
        let even = row.scratch().to_vec();
        row.frame_data_row(1);
        let odd = row.scratch().to_vec();

        assert_eq!(&even[0..3], &[0, 0, 1]);
        assert_eq!(&even[3..5], &[0, 1]);
        assert_eq!(&odd[3..5], &[1, 0]);
        assert_eq!(&even[w - 5..w - 1], &[1, 1, 0, 0]);
        assert_eq!(even[w - 1], even[4]);
        assert_eq!(odd[w - 1], odd[4]);
    }

    #[test]
    fn test_checksum_uses_running_accumulator() {
        let density = 2;
        let mut row = RowAssembler::new(density);
        let w = row.pixel_width();
        // 0x41, LSB first: slots 0 and 6 carry a one.
        for slot in 0..row.data_slots() {
            row.set_bit(slot, slot == 0 || slot == 6);
        }
        row.frame_data_row(0);
        let buf = row.scratch();

        let first: usize = (0..density * 2).map(|p| buf[p * 4 + 7] as usize).sum();
        let second: usize = (0..density * 2).map(|p| buf[p * 4 + 9] as usize).sum();

        assert_eq!(buf[w - 7] as usize, first & 1);
        assert_eq!(buf[w - 6], 1 - buf[w - 7]);
        assert_eq!(buf[5] as usize, (first + second) & 1);
        assert_eq!(buf[6], 1 - buf[5]);
    }

    #[test]
    fn test_checksum_head_differs_from_independent_sum() {
        // First pass sums to 1, second pass to 0: an independent second sum
        // would give an even head parity, the running one gives odd.
        let mut row = RowAssembler::new(1);
        let w = row.pixel_width();
        for slot in 0..row.data_slots() {
            row.set_bit(slot, slot == 0);
        }
        row.frame_data_row(0);

        assert_eq!(row.scratch()[w - 7], 1);
        assert_eq!(row.scratch()[5], 1);
    }

    #[test]
    fn test_quiet_pattern() {
        let mut row = RowAssembler::new(2);
        row.fill_quiet();
        assert_eq!(row.pack().unwrap(), vec![0xCF, 0xC0, 0x3F, 0x30]);

        let mut row = RowAssembler::new(8);
        row.fill_quiet();
        assert_eq!(
            row.pack().unwrap(),
            vec![0xCF, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x33, 0x33, 0x3F, 0x30]
        );
    }

    #[test]
    fn test_clock_pattern() {
        let mut row = RowAssembler::new(2);
        row.fill_clock();
        let buf = row.scratch();
        for slot in 0..7 {
            assert_eq!(&buf[7 + slot * 2..9 + slot * 2], &[0, 1]);
        }
        assert_eq!(&buf[21..23], &[1, 0]);
    }

    #[test]
    fn test_clock_pattern_clipped_for_odd_density() {
        // 12 slots: the second group only gets four of its eight bits.
        let mut row = RowAssembler::new(3);
        row.fill_clock();
        let buf = row.scratch();
        assert_eq!(&buf[7 + 7 * 2..9 + 7 * 2], &[1, 0]);
        for slot in 8..12 {
            assert_eq!(&buf[7 + slot * 2..9 + slot * 2], &[0, 1]);
        }
    }
}

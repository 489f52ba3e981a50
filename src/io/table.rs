//! Lenient scanner for tab-separated numeric tables.
//!
//! The scanner reconstructs each number byte by byte: the integer part
//! accumulates as `value * 10 + digit`, the fractional part as
//! `digit / 10^k` with `k` counting places after the dot, and a minus
//! flag negates the value when it is stored. Cells are stored row-major
//! into a caller-provided destination slice.

use std::io::BufRead;

use crate::error::SimError;

/// Reads a `rows` by `cols` table of reals into `dest` (row-major).
///
/// Grammar and tolerance rules are described in the [module
/// documentation](crate::io). Cells the source does not provide keep
/// whatever value `dest` already holds, so callers pass a zero-filled
/// destination.
///
/// # Errors
///
/// Returns [`SimError::Format`] when a stored cell falls outside the
/// declared shape, and [`SimError::Io`] when the underlying reader
/// fails.
pub fn read_table<R: BufRead>(
    reader: R,
    cols: usize,
    rows: usize,
    dest: &mut [f64],
) -> Result<(), SimError> {
    debug_assert_eq!(dest.len(), cols * rows);

    let mut value = 0.0_f64;
    let mut frac_places = 0.0_f64;
    let mut negative = false;
    let mut col = 0_usize;
    let mut row = 0_usize;
    let mut prev = 0_u8;

    let mut store = |value: f64, negative: bool, col: usize, row: usize| -> Result<(), SimError> {
        if col >= cols || row >= rows {
            return Err(SimError::Format(format!(
                "table cell at row {}, column {} falls outside the declared {}x{} shape",
                row, col, rows, cols
            )));
        }
        dest[col + row * cols] = if negative { -value } else { value };
        Ok(())
    };

    for byte in reader.bytes() {
        let b = byte?;
        match b {
            b'0'..=b'9' if frac_places == 0.0 => {
                // Digit of the integer part
                value = value * 10.0 + f64::from(b - b'0');
            }
            b'0'..=b'9' => {
                // Digit after the decimal point
                value += f64::from(b - b'0') / 10f64.powf(frac_places);
                frac_places += 1.0;
            }
            b'-' => {
                negative = true;
            }
            b'.' => {
                frac_places += 1.0;
            }
            b'\n' if prev.is_ascii_digit() => {
                // End of a row of numbers
                store(value, negative, col, row)?;
                value = 0.0;
                frac_places = 0.0;
                negative = false;
                row += 1;
                col = 0;
            }
            b'\n' if prev == b'\t' => {
                // Row ended on a trailing tab: advance without storing
                value = 0.0;
                frac_places = 0.0;
                negative = false;
                row += 1;
                col = 0;
            }
            b'\t' if prev.is_ascii_digit() => {
                // End of a number within the row
                store(value, negative, col, row)?;
                value = 0.0;
                frac_places = 0.0;
                negative = false;
                col += 1;
            }
            _ => {
                // Unrecognised byte. Maybe benign. Skip.
            }
        }
        prev = b;
    }

    if prev.is_ascii_digit() {
        // Input ended without storing the final value
        store(value, negative, col, row)?;
    }

    Ok(())
}

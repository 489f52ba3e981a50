//! Scanner for the start-positions format.
//!
//! The source is a stream of unsigned integers separated by tabs or
//! newlines, read as alternating `x y` coordinates in population-major,
//! individual-minor order. The scanner shares the table reader's
//! leniency: bytes that are not digits or separators are skipped and do
//! not terminate the number being accumulated.

use std::io::BufRead;

use crate::error::SimError;

/// Reads up to `max_values` unsigned integers from the source.
///
/// Reading stops once `max_values` numbers have been taken, so trailing
/// content beyond the last individual is ignored. A final number pending
/// at end of input is kept, which may leave a coordinate pair half
/// assigned; the placement layer treats that as a caller error.
pub fn read_values<R: BufRead>(reader: R, max_values: usize) -> Result<Vec<usize>, SimError> {
    let mut values = Vec::with_capacity(max_values);
    let mut current = 0_u64;
    let mut prev = 0_u8;

    for byte in reader.bytes() {
        if values.len() == max_values {
            return Ok(values);
        }
        let b = byte?;
        match b {
            b'0'..=b'9' => {
                current = current * 10 + u64::from(b - b'0');
            }
            b'\n' | b'\t' if prev.is_ascii_digit() => {
                values.push(current as usize);
                current = 0;
            }
            _ => {
                // Skipped, as in the table scanner
            }
        }
        prev = b;
    }

    if prev.is_ascii_digit() && values.len() < max_values {
        // Input ended without storing the final value
        values.push(current as usize);
    }

    Ok(values)
}

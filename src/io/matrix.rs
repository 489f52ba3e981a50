//! Loading of square per-population-pair matrices.

use std::io::BufRead;

use crate::error::SimError;
use crate::io::table;
use crate::world::PairMatrix;

/// Reads an `no_pops` by `no_pops` matrix in the tab-separated table
/// format. Cells the source omits stay zero.
pub fn load<R: BufRead>(reader: R, no_pops: usize) -> Result<PairMatrix, SimError> {
    let mut matrix = PairMatrix::zeros(no_pops);
    table::read_table(reader, no_pops, no_pops, matrix.values_mut())?;
    Ok(matrix)
}

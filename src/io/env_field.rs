//! Loading of the environmental scalar field.
//!
//! The field shares the table grammar of the matrix loader but spans the
//! whole box: `box_height` rows of `box_width` cells. When no source is
//! configured the caller keeps a zero-filled [`EnvField`].

use std::io::BufRead;

use crate::error::SimError;
use crate::io::table;
use crate::world::EnvField;

/// Reads a `height` by `width` field in the tab-separated table format.
/// Cells the source omits stay zero.
pub fn load<R: BufRead>(reader: R, width: usize, height: usize) -> Result<EnvField, SimError> {
    let mut field = EnvField::zeros(width, height);
    table::read_table(reader, width, height, field.values_mut())?;
    Ok(field)
}

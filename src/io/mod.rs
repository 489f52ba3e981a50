//! # IO Module - Input Parsing for the Simulator
//!
//! This module owns every textual input format the simulator consumes:
//!
//! 1. **Numeric tables** (interaction matrix, averaging-radius matrix,
//!    environment field): rows separated by newline, cells separated by
//!    horizontal tab, each cell an optional leading minus, decimal
//!    digits, and an optional fractional part.
//! 2. **Start positions**: unsigned integers separated by tab or
//!    newline, listing `x y` pairs in population-major,
//!    individual-minor order.
//!
//! All loaders take any [`std::io::BufRead`] source, so tests drive them
//! with in-memory cursors and the binary with buffered files.
//!
//! ## Leniency
//!
//! The scanners are deliberately permissive: any byte that is not a
//! digit, minus, dot, tab or newline is skipped without terminating the
//! number being accumulated. A number only ends on a tab or newline that
//! immediately follows a digit, or at end of input. A newline preceded
//! by a tab advances the row without storing, so trailing tabs are
//! tolerated. What is *not* tolerated is a cell landing outside the
//! declared table shape: that is a [`SimError::Format`] and aborts
//! initialisation.
//!
//! [`SimError::Format`]: crate::error::SimError::Format

pub mod env_field;
pub mod matrix;
pub mod positions;
pub mod table;
